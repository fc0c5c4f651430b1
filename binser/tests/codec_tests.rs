//! End-to-end tests for the byte codec through its public API.

use std::io::Write;

use binser::*;

#[test]
fn int_and_float_roundtrip_at_every_offset() {
    let mut buffer = vec![0u8; 16];
    for offset in 0..=12 {
        write_int(-123_456, &mut buffer, offset);
        assert_eq!(read_int(&buffer, offset).unwrap(), -123_456);

        write_float(3.25, &mut buffer, offset);
        assert_eq!(read_float(&buffer, offset).unwrap(), 3.25);
    }
}

#[test]
fn vector_roundtrip() {
    let mut buffer = vec![0u8; 12];
    assert_eq!(write_vector(Vec3::new(1.0, 2.0, 3.0), &mut buffer, 0), 12);
    assert_eq!(read_vector(&buffer, 0).unwrap(), Vec3::new(1.0, 2.0, 3.0));
}

#[test]
fn rotator_roundtrip_keeps_pitch_roll_yaw_order() {
    let mut buffer = vec![0u8; 12];
    write_rotator(Rotator::new(10.0, 20.0, 30.0), &mut buffer, 0);

    let rotator = read_rotator(&buffer, 0).unwrap();
    assert_eq!(rotator.pitch, 10.0);
    assert_eq!(rotator.roll, 20.0);
    assert_eq!(rotator.yaw, 30.0);
}

#[test]
fn quat_roundtrip_is_exact() {
    let q = DQuat::from_rotation_y(0.3) * DQuat::from_rotation_x(1.1);
    let mut buffer = vec![0u8; 40];
    write_quat(q, &mut buffer, 8);
    assert_eq!(read_quat(&buffer, 8).unwrap(), q);
}

#[test]
fn transform_roundtrip_identity_rotation() {
    let transform = Transform::new(Vec3::new(1.0, 0.0, 0.0), DQuat::IDENTITY, Vec3::ONE);
    let mut buffer = vec![0u8; transform_byte_length()];
    assert_eq!(write_transform(&transform, &mut buffer, 0), 36);

    let read = read_transform(&buffer, 0).unwrap();
    assert_eq!(read.location, Vec3::new(1.0, 0.0, 0.0));
    assert_eq!(read.scale, Vec3::ONE);
    assert!(read.rotation.abs_diff_eq(DQuat::IDENTITY, 1e-9), "{:?}", read.rotation);
}

#[test]
fn transform_roundtrip_rotated() {
    let rotation = Rotator::new(10.0, 20.0, 30.0).to_quat();
    let transform = Transform::new(Vec3::new(-5.0, 2.5, 100.0), rotation, Vec3::new(2.0, 1.0, 0.5));
    let mut buffer = vec![0u8; 64];
    write_transform(&transform, &mut buffer, 20);

    let read = read_transform(&buffer, 20).unwrap();
    assert_eq!(read.location, transform.location);
    assert_eq!(read.scale, transform.scale);
    assert!(read.rotation.abs_diff_eq(rotation, 1e-5), "{:?}", read.rotation);
}

#[test]
fn write_at_or_past_end_leaves_buffer_unchanged() {
    let original: Vec<u8> = (0..12).collect();

    let mut buffer = original.clone();
    assert_eq!(write_vector(Vec3::splat(9.0), &mut buffer, 12), 0);
    assert_eq!(write_transform(&Transform::IDENTITY, &mut buffer, 100), 0);
    assert_eq!(write_quat(DQuat::IDENTITY, &mut buffer, usize::MAX), 0);
    assert_eq!(buffer, original);
}

#[test]
fn partial_write_stores_only_leading_bytes() {
    let original = vec![0xEEu8; 10];
    let mut buffer = original.clone();

    let value = Vec3::new(1.0, 2.0, 3.0);
    assert_eq!(write_vector(value, &mut buffer, 3), 7);

    let mut full = [0u8; 12];
    write_vector(value, &mut full, 0);
    assert_eq!(&buffer[..3], &original[..3]);
    assert_eq!(&buffer[3..], &full[..7]);
}

#[test]
fn partial_transform_write_drops_scale() {
    let transform = Transform::new(Vec3::new(1.0, 2.0, 3.0), DQuat::IDENTITY, Vec3::splat(4.0));
    let mut buffer = vec![0u8; 24];
    assert_eq!(write_transform(&transform, &mut buffer, 0), 24);
    assert_eq!(read_vector(&buffer, 0).unwrap(), transform.location);
    assert!(read_transform(&buffer, 0).is_err());
}

#[test]
fn read_past_end_is_an_error() {
    let buffer = vec![0u8; 35];
    assert_eq!(
        read_transform(&buffer, 0),
        Err(CodecError::OutOfBounds {
            offset: 0,
            needed: 36,
            len: 35
        })
    );
    assert!(read_quat(&buffer, 4).is_err());
    assert!(read_rotator(&buffer, 24).is_err());
    assert!(read_rotator(&buffer, 23).is_ok());
}

#[test]
fn int32_bytes_preserve_sign() {
    let bytes = int32_to_bytes(-1);
    assert_eq!(bytes.len(), 4);
    assert_eq!(bytes_to_int32(&bytes).unwrap(), -1);
}

#[test]
fn float_bytes_roundtrip() {
    let bytes = float_to_bytes(-273.15);
    assert_eq!(bytes.len(), 4);
    assert_eq!(bytes_to_float(&bytes).unwrap(), -273.15);
}

#[test]
fn scalar_helpers_match_offset_writes() {
    let mut buffer = vec![0u8; 4];
    write_float(42.0, &mut buffer, 0);
    assert_eq!(buffer, float_to_bytes(42.0));

    write_int(7, &mut buffer, 0);
    assert_eq!(buffer, int32_to_bytes(7));
}

#[test]
fn byte_lengths_match_written_sizes() {
    assert_eq!(vector3_byte_length(), 12);
    assert_eq!(rotator_byte_length(), 12);
    assert_eq!(quat_byte_length(), 32);
    assert_eq!(transform_byte_length(), 36);

    let mut buffer = vec![0u8; 64];
    assert_eq!(write_vector(Vec3::ONE, &mut buffer, 0), vector3_byte_length());
    assert_eq!(write_rotator(Rotator::ZERO, &mut buffer, 0), rotator_byte_length());
    assert_eq!(write_quat(DQuat::IDENTITY, &mut buffer, 0), quat_byte_length());
    assert_eq!(write_transform(&Transform::IDENTITY, &mut buffer, 0), transform_byte_length());
}

#[test]
fn strict_codec_from_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"write_policy = "strict""#).unwrap();
    writeln!(file, r#"quat_precision = "legacy""#).unwrap();

    let config = CodecConfig::load(file.path()).unwrap();
    assert_eq!(config.write_policy, WritePolicy::Strict);
    assert_eq!(config.quat_precision, QuatPrecision::Legacy);

    let codec = ByteCodec::new(config);
    let mut buffer = vec![0u8; 8];
    assert!(codec.write_quat(DQuat::IDENTITY, &mut buffer, 0).is_err());
    assert_eq!(buffer, vec![0u8; 8]);
    assert_eq!(codec.write_float(1.0, &mut buffer, 4), Ok(4));
}

#[test]
fn malformed_config_file_is_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "write_policy = [").unwrap();
    assert!(matches!(
        CodecConfig::load(file.path()),
        Err(ConfigError::Toml(_))
    ));
}
