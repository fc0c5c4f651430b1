//! Fixed-layout byte codec for engine value types
//!
//! Packs integers, floats, vectors, quaternions, rotators and transforms
//! into caller-owned byte buffers at caller-chosen offsets, and reads them
//! back. Every layout is little-endian with no padding; see
//! [`binser_shared::layout`] for the byte map.
//!
//! # Modules
//!
//! - [`packing`] - Generic and typed write/read at an offset
//! - [`scalar`] - Standalone 4-byte scalar conversions
//! - [`codec`] - [`ByteCodec`], the configured front-end
//! - [`config`] - TOML configuration for write policy and quaternion precision
//! - [`error`] - Error types
//!
//! # Example
//!
//! ```
//! use binser::{Rotator, read_rotator, write_rotator};
//!
//! let mut buffer = vec![0u8; 16];
//! write_rotator(Rotator::new(10.0, 20.0, 30.0), &mut buffer, 4);
//!
//! let rotator = read_rotator(&buffer, 4).unwrap();
//! assert_eq!(rotator, Rotator::new(10.0, 20.0, 30.0));
//!
//! // Writes clamp silently at the end of the buffer
//! assert_eq!(binser::write_int(-1, &mut buffer, 14), 2);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod packing;
pub mod scalar;

pub use codec::ByteCodec;
pub use config::{CodecConfig, QuatPrecision, WritePolicy};
pub use error::{CodecError, ConfigError};

// Re-export commonly used packing items
pub use packing::{
    FixedLayout, fits, read_float, read_int, read_quat, read_rotator, read_transform,
    read_value, read_vector, write_float, write_int, write_quat, write_rotator, write_transform,
    write_value, write_vector,
};
pub use scalar::{bytes_to_float, bytes_to_int32, float_to_bytes, int32_to_bytes};

// Re-export shared value types and layout helpers
pub use binser_shared::{
    DQuat, QUAT_SIZE, ROTATOR_SIZE, Rotator, TRANSFORM_SIZE, Transform, VECTOR3_SIZE, Vec3,
    layout, quat_byte_length, rotator_byte_length, transform_byte_length, vector3_byte_length,
};
