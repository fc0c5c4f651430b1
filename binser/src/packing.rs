//! Fixed-layout value packing
//!
//! Copies the little-endian bytes of a value into a caller-owned buffer at a
//! start offset, and reads them back:
//! - writes clamp silently at the end of the buffer
//! - reads are bounds-checked and fail with [`CodecError::OutOfBounds`]
//!
//! For sizes and field offsets, see `binser_shared::layout`.

use binser_shared::{
    DOUBLE_SIZE, FLOAT_SIZE, INT32_SIZE, MAX_VALUE_SIZE, QUAT_SIZE, ROTATOR_SIZE, Rotator,
    TRANSFORM_LOCATION_OFFSET, TRANSFORM_ROTATION_OFFSET, TRANSFORM_SCALE_OFFSET, TRANSFORM_SIZE,
    Transform, VECTOR3_SIZE,
};
use glam::{DQuat, Vec3};

use crate::error::CodecError;

/// A value with a fixed encoded size.
///
/// `encode_into` and `decode_from` work on slices of exactly [`Self::SIZE`]
/// bytes; the buffer-level functions in this module handle offsets and
/// bounds.
pub trait FixedLayout: Sized {
    /// Encoded size in bytes (at most `MAX_VALUE_SIZE`).
    const SIZE: usize;

    /// Write the encoding into `out[..Self::SIZE]`.
    fn encode_into(&self, out: &mut [u8]);

    /// Read a value from `bytes[..Self::SIZE]`.
    fn decode_from(bytes: &[u8]) -> Self;
}

// ============================================================================
// Field Helpers
// ============================================================================

#[inline]
fn put_f32(out: &mut [u8], at: usize, value: f32) {
    out[at..at + FLOAT_SIZE].copy_from_slice(&value.to_le_bytes());
}

#[inline]
fn get_f32(bytes: &[u8], at: usize) -> f32 {
    f32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
}

#[inline]
fn put_f64(out: &mut [u8], at: usize, value: f64) {
    out[at..at + DOUBLE_SIZE].copy_from_slice(&value.to_le_bytes());
}

#[inline]
fn get_f64(bytes: &[u8], at: usize) -> f64 {
    let mut raw = [0u8; DOUBLE_SIZE];
    raw.copy_from_slice(&bytes[at..at + DOUBLE_SIZE]);
    f64::from_le_bytes(raw)
}

// ============================================================================
// Scalars
// ============================================================================

impl FixedLayout for i32 {
    const SIZE: usize = INT32_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        out[..INT32_SIZE].copy_from_slice(&self.to_le_bytes());
    }

    fn decode_from(bytes: &[u8]) -> Self {
        i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl FixedLayout for u32 {
    const SIZE: usize = INT32_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        out[..INT32_SIZE].copy_from_slice(&self.to_le_bytes());
    }

    fn decode_from(bytes: &[u8]) -> Self {
        u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
    }
}

impl FixedLayout for f32 {
    const SIZE: usize = FLOAT_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        put_f32(out, 0, *self);
    }

    fn decode_from(bytes: &[u8]) -> Self {
        get_f32(bytes, 0)
    }
}

impl FixedLayout for f64 {
    const SIZE: usize = DOUBLE_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        put_f64(out, 0, *self);
    }

    fn decode_from(bytes: &[u8]) -> Self {
        get_f64(bytes, 0)
    }
}

// ============================================================================
// Composites
// ============================================================================

impl FixedLayout for Vec3 {
    const SIZE: usize = VECTOR3_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        for (i, v) in self.to_array().into_iter().enumerate() {
            put_f32(out, i * FLOAT_SIZE, v);
        }
    }

    fn decode_from(bytes: &[u8]) -> Self {
        Vec3::new(
            get_f32(bytes, 0),
            get_f32(bytes, FLOAT_SIZE),
            get_f32(bytes, FLOAT_SIZE * 2),
        )
    }
}

impl FixedLayout for DQuat {
    const SIZE: usize = QUAT_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        for (i, v) in self.to_array().into_iter().enumerate() {
            put_f64(out, i * DOUBLE_SIZE, v);
        }
    }

    fn decode_from(bytes: &[u8]) -> Self {
        DQuat::from_xyzw(
            get_f64(bytes, 0),
            get_f64(bytes, DOUBLE_SIZE),
            get_f64(bytes, DOUBLE_SIZE * 2),
            get_f64(bytes, DOUBLE_SIZE * 3),
        )
    }
}

impl FixedLayout for Rotator {
    const SIZE: usize = ROTATOR_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        for (i, v) in self.to_array().into_iter().enumerate() {
            put_f32(out, i * FLOAT_SIZE, v);
        }
    }

    fn decode_from(bytes: &[u8]) -> Self {
        Rotator::new(
            get_f32(bytes, 0),
            get_f32(bytes, FLOAT_SIZE),
            get_f32(bytes, FLOAT_SIZE * 2),
        )
    }
}

/// Rotation goes over the wire as a [`Rotator`], not a quaternion.
impl FixedLayout for Transform {
    const SIZE: usize = TRANSFORM_SIZE;

    fn encode_into(&self, out: &mut [u8]) {
        self.location
            .encode_into(&mut out[TRANSFORM_LOCATION_OFFSET..TRANSFORM_ROTATION_OFFSET]);
        self.rotator()
            .encode_into(&mut out[TRANSFORM_ROTATION_OFFSET..TRANSFORM_SCALE_OFFSET]);
        self.scale
            .encode_into(&mut out[TRANSFORM_SCALE_OFFSET..TRANSFORM_SIZE]);
    }

    fn decode_from(bytes: &[u8]) -> Self {
        Transform::new(
            Vec3::decode_from(&bytes[TRANSFORM_LOCATION_OFFSET..]),
            Rotator::decode_from(&bytes[TRANSFORM_ROTATION_OFFSET..]).to_quat(),
            Vec3::decode_from(&bytes[TRANSFORM_SCALE_OFFSET..]),
        )
    }
}

// ============================================================================
// Buffer Access
// ============================================================================

/// Whether `size` bytes starting at `start_offset` lie inside a buffer of `len` bytes
#[inline]
pub fn fits(len: usize, start_offset: usize, size: usize) -> bool {
    start_offset
        .checked_add(size)
        .is_some_and(|end| end <= len)
}

/// Borrow `needed` bytes at `offset`, or report how far short the buffer is
pub(crate) fn checked_range(
    buffer: &[u8],
    offset: usize,
    needed: usize,
) -> Result<&[u8], CodecError> {
    offset
        .checked_add(needed)
        .and_then(|end| buffer.get(offset..end))
        .ok_or(CodecError::OutOfBounds {
            offset,
            needed,
            len: buffer.len(),
        })
}

/// Write `value` into `buffer` at `start_offset`, clamping at the buffer end
///
/// Bytes that would land at or past `buffer.len()` are dropped; a start
/// offset at or past the end writes nothing. The buffer is never resized.
///
/// Returns the number of bytes written.
pub fn write_value<T: FixedLayout>(value: &T, buffer: &mut [u8], start_offset: usize) -> usize {
    const { assert!(T::SIZE <= MAX_VALUE_SIZE) };

    let len = buffer.len();
    if start_offset >= len {
        tracing::trace!(start_offset, len, size = T::SIZE, "Write past end of buffer skipped");
        return 0;
    }

    let mut scratch = [0u8; MAX_VALUE_SIZE];
    value.encode_into(&mut scratch[..T::SIZE]);

    let written = T::SIZE.min(len - start_offset);
    buffer[start_offset..start_offset + written].copy_from_slice(&scratch[..written]);

    if written < T::SIZE {
        tracing::trace!(
            start_offset,
            len,
            size = T::SIZE,
            written,
            "Write truncated at end of buffer"
        );
    }

    written
}

/// Read a `T` from `buffer` at `start_offset`
pub fn read_value<T: FixedLayout>(buffer: &[u8], start_offset: usize) -> Result<T, CodecError> {
    checked_range(buffer, start_offset, T::SIZE).map(T::decode_from)
}

// ============================================================================
// Typed Operations
// ============================================================================

/// Write an `i32` (4 bytes)
#[inline]
pub fn write_int(value: i32, buffer: &mut [u8], start_offset: usize) -> usize {
    write_value(&value, buffer, start_offset)
}

/// Read an `i32` (4 bytes)
#[inline]
pub fn read_int(buffer: &[u8], start_offset: usize) -> Result<i32, CodecError> {
    read_value(buffer, start_offset)
}

/// Write an `f32` (4 bytes)
#[inline]
pub fn write_float(value: f32, buffer: &mut [u8], start_offset: usize) -> usize {
    write_value(&value, buffer, start_offset)
}

/// Read an `f32` (4 bytes)
#[inline]
pub fn read_float(buffer: &[u8], start_offset: usize) -> Result<f32, CodecError> {
    read_value(buffer, start_offset)
}

/// Write a vector as x, y, z f32 (12 bytes)
#[inline]
pub fn write_vector(value: Vec3, buffer: &mut [u8], start_offset: usize) -> usize {
    write_value(&value, buffer, start_offset)
}

#[inline]
pub fn read_vector(buffer: &[u8], start_offset: usize) -> Result<Vec3, CodecError> {
    read_value(buffer, start_offset)
}

/// Write a quaternion as x, y, z, w f64 (32 bytes)
#[inline]
pub fn write_quat(value: DQuat, buffer: &mut [u8], start_offset: usize) -> usize {
    write_value(&value, buffer, start_offset)
}

/// Read a quaternion at full f64 precision
#[inline]
pub fn read_quat(buffer: &[u8], start_offset: usize) -> Result<DQuat, CodecError> {
    read_value(buffer, start_offset)
}

/// Write a rotator as pitch, roll, yaw f32 (12 bytes)
#[inline]
pub fn write_rotator(value: Rotator, buffer: &mut [u8], start_offset: usize) -> usize {
    write_value(&value, buffer, start_offset)
}

#[inline]
pub fn read_rotator(buffer: &[u8], start_offset: usize) -> Result<Rotator, CodecError> {
    read_value(buffer, start_offset)
}

/// Write a transform as location, rotator, scale (36 bytes)
#[inline]
pub fn write_transform(value: &Transform, buffer: &mut [u8], start_offset: usize) -> usize {
    write_value(value, buffer, start_offset)
}

#[inline]
pub fn read_transform(buffer: &[u8], start_offset: usize) -> Result<Transform, CodecError> {
    read_value(buffer, start_offset)
}
