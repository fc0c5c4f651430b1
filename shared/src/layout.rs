//! Byte layouts for every encoded value type.
//!
//! Single source of truth for sizes and field offsets. The codec derives
//! every read and write range from these constants, so the length helpers
//! below always agree with what actually lands in a buffer.
//!
//! # Layout
//! ```text
//! Int32       0x00: i32                                  (4 bytes)
//! Float       0x00: f32                                  (4 bytes)
//! Vector3     0x00: x f32, 0x04: y f32, 0x08: z f32      (12 bytes)
//! Quaternion  0x00: x f64, 0x08: y f64,
//!             0x10: z f64, 0x18: w f64                   (32 bytes)
//! Rotator     0x00: pitch f32, 0x04: roll f32,
//!             0x08: yaw f32                              (12 bytes)
//! Transform   0x00: location Vector3
//!             0x0C: rotation Rotator
//!             0x18: scale Vector3                        (36 bytes)
//! ```
//!
//! All multi-byte fields are little-endian with no padding.

// ============================================================================
// Scalar Sizes
// ============================================================================

/// Encoded size of an `i32`
pub const INT32_SIZE: usize = 4;

/// Encoded size of an `f32`
pub const FLOAT_SIZE: usize = 4;

/// Encoded size of an `f64` (quaternion component)
pub const DOUBLE_SIZE: usize = 8;

// ============================================================================
// Composite Sizes
// ============================================================================

/// Vector3: 3 × f32
pub const VECTOR3_SIZE: usize = FLOAT_SIZE * 3;

/// Quaternion: 4 × f64
pub const QUAT_SIZE: usize = DOUBLE_SIZE * 4;

/// Rotator: 3 × f32 (pitch, roll, yaw)
pub const ROTATOR_SIZE: usize = FLOAT_SIZE * 3;

/// Transform: location + rotation + scale
pub const TRANSFORM_SIZE: usize = VECTOR3_SIZE + ROTATOR_SIZE + VECTOR3_SIZE;

/// Largest encoded value, used to size scratch space
pub const MAX_VALUE_SIZE: usize = TRANSFORM_SIZE;

// ============================================================================
// Transform Field Offsets
// ============================================================================

pub const TRANSFORM_LOCATION_OFFSET: usize = 0;
pub const TRANSFORM_ROTATION_OFFSET: usize = TRANSFORM_LOCATION_OFFSET + VECTOR3_SIZE;
pub const TRANSFORM_SCALE_OFFSET: usize = TRANSFORM_ROTATION_OFFSET + ROTATOR_SIZE;

// ============================================================================
// Length Helpers
// ============================================================================

/// Byte length of an encoded Vector3
#[inline]
pub const fn vector3_byte_length() -> usize {
    VECTOR3_SIZE
}

/// Byte length of an encoded Rotator
#[inline]
pub const fn rotator_byte_length() -> usize {
    ROTATOR_SIZE
}

/// Byte length of an encoded quaternion
#[inline]
pub const fn quat_byte_length() -> usize {
    QUAT_SIZE
}

/// Byte length of an encoded Transform
///
/// The rotation is stored as a [`crate::Rotator`], not a quaternion, so this
/// is 36 rather than 12 + 32 + 12.
#[inline]
pub const fn transform_byte_length() -> usize {
    TRANSFORM_SIZE
}
