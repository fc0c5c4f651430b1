//! Shared value types and byte layouts for binser.
//!
//! # Modules
//!
//! - [`math`] - Rotator and Transform, rotator/quaternion conversion
//! - [`layout`] - Encoded sizes and field offsets for every value type

pub mod layout;
pub mod math;

pub use glam::{DQuat, Vec3};
pub use layout::{
    DOUBLE_SIZE, FLOAT_SIZE, INT32_SIZE, MAX_VALUE_SIZE, QUAT_SIZE, ROTATOR_SIZE,
    TRANSFORM_LOCATION_OFFSET, TRANSFORM_ROTATION_OFFSET, TRANSFORM_SCALE_OFFSET, TRANSFORM_SIZE,
    VECTOR3_SIZE, quat_byte_length, rotator_byte_length, transform_byte_length,
    vector3_byte_length,
};
pub use math::{Rotator, Transform, normalize_axis};
