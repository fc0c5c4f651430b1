//! Standalone 4-byte scalar conversions
//!
//! Unlike the offset-based functions in [`crate::packing`], these build a
//! fresh buffer or read from the start of one.

use crate::error::CodecError;
use crate::packing::read_value;

/// Encode an `f32` into a new 4-byte buffer
pub fn float_to_bytes(value: f32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Encode an `i32` into a new 4-byte buffer
pub fn int32_to_bytes(value: i32) -> Vec<u8> {
    value.to_le_bytes().to_vec()
}

/// Decode an `f32` from the first 4 bytes
pub fn bytes_to_float(bytes: &[u8]) -> Result<f32, CodecError> {
    read_value(bytes, 0)
}

/// Decode an `i32` from the first 4 bytes
pub fn bytes_to_int32(bytes: &[u8]) -> Result<i32, CodecError> {
    read_value(bytes, 0)
}
