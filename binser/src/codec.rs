//! Configured codec front-end
//!
//! [`ByteCodec`] carries a [`CodecConfig`] and applies its write policy and
//! quaternion precision to every call. It holds no other state; a default
//! `ByteCodec` behaves exactly like the free functions in
//! [`crate::packing`].

use binser_shared::{Rotator, Transform};
use glam::{DQuat, Vec3};

use crate::config::{CodecConfig, QuatPrecision, WritePolicy};
use crate::error::CodecError;
use crate::packing::{FixedLayout, fits, read_value, write_value};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ByteCodec {
    config: CodecConfig,
}

impl ByteCodec {
    pub const fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub const fn config(&self) -> CodecConfig {
        self.config
    }

    /// Write `value` at `start_offset`
    ///
    /// Under [`WritePolicy::Clamp`] this never fails and returns the number of
    /// bytes that fit. Under [`WritePolicy::Strict`] a value that does not fit
    /// leaves the buffer unchanged and returns `OutOfBounds`.
    pub fn write<T: FixedLayout>(
        &self,
        value: &T,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        if self.config.write_policy == WritePolicy::Strict
            && !fits(buffer.len(), start_offset, T::SIZE)
        {
            return Err(CodecError::OutOfBounds {
                offset: start_offset,
                needed: T::SIZE,
                len: buffer.len(),
            });
        }
        Ok(write_value(value, buffer, start_offset))
    }

    /// Read a `T` at `start_offset`
    ///
    /// Quaternions read through this method are not narrowed; use
    /// [`ByteCodec::read_quat`] to honor [`QuatPrecision`].
    pub fn read<T: FixedLayout>(
        &self,
        buffer: &[u8],
        start_offset: usize,
    ) -> Result<T, CodecError> {
        read_value(buffer, start_offset)
    }

    pub fn write_int(
        &self,
        value: i32,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        self.write(&value, buffer, start_offset)
    }

    pub fn read_int(&self, buffer: &[u8], start_offset: usize) -> Result<i32, CodecError> {
        self.read(buffer, start_offset)
    }

    pub fn write_float(
        &self,
        value: f32,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        self.write(&value, buffer, start_offset)
    }

    pub fn read_float(&self, buffer: &[u8], start_offset: usize) -> Result<f32, CodecError> {
        self.read(buffer, start_offset)
    }

    pub fn write_vector(
        &self,
        value: Vec3,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        self.write(&value, buffer, start_offset)
    }

    pub fn read_vector(&self, buffer: &[u8], start_offset: usize) -> Result<Vec3, CodecError> {
        self.read(buffer, start_offset)
    }

    pub fn write_quat(
        &self,
        value: DQuat,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        self.write(&value, buffer, start_offset)
    }

    /// Read a quaternion with the configured [`QuatPrecision`]
    pub fn read_quat(&self, buffer: &[u8], start_offset: usize) -> Result<DQuat, CodecError> {
        let q: DQuat = self.read(buffer, start_offset)?;
        let precision = self.config.quat_precision;
        if precision == QuatPrecision::Full {
            return Ok(q);
        }
        Ok(DQuat::from_xyzw(
            precision.apply(q.x),
            precision.apply(q.y),
            precision.apply(q.z),
            precision.apply(q.w),
        ))
    }

    pub fn write_rotator(
        &self,
        value: Rotator,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        self.write(&value, buffer, start_offset)
    }

    pub fn read_rotator(&self, buffer: &[u8], start_offset: usize) -> Result<Rotator, CodecError> {
        self.read(buffer, start_offset)
    }

    pub fn write_transform(
        &self,
        value: &Transform,
        buffer: &mut [u8],
        start_offset: usize,
    ) -> Result<usize, CodecError> {
        self.write(value, buffer, start_offset)
    }

    /// Read a transform; its rotation is rebuilt from a stored rotator, so
    /// [`QuatPrecision`] does not apply
    pub fn read_transform(
        &self,
        buffer: &[u8],
        start_offset: usize,
    ) -> Result<Transform, CodecError> {
        self.read(buffer, start_offset)
    }
}
