//! Math types for binser
//!
//! Vectors and quaternions are glam types. The two types glam has no
//! counterpart for live here:
//! - [`Rotator`]: engine-style pitch/roll/yaw in degrees
//! - [`Transform`]: location + quaternion rotation + non-uniform scale
//!
//! Rotator/quaternion conversion follows the engine convention: angles in
//! degrees, pitch about Y, yaw about Z, roll about X.

use bytemuck::{Pod, Zeroable};
use glam::{DQuat, Vec3};
use serde::{Deserialize, Serialize};

const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// |z·x − w·y| above this is treated as gimbal lock (pitch = ±90°)
const SINGULARITY_THRESHOLD: f64 = 0.4999995;

/// Wrap an angle in degrees into (-180, 180]
#[inline]
pub fn normalize_axis(angle: f64) -> f64 {
    let mut angle = angle % 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    if angle > 180.0 {
        angle -= 360.0;
    }
    angle
}

/// Orientation as pitch/roll/yaw in degrees (POD type)
///
/// Field order is the wire order: pitch, roll, yaw. Not alphabetical and
/// not yaw-first.
///
/// Memory layout (12 bytes):
/// - pitch: rotation about the right axis (Y)
/// - roll: rotation about the forward axis (X)
/// - yaw: rotation about the up axis (Z)
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize, Pod, Zeroable,
)]
#[repr(C)]
pub struct Rotator {
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl Rotator {
    /// No rotation
    pub const ZERO: Self = Self {
        pitch: 0.0,
        roll: 0.0,
        yaw: 0.0,
    };

    /// Create from components in wire order
    pub const fn new(pitch: f32, roll: f32, yaw: f32) -> Self {
        Self { pitch, roll, yaw }
    }

    /// Components in wire order
    pub const fn to_array(self) -> [f32; 3] {
        [self.pitch, self.roll, self.yaw]
    }

    /// Convert to a unit quaternion
    pub fn to_quat(self) -> DQuat {
        let half = DEG_TO_RAD / 2.0;
        let (sp, cp) = (self.pitch as f64 * half).sin_cos();
        let (sy, cy) = (self.yaw as f64 * half).sin_cos();
        let (sr, cr) = (self.roll as f64 * half).sin_cos();

        DQuat::from_xyzw(
            cr * sp * sy - sr * cp * cy,
            -cr * sp * cy - sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Convert a quaternion to pitch/roll/yaw
    ///
    /// At gimbal lock pitch snaps to ±90 and roll absorbs the remaining
    /// rotation about the forward axis.
    pub fn from_quat(q: DQuat) -> Self {
        let singularity_test = q.z * q.x - q.w * q.y;
        let yaw_y = 2.0 * (q.w * q.z + q.x * q.y);
        let yaw_x = 1.0 - 2.0 * (q.y * q.y + q.z * q.z);

        let yaw = yaw_y.atan2(yaw_x) * RAD_TO_DEG;

        let (pitch, roll) = if singularity_test < -SINGULARITY_THRESHOLD {
            let roll = normalize_axis(-yaw - 2.0 * q.x.atan2(q.w) * RAD_TO_DEG);
            (-90.0, roll)
        } else if singularity_test > SINGULARITY_THRESHOLD {
            let roll = normalize_axis(yaw - 2.0 * q.x.atan2(q.w) * RAD_TO_DEG);
            (90.0, roll)
        } else {
            let pitch = (2.0 * singularity_test).asin() * RAD_TO_DEG;
            let roll = (-2.0 * (q.w * q.x + q.y * q.z))
                .atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y))
                * RAD_TO_DEG;
            (pitch, roll)
        };

        Self {
            pitch: pitch as f32,
            roll: roll as f32,
            yaw: yaw as f32,
        }
    }
}

impl From<DQuat> for Rotator {
    fn from(q: DQuat) -> Self {
        Self::from_quat(q)
    }
}

impl From<Rotator> for DQuat {
    fn from(r: Rotator) -> Self {
        r.to_quat()
    }
}

/// Location, rotation and non-uniform scale
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: Vec3,
    pub rotation: DQuat,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, no rotation, unit scale
    pub const IDENTITY: Self = Self {
        location: Vec3::ZERO,
        rotation: DQuat::IDENTITY,
        scale: Vec3::ONE,
    };

    pub const fn new(location: Vec3, rotation: DQuat, scale: Vec3) -> Self {
        Self {
            location,
            rotation,
            scale,
        }
    }

    /// Create with the rotation given as a [`Rotator`]
    pub fn from_rotator(location: Vec3, rotator: Rotator, scale: Vec3) -> Self {
        Self::new(location, rotator.to_quat(), scale)
    }

    /// Rotation as pitch/roll/yaw
    pub fn rotator(&self) -> Rotator {
        Rotator::from_quat(self.rotation)
    }
}
