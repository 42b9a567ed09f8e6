use crate::*;

/// Position of the scalar (w) component in a raw 4 element quaternion.
///
/// Sensor hosts disagree on this: some stream `[w, x, y, z]`, others
/// `[x, y, z, w]`. The order has to be stated explicitly wherever raw
/// components cross a boundary, never assumed.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuatOrder {
    /// Components are ordered `[w, x, y, z]`.
    #[default]
    ScalarFirst,
    /// Components are ordered `[x, y, z, w]`.
    ScalarLast,
}

#[derive(Debug, Clone, Copy)]
pub struct Quaternion
{
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 4]> for Quaternion {
    fn from(values: [f32; 4]) -> Self {
        Self {
            w: values[0],
            x: values[1],
            y: values[2],
            z: values[3],
        }
    }
}

impl Quaternion
{
    /// Create a new quaternion with the given values.
    ///
    pub fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Quaternion { w, x, y, z }
    }

    /// Returns the identity quaternion (no rotation)
    ///
    pub fn identity() -> Self {
        Quaternion {
            w: 1.0,
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    /// Builds a quaternion from raw components in the given order.
    ///
    /// Fails with [`AngleError::InvalidQuaternion`] unless the slice holds
    /// exactly 4 values.
    ///
    pub fn from_components(values: &[f32], order: QuatOrder) -> Result<Self, AngleError> {
        if values.len() != 4 {
            return Err(AngleError::InvalidQuaternion);
        }
        Ok(match order {
            QuatOrder::ScalarFirst => Quaternion::new(values[0], values[1], values[2], values[3]),
            QuatOrder::ScalarLast => Quaternion::new(values[3], values[0], values[1], values[2]),
        })
    }

    /// Get the magnitude of the quaternion.
    ///
    #[inline]
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z)
    }

    /// Scale the quaternion to a unit quaternion.
    ///
    /// A quaternion with zero or non-finite magnitude does not describe a
    /// rotation, so normalizing it fails with
    /// [`AngleError::InvalidQuaternion`].
    ///
    pub fn try_normalize(&self) -> Result<Quaternion, AngleError> {
        let magnitude_2 = self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z;
        if magnitude_2 == 0.0 || !magnitude_2.is_finite() {
            return Err(AngleError::InvalidQuaternion);
        }
        let magnitude = libm::sqrtf(magnitude_2);
        Ok(Quaternion {
            w: self.w / magnitude,
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        })
    }

    /// Rotation around the X-axis in degrees, wrapped to [-180, 180).
    ///
    /// This is the third angle of the intrinsic Z-Y-X Euler decomposition of
    /// the (normalized) quaternion. With a foot mounted sensor the X-axis
    /// runs across the foot, so this angle is the sagittal-plane tilt:
    /// positive for toes up, negative for toes down.
    ///
    pub fn roll_degrees(&self) -> Result<f32, AngleError> {
        let angles = EulerAngles::from(&self.try_normalize()?);
        Ok(normalize_degrees(angles.roll * RAD_TO_DEG))
    }

    /// Approximate equality check with a given tolerance.
    ///
    pub fn approx_eq(&self, other: &Quaternion, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
            && libm::fabsf(self.w - other.w) <= tol
    }
}

impl From<&EulerAngles> for Quaternion {
    fn from(a: &EulerAngles) -> Self {
        let cy = libm::cosf(a.yaw * 0.5);
        let sy = libm::sinf(a.yaw * 0.5);
        let cp = libm::cosf(a.pitch * 0.5);
        let sp = libm::sinf(a.pitch * 0.5);
        let cr = libm::cosf(a.roll * 0.5);
        let sr = libm::sinf(a.roll * 0.5);

        Quaternion {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }
}

impl From<EulerAngles> for Quaternion {
    fn from(angles: EulerAngles) -> Self {
        Quaternion::from(&angles)
    }
}
