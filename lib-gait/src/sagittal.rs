use angles::{normalize_degrees, QuatOrder, Quaternion};
use cfg_if::cfg_if;

use crate::error::GaitError;

/// Converts raw orientation quaternions into a sagittal plane angle in
/// degrees, relative to the wearer's neutral posture.
///
/// The first valid quaternion is taken as the neutral reference and every
/// later sample is reported as a wrapped offset from it, so the output reads
/// as plantarflexion/dorsiflexion around zero no matter how the sensor was
/// strapped on. Calibration happens exactly once; invalid samples before it
/// do not consume the reference slot.
///
pub struct SagittalAngleEstimator
{
    order: QuatOrder,

    /// Neutral posture roll in degrees, captured from the first valid sample.
    reference_roll: Option<f32>,

    /// Most recently computed relative angle in degrees.
    last_angle: f32,

    /// Roll before reference subtraction, in degrees.
    #[cfg(feature = "debug")]
    pub raw_roll: f32,
}

impl SagittalAngleEstimator {

    #[inline]
    pub fn new(order: QuatOrder) -> Self {
        SagittalAngleEstimator {
            order,
            reference_roll: None,
            last_angle: 0.0,
            #[cfg(feature = "debug")]
            raw_roll: 0.0,
        }
    }

    /// Feed one quaternion sample, returns the sagittal angle in degrees.
    ///
    /// `quat` must hold exactly 4 components in the configured order. On an
    /// invalid sample the estimator state (reference included) is untouched.
    ///
    pub fn update(&mut self, quat: &[f32]) -> Result<f32, GaitError> {
        let roll = Quaternion::from_components(quat, self.order)?
            .roll_degrees()?;

        cfg_if!{ if #[cfg(feature = "debug")] {
            self.raw_roll = roll;
        }}

        let reference = match self.reference_roll {
            Some(reference) => reference,
            None => {
                self.reference_roll = Some(roll);
                roll
            },
        };

        self.last_angle = normalize_degrees(roll - reference);
        Ok(self.last_angle)
    }

    /// Last computed sagittal angle in degrees.
    #[inline]
    pub fn angle(&self) -> f32 {
        self.last_angle
    }

    /// Neutral posture roll in degrees, `None` until calibrated.
    #[inline]
    pub fn reference(&self) -> Option<f32> {
        self.reference_roll
    }
}
