use crate::config::SessionConfig;
use crate::detector::GaitPhaseDetector;
use crate::error::{ConfigError, GaitError};
use crate::feedback::{Command, FeedbackScheduler};
use crate::phase::{GaitPhase, PhaseTransition};
use crate::sagittal::SagittalAngleEstimator;

/// Which foot a sample or pipeline belongs to.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Foot
{
    Left,
    Right,
}

impl Foot {

    /// Lowercase name for logs and CSV exports.
    pub fn label(&self) -> &'static str {
        match self {
            Foot::Left => "left",
            Foot::Right => "right",
        }
    }
}

/// Everything one pipeline tick produced.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutput
{
    /// Sagittal angle in degrees, relative to the calibrated neutral.
    pub angle: f32,
    /// Phase pair for this tick.
    pub transition: PhaseTransition,
    /// Actuator intent for this tick.
    pub command: Command,
}

impl TickOutput {

    /// Phase the detector ended this tick in.
    #[inline]
    pub fn phase(&self) -> GaitPhase {
        self.transition.current
    }
}

/// Estimator, detector and scheduler for a single foot, fed in lockstep.
///
pub struct FootPipeline
{
    estimator: SagittalAngleEstimator,
    detector: GaitPhaseDetector,
    scheduler: FeedbackScheduler,

    /// Wall time one tick covers, in seconds.
    tick_period: f32,
}

impl FootPipeline {

    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(FootPipeline {
            estimator: SagittalAngleEstimator::new(config.quat_order),
            detector: GaitPhaseDetector::new(config.detector),
            scheduler: FeedbackScheduler::new(config.feedback),
            tick_period: config.tick_period(),
        })
    }

    /// Feed one synchronized sample pair through all three components.
    ///
    /// `quat` is the orientation (4 components in the configured order),
    /// `gyro` the angular rate in °/s (3 components). On an error the
    /// failing stage and everything after it are untouched; stages that
    /// already ran this tick keep their new state.
    ///
    pub fn tick(&mut self, quat: &[f32], gyro: &[f32]) -> Result<TickOutput, GaitError> {
        let angle = self.estimator.update(quat)?;
        let transition = self.detector.update(gyro)?;
        let command = self.scheduler.decide(transition, self.tick_period);

        Ok(TickOutput { angle, transition, command })
    }

    #[inline]
    pub fn estimator(&self) -> &SagittalAngleEstimator {
        &self.estimator
    }

    #[inline]
    pub fn detector(&self) -> &GaitPhaseDetector {
        &self.detector
    }

    #[inline]
    pub fn scheduler(&self) -> &FeedbackScheduler {
        &self.scheduler
    }
}

/// Two independent foot pipelines behind one interface.
///
/// The feet share a configuration but nothing else: each calibrates its own
/// neutral posture, tracks its own phase and schedules its own pulses, so
/// dropped samples on one side never skew the other.
///
pub struct Session
{
    left: FootPipeline,
    right: FootPipeline,
}

impl Session {

    pub fn new(config: &SessionConfig) -> Result<Self, ConfigError> {
        Ok(Session {
            left: FootPipeline::new(config)?,
            right: FootPipeline::new(config)?,
        })
    }

    /// Feed one sample pair to the given foot's pipeline.
    pub fn tick(&mut self, foot: Foot, quat: &[f32], gyro: &[f32]) -> Result<TickOutput, GaitError> {
        self.pipeline_mut(foot).tick(quat, gyro)
    }

    pub fn pipeline(&self, foot: Foot) -> &FootPipeline {
        match foot {
            Foot::Left => &self.left,
            Foot::Right => &self.right,
        }
    }

    pub fn pipeline_mut(&mut self, foot: Foot) -> &mut FootPipeline {
        match foot {
            Foot::Left => &mut self.left,
            Foot::Right => &mut self.right,
        }
    }
}
