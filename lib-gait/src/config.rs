use angles::QuatOrder;
use crate::error::ConfigError;
use crate::feedback::FeedbackPolicy;

/// Tuning for the four state gait phase detector.
///
/// Every threshold the detector compares against is a field here rather than
/// a literal, so a deployment can be tuned without rebuilding; the defaults
/// are the values the algorithm was validated with.
///
#[derive(Debug, Clone, Copy)]
pub struct DetectorConfig
{
    /// In Hz; update rate of the sensor loop.
    pub sample_rate: f32,

    /// In °/s; gyro magnitude below this while in swing counts towards a
    /// heel strike.
    pub heelstrike_threshold: f32,

    /// In °/s; gyro magnitude above this while in late stance is a toe-off.
    pub toeoff_threshold: f32,

    /// In seconds; how long the gyro magnitude must stay below the heel
    /// strike threshold before the swing actually ends.
    pub heelstrike_hold_time: f32,

    /// In seconds; stance duration assumed before the first stride completes.
    pub initial_stance_time: f32,

    /// In seconds; lower clamp for a measured stance duration.
    pub min_stance_time: f32,

    /// In seconds; upper clamp for a measured stance duration.
    pub max_stance_time: f32,

    /// Fraction of the last stance duration spent in early stance.
    pub middle_fraction: f32,

    /// Fraction of the last stance duration after which the stance counts as
    /// late.
    pub late_fraction: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            sample_rate: 100.0,
            heelstrike_threshold: 45.0,
            toeoff_threshold: 45.0,
            heelstrike_hold_time: 0.1,
            initial_stance_time: 0.6,
            min_stance_time: 0.4,
            max_stance_time: 2.0,
            middle_fraction: 0.25,
            late_fraction: 0.5,
        }
    }
}

/// Tuning for the feedback pulse scheduler.
///
#[derive(Debug, Clone, Copy)]
pub struct FeedbackConfig
{
    /// In seconds; how long one feedback pulse lasts.
    pub pulse_length: f32,

    /// Which phase transitions start a pulse.
    pub policy: FeedbackPolicy,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        FeedbackConfig {
            pulse_length: 1.0,
            policy: FeedbackPolicy::AllStancePhases,
        }
    }
}

/// Everything the per-foot pipelines need for one session.
///
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig
{
    /// Component order of raw quaternions at the input boundary.
    pub quat_order: QuatOrder,

    pub detector: DetectorConfig,

    pub feedback: FeedbackConfig,
}

impl SessionConfig
{
    /// In seconds; duration of one tick of the sensor loop.
    #[inline]
    pub fn tick_period(&self) -> f32 {
        1.0 / self.detector.sample_rate
    }

    /// Rejects configurations the pipelines cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.detector.sample_rate > 0.0) {
            return Err(ConfigError::NonPositiveSampleRate);
        }
        if !(self.feedback.pulse_length > 0.0) {
            return Err(ConfigError::NonPositivePulseLength);
        }
        Ok(())
    }
}
