use angles::Vector;
use cfg_if::cfg_if;

use crate::config::DetectorConfig;
use crate::error::GaitError;
use crate::phase::{GaitPhase, PhaseTransition};

/// Threshold based gait phase state machine driven by gyroscope magnitude.
///
/// Swing ends when the foot has been quiet (magnitude under the heel strike
/// threshold) for an unbroken run of ticks spanning the configured hold
/// time; stance is split into early/middle/late by elapsed tick counts and
/// ends when the magnitude spikes over the toe-off threshold. Each detected
/// toe-off re-measures the stance duration and rescales the middle/late
/// boundaries to it, so the split keeps tracking the wearer's cadence.
///
pub struct GaitPhaseDetector
{
    config: DetectorConfig,

    phase: GaitPhase,
    previous_phase: GaitPhase,

    /// Completed heel strikes since construction.
    step_count: u32,

    /// Consecutive swing ticks under the heel strike threshold.
    below_threshold_iters: u32,

    /// Ticks spent in the current stance so far.
    stance_iters: u32,

    /// Duration of the most recent completed stance in seconds, clamped to
    /// the configured plausible range.
    last_stance_time: f32,

    /// Quiet swing ticks needed before a heel strike is confirmed.
    heelstrike_iters_threshold: f32,

    /// Stance tick counts at which early becomes middle and middle becomes
    /// late. Rescaled after every toe-off.
    middle_iters_threshold: f32,
    late_iters_threshold: f32,

    /// Gyroscope magnitude of the last processed sample, in °/s.
    #[cfg(feature = "debug")]
    pub gyro_magnitude: f32,
}

impl GaitPhaseDetector {

    pub fn new(config: DetectorConfig) -> Self {
        let mut detector = GaitPhaseDetector {
            // Starting in late stance means the very first stride still
            // produces a toe-off boundary before its heel strike.
            phase: GaitPhase::Late,
            previous_phase: GaitPhase::Late,
            step_count: 0,
            below_threshold_iters: 0,
            stance_iters: 0,
            last_stance_time: config.initial_stance_time,
            heelstrike_iters_threshold: config.heelstrike_hold_time * config.sample_rate,
            middle_iters_threshold: 0.0,
            late_iters_threshold: 0.0,
            #[cfg(feature = "debug")]
            gyro_magnitude: 0.0,
            config,
        };
        detector.update_stance_thresholds();
        detector
    }

    /// Rescale the middle/late boundaries to the current stance duration.
    fn update_stance_thresholds(&mut self) {
        let stance_iters = self.last_stance_time * self.config.sample_rate;
        self.middle_iters_threshold = stance_iters * self.config.middle_fraction;
        self.late_iters_threshold = stance_iters * self.config.late_fraction;
    }

    /// Feed one gyroscope sample (3 components, °/s), returns the phase
    /// pair for this tick.
    ///
    /// On an invalid sample the detector state is untouched, an in-progress
    /// heel strike debounce run included.
    ///
    pub fn update(&mut self, gyro: &[f32]) -> Result<PhaseTransition, GaitError> {
        if gyro.len() != 3 {
            return Err(GaitError::InvalidSample);
        }

        let magnitude = Vector::new(gyro[0], gyro[1], gyro[2]).magnitude();

        cfg_if!{ if #[cfg(feature = "debug")] {
            self.gyro_magnitude = magnitude;
        }}

        self.previous_phase = self.phase;

        match self.phase {
            GaitPhase::Swing => {
                if magnitude < self.config.heelstrike_threshold {
                    self.below_threshold_iters += 1;
                    if self.below_threshold_iters as f32 > self.heelstrike_iters_threshold {
                        self.below_threshold_iters = 0;
                        self.stance_iters = 0;
                        self.step_count += 1;
                        self.phase = GaitPhase::Early;
                    }
                }
                else {
                    // One tick at or over the threshold cancels the whole
                    // quiet run.
                    self.below_threshold_iters = 0;
                }
            },
            GaitPhase::Early => {
                self.stance_iters += 1;
                if self.stance_iters as f32 > self.middle_iters_threshold {
                    self.phase = GaitPhase::Middle;
                }
            },
            GaitPhase::Middle => {
                self.stance_iters += 1;
                if self.stance_iters as f32 > self.late_iters_threshold {
                    self.phase = GaitPhase::Late;
                }
            },
            GaitPhase::Late => {
                // The toe-off tick itself still counts towards the stance.
                self.stance_iters += 1;
                if magnitude > self.config.toeoff_threshold {
                    let measured = self.stance_iters as f32 / self.config.sample_rate;
                    self.last_stance_time = libm::fminf(
                        libm::fmaxf(measured, self.config.min_stance_time),
                        self.config.max_stance_time,
                    );
                    self.update_stance_thresholds();
                    log::debug!(
                        "step {}: stance time {:.3}s",
                        self.step_count, self.last_stance_time
                    );
                    #[cfg(feature = "csv")]
                    println!("step-complete: {} {:.3}", self.step_count, self.last_stance_time);
                    self.phase = GaitPhase::Swing;
                }
            },
        }

        Ok(PhaseTransition {
            previous: self.previous_phase,
            current: self.phase,
        })
    }

    /// Phase the detector is currently in.
    #[inline]
    pub fn phase(&self) -> GaitPhase {
        self.phase
    }

    /// Completed heel strikes since construction.
    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }

    /// Duration of the most recent completed stance in seconds.
    #[inline]
    pub fn last_stance_time(&self) -> f32 {
        self.last_stance_time
    }

    /// Stance tick count at which early stance becomes middle stance.
    #[inline]
    pub fn middle_iters_threshold(&self) -> f32 {
        self.middle_iters_threshold
    }

    /// Stance tick count at which middle stance becomes late stance.
    #[inline]
    pub fn late_iters_threshold(&self) -> f32 {
        self.late_iters_threshold
    }
}
