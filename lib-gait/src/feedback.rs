use crate::config::FeedbackConfig;
use crate::phase::{GaitPhase, PhaseTransition};

/// Selects which phase transitions trigger a feedback pulse.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackPolicy
{
    /// Pulse on entry into each of the three stance phases.
    #[default]
    AllStancePhases,
    /// Pulse only on the confirmed heel strike that opens a stance.
    LateStanceOnly,
}

/// One tick's worth of actuator intent.
///
/// `Start` and `Stop` mark the edges of a pulse; `Hold` repeats the current
/// level so a dispatcher that re-issues its output every tick stays simple.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command
{
    Start,
    Stop,
    Hold(bool),
}

/// Turns phase transitions into fixed-length feedback pulses.
///
/// A qualifying transition starts (or restarts) a pulse; the pulse ends on
/// the first tick whose accumulated time exceeds the configured length.
/// Restarting an active pulse resets the clock, so back to back transitions
/// extend the pulse rather than queueing a second one.
///
pub struct FeedbackScheduler
{
    config: FeedbackConfig,

    active: bool,

    /// Seconds since the pulse started, only meaningful while active.
    elapsed: f32,
}

impl FeedbackScheduler {

    #[inline]
    pub fn new(config: FeedbackConfig) -> Self {
        FeedbackScheduler {
            config,
            active: false,
            elapsed: 0.0,
        }
    }

    fn should_start(&self, transition: &PhaseTransition) -> bool {
        match self.config.policy {
            FeedbackPolicy::AllStancePhases => {
                transition.changed() && transition.current != GaitPhase::Swing
            },
            FeedbackPolicy::LateStanceOnly => transition.is_heel_strike(),
        }
    }

    /// Feed one tick's transition, returns the command for this tick.
    ///
    /// `dt` is the wall time covered by this tick in seconds.
    ///
    pub fn decide(&mut self, transition: PhaseTransition, dt: f32) -> Command {
        if self.should_start(&transition) {
            self.elapsed = 0.0;
            self.active = true;
            return Command::Start;
        }

        if self.active {
            self.elapsed += dt;
            if self.elapsed > self.config.pulse_length {
                self.active = false;
                return Command::Stop;
            }
        }

        Command::Hold(self.active)
    }

    /// True while a pulse is running.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds since the current pulse started.
    #[inline]
    pub fn elapsed_since_start(&self) -> f32 {
        self.elapsed
    }
}
