/// The four phases of the gait cycle as seen from one foot.
///
/// Stance is split into three sub-phases so feedback can target a specific
/// part of the loading curve; swing is the flight of the foot between
/// toe-off and the next heel strike.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaitPhase
{
    /// Weight acceptance, right after heel strike.
    Early,
    /// Mid stance, full load over the foot.
    Middle,
    /// Terminal stance, heel lifting towards toe-off.
    Late,
    /// Foot in the air.
    Swing,
}

impl GaitPhase {

    /// True for every phase in which the foot carries weight.
    #[inline]
    pub fn is_stance(&self) -> bool {
        !matches!(self, GaitPhase::Swing)
    }

    /// Lowercase name, stable across releases so logs and CSV exports can
    /// rely on it.
    pub fn label(&self) -> &'static str {
        match self {
            GaitPhase::Early => "early",
            GaitPhase::Middle => "middle",
            GaitPhase::Late => "late",
            GaitPhase::Swing => "swing",
        }
    }
}

/// Phase pair produced by one detector tick.
///
/// `previous` is the phase the detector was in when the tick started, so a
/// tick on which nothing happened has `previous == current`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition
{
    pub previous: GaitPhase,
    pub current: GaitPhase,
}

impl PhaseTransition {

    /// True when this tick crossed a phase boundary.
    #[inline]
    pub fn changed(&self) -> bool {
        self.previous != self.current
    }

    /// True on the tick the foot entered terminal stance.
    #[inline]
    pub fn entered_late_stance(&self) -> bool {
        self.previous == GaitPhase::Middle && self.current == GaitPhase::Late
    }

    /// True on the tick a heel strike was confirmed.
    #[inline]
    pub fn is_heel_strike(&self) -> bool {
        self.previous == GaitPhase::Swing && self.current == GaitPhase::Early
    }

    /// True on the tick the foot left the ground.
    #[inline]
    pub fn is_toe_off(&self) -> bool {
        self.previous == GaitPhase::Late && self.current == GaitPhase::Swing
    }
}
