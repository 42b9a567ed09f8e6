use crate::*;

/// Tick period matching the default 100 Hz sample rate.
static DT: f32 = 0.01;

fn transition(previous: GaitPhase, current: GaitPhase) -> PhaseTransition {
    PhaseTransition { previous, current }
}

/// Transition for a tick on which the phase did not change.
fn steady(phase: GaitPhase) -> PhaseTransition {
    transition(phase, phase)
}

#[test]
pub fn fresh_scheduler_is_idle() {
    let mut scheduler = FeedbackScheduler::new(FeedbackConfig::default());

    assert!(!scheduler.is_active());
    assert_eq!(scheduler.elapsed_since_start(), 0.0);
    assert_eq!(scheduler.decide(steady(GaitPhase::Swing), DT), Command::Hold(false));
}

/// A 1 second pulse at 100 Hz holds for roughly 100 ticks and then stops
/// exactly once. The accumulated float time drifts a little, so the test
/// pins the stop to a window rather than one exact tick.
///
#[test]
pub fn pulse_runs_for_its_length_then_stops() {
    let mut scheduler = FeedbackScheduler::new(FeedbackConfig::default());

    let command = scheduler.decide(transition(GaitPhase::Swing, GaitPhase::Early), DT);
    assert_eq!(command, Command::Start);
    assert!(scheduler.is_active());

    // Well inside the pulse every tick holds the level.
    for _ in 0..90 {
        assert_eq!(scheduler.decide(steady(GaitPhase::Early), DT), Command::Hold(true));
    }

    let mut stops = 0;
    for _ in 0..21 {
        match scheduler.decide(steady(GaitPhase::Early), DT) {
            Command::Stop => stops += 1,
            Command::Hold(true) => assert_eq!(stops, 0),
            Command::Hold(false) => assert_eq!(stops, 1),
            Command::Start => panic!("pulse restarted without a transition"),
        }
    }
    assert_eq!(stops, 1);
    assert!(!scheduler.is_active());

    // After the stop the scheduler stays idle.
    assert_eq!(scheduler.decide(steady(GaitPhase::Early), DT), Command::Hold(false));
}

/// A qualifying transition during an active pulse restarts the clock
/// instead of queueing a second pulse.
///
#[test]
pub fn restart_extends_active_pulse() {
    let mut scheduler = FeedbackScheduler::new(FeedbackConfig::default());

    assert_eq!(
        scheduler.decide(transition(GaitPhase::Swing, GaitPhase::Early), DT),
        Command::Start
    );
    for _ in 0..50 {
        assert_eq!(scheduler.decide(steady(GaitPhase::Early), DT), Command::Hold(true));
    }

    // Half way through, the next stance phase restarts the pulse.
    assert_eq!(
        scheduler.decide(transition(GaitPhase::Early, GaitPhase::Middle), DT),
        Command::Start
    );

    // A full 0.9s of holding fits after the restart.
    for _ in 0..90 {
        assert_eq!(scheduler.decide(steady(GaitPhase::Middle), DT), Command::Hold(true));
    }

    let mut stops = 0;
    for _ in 0..21 {
        if scheduler.decide(steady(GaitPhase::Middle), DT) == Command::Stop {
            stops += 1;
        }
    }
    assert_eq!(stops, 1);
}

/// Every entry into a stance phase starts a pulse under the default policy,
/// and no swing entry ever does.
///
#[test]
pub fn all_stance_phases_policy_triggers() {
    let mut scheduler = FeedbackScheduler::new(FeedbackConfig::default());

    assert_eq!(
        scheduler.decide(transition(GaitPhase::Swing, GaitPhase::Early), DT),
        Command::Start
    );
    assert_eq!(
        scheduler.decide(transition(GaitPhase::Early, GaitPhase::Middle), DT),
        Command::Start
    );
    assert_eq!(
        scheduler.decide(transition(GaitPhase::Middle, GaitPhase::Late), DT),
        Command::Start
    );

    // Toe-off is not a trigger; an active pulse just keeps holding.
    assert_eq!(
        scheduler.decide(transition(GaitPhase::Late, GaitPhase::Swing), DT),
        Command::Hold(true)
    );
}

#[test]
pub fn heel_strike_only_policy_triggers() {
    let config = FeedbackConfig {
        policy: FeedbackPolicy::LateStanceOnly,
        ..FeedbackConfig::default()
    };
    let mut scheduler = FeedbackScheduler::new(config);

    assert_eq!(
        scheduler.decide(transition(GaitPhase::Early, GaitPhase::Middle), DT),
        Command::Hold(false)
    );
    assert_eq!(
        scheduler.decide(transition(GaitPhase::Middle, GaitPhase::Late), DT),
        Command::Hold(false)
    );
    assert_eq!(
        scheduler.decide(transition(GaitPhase::Late, GaitPhase::Swing), DT),
        Command::Hold(false)
    );

    assert_eq!(
        scheduler.decide(transition(GaitPhase::Swing, GaitPhase::Early), DT),
        Command::Start
    );
    assert!(scheduler.is_active());
}

/// A short pulse length is honored: 50ms at 100 Hz stops within a handful
/// of ticks.
///
#[test]
pub fn short_pulse_length() {
    let config = FeedbackConfig {
        pulse_length: 0.05,
        ..FeedbackConfig::default()
    };
    let mut scheduler = FeedbackScheduler::new(config);

    scheduler.decide(transition(GaitPhase::Swing, GaitPhase::Early), DT);

    let mut ticks_until_stop = 0;
    for _ in 0..10 {
        ticks_until_stop += 1;
        if scheduler.decide(steady(GaitPhase::Early), DT) == Command::Stop {
            break;
        }
    }
    println!("stopped after {} ticks", ticks_until_stop);
    assert!(ticks_until_stop >= 5 && ticks_until_stop <= 7);
    assert!(!scheduler.is_active());
}
