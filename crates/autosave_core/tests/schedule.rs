use std::sync::Once;

use autosave_core::{update, Effect, Msg, SchedulerState};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(plugin_logging::initialize_for_tests);
}

fn started_at(now_ms: u64) -> SchedulerState {
    let (state, _effects) = update(SchedulerState::new(), Msg::Started { now_ms });
    state
}

#[test]
fn startup_arms_default_schedule() {
    init_logging();
    let state = SchedulerState::new();

    let (state, effects) = update(state, Msg::Started { now_ms: 0 });

    let view = state.view();
    assert!(view.enabled);
    assert_eq!(view.interval_minutes, 3);
    assert_eq!(view.next_fire_ms, Some(180_000));
    assert_eq!(effects, vec![Effect::StartTimer { period_ms: 180_000 }]);
}

#[test]
fn fire_dispatches_once_and_rebases() {
    init_logging();
    let state = started_at(0);

    // Timer delivered slightly late; the next deadline rebases from the
    // actual fire time, not the scheduled one.
    let (state, effects) = update(state, Msg::TimerElapsed { now_ms: 181_000 });

    assert_eq!(effects, vec![Effect::DispatchSaveAll]);
    assert_eq!(state.view().next_fire_ms, Some(361_000));
}

#[test]
fn fire_while_disabled_dispatches_nothing() {
    init_logging();
    let state = started_at(0);
    let (state, effects) = update(state, Msg::ToggleClicked { now_ms: 50_000 });
    assert_eq!(effects, vec![Effect::StopTimer]);
    assert_eq!(state.view().next_fire_ms, None);

    // A stale fire from the cancelled schedule arrives anyway.
    let (state, effects) = update(state, Msg::TimerElapsed { now_ms: 180_000 });

    assert!(effects.is_empty());
    assert_eq!(state.view().next_fire_ms, None);
}

#[test]
fn reenabling_arms_from_toggle_time() {
    init_logging();
    let state = started_at(0);
    let (state, _effects) = update(state, Msg::ToggleClicked { now_ms: 50_000 });

    let (state, effects) = update(state, Msg::ToggleClicked { now_ms: 90_000 });

    assert_eq!(effects, vec![Effect::StartTimer { period_ms: 180_000 }]);
    assert_eq!(state.view().next_fire_ms, Some(270_000));
}

#[test]
fn interval_change_while_enabled_restarts_schedule() {
    init_logging();
    let state = started_at(0);

    // Change at t=60s: the new deadline is change-time + new interval, the
    // old deadline is discarded entirely.
    let (state, effects) = update(
        state,
        Msg::IntervalSelected {
            minutes: 10,
            now_ms: 60_000,
        },
    );

    assert_eq!(effects, vec![Effect::StartTimer { period_ms: 600_000 }]);
    let view = state.view();
    assert_eq!(view.interval_minutes, 10);
    assert_eq!(view.next_fire_ms, Some(660_000));
}

#[test]
fn interval_change_while_disabled_does_not_arm() {
    init_logging();
    let state = started_at(0);
    let (state, _effects) = update(state, Msg::ToggleClicked { now_ms: 10_000 });

    let (state, effects) = update(
        state,
        Msg::IntervalSelected {
            minutes: 1,
            now_ms: 20_000,
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.interval_minutes, 1);
    assert_eq!(view.next_fire_ms, None);
}

#[test]
fn non_positive_minutes_clamp_to_one() {
    init_logging();
    for minutes in [0, -1, -100] {
        let state = started_at(0);
        let (state, effects) = update(
            state,
            Msg::IntervalSelected {
                minutes,
                now_ms: 5_000,
            },
        );

        assert_eq!(state.view().interval_minutes, 1);
        assert_eq!(state.view().next_fire_ms, Some(65_000));
        assert_eq!(effects, vec![Effect::StartTimer { period_ms: 60_000 }]);
    }
}

#[test]
fn shutdown_releases_timer_and_panels() {
    init_logging();
    let state = started_at(0);

    let (_state, effects) = update(state, Msg::ShuttingDown);

    assert_eq!(
        effects,
        vec![
            Effect::StopTimer,
            Effect::HideDebugPanel,
            Effect::HideAboutPanel,
        ]
    );
}
