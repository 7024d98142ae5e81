use crate::{Effect, Interval, Msg, SchedulerState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: SchedulerState, msg: Msg) -> (SchedulerState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { now_ms } => {
            if state.enabled() {
                state.arm(now_ms);
                vec![Effect::StartTimer {
                    period_ms: state.interval().period_ms(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::HostReady => {
            // Checkmarks set during registration are provisional; republish
            // once the host menu actually exists.
            state.mark_dirty();
            Vec::new()
        }
        Msg::ToggleClicked { now_ms } => {
            if state.enabled() {
                state.disable();
                vec![Effect::StopTimer]
            } else {
                state.enable();
                state.arm(now_ms);
                vec![Effect::StartTimer {
                    period_ms: state.interval().period_ms(),
                }]
            }
        }
        Msg::IntervalSelected { minutes, now_ms } => {
            state.set_interval(Interval::from_minutes(minutes));
            if state.enabled() {
                // Restart semantics: rebase from the change time, no
                // carry-over of time already elapsed on the old schedule.
                state.arm(now_ms);
                vec![Effect::StartTimer {
                    period_ms: state.interval().period_ms(),
                }]
            } else {
                Vec::new()
            }
        }
        Msg::TimerElapsed { now_ms } => {
            if !state.enabled() {
                // Stale fire delivered after stop; drop it.
                return (state, Vec::new());
            }
            state.arm(now_ms);
            vec![Effect::DispatchSaveAll]
        }
        Msg::SaveAllDispatched { outcome } => {
            // Informational only; a refusal is never retried or escalated.
            state.record_outcome(outcome);
            Vec::new()
        }
        Msg::DebugToggled => {
            if state.debug_visible() {
                state.set_debug_visible(false);
                vec![Effect::HideDebugPanel]
            } else {
                state.set_debug_visible(true);
                vec![Effect::ShowDebugPanel]
            }
        }
        Msg::DebugClosed => {
            // The panel is already gone; only the checkmark needs syncing.
            state.set_debug_visible(false);
            Vec::new()
        }
        Msg::AboutRequested => vec![Effect::ShowAboutPanel],
        Msg::LinkClicked(target) => vec![Effect::OpenLink { target }],
        Msg::ShuttingDown => vec![
            Effect::StopTimer,
            Effect::HideDebugPanel,
            Effect::HideAboutPanel,
        ],
        Msg::Tick => Vec::new(),
    };

    (state, effects)
}
