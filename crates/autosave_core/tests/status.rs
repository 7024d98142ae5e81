use autosave_core::{
    report, update, DispatchOutcome, Msg, SchedulerState, TimeOfDay,
};

fn started_at(now_ms: u64) -> SchedulerState {
    let (state, _effects) = update(SchedulerState::new(), Msg::Started { now_ms });
    state
}

#[test]
fn remaining_time_floors_to_seconds() {
    let state = started_at(0);

    // 180000 - 1500 = 178500 ms -> 178 s, floored.
    let status = report(&state.view(), 1_500);

    assert_eq!(status.remaining_seconds, Some(178));
    assert!(status.summary.contains("Next autosave in: 2m 58s"));
}

#[test]
fn overdue_schedule_reports_zero_never_negative() {
    let state = started_at(0);

    let status = report(&state.view(), 200_000);

    assert_eq!(status.remaining_seconds, Some(0));
    assert!(status.summary.contains("Next autosave in: 0m 0s"));
}

#[test]
fn disabled_schedule_reports_no_countdown() {
    let state = started_at(0);
    let (state, _effects) = update(state, Msg::ToggleClicked { now_ms: 1_000 });

    let status = report(&state.view(), 2_000);

    assert_eq!(status.remaining_seconds, None);
    assert!(status.summary.contains("Enabled: No"));
    assert!(status.summary.contains("Next autosave: n/a"));
}

#[test]
fn summary_carries_last_accepted_stamp() {
    let state = started_at(0);
    let (state, _effects) = update(
        state,
        Msg::SaveAllDispatched {
            outcome: DispatchOutcome::Accepted {
                at: TimeOfDay {
                    hour: 9,
                    minute: 5,
                    second: 7,
                },
            },
        },
    );

    let status = report(&state.view(), 0);

    assert!(status.summary.contains("Last autosave at: 09:05:07"));
    assert!(status.summary.contains("Last dispatch error: none"));
}

#[test]
fn summary_carries_refusal_code() {
    let state = started_at(0);
    let (state, _effects) = update(
        state,
        Msg::SaveAllDispatched {
            outcome: DispatchOutcome::Refused { code: 1400 },
        },
    );

    let status = report(&state.view(), 0);

    assert!(status.summary.contains("Last autosave at: n/a"));
    assert!(status.summary.contains("Last dispatch error: 1400"));
}

#[test]
fn fresh_state_reports_defaults() {
    let state = started_at(0);

    let status = report(&state.view(), 0);

    assert_eq!(status.remaining_seconds, Some(180));
    assert!(status.summary.contains("Enabled: Yes"));
    assert!(status.summary.contains("Interval: 3 minute(s)"));
    assert!(status.summary.contains("Next autosave in: 3m 0s"));
    assert!(status.summary.contains("Last autosave at: n/a"));
}
