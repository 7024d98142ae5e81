use crate::state::{DispatchOutcome, MonotonicMs};
use crate::LinkTarget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Plugin attached to the host; arm the schedule from the defaults.
    Started { now_ms: MonotonicMs },
    /// Host finished building its menu; republish checkmark state.
    HostReady,
    /// Presentation poll (panel refresh); never mutates state.
    Tick,
    /// User clicked the start/stop menu entry.
    ToggleClicked { now_ms: MonotonicMs },
    /// User selected an interval menu entry.
    IntervalSelected { minutes: i32, now_ms: MonotonicMs },
    /// The repeating timer reached its deadline.
    TimerElapsed { now_ms: MonotonicMs },
    /// The shell attempted the save-all dispatch and reports the result.
    SaveAllDispatched { outcome: DispatchOutcome },
    /// User clicked the debug panel menu entry.
    DebugToggled,
    /// The debug panel was dismissed via its own close control.
    DebugClosed,
    /// User clicked the About menu entry.
    AboutRequested,
    /// User clicked a link button on the About panel.
    LinkClicked(LinkTarget),
    /// Plugin is being unloaded; release the timer and panels.
    ShuttingDown,
}
