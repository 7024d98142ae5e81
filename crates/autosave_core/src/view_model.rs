use crate::state::{DispatchOutcome, MonotonicMs};

/// Snapshot of scheduler state for presentation and menu sync.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerViewModel {
    pub enabled: bool,
    pub interval_minutes: u32,
    pub next_fire_ms: Option<MonotonicMs>,
    pub last_outcome: Option<DispatchOutcome>,
    pub debug_visible: bool,
    pub dirty: bool,
}

/// Check state for the host's checkable menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuChecks {
    pub autosave: bool,
    pub one_minute: bool,
    pub three_minutes: bool,
    pub ten_minutes: bool,
    pub debug: bool,
}

impl SchedulerViewModel {
    pub fn menu_checks(&self) -> MenuChecks {
        MenuChecks {
            autosave: self.enabled,
            one_minute: self.interval_minutes == 1,
            three_minutes: self.interval_minutes == 3,
            ten_minutes: self.interval_minutes == 10,
            debug: self.debug_visible,
        }
    }
}
