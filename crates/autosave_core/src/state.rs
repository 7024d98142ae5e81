use std::fmt;

use crate::view_model::SchedulerViewModel;

/// Milliseconds on the host's monotonic clock. The core never reads a
/// clock; callers capture `now` and pass it in with each message.
pub type MonotonicMs = u64;

/// Interval choices offered by the menu, in minutes.
pub const INTERVAL_CHOICES_MINUTES: [u32; 3] = [1, 3, 10];

const DEFAULT_INTERVAL_MINUTES: u32 = 3;

/// Autosave period in whole minutes, clamped to at least one minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    minutes: u32,
}

impl Interval {
    /// Clamps non-positive input to one minute.
    pub fn from_minutes(minutes: i32) -> Self {
        let minutes = if minutes <= 0 { 1 } else { minutes as u32 };
        Self { minutes }
    }

    pub fn minutes(self) -> u32 {
        self.minutes
    }

    pub fn period_ms(self) -> u64 {
        u64::from(self.minutes) * 60 * 1000
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self {
            minutes: DEFAULT_INTERVAL_MINUTES,
        }
    }
}

/// Wall-clock stamp for display next to the last accepted dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

/// Whether the host accepted the save-all request for dispatch. This says
/// nothing about whether saving itself succeeded; no such channel exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Accepted { at: TimeOfDay },
    Refused { code: u32 },
}

/// Scheduler state owned by the plugin lifecycle.
///
/// `next_fire_ms` is `Some` exactly while the schedule is armed (enabled);
/// it is rebased from "now" on every arm, never carried over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerState {
    enabled: bool,
    interval: Interval,
    next_fire_ms: Option<MonotonicMs>,
    last_outcome: Option<DispatchOutcome>,
    debug_visible: bool,
    dirty: bool,
}

impl Default for SchedulerState {
    fn default() -> Self {
        // Fixed startup defaults; there is no persisted configuration.
        Self {
            enabled: true,
            interval: Interval::default(),
            next_fire_ms: None,
            last_outcome: None,
            debug_visible: false,
            dirty: false,
        }
    }
}

impl SchedulerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> SchedulerViewModel {
        SchedulerViewModel {
            enabled: self.enabled,
            interval_minutes: self.interval.minutes(),
            next_fire_ms: self.next_fire_ms,
            last_outcome: self.last_outcome,
            debug_visible: self.debug_visible,
            dirty: self.dirty,
        }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn next_fire_ms(&self) -> Option<MonotonicMs> {
        self.next_fire_ms
    }

    pub fn debug_visible(&self) -> bool {
        self.debug_visible
    }

    /// Returns the accumulated dirty flag and clears it. The shell drains
    /// this to coalesce menu-check and panel refreshes.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Rebase the schedule from `now`.
    pub(crate) fn arm(&mut self, now_ms: MonotonicMs) {
        self.next_fire_ms = Some(now_ms + self.interval.period_ms());
        self.dirty = true;
    }

    pub(crate) fn enable(&mut self) {
        self.enabled = true;
        self.dirty = true;
    }

    pub(crate) fn disable(&mut self) {
        self.enabled = false;
        self.next_fire_ms = None;
        self.dirty = true;
    }

    pub(crate) fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
        self.dirty = true;
    }

    pub(crate) fn record_outcome(&mut self, outcome: DispatchOutcome) {
        self.last_outcome = Some(outcome);
        self.dirty = true;
    }

    pub(crate) fn set_debug_visible(&mut self, visible: bool) {
        self.debug_visible = visible;
        self.dirty = true;
    }
}
