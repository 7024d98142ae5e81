//! Autosave core: pure scheduler state machine and status helpers.
mod effect;
mod msg;
mod state;
mod status;
mod update;
mod view_model;

pub use effect::{Effect, LinkTarget};
pub use msg::Msg;
pub use state::{
    DispatchOutcome, Interval, MonotonicMs, SchedulerState, TimeOfDay, INTERVAL_CHOICES_MINUTES,
};
pub use status::{report, StatusReport};
pub use update::update;
pub use view_model::{MenuChecks, SchedulerViewModel};
