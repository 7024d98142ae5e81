use crate::state::{DispatchOutcome, MonotonicMs};
use crate::view_model::SchedulerViewModel;

/// Human-readable scheduler status derived from a view snapshot.
///
/// Pure and side-effect free; the debug panel polls it once per second.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    /// Whole seconds until the next fire, floored and clamped to zero when
    /// overdue. `None` while autosave is disabled.
    pub remaining_seconds: Option<u64>,
    /// Multi-line summary shown by the debug panel.
    pub summary: String,
}

pub fn report(view: &SchedulerViewModel, now_ms: MonotonicMs) -> StatusReport {
    let remaining_seconds = if view.enabled {
        let next = view.next_fire_ms.unwrap_or(now_ms);
        Some(next.saturating_sub(now_ms) / 1000)
    } else {
        None
    };

    let mut summary = String::new();
    summary.push_str(&format!(
        "Enabled: {}\n",
        if view.enabled { "Yes" } else { "No" }
    ));
    summary.push_str(&format!("Interval: {} minute(s)\n", view.interval_minutes));
    match remaining_seconds {
        Some(secs) => {
            summary.push_str(&format!("Next autosave in: {}\n", format_mm_ss(secs)));
        }
        None => summary.push_str("Next autosave: n/a\n"),
    }
    match view.last_outcome {
        Some(DispatchOutcome::Accepted { at }) => {
            summary.push_str(&format!("Last autosave at: {at}\n"));
            summary.push_str("Last dispatch error: none\n");
        }
        Some(DispatchOutcome::Refused { code }) => {
            summary.push_str("Last autosave at: n/a\n");
            summary.push_str(&format!("Last dispatch error: {code}\n"));
        }
        None => {
            summary.push_str("Last autosave at: n/a\n");
            summary.push_str("Last dispatch error: none\n");
        }
    }

    StatusReport {
        remaining_seconds,
        summary,
    }
}

fn format_mm_ss(total_seconds: u64) -> String {
    let m = total_seconds / 60;
    let s = total_seconds % 60;
    format!("{m}m {s}s")
}
