use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use autosave_core::Msg;
use plugin_logging::plugin_warn;

use super::clock::Clock;

enum Command {
    Restart { period: Duration },
    Stop,
    Shutdown,
}

/// Repeating timer backed by one worker thread.
///
/// `restart` re-arms with a fresh deadline (cancelling any pending one) and
/// `stop` disarms; on each deadline the worker posts `Msg::TimerElapsed`
/// stamped with the injected clock and rebases the deadline from now.
///
/// If the worker thread cannot be spawned the timer degrades to a no-op:
/// commands go nowhere and no fires are ever delivered.
pub struct RepeatingTimer {
    control: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl RepeatingTimer {
    pub fn spawn(msg_tx: Sender<Msg>, clock: Arc<dyn Clock>) -> Self {
        let (control, commands) = mpsc::channel();
        let builder = thread::Builder::new().name("autosave-timer".to_string());
        let worker = match builder.spawn(move || run_worker(commands, msg_tx, clock)) {
            Ok(handle) => Some(handle),
            Err(err) => {
                plugin_warn!("autosave timer unavailable: {}", err);
                None
            }
        };
        Self { control, worker }
    }

    pub fn restart(&self, period_ms: u64) {
        let _ = self.control.send(Command::Restart {
            period: Duration::from_millis(period_ms),
        });
    }

    pub fn stop(&self) {
        let _ = self.control.send(Command::Stop);
    }
}

impl Drop for RepeatingTimer {
    fn drop(&mut self) {
        let _ = self.control.send(Command::Shutdown);
        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }
}

fn run_worker(commands: Receiver<Command>, msg_tx: Sender<Msg>, clock: Arc<dyn Clock>) {
    // (period, deadline) while armed.
    let mut armed: Option<(Duration, Instant)> = None;

    loop {
        if let Some((period, deadline)) = armed {
            let wait = deadline.saturating_duration_since(Instant::now());
            match commands.recv_timeout(wait) {
                Ok(command) => {
                    if !apply(command, &mut armed) {
                        return;
                    }
                }
                Err(RecvTimeoutError::Timeout) => {
                    let now_ms = clock.monotonic_ms();
                    if msg_tx.send(Msg::TimerElapsed { now_ms }).is_err() {
                        return;
                    }
                    armed = Some((period, Instant::now() + period));
                }
                Err(RecvTimeoutError::Disconnected) => return,
            }
        } else {
            match commands.recv() {
                Ok(command) => {
                    if !apply(command, &mut armed) {
                        return;
                    }
                }
                Err(_) => return,
            }
        }
    }
}

/// Returns false when the worker should exit.
fn apply(command: Command, armed: &mut Option<(Duration, Instant)>) -> bool {
    match command {
        Command::Restart { period } => {
            *armed = Some((period, Instant::now() + period));
            true
        }
        Command::Stop => {
            *armed = None;
            true
        }
        Command::Shutdown => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::clock::SystemClock;

    #[test]
    fn fires_after_period_and_repeats() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let timer = RepeatingTimer::spawn(msg_tx, clock);

        timer.restart(5);

        // Two consecutive fires; generous deadline to avoid flakiness.
        for _ in 0..2 {
            let msg = msg_rx.recv_timeout(Duration::from_secs(2)).unwrap();
            assert!(matches!(msg, Msg::TimerElapsed { .. }));
        }
    }

    #[test]
    fn stop_silences_the_timer() {
        let (msg_tx, msg_rx) = mpsc::channel();
        let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
        let timer = RepeatingTimer::spawn(msg_tx, clock);

        timer.restart(5);
        let _ = msg_rx.recv_timeout(Duration::from_secs(2)).unwrap();
        timer.stop();

        // Drain anything already in flight, then expect silence.
        while msg_rx.recv_timeout(Duration::from_millis(100)).is_ok() {}
        assert!(msg_rx.recv_timeout(Duration::from_millis(200)).is_err());
    }
}
