use std::sync::mpsc::Sender;
use std::sync::Arc;

use autosave_core::{DispatchOutcome, Effect, LinkTarget, Msg, SchedulerViewModel};
use plugin_logging::{plugin_info, plugin_warn};

use super::clock::Clock;
use super::host::{CommandDispatcher, LinkOpener};
use super::timer::RepeatingTimer;
use super::ui::constants::{AUTHOR_URL, REPO_URL};
use super::ui::panel::{AboutPanel, DebugPanel, PanelHooks};

/// Applies core effects to the outside world: the repeating timer, the
/// host's command channel, the link opener, and the two panels. Dispatch
/// outcomes are reported back into the update loop as messages.
pub struct EffectRunner<D: CommandDispatcher, L: LinkOpener> {
    dispatcher: D,
    opener: L,
    timer: RepeatingTimer,
    clock: Arc<dyn Clock>,
    msg_tx: Sender<Msg>,
}

impl<D: CommandDispatcher, L: LinkOpener> EffectRunner<D, L> {
    pub fn new(dispatcher: D, opener: L, clock: Arc<dyn Clock>, msg_tx: Sender<Msg>) -> Self {
        let timer = RepeatingTimer::spawn(msg_tx.clone(), clock.clone());
        Self {
            dispatcher,
            opener,
            timer,
            clock,
            msg_tx,
        }
    }

    pub fn run(
        &mut self,
        effects: Vec<Effect>,
        debug_panel: &mut DebugPanel,
        about_panel: &mut AboutPanel,
        view: &SchedulerViewModel,
    ) {
        for effect in effects {
            match effect {
                Effect::StartTimer { period_ms } => {
                    plugin_info!("timer armed, period {} ms", period_ms);
                    self.timer.restart(period_ms);
                }
                Effect::StopTimer => {
                    plugin_info!("timer stopped");
                    self.timer.stop();
                }
                Effect::DispatchSaveAll => {
                    let outcome = match self.dispatcher.dispatch_save_all() {
                        Ok(()) => DispatchOutcome::Accepted {
                            at: self.clock.time_of_day(),
                        },
                        Err(err) => {
                            plugin_warn!("{}", err);
                            DispatchOutcome::Refused { code: err.code() }
                        }
                    };
                    let _ = self.msg_tx.send(Msg::SaveAllDispatched { outcome });
                }
                Effect::ShowDebugPanel => {
                    debug_panel.on_create(view, self.clock.monotonic_ms());
                }
                Effect::HideDebugPanel => debug_panel.hide(),
                Effect::ShowAboutPanel => {
                    about_panel.on_create(view, self.clock.monotonic_ms());
                }
                Effect::HideAboutPanel => about_panel.hide(),
                Effect::OpenLink { target } => self.opener.open(link_url(target)),
            }
        }
    }
}

fn link_url(target: LinkTarget) -> &'static str {
    match target {
        LinkTarget::Repository => REPO_URL,
        LinkTarget::AuthorProfile => AUTHOR_URL,
    }
}
