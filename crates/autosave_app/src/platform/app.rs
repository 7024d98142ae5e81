use std::io::{self, BufRead};
use std::sync::mpsc::{self, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use autosave_core::{update, LinkTarget, Msg, SchedulerState, SchedulerViewModel};
use plugin_logging::plugin_info;

use super::clock::{Clock, SystemClock};
use super::effects::EffectRunner;
use super::host::{
    CommandDispatcher, LinkOpener, LoggingDispatcher, LoggingMenuSink, MenuSink, SystemLinkOpener,
};
use super::logging::{self, LogDestination};
use super::menu::{self, MenuItemId, MENU_ITEMS};
use super::ui::constants::{ABOUT_PANEL_TITLE, DEBUG_PANEL_TITLE, DEBUG_REFRESH_MS};
use super::ui::panel::{AboutPanel, DebugPanel, PanelHooks};

/// Terminal stand-in for the host: menu selection comes from stdin, the
/// debug panel prints on the refresh tick, save-all goes to the log.
pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let clock: Arc<dyn Clock> = Arc::new(SystemClock::new());
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();

    let mut shell = PluginShell::new(
        LoggingDispatcher,
        SystemLinkOpener,
        LoggingMenuSink,
        clock.clone(),
        msg_tx.clone(),
    );

    register_menu();

    // Plugin load: arm the schedule from the defaults, then sync checks
    // once the "menu" exists.
    msg_tx.send(Msg::Started {
        now_ms: clock.monotonic_ms(),
    })?;
    msg_tx.send(Msg::HostReady)?;

    spawn_refresh_tick(msg_tx.clone());
    spawn_input_reader(msg_tx, clock);

    print_help();

    while let Ok(msg) = msg_rx.recv() {
        let quitting = matches!(msg, Msg::ShuttingDown);
        shell.dispatch(msg);
        if quitting {
            break;
        }
    }

    Ok(())
}

struct PluginShell<D: CommandDispatcher, L: LinkOpener, M: MenuSink> {
    state: SchedulerState,
    runner: EffectRunner<D, L>,
    menu: M,
    debug_panel: DebugPanel,
    about_panel: AboutPanel,
    clock: Arc<dyn Clock>,
    last_printed: String,
}

impl<D: CommandDispatcher, L: LinkOpener, M: MenuSink> PluginShell<D, L, M> {
    fn new(
        dispatcher: D,
        opener: L,
        menu: M,
        clock: Arc<dyn Clock>,
        msg_tx: Sender<Msg>,
    ) -> Self {
        let runner = EffectRunner::new(dispatcher, opener, clock.clone(), msg_tx);
        Self {
            state: SchedulerState::new(),
            runner,
            menu,
            debug_panel: DebugPanel::default(),
            about_panel: AboutPanel::default(),
            clock,
            last_printed: String::new(),
        }
    }

    /// Single dispatch point: every message passes through the pure update
    /// function; effects and presentation happen here, on this thread.
    fn dispatch(&mut self, msg: Msg) {
        let is_tick = matches!(msg, Msg::Tick);

        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;

        let view = self.state.view();
        self.runner.run(
            effects,
            &mut self.debug_panel,
            &mut self.about_panel,
            &view,
        );

        if was_dirty {
            self.publish_menu_checks(&view);
        }
        if was_dirty || is_tick {
            self.refresh_panels(&view);
        }
    }

    fn publish_menu_checks(&mut self, view: &SchedulerViewModel) {
        for (item, checked) in menu::check_states(view.menu_checks()) {
            self.menu.set_checked(item, checked);
        }
    }

    fn refresh_panels(&mut self, view: &SchedulerViewModel) {
        let now_ms = self.clock.monotonic_ms();
        self.debug_panel.on_timer_tick(view, now_ms);
        self.about_panel.on_timer_tick(view, now_ms);

        if self.about_panel.visible() && !self.about_panel.text().is_empty() {
            println!("--- {ABOUT_PANEL_TITLE} ---");
            println!("{}", self.about_panel.text());
            self.about_panel.hide();
        }

        if !self.debug_panel.visible() {
            self.last_printed.clear();
        } else if self.debug_panel.text() != self.last_printed {
            self.last_printed = self.debug_panel.text().to_string();
            println!("--- {DEBUG_PANEL_TITLE} ---");
            print!("{}", self.last_printed);
            println!("---");
        }
    }
}

fn register_menu() {
    for item in MENU_ITEMS {
        plugin_info!(
            "menu item registered: {} (checkable: {})",
            item.label,
            item.checkable
        );
    }
}

fn spawn_refresh_tick(msg_tx: Sender<Msg>) {
    thread::spawn(move || {
        let interval = Duration::from_millis(DEBUG_REFRESH_MS);
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(interval);
        }
    });
}

fn spawn_input_reader(msg_tx: Sender<Msg>, clock: Arc<dyn Clock>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let msg = match line.trim() {
                "toggle" => Some(menu::msg_for(MenuItemId::ToggleAutosave, clock.monotonic_ms())),
                "1" => Some(menu::msg_for(MenuItemId::OneMinute, clock.monotonic_ms())),
                "3" => Some(menu::msg_for(MenuItemId::ThreeMinutes, clock.monotonic_ms())),
                "10" => Some(menu::msg_for(MenuItemId::TenMinutes, clock.monotonic_ms())),
                "debug" => Some(menu::msg_for(MenuItemId::DebugPanel, 0)),
                "about" => Some(menu::msg_for(MenuItemId::About, 0)),
                "repo" => Some(Msg::LinkClicked(LinkTarget::Repository)),
                "author" => Some(Msg::LinkClicked(LinkTarget::AuthorProfile)),
                "quit" | "exit" => Some(Msg::ShuttingDown),
                "" => None,
                other => {
                    println!("unknown command: {other}");
                    print_help();
                    None
                }
            };
            let quitting = matches!(msg, Some(Msg::ShuttingDown));
            if let Some(msg) = msg {
                if msg_tx.send(msg).is_err() {
                    break;
                }
            }
            if quitting {
                break;
            }
        }
    });
}

fn print_help() {
    println!("commands: toggle | 1 | 3 | 10 | debug | about | repo | author | quit");
}
