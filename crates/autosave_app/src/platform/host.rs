use std::process::Command;

use plugin_logging::{plugin_debug, plugin_info, plugin_warn};
use thiserror::Error;

use super::menu::MenuItemId;

/// The single domain error: the host refused or errored on the save-all
/// request. Informational only; never retried, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("host refused save-all dispatch (code {code})")]
    Refused { code: u32 },
}

impl DispatchError {
    pub fn code(&self) -> u32 {
        match self {
            Self::Refused { code } => *code,
        }
    }
}

/// Command channel into the host. `Ok` means the request was accepted for
/// dispatch, not that saving succeeded; no completion channel exists.
pub trait CommandDispatcher: Send {
    fn dispatch_save_all(&mut self) -> Result<(), DispatchError>;
}

/// Checkable menu items exposed by the host.
pub trait MenuSink: Send {
    fn set_checked(&mut self, item: MenuItemId, checked: bool);
}

/// External link opener. Fire-and-forget; failures are logged and
/// otherwise ignored.
pub trait LinkOpener: Send {
    fn open(&mut self, url: &str);
}

/// Demo dispatcher used by the terminal shell: every request is accepted
/// and logged.
#[derive(Debug, Default)]
pub struct LoggingDispatcher;

impl CommandDispatcher for LoggingDispatcher {
    fn dispatch_save_all(&mut self) -> Result<(), DispatchError> {
        plugin_info!("save-all dispatched to host");
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct LoggingMenuSink;

impl MenuSink for LoggingMenuSink {
    fn set_checked(&mut self, item: MenuItemId, checked: bool) {
        plugin_debug!("menu check {:?} = {}", item, checked);
    }
}

/// Opens links with the platform's default handler.
#[derive(Debug, Default)]
pub struct SystemLinkOpener;

impl LinkOpener for SystemLinkOpener {
    fn open(&mut self, url: &str) {
        if let Err(err) = open_command(url).spawn() {
            plugin_warn!("could not open {}: {}", url, err);
        }
    }
}

#[cfg(target_os = "windows")]
fn open_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn open_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn open_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}
