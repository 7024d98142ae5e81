pub const REPO_URL: &str = "https://github.com/netwebdave/AutoDaveSave";
pub const AUTHOR_URL: &str = "https://www.linkedin.com/in/dsii/";

pub const DEBUG_PANEL_TITLE: &str = "Autosave Debug";
pub const ABOUT_PANEL_TITLE: &str = "About Autosave";

pub const DEBUG_PANEL_WIDTH: i32 = 560;
pub const DEBUG_PANEL_HEIGHT: i32 = 320;
pub const ABOUT_PANEL_WIDTH: i32 = 640;
pub const ABOUT_PANEL_HEIGHT: i32 = 460;

/// Cadence at which the debug panel polls the status reporter.
pub const DEBUG_REFRESH_MS: u64 = 1000;

pub const DEBUG_PADDING: i32 = 10;
pub const ABOUT_PADDING: i32 = 12;
pub const BUTTON_HEIGHT: i32 = 28;
pub const BUTTON_GAP: i32 = 10;
pub const REPO_BUTTON_WIDTH: i32 = 220;
pub const AUTHOR_BUTTON_WIDTH: i32 = 180;
pub const REPO_BUTTON_LABEL: &str = "Open GitHub Repository";
pub const AUTHOR_BUTTON_LABEL: &str = "Open LinkedIn";

/// Controls never shrink below this extent, however small the window gets.
pub const MIN_CONTROL_EXTENT: i32 = 10;
