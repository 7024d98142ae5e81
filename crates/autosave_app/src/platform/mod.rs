mod app;
mod clock;
mod effects;
mod host;
mod logging;
mod menu;
mod timer;
mod ui;

pub use app::run_app;
