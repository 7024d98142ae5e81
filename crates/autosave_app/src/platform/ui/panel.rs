use autosave_core::{report, MonotonicMs, Msg, SchedulerViewModel};

use super::constants::{
    ABOUT_PANEL_HEIGHT, ABOUT_PANEL_WIDTH, AUTHOR_BUTTON_LABEL, AUTHOR_URL, DEBUG_PADDING,
    DEBUG_PANEL_HEIGHT, DEBUG_PANEL_WIDTH, REPO_BUTTON_LABEL, REPO_URL,
};
use super::layout::{self, AboutLayout, Rect};

/// Capability set each auxiliary panel implements. The shell drives these
/// from window lifecycle events and the shared refresh tick; panels are
/// pure presentation and never own scheduler state.
pub trait PanelHooks {
    fn on_create(&mut self, view: &SchedulerViewModel, now_ms: MonotonicMs);
    fn on_resize(&mut self, width: i32, height: i32);
    fn on_timer_tick(&mut self, view: &SchedulerViewModel, now_ms: MonotonicMs);
    /// Returns a message to feed back into the update loop, if any.
    fn on_close(&mut self) -> Option<Msg>;
}

/// Live countdown and last-result display, polled once per second.
#[derive(Debug, Default)]
pub struct DebugPanel {
    visible: bool,
    content_rect: Option<Rect>,
    text: String,
}

impl DebugPanel {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content_rect(&self) -> Option<Rect> {
        self.content_rect
    }

    /// Dismissal initiated by the shell (effect or shutdown), as opposed to
    /// the panel's own close control.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    fn render(&mut self, view: &SchedulerViewModel, now_ms: MonotonicMs) {
        let status = report(view, now_ms);
        let mut text = status.summary;
        text.push('\n');
        text.push_str("Notes:\n");
        text.push_str("- Untitled tabs can trigger Save As dialogs.\n");
        text.push_str("- Debug refresh interval: 1 second.\n");
        self.text = text;
    }
}

impl PanelHooks for DebugPanel {
    fn on_create(&mut self, view: &SchedulerViewModel, now_ms: MonotonicMs) {
        self.visible = true;
        self.content_rect = Some(layout::padded_fill(
            DEBUG_PANEL_WIDTH,
            DEBUG_PANEL_HEIGHT,
            DEBUG_PADDING,
        ));
        self.render(view, now_ms);
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        self.content_rect = Some(layout::padded_fill(width, height, DEBUG_PADDING));
    }

    fn on_timer_tick(&mut self, view: &SchedulerViewModel, now_ms: MonotonicMs) {
        if !self.visible {
            return;
        }
        self.render(view, now_ms);
    }

    fn on_close(&mut self) -> Option<Msg> {
        self.visible = false;
        Some(Msg::DebugClosed)
    }
}

/// Static About text plus two link buttons.
#[derive(Debug, Default)]
pub struct AboutPanel {
    visible: bool,
    layout: Option<AboutLayout>,
    text: String,
}

impl AboutPanel {
    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn layout(&self) -> Option<AboutLayout> {
        self.layout
    }

    pub fn button_labels(&self) -> [&'static str; 2] {
        [REPO_BUTTON_LABEL, AUTHOR_BUTTON_LABEL]
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

impl PanelHooks for AboutPanel {
    fn on_create(&mut self, _view: &SchedulerViewModel, _now_ms: MonotonicMs) {
        self.visible = true;
        self.layout = Some(layout::about_layout(ABOUT_PANEL_WIDTH, ABOUT_PANEL_HEIGHT));
        self.text = about_text();
    }

    fn on_resize(&mut self, width: i32, height: i32) {
        self.layout = Some(layout::about_layout(width, height));
    }

    fn on_timer_tick(&mut self, _view: &SchedulerViewModel, _now_ms: MonotonicMs) {
        // Static content; nothing to refresh.
    }

    fn on_close(&mut self) -> Option<Msg> {
        self.visible = false;
        None
    }
}

fn about_text() -> String {
    let mut t = String::new();
    t.push_str("Autosave\n\n");

    t.push_str("License\n");
    t.push_str("- Apache License 2.0 (see LICENSE)\n\n");

    t.push_str("Repository\n");
    t.push_str(&format!("- {REPO_URL}\n\n"));

    t.push_str("How to use\n");
    t.push_str("1) Plugins > Autosave > Start or Stop Autosave\n");
    t.push_str("2) Select interval: 1, 3, or 10 minutes\n");
    t.push_str("3) Optional: Show Countdown (Debug)\n\n");

    t.push_str("Notes\n");
    t.push_str("- Untitled tabs can trigger Save As prompts when Save All runs\n\n");

    t.push_str("Contact\n");
    t.push_str(&format!("- {AUTHOR_URL}\n"));

    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use autosave_core::{update, SchedulerState};

    fn started_view() -> SchedulerViewModel {
        let (state, _effects) = update(SchedulerState::new(), Msg::Started { now_ms: 0 });
        state.view()
    }

    #[test]
    fn debug_panel_renders_countdown_on_create() {
        let mut panel = DebugPanel::default();
        panel.on_create(&started_view(), 0);

        assert!(panel.visible());
        assert!(panel.text().contains("Enabled: Yes"));
        assert!(panel.text().contains("Next autosave in: 3m 0s"));
        assert!(panel.text().contains("Notes:"));
    }

    #[test]
    fn debug_panel_refreshes_only_while_visible() {
        let mut panel = DebugPanel::default();
        let view = started_view();
        panel.on_create(&view, 0);
        panel.hide();

        let before = panel.text().to_string();
        panel.on_timer_tick(&view, 60_000);

        assert_eq!(panel.text(), before);
    }

    #[test]
    fn debug_close_feeds_back_into_update_loop() {
        let mut panel = DebugPanel::default();
        panel.on_create(&started_view(), 0);

        assert_eq!(panel.on_close(), Some(Msg::DebugClosed));
        assert!(!panel.visible());
    }

    #[test]
    fn debug_resize_reflows_content() {
        let mut panel = DebugPanel::default();
        panel.on_create(&started_view(), 0);

        panel.on_resize(300, 200);

        let rect = panel.content_rect().unwrap();
        assert_eq!(rect.width, 280);
        assert_eq!(rect.height, 180);
    }

    #[test]
    fn about_panel_lists_links_and_buttons() {
        let mut panel = AboutPanel::default();
        panel.on_create(&started_view(), 0);

        assert!(panel.visible());
        assert!(panel.text().contains(REPO_URL));
        assert!(panel.layout().is_some());
        assert_eq!(
            panel.button_labels(),
            [REPO_BUTTON_LABEL, AUTHOR_BUTTON_LABEL]
        );
        assert_eq!(panel.on_close(), None);
        assert!(!panel.visible());
    }
}
