use autosave_core::{MenuChecks, MonotonicMs, Msg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItemId {
    ToggleAutosave,
    OneMinute,
    ThreeMinutes,
    TenMinutes,
    DebugPanel,
    About,
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub label: &'static str,
    pub checkable: bool,
}

/// Registration table handed to the host at load, in menu order.
pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        id: MenuItemId::ToggleAutosave,
        label: "Start or Stop Autosave",
        checkable: true,
    },
    MenuItem {
        id: MenuItemId::OneMinute,
        label: "Set Autosave to 1 Minute",
        checkable: true,
    },
    MenuItem {
        id: MenuItemId::ThreeMinutes,
        label: "Set Autosave to 3 Minutes",
        checkable: true,
    },
    MenuItem {
        id: MenuItemId::TenMinutes,
        label: "Set Autosave to 10 Minutes",
        checkable: true,
    },
    MenuItem {
        id: MenuItemId::DebugPanel,
        label: "Show Countdown (Debug)",
        checkable: true,
    },
    MenuItem {
        id: MenuItemId::About,
        label: "About Autosave",
        checkable: false,
    },
];

/// Check state for every checkable item, derived from the view snapshot.
pub fn check_states(checks: MenuChecks) -> [(MenuItemId, bool); 5] {
    [
        (MenuItemId::ToggleAutosave, checks.autosave),
        (MenuItemId::OneMinute, checks.one_minute),
        (MenuItemId::ThreeMinutes, checks.three_minutes),
        (MenuItemId::TenMinutes, checks.ten_minutes),
        (MenuItemId::DebugPanel, checks.debug),
    ]
}

/// Message produced when the user picks a menu entry. Time-sensitive
/// entries are stamped with the caller's clock at selection time.
pub fn msg_for(item: MenuItemId, now_ms: MonotonicMs) -> Msg {
    match item {
        MenuItemId::ToggleAutosave => Msg::ToggleClicked { now_ms },
        MenuItemId::OneMinute => Msg::IntervalSelected {
            minutes: 1,
            now_ms,
        },
        MenuItemId::ThreeMinutes => Msg::IntervalSelected {
            minutes: 3,
            now_ms,
        },
        MenuItemId::TenMinutes => Msg::IntervalSelected {
            minutes: 10,
            now_ms,
        },
        MenuItemId::DebugPanel => Msg::DebugToggled,
        MenuItemId::About => Msg::AboutRequested,
    }
}
