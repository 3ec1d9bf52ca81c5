//! Effective permission and button-visibility state, as reported to the router.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceLockState {
    pub allow_drop: bool,
    pub allow_drop_left: bool,
    pub allow_drop_top: bool,
    pub allow_drop_right: bool,
    pub allow_drop_bottom: bool,
    pub allow_extract: bool,
    pub allow_window_reorder: bool,
    pub allow_splitters: bool,
    pub show_close_button: bool,
    pub show_save_button: bool,
    pub show_add_window_buttons: bool,
    pub show_eject_buttons: bool,
    pub show_window_close_buttons: bool,
}

impl WorkspaceLockState {
    /// Every permission granted and every button shown.
    pub fn unlocked() -> Self {
        Self::uniform(true)
    }

    /// Every permission revoked and every button hidden.
    pub fn locked() -> Self {
        Self::uniform(false)
    }

    fn uniform(value: bool) -> Self {
        Self {
            allow_drop: value,
            allow_drop_left: value,
            allow_drop_top: value,
            allow_drop_right: value,
            allow_drop_bottom: value,
            allow_extract: value,
            allow_window_reorder: value,
            allow_splitters: value,
            show_close_button: value,
            show_save_button: value,
            show_add_window_buttons: value,
            show_eject_buttons: value,
            show_window_close_buttons: value,
        }
    }
}

impl Default for WorkspaceLockState {
    fn default() -> Self {
        Self::unlocked()
    }
}

/// Resolved state of a row, column or group. Rows and columns only act on
/// `allow_drop` and `allow_splitters`; the remaining fields are group-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerLockState {
    pub allow_drop: bool,
    pub allow_drop_left: bool,
    pub allow_drop_top: bool,
    pub allow_drop_right: bool,
    pub allow_drop_bottom: bool,
    pub allow_drop_header: bool,
    pub allow_extract: bool,
    pub allow_reorder: bool,
    pub allow_splitters: bool,
    pub show_maximize_button: bool,
    pub show_eject_button: bool,
    pub show_add_window_button: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowLockState {
    pub allow_extract: bool,
    pub allow_reorder: bool,
    pub show_close_button: bool,
}
