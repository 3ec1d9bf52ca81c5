//! Partial lock configurations and lock requests.
//!
//! Every field is optional: `None` means "not named by this config". How
//! unnamed fields are treated depends on whether the config is applied as a
//! full lock or a partial one.

use dockframe_common::{ContainerKind, ItemId, WorkspaceLockState};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceLockConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_bottom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_extract: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_window_reorder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_splitters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_save_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_add_window_buttons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_eject_buttons: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_window_close_buttons: Option<bool>,
}

impl WorkspaceLockConfig {
    pub fn all(value: bool) -> Self {
        let v = Some(value);
        Self {
            allow_drop: v,
            allow_drop_left: v,
            allow_drop_top: v,
            allow_drop_right: v,
            allow_drop_bottom: v,
            allow_extract: v,
            allow_window_reorder: v,
            allow_splitters: v,
            show_close_button: v,
            show_save_button: v,
            show_add_window_buttons: v,
            show_eject_buttons: v,
            show_window_close_buttons: v,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `allowDrop` fills the directional drop flags the config leaves unset.
    pub fn seeded(mut self) -> Self {
        if let Some(drop) = self.allow_drop {
            for flag in [
                &mut self.allow_drop_left,
                &mut self.allow_drop_top,
                &mut self.allow_drop_right,
                &mut self.allow_drop_bottom,
            ] {
                flag.get_or_insert(drop);
            }
        }
        self
    }

    /// Write the named fields into `state`, in declaration order.
    pub fn apply_to(&self, state: &mut WorkspaceLockState) {
        let pairs = [
            (self.allow_drop, &mut state.allow_drop),
            (self.allow_drop_left, &mut state.allow_drop_left),
            (self.allow_drop_top, &mut state.allow_drop_top),
            (self.allow_drop_right, &mut state.allow_drop_right),
            (self.allow_drop_bottom, &mut state.allow_drop_bottom),
            (self.allow_extract, &mut state.allow_extract),
            (self.allow_window_reorder, &mut state.allow_window_reorder),
            (self.allow_splitters, &mut state.allow_splitters),
            (self.show_close_button, &mut state.show_close_button),
            (self.show_save_button, &mut state.show_save_button),
            (self.show_add_window_buttons, &mut state.show_add_window_buttons),
            (self.show_eject_buttons, &mut state.show_eject_buttons),
            (self.show_window_close_buttons, &mut state.show_window_close_buttons),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    /// Every field set from a concrete state, for snapshots.
    pub fn from_state(state: &WorkspaceLockState) -> Self {
        Self {
            allow_drop: Some(state.allow_drop),
            allow_drop_left: Some(state.allow_drop_left),
            allow_drop_top: Some(state.allow_drop_top),
            allow_drop_right: Some(state.allow_drop_right),
            allow_drop_bottom: Some(state.allow_drop_bottom),
            allow_extract: Some(state.allow_extract),
            allow_window_reorder: Some(state.allow_window_reorder),
            allow_splitters: Some(state.allow_splitters),
            show_close_button: Some(state.show_close_button),
            show_save_button: Some(state.show_save_button),
            show_add_window_buttons: Some(state.show_add_window_buttons),
            show_eject_buttons: Some(state.show_eject_buttons),
            show_window_close_buttons: Some(state.show_window_close_buttons),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerLockConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_left: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_top: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_right: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_bottom: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_drop_header: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_extract: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reorder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_splitters: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_maximize_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_eject_button: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_add_window_button: Option<bool>,
}

impl ContainerLockConfig {
    /// Every flag set to `value`. The header flag only exists on groups.
    pub fn all(value: bool, kind: ContainerKind) -> Self {
        let v = Some(value);
        Self {
            allow_drop: v,
            allow_drop_left: v,
            allow_drop_top: v,
            allow_drop_right: v,
            allow_drop_bottom: v,
            allow_drop_header: (kind == ContainerKind::Group).then_some(value),
            allow_extract: v,
            allow_reorder: v,
            allow_splitters: v,
            show_maximize_button: v,
            show_eject_button: v,
            show_add_window_button: v,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `allowDrop` fills the directional drop flags left unset, plus the
    /// header flag for groups.
    pub fn seeded(mut self, kind: ContainerKind) -> Self {
        if let Some(drop) = self.allow_drop {
            for flag in [
                &mut self.allow_drop_left,
                &mut self.allow_drop_top,
                &mut self.allow_drop_right,
                &mut self.allow_drop_bottom,
            ] {
                flag.get_or_insert(drop);
            }
            if kind == ContainerKind::Group {
                self.allow_drop_header.get_or_insert(drop);
            }
        }
        self
    }

    /// Overwrite the fields `other` names.
    pub fn merge(&mut self, other: &Self) {
        let pairs = [
            (other.allow_drop, &mut self.allow_drop),
            (other.allow_drop_left, &mut self.allow_drop_left),
            (other.allow_drop_top, &mut self.allow_drop_top),
            (other.allow_drop_right, &mut self.allow_drop_right),
            (other.allow_drop_bottom, &mut self.allow_drop_bottom),
            (other.allow_drop_header, &mut self.allow_drop_header),
            (other.allow_extract, &mut self.allow_extract),
            (other.allow_reorder, &mut self.allow_reorder),
            (other.allow_splitters, &mut self.allow_splitters),
            (other.show_maximize_button, &mut self.show_maximize_button),
            (other.show_eject_button, &mut self.show_eject_button),
            (other.show_add_window_button, &mut self.show_add_window_button),
        ];
        for (value, slot) in pairs {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowLockConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_extract: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_reorder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_close_button: Option<bool>,
}

impl WindowLockConfig {
    pub fn all(value: bool) -> Self {
        Self {
            allow_extract: Some(value),
            allow_reorder: Some(value),
            show_close_button: Some(value),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn merge(&mut self, other: &Self) {
        if other.allow_extract.is_some() {
            self.allow_extract = other.allow_extract;
        }
        if other.allow_reorder.is_some() {
            self.allow_reorder = other.allow_reorder;
        }
        if other.show_close_button.is_some() {
            self.show_close_button = other.show_close_button;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockWorkspaceRequest {
    pub workspace_id: ItemId,
    #[serde(default)]
    pub config: Option<WorkspaceLockConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockContainerRequest {
    pub item_id: ItemId,
    #[serde(rename = "type")]
    pub kind: ContainerKind,
    #[serde(default)]
    pub config: Option<ContainerLockConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockWindowRequest {
    pub window_id: ItemId,
    #[serde(default)]
    pub config: Option<WindowLockConfig>,
}
