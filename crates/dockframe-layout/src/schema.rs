//! Serializable item and workspace descriptors.
//!
//! These mirror the docking tree's config schema and double as the
//! snapshot format used for save-as-layout and hibernation.

use dockframe_common::{ContainerKind, ItemId, WindowId};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::locking::{ContainerLockConfig, WindowLockConfig, WorkspaceLockConfig};

/// Optional min/max bounds on an item, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SizeConstraints {
    pub min_width: Option<f64>,
    pub max_width: Option<f64>,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ItemConfig {
    Row(ContainerConfig),
    Column(ContainerConfig),
    #[serde(alias = "stack")]
    Group(ContainerConfig),
    Window(WindowConfig),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContainerConfig {
    pub id: Option<ItemId>,
    pub children: Vec<ItemConfig>,
    pub constraints: SizeConstraints,
    pub lock: ContainerLockConfig,
    pub maximization_boundary: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WindowConfig {
    /// Placement id. Generated when absent.
    pub id: Option<ItemId>,
    pub window_id: Option<WindowId>,
    pub app_name: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub context: Value,
    pub constraints: SizeConstraints,
    pub lock: WindowLockConfig,
    pub maximization_boundary: Option<bool>,
}

impl ItemConfig {
    pub fn container(kind: ContainerKind, children: Vec<ItemConfig>) -> Self {
        let config = ContainerConfig {
            children,
            ..Default::default()
        };
        match kind {
            ContainerKind::Row => ItemConfig::Row(config),
            ContainerKind::Column => ItemConfig::Column(config),
            ContainerKind::Group => ItemConfig::Group(config),
        }
    }

    pub fn window(app_name: impl Into<String>) -> Self {
        ItemConfig::Window(WindowConfig {
            app_name: Some(app_name.into()),
            ..Default::default()
        })
    }

    pub fn id(&self) -> Option<&ItemId> {
        match self {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => c.id.as_ref(),
            ItemConfig::Window(w) => w.id.as_ref(),
        }
    }

    pub fn with_id(mut self, id: impl Into<ItemId>) -> Self {
        let id = Some(id.into());
        match &mut self {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => c.id = id,
            ItemConfig::Window(w) => w.id = id,
        }
        self
    }

    pub fn container_kind(&self) -> Option<ContainerKind> {
        match self {
            ItemConfig::Row(_) => Some(ContainerKind::Row),
            ItemConfig::Column(_) => Some(ContainerKind::Column),
            ItemConfig::Group(_) => Some(ContainerKind::Group),
            ItemConfig::Window(_) => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            ItemConfig::Row(_) => "row",
            ItemConfig::Column(_) => "column",
            ItemConfig::Group(_) => "group",
            ItemConfig::Window(_) => "window",
        }
    }

    pub fn children(&self) -> &[ItemConfig] {
        match self {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => &c.children,
            ItemConfig::Window(_) => &[],
        }
    }

    pub fn constraints(&self) -> SizeConstraints {
        match self {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => c.constraints,
            ItemConfig::Window(w) => w.constraints,
        }
    }

    /// Give every item in this subtree an id, keeping the ones already set.
    pub fn ensure_ids(&mut self) -> ItemId {
        match self {
            ItemConfig::Row(c) | ItemConfig::Column(c) | ItemConfig::Group(c) => {
                for child in &mut c.children {
                    child.ensure_ids();
                }
                c.id.get_or_insert_with(ItemId::new).clone()
            }
            ItemConfig::Window(w) => w.id.get_or_insert_with(ItemId::new).clone(),
        }
    }

    /// Depth-first visit of every item in this subtree, self first.
    pub fn visit(&self, f: &mut impl FnMut(&ItemConfig)) {
        f(self);
        for child in self.children() {
            child.visit(f);
        }
    }

    /// Placement ids of every window in this subtree.
    pub fn window_ids(&self) -> Vec<ItemId> {
        let mut ids = Vec::new();
        self.visit(&mut |item| {
            if let ItemConfig::Window(w) = item {
                if let Some(id) = &w.id {
                    ids.push(id.clone());
                }
            }
        });
        ids
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceSettings {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub is_pinned: bool,
    pub is_selected: bool,
    /// Rebuild this existing workspace in place instead of opening a new tab.
    pub reuse_workspace_id: Option<ItemId>,
    pub position_index: Option<usize>,
    pub lock: WorkspaceLockConfig,
}

impl Default for WorkspaceSettings {
    fn default() -> Self {
        Self {
            title: None,
            icon: None,
            is_pinned: false,
            is_selected: true,
            reuse_workspace_id: None,
            position_index: None,
            lock: WorkspaceLockConfig::default(),
        }
    }
}

/// Everything needed to open a workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkspaceDefinition {
    pub children: Vec<ItemConfig>,
    pub config: WorkspaceSettings,
    pub context: Value,
}

/// Tree-shaped document describing a live or hibernated workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub id: ItemId,
    pub children: Vec<ItemConfig>,
    pub config: WorkspaceSettings,
    #[serde(default)]
    pub context: Value,
}

impl WorkspaceSnapshot {
    /// Definition that rebuilds this snapshot into the same workspace id.
    pub fn into_definition(self) -> WorkspaceDefinition {
        let mut config = self.config;
        config.reuse_workspace_id = Some(self.id);
        config.is_selected = false;
        WorkspaceDefinition {
            children: self.children,
            config,
            context: self.context,
        }
    }

    pub fn window_ids(&self) -> Vec<ItemId> {
        self.children.iter().flat_map(ItemConfig::window_ids).collect()
    }
}
