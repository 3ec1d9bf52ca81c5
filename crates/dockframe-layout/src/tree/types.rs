//! Core types for the docking tree: node kinds, axes, nodes and tree events.

use std::collections::HashMap;

use dockframe_common::{Bounds, ContainerKind, ItemId, WindowId};
use serde_json::Value;

use crate::schema::SizeConstraints;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Root,
    Row,
    Column,
    Stack,
    Component,
}

impl ItemKind {
    pub fn from_container(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::Row => ItemKind::Row,
            ContainerKind::Column => ItemKind::Column,
            ContainerKind::Group => ItemKind::Stack,
        }
    }

    pub fn container_kind(self) -> Option<ContainerKind> {
        match self {
            ItemKind::Row => Some(ContainerKind::Row),
            ItemKind::Column => Some(ContainerKind::Column),
            ItemKind::Stack => Some(ContainerKind::Group),
            ItemKind::Root | ItemKind::Component => None,
        }
    }

    pub fn is_container(self) -> bool {
        self.container_kind().is_some()
    }

    /// The axis a container distributes its children along.
    pub fn split_axis(self) -> Option<Axis> {
        match self {
            ItemKind::Row => Some(Axis::Horizontal),
            ItemKind::Column => Some(Axis::Vertical),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Root => "root",
            ItemKind::Row => "row",
            ItemKind::Column => "column",
            ItemKind::Stack => "stack",
            ItemKind::Component => "component",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Width. Split by rows.
    Horizontal,
    /// Height. Split by columns.
    Vertical,
}

impl Axis {
    pub fn opposite(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Kind of container that splits along this axis.
    pub fn container(self) -> ItemKind {
        match self {
            Axis::Horizontal => ItemKind::Row,
            Axis::Vertical => ItemKind::Column,
        }
    }

    pub fn length(self, bounds: &Bounds) -> f64 {
        match self {
            Axis::Horizontal => bounds.width,
            Axis::Vertical => bounds.height,
        }
    }
}

/// Application data carried by a component leaf.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComponentData {
    /// Synthetic leaf standing in for an empty group.
    pub placeholder: bool,
    pub window_id: Option<WindowId>,
    pub app_name: Option<String>,
    pub url: Option<String>,
    pub title: Option<String>,
    pub context: Value,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: ItemId,
    pub(crate) kind: ItemKind,
    pub(crate) parent: Option<ItemId>,
    pub(crate) children: Vec<ItemId>,
    /// Share of the parent's main axis. Only meaningful under rows and columns.
    pub(crate) weight: f64,
    pub(crate) bounds: Bounds,
    pub(crate) constraints: SizeConstraints,
    /// Active tab, for stacks.
    pub(crate) active: Option<ItemId>,
    pub(crate) is_maximized: bool,
    pub(crate) component: Option<ComponentData>,
}

impl Node {
    pub(crate) fn new(id: ItemId, kind: ItemKind, parent: Option<ItemId>) -> Self {
        Self {
            id,
            kind,
            parent,
            children: Vec::new(),
            weight: 1.0,
            bounds: Bounds::default(),
            constraints: SizeConstraints::default(),
            active: None,
            is_maximized: false,
            component: None,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn parent(&self) -> Option<&ItemId> {
        self.parent.as_ref()
    }

    pub fn children(&self) -> &[ItemId] {
        &self.children
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn constraints(&self) -> &SizeConstraints {
        &self.constraints
    }

    pub fn active_child(&self) -> Option<&ItemId> {
        self.active.as_ref()
    }

    pub fn is_maximized(&self) -> bool {
        self.is_maximized
    }

    pub fn component(&self) -> Option<&ComponentData> {
        self.component.as_ref()
    }

    pub fn is_placeholder(&self) -> bool {
        self.component.as_ref().is_some_and(|c| c.placeholder)
    }

    /// A component hosting a real window.
    pub fn is_window(&self) -> bool {
        self.kind == ItemKind::Component && !self.is_placeholder()
    }
}

/// Lifecycle notifications queued by the tree and drained by the layout
/// controller after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeEvent {
    Initialised { root: ItemId },
    ItemCreated { id: ItemId, kind: ItemKind },
    ItemDestroyed {
        id: ItemId,
        kind: ItemKind,
        parent: Option<ItemId>,
    },
    StackCreated { id: ItemId },
    TabCreated { stack: ItemId, item: ItemId },
    ComponentCreated { id: ItemId },
    ActiveContentItemChanged { stack: ItemId, item: ItemId },
    ItemDropped { id: ItemId, parent: ItemId },
}

/// Arena-backed docking tree for one workspace. The root id is the
/// workspace id and the root holds at most one child.
#[derive(Debug, Clone)]
pub struct DockTree {
    pub(crate) root: ItemId,
    pub(crate) nodes: HashMap<ItemId, Node>,
    pub(crate) maximized: Option<ItemId>,
    pub(crate) header_height: f64,
    pub(crate) bounds: Bounds,
    pub(crate) events: Vec<TreeEvent>,
}

impl DockTree {
    pub fn root_id(&self) -> &ItemId {
        &self.root
    }

    pub fn get(&self, id: &ItemId) -> Option<&Node> {
        self.nodes.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: &ItemId) -> Option<&mut Node> {
        self.nodes.get_mut(id)
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.nodes.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.top_container().is_none()
    }

    /// The single child of the root, when any.
    pub fn top_container(&self) -> Option<&ItemId> {
        self.nodes.get(&self.root).and_then(|n| n.children.first())
    }

    pub fn maximized(&self) -> Option<&ItemId> {
        self.maximized.as_ref()
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn header_height(&self) -> f64 {
        self.header_height
    }

    pub fn parent_of(&self, id: &ItemId) -> Option<&ItemId> {
        self.nodes.get(id).and_then(|n| n.parent.as_ref())
    }

    pub fn index_of(&self, id: &ItemId) -> Option<usize> {
        let parent = self.parent_of(id)?;
        self.nodes
            .get(parent)
            .and_then(|p| p.children.iter().position(|c| c == id))
    }

    /// Drain the queued tree events in emission order.
    pub fn take_events(&mut self) -> Vec<TreeEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: TreeEvent) {
        self.events.push(event);
    }
}
