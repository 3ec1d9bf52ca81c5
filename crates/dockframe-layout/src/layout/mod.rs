//! Layout controller: every physical tree mutation, resize validation and
//! the translation of tree events into domain events.

mod controller;
mod mutations;
mod sizing;

pub use controller::LayoutController;
pub use sizing::{feasible_range, ResizeRequest};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborators::FrameChrome;
    use crate::schema::{ContainerConfig, ItemConfig, SizeConstraints};
    use crate::store::{EntityStore, Workspace};
    use crate::tree::{Axis, ItemKind};
    use crate::waiters::PendingCreations;
    use crate::wrapper::WrapperFactory;
    use dockframe_common::{Bounds, ContainerKind, Event, EventBus, FrameId, ItemId, LayoutError};
    use dockframe_config::FrameConfig;
    use std::sync::Mutex;
    use tokio::sync::broadcast::Receiver;

    #[derive(Default)]
    struct RecordingChrome {
        calls: Mutex<Vec<String>>,
    }

    impl RecordingChrome {
        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl FrameChrome for RecordingChrome {
        fn show_add_window_affordance(&self, workspace_id: &ItemId, visible: bool) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("affordance:{workspace_id}:{visible}"));
        }

        fn set_chrome_hidden(&self, workspace_id: &ItemId, hidden: bool) {
            self.calls
                .lock()
                .unwrap()
                .push(format!("hidden:{workspace_id}:{hidden}"));
        }
    }

    struct Fixture {
        store: EntityStore,
        wrappers: WrapperFactory,
        pending: PendingCreations,
        events: EventBus,
        chrome: RecordingChrome,
        config: FrameConfig,
        frame_id: FrameId,
        area: Bounds,
    }

    impl Fixture {
        fn new() -> Self {
            let mut store = EntityStore::new();
            store.insert(Workspace::new(ItemId::from("ws"), "ws"), None);
            Self {
                store,
                wrappers: WrapperFactory::new(),
                pending: PendingCreations::new(),
                events: EventBus::new(256),
                chrome: RecordingChrome::default(),
                config: FrameConfig::default(),
                frame_id: FrameId::from("frame"),
                area: Bounds::new(0.0, 0.0, 1000.0, 500.0),
            }
        }

        fn controller(&mut self) -> LayoutController<'_> {
            LayoutController {
                store: &mut self.store,
                wrappers: &mut self.wrappers,
                pending: &mut self.pending,
                events: &self.events,
                chrome: &self.chrome,
                config: &self.config,
                frame_id: &self.frame_id,
                area: self.area,
            }
        }

        fn ws(&self) -> &Workspace {
            self.store.get_by_id(&ItemId::from("ws")).unwrap()
        }

        fn height(&self, id: &str) -> f64 {
            self.ws()
                .layout()
                .unwrap()
                .size_along(&ItemId::from(id), Axis::Vertical)
        }
    }

    fn ws_id() -> ItemId {
        ItemId::from("ws")
    }

    fn window(id: &str) -> ItemConfig {
        ItemConfig::window("app").with_id(id)
    }

    fn row(id: &str, min_height: f64, max_height: f64, child: &str) -> ItemConfig {
        ItemConfig::Row(ContainerConfig {
            id: Some(ItemId::from(id)),
            children: vec![window(child)],
            constraints: SizeConstraints {
                min_height: Some(min_height),
                max_height: Some(max_height),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    fn names(rx: &mut Receiver<Event>) -> Vec<&'static str> {
        let mut out = Vec::new();
        while let Ok(event) = rx.try_recv() {
            out.push(event.name());
        }
        out
    }

    #[tokio::test]
    async fn first_window_becomes_initial_tree() {
        let mut fixture = Fixture::new();
        let mut rx = fixture.events.subscribe();

        let id = fixture
            .controller()
            .add_window(&ws_id(), window("w1"))
            .await
            .unwrap();
        assert_eq!(id, ItemId::from("w1"));
        assert_eq!(fixture.ws().windows.len(), 1);
        assert!(fixture.ws().layout().is_some());
        assert_eq!(names(&mut rx), vec!["window.added"]);
        assert!(fixture.chrome.calls().contains(&"affordance:ws:false".to_string()));
        assert!(fixture.pending.is_empty());
    }

    #[tokio::test]
    async fn second_window_lands_in_first_row() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller.add_window(&ws_id(), window("w1")).await.unwrap();
        controller.add_window(&ws_id(), window("w2")).await.unwrap();

        let tree = fixture.ws().layout().unwrap();
        let top = tree.top_container().unwrap();
        assert_eq!(tree.get(top).unwrap().children().len(), 2);
        assert_eq!(
            fixture.ws().window(&ItemId::from("w2")).unwrap().bounds.width,
            500.0
        );
    }

    #[tokio::test]
    async fn window_into_window_id_joins_its_group() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller.add_window(&ws_id(), window("w1")).await.unwrap();
        controller
            .add_window(&ItemId::from("w1"), window("w2"))
            .await
            .unwrap();

        let tree = fixture.ws().layout().unwrap();
        assert_eq!(
            tree.enclosing_stack(&ItemId::from("w1")),
            tree.enclosing_stack(&ItemId::from("w2"))
        );
    }

    #[tokio::test]
    async fn window_replaces_placeholder() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(
                &ws_id(),
                vec![ItemConfig::container(ContainerKind::Group, vec![]).with_id("g")],
            )
            .await
            .unwrap();
        controller
            .add_window(&ItemId::from("g"), window("w1"))
            .await
            .unwrap();

        let tree = fixture.ws().layout().unwrap();
        let group = tree.get(&ItemId::from("g")).unwrap();
        assert_eq!(group.children(), &[ItemId::from("w1")]);
    }

    #[tokio::test]
    async fn container_at_root_bundles_opposite_axis() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller.add_window(&ws_id(), window("w1")).await.unwrap();
        let old_top = controller.tree(&ws_id()).unwrap().top_container().cloned().unwrap();

        let id = controller
            .add_container(
                &ws_id(),
                ItemConfig::container(ContainerKind::Row, vec![window("w2")]).with_id("r2"),
            )
            .await
            .unwrap();
        assert_eq!(id, ItemId::from("r2"));

        let tree = fixture.ws().layout().unwrap();
        let top = tree.top_container().unwrap();
        assert_eq!(tree.get(top).unwrap().kind(), ItemKind::Column);
        assert_eq!(
            tree.get(top).unwrap().children(),
            &[old_top, ItemId::from("r2")]
        );
        assert_eq!(fixture.ws().windows.len(), 2);
    }

    #[tokio::test]
    async fn group_into_group_is_rejected() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![ItemConfig::container(ContainerKind::Group, vec![window("w1")]).with_id("g")])
            .await
            .unwrap();
        let err = controller
            .add_container(&ItemId::from("g"), ItemConfig::container(ContainerKind::Group, vec![]))
            .await
            .unwrap_err();
        assert!(matches!(err, LayoutError::InvalidParent { .. }));
    }

    #[tokio::test]
    async fn duplicate_container_id_times_out() {
        let mut fixture = Fixture::new();
        fixture.config.timeouts.container_creation_ms = 20;
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![ItemConfig::container(ContainerKind::Column, vec![window("w1")]).with_id("c")])
            .await
            .unwrap();

        let err = controller
            .add_container(
                &ItemId::from("c"),
                ItemConfig::container(ContainerKind::Group, vec![window("w2")]).with_id("c"),
            )
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "timed out waiting for container creation");
        // the mutation itself is not rolled back
        assert_eq!(fixture.ws().windows.len(), 2);
        fixture.pending.prune();
        assert!(fixture.pending.is_empty());
    }

    #[tokio::test]
    async fn resize_clamps_into_feasible_range() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(
                &ws_id(),
                vec![ItemConfig::container(
                    ContainerKind::Column,
                    vec![row("r1", 100.0, 400.0, "a"), row("r2", 100.0, 200.0, "b")],
                )],
            )
            .await
            .unwrap();

        let request = |height| ResizeRequest {
            item_id: ItemId::from("r1"),
            width: None,
            height: Some(height),
        };
        controller.resize(&request(50.0)).unwrap();
        assert_eq!(fixture.height("r1"), 100.0);

        fixture.controller().resize(&request(1000.0)).unwrap();
        assert_eq!(fixture.height("r1"), 400.0);
        assert_eq!(fixture.height("r2"), 100.0);
    }

    #[tokio::test]
    async fn infeasible_resize_is_silently_skipped() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(
                &ws_id(),
                vec![ItemConfig::container(
                    ContainerKind::Column,
                    vec![row("r1", 300.0, 500.0, "a"), row("r2", 300.0, 500.0, "b")],
                )],
            )
            .await
            .unwrap();

        controller
            .resize(&ResizeRequest {
                item_id: ItemId::from("r1"),
                width: None,
                height: Some(350.0),
            })
            .unwrap();
        assert_eq!(fixture.height("r1"), 250.0);
    }

    #[tokio::test]
    async fn resizing_the_workspace_or_frame_fails() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller.add_window(&ws_id(), window("w1")).await.unwrap();
        for id in [ws_id(), ItemId::from("frame")] {
            let err = controller
                .resize(&ResizeRequest {
                    item_id: id,
                    width: Some(10.0),
                    height: None,
                })
                .unwrap_err();
            assert!(matches!(err, LayoutError::FrameResize(_)));
        }
    }

    #[tokio::test]
    async fn closing_last_window_resets_workspace() {
        let mut fixture = Fixture::new();
        let mut rx = fixture.events.subscribe();
        let mut controller = fixture.controller();
        controller.add_window(&ws_id(), window("w1")).await.unwrap();
        let removed = controller.remove_window(&ItemId::from("w1")).unwrap();
        assert_eq!(removed.id, ItemId::from("w1"));

        assert!(fixture.ws().layout().is_none());
        assert!(fixture.ws().windows.is_empty());
        assert!(fixture.store.get_by_id(&ws_id()).is_some());
        assert_eq!(names(&mut rx), vec!["window.added", "window.removed"]);
        assert_eq!(
            fixture.chrome.calls().last(),
            Some(&"affordance:ws:true".to_string())
        );
    }

    #[tokio::test]
    async fn removing_top_container_resets_workspace() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![window("a"), window("b")])
            .await
            .unwrap();
        let top = controller.tree(&ws_id()).unwrap().top_container().cloned().unwrap();
        controller.remove_container(&top).unwrap();
        assert!(fixture.ws().layout().is_none());
        assert!(fixture.ws().windows.is_empty());
    }

    #[tokio::test]
    async fn maximize_hides_chrome_under_root_and_restore_shows_it() {
        let mut fixture = Fixture::new();
        let mut rx = fixture.events.subscribe();
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![window("a"), window("b")])
            .await
            .unwrap();
        controller.maximize(&ItemId::from("a")).unwrap();
        controller.restore(&ItemId::from("a")).unwrap();

        let events = names(&mut rx);
        assert!(events.contains(&"window.maximized"));
        assert_eq!(events.last(), Some(&"window.restored"));
        let calls = fixture.chrome.calls();
        assert!(calls.contains(&"hidden:ws:true".to_string()));
        assert_eq!(calls.last(), Some(&"hidden:ws:false".to_string()));
    }

    #[tokio::test]
    async fn removing_the_maximized_window_restores_first() {
        let mut fixture = Fixture::new();
        let mut rx = fixture.events.subscribe();
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![window("a"), window("b")])
            .await
            .unwrap();
        controller.maximize(&ItemId::from("a")).unwrap();
        controller.remove_window(&ItemId::from("a")).unwrap();

        let events = names(&mut rx);
        let restored = events.iter().position(|e| *e == "window.restored").unwrap();
        let removed = events.iter().position(|e| *e == "window.removed").unwrap();
        assert!(restored < removed);
        assert_eq!(fixture.chrome.calls().last(), Some(&"hidden:ws:false".to_string()));
        assert!(fixture.ws().layout().unwrap().maximized().is_none());
    }

    #[tokio::test]
    async fn maximization_boundary_keeps_chrome() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![window("a"), window("b")])
            .await
            .unwrap();
        controller.wrappers.window_wrapper(&ItemId::from("a")).maximization_boundary = true;
        controller.maximize(&ItemId::from("a")).unwrap();
        assert!(!fixture.chrome.calls().contains(&"hidden:ws:true".to_string()));
    }

    #[tokio::test]
    async fn select_window_emits_selected() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(
                &ws_id(),
                vec![ItemConfig::container(ContainerKind::Group, vec![window("a"), window("b")])],
            )
            .await
            .unwrap();
        let mut rx = fixture.events.subscribe();
        fixture.controller().select_window(&ItemId::from("b")).unwrap();
        fixture.controller().select_window(&ItemId::from("b")).unwrap();
        assert_eq!(names(&mut rx), vec!["window.selected", "window.selected"]);
    }

    #[tokio::test]
    async fn detach_and_attach_keep_placement_id() {
        let mut fixture = Fixture::new();
        fixture.store.insert(Workspace::new(ItemId::from("other"), "other"), None);
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![window("a"), window("b")])
            .await
            .unwrap();

        let config = controller.detach_window(&ItemId::from("a")).unwrap();
        controller
            .attach_window(&ItemId::from("other"), config)
            .await
            .unwrap();
        let other = fixture.store.get_by_id(&ItemId::from("other")).unwrap();
        assert!(other.window(&ItemId::from("a")).is_some());
        assert!(fixture.ws().window(&ItemId::from("a")).is_none());
    }

    #[tokio::test]
    async fn bundle_container_wraps_in_place() {
        let mut fixture = Fixture::new();
        let mut controller = fixture.controller();
        controller
            .init_layout(&ws_id(), vec![ItemConfig::container(ContainerKind::Group, vec![window("a")]).with_id("g")])
            .await
            .unwrap();
        let wrapper = controller
            .bundle_container(&ItemId::from("g"), ContainerKind::Column)
            .unwrap();
        let tree = fixture.ws().layout().unwrap();
        assert_eq!(tree.parent_of(&ItemId::from("g")), Some(&wrapper));
    }
}
