//! In-process docking tree: rows, columns, stacks and component leaves.

mod build;
mod operations;
mod sizing;
mod traversal;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ContainerConfig, ItemConfig, SizeConstraints};
    use dockframe_common::{Bounds, ContainerKind, ItemId};

    fn area() -> Bounds {
        Bounds::new(0.0, 0.0, 1000.0, 600.0)
    }

    fn tree_of(children: Vec<ItemConfig>) -> DockTree {
        DockTree::from_config(ItemId::from("ws"), children, area(), 30.0).unwrap()
    }

    fn window(id: &str) -> ItemConfig {
        ItemConfig::window("app").with_id(id)
    }

    #[test]
    fn single_window_is_wrapped_in_row_and_stack() {
        let tree = tree_of(vec![window("w1")]);
        let top = tree.top_container().unwrap().clone();
        assert_eq!(tree.get(&top).unwrap().kind(), ItemKind::Row);

        let stack = tree.enclosing_stack(&ItemId::from("w1")).unwrap();
        assert_eq!(tree.parent_of(stack), Some(&top));
        assert_eq!(
            tree.get(stack).unwrap().active_child(),
            Some(&ItemId::from("w1"))
        );
        assert_eq!(tree.windows().len(), 1);
    }

    #[test]
    fn build_queues_creation_events_then_initialised() {
        let mut tree = tree_of(vec![window("w1")]);
        let events = tree.take_events();
        assert!(events.contains(&TreeEvent::ComponentCreated {
            id: ItemId::from("w1")
        }));
        assert_eq!(
            events.last(),
            Some(&TreeEvent::Initialised {
                root: ItemId::from("ws")
            })
        );
        assert!(tree.take_events().is_empty());
    }

    #[test]
    fn empty_group_gets_placeholder() {
        let tree = tree_of(vec![ItemConfig::container(ContainerKind::Group, vec![])]);
        assert!(tree.windows().is_empty());
        let top = tree.top_container().unwrap().clone();
        let slot = tree.placeholder_slot(&top).unwrap();
        assert_eq!(tree.get(&slot).unwrap().kind(), ItemKind::Stack);
        assert_eq!(tree.placeholder_slot(&slot), Some(slot.clone()));
    }

    #[test]
    fn children_of_a_row_share_width() {
        let tree = tree_of(vec![window("a"), window("b")]);
        let a = tree.get(&ItemId::from("a")).unwrap().bounds();
        let b = tree.get(&ItemId::from("b")).unwrap().bounds();
        assert_eq!(a.width, 500.0);
        assert_eq!(b.left, 500.0);
        // header is taken off the top of each stack
        assert_eq!(a.top, 30.0);
        assert_eq!(a.height, 570.0);
    }

    #[test]
    fn insert_into_row_rebalances_weights() {
        let mut tree = tree_of(vec![window("a"), window("b")]);
        let top = tree.top_container().unwrap().clone();
        tree.insert_config(&top, None, window("c")).unwrap();
        for id in ["a", "b", "c"] {
            let width = tree.get(&ItemId::from(id)).unwrap().bounds().width;
            assert!((width - 1000.0 / 3.0).abs() < 1e-6);
        }
    }

    #[test]
    fn insert_into_stack_activates_new_tab() {
        let mut tree = tree_of(vec![window("a")]);
        let stack = tree.enclosing_stack(&ItemId::from("a")).unwrap().clone();
        tree.take_events();
        tree.insert_config(&stack, None, window("b")).unwrap();
        assert_eq!(
            tree.get(&stack).unwrap().active_child(),
            Some(&ItemId::from("b"))
        );
        assert!(tree
            .take_events()
            .contains(&TreeEvent::ActiveContentItemChanged {
                stack: stack.clone(),
                item: ItemId::from("b"),
            }));
    }

    #[test]
    fn stack_rejects_containers() {
        let mut tree = tree_of(vec![window("a")]);
        let stack = tree.enclosing_stack(&ItemId::from("a")).unwrap().clone();
        let err = tree
            .insert_config(&stack, None, ItemConfig::container(ContainerKind::Row, vec![]))
            .unwrap_err();
        assert!(err.to_string().contains("row"));
    }

    #[test]
    fn removing_last_window_prunes_stack_but_keeps_top() {
        let mut tree = tree_of(vec![window("a"), window("b")]);
        let top = tree.top_container().unwrap().clone();
        tree.remove_item(&ItemId::from("a")).unwrap();
        assert_eq!(tree.get(&top).unwrap().children().len(), 1);
        assert_eq!(
            tree.get(&ItemId::from("b")).unwrap().bounds().width,
            1000.0
        );

        tree.remove_item(&ItemId::from("b")).unwrap();
        assert!(tree.contains(&top));
        assert!(tree.get(&top).unwrap().children().is_empty());
    }

    #[test]
    fn removing_active_tab_activates_neighbour() {
        let mut tree = tree_of(vec![ItemConfig::container(
            ContainerKind::Group,
            vec![window("a"), window("b"), window("c")],
        )]);
        let stack = tree.enclosing_stack(&ItemId::from("a")).unwrap().clone();
        tree.set_active(&stack, &ItemId::from("b"));
        tree.remove_item(&ItemId::from("b")).unwrap();
        assert_eq!(
            tree.get(&stack).unwrap().active_child(),
            Some(&ItemId::from("c"))
        );
    }

    #[test]
    fn replace_placeholder_keeps_slot() {
        let mut tree = tree_of(vec![ItemConfig::container(ContainerKind::Group, vec![])]);
        let top = tree.top_container().unwrap().clone();
        let slot = tree.placeholder_slot(&top).unwrap();
        let placeholder = tree.get(&slot).unwrap().children()[0].clone();

        tree.replace_child(&placeholder, window("w")).unwrap();
        assert!(!tree.contains(&placeholder));
        assert_eq!(tree.parent_of(&ItemId::from("w")), Some(&slot));
        assert!(tree.placeholder_slot(&top).is_none());
    }

    #[test]
    fn wrap_takes_over_slot() {
        let mut tree = tree_of(vec![window("a")]);
        let top = tree.top_container().unwrap().clone();
        let wrapper = tree.wrap(&top, ItemKind::Column).unwrap();
        assert_eq!(tree.top_container(), Some(&wrapper));
        assert_eq!(tree.parent_of(&top), Some(&wrapper));
        assert_eq!(tree.get(&wrapper).unwrap().kind(), ItemKind::Column);
    }

    #[test]
    fn extract_config_preserves_ids() {
        let tree = tree_of(vec![
            window("a"),
            ItemConfig::container(ContainerKind::Group, vec![]).with_id("g"),
        ]);
        let config = tree.content_config();
        assert_eq!(config.len(), 1);
        assert_eq!(config[0].window_ids(), vec![ItemId::from("a")]);

        let group = tree.extract_config(&ItemId::from("g")).unwrap();
        assert!(group.children().is_empty());
    }

    #[test]
    fn limits_aggregate_along_and_across() {
        let constrained = |id: &str, min: f64, max: f64| {
            ItemConfig::Group(ContainerConfig {
                id: Some(ItemId::from(id)),
                children: vec![window(&format!("{id}-w"))],
                constraints: SizeConstraints {
                    min_width: Some(min),
                    max_width: Some(max),
                    ..Default::default()
                },
                ..Default::default()
            })
        };
        let tree = tree_of(vec![constrained("s1", 100.0, 300.0), constrained("s2", 200.0, 400.0)]);
        let top = tree.top_container().unwrap().clone();
        assert_eq!(tree.limits(&top, Axis::Horizontal), (300.0, 700.0));
        // stacks add their header vertically
        assert_eq!(tree.min_size(&ItemId::from("s1"), Axis::Vertical), 30.0);
    }

    #[test]
    fn update_size_scales_siblings() {
        let mut tree = tree_of(vec![window("a"), window("b"), window("c")]);
        let stack = tree.enclosing_stack(&ItemId::from("a")).unwrap().clone();
        assert!(tree.update_size(&stack, Axis::Horizontal, 500.0));
        assert_eq!(tree.size_along(&stack, Axis::Horizontal), 500.0);
        let b = tree.get(&ItemId::from("b")).unwrap().bounds().width;
        assert!((b - 250.0).abs() < 1e-6);
        // a lone child cannot be resized
        let mut single = tree_of(vec![window("x")]);
        let s = single.enclosing_stack(&ItemId::from("x")).unwrap().clone();
        assert!(!single.update_size(&s, Axis::Horizontal, 10.0));
    }

    #[test]
    fn split_ancestor_walks_through_stack() {
        let tree = tree_of(vec![window("a"), window("b")]);
        let stack = tree.enclosing_stack(&ItemId::from("a")).unwrap().clone();
        assert_eq!(
            tree.split_ancestor(&ItemId::from("a"), Axis::Horizontal),
            Some(stack)
        );
        assert_eq!(tree.split_ancestor(&ItemId::from("a"), Axis::Vertical), None);
    }

    #[test]
    fn maximize_has_single_slot() {
        let mut tree = tree_of(vec![window("a"), window("b")]);
        let sa = tree.enclosing_stack(&ItemId::from("a")).unwrap().clone();
        let sb = tree.enclosing_stack(&ItemId::from("b")).unwrap().clone();

        tree.maximize(&sa).unwrap();
        assert_eq!(tree.get(&sa).unwrap().bounds(), area());
        tree.maximize(&sb).unwrap();
        assert!(!tree.get(&sa).unwrap().is_maximized());
        assert!(tree.get(&sb).unwrap().is_maximized());
        assert_eq!(tree.maximized(), Some(&sb));

        assert!(tree.restore(&sb));
        assert!(!tree.restore(&sb));
        assert_eq!(tree.get(&sb).unwrap().bounds().width, 500.0);
    }

    #[test]
    fn duplicate_id_never_materialises() {
        let mut tree = tree_of(vec![window("a")]);
        let top = tree.top_container().unwrap().clone();
        let requested = tree.insert_config(&top, None, window("a")).unwrap();
        assert_eq!(requested, ItemId::from("a"));
        assert_eq!(tree.windows().len(), 2);
    }
}
