mod core;
mod lock;
mod summary;

pub use self::core::*;
pub use lock::*;
pub use summary::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_copy_and_equality() {
        let b = Bounds::new(0.0, 10.0, 800.0, 600.0);
        let b2 = b;
        assert_eq!(b, b2);
        assert_eq!(Bounds::default().width, 0.0);
    }

    #[test]
    fn item_id_serializes_as_plain_string() {
        let id = ItemId::from("abc");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
        let back: ItemId = serde_json::from_str("\"abc\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn item_id_new_is_unique() {
        assert_ne!(ItemId::new(), ItemId::new());
    }

    #[test]
    fn window_id_display() {
        assert_eq!(WindowId::from("win-7").to_string(), "win-7");
    }

    #[test]
    fn container_kind_accepts_stack_alias() {
        let kind: ContainerKind = serde_json::from_str("\"stack\"").unwrap();
        assert_eq!(kind, ContainerKind::Group);
        assert_eq!(serde_json::to_string(&ContainerKind::Row).unwrap(), "\"row\"");
    }

    #[test]
    fn workspace_lock_state_extremes() {
        let locked = WorkspaceLockState::locked();
        assert!(!locked.allow_drop);
        assert!(!locked.show_save_button);
        assert_eq!(WorkspaceLockState::default(), WorkspaceLockState::unlocked());
    }

    #[test]
    fn lock_state_uses_camel_case() {
        let json = serde_json::to_value(WorkspaceLockState::unlocked()).unwrap();
        assert_eq!(json["allowDropLeft"], true);
        assert_eq!(json["showWindowCloseButtons"], true);
    }
}
