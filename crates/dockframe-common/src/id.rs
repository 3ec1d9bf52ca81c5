use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::ItemId;

pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Identity of the hosting frame. Every workspace, container and window
/// summary carries it so the router can tell frames apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameId(String);

impl FrameId {
    pub fn new() -> Self {
        Self(new_id())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The frame id viewed as an item id, for lookups that accept any id.
    pub fn as_item_id(&self) -> ItemId {
        ItemId::from(self.0.as_str())
    }
}

impl Default for FrameId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for FrameId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_id_is_valid_uuid() {
        let id = new_id();
        let parsed = uuid::Uuid::parse_str(&id);
        assert!(parsed.is_ok());
        assert_eq!(parsed.unwrap().get_version_num(), 4);
    }

    #[test]
    fn new_id_is_unique() {
        assert_ne!(new_id(), new_id());
    }

    #[test]
    fn frame_id_display() {
        let fid = FrameId::from("frame-a");
        assert_eq!(fid.to_string(), "frame-a");
        assert_eq!(fid.as_item_id(), ItemId::from("frame-a"));
    }

    #[test]
    fn frame_id_serialization() {
        let fid = FrameId::new();
        let json = serde_json::to_string(&fid).unwrap();
        let deserialized: FrameId = serde_json::from_str(&json).unwrap();
        assert_eq!(fid, deserialized);
    }
}
