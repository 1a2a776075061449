//! Item-related domain events.

use serde::{Deserialize, Serialize};

use crate::types::ItemId;

/// Events related to item tree mutations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ItemEvent {
    /// A folder was created.
    Created {
        /// The new item.
        item_id: ItemId,
        /// The containing folder (None for root).
        parent_id: Option<ItemId>,
    },
    /// An item was renamed.
    Renamed {
        /// The item ID.
        item_id: ItemId,
        /// Name before the rename.
        old_name: String,
        /// Name after the rename.
        new_name: String,
    },
    /// An item was moved to a different folder.
    Moved {
        /// The item ID.
        item_id: ItemId,
        /// The source folder (None for root).
        from: Option<ItemId>,
        /// The destination folder (None for root).
        to: Option<ItemId>,
    },
    /// An item and its descendants were deleted.
    Deleted {
        /// The item the user deleted.
        item_id: ItemId,
        /// Every removed ID, `item_id` first.
        removed: Vec<ItemId>,
    },
}

impl ItemEvent {
    /// The item the event is about.
    pub fn item_id(&self) -> ItemId {
        match self {
            Self::Created { item_id, .. }
            | Self::Renamed { item_id, .. }
            | Self::Moved { item_id, .. }
            | Self::Deleted { item_id, .. } => *item_id,
        }
    }
}
