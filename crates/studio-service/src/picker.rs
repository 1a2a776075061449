//! Legal move destinations for an item.

use serde::{Deserialize, Serialize};

use studio_core::AppResult;
use studio_core::types::{ChildOrder, ItemId};
use studio_entity::item::Item;

use crate::manager::ItemTreeManager;

/// One entry in the destination list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDestination {
    /// Target folder (None for the root level).
    pub target: Option<ItemId>,
    /// Display label.
    pub label: String,
    /// Nesting depth of the target, 0 for the root entry and root-level folders.
    pub depth: usize,
    /// The item already lives here; shown but not selectable.
    pub is_current: bool,
}

/// Destination list for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDestinations {
    /// The item being moved.
    pub item_id: ItemId,
    /// Its name, for prompts.
    pub item_name: String,
    /// Root entry first, then folders depth-first.
    pub entries: Vec<MoveDestination>,
}

impl MoveDestinations {
    /// Entries that can actually be chosen.
    pub fn selectable(&self) -> impl Iterator<Item = &MoveDestination> {
        self.entries.iter().filter(|entry| !entry.is_current)
    }

    /// Whether `target` is listed and selectable.
    pub fn allows(&self, target: Option<ItemId>) -> bool {
        self.selectable().any(|entry| entry.target == target)
    }

    /// True when nothing but the current location is listed.
    pub fn has_no_alternatives(&self) -> bool {
        self.selectable().next().is_none()
    }
}

/// Read-only query enumerating where an item may be moved.
///
/// The root entry is always listed. Every folder that passes the cycle
/// check is listed; the item itself and its descendants never are. The
/// item's current parent stays in the list flagged `is_current`.
#[derive(Debug, Clone, Copy)]
pub struct MoveDestinationPicker<'a> {
    manager: &'a ItemTreeManager,
    root_label: &'a str,
}

impl<'a> MoveDestinationPicker<'a> {
    /// Creates a picker over a manager.
    pub fn new(manager: &'a ItemTreeManager, root_label: &'a str) -> Self {
        Self {
            manager,
            root_label,
        }
    }

    /// Lists destinations for the item with `id`.
    pub fn destinations_for(&self, id: &ItemId) -> AppResult<MoveDestinations> {
        let item = self.manager.require(id)?;

        let mut entries = vec![MoveDestination {
            target: None,
            label: self.root_label.to_string(),
            depth: 0,
            is_current: item.parent_id.is_none(),
        }];

        self.collect(item, None, 0, &mut entries);

        Ok(MoveDestinations {
            item_id: item.id,
            item_name: item.name.clone(),
            entries,
        })
    }

    fn collect(
        &self,
        moving: &Item,
        parent_id: Option<ItemId>,
        depth: usize,
        entries: &mut Vec<MoveDestination>,
    ) {
        for folder in self
            .manager
            .list_children_sorted(parent_id, ChildOrder::default())
            .into_iter()
            .filter(|child| child.is_folder())
        {
            if moving.is_folder() && self.manager.would_create_cycle(&moving.id, &folder.id) {
                continue;
            }

            entries.push(MoveDestination {
                target: Some(folder.id),
                label: folder.name.clone(),
                depth,
                is_current: moving.parent_id == Some(folder.id),
            });

            self.collect(moving, Some(folder.id), depth + 1, entries);
        }
    }
}
