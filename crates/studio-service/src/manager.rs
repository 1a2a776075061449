//! The authoritative item tree: CRUD, queries, and move validation.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use studio_core::AppResult;
use studio_core::config::explorer::ExplorerConfig;
use studio_core::error::AppError;
use studio_core::events::{DomainEvent, ItemEvent};
use studio_core::types::{ChildOrder, ItemId, SortKey};
use studio_entity::item::{Item, ItemKind, ItemNode, ItemTree};

use crate::store::ItemStore;

/// Tree behaviour that comes from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeSettings {
    /// Name given to newly created folders.
    pub default_folder_name: String,
}

impl Default for TreeSettings {
    fn default() -> Self {
        Self::from(&ExplorerConfig::default())
    }
}

impl From<&ExplorerConfig> for TreeSettings {
    fn from(config: &ExplorerConfig) -> Self {
        Self {
            default_folder_name: config.default_folder_name.clone(),
        }
    }
}

/// Result of a successful move request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The item now lives under `to`.
    Moved {
        /// Previous parent.
        from: Option<ItemId>,
        /// New parent.
        to: Option<ItemId>,
    },
    /// The destination was already the item's parent; nothing changed.
    Unchanged,
}

/// Owns every item of the session and keeps the forest invariants:
/// unique ids, folder-only parents, no cycles, cascading deletes.
#[derive(Debug, Clone, Default)]
pub struct ItemTreeManager {
    /// Item arena.
    store: ItemStore,
    /// Configured defaults.
    settings: TreeSettings,
    /// Events recorded since the last drain.
    journal: Vec<DomainEvent>,
}

impl ItemTreeManager {
    /// Creates an empty manager.
    pub fn new(settings: TreeSettings) -> Self {
        Self {
            store: ItemStore::new(),
            settings,
            journal: Vec::new(),
        }
    }

    /// Creates a manager from a seed collection, validating it as a forest.
    ///
    /// Rejects duplicate ids (`Conflict`), folders carrying a thumbnail,
    /// parents that are missing or are files, and parent chains that never
    /// reach the root (`Validation`).
    pub fn from_seed(items: Vec<Item>, settings: TreeSettings) -> AppResult<Self> {
        let mut store = ItemStore::new();

        for item in items {
            if item.is_folder() && item.thumbnail_url.is_some() {
                return Err(AppError::validation(format!(
                    "Folder '{}' ({}) cannot have a thumbnail",
                    item.name, item.id
                )));
            }
            store.insert(item)?;
        }

        for item in store.iter() {
            if let Some(parent_id) = item.parent_id {
                match store.find_by_id(&parent_id) {
                    Some(parent) if parent.is_folder() => {}
                    Some(_) => {
                        return Err(AppError::validation(format!(
                            "Item '{}' ({}) has a file as its parent",
                            item.name, item.id
                        )));
                    }
                    None => {
                        return Err(AppError::validation(format!(
                            "Item '{}' ({}) references missing parent {}",
                            item.name, item.id, parent_id
                        )));
                    }
                }
            }
        }

        if let Some(item) = store.iter().find(|item| !store.reaches_root(&item.id)) {
            return Err(AppError::validation(format!(
                "Item '{}' ({}) is part of a parent cycle",
                item.name, item.id
            )));
        }

        info!(items = store.len(), "Item tree seeded");

        Ok(Self {
            store,
            settings,
            journal: Vec::new(),
        })
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if there are no items.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Check if an item exists.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.store.contains(id)
    }

    /// Gets an item by ID.
    pub fn get(&self, id: &ItemId) -> Option<&Item> {
        self.store.find_by_id(id)
    }

    /// Gets an item by ID, or `NotFound`.
    pub fn require(&self, id: &ItemId) -> AppResult<&Item> {
        self.store
            .find_by_id(id)
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))
    }

    /// Gets a folder by ID; `NotFound` if missing, `Validation` if it is a file.
    pub fn require_folder(&self, id: &ItemId) -> AppResult<&Item> {
        let item = self.require(id)?;
        if !item.is_folder() {
            return Err(AppError::validation(format!(
                "'{}' is not a folder",
                item.name
            )));
        }
        Ok(item)
    }

    /// All items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.store.iter()
    }

    /// All folders in insertion order.
    pub fn folders(&self) -> impl Iterator<Item = &Item> {
        self.store.iter().filter(|item| item.is_folder())
    }

    /// Creates a new folder named with the configured default under `parent_id`.
    pub fn create_folder(&mut self, parent_id: Option<ItemId>) -> AppResult<Item> {
        if let Some(parent_id) = parent_id {
            self.require_folder(&parent_id)?;
        }

        let mut folder = Item::folder(parent_id, self.settings.default_folder_name.clone());
        while self.store.contains(&folder.id) {
            folder.id = ItemId::new();
        }

        self.store.insert(folder.clone())?;
        self.record(ItemEvent::Created {
            item_id: folder.id,
            parent_id,
        });

        info!(
            item_id = %folder.id,
            parent_id = ?parent_id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Renames an item. The name is trimmed and must not be blank.
    pub fn rename(&mut self, id: &ItemId, new_name: &str) -> AppResult<Item> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("Name cannot be empty"));
        }

        let item = self
            .store
            .find_by_id_mut(id)
            .ok_or_else(|| AppError::not_found(format!("Item {id} not found")))?;

        if item.name == new_name {
            return Ok(item.clone());
        }

        let old_name = std::mem::replace(&mut item.name, new_name.to_string());
        let renamed = item.clone();
        info!(item_id = %id, old_name = %old_name, new_name = %new_name, "Item renamed");

        self.record(ItemEvent::Renamed {
            item_id: *id,
            old_name,
            new_name: renamed.name.clone(),
        });

        Ok(renamed)
    }

    /// Deletes an item and, for a folder, every transitive descendant.
    ///
    /// Returns the removed ids with `id` first, so callers can drop any
    /// pending action that refers to the removed subtree.
    pub fn delete(&mut self, id: &ItemId) -> AppResult<Vec<ItemId>> {
        let item = self.require(id)?;
        let name = item.name.clone();

        let mut removed = vec![*id];
        if item.is_folder() {
            removed.extend(self.store.find_descendants(id));
        }

        self.store.remove_all(&removed);

        info!(
            item_id = %id,
            name = %name,
            cascade = removed.len() - 1,
            "Item deleted"
        );

        self.record(ItemEvent::Deleted {
            item_id: *id,
            removed: removed.clone(),
        });

        Ok(removed)
    }

    /// Direct children of `parent_id` (None for the root level), in insertion order.
    pub fn list_children(&self, parent_id: Option<ItemId>) -> Vec<&Item> {
        let children: Vec<&Item> = self.store.find_children(parent_id).collect();
        debug!(parent_id = ?parent_id, count = children.len(), "Listed children");
        children
    }

    /// Direct children of `parent_id`, sorted. Ties keep insertion order.
    pub fn list_children_sorted(&self, parent_id: Option<ItemId>, order: ChildOrder) -> Vec<&Item> {
        let mut children = self.list_children(parent_id);
        children.sort_by(|a, b| compare(a, b, order));
        children
    }

    /// Moves an item under `new_parent_id` (None for the root level).
    ///
    /// Moving onto the current parent is a no-op. A move that would make an
    /// item its own ancestor fails with `IllegalMove`; a destination that is
    /// a file fails with `Validation`.
    pub fn move_item(
        &mut self,
        id: &ItemId,
        new_parent_id: Option<ItemId>,
    ) -> AppResult<MoveOutcome> {
        let item = self.require(id)?;
        let from = item.parent_id;

        if from == new_parent_id {
            debug!(item_id = %id, "Move onto current parent ignored");
            return Ok(MoveOutcome::Unchanged);
        }

        if let Some(target_id) = new_parent_id {
            if target_id == *id {
                return Err(AppError::illegal_move(format!(
                    "Cannot move '{}' into itself",
                    item.name
                )));
            }

            let target = self
                .store
                .find_by_id(&target_id)
                .ok_or_else(|| AppError::not_found("Target folder not found"))?;

            if !target.is_folder() {
                return Err(AppError::validation(format!(
                    "Cannot move into '{}': not a folder",
                    target.name
                )));
            }

            if item.is_folder() && self.would_create_cycle(id, &target_id) {
                return Err(AppError::illegal_move(format!(
                    "Cannot move '{}' into one of its descendants",
                    item.name
                )));
            }
        }

        if let Some(item) = self.store.find_by_id_mut(id) {
            item.parent_id = new_parent_id;
        }

        info!(item_id = %id, from = ?from, to = ?new_parent_id, "Item moved");
        self.record(ItemEvent::Moved {
            item_id: *id,
            from,
            to: new_parent_id,
        });

        Ok(MoveOutcome::Moved {
            from,
            to: new_parent_id,
        })
    }

    /// Whether placing `moving` under `destination` would form a cycle:
    /// true when `moving` is `destination` or appears on its ancestor chain.
    pub fn would_create_cycle(&self, moving: &ItemId, destination: &ItemId) -> bool {
        self.store.chain_from(Some(*destination)).contains(moving)
    }

    /// Whether `candidate` lies strictly below `ancestor`.
    pub fn is_descendant_of(&self, candidate: &ItemId, ancestor: &ItemId) -> bool {
        candidate != ancestor && self.would_create_cycle(ancestor, candidate)
    }

    /// Ancestor ids of an item, nearest first.
    pub fn ancestors(&self, id: &ItemId) -> AppResult<Vec<ItemId>> {
        let item = self.require(id)?;
        Ok(self.store.chain_from(item.parent_id))
    }

    /// Every transitive descendant of an item, breadth-first.
    pub fn descendants(&self, id: &ItemId) -> AppResult<Vec<ItemId>> {
        self.require(id)?;
        Ok(self.store.find_descendants(id))
    }

    /// Number of ancestors (0 for root-level items).
    pub fn depth(&self, id: &ItemId) -> AppResult<usize> {
        Ok(self.ancestors(id)?.len())
    }

    /// Folder ids from the top-level ancestor down to `folder_id` inclusive.
    pub fn path_to(&self, folder_id: &ItemId) -> AppResult<Vec<ItemId>> {
        self.require(folder_id)?;
        let mut path = self.store.chain_from(Some(*folder_id));
        path.reverse();
        Ok(path)
    }

    /// The breadcrumb trail from the top-level ancestor down to `folder_id`.
    pub fn breadcrumbs(&self, folder_id: &ItemId) -> AppResult<Vec<&Item>> {
        Ok(self
            .path_to(folder_id)?
            .iter()
            .filter_map(|id| self.store.find_by_id(id))
            .collect())
    }

    /// Builds the nested display tree for the whole forest.
    pub fn build_tree(&self, order: ChildOrder) -> ItemTree {
        let roots = self
            .list_children_sorted(None, order)
            .into_iter()
            .map(|item| self.build_node(item, 0, order))
            .collect();

        ItemTree::from_roots(roots)
    }

    /// Builds the nested display tree rooted at one item.
    pub fn build_subtree(&self, id: &ItemId, order: ChildOrder) -> AppResult<ItemNode> {
        let item = self.require(id)?;
        let depth = self.depth(id)?;
        Ok(self.build_node(item, depth, order))
    }

    fn build_node(&self, item: &Item, depth: usize, order: ChildOrder) -> ItemNode {
        let children: Vec<ItemNode> = self
            .list_children_sorted(Some(item.id), order)
            .into_iter()
            .map(|child| self.build_node(child, depth + 1, order))
            .collect();

        let folder_count = children
            .iter()
            .filter(|child| child.kind == ItemKind::Folder)
            .count() as u64;
        let file_count = children.len() as u64 - folder_count;

        ItemNode {
            id: item.id,
            name: item.name.clone(),
            kind: item.kind,
            depth,
            folder_count,
            file_count,
            children,
        }
    }

    /// Takes the events recorded since the last drain.
    pub fn drain_events(&mut self) -> Vec<DomainEvent> {
        std::mem::take(&mut self.journal)
    }

    fn record(&mut self, event: ItemEvent) {
        self.journal.push(DomainEvent::new(event));
    }
}

fn compare(a: &Item, b: &Item, order: ChildOrder) -> Ordering {
    let grouped = if order.folders_first {
        a.kind.cmp(&b.kind)
    } else {
        Ordering::Equal
    };

    let keyed = match order.key {
        SortKey::Insertion => Ordering::Equal,
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Kind => a.kind.cmp(&b.kind),
    };

    grouped.then(order.direction.apply(keyed))
}
