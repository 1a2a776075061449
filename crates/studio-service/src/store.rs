//! Arena of items keyed by id.
//!
//! The store only knows about parent links; it never holds references
//! between items. Tree rules (folder-only parents, no cycles) are enforced
//! one level up in [`crate::manager::ItemTreeManager`].

use std::collections::{HashMap, HashSet, VecDeque};

use indexmap::IndexMap;

use studio_core::AppResult;
use studio_core::error::AppError;
use studio_core::types::ItemId;
use studio_entity::item::Item;

/// Insertion-ordered collection of items.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: IndexMap<ItemId, Item>,
}

impl ItemStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of items held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the store holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an item with this id exists.
    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    /// Find an item by ID.
    pub fn find_by_id(&self, id: &ItemId) -> Option<&Item> {
        self.items.get(id)
    }

    /// Find an item by ID for in-place mutation.
    pub fn find_by_id_mut(&mut self, id: &ItemId) -> Option<&mut Item> {
        self.items.get_mut(id)
    }

    /// All items in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Direct children of `parent_id` (None for the root level), in insertion order.
    pub fn find_children(&self, parent_id: Option<ItemId>) -> impl Iterator<Item = &Item> {
        self.items
            .values()
            .filter(move |item| item.parent_id == parent_id)
    }

    /// Insert a new item. Fails with `Conflict` if the id is taken.
    pub fn insert(&mut self, item: Item) -> AppResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(AppError::conflict(format!(
                "An item with id '{}' already exists",
                item.id
            )));
        }

        self.items.insert(item.id, item);
        Ok(())
    }

    /// Remove every item whose id is in `ids`, keeping the order of the rest.
    /// Returns the removed items.
    pub fn remove_all(&mut self, ids: &[ItemId]) -> Vec<Item> {
        let doomed: HashSet<ItemId> = ids.iter().copied().collect();
        let mut removed = Vec::with_capacity(doomed.len());

        self.items.retain(|id, item| {
            if doomed.contains(id) {
                removed.push(item.clone());
                false
            } else {
                true
            }
        });

        removed
    }

    /// The chain of ids from `from` up to the root, `from` itself first.
    ///
    /// The walk stops at the root sentinel, at a dangling parent link, or
    /// after visiting as many items as the store holds, so it terminates
    /// even if the links were corrupted into a loop.
    pub fn chain_from(&self, from: Option<ItemId>) -> Vec<ItemId> {
        let mut chain = Vec::new();
        let mut cursor = from;

        while let Some(id) = cursor {
            if chain.len() > self.items.len() {
                break;
            }
            let Some(item) = self.items.get(&id) else {
                break;
            };
            chain.push(id);
            cursor = item.parent_id;
        }

        chain
    }

    /// Whether following parent links from `id` reaches the root sentinel.
    pub fn reaches_root(&self, id: &ItemId) -> bool {
        let mut cursor = Some(*id);
        let mut steps = 0usize;

        while let Some(current) = cursor {
            if steps > self.items.len() {
                return false;
            }
            match self.items.get(&current) {
                Some(item) => cursor = item.parent_id,
                None => return false,
            }
            steps += 1;
        }

        true
    }

    /// Every transitive descendant of `id`, breadth-first.
    pub fn find_descendants(&self, id: &ItemId) -> Vec<ItemId> {
        let mut by_parent: HashMap<ItemId, Vec<ItemId>> = HashMap::new();
        for item in self.items.values() {
            if let Some(parent_id) = item.parent_id {
                by_parent.entry(parent_id).or_default().push(item.id);
            }
        }

        let mut found = Vec::new();
        let mut seen: HashSet<ItemId> = HashSet::from([*id]);
        let mut queue: VecDeque<ItemId> = VecDeque::from([*id]);

        while let Some(current) = queue.pop_front() {
            for child in by_parent.get(&current).into_iter().flatten() {
                if seen.insert(*child) {
                    found.push(*child);
                    queue.push_back(*child);
                }
            }
        }

        found
    }
}
