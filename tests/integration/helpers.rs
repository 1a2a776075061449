//! Shared test helpers for integration tests.

use std::collections::HashMap;

use studio_core::config::explorer::ExplorerConfig;
use studio_core::types::ItemId;
use studio_entity::item::Item;
use studio_service::{ExplorerSession, ItemTreeManager, TreeSettings};

/// A tree built from named items, so tests can refer to items by name.
pub struct TestTree {
    /// Seed items in insertion order
    items: Vec<Item>,
    /// Name to id lookup
    ids: HashMap<&'static str, ItemId>,
}

impl TestTree {
    /// Start an empty tree
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            ids: HashMap::new(),
        }
    }

    /// Add a folder under `parent` (None for the root level)
    pub fn folder(mut self, name: &'static str, parent: Option<&'static str>) -> Self {
        let item = Item::folder(parent.map(|p| self.id(p)), name);
        self.ids.insert(name, item.id);
        self.items.push(item);
        self
    }

    /// Add an image under `parent` (None for the root level)
    pub fn file(mut self, name: &'static str, parent: Option<&'static str>) -> Self {
        let item = Item::file(
            parent.map(|p| self.id(p)),
            name,
            format!("https://example.com/{name}.png"),
        );
        self.ids.insert(name, item.id);
        self.items.push(item);
        self
    }

    /// Id of a named item
    pub fn id(&self, name: &str) -> ItemId {
        *self
            .ids
            .get(name)
            .unwrap_or_else(|| panic!("no test item named '{name}'"))
    }

    /// Seed items, for building a manager
    pub fn items(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Build a manager with default settings
    pub fn manager(&self) -> ItemTreeManager {
        ItemTreeManager::from_seed(self.items(), TreeSettings::default())
            .expect("test tree should be a valid forest")
    }

    /// Build a session at the root level with default settings
    pub fn session(&self) -> ExplorerSession {
        ExplorerSession::new(self.manager(), &ExplorerConfig::default())
    }
}

/// Names of the direct children of `parent`, in insertion order
pub fn child_names(manager: &ItemTreeManager, parent: Option<ItemId>) -> Vec<String> {
    manager
        .list_children(parent)
        .into_iter()
        .map(|item| item.name.clone())
        .collect()
}
