//! Navigation state: the stack of folders leading to the current location.

use serde::{Deserialize, Serialize};
use tracing::debug;

use studio_core::AppResult;
use studio_core::error::AppError;
use studio_core::types::ItemId;

use crate::manager::ItemTreeManager;

/// One breadcrumb: the root entry or a folder on the path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crumb {
    /// Folder id (None for the root entry).
    pub id: Option<ItemId>,
    /// Display label.
    pub label: String,
    /// Position in the path, None for the root entry.
    pub index: Option<usize>,
}

/// Where the user currently is, as an ordered path of folder ids.
///
/// An empty path means the root level. The view holds ids only; names are
/// resolved through the manager when breadcrumbs are rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeBrowserView {
    path: Vec<ItemId>,
}

impl TreeBrowserView {
    /// Starts at the root level.
    pub fn new() -> Self {
        Self::default()
    }

    /// The folder being shown, or None at the root level.
    pub fn current_folder(&self) -> Option<ItemId> {
        self.path.last().copied()
    }

    /// The folder ids from the top level down to the current folder.
    pub fn path(&self) -> &[ItemId] {
        &self.path
    }

    /// Check if the view is at the root level.
    pub fn is_at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Enters a folder that is a child of the current folder.
    pub fn enter(&mut self, manager: &ItemTreeManager, folder_id: ItemId) -> AppResult<()> {
        let folder = manager.require_folder(&folder_id)?;
        if folder.parent_id != self.current_folder() {
            return Err(AppError::validation(format!(
                "'{}' is not inside the current folder",
                folder.name
            )));
        }

        self.path.push(folder_id);
        debug!(folder_id = %folder_id, depth = self.path.len(), "Entered folder");
        Ok(())
    }

    /// Goes up one level. Returns the folder that was left, None at the root.
    pub fn up(&mut self) -> Option<ItemId> {
        self.path.pop()
    }

    /// Jumps to the breadcrumb at `index`, keeping entries `0..=index`.
    pub fn jump_to(&mut self, index: usize) -> AppResult<()> {
        if index >= self.path.len() {
            return Err(AppError::validation(format!(
                "Breadcrumb {index} is out of range (depth {})",
                self.path.len()
            )));
        }

        self.path.truncate(index + 1);
        Ok(())
    }

    /// Returns to the root level.
    pub fn go_root(&mut self) {
        self.path.clear();
    }

    /// Breadcrumbs for rendering: the root entry, then each folder on the path.
    pub fn breadcrumbs(&self, manager: &ItemTreeManager, root_label: &str) -> Vec<Crumb> {
        let mut crumbs = vec![Crumb {
            id: None,
            label: root_label.to_string(),
            index: None,
        }];

        crumbs.extend(self.path.iter().enumerate().map(|(index, id)| Crumb {
            id: Some(*id),
            label: manager
                .get(id)
                .map(|item| item.name.clone())
                .unwrap_or_default(),
            index: Some(index),
        }));

        crumbs
    }

    /// Repairs the path after the tree changed underneath it.
    ///
    /// The path is cut before the first folder that no longer exists, then
    /// rebuilt from the current folder's ancestor chain in case a folder on
    /// it was moved. Returns whether the path changed.
    pub fn reconcile(&mut self, manager: &ItemTreeManager) -> bool {
        let before = self.path.clone();

        if let Some(missing) = self.path.iter().position(|id| !manager.contains(id)) {
            self.path.truncate(missing);
        }

        if let Some(current) = self.current_folder() {
            if let Ok(path) = manager.path_to(&current) {
                self.path = path;
            }
        }

        let changed = self.path != before;
        if changed {
            debug!(from = before.len(), to = self.path.len(), "Browser path reconciled");
        }
        changed
    }
}
