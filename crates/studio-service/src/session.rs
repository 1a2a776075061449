//! Interactive session: navigation plus the confirm-then-mutate protocol.
//!
//! A user interface never blocks waiting for an answer. Each action that
//! needs input is split into an intent (`begin_*` / `request_*`) that
//! records pending state, and a commit or cancel call that resolves it.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use studio_core::AppResult;
use studio_core::config::explorer::ExplorerConfig;
use studio_core::error::AppError;
use studio_core::types::{ChildOrder, ItemId};
use studio_entity::item::{Item, ItemKind};

use crate::browser::{Crumb, TreeBrowserView};
use crate::manager::{ItemTreeManager, MoveOutcome};
use crate::picker::{MoveDestinationPicker, MoveDestinations};

/// A rename waiting to be committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingRename {
    /// Item being renamed.
    pub item_id: ItemId,
    /// Text currently in the editor.
    pub draft: String,
}

/// A delete waiting for the user's yes/no.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDelete {
    /// Item to delete.
    pub item_id: ItemId,
    /// Its name, for the prompt.
    pub name: String,
    /// Folder or file.
    pub kind: ItemKind,
    /// How many descendants the cascade would remove.
    pub descendant_count: usize,
}

/// One user's explorer: the item tree, where they are in it, and whatever
/// action is half-way done.
#[derive(Debug, Clone)]
pub struct ExplorerSession {
    manager: ItemTreeManager,
    browser: TreeBrowserView,
    root_label: String,
    listing: ChildOrder,
    pending_rename: Option<PendingRename>,
    pending_move: Option<ItemId>,
    pending_delete: Option<PendingDelete>,
}

impl ExplorerSession {
    /// Creates a session over a manager, starting at the root level.
    pub fn new(manager: ItemTreeManager, config: &ExplorerConfig) -> Self {
        Self {
            manager,
            browser: TreeBrowserView::new(),
            root_label: config.root_label.clone(),
            listing: ChildOrder::default().with_folders_first(config.folders_first),
            pending_rename: None,
            pending_move: None,
            pending_delete: None,
        }
    }

    /// The underlying tree.
    pub fn manager(&self) -> &ItemTreeManager {
        &self.manager
    }

    /// The navigation state.
    pub fn browser(&self) -> &TreeBrowserView {
        &self.browser
    }

    /// Label of the root level.
    pub fn root_label(&self) -> &str {
        &self.root_label
    }

    /// The folder being shown, or None at the root level.
    pub fn current_folder(&self) -> Option<ItemId> {
        self.browser.current_folder()
    }

    /// Items in the current folder, in display order.
    pub fn current_children(&self) -> Vec<&Item> {
        self.manager
            .list_children_sorted(self.current_folder(), self.listing)
    }

    /// Breadcrumbs for the current location.
    pub fn breadcrumbs(&self) -> Vec<Crumb> {
        self.browser.breadcrumbs(&self.manager, &self.root_label)
    }

    /// The rename in progress, if any.
    pub fn pending_rename(&self) -> Option<&PendingRename> {
        self.pending_rename.as_ref()
    }

    /// The item being moved, if any.
    pub fn pending_move(&self) -> Option<ItemId> {
        self.pending_move
    }

    /// The delete awaiting confirmation, if any.
    pub fn pending_delete(&self) -> Option<&PendingDelete> {
        self.pending_delete.as_ref()
    }

    // -- navigation --------------------------------------------------------

    /// Opens a folder inside the current one.
    pub fn enter(&mut self, folder_id: ItemId) -> AppResult<()> {
        self.browser.enter(&self.manager, folder_id)
    }

    /// Goes up one level; a no-op at the root.
    pub fn up(&mut self) {
        self.browser.up();
    }

    /// Jumps to a breadcrumb by path index.
    pub fn jump_to(&mut self, index: usize) -> AppResult<()> {
        self.browser.jump_to(index)
    }

    /// Returns to the root level.
    pub fn go_root(&mut self) {
        self.browser.go_root();
    }

    // -- create & rename ---------------------------------------------------

    /// Creates a folder in the current location and starts renaming it.
    pub fn create_folder(&mut self) -> AppResult<Item> {
        let folder = self.manager.create_folder(self.current_folder())?;
        self.pending_rename = Some(PendingRename {
            item_id: folder.id,
            draft: folder.name.clone(),
        });
        self.flush_events();
        Ok(folder)
    }

    /// Starts renaming an item, seeding the draft with its current name.
    pub fn begin_rename(&mut self, id: ItemId) -> AppResult<&PendingRename> {
        let item = self.manager.require(&id)?;
        let pending = PendingRename {
            item_id: id,
            draft: item.name.clone(),
        };
        Ok(self.pending_rename.insert(pending))
    }

    /// Replaces the draft text of the pending rename.
    pub fn set_draft(&mut self, draft: impl Into<String>) -> AppResult<()> {
        let pending = self
            .pending_rename
            .as_mut()
            .ok_or_else(|| AppError::validation("No rename in progress"))?;
        pending.draft = draft.into();
        Ok(())
    }

    /// Applies the pending rename.
    ///
    /// A blank draft is rejected and the rename stays pending. A stale item
    /// is treated as a no-op.
    pub fn commit_rename(&mut self) -> AppResult<Option<Item>> {
        let Some(pending) = self.pending_rename.clone() else {
            return Err(AppError::validation("No rename in progress"));
        };

        match self.manager.rename(&pending.item_id, &pending.draft) {
            Ok(item) => {
                self.pending_rename = None;
                self.flush_events();
                Ok(Some(item))
            }
            Err(err) if err.is_not_found() => {
                warn!(item_id = %pending.item_id, "Rename target vanished; ignoring");
                self.pending_rename = None;
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }

    /// Abandons the pending rename.
    pub fn cancel_rename(&mut self) {
        self.pending_rename = None;
    }

    // -- move --------------------------------------------------------------

    /// Starts moving an item and lists where it may go.
    pub fn begin_move(&mut self, id: ItemId) -> AppResult<MoveDestinations> {
        let destinations = MoveDestinationPicker::new(&self.manager, &self.root_label)
            .destinations_for(&id)?;
        self.pending_move = Some(id);
        Ok(destinations)
    }

    /// Destinations for the move in progress.
    pub fn move_destinations(&self) -> AppResult<MoveDestinations> {
        let id = self
            .pending_move
            .ok_or_else(|| AppError::validation("No move in progress"))?;
        MoveDestinationPicker::new(&self.manager, &self.root_label).destinations_for(&id)
    }

    /// Moves the pending item to `target` (None for the root level).
    ///
    /// An illegal target leaves the move pending so another can be chosen.
    /// Choosing the current location completes the move as a no-op.
    pub fn commit_move(&mut self, target: Option<ItemId>) -> AppResult<MoveOutcome> {
        let id = self
            .pending_move
            .ok_or_else(|| AppError::validation("No move in progress"))?;

        match self.manager.move_item(&id, target) {
            Ok(outcome) => {
                self.pending_move = None;
                self.browser.reconcile(&self.manager);
                self.flush_events();
                Ok(outcome)
            }
            Err(err) if err.is_not_found() && !self.manager.contains(&id) => {
                warn!(item_id = %id, "Move source vanished; ignoring");
                self.pending_move = None;
                Ok(MoveOutcome::Unchanged)
            }
            Err(err) => Err(err),
        }
    }

    /// Abandons the pending move.
    pub fn cancel_move(&mut self) {
        self.pending_move = None;
    }

    // -- delete ------------------------------------------------------------

    /// Asks to delete an item. Nothing is removed until confirmed.
    pub fn request_delete(&mut self, id: ItemId) -> AppResult<&PendingDelete> {
        let item = self.manager.require(&id)?;
        let pending = PendingDelete {
            item_id: id,
            name: item.name.clone(),
            kind: item.kind,
            descendant_count: self.manager.descendants(&id)?.len(),
        };
        Ok(self.pending_delete.insert(pending))
    }

    /// Resolves the pending delete with the user's answer.
    ///
    /// `false` clears the request and fails with `UserCancelled`; `true`
    /// removes the item and its subtree and returns the removed ids.
    pub fn resolve_delete(&mut self, confirmed: bool) -> AppResult<Vec<ItemId>> {
        let pending = self
            .pending_delete
            .take()
            .ok_or_else(|| AppError::validation("No delete awaiting confirmation"))?;

        if !confirmed {
            debug!(item_id = %pending.item_id, "Delete declined");
            return Err(AppError::user_cancelled(format!(
                "Delete of '{}' cancelled",
                pending.name
            )));
        }

        let removed = match self.manager.delete(&pending.item_id) {
            Ok(removed) => removed,
            Err(err) if err.is_not_found() => {
                warn!(item_id = %pending.item_id, "Delete target vanished; ignoring");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err),
        };

        self.invalidate(&removed);
        self.browser.reconcile(&self.manager);
        self.flush_events();

        Ok(removed)
    }

    /// Confirms the pending delete.
    pub fn confirm_delete(&mut self) -> AppResult<Vec<ItemId>> {
        self.resolve_delete(true)
    }

    /// Declines the pending delete. Always fails with `UserCancelled`.
    pub fn decline_delete(&mut self) -> AppResult<Vec<ItemId>> {
        self.resolve_delete(false)
    }

    /// Drops pending actions that refer to removed items.
    fn invalidate(&mut self, removed: &[ItemId]) {
        if let Some(pending) = &self.pending_rename {
            if removed.contains(&pending.item_id) {
                info!(item_id = %pending.item_id, "Pending rename dropped by delete");
                self.pending_rename = None;
            }
        }

        if let Some(id) = self.pending_move {
            if removed.contains(&id) {
                info!(item_id = %id, "Pending move dropped by delete");
                self.pending_move = None;
            }
        }
    }

    fn flush_events(&mut self) {
        for event in self.manager.drain_events() {
            debug!(
                event_id = %event.id,
                item_id = %event.payload.item_id(),
                payload = ?event.payload,
                "Item event"
            );
        }
    }
}
