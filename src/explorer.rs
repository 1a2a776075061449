//! Terminal prompt loop over an [`ExplorerSession`].

use studio_core::error::{AppError, ErrorKind};
use studio_core::types::ItemId;
use studio_entity::item::{Item, ItemKind};
use studio_service::{ExplorerSession, MoveDestination, MoveOutcome};

/// One entry of the main menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open a child folder.
    Open(ItemId),
    /// Go up one level.
    Up,
    /// Pick a breadcrumb to jump to.
    Jump,
    /// Back to the root level.
    Root,
    /// Create a folder here and name it.
    NewFolder,
    /// Rename an item in this folder.
    Rename,
    /// Move an item out of this folder.
    Move,
    /// Delete an item in this folder.
    Delete,
    /// Leave the explorer.
    Quit,
}

/// Interactive explorer driving a session from terminal prompts.
pub struct Explorer {
    session: ExplorerSession,
}

impl Explorer {
    /// Wraps a session.
    pub fn new(session: ExplorerSession) -> Self {
        Self { session }
    }

    /// Runs until the user quits.
    pub fn run(mut self) -> Result<(), AppError> {
        loop {
            self.render();

            let menu = menu(&self.session);
            let labels: Vec<&str> = menu.iter().map(|(label, _)| label.as_str()).collect();
            let choice = dialoguer::Select::new()
                .with_prompt("Action")
                .items(&labels)
                .default(0)
                .interact()
                .map_err(input_error)?;

            let result = match menu[choice].1.clone() {
                Action::Open(id) => self.session.enter(id),
                Action::Up => {
                    self.session.up();
                    Ok(())
                }
                Action::Jump => self.jump(),
                Action::Root => {
                    self.session.go_root();
                    Ok(())
                }
                Action::NewFolder => self.new_folder(),
                Action::Rename => self.rename(),
                Action::Move => self.move_item(),
                Action::Delete => self.delete(),
                Action::Quit => return Ok(()),
            };

            match result {
                Ok(()) => {}
                Err(e) if e.kind == ErrorKind::UserCancelled => println!("Cancelled."),
                Err(e) if is_recoverable(&e) => println!("⚠ {}", e.message),
                Err(e) => return Err(e),
            }
        }
    }

    fn render(&self) {
        let trail: Vec<String> = self
            .session
            .breadcrumbs()
            .into_iter()
            .map(|crumb| crumb.label)
            .collect();
        println!();
        println!("{}", trail.join(" / "));

        let children = self.session.current_children();
        if children.is_empty() {
            println!("  This folder is empty.");
        }
        for item in children {
            println!("  {}", describe(item));
        }
    }

    fn jump(&mut self) -> Result<(), AppError> {
        let crumbs = self.session.breadcrumbs();
        let labels: Vec<&str> = crumbs.iter().map(|crumb| crumb.label.as_str()).collect();
        let choice = dialoguer::Select::new()
            .with_prompt("Jump to")
            .items(&labels)
            .default(labels.len().saturating_sub(1))
            .interact()
            .map_err(input_error)?;

        match crumbs[choice].index {
            Some(index) => self.session.jump_to(index),
            None => {
                self.session.go_root();
                Ok(())
            }
        }
    }

    fn new_folder(&mut self) -> Result<(), AppError> {
        let folder = self.session.create_folder()?;
        tracing::debug!(item_id = %folder.id, "Naming new folder");
        self.finish_rename()
    }

    fn rename(&mut self) -> Result<(), AppError> {
        let Some(id) = self.pick_child("Rename which item?")? else {
            return Ok(());
        };
        self.session.begin_rename(id)?;
        self.finish_rename()
    }

    /// Prompts for the draft until the rename is accepted.
    fn finish_rename(&mut self) -> Result<(), AppError> {
        while let Some(pending) = self.session.pending_rename() {
            let draft: String = dialoguer::Input::new()
                .with_prompt("Name")
                .with_initial_text(pending.draft.clone())
                .allow_empty(true)
                .interact_text()
                .map_err(input_error)?;

            self.session.set_draft(draft)?;
            match self.session.commit_rename() {
                Ok(Some(item)) => println!("✓ Renamed to '{}'", item.name),
                Ok(None) => {}
                Err(e) if e.kind == ErrorKind::Validation => println!("⚠ {}", e.message),
                Err(e) => {
                    self.session.cancel_rename();
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    fn move_item(&mut self) -> Result<(), AppError> {
        let Some(id) = self.pick_child("Move which item?")? else {
            return Ok(());
        };

        let destinations = self.session.begin_move(id)?;
        if destinations.has_no_alternatives() {
            self.session.cancel_move();
            println!("⚠ There is nowhere else to move '{}'", destinations.item_name);
            return Ok(());
        }

        while self.session.pending_move().is_some() {
            let destinations = self.session.move_destinations()?;
            let mut labels: Vec<String> =
                destinations.entries.iter().map(destination_label).collect();
            labels.push("Cancel".to_string());

            let choice = dialoguer::Select::new()
                .with_prompt(format!("Move '{}' to", destinations.item_name))
                .items(&labels)
                .interact()
                .map_err(input_error)?;

            let Some(entry) = destinations.entries.get(choice) else {
                self.session.cancel_move();
                return Ok(());
            };
            if entry.is_current {
                println!("⚠ '{}' is already there", destinations.item_name);
                continue;
            }

            match self.session.commit_move(entry.target) {
                Ok(MoveOutcome::Moved { .. }) => println!("✓ Moved to '{}'", entry.label),
                Ok(MoveOutcome::Unchanged) => {}
                Err(e) if e.kind == ErrorKind::IllegalMove => println!("⚠ {}", e.message),
                Err(e) => {
                    self.session.cancel_move();
                    return Err(e);
                }
            }
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), AppError> {
        let Some(id) = self.pick_child("Delete which item?")? else {
            return Ok(());
        };

        let prompt = delete_prompt(self.session.request_delete(id)?);
        let confirmed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(input_error)?;

        let removed = self.session.resolve_delete(confirmed)?;
        if !removed.is_empty() {
            println!("✓ Deleted {} item(s)", removed.len());
        }
        Ok(())
    }

    /// Lets the user choose one item of the current folder.
    fn pick_child(&self, prompt: &str) -> Result<Option<ItemId>, AppError> {
        let children = self.session.current_children();
        if children.is_empty() {
            println!("  This folder is empty.");
            return Ok(None);
        }

        let mut labels: Vec<String> = children.iter().map(|item| describe(item)).collect();
        labels.push("Cancel".to_string());

        let choice = dialoguer::Select::new()
            .with_prompt(prompt)
            .items(&labels)
            .default(0)
            .interact()
            .map_err(input_error)?;

        Ok(children.get(choice).map(|item| item.id))
    }
}

/// Main menu entries for the session's current location.
pub fn menu(session: &ExplorerSession) -> Vec<(String, Action)> {
    let mut entries: Vec<(String, Action)> = session
        .current_children()
        .into_iter()
        .filter(|item| item.is_folder())
        .map(|folder| (format!("Open '{}'", folder.name), Action::Open(folder.id)))
        .collect();

    if !session.browser().is_at_root() {
        entries.push(("Up".to_string(), Action::Up));
        entries.push(("Jump to breadcrumb".to_string(), Action::Jump));
        entries.push((format!("Back to {}", session.root_label()), Action::Root));
    }

    entries.push(("New folder".to_string(), Action::NewFolder));
    if !session.current_children().is_empty() {
        entries.push(("Rename".to_string(), Action::Rename));
        entries.push(("Move".to_string(), Action::Move));
        entries.push(("Delete".to_string(), Action::Delete));
    }
    entries.push(("Quit".to_string(), Action::Quit));

    entries
}

fn describe(item: &Item) -> String {
    match item.kind {
        ItemKind::Folder => format!("📁 {}", item.name),
        ItemKind::File => format!("🖼  {}  ({})", item.name, item.created_date()),
    }
}

fn destination_label(entry: &MoveDestination) -> String {
    let indent = if entry.target.is_some() {
        "  ".repeat(entry.depth + 1)
    } else {
        String::new()
    };
    let suffix = if entry.is_current {
        " (current location)"
    } else {
        ""
    };
    format!("{indent}{}{suffix}", entry.label)
}

fn delete_prompt(pending: &studio_service::PendingDelete) -> String {
    match pending.kind {
        ItemKind::Folder if pending.descendant_count > 0 => format!(
            "Delete folder '{}' and the {} item(s) inside it?",
            pending.name, pending.descendant_count
        ),
        ItemKind::Folder => format!("Delete folder '{}'?", pending.name),
        ItemKind::File => format!("Delete '{}'?", pending.name),
    }
}

fn is_recoverable(e: &AppError) -> bool {
    matches!(
        e.kind,
        ErrorKind::NotFound | ErrorKind::IllegalMove | ErrorKind::Validation
    )
}

fn input_error(e: dialoguer::Error) -> AppError {
    AppError::internal(format!("Input error: {}", e))
}
