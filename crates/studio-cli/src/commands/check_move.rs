//! Dry-run move validation.

use clap::Args;
use serde::Serialize;

use crate::output::{self, OutputFormat};
use studio_core::AppResult;
use studio_core::types::ItemId;
use studio_service::{ItemTreeManager, MoveOutcome};

/// Arguments for the check-move command
#[derive(Debug, Args)]
pub struct CheckMoveArgs {
    /// Item to move
    pub item: String,

    /// Destination folder, or `root`
    #[arg(long, default_value = "root")]
    pub to: String,
}

/// Verdict for one simulated move
#[derive(Debug, Serialize)]
pub struct MoveCheck {
    /// Item that would move
    pub item_id: ItemId,
    /// Requested destination
    pub to: Option<ItemId>,
    /// `moved`, `unchanged`, or the rejecting error kind
    pub verdict: String,
    /// Human-readable explanation
    pub message: String,
}

/// Applies the move to a copy of the tree and reports what happened.
pub fn simulate(manager: &ItemTreeManager, item_id: ItemId, to: Option<ItemId>) -> MoveCheck {
    let mut scratch = manager.clone();
    let (verdict, message) = match scratch.move_item(&item_id, to) {
        Ok(MoveOutcome::Moved { .. }) => ("moved".to_string(), "Move would be applied".to_string()),
        Ok(MoveOutcome::Unchanged) => (
            "unchanged".to_string(),
            "Item already lives there".to_string(),
        ),
        Err(e) => (e.kind.to_string(), e.message),
    };

    MoveCheck {
        item_id,
        to,
        verdict,
        message,
    }
}

/// Execute the check-move command
pub fn execute(
    args: &CheckMoveArgs,
    manager: &ItemTreeManager,
    format: OutputFormat,
) -> AppResult<()> {
    let item_id = super::resolve_item(manager, &args.item)?;
    let to = super::resolve_destination(manager, &args.to)?;
    let check = simulate(manager, item_id, to);

    match format {
        OutputFormat::Json => output::print_json(&check, "{}"),
        OutputFormat::Table => match check.verdict.as_str() {
            "moved" => output::print_success(&check.message),
            "unchanged" => output::print_warning(&check.message),
            kind => output::print_error(&format!("{kind}: {}", check.message)),
        },
    }

    Ok(())
}
