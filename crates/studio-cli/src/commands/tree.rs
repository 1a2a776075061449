//! Whole-tree display.

use clap::Args;

use crate::output::{self, OutputFormat};
use studio_core::AppResult;
use studio_core::config::AppConfig;
use studio_entity::item::{ItemKind, ItemNode};
use studio_service::ItemTreeManager;

use super::SortArgs;

/// Arguments for the tree command
#[derive(Debug, Args)]
pub struct TreeArgs {
    /// Show only the subtree under this item
    #[arg(long)]
    pub from: Option<String>,

    /// Maximum depth to print (0 prints only the top level)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Ordering
    #[command(flatten)]
    pub sort: SortArgs,
}

/// Execute the tree command
pub fn execute(
    args: &TreeArgs,
    manager: &ItemTreeManager,
    config: &AppConfig,
    format: OutputFormat,
) -> AppResult<()> {
    let order = args.sort.order(config);

    let (roots, total) = match &args.from {
        Some(given) => {
            let id = super::resolve_item(manager, given)?;
            let node = manager.build_subtree(&id, order)?;
            let total = node.subtree_size();
            (vec![node], total)
        }
        None => {
            let tree = manager.build_tree(order);
            (tree.roots, tree.total_items)
        }
    };

    match format {
        OutputFormat::Json => output::print_json(&roots, "[]"),
        OutputFormat::Table => {
            if args.from.is_none() {
                println!("{}", config.explorer.root_label);
            }
            let mut lines = Vec::new();
            for (i, node) in roots.iter().enumerate() {
                let last = i + 1 == roots.len();
                render(manager, node, "", last, args.depth, 0, &mut lines);
            }
            for line in &lines {
                println!("{line}");
            }
            println!();
            output::print_kv("Items", &total.to_string());
        }
    }

    Ok(())
}

/// Renders one node and its children as box-drawing lines.
fn render(
    manager: &ItemTreeManager,
    node: &ItemNode,
    prefix: &str,
    last: bool,
    max_depth: Option<usize>,
    level: usize,
    lines: &mut Vec<String>,
) {
    let branch = if last { "└── " } else { "├── " };
    let label = match node.kind {
        ItemKind::Folder => format!(
            "{}/ ({} folders, {} files)",
            node.name, node.folder_count, node.file_count
        ),
        ItemKind::File => node.name.clone(),
    };
    let id = super::display_id(manager, &node.id);
    lines.push(format!("{prefix}{branch}{label}  [{id}]"));

    if max_depth.is_some_and(|max| level >= max) {
        return;
    }

    let child_prefix = format!("{prefix}{}", if last { "    " } else { "│   " });
    for (i, child) in node.children.iter().enumerate() {
        render(
            manager,
            child,
            &child_prefix,
            i + 1 == node.children.len(),
            max_depth,
            level + 1,
            lines,
        );
    }
}
