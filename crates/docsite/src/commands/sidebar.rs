//! `docsite sidebar` command implementation.

use docsite_config::{NavItem, NavigationTree};

use super::ConfigArgs;
use crate::error::CliError;
use crate::output::Output;

/// Execute the sidebar command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub(crate) fn execute(args: &ConfigArgs) -> Result<(), CliError> {
    let output = Output::new();
    let config = args.load()?;
    for line in render_tree(config.navigation()) {
        output.result(&line)?;
    }
    Ok(())
}

/// Render the sidebar as indented lines, two spaces per level.
fn render_tree(tree: &NavigationTree) -> Vec<String> {
    let mut lines = Vec::new();
    for group in tree.groups() {
        render_item(group, 0, &mut lines);
    }
    lines
}

fn render_item(item: &NavItem, depth: usize, lines: &mut Vec<String>) {
    let indent = "  ".repeat(depth);
    match item {
        NavItem::Group {
            label,
            collapsed,
            children,
        } => {
            let marker = if *collapsed { "▸" } else { "▾" };
            lines.push(format!("{indent}{marker} {label}"));
            for child in children {
                render_item(child, depth + 1, lines);
            }
        }
        NavItem::LeafBySlug { label, slug } => {
            lines.push(format!("{indent}- {label} → {slug}"));
        }
        NavItem::LeafByLink { label, link } => {
            lines.push(format!("{indent}- {label} ↗ {link}"));
        }
    }
}
