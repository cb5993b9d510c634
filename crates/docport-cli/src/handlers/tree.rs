use std::io::Write;

use anyhow::Result;
use docport_core::DocNode;

use crate::state::AppState;

use super::load_tree;

/// Handle `docport tree <project>`
pub fn handle_tree(state: &AppState, project: &str, json: bool, out: &mut dyn Write) -> Result<()> {
    let tree = load_tree(state, project)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &tree)?;
        writeln!(out)?;
        return Ok(());
    }

    fn write_nodes(out: &mut dyn Write, nodes: &[DocNode], depth: usize) -> std::io::Result<()> {
        for node in nodes {
            writeln!(out, "{}{}  ({})", "  ".repeat(depth), node.title(), node.path)?;
            write_nodes(out, &node.children, depth + 1)?;
        }
        Ok(())
    }

    if tree.is_empty() {
        writeln!(out, "Project '{}' has no pages", project)?;
    } else {
        write_nodes(out, &tree.roots, 0)?;
    }

    if state.config.logging.report_diagnostics {
        for diagnostic in &tree.diagnostics {
            writeln!(out, "warning: {}", diagnostic)?;
        }
    }
    Ok(())
}
