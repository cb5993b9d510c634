use anyhow::{Context, Result};
use docport_core::DocTree;

use crate::state::AppState;

mod projects;
mod show;
mod tree;

pub use projects::handle_projects;
pub use show::handle_show;
pub use tree::handle_tree;

/// Load a project and build its page tree
fn load_tree(state: &AppState, project: &str) -> Result<DocTree> {
    let doc = state
        .catalog
        .load(project)
        .with_context(|| format!("cannot open project '{}'", project))?;
    doc.tree()
        .with_context(|| format!("invalid page hierarchy in project '{}'", project))
}
