use std::io::Write;

use anyhow::Result;

use crate::state::AppState;

/// Handle `docport projects`
pub fn handle_projects(state: &AppState, json: bool, out: &mut dyn Write) -> Result<()> {
    let summaries = state.catalog.summaries();

    if json {
        serde_json::to_writer_pretty(&mut *out, &summaries)?;
        writeln!(out)?;
        return Ok(());
    }

    if summaries.is_empty() {
        writeln!(out, "No projects in {}", state.catalog.root().display())?;
        return Ok(());
    }

    for summary in &summaries {
        write!(out, "{}\t{}\t{}", summary.slug, summary.kind, summary.title)?;
        if !summary.tags.is_empty() {
            write!(out, "\t[{}]", summary.tags.join(", "))?;
        }
        writeln!(out)?;
    }
    Ok(())
}
