use std::io::Write;

use anyhow::{bail, Result};
use docport_core::outline::outline;
use docport_core::tree::split_path;

use crate::protocol::{PageLink, PageView};
use crate::state::AppState;

use super::load_tree;

/// Handle `docport show <project> [segments...]`
pub fn handle_show(
    state: &AppState,
    project: &str,
    segments: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let tree = load_tree(state, project)?;
    let base = state.config.site.base_path.as_str();

    let mut slug_path: Vec<&str> = segments.iter().flat_map(|s| split_path(s)).collect();
    if slug_path.is_empty() {
        let Some(landing) = tree.landing_path() else {
            if tree.is_empty() {
                bail!("project '{}' has no pages", project);
            }
            bail!("project '{}' has no page with a usable URL path", project);
        };
        slug_path = split_path(landing);
    }

    let Some(node) = tree.find(&slug_path) else {
        bail!("page not found: {}/{}", project, slug_path.join("/"));
    };

    let neighbors = tree.neighbors(&node.path);
    let view = PageView {
        project: project.to_string(),
        title: node.title().to_string(),
        path: node.path.clone(),
        purpose: node.page.purpose.clone(),
        outline: outline(node),
        references: node.page.references.clone().unwrap_or_default(),
        children: node
            .children
            .iter()
            .map(|child| PageLink::new(base, project, child))
            .collect(),
        prev: neighbors.prev.map(|n| PageLink::new(base, project, n)),
        next: neighbors.next.map(|n| PageLink::new(base, project, n)),
    };

    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    write_page(&view, out)?;
    Ok(())
}

fn write_page(view: &PageView, out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "# {}", view.title)?;
    if !view.purpose.is_empty() {
        writeln!(out, "{}", view.purpose)?;
    }

    writeln!(out)?;
    writeln!(out, "On this page:")?;
    for entry in &view.outline {
        writeln!(
            out,
            "{}{}  #{}",
            "  ".repeat(entry.depth as usize + 1),
            entry.text,
            entry.anchor
        )?;
    }

    if !view.children.is_empty() {
        writeln!(out)?;
        writeln!(out, "Pages:")?;
        for child in &view.children {
            writeln!(out, "  {}  {}", child.title, child.href)?;
        }
    }

    if !view.references.is_empty() {
        writeln!(out)?;
        writeln!(out, "Key references:")?;
        for reference in &view.references {
            writeln!(out, "  {}  <{}>", reference.placeholder, reference.url)?;
        }
    }

    writeln!(out)?;
    if let Some(prev) = &view.prev {
        writeln!(out, "Previous: {}  {}", prev.title, prev.href)?;
    }
    if let Some(next) = &view.next {
        writeln!(out, "Next: {}  {}", next.title, next.href)?;
    }
    Ok(())
}
