use std::collections::HashMap;

use log::{debug, warn};

use crate::error::BuildError;
use crate::model::{PageKey, PageRecord};
use crate::utils::slugify;

use super::{DocNode, DocTree, TreeDiagnostic};

/// Build the page forest.
///
/// Three passes over the input, which is also the sibling order:
/// 1. index every page by its key (duplicates are rejected)
/// 2. link each page under its parent, or at the top level when it has none
///    (absent or empty) or the parent is unknown (recorded as a diagnostic)
/// 3. assemble nodes top-down, stamping `path` from the parent's path
///
/// Pages whose parent chain never reaches the top level form a cycle and fail
/// the build.
pub fn build_doc_tree<I>(pages: I) -> Result<DocTree, BuildError>
where
    I: IntoIterator<Item = PageRecord>,
{
    let mut pages: Vec<PageRecord> = pages.into_iter().collect();
    let count = pages.len();

    let mut roots = Vec::new();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut parent_of: Vec<Option<usize>> = vec![None; count];
    let mut diagnostics = Vec::new();

    {
        // Pass 1: key -> input index
        let mut index: HashMap<&str, usize> = HashMap::with_capacity(count);
        for (i, page) in pages.iter().enumerate() {
            if let Some(&first) = index.get(page.key()) {
                return Err(BuildError::DuplicateKey {
                    key: page.key().to_string(),
                    first,
                    second: i,
                });
            }
            index.insert(page.key(), i);
        }

        // Pass 2: parent/child links
        for (i, page) in pages.iter().enumerate() {
            // Saved forms store "" for top-level pages.
            let Some(parent) = page.parent.as_deref().filter(|p| !p.is_empty()) else {
                roots.push(i);
                continue;
            };

            if let Some(&parent_idx) = index.get(parent) {
                children[parent_idx].push(i);
                parent_of[i] = Some(parent_idx);
            } else {
                warn!(
                    "page '{}' references unknown parent '{}'",
                    page.key(),
                    parent
                );
                diagnostics.push(TreeDiagnostic::UnresolvedParent {
                    key: page.key().to_string(),
                    parent: parent.to_string(),
                });
                roots.push(i);
            }
        }
    }

    if let Some(chain) = find_cycle(&pages, &roots, &children, &parent_of) {
        return Err(BuildError::Cycle { chain });
    }

    // Pass 3: assemble and stamp paths
    let roots: Vec<DocNode> = roots
        .iter()
        .map(|&i| assemble(i, "", &mut pages, &children))
        .collect();

    debug!(
        "built doc tree: {} pages, {} roots, {} diagnostics",
        count,
        roots.len(),
        diagnostics.len()
    );

    Ok(DocTree { roots, diagnostics })
}

/// Recursion depth equals the longest parent chain; cycles are ruled out before this runs.
fn assemble(
    i: usize,
    parent_path: &str,
    pages: &mut [PageRecord],
    children: &[Vec<usize>],
) -> DocNode {
    let page = std::mem::take(&mut pages[i]);
    let slug = slugify(&page.title);
    let path = if parent_path.is_empty() {
        slug.clone()
    } else {
        format!("{}/{}", parent_path, slug)
    };

    let children = children[i]
        .iter()
        .map(|&child| assemble(child, &path, pages, children))
        .collect();

    DocNode {
        page,
        slug,
        path,
        children,
    }
}

/// Every page not reachable from a root sits on, or hangs below, a parent cycle.
/// Returns the loop starting at its earliest page, closed by repeating that page.
fn find_cycle(
    pages: &[PageRecord],
    roots: &[usize],
    children: &[Vec<usize>],
    parent_of: &[Option<usize>],
) -> Option<Vec<PageKey>> {
    let mut reachable = vec![false; pages.len()];
    let mut stack = roots.to_vec();
    while let Some(i) = stack.pop() {
        reachable[i] = true;
        stack.extend(&children[i]);
    }

    let stray = reachable.iter().position(|&r| !r)?;

    // Walk up until a page repeats; that page is on the loop.
    let mut seen = vec![false; pages.len()];
    let mut current = stray;
    while !seen[current] {
        seen[current] = true;
        current = parent_of[current]?;
    }

    let mut start = current;
    let mut next = parent_of[current]?;
    while next != current {
        start = start.min(next);
        next = parent_of[next]?;
    }

    let mut chain = vec![pages[start].key().to_string()];
    let mut next = parent_of[start]?;
    while next != start {
        chain.push(pages[next].key().to_string());
        next = parent_of[next]?;
    }
    chain.push(pages[start].key().to_string());

    Some(chain)
}
