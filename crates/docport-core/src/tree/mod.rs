//! Page hierarchy: flat [`PageRecord`] lists in, navigable forests out.

use std::fmt;

use serde::Serialize;

use crate::model::{PageKey, PageRecord};

mod builder;
mod navigator;


pub use builder::build_doc_tree;
pub use navigator::{find_node_by_path, flatten_tree, href, split_path, Neighbors};

/// A page placed in the hierarchy
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocNode {
    #[serde(flatten)]
    pub page: PageRecord,
    /// URL segment derived from the title
    pub slug: String,
    /// Slugs from the root down to this node, joined with `/`
    pub path: String,
    /// In input order
    pub children: Vec<DocNode>,
}

impl DocNode {
    pub fn title(&self) -> &str {
        &self.page.title
    }

    pub fn key(&self) -> &str {
        self.page.key()
    }
}

/// Something worth warning about that did not stop the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TreeDiagnostic {
    /// `parent` names no page; the page was placed at the top level
    UnresolvedParent { key: PageKey, parent: PageKey },
}

impl fmt::Display for TreeDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeDiagnostic::UnresolvedParent { key, parent } => write!(
                f,
                "page '{}' references unknown parent '{}', shown at top level",
                key, parent
            ),
        }
    }
}

/// Derived view over a project's pages. Rebuilt on every read, never stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DocTree {
    pub roots: Vec<DocNode>,
    pub diagnostics: Vec<TreeDiagnostic>,
}

impl DocTree {
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Total number of nodes in the forest
    pub fn len(&self) -> usize {
        self.flatten().len()
    }

    pub fn find<S: AsRef<str>>(&self, slug_path: &[S]) -> Option<&DocNode> {
        find_node_by_path(&self.roots, slug_path)
    }

    pub fn flatten(&self) -> Vec<&DocNode> {
        flatten_tree(&self.roots)
    }

    /// Path of the first page in reading order that a URL can reach.
    /// Pages under an empty slug are skipped; `None` when no page qualifies.
    pub fn landing_path(&self) -> Option<&str> {
        self.flatten()
            .into_iter()
            .map(|node| node.path.as_str())
            .find(|path| {
                !path.is_empty()
                    && self
                        .find(&split_path(path))
                        .is_some_and(|found| found.path == *path)
            })
    }

    /// Previous and next pages around `path` in reading order
    pub fn neighbors(&self, path: &str) -> Neighbors<'_> {
        let flat = self.flatten();
        let Some(index) = flat.iter().position(|node| node.path == path) else {
            return Neighbors::default();
        };

        Neighbors {
            prev: index.checked_sub(1).map(|i| flat[i]),
            next: flat.get(index + 1).copied(),
        }
    }
}
