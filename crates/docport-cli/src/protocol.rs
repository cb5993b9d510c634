use docport_core::model::Reference;
use docport_core::outline::OutlineEntry;
use docport_core::tree::{href, DocNode};
use serde::Serialize;

/// A link to another page
#[derive(Debug, Clone, Serialize)]
pub struct PageLink {
    pub title: String,
    pub path: String,
    pub href: String,
}

impl PageLink {
    pub fn new(base: &str, project: &str, node: &DocNode) -> Self {
        Self {
            title: node.title().to_string(),
            path: node.path.clone(),
            href: href(base, project, &node.path),
        }
    }
}

/// Result of `docport show`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub project: String,
    pub title: String,
    pub path: String,
    pub purpose: String,
    pub outline: Vec<OutlineEntry>,
    pub references: Vec<Reference>,
    pub children: Vec<PageLink>,
    pub prev: Option<PageLink>,
    pub next: Option<PageLink>,
}
