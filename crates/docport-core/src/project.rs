use crate::error::BuildError;
use crate::model::{DocProject, ProjectSummary};
use crate::tree::{build_doc_tree, DocTree};
use crate::utils::humanize_slug;

pub const DEFAULT_PROJECT_TYPE: &str = "General";

impl DocProject {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Build the page tree for this project
    pub fn tree(&self) -> Result<DocTree, BuildError> {
        build_doc_tree(self.pages.iter().cloned())
    }

    /// Index entry for the project stored under `slug`, with fallbacks for
    /// missing or empty metadata.
    pub fn summary(&self, slug: &str) -> ProjectSummary {
        let meta = self.metadata.as_ref();
        let non_empty = |s: &&String| !s.is_empty();

        ProjectSummary {
            slug: slug.to_string(),
            title: meta
                .and_then(|m| m.title.as_ref())
                .filter(non_empty)
                .cloned()
                .unwrap_or_else(|| humanize_slug(slug)),
            description: meta
                .and_then(|m| m.description.as_ref())
                .filter(non_empty)
                .cloned()
                .unwrap_or_else(|| format!("Documentation for {}", slug)),
            kind: meta
                .and_then(|m| m.kind.as_ref())
                .filter(non_empty)
                .cloned()
                .unwrap_or_else(|| DEFAULT_PROJECT_TYPE.to_string()),
            tags: meta.and_then(|m| m.tags.clone()).unwrap_or_default(),
        }
    }
}
