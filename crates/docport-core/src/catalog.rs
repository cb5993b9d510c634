//! Read-only access to the project documents in a data directory.
//!
//! One document per project, named `<slug>.<extension>`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{error, warn};

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::model::{DocProject, ProjectSummary};
use crate::vfs::FileSystem;

pub struct ProjectCatalog {
    root: PathBuf,
    extension: String,
    fs: Arc<dyn FileSystem>,
}

impl ProjectCatalog {
    pub fn new(config: &CatalogConfig, fs: Arc<dyn FileSystem>) -> Self {
        Self {
            root: config.data_dir.clone(),
            extension: config.extension.clone(),
            fs,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn document_path(&self, slug: &str) -> PathBuf {
        self.root.join(format!("{}.{}", slug, self.extension))
    }

    /// Slugs of every project document, sorted.
    /// An unreadable data directory is logged and yields no projects.
    pub fn project_slugs(&self) -> Vec<String> {
        match self.fs.list_files(&self.root, &self.extension) {
            Ok(files) => files
                .iter()
                .filter_map(|path| path.file_stem())
                .map(|stem| stem.to_string_lossy().to_string())
                .collect(),
            Err(e) => {
                error!("Error reading data directory {:?}: {}", self.root, e);
                Vec::new()
            }
        }
    }

    pub fn load(&self, slug: &str) -> Result<DocProject, CatalogError> {
        let path = self.document_path(slug);
        let content = self
            .fs
            .read_to_string(&path)
            .map_err(|source| CatalogError::Io {
                path: path.clone(),
                source,
            })?;

        DocProject::from_json(&content).map_err(|source| CatalogError::Parse { path, source })
    }

    /// Summaries of every loadable project; broken documents are logged and skipped.
    pub fn summaries(&self) -> Vec<ProjectSummary> {
        self.project_slugs()
            .into_iter()
            .filter_map(|slug| match self.load(&slug) {
                Ok(project) => Some(project.summary(&slug)),
                Err(e) => {
                    warn!("Skipping project '{}': {}", slug, e);
                    None
                }
            })
            .collect()
    }
}
