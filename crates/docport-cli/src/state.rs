use std::sync::Arc;

use docport_core::vfs::PhysicalFileSystem;
use docport_core::{DocportConfig, ProjectCatalog};

/// Everything a command handler needs
pub struct AppState {
    pub config: DocportConfig,
    pub catalog: ProjectCatalog,
}

impl AppState {
    pub fn new(config: DocportConfig) -> Self {
        let catalog = ProjectCatalog::new(&config.catalog, Arc::new(PhysicalFileSystem));
        Self { config, catalog }
    }
}
