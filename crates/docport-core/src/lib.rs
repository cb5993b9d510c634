//! Docport Core Library
//!
//! Core logic library containing the page model, Tree builder, Navigator, etc.
//! Only `catalog` touches the disk, and it does so through `vfs`.
//!

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod outline;
pub mod project;
pub mod tree;
pub mod utils;
pub mod vfs;

pub use catalog::ProjectCatalog;
pub use config::DocportConfig;
pub use error::{BuildError, CatalogError};
pub use model::{DocProject, PageRecord, ProjectSummary};
pub use tree::{build_doc_tree, find_node_by_path, flatten_tree, DocNode, DocTree};
pub use utils::{humanize_slug, slugify, slugify_heading};
