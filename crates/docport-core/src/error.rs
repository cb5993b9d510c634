//! Error types for tree construction and project loading.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::PageKey;

/// Structural problems that make a page list unusable as a tree.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    /// Two pages resolve to the same identity key.
    #[error("duplicate page key '{key}' (pages #{first} and #{second})")]
    DuplicateKey {
        key: PageKey,
        /// Input index of the first page holding the key.
        first: usize,
        /// Input index of the colliding page.
        second: usize,
    },

    /// A parent chain loops back on itself.
    #[error("parent cycle: {}", .chain.join(" -> "))]
    Cycle {
        /// Keys along the loop; the last entry repeats an earlier one.
        chain: Vec<PageKey>,
    },
}

/// Errors raised while reading project documents from the data directory.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid project document {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_message_lists_chain() {
        let err = BuildError::Cycle {
            chain: vec!["A".into(), "B".into(), "A".into()],
        };
        assert_eq!(err.to_string(), "parent cycle: A -> B -> A");
    }

    #[test]
    fn test_duplicate_message() {
        let err = BuildError::DuplicateKey {
            key: "Intro".into(),
            first: 0,
            second: 3,
        };
        assert_eq!(err.to_string(), "duplicate page key 'Intro' (pages #0 and #3)");
    }
}
