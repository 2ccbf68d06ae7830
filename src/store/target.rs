//! # Store Targets
//!
//! Connection strings for selecting a backend. Tests point `file:` targets
//! at a temp directory or use `mem:` for an isolated in-process collection.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use super::errors::StoreError;
use super::{FileStore, MemoryStore, PostStore, StoreResult};

/// Where the collection lives.
///
/// - `mem:` (or `memory`) keeps everything in process memory
/// - `file:<path>` persists a JSON snapshot at `<path>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreTarget {
    Memory,
    File(PathBuf),
}

impl StoreTarget {
    /// Open the backend this target names. Fails if a `file:` target cannot
    /// be read, so callers can refuse to start against a broken store.
    pub fn open(&self) -> StoreResult<Arc<dyn PostStore>> {
        match self {
            Self::Memory => Ok(Arc::new(MemoryStore::new())),
            Self::File(path) => Ok(Arc::new(FileStore::open(path.clone())?)),
        }
    }
}

impl FromStr for StoreTarget {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mem:" | "memory" => Ok(Self::Memory),
            other => match other.strip_prefix("file:") {
                Some("") => Err(StoreError::Validation(
                    "file: store url needs a path".to_string(),
                )),
                Some(path) => Ok(Self::File(PathBuf::from(path))),
                None => Err(StoreError::Validation(format!(
                    "unsupported store url: {other}"
                ))),
            },
        }
    }
}

impl fmt::Display for StoreTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Memory => write!(f, "mem:"),
            Self::File(path) => write!(f, "file:{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_memory() {
        assert_eq!("mem:".parse::<StoreTarget>().unwrap(), StoreTarget::Memory);
        assert_eq!(
            "memory".parse::<StoreTarget>().unwrap(),
            StoreTarget::Memory
        );
    }

    #[test]
    fn test_parse_file() {
        let target = "file:/tmp/posts.json".parse::<StoreTarget>().unwrap();
        assert_eq!(target, StoreTarget::File(PathBuf::from("/tmp/posts.json")));
    }

    #[test]
    fn test_rejects_unknown_scheme() {
        assert!("postgres://x".parse::<StoreTarget>().is_err());
        assert!("file:".parse::<StoreTarget>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for raw in ["mem:", "file:/tmp/posts.json"] {
            let target = raw.parse::<StoreTarget>().unwrap();
            assert_eq!(target.to_string(), raw);
        }
    }
}
