//! # Post Store
//!
//! Abstraction over the persistent BlogPost collection: create, point and
//! bulk lookups, partial update, delete, count, and a drop-all used for
//! test isolation. Backends provide per-document atomicity only; two
//! concurrent updates to the same id race with last-write-wins.

pub mod document;
pub mod errors;
pub mod file;
pub mod memory;
pub mod target;

pub use document::{Author, BlogPost, NewPost, PostId, PostPatch};
pub use errors::{StoreError, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use target::StoreTarget;

/// Operations every BlogPost store backend provides.
///
/// Absent documents are `Ok(None)` on lookups but `Err(NotFound)` on
/// mutations, so callers can tell "was removed" from "never existed".
/// Every mutating operation has durably changed the collection by the time
/// it returns.
pub trait PostStore: Send + Sync {
    /// Bulk-create documents, assigning an id to each. Fails with
    /// `Validation` (persisting nothing) if any item is missing a required
    /// field. Used to seed test fixtures.
    fn insert_many(&self, items: Vec<NewPost>) -> StoreResult<Vec<BlogPost>>;

    /// Create a single document. This is what the creation endpoint calls.
    fn insert_one(&self, item: NewPost) -> StoreResult<BlogPost>;

    /// Every document, order unspecified.
    fn find_all(&self) -> StoreResult<Vec<BlogPost>>;

    /// Point lookup; absent is `Ok(None)`, not an error.
    fn find_by_id(&self, id: PostId) -> StoreResult<Option<BlogPost>>;

    /// An arbitrary (first-inserted) document, for callers that just need
    /// "some existing document".
    fn find_one(&self) -> StoreResult<Option<BlogPost>>;

    /// Number of documents currently stored.
    fn count(&self) -> StoreResult<usize>;

    /// Apply only the fields present in `patch`. `NotFound` if absent.
    /// Idempotent.
    fn update_by_id(&self, id: PostId, patch: PostPatch) -> StoreResult<()>;

    /// Remove the document. `NotFound` if absent, including a repeat delete
    /// of the same id.
    fn delete_by_id(&self, id: PostId) -> StoreResult<()>;

    /// Empty the collection. Test teardown only.
    fn drop_all(&self) -> StoreResult<()>;
}
