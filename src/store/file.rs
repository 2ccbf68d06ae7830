//! # File-Backed Store
//!
//! One JSON snapshot file per collection. The snapshot is loaded once at
//! open and rewritten through a temp file + rename on every mutation, so a
//! crash mid-write never leaves a truncated collection behind.
//!
//! This is deliberately not an engine: no log, no indexes. The whole
//! collection is small enough that rewriting it is the simplest durable
//! contract that satisfies "every mutation is persisted before returning".

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::document::{BlogPost, NewPost, PostId, PostPatch};
use super::errors::{StoreError, StoreResult};
use super::PostStore;

pub struct FileStore {
    path: PathBuf,
    posts: RwLock<Vec<BlogPost>>,
}

impl FileStore {
    /// Open the store, loading any existing snapshot. A missing file is an
    /// empty collection; an unreadable or corrupt file is a hard error so
    /// startup fails instead of silently serving an empty collection.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let posts = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                StoreError::Unavailable(format!("corrupt snapshot {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                return Err(StoreError::Unavailable(format!(
                    "cannot read {}: {e}",
                    path.display()
                )))
            }
        };
        Ok(Self {
            path,
            posts: RwLock::new(posts),
        })
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<BlogPost>>> {
        self.posts
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<BlogPost>>> {
        self.posts
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".to_string()))
    }

    fn persist(&self, posts: &[BlogPost]) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(posts)
            .map_err(|e| StoreError::Unavailable(format!("serialize snapshot: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|e| {
            StoreError::Unavailable(format!("cannot write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            StoreError::Unavailable(format!("cannot replace {}: {e}", self.path.display()))
        })?;
        Ok(())
    }

    /// Persist `next` and only then swap it in, so the in-memory view never
    /// gets ahead of the snapshot on a failed write.
    fn commit(
        &self,
        mut guard: RwLockWriteGuard<'_, Vec<BlogPost>>,
        next: Vec<BlogPost>,
    ) -> StoreResult<()> {
        self.persist(&next)?;
        *guard = next;
        Ok(())
    }
}

impl PostStore for FileStore {
    fn insert_many(&self, items: Vec<NewPost>) -> StoreResult<Vec<BlogPost>> {
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            created.push(item.into_post()?);
        }
        let guard = self.write()?;
        let mut next = guard.clone();
        next.extend(created.iter().cloned());
        self.commit(guard, next)?;
        Ok(created)
    }

    fn insert_one(&self, item: NewPost) -> StoreResult<BlogPost> {
        let post = item.into_post()?;
        let guard = self.write()?;
        let mut next = guard.clone();
        next.push(post.clone());
        self.commit(guard, next)?;
        Ok(post)
    }

    fn find_all(&self) -> StoreResult<Vec<BlogPost>> {
        Ok(self.read()?.clone())
    }

    fn find_by_id(&self, id: PostId) -> StoreResult<Option<BlogPost>> {
        Ok(self.read()?.iter().find(|p| p.id == id).cloned())
    }

    fn find_one(&self) -> StoreResult<Option<BlogPost>> {
        Ok(self.read()?.first().cloned())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn update_by_id(&self, id: PostId, patch: PostPatch) -> StoreResult<()> {
        let guard = self.write()?;
        let mut next = guard.clone();
        let post = next
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        patch.apply(post);
        self.commit(guard, next)
    }

    fn delete_by_id(&self, id: PostId) -> StoreResult<()> {
        let guard = self.write()?;
        let mut next = guard.clone();
        let idx = next
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        next.remove(idx);
        self.commit(guard, next)
    }

    fn drop_all(&self) -> StoreResult<()> {
        let guard = self.write()?;
        self.commit(guard, Vec::new())
    }
}
