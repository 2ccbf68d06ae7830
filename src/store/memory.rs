//! # In-Memory Store
//!
//! Default backend for tests and the `mem:` target. The collection is a
//! `Vec` behind a `RwLock`; insertion order is preserved, which is what
//! makes `find_one` return the first-inserted post.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::document::{BlogPost, NewPost, PostId, PostPatch};
use super::errors::{StoreError, StoreResult};
use super::PostStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    posts: RwLock<Vec<BlogPost>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
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
}

impl PostStore for MemoryStore {
    fn insert_many(&self, items: Vec<NewPost>) -> StoreResult<Vec<BlogPost>> {
        // Materialize the whole batch first so a validation failure
        // anywhere leaves the collection untouched.
        let mut created = Vec::with_capacity(items.len());
        for item in items {
            created.push(item.into_post()?);
        }
        self.write()?.extend(created.iter().cloned());
        Ok(created)
    }

    fn insert_one(&self, item: NewPost) -> StoreResult<BlogPost> {
        let post = item.into_post()?;
        self.write()?.push(post.clone());
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
        let mut posts = self.write()?;
        let post = posts
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        patch.apply(post);
        Ok(())
    }

    fn delete_by_id(&self, id: PostId) -> StoreResult<()> {
        let mut posts = self.write()?;
        let idx = posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        posts.remove(idx);
        Ok(())
    }

    fn drop_all(&self) -> StoreResult<()> {
        self.write()?.clear();
        Ok(())
    }
}
