//! # Document Types
//!
//! The BlogPost document and its input shapes.
//!
//! `NewPost` keeps every field optional so the boundary can name the exact
//! missing field instead of failing deserialization wholesale; the store
//! re-validates on insert so no invalid document is ever persisted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::errors::{StoreError, StoreResult};

/// Identifier assigned by the store on creation. Immutable, never reused.
pub type PostId = Uuid;

/// Post author, always serialized as a nested object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

/// One persisted blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: Author,
}

/// Creation payload for a blog post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<Author>,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
            author: Some(author),
        }
    }

    /// Check that every required field is present and populated.
    pub fn validate(&self) -> StoreResult<()> {
        require(self.title.as_deref(), "title")?;
        require(self.content.as_deref(), "content")?;
        match &self.author {
            Some(author) => {
                require(Some(&author.first_name), "author.firstName")?;
                require(Some(&author.last_name), "author.lastName")
            }
            None => Err(StoreError::Validation(
                "missing required field: author".to_string(),
            )),
        }
    }

    /// Materialize a document, assigning a fresh id.
    pub(crate) fn into_post(self) -> StoreResult<BlogPost> {
        self.validate()?;
        let (Some(title), Some(content), Some(author)) = (self.title, self.content, self.author)
        else {
            return Err(StoreError::Validation(
                "missing required field".to_string(),
            ));
        };
        Ok(BlogPost {
            id: Uuid::new_v4(),
            title,
            content,
            author,
        })
    }
}

/// An empty value counts as missing: the wire contract only promises
/// presence, but a blank title or author name is never a real document.
fn require(value: Option<&str>, field: &str) -> StoreResult<()> {
    match value {
        Some(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(StoreError::Validation(format!(
            "missing required field: {field}"
        ))),
    }
}

/// Partial update: only the fields present are applied
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub(crate) fn apply(&self, post: &mut BlogPost) {
        if let Some(title) = &self.title {
            post.title = title.clone();
        }
        if let Some(content) = &self.content {
            post.content = content.clone();
        }
    }
}
