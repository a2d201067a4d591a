use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author of a post, kept structured in storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// Display name rendered on the wire: `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - the only resource exposed by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

/// Fields required to create a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub author: Author,
    pub title: String,
    pub content: String,
    pub created: Option<DateTime<Utc>>,
}

/// Partial update - `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct PostPatch {
    pub author: Option<Author>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created: Option<DateTime<Utc>>,
}

impl PostPatch {
    pub fn is_empty(&self) -> bool {
        self.author.is_none()
            && self.title.is_none()
            && self.content.is_none()
            && self.created.is_none()
    }
}

impl BlogPost {
    /// Create a new post with a fresh id; `created` defaults to now.
    pub fn new(new_post: NewPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: new_post.author,
            title: new_post.title,
            content: new_post.content,
            created: new_post.created.unwrap_or_else(Utc::now),
        }
    }

    /// Merge a partial update into this post. The id never changes.
    pub fn apply(&mut self, patch: PostPatch) {
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(created) = patch.created {
            self.created = created;
        }
    }
}
