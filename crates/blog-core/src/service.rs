//! Blog post service - the operations behind the `/posts` resource.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{BlogPost, NewPost, PostPatch};
use crate::error::{DomainError, RepoError};
use crate::ports::{BaseRepository, PostRepository};

const ENTITY: &str = "BlogPost";

/// Facade over a [`PostRepository`]. Holds no state besides the repository handle.
#[derive(Clone)]
pub struct BlogPostService {
    repo: Arc<dyn PostRepository>,
}

impl BlogPostService {
    pub fn new(repo: Arc<dyn PostRepository>) -> Self {
        Self { repo }
    }

    /// All stored posts, oldest first.
    pub async fn list(&self) -> Result<Vec<BlogPost>, DomainError> {
        let mut posts = self.repo.find_all().await?;
        // Stable sort keeps insertion order among equal timestamps.
        posts.sort_by_key(|p| p.created);
        tracing::debug!(count = posts.len(), "Listed posts");
        Ok(posts)
    }

    pub async fn get(&self, id: Uuid) -> Result<BlogPost, DomainError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(DomainError::NotFound {
                entity_type: ENTITY,
                id,
            })
    }

    pub async fn create(&self, new_post: NewPost) -> Result<BlogPost, DomainError> {
        validate_text("title", &new_post.title)?;
        validate_text("author.firstName", &new_post.author.first_name)?;
        validate_text("author.lastName", &new_post.author.last_name)?;

        let post = self.repo.insert(BlogPost::new(new_post)).await?;
        tracing::info!(post_id = %post.id, "Post created");
        Ok(post)
    }

    /// Read, merge, write. Concurrent updates to the same id are last-write-wins.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<BlogPost, DomainError> {
        if let Some(title) = &patch.title {
            validate_text("title", title)?;
        }
        if let Some(author) = &patch.author {
            validate_text("author.firstName", &author.first_name)?;
            validate_text("author.lastName", &author.last_name)?;
        }

        let mut post = self.get(id).await?;
        if patch.is_empty() {
            return Ok(post);
        }
        post.apply(patch);

        let post = self.repo.update(post).await.map_err(|e| match e {
            RepoError::NotFound => DomainError::NotFound {
                entity_type: ENTITY,
                id,
            },
            other => other.into(),
        })?;
        tracing::info!(post_id = %id, "Post updated");
        Ok(post)
    }

    /// Idempotent: deleting an unknown id succeeds.
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        match self.repo.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = %id, "Post deleted");
                Ok(())
            }
            Err(RepoError::NotFound) => {
                tracing::debug!(post_id = %id, "Delete of unknown post ignored");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        Ok(self.repo.count().await?)
    }
}

fn validate_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(())
}
