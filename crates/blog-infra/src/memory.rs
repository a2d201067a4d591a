//! In-memory post repository - used when no database is configured.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Post store backed by a `Vec` behind an async RwLock.
///
/// Keeps insertion order. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn insert(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|p| p.id == entity.id) {
            return Err(RepoError::Constraint(format!(
                "post {} already exists",
                entity.id
            )));
        }
        store.push(entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|p| p.id == entity.id)
            .ok_or(RepoError::NotFound)?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let position = store
            .iter()
            .position(|p| p.id == id)
            .ok_or(RepoError::NotFound)?;
        store.remove(position);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }
}
