//! PostgreSQL repository implementations.

use async_trait::async_trait;
use sea_orm::{EntityTrait, PaginatorTrait};

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

use super::entity::post::Entity as PostEntity;
use super::postgres_base::{PostgresBaseRepository, map_db_err};

/// PostgreSQL post repository.
pub type PostgresPostRepository = PostgresBaseRepository<PostEntity>;

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn count(&self) -> Result<u64, RepoError> {
        tracing::debug!("Counting posts");

        PostEntity::find().count(&self.db).await.map_err(map_db_err)
    }
}
