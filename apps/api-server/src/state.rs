//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::BlogPostService;
use blog_core::ports::PostRepository;
use blog_infra::InMemoryPostRepository;

#[cfg(feature = "postgres")]
use blog_infra::database::{DatabaseConfig, DatabaseConnections, PostgresPostRepository};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: BlogPostService,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabaseConnections>>,
}

impl AppState {
    /// Build state over an already constructed repository.
    pub fn from_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: BlogPostService::new(repo),
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        #[cfg(feature = "postgres")]
        let (repo, db): (Arc<dyn PostRepository>, Option<Arc<DatabaseConnections>>) = {
            if let Some(db_config) = &config.database {
                match connect(db_config, config.run_migrations).await {
                    Ok(connections) => {
                        let conn = Arc::new(connections);
                        let repo = Arc::new(PostgresPostRepository::new(conn.main.clone()));
                        (repo, Some(conn))
                    }
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        (Arc::new(InMemoryPostRepository::new()), None)
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                (Arc::new(InMemoryPostRepository::new()), None)
            }
        };

        #[cfg(not(feature = "postgres"))]
        let repo: Arc<dyn PostRepository> = {
            tracing::info!("Running without postgres feature - using in-memory repository");
            Arc::new(InMemoryPostRepository::new())
        };

        #[cfg(feature = "seed")]
        if config.seed.count > 0 {
            if let Err(e) =
                blog_infra::seed::seed_posts(repo.as_ref(), config.seed.seed, config.seed.count)
                    .await
            {
                tracing::error!("Seeding posts failed: {}", e);
            }
        }

        tracing::info!("Application state initialized");

        Self {
            posts: BlogPostService::new(repo),
            #[cfg(feature = "postgres")]
            db,
        }
    }

    /// Name of the storage backend in use.
    pub fn storage(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if self.db.is_some() {
            return "postgres";
        }
        "memory"
    }
}

#[cfg(feature = "postgres")]
async fn connect(
    db_config: &DatabaseConfig,
    run_migrations: bool,
) -> Result<DatabaseConnections, sea_orm::DbErr> {
    use migration::MigratorTrait;

    let connections = DatabaseConnections::init(db_config).await?;
    if run_migrations {
        migration::Migrator::up(&connections.main, None).await?;
        tracing::info!("Migrations applied");
    }
    Ok(connections)
}
