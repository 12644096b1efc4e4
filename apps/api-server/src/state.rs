//! Application state - shared across all handlers.

use std::io;
use std::sync::Arc;

use vocal_core::ports::BlogRepository;
use vocal_infra::database::InMemoryBlogRepository;

use crate::config::AppConfig;

#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};
#[cfg(feature = "postgres")]
use vocal_infra::database::{PostgresBlogRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
}

impl AppState {
    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
        }
    }

    /// Build the application state with the configured store.
    ///
    /// A configured database that cannot be reached or migrated is an error;
    /// the in-memory store is only used when no database is configured.
    pub async fn new(config: &AppConfig) -> io::Result<Self> {
        #[cfg(feature = "postgres")]
        let state = match config.database.as_ref() {
            Some(db_config) => {
                let conn = connect(db_config).await.map_err(|e| {
                    tracing::error!("Failed to connect to database: {}", e);
                    io::Error::other(format!("database connection failed: {e}"))
                })?;

                if config.auto_migrate {
                    Migrator::up(&conn, None).await.map_err(|e| {
                        tracing::error!("Failed to apply migrations: {}", e);
                        io::Error::other(format!("database migration failed: {e}"))
                    })?;
                    tracing::info!("Database schema is up to date");
                }

                Self {
                    blogs: Arc::new(PostgresBlogRepository::new(conn)),
                }
            }
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(database: Option<&str>) -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            database: database.map(|url| vocal_infra::database::DatabaseConfig {
                url: url.to_string(),
                max_connections: 1,
                min_connections: 1,
            }),
            auto_migrate: true,
            cors_origins: Vec::new(),
        }
    }

    #[actix_web::test]
    async fn test_without_database_uses_memory_store() {
        let state = AppState::new(&config(None)).await.unwrap();
        assert!(state.blogs.ping().await.is_ok());
    }

    #[cfg(feature = "postgres")]
    #[actix_web::test]
    async fn test_unusable_database_aborts_startup() {
        let result = AppState::new(&config(Some("nosuchdb://localhost/vocal"))).await;
        assert!(result.is_err());
    }
}
