//! Domain-level error types.

use thiserror::Error;

use crate::domain::BlogId;

/// Domain errors - business logic failures.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound { entity_type: &'static str, id: BlogId },

    #[error("Validation failed: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl DomainError {
    /// Shorthand for a missing blog post.
    pub fn blog_not_found(id: BlogId) -> Self {
        Self::NotFound {
            entity_type: "Blog",
            id,
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}
