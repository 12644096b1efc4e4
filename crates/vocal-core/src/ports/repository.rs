use async_trait::async_trait;

use crate::domain::{BlogId, BlogPost, NewBlogPost};
use crate::error::{DomainError, RepoError};

/// In-place edit run against a stored post inside a store transaction.
///
/// Returning an error aborts the transaction and leaves the post unchanged.
pub type BlogEdit = Box<dyn FnOnce(&mut BlogPost) -> Result<(), DomainError> + Send>;

/// Blog post repository.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Trivial round trip to check the store is reachable.
    async fn ping(&self) -> Result<(), RepoError>;

    /// All posts (or only favorites), newest first. Ties are ordered by id, descending.
    async fn list(&self, favorites_only: bool) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its id.
    async fn find_by_id(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError>;

    /// Persist a new post and return it with its assigned id.
    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError>;

    /// Load a post, apply `edit` and write the result back atomically.
    async fn modify(&self, id: BlogId, edit: BlogEdit) -> Result<BlogPost, DomainError>;

    /// Remove a post, returning it as it was before deletion.
    async fn delete(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError>;
}
