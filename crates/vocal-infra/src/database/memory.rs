//! In-memory blog store - used when no database is configured, and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use vocal_core::domain::{BlogId, BlogPost, NewBlogPost};
use vocal_core::error::{DomainError, RepoError};
use vocal_core::ports::{BlogEdit, BlogRepository};

#[derive(Default)]
struct Table {
    /// Last id handed out. Ids are never reused, even after deletes.
    last_id: BlogId,
    rows: BTreeMap<BlogId, BlogPost>,
}

/// In-memory blog repository using a map behind an async RwLock.
///
/// Mutations hold the write lock for their whole duration, so each one is
/// atomic. Data is lost on process restart.
pub struct InMemoryBlogRepository {
    table: RwLock<Table>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table::default()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn ping(&self) -> Result<(), RepoError> {
        Ok(())
    }

    async fn list(&self, favorites_only: bool) -> Result<Vec<BlogPost>, RepoError> {
        let table = self.table.read().await;

        let mut posts: Vec<BlogPost> = table
            .rows
            .values()
            .filter(|post| !favorites_only || post.is_favorite)
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        Ok(posts)
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let mut table = self.table.write().await;

        let id = table
            .last_id
            .checked_add(1)
            .ok_or_else(|| RepoError::Query("blog id sequence exhausted".to_string()))?;
        table.last_id = id;

        let post = post.with_id(id);
        table.rows.insert(id, post.clone());
        Ok(post)
    }

    async fn modify(&self, id: BlogId, edit: BlogEdit) -> Result<BlogPost, DomainError> {
        let mut table = self.table.write().await;

        let stored = table
            .rows
            .get_mut(&id)
            .ok_or_else(|| DomainError::blog_not_found(id))?;

        // Edit a copy so a rejected edit leaves the stored row untouched.
        let mut draft = stored.clone();
        edit(&mut draft)?;
        *stored = draft.clone();

        Ok(draft)
    }

    async fn delete(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id))
    }
}
