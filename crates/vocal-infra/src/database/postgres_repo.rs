//! PostgreSQL blog repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionError, TransactionTrait,
};

use vocal_core::domain::{BlogId, BlogPost, NewBlogPost};
use vocal_core::error::{DomainError, RepoError};
use vocal_core::ports::{BlogEdit, BlogRepository};

use super::entity::blog::{self, Entity as BlogEntity};

/// PostgreSQL blog repository. Every mutation runs in its own transaction.
pub struct PostgresBlogRepository {
    db: DbConn,
}

impl PostgresBlogRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn query_error(err: DbErr) -> RepoError {
    RepoError::Query(err.to_string())
}

fn transaction_error(err: TransactionError<DbErr>) -> RepoError {
    match err {
        TransactionError::Connection(e) => RepoError::Connection(e.to_string()),
        TransactionError::Transaction(e) => query_error(e),
    }
}

#[async_trait]
impl BlogRepository for PostgresBlogRepository {
    async fn ping(&self) -> Result<(), RepoError> {
        self.db
            .ping()
            .await
            .map_err(|e| RepoError::Connection(e.to_string()))
    }

    async fn list(&self, favorites_only: bool) -> Result<Vec<BlogPost>, RepoError> {
        let mut query = BlogEntity::find();
        if favorites_only {
            query = query.filter(blog::Column::IsFavorite.eq(true));
        }

        let result = query
            .order_by_desc(blog::Column::CreatedAt)
            .order_by_desc(blog::Column::Id)
            .all(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, post: NewBlogPost) -> Result<BlogPost, RepoError> {
        let model = self
            .db
            .transaction::<_, blog::Model, DbErr>(move |txn| {
                Box::pin(async move { blog::ActiveModel::from(post).insert(txn).await })
            })
            .await
            .map_err(transaction_error)?;

        tracing::debug!(blog_id = model.id, "Inserted blog row");
        Ok(model.into())
    }

    async fn modify(&self, id: BlogId, edit: BlogEdit) -> Result<BlogPost, DomainError> {
        let model = self
            .db
            .transaction::<_, blog::Model, DomainError>(move |txn| {
                Box::pin(async move {
                    let current = BlogEntity::find_by_id(id)
                        .lock_exclusive()
                        .one(txn)
                        .await
                        .map_err(query_error)?
                        .ok_or_else(|| DomainError::blog_not_found(id))?;

                    let mut post = BlogPost::from(current);
                    edit(&mut post)?;

                    let updated = blog::ActiveModel::from(post)
                        .update(txn)
                        .await
                        .map_err(query_error)?;
                    Ok(updated)
                })
            })
            .await
            .map_err(|e| match e {
                TransactionError::Connection(e) => {
                    DomainError::Repository(RepoError::Connection(e.to_string()))
                }
                TransactionError::Transaction(e) => e,
            })?;

        tracing::debug!(blog_id = model.id, "Updated blog row");
        Ok(model.into())
    }

    async fn delete(&self, id: BlogId) -> Result<Option<BlogPost>, RepoError> {
        let removed = self
            .db
            .transaction::<_, Option<blog::Model>, DbErr>(move |txn| {
                Box::pin(async move {
                    let Some(current) = BlogEntity::find_by_id(id).lock_exclusive().one(txn).await?
                    else {
                        return Ok(None);
                    };

                    BlogEntity::delete_by_id(id).exec(txn).await?;
                    Ok(Some(current))
                })
            })
            .await
            .map_err(transaction_error)?;

        if removed.is_some() {
            tracing::debug!(blog_id = id, "Deleted blog row");
        }
        Ok(removed.map(Into::into))
    }
}
