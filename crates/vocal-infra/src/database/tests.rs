#[cfg(test)]
mod tests {
    use crate::database::entity::blog;
    use crate::database::postgres_repo::PostgresBlogRepository;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use vocal_core::domain::{BlogDraft, BlogPost, DEFAULT_AUTHOR_IMAGE, NewBlogPost};
    use vocal_core::error::DomainError;
    use vocal_core::ports::BlogRepository;

    fn model(id: i32, is_favorite: bool) -> blog::Model {
        let now = chrono::Utc::now();
        blog::Model {
            id,
            image: None,
            heading: format!("Post {id}"),
            sub_heading: None,
            description: "A description long enough.".to_owned(),
            author: "Current User".to_owned(),
            author_image: DEFAULT_AUTHOR_IMAGE.to_owned(),
            is_favorite,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_blog_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(3, false)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result: Option<BlogPost> = repo.find_by_id(3).await.unwrap();

        let post = result.unwrap();
        assert_eq!(post.id, 3);
        assert_eq!(post.heading, "Post 3");
    }

    #[tokio::test]
    async fn test_list_maps_rows_in_query_order() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(2, true), model(1, true)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let posts = repo.list(true).await.unwrap();
        let ids: Vec<i32> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1]);
        assert!(posts.iter().all(|p| p.is_favorite));
    }

    #[tokio::test]
    async fn test_insert_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(7, false)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let draft = BlogDraft {
            heading: "Post 7".to_owned(),
            description: "A description long enough.".to_owned(),
            ..Default::default()
        };
        let post = repo
            .insert(NewBlogPost::from_draft(draft, chrono::Utc::now()))
            .await
            .unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.author_image, DEFAULT_AUTHOR_IMAGE);
    }

    #[tokio::test]
    async fn test_modify_writes_edited_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(5, false)]])
            .append_query_results(vec![vec![model(5, true)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let post = repo
            .modify(
                5,
                Box::new(|post: &mut BlogPost| -> Result<(), DomainError> {
                    post.toggle_favorite(chrono::Utc::now());
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert!(post.is_favorite);
    }

    #[tokio::test]
    async fn test_modify_rejected_edit_is_rolled_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(5, false)]])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo
            .modify(
                5,
                Box::new(|_: &mut BlogPost| -> Result<(), DomainError> {
                    Err(DomainError::Validation(vec!["Heading is required".to_owned()]))
                }),
            )
            .await;

        match result {
            Err(DomainError::Validation(errors)) => assert_eq!(errors, vec!["Heading is required"]),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_modify_missing_row_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let result = repo
            .modify(9, Box::new(|_: &mut BlogPost| -> Result<(), DomainError> { Ok(()) }))
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { id: 9, .. })));
    }

    #[tokio::test]
    async fn test_delete_returns_previous_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model(4, true)]])
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        let removed = repo.delete(4).await.unwrap().unwrap();
        assert_eq!(removed.id, 4);
        assert!(removed.is_favorite);
    }

    #[tokio::test]
    async fn test_delete_missing_row_returns_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<blog::Model>::new()])
            .into_connection();

        let repo = PostgresBlogRepository::new(db);

        assert!(repo.delete(4).await.unwrap().is_none());
    }
}
