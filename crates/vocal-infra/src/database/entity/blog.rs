//! Blog entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set, Unchanged};

use vocal_core::domain::{BlogPost, NewBlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub image: Option<String>,
    pub heading: String,
    pub sub_heading: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub author_image: String,
    pub is_favorite: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            image: model.image,
            heading: model.heading,
            sub_heading: model.sub_heading,
            description: model.description,
            author: model.author,
            author_image: model.author_image,
            is_favorite: model.is_favorite,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}

/// Insert form: the id is left to the sequence.
impl From<NewBlogPost> for ActiveModel {
    fn from(post: NewBlogPost) -> Self {
        Self {
            id: NotSet,
            image: Set(post.image),
            heading: Set(post.heading),
            sub_heading: Set(post.sub_heading),
            description: Set(post.description),
            author: Set(post.author),
            author_image: Set(post.author_image),
            is_favorite: Set(post.is_favorite),
            created_at: Set(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}

/// Update form: every column except the key and `created_at` is written.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Unchanged(post.id),
            image: Set(post.image),
            heading: Set(post.heading),
            sub_heading: Set(post.sub_heading),
            description: Set(post.description),
            author: Set(post.author),
            author_image: Set(post.author_image),
            is_favorite: Set(post.is_favorite),
            created_at: Unchanged(post.created_at.into()),
            updated_at: Set(post.updated_at.into()),
        }
    }
}
