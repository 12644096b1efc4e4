//! Domain entities - the core business objects.

mod blog;

pub use blog::{
    BlogChanges, BlogDraft, BlogId, BlogPost, BlogRepresentation, DEFAULT_AUTHOR,
    DEFAULT_AUTHOR_IMAGE, MIN_DESCRIPTION_CHARS, NewBlogPost, current_timestamp, default_author,
    default_author_image,
};
