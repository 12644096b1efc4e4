//! Blog post handlers.

use actix_web::{HttpResponse, web};
use serde::de::DeserializeOwned;
use serde_json::Value;

use vocal_core::domain::{
    BlogChanges, BlogDraft, BlogId, BlogPost, BlogRepresentation, NewBlogPost, current_timestamp,
};
use vocal_core::error::DomainError;
use vocal_shared::ApiResponse;
use vocal_shared::dto::{CreateBlogRequest, UpdateBlogRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn blog_not_found() -> AppError {
    AppError::NotFound("Blog not found".to_string())
}

fn no_data() -> AppError {
    AppError::BadRequest("No data provided".to_string())
}

/// Decode a request body. `null`, `{}` and `[]` carry no data.
fn request_from<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    let blank = match &body {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if blank {
        return Err(no_data());
    }

    serde_json::from_value(body).map_err(|e| {
        tracing::debug!("Rejected request body: {}", e);
        AppError::BadRequest("Invalid JSON body".to_string())
    })
}

/// Presence gate for create: `heading` and `description` must be non-empty strings.
fn draft_from(req: CreateBlogRequest) -> AppResult<BlogDraft> {
    let heading = req.heading.filter(|h| !h.is_empty());
    let description = req.description.filter(|d| !d.is_empty());

    let (Some(heading), Some(description)) = (heading, description) else {
        return Err(AppError::BadRequest(
            "Heading and description are required".to_string(),
        ));
    };

    Ok(BlogDraft {
        image: req.image,
        heading,
        sub_heading: req.sub_heading,
        description,
        author: req.author,
        author_image: req.author_image,
        is_favorite: req.is_favorite,
    })
}

fn changes_from(req: UpdateBlogRequest) -> BlogChanges {
    BlogChanges {
        image: req.image,
        heading: req.heading,
        sub_heading: req.sub_heading,
        description: req.description,
        author: req.author,
        author_image: req.author_image,
        is_favorite: req.is_favorite,
    }
}

fn represent(posts: &[BlogPost]) -> Vec<BlogRepresentation> {
    posts.iter().map(BlogPost::to_representation).collect()
}

/// GET /api/blogs
pub async fn list_blogs(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Fetching all blogs");

    let posts = state.blogs.list(false).await?;

    tracing::info!(count = posts.len(), "Fetched blogs");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(represent(&posts))))
}

/// GET /api/blogs/favorites
pub async fn list_favorites(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    tracing::info!("Fetching favorite blogs");

    let posts = state.blogs.list(true).await?;

    tracing::info!(count = posts.len(), "Fetched favorite blogs");
    Ok(HttpResponse::Ok().json(ApiResponse::counted(represent(&posts))))
}

/// POST /api/blogs
pub async fn create_blog(
    state: web::Data<AppState>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    tracing::info!("Creating new blog");

    let req: CreateBlogRequest = request_from(body.into_inner())?;
    let post = NewBlogPost::from_draft(draft_from(req)?, current_timestamp());

    let errors = post.validate();
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let created = state.blogs.insert(post).await?;

    tracing::info!(blog_id = created.id, "Created blog");
    Ok(HttpResponse::Created().json(ApiResponse::ok(created.to_representation())))
}

/// GET /api/blogs/{id}
pub async fn get_blog(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .blogs
        .find_by_id(id)
        .await?
        .ok_or_else(blog_not_found)?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(post.to_representation())))
}

/// PUT /api/blogs/{id}
pub async fn update_blog(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
    body: web::Json<Value>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(blog_id = id, "Updating blog");

    let changes = changes_from(request_from::<UpdateBlogRequest>(body.into_inner())?);
    if changes.is_empty() {
        return Err(no_data());
    }

    let updated = state
        .blogs
        .modify(
            id,
            Box::new(move |post: &mut BlogPost| {
                post.revise(changes, current_timestamp())
            }),
        )
        .await?;

    tracing::info!(blog_id = id, "Updated blog");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated.to_representation())))
}

/// DELETE /api/blogs/{id}
pub async fn delete_blog(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(blog_id = id, "Deleting blog");

    let removed = state.blogs.delete(id).await?.ok_or_else(blog_not_found)?;

    tracing::info!(blog_id = id, "Deleted blog");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(removed.to_representation())))
}

/// PATCH /api/blogs/{id}/favorite
pub async fn toggle_favorite(
    state: web::Data<AppState>,
    path: web::Path<BlogId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    tracing::info!(blog_id = id, "Toggling favorite");

    let updated = state
        .blogs
        .modify(
            id,
            Box::new(|post: &mut BlogPost| -> Result<(), DomainError> {
                post.toggle_favorite(current_timestamp());
                Ok(())
            }),
        )
        .await?;

    tracing::info!(blog_id = id, is_favorite = updated.is_favorite, "Toggled favorite");
    Ok(HttpResponse::Ok().json(ApiResponse::ok(updated.to_representation())))
}
