//! Health check endpoint.

use actix_web::{HttpResponse, web};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check endpoint - probes the blog store.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    tracing::info!("Health check requested");

    match state.blogs.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            success: true,
            message: "API is healthy",
            status: Some("success"),
            database: Some("connected"),
            error: None,
        }),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            HttpResponse::InternalServerError().json(HealthResponse {
                success: false,
                message: "Database connection failed",
                status: None,
                database: None,
                error: Some(e.to_string()),
            })
        }
    }
}
