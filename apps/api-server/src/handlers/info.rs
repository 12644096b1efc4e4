//! Service banner and endpoint index.

use actix_web::HttpResponse;
use serde::Serialize;

#[derive(Serialize)]
struct EndpointMap {
    health: &'static str,
    blogs: &'static str,
    favorites: &'static str,
}

#[derive(Serialize)]
struct Banner {
    message: &'static str,
    status: &'static str,
    version: &'static str,
    endpoints: EndpointMap,
}

#[derive(Serialize)]
struct EndpointIndex {
    message: &'static str,
    endpoints: &'static [&'static str],
}

const ENDPOINTS: &[&str] = &[
    "GET /api/health - Health check",
    "GET /api/blogs - Get all blogs",
    "POST /api/blogs - Create new blog",
    "GET /api/blogs/favorites - Get favorite blogs",
    "GET /api/blogs/<id> - Get specific blog",
    "PUT /api/blogs/<id> - Update blog",
    "DELETE /api/blogs/<id> - Delete blog",
    "PATCH /api/blogs/<id>/favorite - Toggle favorite",
];

/// GET /
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(Banner {
        message: "Vocal API is running!",
        status: "success",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: EndpointMap {
            health: "/api/health",
            blogs: "/api/blogs",
            favorites: "/api/blogs/favorites",
        },
    })
}

/// GET /api
pub async fn api_info() -> HttpResponse {
    HttpResponse::Ok().json(EndpointIndex {
        message: "Blog API endpoints",
        endpoints: ENDPOINTS,
    })
}
