//! HTTP handlers and route configuration.

mod blogs;
mod health;
mod info;


use actix_web::{HttpResponse, web};

use crate::middleware::error::{endpoint_not_found, json_error_handler, path_error_handler};

/// Largest accepted JSON body. Images may be sent inline as data URLs.
const JSON_LIMIT: usize = 5 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(json_error_handler);
    let path_config = web::PathConfig::default().error_handler(path_error_handler);

    cfg.app_data(json_config)
        .app_data(path_config)
        .route("/", web::get().to(info::home))
        .service(
            web::scope("/api")
                .route("", web::get().to(info::api_info))
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/blogs")
                        .route("", web::get().to(blogs::list_blogs))
                        .route("", web::post().to(blogs::create_blog))
                        // Registered before `/{id}` so "favorites" is not taken for an id.
                        .route("/favorites", web::get().to(blogs::list_favorites))
                        .route("/{id}", web::get().to(blogs::get_blog))
                        .route("/{id}", web::put().to(blogs::update_blog))
                        .route("/{id}", web::delete().to(blogs::delete_blog))
                        .route("/{id}/favorite", web::patch().to(blogs::toggle_favorite)),
                ),
        )
        .default_service(web::to(not_found));
}

async fn not_found() -> HttpResponse {
    endpoint_not_found()
}
