//! Cross-origin policy for the front-end apps.

use actix_cors::Cors;
use actix_web::http::header;

/// CORS policy allowing the configured origins, with credentials.
pub fn cors_policy(origins: &[String]) -> Cors {
    origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
        ])
        .supports_credentials()
        .max_age(3600)
}
