// server/src/web/routes.rs

use actix_web::error::JsonPayloadError;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde_json::json;

use crate::errors::AppError;
use crate::web::handlers::product_handlers;

/// Liveness probe; no store access.
async fn health_check_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({
    "success": true,
    "message": "Product API is running",
    "timestamp": Utc::now(),
  }))
}

/// Render body-deserialization failures as the standard envelope instead of
/// actix's plain-text 400.
fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
  AppError::Validation(format!("Invalid product data: {}", err)).into()
}

/// Called from `main` (and the integration tests) to configure services for
/// the Actix App.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(web::JsonConfig::default().error_handler(json_error_handler))
    .service(
      web::scope("/api")
        .route("/health", web::get().to(health_check_handler))
        .service(
          web::scope("/products")
            .route("", web::get().to(product_handlers::list_products_handler))
            .route("", web::post().to(product_handlers::create_product_handler))
            .route("/{id}", web::delete().to(product_handlers::delete_product_handler))
            .route("/{id}", web::put().to(product_handlers::update_product_handler)),
        ),
    );
}
