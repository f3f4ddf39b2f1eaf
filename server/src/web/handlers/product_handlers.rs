// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::ProductDraft;
use crate::state::AppState;
use crate::web::envelope::ApiResponse;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
  let products = app_state
    .repo
    .list_all()
    .await
    .map_err(|e| AppError::database("Failed to fetch products", e))?;

  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(ApiResponse::ok(products)))
}

#[instrument(name = "handler::create_product", skip(app_state, draft), fields(product_name = %draft.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  draft: web::Json<ProductDraft>,
) -> Result<HttpResponse, AppError> {
  let product = app_state
    .repo
    .create(draft.into_inner())
    .await
    .map_err(|e| AppError::database("Failed to create product", e))?;

  info!(product_id = %product.id, "Product created.");
  Ok(
    HttpResponse::Created().json(ApiResponse::ok_with_message(
      product,
      "Product created successfully",
    )),
  )
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  // Reject syntactically invalid identifiers before touching the store.
  // Only this endpoint performs the check; update passes the raw id through.
  if Uuid::parse_str(&id).is_err() {
    warn!("Rejecting delete with malformed product id.");
    return Err(AppError::InvalidId);
  }

  let deleted = app_state
    .repo
    .delete(&id)
    .await
    .map_err(|e| AppError::database("Server error", e))?;

  if deleted.is_none() {
    // Documented behavior: a miss still answers 200 with null data.
    warn!("Delete matched no product.");
  }
  Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
    deleted,
    "Product deleted successfully",
  )))
}

#[instrument(name = "handler::update_product", skip(app_state, path, draft), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
  draft: web::Json<ProductDraft>,
) -> Result<HttpResponse, AppError> {
  let id = path.into_inner();

  // No identifier pre-check here: a malformed id reaches the store and
  // surfaces as a store fault. Kept asymmetric with delete on purpose.
  let updated = app_state
    .repo
    .replace(&id, draft.into_inner())
    .await
    .map_err(|e| AppError::database("Failed to update product", e))?;

  if updated.is_none() {
    warn!("Update matched no product.");
  }
  Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
    updated,
    "Product updated successfully",
  )))
}
