// loja_api/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use super::{created, done};
use crate::errors::{AppError, Result};
use crate::models::{NewProduct, ProductFilter, ProductPatch};
use crate::state::AppState;
use crate::store::ProductStore;

#[instrument(name = "handler::list_products", skip(app_state, filter), fields(category_id = ?filter.category_id))]
pub async fn list_products_handler(
  app_state: web::Data<AppState>,
  filter: web::Query<ProductFilter>,
) -> Result<HttpResponse> {
  let products = ProductStore::find_all(&app_state.db_pool, &filter).await?;
  info!("Fetched {} products.", products.len());
  Ok(HttpResponse::Ok().json(products))
}

/// Absent ids answer `null`, not 404.
#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn get_product_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let product = ProductStore::find_one(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::last_product", skip(app_state))]
pub async fn last_product_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let product = ProductStore::find_last(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(product))
}

#[instrument(name = "handler::create_product", skip(app_state, body), fields(name = %body.name))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: web::Json<NewProduct>,
) -> Result<HttpResponse> {
  let id = ProductStore::insert(&app_state.db_pool, &body).await?;
  info!(product_id = id, "Product created.");
  Ok(created("Produto inserido", id))
}

#[instrument(name = "handler::update_product", skip(app_state, path, body), fields(product_id = %path.as_ref()))]
pub async fn update_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<ProductPatch>,
) -> Result<HttpResponse> {
  let id = path.into_inner();
  if ProductStore::update(&app_state.db_pool, id, &body).await? == 0 {
    warn!("Product {} not found for update.", id);
    return Err(AppError::NotFound("Produto não encontrado".to_string()));
  }
  info!("Product {} updated.", id);
  Ok(done("Produto atualizado"))
}

#[instrument(name = "handler::delete_product", skip(app_state, path), fields(product_id = %path.as_ref()))]
pub async fn delete_product_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let id = path.into_inner();
  if ProductStore::delete(&app_state.db_pool, id).await? == 0 {
    warn!("Product {} not found for delete.", id);
    return Err(AppError::NotFound("Produto não encontrado".to_string()));
  }
  info!("Product {} deleted.", id);
  Ok(done("Produto excluído"))
}
