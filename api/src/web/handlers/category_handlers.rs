// loja_api/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument, warn};

use super::{created, done};
use crate::errors::{AppError, Result};
use crate::models::{CategoryPatch, NewCategory};
use crate::state::AppState;
use crate::store::CategoryStore;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> Result<HttpResponse> {
  let categories = CategoryStore::find_all(&app_state.db_pool).await?;
  Ok(HttpResponse::Ok().json(categories))
}

#[instrument(name = "handler::get_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn get_category_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let category = CategoryStore::find_one(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(category))
}

#[instrument(name = "handler::create_category", skip(app_state, body), fields(name = %body.name))]
pub async fn create_category_handler(
  app_state: web::Data<AppState>,
  body: web::Json<NewCategory>,
) -> Result<HttpResponse> {
  let id = CategoryStore::insert(&app_state.db_pool, &body).await?;
  info!(category_id = id, "Category created.");
  Ok(created("Categoria inserida", id))
}

#[instrument(name = "handler::update_category", skip(app_state, path, body), fields(category_id = %path.as_ref()))]
pub async fn update_category_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<CategoryPatch>,
) -> Result<HttpResponse> {
  let id = path.into_inner();
  if CategoryStore::update(&app_state.db_pool, id, &body).await? == 0 {
    warn!("Category {} not found for update.", id);
    return Err(AppError::NotFound("Categoria não encontrada".to_string()));
  }
  Ok(done("Categoria atualizada"))
}

#[instrument(name = "handler::delete_category", skip(app_state, path), fields(category_id = %path.as_ref()))]
pub async fn delete_category_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let id = path.into_inner();
  if CategoryStore::delete(&app_state.db_pool, id).await? == 0 {
    warn!("Category {} not found for delete.", id);
    return Err(AppError::NotFound("Categoria não encontrada".to_string()));
  }
  info!("Category {} deleted.", id);
  Ok(done("Categoria excluída"))
}
