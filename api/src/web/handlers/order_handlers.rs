// loja_api/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use tracing::{info, instrument, warn};

use super::done;
use crate::errors::{AppError, Result};
use crate::models::{CreateOrderRequest, OrderFilter, OrderPatch};
use crate::services::order_service;
use crate::state::AppState;
use crate::store::{OrderItemStore, OrderStore};

#[instrument(name = "handler::list_orders", skip(app_state, filter), fields(client_id = ?filter.client_id))]
pub async fn list_orders_handler(
  app_state: web::Data<AppState>,
  filter: web::Query<OrderFilter>,
) -> Result<HttpResponse> {
  let orders = OrderStore::find_all(&app_state.db_pool, &filter).await?;
  Ok(HttpResponse::Ok().json(orders))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn get_order_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let order = OrderStore::find_one(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(order))
}

#[instrument(name = "handler::list_order_items", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn list_order_items_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let items = OrderItemStore::find_by_order(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(items))
}

#[instrument(name = "handler::create_order", skip(app_state, body), fields(client_id = body.client_id))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
  let created = order_service::create_order(&app_state, body.into_inner()).await?;
  info!(
    "Order {} created with {} line item(s).",
    created.order_id,
    created.line_items.len()
  );
  Ok(HttpResponse::Created().json(json!({
    "resposta": "Pedido criado",
    "pedidoId": created.order_id,
  })))
}

#[instrument(name = "handler::update_order", skip(app_state, path, body), fields(order_id = %path.as_ref()))]
pub async fn update_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<i64>,
  body: web::Json<OrderPatch>,
) -> Result<HttpResponse> {
  let id = path.into_inner();
  if OrderStore::update(&app_state.db_pool, id, &body).await? == 0 {
    warn!("Order {} not found for update.", id);
    return Err(AppError::NotFound("Pedido não encontrado".to_string()));
  }
  Ok(done("Pedido atualizado"))
}

#[instrument(name = "handler::delete_order", skip(app_state, path), fields(order_id = %path.as_ref()))]
pub async fn delete_order_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let deleted = order_service::delete_order(&app_state, path.into_inner()).await?;
  info!(
    "Order {} deleted along with {} line item(s).",
    deleted.order_id, deleted.line_items_removed
  );
  Ok(done("Pedido excluído"))
}
