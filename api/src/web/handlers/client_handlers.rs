// loja_api/src/web/handlers/client_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use super::created;
use crate::errors::Result;
use crate::models::{ClientFilter, NewClient};
use crate::state::AppState;
use crate::store::ClientStore;

#[instrument(name = "handler::list_clients", skip(app_state, filter), fields(city_id = ?filter.city_id))]
pub async fn list_clients_handler(
  app_state: web::Data<AppState>,
  filter: web::Query<ClientFilter>,
) -> Result<HttpResponse> {
  let clients = ClientStore::find_all(&app_state.db_pool, &filter).await?;
  Ok(HttpResponse::Ok().json(clients))
}

#[instrument(name = "handler::get_client", skip(app_state, path), fields(client_id = %path.as_ref()))]
pub async fn get_client_handler(app_state: web::Data<AppState>, path: web::Path<i64>) -> Result<HttpResponse> {
  let client = ClientStore::find_one(&app_state.db_pool, path.into_inner()).await?;
  Ok(HttpResponse::Ok().json(client))
}

#[instrument(name = "handler::create_client", skip(app_state, body), fields(name = %body.name))]
pub async fn create_client_handler(
  app_state: web::Data<AppState>,
  body: web::Json<NewClient>,
) -> Result<HttpResponse> {
  let id = ClientStore::insert(&app_state.db_pool, &body).await?;
  info!(client_id = id, "Client created.");
  Ok(created("Cliente cadastrado", id))
}
