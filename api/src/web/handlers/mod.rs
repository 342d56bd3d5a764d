// loja_api/src/web/handlers/mod.rs

pub mod category_handlers;
pub mod client_handlers;
pub mod order_handlers;
pub mod product_handlers;

use actix_web::HttpResponse;
use serde_json::json;

/// `GET /`: liveness message.
pub async fn root_handler() -> HttpResponse {
  HttpResponse::Ok().json(json!({ "resposta": "API da Loja Online funcionando!" }))
}

/// 201 body for every single-row insert.
pub(crate) fn created(message: &str, id: i64) -> HttpResponse {
  HttpResponse::Created().json(json!({ "resposta": message, "id": id }))
}

pub(crate) fn done(message: &str) -> HttpResponse {
  HttpResponse::Ok().json(json!({ "resposta": message }))
}
