// loja_api/src/web/routes.rs

use crate::errors::AppError;
use crate::web::handlers::{self, category_handlers, client_handlers, order_handlers, product_handlers};
use actix_web::error::{JsonPayloadError, PathError, QueryPayloadError};
use actix_web::{web, HttpRequest};
use tracing::warn;

/// Turns body deserialization failures into a 400 with the usual error body.
pub fn json_config() -> web::JsonConfig {
  web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
    warn!(error = %err, "Rejected request body.");
    AppError::Validation(format!("Corpo da requisição inválido: {}", err)).into()
  })
}

/// Non-numeric ids such as `/produtos/abc`.
pub fn path_config() -> web::PathConfig {
  web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
    warn!(error = %err, path = req.path(), "Rejected path parameter.");
    AppError::Validation(format!("Parâmetro de rota inválido: {}", err)).into()
  })
}

/// Bad filters such as `?category_id=abc`.
pub fn query_config() -> web::QueryConfig {
  web::QueryConfig::default().error_handler(|err: QueryPayloadError, req: &HttpRequest| {
    warn!(error = %err, query = req.query_string(), "Rejected query string.");
    AppError::Validation(format!("Parâmetro de consulta inválido: {}", err)).into()
  })
}

/// Registers every route together with the extractor configs, so that bad
/// bodies, ids and filters all answer with the usual `{"error": ...}` body.
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg
    .app_data(json_config())
    .app_data(path_config())
    .app_data(query_config())
    .route("/", web::get().to(handlers::root_handler))
    .service(
      web::scope("/produtos")
        .route("", web::get().to(product_handlers::list_products_handler))
        .route("", web::post().to(product_handlers::create_product_handler))
        // Must stay ahead of "/{id}".
        .route("/last", web::get().to(product_handlers::last_product_handler))
        .route("/{id}", web::get().to(product_handlers::get_product_handler))
        .route("/{id}", web::put().to(product_handlers::update_product_handler))
        .route("/{id}", web::delete().to(product_handlers::delete_product_handler)),
    )
    .service(
      web::scope("/categorias")
        .route("", web::get().to(category_handlers::list_categories_handler))
        .route("", web::post().to(category_handlers::create_category_handler))
        .route("/{id}", web::get().to(category_handlers::get_category_handler))
        .route("/{id}", web::put().to(category_handlers::update_category_handler))
        .route("/{id}", web::delete().to(category_handlers::delete_category_handler)),
    )
    .service(
      web::scope("/clientes")
        .route("", web::get().to(client_handlers::list_clients_handler))
        .route("", web::post().to(client_handlers::create_client_handler))
        .route("/{id}", web::get().to(client_handlers::get_client_handler)),
    )
    .service(
      web::scope("/pedidos")
        .route("", web::get().to(order_handlers::list_orders_handler))
        .route("", web::post().to(order_handlers::create_order_handler))
        .route("/{id}", web::get().to(order_handlers::get_order_handler))
        .route("/{id}", web::put().to(order_handlers::update_order_handler))
        .route("/{id}", web::delete().to(order_handlers::delete_order_handler))
        .route("/{id}/itens", web::get().to(order_handlers::list_order_items_handler)),
    );
}
