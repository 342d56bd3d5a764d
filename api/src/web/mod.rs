// loja_api/src/web/mod.rs

pub mod handlers;
pub mod routes;

pub use routes::{configure_app_routes, json_config, path_config, query_config};
