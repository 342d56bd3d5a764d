// loja_api/src/main.rs

use loja_api::config::{AppConfig, LogFormat};
use loja_api::db;
use loja_api::state::AppState;
use loja_api::web::configure_app_routes;

use actix_web::{web as actix_data, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration
  match format {
    LogFormat::Json => builder.json().init(),
    LogFormat::Text => builder.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  let app_config = Arc::new(AppConfig::from_env().context("Failed to load application configuration")?);
  init_tracing(app_config.log_format);

  tracing::info!(
    write_strategy = %app_config.write_strategy,
    "Starting Loja API server..."
  );

  let db_pool = db::connect(&app_config)
    .await
    .context("Failed to connect to the database")?;

  if app_config.ensure_schema {
    db::ensure_schema(&db_pool)
      .await
      .context("Failed to apply the database schema")?;
  }

  let app_state = AppState::new(db_pool.clone(), app_config.clone());

  let server_address = app_config.bind_address();
  tracing::info!("Binding server to {}...", server_address);

  let server_result = HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)
  .with_context(|| format!("Failed to bind {}", server_address))?
  .run()
  .await;

  db::close(&db_pool).await;
  server_result.context("HTTP server terminated with an error")?;
  tracing::info!("Server stopped.");
  Ok(())
}
