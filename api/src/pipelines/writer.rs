// loja_api/src/pipelines/writer.rs

//! The connection an order workflow writes through.

use crate::config::WriteStrategy;
use crate::errors::Result;
use sqlx::pool::PoolConnection;
use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

pub enum OrderWriter {
  /// Autocommit connection: each statement is durable as soon as it returns.
  Sequential(PoolConnection<Sqlite>),
  Atomic(Transaction<'static, Sqlite>),
}

impl OrderWriter {
  pub async fn open(pool: &SqlitePool, strategy: WriteStrategy) -> Result<Self> {
    let writer = match strategy {
      WriteStrategy::Atomic => OrderWriter::Atomic(pool.begin().await?),
      WriteStrategy::Sequential => OrderWriter::Sequential(pool.acquire().await?),
    };
    Ok(writer)
  }

  pub fn strategy(&self) -> WriteStrategy {
    match self {
      OrderWriter::Sequential(_) => WriteStrategy::Sequential,
      OrderWriter::Atomic(_) => WriteStrategy::Atomic,
    }
  }

  pub fn conn(&mut self) -> &mut SqliteConnection {
    match self {
      OrderWriter::Sequential(conn) => &mut **conn,
      OrderWriter::Atomic(tx) => &mut **tx,
    }
  }

  /// Commits the transaction in atomic mode and hands the connection back to the pool.
  pub async fn finish(self) -> Result<()> {
    if let OrderWriter::Atomic(tx) = self {
      tx.commit().await?;
    }
    Ok(())
  }

  /// Rolls back in atomic mode. In sequential mode there is nothing to undo.
  pub async fn abandon(self) -> Result<()> {
    if let OrderWriter::Atomic(tx) = self {
      tx.rollback().await?;
    }
    Ok(())
  }
}

/// Implemented by workflow contexts that carry an [`OrderWriter`], so the
/// open/commit/release steps can be shared between pipelines.
pub trait HoldsOrderWriter: Send + 'static {
  fn pool(&self) -> &SqlitePool;
  fn strategy(&self) -> WriteStrategy;
  fn writer_slot(&mut self) -> &mut Option<OrderWriter>;
  /// What is already on disk, for the log line written when a sequential run fails midway.
  fn partial_writes(&self) -> String;
}
