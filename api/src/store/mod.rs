// loja_api/src/store/mod.rs

//! One store per table.
//!
//! Every function takes any SQLite executor: the pool for plain CRUD, or the
//! connection/transaction held by an order workflow. Each call is a single
//! statement and persists immediately on the executor it is given.

pub mod categories;
pub mod clients;
pub mod order_items;
pub mod orders;
pub mod products;

pub use categories::CategoryStore;
pub use clients::ClientStore;
pub use order_items::OrderItemStore;
pub use orders::OrderStore;
pub use products::ProductStore;

use crate::errors::{AppError, Result};

/// Rejects a patch with no fields before it reaches the store.
pub(crate) fn ensure_patch_not_empty(is_empty: bool, table: &str) -> Result<()> {
  if is_empty {
    return Err(AppError::Validation(format!(
      "Nenhum campo informado para atualizar em {}",
      table
    )));
  }
  Ok(())
}
