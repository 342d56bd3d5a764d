// loja_api/src/store/orders.rs

use crate::errors::Result;
use crate::models::{NewOrder, Order, OrderFilter, OrderPatch};
use sqlx::{Executor, QueryBuilder, Sqlite};

const SELECT_ORDER: &str = "SELECT id, created_at, delivery_address, client_id FROM orders";

/// Order header rows. Line items live in [`super::OrderItemStore`]; deleting an
/// order with items goes through the delete-order workflow.
pub struct OrderStore;

impl OrderStore {
  pub async fn find_all<'c, E>(exec: E, filter: &OrderFilter) -> Result<Vec<Order>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_ORDER);
    if let Some(client_id) = filter.client_id {
      qb.push(" WHERE client_id = ").push_bind(client_id);
    }
    qb.push(" ORDER BY id");
    Ok(qb.build_query_as::<Order>().fetch_all(exec).await?)
  }

  pub async fn find_one<'c, E>(exec: E, id: i64) -> Result<Option<Order>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let order = sqlx::query_as::<_, Order>(&format!("{} WHERE id = ?", SELECT_ORDER))
      .bind(id)
      .fetch_optional(exec)
      .await?;
    Ok(order)
  }

  pub async fn insert<'c, E>(exec: E, new: &NewOrder) -> Result<i64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("INSERT INTO orders (created_at, delivery_address, client_id) VALUES (?, ?, ?)")
      .bind(new.created_at)
      .bind(&new.delivery_address)
      .bind(new.client_id)
      .execute(exec)
      .await?;
    Ok(done.last_insert_rowid())
  }

  pub async fn update<'c, E>(exec: E, id: i64, patch: &OrderPatch) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    super::ensure_patch_not_empty(patch.is_empty(), "pedidos")?;
    let mut qb = QueryBuilder::<Sqlite>::new("UPDATE orders SET ");
    let mut set = qb.separated(", ");
    if let Some(created_at) = patch.created_at {
      set.push("created_at = ").push_bind_unseparated(created_at);
    }
    if let Some(address) = &patch.delivery_address {
      set.push("delivery_address = ").push_bind_unseparated(address.clone());
    }
    if let Some(client_id) = patch.client_id {
      set.push("client_id = ").push_bind_unseparated(client_id);
    }
    qb.push(" WHERE id = ").push_bind(id);
    Ok(qb.build().execute(exec).await?.rows_affected())
  }

  /// Deletes the header row only. Fails with a reference error while line items still point at it.
  pub async fn delete<'c, E>(exec: E, id: i64) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("DELETE FROM orders WHERE id = ?").bind(id).execute(exec).await?;
    Ok(done.rows_affected())
  }
}
