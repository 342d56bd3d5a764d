// loja_api/src/store/order_items.rs

use crate::errors::Result;
use crate::models::{NewOrderItem, OrderLineItem};
use sqlx::{Executor, Sqlite};

const SELECT_ITEM: &str = "SELECT id, order_id, product_id, quantity, unit_price FROM order_items";

pub struct OrderItemStore;

impl OrderItemStore {
  pub async fn find_by_order<'c, E>(exec: E, order_id: i64) -> Result<Vec<OrderLineItem>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let rows = sqlx::query_as::<_, OrderLineItem>(&format!("{} WHERE order_id = ? ORDER BY id", SELECT_ITEM))
      .bind(order_id)
      .fetch_all(exec)
      .await?;
    Ok(rows)
  }

  pub async fn find_one<'c, E>(exec: E, id: i64) -> Result<Option<OrderLineItem>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let row = sqlx::query_as::<_, OrderLineItem>(&format!("{} WHERE id = ?", SELECT_ITEM))
      .bind(id)
      .fetch_optional(exec)
      .await?;
    Ok(row)
  }

  pub async fn insert<'c, E>(exec: E, item: &NewOrderItem) -> Result<i64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("INSERT INTO order_items (order_id, product_id, quantity, unit_price) VALUES (?, ?, ?, ?)")
      .bind(item.order_id)
      .bind(item.product_id)
      .bind(item.quantity)
      .bind(item.unit_price)
      .execute(exec)
      .await?;
    Ok(done.last_insert_rowid())
  }

  /// Removes every line item of `order_id`; zero rows is not an error.
  pub async fn delete_by_order<'c, E>(exec: E, order_id: i64) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("DELETE FROM order_items WHERE order_id = ?")
      .bind(order_id)
      .execute(exec)
      .await?;
    Ok(done.rows_affected())
  }
}
