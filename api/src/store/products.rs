// loja_api/src/store/products.rs

use crate::errors::Result;
use crate::models::{NewProduct, Product, ProductFilter, ProductPatch};
use sqlx::{Executor, QueryBuilder, Sqlite};

const SELECT_ENRICHED: &str = "SELECT p.id, p.name, p.price, p.category_id, c.name AS category \
   FROM products p LEFT JOIN categories c ON c.id = p.category_id";

pub struct ProductStore;

impl ProductStore {
  pub async fn find_all<'c, E>(exec: E, filter: &ProductFilter) -> Result<Vec<Product>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_ENRICHED);
    if let Some(category_id) = filter.category_id {
      qb.push(" WHERE p.category_id = ").push_bind(category_id);
    }
    qb.push(" ORDER BY p.id");
    Ok(qb.build_query_as::<Product>().fetch_all(exec).await?)
  }

  pub async fn find_one<'c, E>(exec: E, id: i64) -> Result<Option<Product>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let product = sqlx::query_as::<_, Product>(&format!("{} WHERE p.id = ?", SELECT_ENRICHED))
      .bind(id)
      .fetch_optional(exec)
      .await?;
    Ok(product)
  }

  /// The most recently created product (highest id).
  pub async fn find_last<'c, E>(exec: E) -> Result<Option<Product>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let product = sqlx::query_as::<_, Product>(&format!("{} ORDER BY p.id DESC LIMIT 1", SELECT_ENRICHED))
      .fetch_optional(exec)
      .await?;
    Ok(product)
  }

  /// Current price, read without the category join. `None` if the product does not exist.
  pub async fn find_price<'c, E>(exec: E, id: i64) -> Result<Option<f64>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let price = sqlx::query_scalar::<_, f64>("SELECT price FROM products WHERE id = ?")
      .bind(id)
      .fetch_optional(exec)
      .await?;
    Ok(price)
  }

  pub async fn insert<'c, E>(exec: E, new: &NewProduct) -> Result<i64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("INSERT INTO products (name, price, category_id) VALUES (?, ?, ?)")
      .bind(&new.name)
      .bind(new.price)
      .bind(new.category_id)
      .execute(exec)
      .await?;
    Ok(done.last_insert_rowid())
  }

  /// Returns the number of rows changed; zero means no product has `id`.
  pub async fn update<'c, E>(exec: E, id: i64, patch: &ProductPatch) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    super::ensure_patch_not_empty(patch.is_empty(), "produtos")?;
    let mut qb = QueryBuilder::<Sqlite>::new("UPDATE products SET ");
    let mut set = qb.separated(", ");
    if let Some(name) = &patch.name {
      set.push("name = ").push_bind_unseparated(name.clone());
    }
    if let Some(price) = patch.price {
      set.push("price = ").push_bind_unseparated(price);
    }
    if let Some(category_id) = patch.category_id {
      set.push("category_id = ").push_bind_unseparated(category_id);
    }
    qb.push(" WHERE id = ").push_bind(id);
    Ok(qb.build().execute(exec).await?.rows_affected())
  }

  pub async fn delete<'c, E>(exec: E, id: i64) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("DELETE FROM products WHERE id = ?").bind(id).execute(exec).await?;
    Ok(done.rows_affected())
  }
}
