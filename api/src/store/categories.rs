// loja_api/src/store/categories.rs

use crate::errors::Result;
use crate::models::{Category, CategoryPatch, NewCategory};
use sqlx::{Executor, QueryBuilder, Sqlite};

pub struct CategoryStore;

impl CategoryStore {
  pub async fn find_all<'c, E>(exec: E) -> Result<Vec<Category>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let rows = sqlx::query_as::<_, Category>("SELECT id, name FROM categories ORDER BY id")
      .fetch_all(exec)
      .await?;
    Ok(rows)
  }

  pub async fn find_one<'c, E>(exec: E, id: i64) -> Result<Option<Category>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let row = sqlx::query_as::<_, Category>("SELECT id, name FROM categories WHERE id = ?")
      .bind(id)
      .fetch_optional(exec)
      .await?;
    Ok(row)
  }

  pub async fn insert<'c, E>(exec: E, new: &NewCategory) -> Result<i64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("INSERT INTO categories (name) VALUES (?)")
      .bind(&new.name)
      .execute(exec)
      .await?;
    Ok(done.last_insert_rowid())
  }

  pub async fn update<'c, E>(exec: E, id: i64, patch: &CategoryPatch) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    super::ensure_patch_not_empty(patch.is_empty(), "categorias")?;
    let mut qb = QueryBuilder::<Sqlite>::new("UPDATE categories SET ");
    if let Some(name) = &patch.name {
      qb.push("name = ").push_bind(name.clone());
    }
    qb.push(" WHERE id = ").push_bind(id);
    Ok(qb.build().execute(exec).await?.rows_affected())
  }

  /// Products in the category keep existing with a NULL `category_id`.
  pub async fn delete<'c, E>(exec: E, id: i64) -> Result<u64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("DELETE FROM categories WHERE id = ?").bind(id).execute(exec).await?;
    Ok(done.rows_affected())
  }
}
