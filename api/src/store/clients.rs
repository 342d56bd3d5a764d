// loja_api/src/store/clients.rs

use crate::errors::Result;
use crate::models::{Client, ClientFilter, NewClient};
use sqlx::{Executor, QueryBuilder, Sqlite};

const SELECT_ENRICHED: &str = "SELECT cl.id, cl.name, cl.city_id, ci.name AS city \
   FROM clients cl LEFT JOIN cities ci ON ci.id = cl.city_id";

pub struct ClientStore;

impl ClientStore {
  pub async fn find_all<'c, E>(exec: E, filter: &ClientFilter) -> Result<Vec<Client>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let mut qb = QueryBuilder::<Sqlite>::new(SELECT_ENRICHED);
    if let Some(city_id) = filter.city_id {
      qb.push(" WHERE cl.city_id = ").push_bind(city_id);
    }
    qb.push(" ORDER BY cl.id");
    Ok(qb.build_query_as::<Client>().fetch_all(exec).await?)
  }

  pub async fn find_one<'c, E>(exec: E, id: i64) -> Result<Option<Client>>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let client = sqlx::query_as::<_, Client>(&format!("{} WHERE cl.id = ?", SELECT_ENRICHED))
      .bind(id)
      .fetch_optional(exec)
      .await?;
    Ok(client)
  }

  pub async fn insert<'c, E>(exec: E, new: &NewClient) -> Result<i64>
  where
    E: Executor<'c, Database = Sqlite>,
  {
    let done = sqlx::query("INSERT INTO clients (name, city_id) VALUES (?, ?)")
      .bind(&new.name)
      .bind(new.city_id)
      .execute(exec)
      .await?;
    Ok(done.last_insert_rowid())
  }
}
