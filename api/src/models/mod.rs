// loja_api/src/models/mod.rs

//! Row types, insert payloads and partial-update patches for each table.

pub mod category;
pub mod client;
pub mod order;
pub mod order_item;
pub mod product;

pub use category::{Category, CategoryPatch, NewCategory};
pub use client::{Client, ClientFilter, NewClient};
pub use order::{CreateOrderRequest, NewOrder, Order, OrderFilter, OrderPatch};
pub use order_item::{NewOrderItem, OrderItemInput, OrderLineItem};
pub use product::{NewProduct, Product, ProductFilter, ProductPatch};

use serde::{Deserialize, Deserializer};

/// For `Option<Option<T>>` patch fields: a missing key stays `None` (via
/// `#[serde(default)]`), an explicit `null` becomes `Some(None)`.
pub(crate) fn nullable<'de, D, T>(de: D) -> Result<Option<Option<T>>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Option::<T>::deserialize(de).map(Some)
}
