// loja_api/src/lib.rs

//! REST backend for a small online store: products, categories, clients and
//! orders, with order creation and deletion run as `loja_flow` pipelines.

pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod pipelines;
pub mod services;
pub mod state;
pub mod store;
pub mod web;
