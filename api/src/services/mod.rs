// loja_api/src/services/mod.rs

pub mod order_service;
