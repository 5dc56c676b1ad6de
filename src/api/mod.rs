//! API handlers for the StorageIT REST endpoints

pub mod health;
pub mod openapi;
pub mod storage;
