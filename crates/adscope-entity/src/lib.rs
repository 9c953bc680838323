//! # adscope-entity
//!
//! Domain entity models for AdScope. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod ad;
pub mod analysis;
pub mod brand;
pub mod competitor;
pub mod job;
pub mod settings;
