//! # adscope-core
//!
//! Core crate for AdScope. Contains configuration schemas, the unified
//! error system, and the collaborator traits (ad-library scraping, AI
//! analysis, cloud archiving) implemented by the outer crates.
//!
//! This crate has **no** internal dependencies on other AdScope crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
