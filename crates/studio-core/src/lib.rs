//! # studio-core
//!
//! Core crate for the Studio project explorer. Contains configuration
//! schemas, typed identifiers, domain events, sorting types, and the
//! unified error system.
//!
//! This crate has **no** internal dependencies on other Studio crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
