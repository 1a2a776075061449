//! Core type definitions used across the Studio workspace.

pub mod id;
pub mod sorting;

pub use id::*;
pub use sorting::{ChildOrder, SortDirection, SortKey};
