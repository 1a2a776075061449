//! # studio-entity
//!
//! Domain entity models for the Studio project explorer. The project tree
//! has a single entity, [`item::Item`], which is either a folder or a file.
//! All entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod item;

pub use item::{Item, ItemKind, ItemNode, ItemTree};
