//! Item domain entities.

pub mod model;
pub mod seed_id;
pub mod timestamp;
pub mod tree;

pub use model::{Item, ItemKind};
pub use tree::{ItemNode, ItemTree};
