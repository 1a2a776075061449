//! # studio-service
//!
//! Business logic for the Studio project explorer. [`ItemTreeManager`] owns
//! the in-memory item arena and enforces the tree invariants;
//! [`MoveDestinationPicker`] and [`TreeBrowserView`] are read-only views
//! over it; [`ExplorerSession`] ties them together into the two-step
//! confirm-then-mutate protocol a user interface drives.
//!
//! Everything here is synchronous and single-threaded. Mutations take
//! `&mut self`; there is no shared state.

pub mod browser;
pub mod manager;
pub mod picker;
pub mod seed;
pub mod session;
pub mod store;

pub use browser::{Crumb, TreeBrowserView};
pub use manager::{ItemTreeManager, MoveOutcome, TreeSettings};
pub use picker::{MoveDestination, MoveDestinationPicker, MoveDestinations};
pub use session::{ExplorerSession, PendingDelete, PendingRename};
pub use store::ItemStore;
