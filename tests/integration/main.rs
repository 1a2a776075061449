//! Integration tests for the Studio workspace.

mod helpers;
mod property_test;
mod seed_test;
mod session_test;
mod tree_test;
