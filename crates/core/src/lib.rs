//! Domain types shared across the Wayfarer workspace.
//!
//! Holds the error taxonomy, common type aliases, and the tree
//! materializer. No I/O lives here; everything is synchronous and
//! store-agnostic.

pub mod error;
pub mod tree;
pub mod types;
