//! Project module for the script and storyboard document tree.
//!
//! This module provides:
//! - `model`: Data structures for the tree (Project, Act, SubScene, patches)
//! - `store`: Snapshot store with atomic replacement and change notifications
//! - `engine`: ProjectEngine with serialized structural mutations
//! - `validate`: Advisory completeness checks

pub mod engine;
pub mod model;
pub mod store;
pub mod validate;

pub use engine::ProjectEngine;
pub use model::*;
pub use store::{ProjectStore, SnapshotChange};
pub use validate::{validate_project, validate_scene};
