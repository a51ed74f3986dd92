//! SceneForge - local-first authoring engine for film scripts and storyboards.
//!
//! This crate manages a hierarchical project document (Project, Acts,
//! SubScenes) with a snapshot architecture:
//!
//! - **Immutable snapshots**: every mutation builds a complete new tree and
//!   swaps it in atomically; readers keep whatever snapshot they hold
//! - **Serialized mutations**: one engine orders all structural edits, so
//!   invariants like "at least one act" always hold
//! - **Debounced autosave**: bursts of edits coalesce into a single
//!   persistence write, with bounded retries on failure
//! - **Deterministic export**: the same snapshot always renders the same
//!   markdown script and summary statistics
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use sceneforge::{MemoryStorage, ScenePatch, Workspace, WorkspaceConfig};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> sceneforge::ForgeResult<()> {
//! let storage = Arc::new(MemoryStorage::new());
//! let workspace = Workspace::open(storage, WorkspaceConfig::default()).await?;
//!
//! let act = workspace.engine().add_act(Some("Act 2: The Heist"))?;
//! let scene = workspace.engine().add_sub_scene(&act.id)?;
//! workspace.engine().update_sub_scene(
//!     &act.id,
//!     &scene.id,
//!     ScenePatch::new()
//!         .with_title("Vault door")
//!         .with_dialogue("JO: We go at first light."),
//! )?;
//!
//! let script = sceneforge::script_markdown(&workspace.snapshot());
//! assert!(script.contains("## Act 2: The Heist"));
//!
//! workspace.close().await?;
//! # Ok(())
//! # }
//! ```

pub mod autosave;
pub mod error;
pub mod export;
pub mod ident;
pub mod media;
pub mod project;
pub mod storage;
pub mod workspace;

// Re-exports for convenience
pub use autosave::{AutosaveConfig, AutosaveScheduler};
pub use error::{ForgeError, ForgeResult};
pub use export::{project_summary, script_filename, script_markdown, ProjectSummary};
pub use project::{
    validate_project, validate_scene, Act, CameraMovement, CameraShot, Project, ProjectEngine,
    ProjectPatch, ProjectStore, RelatedAsset, ScenePatch, SnapshotChange, SubScene,
};
pub use storage::{MemoryStorage, ProjectStorage};
pub use workspace::{Workspace, WorkspaceConfig, DEFAULT_WORKSPACE_KEY};
