//! Error types for the authoring engine.

use thiserror::Error;

/// Result type alias for engine operations.
pub type ForgeResult<T> = Result<T, ForgeError>;

/// Errors that can occur during authoring operations.
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Act not found in the project.
    #[error("Act not found: {0}")]
    ActNotFound(String),

    /// Scene not found in the addressed act.
    #[error("Scene not found: {0}")]
    SceneNotFound(String),

    /// Index out of bounds for list operations.
    #[error("Index {index} out of bounds for list of length {length}")]
    IndexOutOfBounds { index: usize, length: usize },

    /// Deleting the last remaining act would leave the project empty.
    #[error("Cannot delete act {0}: a project must keep at least one act")]
    LastAct(String),

    /// A scene holds at most a fixed number of storyboard images.
    #[error("Scene {id} cannot hold {requested} storyboard images (limit {limit})")]
    StoryboardFull {
        id: String,
        requested: usize,
        limit: usize,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A persistence attempt failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Persistence kept failing after every configured retry.
    #[error("Persistence failed after {attempts} attempts: {source}")]
    PersistenceExhausted {
        attempts: usize,
        #[source]
        source: Box<ForgeError>,
    },

    /// The autosave scheduler task is no longer running.
    #[error("Autosave scheduler stopped")]
    SchedulerStopped,
}

impl ForgeError {
    /// Creates an ActNotFound error.
    pub fn act_not_found(id: impl Into<String>) -> Self {
        Self::ActNotFound(id.into())
    }

    /// Creates a SceneNotFound error.
    pub fn scene_not_found(id: impl Into<String>) -> Self {
        Self::SceneNotFound(id.into())
    }

    /// Creates an IndexOutOfBounds error.
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::IndexOutOfBounds { index, length }
    }

    /// Creates a LastAct error.
    pub fn last_act(id: impl Into<String>) -> Self {
        Self::LastAct(id.into())
    }

    /// Creates a StoryboardFull error.
    pub fn storyboard_full(id: impl Into<String>, requested: usize, limit: usize) -> Self {
        Self::StoryboardFull {
            id: id.into(),
            requested,
            limit,
        }
    }

    /// Creates a Storage error.
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Creates a PersistenceExhausted error.
    pub fn persistence_exhausted(attempts: usize, source: ForgeError) -> Self {
        Self::PersistenceExhausted {
            attempts,
            source: Box::new(source),
        }
    }
}
