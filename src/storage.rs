//! Persistence boundary for project documents.
//!
//! The workspace and autosave scheduler talk to storage only through
//! [`ProjectStorage`], so a browser-style key-value store, a file, or a
//! remote service can back the same crate. Documents cross the boundary as
//! camelCase JSON, one document per workspace key.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::ForgeResult;
use crate::project::model::Project;

// =============================================================================
// STORAGE TRAIT
// =============================================================================

/// Durable key-value persistence for whole project documents.
///
/// `save` must replace the stored document atomically: a concurrent `load`
/// observes either the prior document or the new one, never a torn mix.
#[async_trait]
pub trait ProjectStorage: Send + Sync {
    /// Persists the document under `key`, replacing any previous version.
    async fn save(&self, key: &str, project: &Project) -> ForgeResult<()>;

    /// Loads the document stored under `key`, or `None` when absent.
    async fn load(&self, key: &str) -> ForgeResult<Option<Project>>;
}

// =============================================================================
// MEMORY STORAGE
// =============================================================================

/// In-memory [`ProjectStorage`] keyed by workspace name.
///
/// Stores serialized JSON strings, which keeps the serialization path
/// identical to a real string-valued store.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The raw serialized document under `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.documents
            .lock()
            .expect("memory storage lock poisoned")
            .get(key)
            .cloned()
    }

    /// Whether a document exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.documents
            .lock()
            .expect("memory storage lock poisoned")
            .contains_key(key)
    }
}

#[async_trait]
impl ProjectStorage for MemoryStorage {
    async fn save(&self, key: &str, project: &Project) -> ForgeResult<()> {
        let serialized = serde_json::to_string(project)?;
        self.documents
            .lock()
            .expect("memory storage lock poisoned")
            .insert(key.to_string(), serialized);
        Ok(())
    }

    async fn load(&self, key: &str) -> ForgeResult<Option<Project>> {
        let serialized = self
            .documents
            .lock()
            .expect("memory storage lock poisoned")
            .get(key)
            .cloned();
        match serialized {
            Some(serialized) => Ok(Some(serde_json::from_str(&serialized)?)),
            None => Ok(None),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::model::{ScenePatch, SubScene};

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let storage = MemoryStorage::new();
        let mut project = Project::new("p1").with_title("Heist at Dawn");
        let mut scene = SubScene::new("s1");
        ScenePatch::new()
            .with_title("Opening")
            .with_dialogue("JO: We go at first light.")
            .apply_to(&mut scene);
        project.acts[0].sub_scenes.push(scene);

        storage.save("workspace-a", &project).await.unwrap();
        let loaded = storage.load("workspace-a").await.unwrap().unwrap();

        assert_eq!(loaded, project);
    }

    #[tokio::test]
    async fn test_load_missing_key() {
        let storage = MemoryStorage::new();
        assert!(storage.load("nothing-here").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_save_replaces_previous_document() {
        let storage = MemoryStorage::new();
        let project = Project::new("p1").with_title("First");
        storage.save("k", &project).await.unwrap();

        let project = project.with_title("Second");
        storage.save("k", &project).await.unwrap();

        let loaded = storage.load("k").await.unwrap().unwrap();
        assert_eq!(loaded.title, "Second");
    }

    #[tokio::test]
    async fn test_raw_document_is_camel_case_json() {
        let storage = MemoryStorage::new();
        storage.save("k", &Project::new("p1")).await.unwrap();

        let raw = storage.raw("k").unwrap();
        assert!(raw.contains("\"createdAt\""));
        assert!(raw.contains("\"subScenes\""));
        assert!(!raw.contains("\"created_at\""));
    }
}
