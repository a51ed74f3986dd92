//! Workspace lifecycle: one persisted project per storage key.
//!
//! `Workspace::open` loads the document under the key or seeds a fresh
//! default project, then wires the store, mutation engine, and autosave
//! scheduler together. `close` flushes pending work and stops the
//! scheduler.

use std::sync::Arc;

use crate::autosave::{AutosaveConfig, AutosaveScheduler};
use crate::error::ForgeResult;
use crate::ident;
use crate::project::engine::ProjectEngine;
use crate::project::model::Project;
use crate::project::store::ProjectStore;
use crate::storage::ProjectStorage;

/// Storage key used when none is configured.
pub const DEFAULT_WORKSPACE_KEY: &str = "sceneforge-project";

// =============================================================================
// CONFIG
// =============================================================================

/// Settings for opening a workspace.
#[derive(Debug, Clone)]
pub struct WorkspaceConfig {
    /// Storage key the document lives under.
    pub key: String,
    pub autosave: AutosaveConfig,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            key: DEFAULT_WORKSPACE_KEY.to_string(),
            autosave: AutosaveConfig::default(),
        }
    }
}

impl WorkspaceConfig {
    /// Builder: Set the storage key.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Builder: Set autosave timing.
    pub fn with_autosave(mut self, autosave: AutosaveConfig) -> Self {
        self.autosave = autosave;
        self
    }
}

// =============================================================================
// WORKSPACE
// =============================================================================

/// An open project document with live autosave.
pub struct Workspace {
    store: Arc<ProjectStore>,
    engine: ProjectEngine,
    autosave: AutosaveScheduler,
}

impl Workspace {
    /// Opens the workspace stored under the configured key.
    ///
    /// A missing document seeds a new default project and persists it right
    /// away, so a crash before the first edit still leaves a loadable
    /// document behind.
    pub async fn open(
        storage: Arc<dyn ProjectStorage>,
        config: WorkspaceConfig,
    ) -> ForgeResult<Self> {
        let WorkspaceConfig { key, autosave } = config;

        let project = match storage.load(&key).await? {
            Some(project) => {
                tracing::info!(
                    key = %key,
                    acts = project.acts.len(),
                    scenes = project.total_scenes(),
                    "workspace loaded"
                );
                project
            }
            None => {
                let project = Project::new(ident::generate());
                storage.save(&key, &project).await?;
                tracing::info!(key = %key, "workspace seeded with a new project");
                project
            }
        };

        let store = Arc::new(ProjectStore::new(project));
        let engine = ProjectEngine::new(store.clone());
        let autosave = AutosaveScheduler::spawn(store.clone(), storage, key, autosave);

        Ok(Self {
            store,
            engine,
            autosave,
        })
    }

    /// The mutation engine for this workspace.
    pub fn engine(&self) -> &ProjectEngine {
        &self.engine
    }

    /// The snapshot store, for subscribing to commits.
    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Project> {
        self.store.get()
    }

    /// Persists any unpersisted commit now.
    pub async fn flush(&self) -> ForgeResult<()> {
        self.autosave.flush().await
    }

    /// Flushes pending work and stops the autosave task.
    pub async fn close(self) -> ForgeResult<()> {
        let result = self.autosave.shutdown().await;
        tracing::info!("workspace closed");
        result
    }
}

// =============================================================================
// TESTS
// =============================================================================
