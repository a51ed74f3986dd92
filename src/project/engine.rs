//! Mutation engine: the single entry point for structural changes.
//!
//! Every operation reads the current snapshot, computes a complete
//! replacement tree, and commits it with exactly one store replacement. An
//! internal commit lock serializes operations, so no two mutations ever
//! interleave and a failed operation leaves the prior snapshot untouched.

use std::sync::{Arc, Mutex};

use chrono::Utc;

use crate::error::{ForgeError, ForgeResult};
use crate::ident;
use crate::media::STORYBOARD_IMAGE_LIMIT;
use crate::project::model::{Act, Project, ProjectPatch, ScenePatch, SubScene};
use crate::project::store::ProjectStore;

// =============================================================================
// PROJECT ENGINE
// =============================================================================

/// Serialized mutation entry point over a [`ProjectStore`].
///
/// The engine is the only actor that replaces snapshots; schedulers and
/// exporters only ever read.
pub struct ProjectEngine {
    store: Arc<ProjectStore>,
    commit: Mutex<()>,
}

impl ProjectEngine {
    /// Creates an engine over the given store.
    pub fn new(store: Arc<ProjectStore>) -> Self {
        Self {
            store,
            commit: Mutex::new(()),
        }
    }

    /// The store this engine commits to.
    pub fn store(&self) -> &Arc<ProjectStore> {
        &self.store
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> Arc<Project> {
        self.store.get()
    }

    /// Runs one serialized read-compute-commit cycle.
    ///
    /// `op` edits a private clone of the current tree; on success the clone
    /// replaces the snapshot with `updatedAt` bumped (never backwards), on
    /// error nothing is replaced.
    fn commit<T, F>(&self, op: F) -> ForgeResult<T>
    where
        F: FnOnce(&mut Project) -> ForgeResult<T>,
    {
        let _guard = self.commit.lock().expect("engine commit lock poisoned");
        let current = self.store.get();
        let mut next = (*current).clone();
        let value = op(&mut next)?;
        next.updated_at = Utc::now().max(next.updated_at);
        self.store.replace(next);
        Ok(value)
    }

    // =========================================================================
    // ACT OPERATIONS
    // =========================================================================

    /// Appends a new act and returns it.
    ///
    /// Without a title the act is numbered after the current count, so a
    /// project with two acts gains "Act 3".
    pub fn add_act(&self, title: Option<&str>) -> ForgeResult<Act> {
        self.commit(|project| {
            let title = match title {
                Some(title) => title.to_string(),
                None => format!("Act {}", project.acts.len() + 1),
            };
            let act = Act::new(ident::generate(), title);
            project.acts.push(act.clone());
            Ok(act)
        })
    }

    /// Replaces an act's title.
    pub fn update_act_title(&self, act_id: &str, title: &str) -> ForgeResult<()> {
        self.commit(|project| {
            let act = project
                .act_mut(act_id)
                .ok_or_else(|| ForgeError::act_not_found(act_id))?;
            act.title = title.to_string();
            Ok(())
        })
    }

    /// Removes an act.
    ///
    /// Rejected when it is the only remaining act: a project never reaches
    /// zero acts.
    pub fn delete_act(&self, act_id: &str) -> ForgeResult<()> {
        self.commit(|project| {
            let position = project
                .act_index(act_id)
                .ok_or_else(|| ForgeError::act_not_found(act_id))?;
            if project.acts.len() == 1 {
                return Err(ForgeError::last_act(act_id));
            }
            project.acts.remove(position);
            Ok(())
        })
    }

    // =========================================================================
    // SCENE OPERATIONS
    // =========================================================================

    /// Appends a new default-valued scene to an act and returns it.
    pub fn add_sub_scene(&self, act_id: &str) -> ForgeResult<SubScene> {
        self.commit(|project| {
            let act = project
                .act_mut(act_id)
                .ok_or_else(|| ForgeError::act_not_found(act_id))?;
            let scene = SubScene::new(ident::generate());
            act.sub_scenes.push(scene.clone());
            Ok(scene)
        })
    }

    /// Merges a patch into a scene, preserving unspecified fields.
    ///
    /// A patch that would leave the scene with more storyboard images than
    /// the limit allows is rejected whole.
    pub fn update_sub_scene(
        &self,
        act_id: &str,
        scene_id: &str,
        patch: ScenePatch,
    ) -> ForgeResult<()> {
        self.commit(|project| {
            let act = project
                .act_mut(act_id)
                .ok_or_else(|| ForgeError::act_not_found(act_id))?;
            let scene = act
                .scene_mut(scene_id)
                .ok_or_else(|| ForgeError::scene_not_found(scene_id))?;
            if let Some(images) = &patch.storyboard_images {
                if images.len() > STORYBOARD_IMAGE_LIMIT {
                    return Err(ForgeError::storyboard_full(
                        scene_id,
                        images.len(),
                        STORYBOARD_IMAGE_LIMIT,
                    ));
                }
            }
            patch.apply_to(scene);
            Ok(())
        })
    }

    /// Removes a scene from an act.
    pub fn delete_sub_scene(&self, act_id: &str, scene_id: &str) -> ForgeResult<()> {
        self.commit(|project| {
            let act = project
                .act_mut(act_id)
                .ok_or_else(|| ForgeError::act_not_found(act_id))?;
            let position = act
                .scene_index(scene_id)
                .ok_or_else(|| ForgeError::scene_not_found(scene_id))?;
            act.sub_scenes.remove(position);
            Ok(())
        })
    }

    /// Moves one scene, all fields intact, from a source position to a
    /// destination position.
    ///
    /// Same act and same index is a no-op: the snapshot is left alone,
    /// timestamps included, and subscribers see nothing. The source index
    /// must address an existing scene; the destination index is clamped to
    /// the destination act's length, so passing its length appends.
    pub fn reorder_sub_scene(
        &self,
        src_act_id: &str,
        src_index: usize,
        dst_act_id: &str,
        dst_index: usize,
    ) -> ForgeResult<()> {
        if src_act_id == dst_act_id && src_index == dst_index {
            return Ok(());
        }
        self.commit(|project| {
            let src_pos = project
                .act_index(src_act_id)
                .ok_or_else(|| ForgeError::act_not_found(src_act_id))?;
            let dst_pos = project
                .act_index(dst_act_id)
                .ok_or_else(|| ForgeError::act_not_found(dst_act_id))?;

            let src_len = project.acts[src_pos].sub_scenes.len();
            if src_index >= src_len {
                return Err(ForgeError::index_out_of_bounds(src_index, src_len));
            }

            if src_pos == dst_pos {
                // dst_index addresses the post-removal list, so the act's
                // original length lands the scene at the end.
                let scenes = &mut project.acts[src_pos].sub_scenes;
                let moved = scenes.remove(src_index);
                let at = dst_index.min(scenes.len());
                scenes.insert(at, moved);
            } else {
                let moved = project.acts[src_pos].sub_scenes.remove(src_index);
                let scenes = &mut project.acts[dst_pos].sub_scenes;
                let at = dst_index.min(scenes.len());
                scenes.insert(at, moved);
            }
            Ok(())
        })
    }

    // =========================================================================
    // PROJECT METADATA
    // =========================================================================

    /// Merges a patch into the project's own title and description.
    pub fn update_project_details(&self, patch: ProjectPatch) -> ForgeResult<()> {
        self.commit(|project| {
            patch.apply_to(project);
            Ok(())
        })
    }

    // =========================================================================
    // LOOKUPS
    // =========================================================================

    /// Looks up an act in the current snapshot.
    pub fn find_act(&self, act_id: &str) -> Option<Act> {
        self.snapshot().find_act(act_id).cloned()
    }

    /// Looks up a scene in the current snapshot.
    pub fn find_scene(&self, act_id: &str, scene_id: &str) -> Option<SubScene> {
        self.snapshot()
            .find_act(act_id)
            .and_then(|act| act.find_scene(scene_id))
            .cloned()
    }

    /// Total scene count in the current snapshot.
    pub fn total_scenes(&self) -> usize {
        self.snapshot().total_scenes()
    }
}

// =============================================================================
// TESTS
// =============================================================================
