//! Data models for the authoring engine.
//!
//! A project is an immutable value tree: every mutation produces a whole new
//! `Project`, so snapshots handed out earlier stay valid forever. The serde
//! shape is the camelCase document layout persisted workspaces are stored in.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Title given to a project nobody has named yet.
pub const DEFAULT_PROJECT_TITLE: &str = "New SceneForge Project";

/// Title of the act a fresh project starts with.
pub const FIRST_ACT_TITLE: &str = "Act 1";

// =============================================================================
// CAMERA ENUMS
// =============================================================================

/// Camera shot selection for a scene.
///
/// Serialized as the display label so persisted documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraShot {
    #[serde(rename = "Wide Shot")]
    WideShot,
    #[serde(rename = "Medium Shot")]
    MediumShot,
    #[serde(rename = "Close-up")]
    CloseUp,
    #[serde(rename = "Extreme Close-up")]
    ExtremeCloseUp,
    #[serde(rename = "Over-the-shoulder")]
    OverTheShoulder,
    #[serde(rename = "Point of View")]
    PointOfView,
    #[serde(rename = "Bird's Eye")]
    BirdsEye,
    #[serde(rename = "Low Angle")]
    LowAngle,
    #[serde(rename = "High Angle")]
    HighAngle,
    #[serde(rename = "Dutch Angle")]
    DutchAngle,
    #[serde(rename = "Two Shot")]
    TwoShot,
    #[serde(rename = "Insert Shot")]
    InsertShot,
}

impl CameraShot {
    /// Every selectable shot, in display order.
    pub const ALL: [CameraShot; 12] = [
        Self::WideShot,
        Self::MediumShot,
        Self::CloseUp,
        Self::ExtremeCloseUp,
        Self::OverTheShoulder,
        Self::PointOfView,
        Self::BirdsEye,
        Self::LowAngle,
        Self::HighAngle,
        Self::DutchAngle,
        Self::TwoShot,
        Self::InsertShot,
    ];

    /// The display label, identical to the persisted string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::WideShot => "Wide Shot",
            Self::MediumShot => "Medium Shot",
            Self::CloseUp => "Close-up",
            Self::ExtremeCloseUp => "Extreme Close-up",
            Self::OverTheShoulder => "Over-the-shoulder",
            Self::PointOfView => "Point of View",
            Self::BirdsEye => "Bird's Eye",
            Self::LowAngle => "Low Angle",
            Self::HighAngle => "High Angle",
            Self::DutchAngle => "Dutch Angle",
            Self::TwoShot => "Two Shot",
            Self::InsertShot => "Insert Shot",
        }
    }
}

impl fmt::Display for CameraShot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Camera movement selection for a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CameraMovement {
    Static,
    #[serde(rename = "Pan Left")]
    PanLeft,
    #[serde(rename = "Pan Right")]
    PanRight,
    #[serde(rename = "Tilt Up")]
    TiltUp,
    #[serde(rename = "Tilt Down")]
    TiltDown,
    #[serde(rename = "Zoom In")]
    ZoomIn,
    #[serde(rename = "Zoom Out")]
    ZoomOut,
    #[serde(rename = "Dolly In")]
    DollyIn,
    #[serde(rename = "Dolly Out")]
    DollyOut,
    #[serde(rename = "Tracking Shot")]
    TrackingShot,
    #[serde(rename = "Crane Shot")]
    CraneShot,
    Handheld,
    Steadicam,
}

impl CameraMovement {
    /// Every selectable movement, in display order.
    pub const ALL: [CameraMovement; 13] = [
        Self::Static,
        Self::PanLeft,
        Self::PanRight,
        Self::TiltUp,
        Self::TiltDown,
        Self::ZoomIn,
        Self::ZoomOut,
        Self::DollyIn,
        Self::DollyOut,
        Self::TrackingShot,
        Self::CraneShot,
        Self::Handheld,
        Self::Steadicam,
    ];

    /// The display label, identical to the persisted string.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Static => "Static",
            Self::PanLeft => "Pan Left",
            Self::PanRight => "Pan Right",
            Self::TiltUp => "Tilt Up",
            Self::TiltDown => "Tilt Down",
            Self::ZoomIn => "Zoom In",
            Self::ZoomOut => "Zoom Out",
            Self::DollyIn => "Dolly In",
            Self::DollyOut => "Dolly Out",
            Self::TrackingShot => "Tracking Shot",
            Self::CraneShot => "Crane Shot",
            Self::Handheld => "Handheld",
            Self::Steadicam => "Steadicam",
        }
    }
}

impl fmt::Display for CameraMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Serde adapter for the camera fields: documents written by earlier versions
/// store an unset value as `""`, so both `""` and a missing key deserialize
/// to `None`, and `None` serializes back to `""`.
mod camera_serde {
    use serde::de::DeserializeOwned;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw<T> {
        Value(T),
        Text(String),
    }

    pub(super) fn serialize<S, T>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        match value {
            Some(v) => v.serialize(serializer),
            None => serializer.serialize_str(""),
        }
    }

    pub(super) fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Option::<Raw<T>>::deserialize(deserializer)? {
            None => Ok(None),
            Some(Raw::Value(v)) => Ok(Some(v)),
            Some(Raw::Text(text)) if text.is_empty() => Ok(None),
            Some(Raw::Text(text)) => Err(serde::de::Error::custom(format!(
                "unknown camera value: {text}"
            ))),
        }
    }
}

// =============================================================================
// RELATED ASSET
// =============================================================================

/// A named external link attached to a scene.
///
/// Assets carry no identity of their own; their order within the owning
/// scene matters only for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RelatedAsset {
    pub name: String,
    pub url: String,
}

impl RelatedAsset {
    /// Creates a new asset link.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

// =============================================================================
// SUB SCENE
// =============================================================================

/// Leaf creative unit holding narrative, camera, audio, prompt, and
/// media-reference fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct SubScene {
    /// Unique across the whole project, not just within the owning act.
    pub id: String,
    pub title: String,
    pub summary: String,
    pub dialogue: String,
    pub narration: String,

    #[serde(
        serialize_with = "camera_serde::serialize",
        deserialize_with = "camera_serde::deserialize"
    )]
    pub camera_shot: Option<CameraShot>,
    #[serde(
        serialize_with = "camera_serde::serialize",
        deserialize_with = "camera_serde::deserialize"
    )]
    pub camera_movement: Option<CameraMovement>,

    pub music: String,
    pub sound_notes: String,

    /// Generation prompt for image tooling.
    pub mid_journey_prompt: String,
    /// Generation prompt for video tooling.
    pub runway_prompt: String,

    pub writers_notes: String,

    /// Already-encoded thumbnail reference (data URI or storage handle).
    pub thumbnail_image: Option<String>,
    /// Already-encoded video-clip reference.
    pub video_clip: Option<String>,
    /// Storyboard image references, at most five.
    pub storyboard_images: Vec<String>,
    pub related_assets: Vec<RelatedAsset>,
}

impl SubScene {
    /// Creates a new scene with the given id and every field at its default.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: Set summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Builder: Set dialogue.
    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.dialogue = dialogue.into();
        self
    }

    /// Builder: Set narration.
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = narration.into();
        self
    }

    /// Builder: Set thumbnail reference.
    pub fn with_thumbnail(mut self, reference: impl Into<String>) -> Self {
        self.thumbnail_image = Some(reference.into());
        self
    }

    /// Builder: Set camera shot.
    pub fn with_camera_shot(mut self, shot: CameraShot) -> Self {
        self.camera_shot = Some(shot);
        self
    }

    /// Builder: Set camera movement.
    pub fn with_camera_movement(mut self, movement: CameraMovement) -> Self {
        self.camera_movement = Some(movement);
        self
    }

    /// Builder: Append a related asset link.
    pub fn with_asset(mut self, asset: RelatedAsset) -> Self {
        self.related_assets.push(asset);
        self
    }
}

// =============================================================================
// ACT
// =============================================================================

/// Ordered container of scenes within a project.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Act {
    /// Unique within the owning project.
    pub id: String,
    pub title: String,
    pub sub_scenes: Vec<SubScene>,
}

impl Act {
    /// Creates a new act with no scenes.
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            sub_scenes: Vec::new(),
        }
    }

    /// Builder: Append a scene.
    pub fn with_scene(mut self, scene: SubScene) -> Self {
        self.sub_scenes.push(scene);
        self
    }

    /// Position of a scene by id.
    pub fn scene_index(&self, scene_id: &str) -> Option<usize> {
        self.sub_scenes.iter().position(|s| s.id == scene_id)
    }

    /// Looks up a scene by id.
    pub fn find_scene(&self, scene_id: &str) -> Option<&SubScene> {
        self.sub_scenes.iter().find(|s| s.id == scene_id)
    }

    /// Mutable scene lookup by id.
    pub fn scene_mut(&mut self, scene_id: &str) -> Option<&mut SubScene> {
        self.sub_scenes.iter_mut().find(|s| s.id == scene_id)
    }
}

// =============================================================================
// PROJECT
// =============================================================================

/// Root document: ordered acts plus workspace metadata.
///
/// Holds at least one act at all times once created through [`Project::new`];
/// the mutation engine preserves that invariant from then on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub acts: Vec<Act>,
    pub created_at: DateTime<Utc>,
    /// Never moves backwards; bumped on every committed mutation.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates the default project a fresh workspace opens with: the default
    /// title and one empty act titled "Act 1".
    pub fn new(id: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: DEFAULT_PROJECT_TITLE.to_string(),
            description: String::new(),
            acts: vec![Act::new(crate::ident::generate(), FIRST_ACT_TITLE)],
            created_at: now,
            updated_at: now,
        }
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Position of an act by id.
    pub fn act_index(&self, act_id: &str) -> Option<usize> {
        self.acts.iter().position(|a| a.id == act_id)
    }

    /// Looks up an act by id.
    pub fn find_act(&self, act_id: &str) -> Option<&Act> {
        self.acts.iter().find(|a| a.id == act_id)
    }

    /// Mutable act lookup by id.
    pub fn act_mut(&mut self, act_id: &str) -> Option<&mut Act> {
        self.acts.iter_mut().find(|a| a.id == act_id)
    }

    /// Total scene count across every act.
    pub fn total_scenes(&self) -> usize {
        self.acts.iter().map(|a| a.sub_scenes.len()).sum()
    }
}

// =============================================================================
// PATCHES
// =============================================================================

/// Field-by-field update for a scene. `None` leaves a field unchanged; the
/// nested options clear their field when set to `Some(None)`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenePatch {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub dialogue: Option<String>,
    pub narration: Option<String>,
    pub camera_shot: Option<Option<CameraShot>>,
    pub camera_movement: Option<Option<CameraMovement>>,
    pub music: Option<String>,
    pub sound_notes: Option<String>,
    pub mid_journey_prompt: Option<String>,
    pub runway_prompt: Option<String>,
    pub writers_notes: Option<String>,
    pub thumbnail_image: Option<Option<String>>,
    pub video_clip: Option<Option<String>>,
    pub storyboard_images: Option<Vec<String>>,
    pub related_assets: Option<Vec<RelatedAsset>>,
}

impl ScenePatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: Set summary.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Builder: Set dialogue.
    pub fn with_dialogue(mut self, dialogue: impl Into<String>) -> Self {
        self.dialogue = Some(dialogue.into());
        self
    }

    /// Builder: Set narration.
    pub fn with_narration(mut self, narration: impl Into<String>) -> Self {
        self.narration = Some(narration.into());
        self
    }

    /// Builder: Set or clear the camera shot.
    pub fn with_camera_shot(mut self, shot: Option<CameraShot>) -> Self {
        self.camera_shot = Some(shot);
        self
    }

    /// Builder: Set or clear the camera movement.
    pub fn with_camera_movement(mut self, movement: Option<CameraMovement>) -> Self {
        self.camera_movement = Some(movement);
        self
    }

    /// Builder: Set music.
    pub fn with_music(mut self, music: impl Into<String>) -> Self {
        self.music = Some(music.into());
        self
    }

    /// Builder: Set sound notes.
    pub fn with_sound_notes(mut self, notes: impl Into<String>) -> Self {
        self.sound_notes = Some(notes.into());
        self
    }

    /// Builder: Set the image generation prompt.
    pub fn with_mid_journey_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.mid_journey_prompt = Some(prompt.into());
        self
    }

    /// Builder: Set the video generation prompt.
    pub fn with_runway_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.runway_prompt = Some(prompt.into());
        self
    }

    /// Builder: Set writer's notes.
    pub fn with_writers_notes(mut self, notes: impl Into<String>) -> Self {
        self.writers_notes = Some(notes.into());
        self
    }

    /// Builder: Set or clear the thumbnail reference.
    pub fn with_thumbnail_image(mut self, reference: Option<String>) -> Self {
        self.thumbnail_image = Some(reference);
        self
    }

    /// Builder: Set or clear the video-clip reference.
    pub fn with_video_clip(mut self, reference: Option<String>) -> Self {
        self.video_clip = Some(reference);
        self
    }

    /// Builder: Replace the storyboard image list.
    pub fn with_storyboard_images(mut self, images: Vec<String>) -> Self {
        self.storyboard_images = Some(images);
        self
    }

    /// Builder: Replace the related-asset list.
    pub fn with_related_assets(mut self, assets: Vec<RelatedAsset>) -> Self {
        self.related_assets = Some(assets);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the patch into a scene, leaving unset fields untouched.
    pub fn apply_to(self, scene: &mut SubScene) {
        if let Some(title) = self.title {
            scene.title = title;
        }
        if let Some(summary) = self.summary {
            scene.summary = summary;
        }
        if let Some(dialogue) = self.dialogue {
            scene.dialogue = dialogue;
        }
        if let Some(narration) = self.narration {
            scene.narration = narration;
        }
        if let Some(shot) = self.camera_shot {
            scene.camera_shot = shot;
        }
        if let Some(movement) = self.camera_movement {
            scene.camera_movement = movement;
        }
        if let Some(music) = self.music {
            scene.music = music;
        }
        if let Some(notes) = self.sound_notes {
            scene.sound_notes = notes;
        }
        if let Some(prompt) = self.mid_journey_prompt {
            scene.mid_journey_prompt = prompt;
        }
        if let Some(prompt) = self.runway_prompt {
            scene.runway_prompt = prompt;
        }
        if let Some(notes) = self.writers_notes {
            scene.writers_notes = notes;
        }
        if let Some(reference) = self.thumbnail_image {
            scene.thumbnail_image = reference;
        }
        if let Some(reference) = self.video_clip {
            scene.video_clip = reference;
        }
        if let Some(images) = self.storyboard_images {
            scene.storyboard_images = images;
        }
        if let Some(assets) = self.related_assets {
            scene.related_assets = assets;
        }
    }
}

/// Patch for the project's own metadata fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl ProjectPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: Set title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Builder: Set description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }

    /// Merges the patch into a project, leaving unset fields untouched.
    pub fn apply_to(self, project: &mut Project) {
        if let Some(title) = self.title {
            project.title = title;
        }
        if let Some(description) = self.description {
            project.description = description;
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_sub_scene_defaults() {
        let scene = SubScene::new("scene-1");
        assert_eq!(scene.id, "scene-1");
        assert!(scene.title.is_empty());
        assert!(scene.summary.is_empty());
        assert!(scene.camera_shot.is_none());
        assert!(scene.camera_movement.is_none());
        assert!(scene.thumbnail_image.is_none());
        assert!(scene.video_clip.is_none());
        assert!(scene.storyboard_images.is_empty());
        assert!(scene.related_assets.is_empty());
    }

    #[test]
    fn test_project_new_is_workspace_default() {
        let project = Project::new("proj-1");
        assert_eq!(project.title, DEFAULT_PROJECT_TITLE);
        assert!(project.description.is_empty());
        assert_eq!(project.acts.len(), 1);
        assert_eq!(project.acts[0].title, FIRST_ACT_TITLE);
        assert!(project.acts[0].sub_scenes.is_empty());
        assert_eq!(project.created_at, project.updated_at);
    }

    #[test]
    fn test_scene_builder() {
        let scene = SubScene::new("s-1")
            .with_title("Opening")
            .with_summary("The town wakes up")
            .with_camera_shot(CameraShot::WideShot)
            .with_asset(RelatedAsset::new("Moodboard", "https://example.com/mood"));

        assert_eq!(scene.title, "Opening");
        assert_eq!(scene.camera_shot, Some(CameraShot::WideShot));
        assert_eq!(scene.related_assets.len(), 1);
        assert_eq!(scene.related_assets[0].name, "Moodboard");
    }

    #[test]
    fn test_camera_labels_match_serde() {
        for shot in CameraShot::ALL {
            let json = serde_json::to_string(&shot).unwrap();
            assert_eq!(json, format!("\"{}\"", shot.label()));
        }
        for movement in CameraMovement::ALL {
            let json = serde_json::to_string(&movement).unwrap();
            assert_eq!(json, format!("\"{}\"", movement.label()));
        }
    }

    #[test]
    fn test_persisted_shape_uses_camel_case() {
        let scene = SubScene::new("s-1").with_camera_shot(CameraShot::CloseUp);
        let act = Act::new("a-1", "Act 1").with_scene(scene);
        let mut project = Project::new("p-1");
        project.acts = vec![act];

        let value: Value = serde_json::to_value(&project).unwrap();
        assert!(value.get("createdAt").is_some());
        assert!(value.get("updatedAt").is_some());

        let scene = &value["acts"][0]["subScenes"][0];
        assert_eq!(scene["cameraShot"], "Close-up");
        assert_eq!(scene["cameraMovement"], "");
        assert!(scene.get("soundNotes").is_some());
        assert!(scene.get("midJourneyPrompt").is_some());
        assert!(scene.get("runwayPrompt").is_some());
        assert!(scene.get("writersNotes").is_some());
        assert_eq!(scene["thumbnailImage"], Value::Null);
        assert_eq!(scene["videoClip"], Value::Null);
        assert!(scene.get("storyboardImages").is_some());
        assert!(scene.get("relatedAssets").is_some());
    }

    #[test]
    fn test_camera_empty_string_deserializes_to_none() {
        let scene: SubScene = serde_json::from_value(json!({
            "id": "s-1",
            "cameraShot": "",
            "cameraMovement": "Pan Left",
        }))
        .unwrap();

        assert!(scene.camera_shot.is_none());
        assert_eq!(scene.camera_movement, Some(CameraMovement::PanLeft));
    }

    #[test]
    fn test_camera_missing_key_deserializes_to_none() {
        let scene: SubScene = serde_json::from_value(json!({ "id": "s-1" })).unwrap();
        assert!(scene.camera_shot.is_none());
        assert!(scene.camera_movement.is_none());
    }

    #[test]
    fn test_camera_unknown_value_is_rejected() {
        let result: Result<SubScene, _> = serde_json::from_value(json!({
            "id": "s-1",
            "cameraShot": "Selfie Stick",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_scene_round_trip() {
        let scene = SubScene::new("s-1")
            .with_title("Chase")
            .with_dialogue("Go, go, go!")
            .with_camera_movement(CameraMovement::TrackingShot)
            .with_thumbnail("data:image/png;base64,AAA=");

        let json = serde_json::to_string(&scene).unwrap();
        let back: SubScene = serde_json::from_str(&json).unwrap();
        assert_eq!(scene, back);
    }

    #[test]
    fn test_scene_patch_partial_apply() {
        let mut scene = SubScene::new("s-1")
            .with_title("Opening")
            .with_summary("A quiet morning")
            .with_narration("The sun rises");
        let before = scene.clone();

        ScenePatch::new().with_dialogue("Hi").apply_to(&mut scene);

        assert_eq!(scene.dialogue, "Hi");
        assert_eq!(scene.title, before.title);
        assert_eq!(scene.summary, before.summary);
        assert_eq!(scene.narration, before.narration);
        assert_eq!(scene.camera_shot, before.camera_shot);
        assert_eq!(scene.storyboard_images, before.storyboard_images);
    }

    #[test]
    fn test_scene_patch_clears_media() {
        let mut scene = SubScene::new("s-1").with_thumbnail("data:image/png;base64,AAA=");
        scene.video_clip = Some("data:video/mp4;base64,BBB=".to_string());

        ScenePatch::new()
            .with_thumbnail_image(None)
            .with_video_clip(None)
            .apply_to(&mut scene);

        assert!(scene.thumbnail_image.is_none());
        assert!(scene.video_clip.is_none());
    }

    #[test]
    fn test_scene_patch_is_empty() {
        assert!(ScenePatch::new().is_empty());
        assert!(!ScenePatch::new().with_title("x").is_empty());
    }

    #[test]
    fn test_project_patch_apply() {
        let mut project = Project::new("p-1");
        ProjectPatch::new()
            .with_title("Heist at Dawn")
            .apply_to(&mut project);

        assert_eq!(project.title, "Heist at Dawn");
        assert!(project.description.is_empty());
    }
}
