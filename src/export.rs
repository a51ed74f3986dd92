//! Script export and project statistics.
//!
//! Rendering is a pure function of one snapshot: the same tree always
//! produces byte-identical markdown, so exports are reproducible and safe to
//! diff. Dates render as `YYYY-MM-DD` to keep output locale-independent.

use serde::{Deserialize, Serialize};

use crate::project::model::Project;

/// Date format used in exported documents.
const EXPORT_DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// MARKDOWN SCRIPT
// =============================================================================

/// Renders the whole project as a markdown script.
///
/// Acts become `##` headings, scenes numbered `###` headings. Empty scene
/// fields are omitted rather than rendered blank, and an act without scenes
/// gets an explicit placeholder line.
pub fn script_markdown(project: &Project) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {}\n\n", project.title));

    if !project.description.is_empty() {
        out.push_str(&format!("{}\n\n", project.description));
    }

    out.push_str("**Project Details:**\n");
    out.push_str(&format!("- Total Acts: {}\n", project.acts.len()));
    out.push_str(&format!("- Total Scenes: {}\n", project.total_scenes()));
    out.push_str(&format!(
        "- Created: {}\n",
        project.created_at.format(EXPORT_DATE_FORMAT)
    ));
    out.push_str(&format!(
        "- Last Updated: {}\n\n",
        project.updated_at.format(EXPORT_DATE_FORMAT)
    ));

    out.push_str("---\n\n");

    for act in &project.acts {
        out.push_str(&format!("## {}\n\n", act.title));

        if act.sub_scenes.is_empty() {
            out.push_str("*No scenes in this act.*\n\n");
            continue;
        }

        for (index, scene) in act.sub_scenes.iter().enumerate() {
            let title = if scene.title.is_empty() {
                "Untitled Scene"
            } else {
                &scene.title
            };
            out.push_str(&format!("### Scene {}: {}\n\n", index + 1, title));

            if !scene.summary.is_empty() {
                out.push_str(&format!("**Summary:** {}\n\n", scene.summary));
            }

            if !scene.dialogue.is_empty() {
                out.push_str("**Dialogue:**\n");
                out.push_str(&format!("{}\n\n", scene.dialogue));
            }

            if !scene.narration.is_empty() {
                out.push_str("**Narration:**\n");
                out.push_str(&format!("{}\n\n", scene.narration));
            }

            if scene.camera_shot.is_some() || scene.camera_movement.is_some() {
                out.push_str("**Camera:**\n");
                if let Some(shot) = scene.camera_shot {
                    out.push_str(&format!("- Shot: {}\n", shot.label()));
                }
                if let Some(movement) = scene.camera_movement {
                    out.push_str(&format!("- Movement: {}\n", movement.label()));
                }
                out.push('\n');
            }

            if !scene.music.is_empty() || !scene.sound_notes.is_empty() {
                out.push_str("**Audio:**\n");
                if !scene.music.is_empty() {
                    out.push_str(&format!("- Music: {}\n", scene.music));
                }
                if !scene.sound_notes.is_empty() {
                    out.push_str(&format!("- Sound Notes: {}\n", scene.sound_notes));
                }
                out.push('\n');
            }

            if !scene.mid_journey_prompt.is_empty() {
                out.push_str("**MidJourney Prompt:**\n");
                out.push_str(&format!("{}\n\n", scene.mid_journey_prompt));
            }

            if !scene.runway_prompt.is_empty() {
                out.push_str("**Runway Prompt:**\n");
                out.push_str(&format!("{}\n\n", scene.runway_prompt));
            }

            if !scene.writers_notes.is_empty() {
                out.push_str("**Writer's Notes:**\n");
                out.push_str(&format!("{}\n\n", scene.writers_notes));
            }

            if !scene.related_assets.is_empty() {
                out.push_str("**Related Assets:**\n");
                for asset in &scene.related_assets {
                    out.push_str(&format!("- [{}]({})\n", asset.name, asset.url));
                }
                out.push('\n');
            }

            out.push_str("---\n\n");
        }
    }

    out
}

/// Suggested filename for an exported script.
///
/// The title is lowered and every non-alphanumeric character becomes an
/// underscore, so the result is safe on any filesystem.
pub fn script_filename(title: &str) -> String {
    let slug: String = title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '_'
            }
        })
        .collect();
    format!("{slug}_script.md")
}

// =============================================================================
// PROJECT SUMMARY
// =============================================================================

/// Aggregate statistics over one snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub total_acts: usize,
    pub total_scenes: usize,
    pub scenes_with_dialogue: usize,
    pub scenes_with_narration: usize,
    pub scenes_with_thumbnails: usize,
    /// Share of dialogue and narration slots filled, rounded to a whole
    /// percent. A project without scenes reports 0.
    pub completion_percentage: u32,
}

/// Computes summary statistics for a project.
///
/// Dialogue and narration count only when non-blank after trimming; a
/// thumbnail counts when the reference is present and non-empty.
pub fn project_summary(project: &Project) -> ProjectSummary {
    let scenes = || project.acts.iter().flat_map(|act| act.sub_scenes.iter());

    let total_scenes = project.total_scenes();
    let scenes_with_dialogue = scenes().filter(|s| !s.dialogue.trim().is_empty()).count();
    let scenes_with_narration = scenes().filter(|s| !s.narration.trim().is_empty()).count();
    let scenes_with_thumbnails = scenes()
        .filter(|s| s.thumbnail_image.as_deref().is_some_and(|t| !t.is_empty()))
        .count();

    let completion_percentage = if total_scenes > 0 {
        let covered = (scenes_with_dialogue + scenes_with_narration) as f64;
        (covered / (total_scenes as f64 * 2.0) * 100.0).round() as u32
    } else {
        0
    };

    ProjectSummary {
        total_acts: project.acts.len(),
        total_scenes,
        scenes_with_dialogue,
        scenes_with_narration,
        scenes_with_thumbnails,
        completion_percentage,
    }
}

// =============================================================================
// TESTS
// =============================================================================
