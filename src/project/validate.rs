//! Advisory validation over project trees.
//!
//! Checks return human-readable violation messages for callers to surface;
//! they never block the mutation engine, which enforces only structural
//! invariants.

use crate::project::model::{Project, SubScene};

/// Checks project-level completeness. Empty result means valid.
pub fn validate_project(project: &Project) -> Vec<String> {
    let mut violations = Vec::new();
    if project.title.trim().is_empty() {
        violations.push("Project title is required".to_string());
    }
    if project.acts.is_empty() {
        violations.push("Project must have at least one act".to_string());
    }
    violations
}

/// Checks scene-level completeness. Empty result means valid.
pub fn validate_scene(scene: &SubScene) -> Vec<String> {
    let mut violations = Vec::new();
    if scene.title.trim().is_empty() {
        violations.push("Scene title is required".to_string());
    }
    if scene.summary.trim().is_empty() {
        violations.push("Scene summary is required".to_string());
    }
    violations
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project_is_valid() {
        let project = Project::new("p1");
        assert!(validate_project(&project).is_empty());
    }

    #[test]
    fn test_blank_title_is_flagged() {
        let mut project = Project::new("p1");
        project.title = "   ".to_string();

        let violations = validate_project(&project);
        assert_eq!(violations, vec!["Project title is required".to_string()]);
    }

    #[test]
    fn test_actless_project_is_flagged() {
        let mut project = Project::new("p1");
        project.acts.clear();

        let violations = validate_project(&project);
        assert_eq!(
            violations,
            vec!["Project must have at least one act".to_string()]
        );
    }

    #[test]
    fn test_project_violations_accumulate() {
        let mut project = Project::new("p1");
        project.title = String::new();
        project.acts.clear();

        assert_eq!(validate_project(&project).len(), 2);
    }

    #[test]
    fn test_default_scene_is_incomplete() {
        let scene = SubScene::new("s1");
        let violations = validate_scene(&scene);
        assert_eq!(
            violations,
            vec![
                "Scene title is required".to_string(),
                "Scene summary is required".to_string(),
            ]
        );
    }

    #[test]
    fn test_filled_scene_is_valid() {
        let scene = SubScene::new("s1")
            .with_title("Opening")
            .with_summary("Dawn over the bay");
        assert!(validate_scene(&scene).is_empty());
    }

    #[test]
    fn test_whitespace_summary_is_flagged() {
        let scene = SubScene::new("s1").with_title("Opening").with_summary("\t\n");
        assert_eq!(
            validate_scene(&scene),
            vec!["Scene summary is required".to_string()]
        );
    }
}
