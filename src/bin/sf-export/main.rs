//! CLI tool to export a SceneForge project document as a markdown script.
//!
//! Usage:
//!   sf-export --input project.json [--output script.md] [--summary] [--check]

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use sceneforge::{
    project_summary, script_filename, script_markdown, validate_project, validate_scene, Project,
};

#[derive(Parser, Debug)]
#[command(
    name = "sf-export",
    about = "Export a SceneForge project document as a markdown script",
    version
)]
struct Args {
    /// Input project JSON file (as persisted by the workspace)
    #[arg(short, long)]
    input: PathBuf,

    /// Output markdown path (defaults to a slug of the project title)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print summary statistics after exporting
    #[arg(long, default_value = "false")]
    summary: bool,

    /// Print advisory validation findings
    #[arg(long, default_value = "false")]
    check: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 1. Validate input exists
    let input_path = &args.input;
    if !input_path.exists() {
        anyhow::bail!("Input file does not exist: {}", input_path.display());
    }

    // 2. Read and parse the project document
    let json_content =
        std::fs::read_to_string(input_path).context("Failed to read input file")?;
    let project: Project =
        serde_json::from_str(&json_content).context("Failed to parse project JSON")?;

    // 3. Render the script
    let markdown = script_markdown(&project);

    // 4. Determine output path
    let output_path = args
        .output
        .unwrap_or_else(|| input_path.with_file_name(script_filename(&project.title)));

    // 5. Write output
    std::fs::write(&output_path, &markdown).context("Failed to write markdown file")?;

    // 6. Optional validation findings
    if args.check {
        let mut findings = validate_project(&project);
        for act in &project.acts {
            for (index, scene) in act.sub_scenes.iter().enumerate() {
                for finding in validate_scene(scene) {
                    findings.push(format!("{} / Scene {}: {}", act.title, index + 1, finding));
                }
            }
        }
        if findings.is_empty() {
            println!("✓ No validation findings");
        } else {
            println!("Validation findings:");
            for finding in &findings {
                println!("  - {finding}");
            }
        }
    }

    // 7. Optional summary statistics
    if args.summary {
        let summary = project_summary(&project);
        println!();
        println!("Project summary:");
        println!("  Acts:            {:>6}", summary.total_acts);
        println!("  Scenes:          {:>6}", summary.total_scenes);
        println!("  With dialogue:   {:>6}", summary.scenes_with_dialogue);
        println!("  With narration:  {:>6}", summary.scenes_with_narration);
        println!("  With thumbnails: {:>6}", summary.scenes_with_thumbnails);
        println!("  Completion:      {:>5}%", summary.completion_percentage);
    }

    println!();
    println!(
        "Exported {} → {}",
        input_path.display(),
        output_path.display()
    );

    Ok(())
}
