use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use rundown_diff::{diff_playlists_with, DiffConfig, PlaylistChange, PlaylistDiff};
use rundown_ingest::{build_rundown, load_stories_from_path};
use rundown_types::{ResolvedPlaylist, RundownId};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let output = match cli.command {
        Command::Diff(args) => cmd_diff(args, &cli.format)?,
        Command::Ingest(args) => cmd_ingest(args)?,
        Command::Config(args) => cmd_config(args, &cli.format)?,
    };
    println!("{output}");
    Ok(())
}

fn cmd_diff(args: DiffArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let mut config = load_config(args.config.as_deref())?;
    if args.detect_content_changes {
        config.detect_content_changes = true;
    }

    let previous = load_playlist(&args.previous)?;
    let current = load_playlist(&args.current)?;
    tracing::info!(
        previous = previous.len(),
        current = current.len(),
        "diffing playlists"
    );

    let diff = diff_playlists_with(&current, &previous, &config);
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&diff)?),
        OutputFormat::Text => Ok(render_text(&diff)),
    }
}

fn cmd_ingest(args: IngestArgs) -> anyhow::Result<String> {
    let rundown_id = RundownId::parse(&args.rundown)?;
    let stories = load_stories_from_path(&args.stories)
        .with_context(|| format!("reading stories from {}", args.stories.display()))?;
    let rundown = build_rundown(rundown_id, &stories);
    Ok(serde_json::to_string_pretty(&rundown)?)
}

fn cmd_config(args: ConfigArgs, format: &OutputFormat) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&config)?),
        OutputFormat::Text => Ok(config.to_toml_string()?),
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<DiffConfig> {
    match path {
        Some(path) => DiffConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display())),
        None => Ok(DiffConfig::default()),
    }
}

fn load_playlist(path: &Path) -> anyhow::Result<ResolvedPlaylist> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading playlist {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing playlist {}", path.display()))
}

fn render_text(diff: &PlaylistDiff) -> String {
    if diff.is_empty() {
        return format!("{} No changes.", "✓".green());
    }

    let mut lines: Vec<String> = diff.changes.iter().map(render_change).collect();
    lines.push(String::new());
    lines.push(diff.summary().to_string().bold().to_string());
    lines.join("\n")
}

fn render_change(change: &PlaylistChange) -> String {
    let target = match change.segment_id() {
        Some(segment) => format!("{}/{}", change.rundown_id(), segment),
        None => change.rundown_id().to_string(),
    };
    let marker = match change {
        PlaylistChange::RundownCreated { .. } | PlaylistChange::SegmentCreated { .. } => "+".green(),
        PlaylistChange::RundownDeleted { .. } | PlaylistChange::SegmentDeleted { .. } => "-".red(),
        PlaylistChange::SegmentMoved { .. } => "↕".yellow(),
        PlaylistChange::SegmentChanged { .. } => "~".cyan(),
    };
    format!("  {} {:<16} {}", marker, change.kind().label(), target)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn segment_json(rundown: &str, id: &str, rank: usize) -> String {
        format!(
            r#"{{"rundown_id":"{rundown}","id":"{id}","rank":{rank},"name":"{id}","modified":"1"}}"#
        )
    }

    fn playlist_json(rundown: &str, segments: &[&str]) -> String {
        let segments: Vec<String> = segments
            .iter()
            .enumerate()
            .map(|(rank, id)| segment_json(rundown, id, rank))
            .collect();
        format!(r#"[{{"id":"{rundown}","segments":[{}]}}]"#, segments.join(","))
    }

    fn diff_args(previous: &Path, current: &Path) -> DiffArgs {
        DiffArgs {
            previous: previous.to_path_buf(),
            current: current.to_path_buf(),
            config: None,
            detect_content_changes: false,
        }
    }

    #[test]
    fn diff_text_output_lists_changes() {
        colored::control::set_override(false);
        let previous = write_temp(&playlist_json("R1", &["A", "B", "C", "D"]));
        let current = write_temp(&playlist_json("R1", &["A", "C", "B", "D", "E"]));

        let out = cmd_diff(diff_args(previous.path(), current.path()), &OutputFormat::Text).unwrap();
        assert!(out.contains("segment moved"));
        assert!(out.contains("R1/C"));
        assert!(out.contains("R1/E"));
        assert!(!out.contains("R1/B"));
    }

    #[test]
    fn diff_json_output_parses() {
        let previous = write_temp(&playlist_json("R1", &["A"]));
        let current = write_temp("[]");

        let out = cmd_diff(diff_args(previous.path(), current.path()), &OutputFormat::Json).unwrap();
        let diff: PlaylistDiff = serde_json::from_str(&out).unwrap();
        assert_eq!(diff.changes, vec![PlaylistChange::RundownDeleted { rundown_id: "R1".into() }]);
    }

    #[test]
    fn identical_snapshots_render_no_changes() {
        colored::control::set_override(false);
        let snapshot = write_temp(&playlist_json("R1", &["A", "B"]));
        let out = cmd_diff(diff_args(snapshot.path(), snapshot.path()), &OutputFormat::Text).unwrap();
        assert!(out.contains("No changes."));
    }

    #[test]
    fn missing_playlist_reports_path() {
        let present = write_temp("[]");
        let err = cmd_diff(
            diff_args(present.path(), Path::new("/nonexistent/current.json")),
            &OutputFormat::Text,
        )
        .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/current.json"));
    }

    #[test]
    fn config_file_enables_content_detection() {
        let previous = write_temp(&playlist_json("R1", &["A"]));
        let current = write_temp(&playlist_json("R1", &["A"]).replace("\"modified\":\"1\"", "\"modified\":\"2\""));
        let config = write_temp("detect_content_changes = true\n");

        let mut args = diff_args(previous.path(), current.path());
        args.config = Some(config.path().to_path_buf());
        let out = cmd_diff(args, &OutputFormat::Json).unwrap();
        let diff: PlaylistDiff = serde_json::from_str(&out).unwrap();
        assert_eq!(diff.changes.len(), 1);
        assert!(matches!(diff.changes[0], PlaylistChange::SegmentChanged { .. }));
    }

    #[test]
    fn ingest_assigns_ranks() {
        let stories = write_temp(r#"[{"id":"s-2","storyName":"Two"},{"id":"s-1","storyName":"One"}]"#);
        let out = cmd_ingest(IngestArgs {
            stories: stories.path().to_path_buf(),
            rundown: "SHOW".into(),
        })
        .unwrap();
        let rundown: rundown_types::Rundown = serde_json::from_str(&out).unwrap();
        assert_eq!(rundown.segments[1].id.as_str(), "s-1");
        assert_eq!(rundown.segments[1].rank, 1);
    }

    #[test]
    fn ingest_rejects_empty_rundown_id() {
        let stories = write_temp("[]");
        let result = cmd_ingest(IngestArgs {
            stories: stories.path().to_path_buf(),
            rundown: String::new(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn config_renders_defaults_as_toml() {
        let out = cmd_config(ConfigArgs { config: None }, &OutputFormat::Text).unwrap();
        assert!(out.contains("detect_content_changes = false"));
        assert!(out.contains("report_duplicates = true"));
    }
}
