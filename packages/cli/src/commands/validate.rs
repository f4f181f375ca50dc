use crate::config::Config;
use anyhow::{bail, Context, Result};
use blueprint_validator::{validate_json, Issue};
use clap::{Args, ValueEnum};
use colored::Colorize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document to validate (defaults to the configured document)
    pub path: Option<PathBuf>,

    /// How to report issues
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

/// Parse and collect every issue in a document file
pub fn collect_file_issues(path: &Path) -> Result<Vec<Issue>> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let value: Value = serde_json::from_str(&source)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;

    let mut issues = Vec::new();
    validate_json(value, &mut |issue| issues.push(issue));
    Ok(issues)
}

pub fn validate(args: ValidateArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.path.as_deref());
    let issues = collect_file_issues(&path)?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&issues)?),
        OutputFormat::Text => print_text(&path, &issues),
    }

    if !issues.is_empty() {
        bail!("{} issue(s) found in {}", issues.len(), path.display());
    }
    Ok(())
}

fn print_text(path: &Path, issues: &[Issue]) {
    if issues.is_empty() {
        println!("{} {} is valid", "✓".green(), path.display());
        return;
    }

    println!("{}", path.display().to_string().bright_white().bold());
    for issue in issues {
        println!(
            "  {} {}: {}",
            "✗".red(),
            issue.node_id.yellow(),
            issue.reason
        );
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_model::Snapshot;

    #[test]
    fn test_skeleton_file_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, Snapshot::skeleton().to_json_pretty().unwrap()).unwrap();

        assert!(collect_file_issues(&path).unwrap().is_empty());
        validate(
            ValidateArgs {
                path: Some(PathBuf::from("doc.json")),
                format: OutputFormat::Text,
            },
            dir.path(),
        )
        .unwrap();
    }

    #[test]
    fn test_issues_fail_the_command() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(
            &path,
            r#"{ "root": { "id": "p", "type": "page", "children": [
                { "id": "h", "type": "heading", "data": {} }
            ] } }"#,
        )
        .unwrap();

        let issues = collect_file_issues(&path).unwrap();
        assert!(issues.iter().all(|issue| issue.node_id == "h"));
        assert!(!issues.is_empty());

        let err = validate(
            ValidateArgs {
                path: Some(PathBuf::from("doc.json")),
                format: OutputFormat::Json,
            },
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("issue(s) found"));
    }

    #[test]
    fn test_missing_root_is_an_issue() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{}").unwrap();

        let issues = collect_file_issues(&path).unwrap();
        assert_eq!(issues, vec![Issue::new("snapshot", "Snapshot missing root")]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(collect_file_issues(&path).is_err());
    }
}
