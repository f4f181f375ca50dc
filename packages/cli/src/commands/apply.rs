use crate::config::Config;
use anyhow::{Context, Result};
use blueprint_editor::{Action, Document};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Document to edit
    pub document: PathBuf,

    /// JSON file holding an array of actions
    pub actions: PathBuf,

    /// Write the result here instead of overwriting the document
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

pub fn read_actions(path: &Path) -> Result<Vec<Action>> {
    let source =
        fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&source)
        .with_context(|| format!("{} is not a valid action list", path.display()))?;
    Ok(actions)
}

pub fn apply(args: ApplyArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let document_path = cwd.join(&args.document);
    let actions = read_actions(&cwd.join(&args.actions))?;

    let mut document = Document::load(&document_path, config.editor)
        .with_context(|| format!("Cannot load {}", document_path.display()))?;

    println!(
        "{} {} action(s) to {}",
        "Applying".bright_blue().bold(),
        actions.len(),
        document_path.display()
    );

    // All-or-nothing: nothing is written unless every action succeeds
    for (i, action) in actions.into_iter().enumerate() {
        let name = action.name();
        let version = document
            .apply(action)
            .with_context(|| format!("Action #{} ({}) failed", i + 1, name))?;
        debug!(index = i, action = name, version, "Applied action");
        println!("  {} {}", "✓".green(), name);
    }

    match args.out {
        Some(out) => {
            let out = cwd.join(out);
            document.save_as(&out)?;
        }
        None => document.save()?,
    }

    println!();
    println!(
        "{} Saved {} (version {})",
        "✅".green(),
        document.path.display(),
        document.version
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_model::{select_node_by_id, Snapshot};

    fn write_skeleton(dir: &Path) -> (PathBuf, String) {
        let snapshot = Snapshot::skeleton();
        let section = snapshot.root.children[1].id.clone();
        let path = dir.join("doc.json");
        fs::write(&path, snapshot.to_json_pretty().unwrap()).unwrap();
        (path, section)
    }

    #[test]
    fn test_apply_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let (path, section) = write_skeleton(dir.path());
        let actions = format!(
            r#"[
                {{ "type": "ADD_COMPONENT", "parentId": "{}",
                   "node": {{ "id": "intro", "type": "paragraph", "data": {{ "text": "Hello" }} }} }},
                {{ "type": "UPDATE_DATA", "nodeId": "intro", "data": {{ "text": "Welcome" }} }}
            ]"#,
            section
        );
        fs::write(dir.path().join("actions.json"), actions).unwrap();

        apply(
            ApplyArgs {
                document: PathBuf::from("doc.json"),
                actions: PathBuf::from("actions.json"),
                out: Some(PathBuf::from("out.json")),
            },
            dir.path(),
        )
        .unwrap();

        let out = Snapshot::from_json(&fs::read_to_string(dir.path().join("out.json")).unwrap())
            .unwrap();
        let intro = select_node_by_id(&out.root, "intro").unwrap();
        assert_eq!(intro.data.to_map().unwrap()["text"], "Welcome");

        let original = Snapshot::from_json(&fs::read_to_string(&path).unwrap()).unwrap();
        assert!(select_node_by_id(&original.root, "intro").is_none());
    }

    #[test]
    fn test_failed_action_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (path, _) = write_skeleton(dir.path());
        let before = fs::read_to_string(&path).unwrap();
        fs::write(
            dir.path().join("actions.json"),
            r#"[{ "type": "REMOVE", "nodeId": "missing" }]"#,
        )
        .unwrap();

        let err = apply(
            ApplyArgs {
                document: PathBuf::from("doc.json"),
                actions: PathBuf::from("actions.json"),
                out: None,
            },
            dir.path(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("Action #1 (REMOVE) failed"));
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_read_actions_rejects_unknown_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actions.json");
        fs::write(&path, r#"[{ "type": "EXPLODE" }]"#).unwrap();
        assert!(read_actions(&path).is_err());
    }
}
