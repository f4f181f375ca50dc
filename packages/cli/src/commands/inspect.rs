use crate::config::Config;
use anyhow::{anyhow, Context, Result};
use blueprint_model::{select_path, select_path_nodes, Snapshot};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Node to locate
    pub node_id: String,

    /// Document to read (defaults to the configured document)
    #[arg(short, long)]
    pub document: Option<PathBuf>,
}

pub fn inspect(args: InspectArgs, cwd: &Path) -> Result<()> {
    let config = Config::load(cwd)?;
    let path = config.document_path(cwd, args.document.as_deref());
    let source =
        fs::read_to_string(&path).with_context(|| format!("Cannot read {}", path.display()))?;
    let snapshot = Snapshot::from_json(&source)?;

    let node_path = select_path(&snapshot.root, &args.node_id)
        .ok_or_else(|| anyhow!("Node not found: {}", args.node_id))?;
    let nodes = select_path_nodes(&snapshot.root, &args.node_id).unwrap_or_default();

    let trail: Vec<String> = nodes
        .iter()
        .map(|node| format!("{}({})", node.node_type, node.id))
        .collect();
    let indices: Vec<String> = node_path.index_path.iter().map(|i| i.to_string()).collect();

    println!("{}", args.node_id.bright_white().bold());
    println!("  {} {}", "path: ".dimmed(), trail.join(" > "));
    println!("  {} [{}]", "index:".dimmed(), indices.join(", "));
    if let Some(node) = nodes.last() {
        println!("  {} {}", "type: ".dimmed(), node.node_type);
        println!("  {} {}", "kids: ".dimmed(), node.children.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_missing_node() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = Snapshot::skeleton();
        fs::write(
            dir.path().join("blueprint.json"),
            snapshot.to_json_pretty().unwrap(),
        )
        .unwrap();

        let section = snapshot.root.children[1].id.clone();
        inspect(
            InspectArgs {
                node_id: section,
                document: None,
            },
            dir.path(),
        )
        .unwrap();

        let err = inspect(
            InspectArgs {
                node_id: "ghost".to_string(),
                document: None,
            },
            dir.path(),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Node not found: ghost");
    }
}
