use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use blueprint_editor::Document;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Document to create (defaults to the configured document)
    pub path: Option<PathBuf>,

    /// Overwrite an existing document
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &Path) -> Result<()> {
    let config_path = cwd.join(DEFAULT_CONFIG_NAME);
    let config = Config::load(cwd)?;
    let document_path = config.document_path(cwd, args.path.as_deref());

    if document_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            document_path.display().to_string().bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Blueprint document...".bright_blue().bold());

    if let Some(parent) = document_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut document = Document::create(&document_path, config.editor.clone());
    document.save()?;
    println!("  {} Created {}", "✓".green(), document_path.display());

    // --force covers the document only; an existing config is never rewritten
    if !config_path.exists() {
        let config_json = serde_json::to_string_pretty(&config)?;
        fs::write(&config_path, config_json)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    }

    println!();
    println!("{}", "✅ Document initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Write an actions file (a JSON array of actions)");
    println!("  2. Run: blueprint apply {} actions.json", document_path.display());
    println!("  3. Run: blueprint validate {}", document_path.display());

    Ok(())
}
