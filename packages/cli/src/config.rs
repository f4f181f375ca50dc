use blueprint_editor::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "blueprint.config.json";

/// Blueprint configuration file format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Document used when a command is given no path
    #[serde(default = "default_document")]
    pub document: String,

    /// Reducer settings (`devGuards`, `historyLimit`)
    #[serde(flatten)]
    pub editor: EditorConfig,
}

fn default_document() -> String {
    "blueprint.json".to_string()
}

impl Config {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(Config::default())
        }
    }

    /// Resolve an explicit path, or fall back to the configured document
    pub fn document_path(&self, cwd: &Path, explicit: Option<&Path>) -> PathBuf {
        match explicit {
            Some(path) => cwd.join(path),
            None => cwd.join(&self.document),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            document: default_document(),
            editor: EditorConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "document": "site/home.json",
            "devGuards": true,
            "historyLimit": 25
        }"#;

        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.document, "site/home.json");
        assert!(config.editor.dev_guards);
        assert_eq!(config.editor.history_limit, 25);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.document, "blueprint.json");
        assert_eq!(config.editor.history_limit, EditorConfig::DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn test_load_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Config::load(dir.path()).unwrap(), Config::default());

        std::fs::write(
            dir.path().join(DEFAULT_CONFIG_NAME),
            r#"{ "historyLimit": 0 }"#,
        )
        .unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.editor.history_limit, 0);
        assert_eq!(config.document, "blueprint.json");
    }

    #[test]
    fn test_document_path() {
        let config = Config::default();
        let cwd = Path::new("/work");
        assert_eq!(config.document_path(cwd, None), PathBuf::from("/work/blueprint.json"));
        assert_eq!(
            config.document_path(cwd, Some(Path::new("other.json"))),
            PathBuf::from("/work/other.json")
        );
    }
}
