use serde::{Deserialize, Serialize};

/// Reducer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Validate the snapshot (throw mode) before and after every edit
    pub dev_guards: bool,

    /// Maximum number of undo levels (0 = unlimited)
    pub history_limit: usize,
}

impl EditorConfig {
    pub const DEFAULT_HISTORY_LIMIT: usize = 100;

    pub fn with_dev_guards(mut self, enabled: bool) -> Self {
        self.dev_guards = enabled;
        self
    }

    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            dev_guards: cfg!(debug_assertions),
            history_limit: Self::DEFAULT_HISTORY_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{ "historyLimit": 5 }"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.dev_guards, cfg!(debug_assertions));
    }
}
