use std::path::Path;

use crate::error::ConfigError;
use crate::search::TerminalPolicy;

/// Parameters for one move selection, passed explicitly into the selector.
/// There is no ambient or process-wide search configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Search depth in plies below each root candidate. Depth 0 ranks the
    /// candidates by static evaluation alone.
    pub depth: u32,
    /// Produce the per-move value table alongside the chosen move. Purely
    /// advisory; never affects which move is chosen.
    pub diagnostics: bool,
    /// How the search layers treat a terminal child move.
    pub terminal_policy: TerminalPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: 4,
            diagnostics: false,
            terminal_policy: TerminalPolicy::default(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // A game lasts at most 42 plies, deeper searches only burn time
        if self.search.depth > 42 {
            return Err(ConfigError::Validation(
                "search.depth must be <= 42".into(),
            ));
        }
        Ok(())
    }
}
