use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name looked up in the current working directory.
pub const LOCAL_CONFIG_NAME: &str = ".screener.toml";

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub parsing: Option<ParsingSection>,
    pub input: Option<InputConfig>,
    pub display: Option<DisplayConfig>,
}

/// Vocabulary overrides applied on top of the built-in keyword lists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParsingSection {
    /// Replaces the built-in skill vocabulary entirely.
    pub skills: Option<Vec<String>>,
    /// Appended to the skill vocabulary (or to `skills` when both are set).
    pub extra_skills: Option<Vec<String>>,
    pub extra_role_nouns: Option<Vec<String>>,
    pub extra_degree_keywords: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub max_file_size_mb: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub color: Option<bool>,
    /// Default output format: "json", "markdown" or "text".
    pub format: Option<String>,
}

/// Platform config directory path: `<config_dir>/screener/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("screener").join("config.toml"))
}

/// Load config by cascading CWD `.screener.toml` over platform config.
/// CWD values override platform values.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(Path::new(LOCAL_CONFIG_NAME));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

/// Load a config from a specific path. Returns `None` if the file doesn't
/// exist or can't be parsed.
pub fn load_from_path(path: &Path) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unparsable config file");
            None
        }
    }
}

/// Merge two configs: `overlay` values take precedence over `base`.
pub fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        parsing: Some(ParsingSection {
            skills: overlay
                .parsing
                .as_ref()
                .and_then(|p| p.skills.clone())
                .or_else(|| base.parsing.as_ref().and_then(|p| p.skills.clone())),
            extra_skills: overlay
                .parsing
                .as_ref()
                .and_then(|p| p.extra_skills.clone())
                .or_else(|| base.parsing.as_ref().and_then(|p| p.extra_skills.clone())),
            extra_role_nouns: overlay
                .parsing
                .as_ref()
                .and_then(|p| p.extra_role_nouns.clone())
                .or_else(|| {
                    base.parsing
                        .as_ref()
                        .and_then(|p| p.extra_role_nouns.clone())
                }),
            extra_degree_keywords: overlay
                .parsing
                .as_ref()
                .and_then(|p| p.extra_degree_keywords.clone())
                .or_else(|| {
                    base.parsing
                        .as_ref()
                        .and_then(|p| p.extra_degree_keywords.clone())
                }),
        }),
        input: Some(InputConfig {
            max_file_size_mb: overlay
                .input
                .as_ref()
                .and_then(|i| i.max_file_size_mb)
                .or_else(|| base.input.as_ref().and_then(|i| i.max_file_size_mb)),
        }),
        display: Some(DisplayConfig {
            color: overlay
                .display
                .as_ref()
                .and_then(|d| d.color)
                .or_else(|| base.display.as_ref().and_then(|d| d.color)),
            format: overlay
                .display
                .as_ref()
                .and_then(|d| d.format.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.format.clone())),
        }),
    }
}
