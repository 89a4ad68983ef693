use asciiblock_engine::{BlockOptions, ContentModel, Context, Sub, SubPreset};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Substitutions for a context, either a preset name or an explicit list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubsSetting {
    Preset(SubPreset),
    List(Vec<Sub>),
}

impl SubsSetting {
    pub fn expand(&self) -> Vec<Sub> {
        match self {
            SubsSetting::Preset(preset) => preset.expand(),
            SubsSetting::List(subs) => subs.clone(),
        }
    }
}

/// Overrides for blocks of one context. Unset fields keep the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_model: Option<ContentModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subs: Option<SubsSetting>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Per-context overrides (`[blocks.listing]`). Unknown context names
    /// fail to parse.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub blocks: BTreeMap<Context, BlockConfig>,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        log::debug!(
            "loaded {} block override(s) from {}",
            config.blocks.len(),
            config_path.display()
        );
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/asciiblock");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Expands `~` and environment variables in a user-supplied path.
    pub fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }

    /// Block options for `context`: built-in defaults, then configured overrides.
    pub fn options_for(&self, context: Context) -> BlockOptions {
        let mut opts = BlockOptions::for_context(context);
        if let Some(overrides) = self.blocks.get(&context) {
            if let Some(model) = overrides.content_model {
                opts.content_model = model;
            }
            if let Some(subs) = &overrides.subs {
                opts.subs = subs.expand();
            }
        }
        opts
    }
}
