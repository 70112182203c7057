//! Config file loading

use anyhow::{anyhow, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "ENVYEET_";
const CONFIG_KEYS: [&str; 3] = ["squash", "force", "backup_on_overwrite"];

/// Defaults for the `merge` command.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Append source-only keys.
    pub squash: bool,
    /// Never ask before overwriting an existing file.
    pub force: bool,
    /// Back up the target before `--overwrite` replaces it.
    pub backup_on_overwrite: bool,
}

pub fn load_config(work_dir: &Path, config_path: Option<&Path>) -> Result<Config> {
    let config_path_provided = config_path.is_some();

    let discovered = match config_path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            Some(path.to_path_buf())
        }
        None => discover_config(work_dir),
    };

    let Some(config_file) = discovered else {
        return extract(base_figment());
    };

    let figment = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(&config_file))
        .merge(env_provider());

    match extract(figment) {
        Ok(cfg) => {
            tracing::debug!("Loaded config from {}", config_file.display());
            Ok(cfg)
        }
        Err(e) => {
            if config_path_provided {
                return Err(e.context(format!("Invalid config: {}", config_file.display())));
            }
            // Auto-discovered: warn and fall back to env + defaults
            tracing::warn!(
                "Failed to parse auto-discovered config {}: {}",
                config_file.display(),
                e
            );
            extract(base_figment())
        }
    }
}

fn base_figment() -> Figment {
    Figment::from(Serialized::defaults(Config::default())).merge(env_provider())
}

fn env_provider() -> Env {
    Env::prefixed(ENV_PREFIX).only(&CONFIG_KEYS)
}

fn extract(figment: Figment) -> Result<Config> {
    figment.extract::<Config>().map_err(|e| anyhow!("{e}"))
}

fn discover_config(work_dir: &Path) -> Option<PathBuf> {
    let candidates = ["envyeet.toml", ".envyeet.toml"];

    for candidate in candidates {
        let path = work_dir.join(candidate);
        if path.is_file() {
            return Some(path);
        }
    }

    None
}
