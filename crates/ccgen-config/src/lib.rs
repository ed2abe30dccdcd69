//! # ccgen-config
//!
//! Layered configuration loading for ccgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CCGEN_*` prefix, `__` as separator)
//! 2. A file passed explicitly (`--config <FILE>`)
//! 3. Project-level `./ccgen.toml`
//! 4. User-level `~/.config/ccgen/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CCGEN_PARSER__STRICT` -> `parser.strict`,
//! `CCGEN_EXTRACT__ON_COLLISION` -> `extract.on_collision`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ccgen_config::CcgenConfig;
//!
//! let config = CcgenConfig::load(None).expect("config");
//! println!("writing symbols to {}", config.output.json_file);
//! ```

mod error;
mod extract;
mod output;
mod parser;
mod render;

pub use error::ConfigError;
pub use extract::ExtractConfig;
pub use output::OutputConfig;
pub use parser::ParserConfig;
pub use render::RenderConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file name, looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "ccgen.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CcgenConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub parser: ParserConfig,
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub render: RenderConfig,
}

impl CcgenConfig {
    /// Load configuration from all sources, then validate it.
    ///
    /// # Errors
    /// [`ConfigError::MissingFile`] if `explicit` does not exist, a figment
    /// error for malformed sources, or [`ConfigError::InvalidValue`].
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on
    /// top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("CCGEN_").split("__"))
    }

    /// Reject values that would only fail later, mid-run.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let files = [
            ("output.log_file", &self.output.log_file),
            ("output.json_file", &self.output.json_file),
            ("output.dump_file", &self.output.dump_file),
        ];
        for (field, value) in files {
            if value.trim().is_empty() {
                return Err(invalid(field, "file name must not be empty"));
            }
        }
        if self.render.templates.iter().any(|name| name.trim().is_empty()) {
            return Err(invalid("render.templates", "template names must not be empty"));
        }
        if let Some(dir) = &self.render.template_dir {
            if dir.as_os_str().is_empty() {
                return Err(invalid("render.template_dir", "directory must not be empty"));
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ccgen").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
