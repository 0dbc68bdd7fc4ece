//! Configuration for make-crud
//!
//! Settings are merged from the following sources, highest priority first:
//!
//! 1. Environment variables (`MAKE_CRUD_` prefix)
//! 2. `./make-crud.toml`, or the file passed with `--config`
//! 3. Hardcoded defaults
//!
//! # Example Configuration
//!
//! ```toml
//! # make-crud.toml
//! project_root = "."
//! php_binary = "php"
//! artisan = "artisan"
//! routes_dir = "routes"
//! controllers_namespace = "App\\Http\\Controllers"
//! ```

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::CrudResult;
use crate::routes::DEFAULT_CONTROLLERS_NAMESPACE;

/// Default configuration file, looked up in the working directory
pub const CONFIG_FILE: &str = "make-crud.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "MAKE_CRUD_";

/// make-crud settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MakeCrudConfig {
    /// Root of the Laravel project
    pub project_root: PathBuf,

    /// PHP interpreter used to run artisan
    pub php_binary: PathBuf,

    /// Artisan script, relative to the project root
    pub artisan: PathBuf,

    /// Route tables directory, relative to the project root
    pub routes_dir: PathBuf,

    /// Root namespace of generated controllers
    pub controllers_namespace: String,
}

impl Default for MakeCrudConfig {
    fn default() -> Self {
        Self {
            project_root: PathBuf::from("."),
            php_binary: PathBuf::from("php"),
            artisan: PathBuf::from("artisan"),
            routes_dir: PathBuf::from("routes"),
            controllers_namespace: DEFAULT_CONTROLLERS_NAMESPACE.to_string(),
        }
    }
}

impl MakeCrudConfig {
    /// Load configuration from `./make-crud.toml` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or a value
    /// has the wrong type.
    pub fn load() -> CrudResult<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific file and the environment
    ///
    /// A missing file is not an error; defaults and environment apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or a value
    /// has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> CrudResult<Self> {
        let config = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()?;

        Ok(config)
    }

    /// Route tables directory resolved against the project root
    #[must_use]
    pub fn routes_path(&self) -> PathBuf {
        self.project_root.join(&self.routes_dir)
    }
}
