//! Configuration for the recommendation service

use crate::error::{HungrError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, warn};

/// Environment variable overriding [`ServiceConfig::model_dir`]
pub const MODEL_DIR_ENV: &str = "MODEL_DIR";

/// Environment variable overriding [`ServiceConfig::recipes_path`]
pub const RECIPES_PATH_ENV: &str = "RECIPES_PATH";

pub const DEFAULT_MODEL_DIR: &str = "app/model";
pub const DEFAULT_RECIPES_PATH: &str = "app/data/recipes.json";

static DOTENV: Once = Once::new();

/// Load `.env` from the working directory or its parents, once per process.
/// Variables already set in the environment win over the file.
pub fn load_dotenv() {
    DOTENV.call_once(|| match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => debug!("No .env file found"),
        Err(e) => warn!("Ignoring unreadable .env file: {}", e),
    });
}

/// Load a specific env file without overriding variables already set
pub fn load_dotenv_from<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    dotenvy::from_path(path).map_err(|e| {
        HungrError::Configuration(format!("Failed to load {}: {}", path.display(), e))
    })
}

/// Configuration shared by the server functions and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Directory holding `classes.json` and `model_config.json`
    pub model_dir: PathBuf,

    /// JSON file with the recipe records
    pub recipes_path: PathBuf,

    /// Limits applied when suggesting recipes
    pub suggest: SuggestOptions,
}

/// Limits for candidate selection and ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestOptions {
    /// Number of ranked recipes to return
    pub top_n: usize,

    /// Maximum candidates collected for a single ingredient
    pub limit_per_ingredient: usize,

    /// Maximum candidates collected overall
    pub max_total: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            top_n: 10,
            limit_per_ingredient: 300,
            max_total: 2000,
        }
    }
}

impl SuggestOptions {
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_limit_per_ingredient(mut self, limit: usize) -> Self {
        self.limit_per_ingredient = limit;
        self
    }

    pub fn with_max_total(mut self, max_total: usize) -> Self {
        self.max_total = max_total;
        self
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            recipes_path: PathBuf::from(DEFAULT_RECIPES_PATH),
            suggest: SuggestOptions::default(),
        }
    }
}

impl ServiceConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `MODEL_DIR` and `RECIPES_PATH` when set,
    /// after loading `.env`
    pub fn from_env() -> Self {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with a custom variable source.
    /// Blank values are ignored.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(dir) = value(MODEL_DIR_ENV) {
            config.model_dir = PathBuf::from(dir);
        }
        if let Some(path) = value(RECIPES_PATH_ENV) {
            config.recipes_path = PathBuf::from(path);
        }
        config
    }

    /// Set the model directory
    pub fn with_model_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.model_dir = dir.into();
        self
    }

    /// Set the recipes file
    pub fn with_recipes_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.recipes_path = path.into();
        self
    }

    /// Set the suggestion limits
    pub fn with_suggest(mut self, suggest: SuggestOptions) -> Self {
        self.suggest = suggest;
        self
    }
}
