//! Classifier model metadata
//!
//! The trained network lives next to two JSON files: `model_config.json`
//! describing the backbone and input size, and `classes.json` listing the
//! labels in output order.

use crate::error::{HungrError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

pub const MODEL_CONFIG_FILE: &str = "model_config.json";
pub const CLASSES_FILE: &str = "classes.json";

/// Backbone settings the classifier was trained with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelConfig {
    pub backbone: String,
    pub img_size: u32,
}

/// Labels and settings of a trained classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub config: ModelConfig,
    pub classes: Vec<String>,
}

async fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T> {
    if !path.exists() {
        return Err(HungrError::NotFound(path));
    }
    let raw = tokio::fs::read_to_string(&path).await?;
    serde_json::from_str(&raw).map_err(|e| HungrError::json(path, e))
}

impl ModelCatalog {
    /// Read the catalog from a model directory
    pub async fn load<P: AsRef<Path>>(model_dir: P) -> Result<Self> {
        let dir = model_dir.as_ref();
        if !dir.is_dir() {
            return Err(HungrError::Configuration(format!(
                "Model directory is not a directory: {}",
                dir.display()
            )));
        }

        let config: ModelConfig = read_json(dir.join(MODEL_CONFIG_FILE)).await?;
        let classes: Vec<String> = read_json(dir.join(CLASSES_FILE)).await?;

        if classes.is_empty() {
            return Err(HungrError::Configuration(format!(
                "No classes listed in {}",
                dir.join(CLASSES_FILE).display()
            )));
        }

        info!(
            "Loaded {} classes for backbone {} ({}px)",
            classes.len(),
            config.backbone,
            config.img_size
        );
        Ok(Self { config, classes })
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    /// Label for a network output index
    pub fn label(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }
}
