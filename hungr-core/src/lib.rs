//! Hungr Core Library
//!
//! Recipe recommendation from detected ingredients and classifier model
//! metadata for the Hungr app.

pub mod config;
pub mod error;
pub mod model;
pub mod recipe;

pub use config::{ServiceConfig, SuggestOptions};
pub use error::{HungrError, Result};
pub use model::{ModelCatalog, ModelConfig};
pub use recipe::{suggest, Recipe, RecipeBook, RecipeId, RecipeMatch, Suggestions};
use tracing::info;

/// High-level recommendation function: load the configured recipe book and
/// rank it against `detected`
pub async fn suggest_from_config<S: AsRef<str>>(
    detected: &[S],
    config: &ServiceConfig,
) -> Result<Suggestions> {
    let book = RecipeBook::load(&config.recipes_path).await?;

    info!("Suggesting recipes for {} ingredients", detected.len());
    Ok(book.top_recipes(detected, &config.suggest))
}

/// Sorted, de-duplicated, trimmed and lower-cased ingredient names
pub fn unique_ingredients<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names: Vec<String> = names
        .into_iter()
        .map(|n| n.as_ref().trim().to_lowercase())
        .filter(|n| !n.is_empty())
        .collect();
    names.sort();
    names.dedup();
    names
}
