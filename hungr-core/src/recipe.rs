//! Recipe records and ingredient based recommendation

use crate::config::SuggestOptions;
use crate::error::{HungrError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Identifier of a recipe record, numeric or textual depending on the source
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeId {
    Int(i64),
    Text(String),
}

/// A single recipe record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    #[serde(default)]
    pub id: Option<RecipeId>,

    #[serde(default = "untitled", deserialize_with = "title_or_untitled")]
    pub title: String,

    /// Either a list of names or a single name in the source data
    #[serde(default, deserialize_with = "one_or_many")]
    pub ingredients: Vec<String>,

    #[serde(default, deserialize_with = "string_or_empty")]
    pub instructions: String,
}

/// A recipe ranked against a set of detected ingredients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub id: Option<RecipeId>,
    pub title: String,
    /// Share of the detected ingredients the recipe uses, in `0.0..=1.0`
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub instructions: String,
}

/// Ranked recipes together with the size of the candidate pool
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestions {
    pub recipes: Vec<RecipeMatch>,
    pub candidate_count: usize,
}

fn untitled() -> String {
    "Untitled".to_string()
}

// null counts as absent
fn title_or_untitled<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(untitled))
}

fn string_or_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<serde_json::Value>),
        Null(()),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        // non-string entries are dropped
        OneOrMany::Many(values) => values
            .into_iter()
            .filter_map(|v| match v {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        OneOrMany::Null(()) => Vec::new(),
    })
}

fn normalize(name: &str) -> Option<String> {
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_lowercase())
}

impl Recipe {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            id: None,
            title: title.into(),
            ingredients: Vec::new(),
            instructions: String::new(),
        }
    }

    pub fn with_id(mut self, id: RecipeId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_instructions<S: Into<String>>(mut self, instructions: S) -> Self {
        self.instructions = instructions.into();
        self
    }

    /// Lower-cased ingredient set
    fn ingredient_set(&self) -> BTreeSet<String> {
        self.ingredients.iter().map(|i| i.to_lowercase()).collect()
    }

    fn uses(&self, ingredient: &str) -> bool {
        self.ingredients
            .iter()
            .any(|i| i.to_lowercase() == ingredient)
    }
}

/// Rank `records` against the `detected` ingredient names.
///
/// Matching is case-insensitive and blank names are ignored. Recipes sharing
/// no ingredient are dropped; the rest are ordered by score, highest first,
/// keeping input order among equal scores, and truncated to `top_n`.
pub fn suggest<S: AsRef<str>>(detected: &[S], records: &[Recipe], top_n: usize) -> Vec<RecipeMatch> {
    let detected: BTreeSet<String> = detected
        .iter()
        .filter_map(|d| normalize(d.as_ref()))
        .collect();
    let denominator = detected.len().max(1) as f64;

    let mut scored: Vec<RecipeMatch> = records
        .iter()
        .filter_map(|recipe| {
            let ingredients = recipe.ingredient_set();
            let matched: Vec<String> = detected.intersection(&ingredients).cloned().collect();
            if matched.is_empty() {
                return None;
            }
            let missing = ingredients.difference(&detected).cloned().collect();

            Some(RecipeMatch {
                id: recipe.id.clone(),
                title: recipe.title.clone(),
                score: matched.len() as f64 / denominator,
                matched,
                missing,
                instructions: recipe.instructions.clone(),
            })
        })
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_n);
    scored
}

/// In-memory recipe collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeBook {
    recipes: Vec<Recipe>,
}

impl RecipeBook {
    pub fn new(recipes: Vec<Recipe>) -> Self {
        Self { recipes }
    }

    /// Load a JSON array of recipe records
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(HungrError::NotFound(path.to_path_buf()));
        }

        let raw = tokio::fs::read_to_string(path).await?;
        let book = Self::parse(path, &raw)?;
        info!("Loaded {} recipes from {}", book.len(), path.display());
        Ok(book)
    }

    /// Parse a JSON array of recipe records; `source` is only used in errors
    pub fn parse<P: AsRef<Path>>(source: P, raw: &str) -> Result<Self> {
        let recipes: Vec<Recipe> =
            serde_json::from_str(raw).map_err(|e| HungrError::json(source.as_ref(), e))?;
        Ok(Self::new(recipes))
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Collect the recipes using at least one detected ingredient.
    ///
    /// Ingredients are visited in order; each contributes at most
    /// `limit_per_ingredient` recipes and collection stops at `max_total`.
    /// Records without an id cannot be de-duplicated and are skipped.
    pub fn candidates<S: AsRef<str>>(
        &self,
        detected: &[S],
        limit_per_ingredient: usize,
        max_total: usize,
    ) -> Vec<Recipe> {
        let mut seen: HashSet<&RecipeId> = HashSet::new();
        let mut candidates = Vec::new();

        for ingredient in detected {
            if candidates.len() >= max_total {
                break;
            }
            let Some(ingredient) = normalize(ingredient.as_ref()) else {
                continue;
            };

            let hits = self
                .recipes
                .iter()
                .filter(|r| r.uses(&ingredient))
                .take(limit_per_ingredient);

            for recipe in hits {
                let Some(id) = recipe.id.as_ref() else {
                    continue;
                };
                if !seen.insert(id) {
                    continue;
                }
                candidates.push(recipe.clone());
                if candidates.len() >= max_total {
                    break;
                }
            }
            debug!("{} candidates after '{}'", candidates.len(), ingredient);
        }

        candidates
    }

    /// Candidate selection followed by ranking
    pub fn top_recipes<S: AsRef<str>>(&self, detected: &[S], options: &SuggestOptions) -> Suggestions {
        let candidates = self.candidates(detected, options.limit_per_ingredient, options.max_total);
        let recipes = suggest(detected, &candidates, options.top_n);
        Suggestions {
            recipes,
            candidate_count: candidates.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ingredients_accept_single_string() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": 7, "ingredients": "Apple"}"#).unwrap();

        assert_eq!(recipe.id, Some(RecipeId::Int(7)));
        assert_eq!(recipe.title, "Untitled");
        assert_eq!(recipe.ingredients, vec!["Apple".to_string()]);
        assert!(recipe.instructions.is_empty());
    }

    #[test]
    fn non_string_ingredients_are_dropped() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id": "r1", "ingredients": ["tomato", 3, null, "basil"]}"#)
                .unwrap();

        assert_eq!(recipe.id, Some(RecipeId::Text("r1".to_string())));
        assert_eq!(recipe.ingredients, vec!["tomato", "basil"]);
    }

    #[test]
    fn empty_detection_matches_nothing() {
        let records = vec![Recipe::new("Salad").with_ingredients(["lettuce"])];
        let detected: [&str; 0] = [];
        assert!(suggest(&detected, &records, 10).is_empty());
    }
}
