//! This crate contains all shared fullstack server functions.
use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

/// Liveness report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Health {
    pub alive: bool,
}

/// Labels the ingredient classifier can predict
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassList {
    pub num_classes: usize,
    pub classes: Vec<String>,
}

/// Recipe identifier as sent to the client
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecipeKey {
    Int(i64),
    Text(String),
}

impl std::fmt::Display for RecipeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecipeKey::Int(id) => write!(f, "{id}"),
            RecipeKey::Text(id) => f.write_str(id),
        }
    }
}

/// A ranked recipe as sent to the client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSuggestion {
    pub id: Option<RecipeKey>,
    pub title: String,
    pub score: f64,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub instructions: String,
}

/// Recipe suggestion result structure
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SuggestionList {
    pub ingredients: Vec<String>,
    pub recipes: Vec<RecipeSuggestion>,
    pub candidate_count: usize,
}

#[cfg(feature = "server")]
impl From<hungr_core::RecipeId> for RecipeKey {
    fn from(id: hungr_core::RecipeId) -> Self {
        match id {
            hungr_core::RecipeId::Int(id) => RecipeKey::Int(id),
            hungr_core::RecipeId::Text(id) => RecipeKey::Text(id),
        }
    }
}

#[cfg(feature = "server")]
impl From<hungr_core::RecipeMatch> for RecipeSuggestion {
    fn from(m: hungr_core::RecipeMatch) -> Self {
        Self {
            id: m.id.map(Into::into),
            title: m.title,
            score: m.score,
            matched: m.matched,
            missing: m.missing,
            instructions: m.instructions,
        }
    }
}

#[cfg(feature = "server")]
impl SuggestionList {
    pub fn from_suggestions(ingredients: Vec<String>, suggestions: hungr_core::Suggestions) -> Self {
        Self {
            ingredients,
            recipes: suggestions.recipes.into_iter().map(Into::into).collect(),
            candidate_count: suggestions.candidate_count,
        }
    }
}

/// Report that the server is up.
#[server(HealthCheck)]
pub async fn health() -> Result<Health, ServerFnError> {
    Ok(Health { alive: true })
}

/// List the classifier labels from the configured model directory.
#[server(ListClasses)]
pub async fn classes() -> Result<ClassList, ServerFnError> {
    use hungr_core::{ModelCatalog, ServiceConfig};

    let config = ServiceConfig::from_env();
    tracing::info!("Reading model catalog from {}", config.model_dir.display());

    match ModelCatalog::load(&config.model_dir).await {
        Ok(catalog) => Ok(ClassList {
            num_classes: catalog.num_classes(),
            classes: catalog.classes,
        }),
        Err(e) => {
            tracing::error!("Loading model catalog failed: {}", e);
            Err(ServerFnError::new(format!("Loading model catalog failed: {}", e)))
        }
    }
}

/// Suggest recipes for a set of ingredient names on the server.
#[server(SuggestRecipes)]
pub async fn suggest_recipes(ingredients: Vec<String>) -> Result<SuggestionList, ServerFnError> {
    use hungr_core::{suggest_from_config, unique_ingredients, ServiceConfig};

    let ingredients = unique_ingredients(ingredients);
    tracing::info!("Suggesting recipes for {:?}", ingredients);

    let config = ServiceConfig::from_env();
    match suggest_from_config(&ingredients, &config).await {
        Ok(suggestions) => Ok(SuggestionList::from_suggestions(ingredients, suggestions)),
        Err(e) => {
            tracing::error!("Recipe suggestion failed: {}", e);
            Err(ServerFnError::new(format!("Recipe suggestion failed: {}", e)))
        }
    }
}


#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;
    use hungr_core::{RecipeId, RecipeMatch, Suggestions};

    #[test]
    fn suggestion_list_keeps_ranking() {
        let suggestions = Suggestions {
            recipes: vec![RecipeMatch {
                id: Some(RecipeId::Int(4)),
                title: "Caprese".to_string(),
                score: 1.0,
                matched: vec!["basil".to_string(), "tomato".to_string()],
                missing: vec![],
                instructions: "Slice.".to_string(),
            }],
            candidate_count: 3,
        };

        let list = SuggestionList::from_suggestions(vec!["basil".into(), "tomato".into()], suggestions);

        assert_eq!(list.candidate_count, 3);
        assert_eq!(list.recipes.len(), 1);
        assert_eq!(list.recipes[0].id, Some(RecipeKey::Int(4)));
        assert_eq!(list.recipes[0].title, "Caprese");
        assert_eq!(list.recipes[0].matched, vec!["basil", "tomato"]);
    }
}
