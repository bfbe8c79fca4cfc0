use api::{RecipeSuggestion, SuggestionList};
use dioxus::prelude::*;

#[cfg(any(feature = "web", feature = "server"))]
use api::suggest_recipes;

const RECIPES_CSS: Asset = asset!("/assets/styling/recipes.css");

/// Split a comma separated ingredient list, dropping blanks and repeats
/// while keeping first-seen order.
pub fn parse_ingredients(input: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in input.split(',').map(|n| n.trim().to_lowercase()) {
        if !name.is_empty() && !names.contains(&name) {
            names.push(name);
        }
    }
    names
}

/// List key for a suggestion: its id when it has one, its position otherwise.
/// Titles repeat ("Untitled") so they never serve as keys.
pub fn card_key(recipe: &RecipeSuggestion, index: usize) -> String {
    match &recipe.id {
        Some(id) => format!("id-{id}"),
        None => format!("idx-{index}"),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FinderState {
    pub is_searching: bool,
    pub result: Option<SuggestionList>,
    pub error: Option<String>,
}

impl FinderState {
    /// Replace any shown result with a validation message
    pub fn reject(&mut self, message: impl Into<String>) {
        self.result = None;
        self.error = Some(message.into());
    }
}

/// Ingredient entry plus the ranked recipes returned by the server.
#[component]
pub fn RecipeFinder() -> Element {
    let mut input = use_signal(String::new);
    let state = use_signal(FinderState::default);

    let search = move |_| {
        let ingredients = parse_ingredients(&input.read());
        let mut state = state;
        if ingredients.is_empty() {
            state.write().reject("Enter at least one ingredient.");
            return;
        }
        spawn(async move {
            state.write().is_searching = true;
            find_recipes(ingredients, state).await;
        });
    };

    let state_read = state.read();

    rsx! {
        document::Link { rel: "stylesheet", href: RECIPES_CSS }

        div {
            id: "recipe-finder",
            h2 { "What's in your kitchen?" }
            p {
                class: "finder-hint",
                "List the fruits and vegetables you have, separated by commas."
            }

            div {
                class: "finder-form",
                input {
                    placeholder: "tomato, basil, garlic",
                    value: "{input}",
                    oninput: move |event| input.set(event.value()),
                }
                button {
                    disabled: state_read.is_searching,
                    onclick: search,
                    if state_read.is_searching { "Searching..." } else { "Find recipes" }
                }
            }

            if let Some(error) = &state_read.error {
                p { class: "finder-error", "{error}" }
            }

            if let Some(result) = state_read.result.clone() {
                RecipeResults { result }
            }
        }
    }
}

/// Ranked recipe list for one suggestion response.
#[component]
pub fn RecipeResults(result: SuggestionList) -> Element {
    if result.recipes.is_empty() {
        let ingredients = result.ingredients.join(", ");
        return rsx! {
            p { class: "finder-empty", "No recipe uses {ingredients}." }
        };
    }

    let shown = result.recipes.len();
    let candidates = result.candidate_count;
    let cards: Vec<(String, RecipeSuggestion)> = result
        .recipes
        .iter()
        .enumerate()
        .map(|(index, recipe)| (card_key(recipe, index), recipe.clone()))
        .collect();

    rsx! {
        p {
            class: "finder-summary",
            "Top {shown} of {candidates} candidate recipes"
        }
        ul {
            class: "finder-results",
            for (key, recipe) in cards {
                RecipeCard { key: "{key}", recipe }
            }
        }
    }
}

#[component]
fn RecipeCard(recipe: RecipeSuggestion) -> Element {
    let percent = (recipe.score * 100.0).round();
    let matched = recipe.matched.join(", ");
    let missing = recipe.missing.join(", ");

    rsx! {
        li {
            h3 { "{recipe.title}" }
            span { class: "finder-score", "{percent}% match" }
            p { class: "finder-matched", "Uses: {matched}" }
            if !missing.is_empty() {
                p { class: "finder-missing", "Also needs: {missing}" }
            }
            if !recipe.instructions.is_empty() {
                p { class: "finder-instructions", "{recipe.instructions}" }
            }
        }
    }
}

#[cfg(any(feature = "web", feature = "server"))]
async fn find_recipes(ingredients: Vec<String>, mut state: Signal<FinderState>) {
    tracing::info!("Requesting recipes for {:?}", ingredients);
    match suggest_recipes(ingredients).await {
        Ok(result) => {
            let mut state = state.write();
            state.result = Some(result);
            state.error = None;
            state.is_searching = false;
        }
        Err(e) => {
            tracing::error!("Recipe request failed: {}", e);
            let mut state = state.write();
            state.error = Some(format!("Recipe request failed: {}", e));
            state.is_searching = false;
        }
    }
}

#[cfg(not(any(feature = "web", feature = "server")))]
async fn find_recipes(ingredients: Vec<String>, mut state: Signal<FinderState>) {
    tracing::warn!("No recipe service in this build, dropping {:?}", ingredients);
    let mut state = state.write();
    state.error = Some("Recipe suggestions are not available in this build.".to_string());
    state.is_searching = false;
}
