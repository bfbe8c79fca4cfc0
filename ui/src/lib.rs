//! This crate contains all shared UI for the workspace.

mod hero;
pub use hero::{Hero, GET_STARTED_PATH, LEARN_MORE_URL, MOCKUP_HEIGHT, MOCKUP_SRC, MOCKUP_WIDTH};

pub mod primitives;

mod recipes;
pub use recipes::{card_key, parse_ingredients, FinderState, RecipeFinder, RecipeResults};
