use dioxus::prelude::*;
use ui::RecipeFinder;

#[component]
pub fn UploadIngredients() -> Element {
    rsx! {
        RecipeFinder {}
    }
}
