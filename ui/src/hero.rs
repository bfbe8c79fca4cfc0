use dioxus::prelude::*;

use crate::primitives::{ArrowRight, Badge, BadgeVariant, ButtonLink, ButtonSize, Image, TextLink};

const HERO_CSS: Asset = asset!("/assets/styling/hero.css");

pub const GET_STARTED_PATH: &str = "/upload_ingredients";
pub const LEARN_MORE_URL: &str = "https://github.com/binaryshrey/Hungr-AI";

pub const MOCKUP_SRC: &str = "/mobile.webp";
pub const MOCKUP_WIDTH: u32 = 310;
pub const MOCKUP_HEIGHT: u32 = 620;

// 64px cells, 1px lines
const GRID_STYLE: &str = "background-image: \
    linear-gradient(to right, rgba(255,255,255,0.2) 1px, transparent 1px), \
    linear-gradient(to bottom, rgba(255,255,255,0.2) 1px, transparent 1px); \
    background-size: 64px 64px; \
    opacity: 0.8;";

#[component]
pub fn Hero() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: HERO_CSS }

        section {
            id: "hero",
            div { class: "hero-grid", style: GRID_STYLE }

            div {
                class: "hero-inner",
                div {
                    class: "hero-layout",

                    div {
                        class: "hero-copy",
                        Badge {
                            variant: BadgeVariant::Secondary,
                            class: "hero-badge",
                            "ECE-GY 6143 · Intro to Machine Learning Project"
                        }
                        h1 {
                            class: "hero-title",
                            "Food Ingredient Classification and Recipe Recommondation using CNN and Transfer Learning"
                        }
                        p {
                            class: "hero-description",
                            "The project presents an end-to-end deep learning system that identifies "
                            "fruits and vegetables from images and recommends recipes based on the "
                            "detected ingredients, covering data preprocessing, model training, "
                            "evaluation, and web deployment."
                        }
                        div {
                            class: "hero-actions",
                            ButtonLink {
                                href: GET_STARTED_PATH,
                                size: ButtonSize::Lg,
                                class: "hero-cta",
                                "Get started"
                            }
                            TextLink {
                                href: LEARN_MORE_URL,
                                external: true,
                                class: "hero-more",
                                "Learn more "
                                ArrowRight { class: "hero-more-icon" }
                            }
                        }
                    }

                    div {
                        class: "hero-mockup",
                        div {
                            class: "hero-frame",
                            div {
                                class: "hero-frame-inner",
                                Image {
                                    src: MOCKUP_SRC,
                                    alt: "App preview",
                                    width: MOCKUP_WIDTH,
                                    height: MOCKUP_HEIGHT,
                                    class: "hero-mockup-image",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_hero() -> String {
        let mut dom = VirtualDom::new(Hero);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// Opening tag of the element carrying `needle`
    fn tag_with<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html.find(needle).expect("needle rendered");
        let start = html[..=at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn renders_one_of_each_text_block() {
        let html = render_hero();

        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches("<p ").count() + html.matches("<p>").count(), 1);
        assert_eq!(html.matches(r#"data-slot="badge""#).count(), 1);
        assert!(html.contains("ECE-GY 6143 · Intro to Machine Learning Project"));
        assert!(html.contains("Recipe Recommondation using CNN and Transfer Learning"));
    }

    #[test]
    fn has_exactly_two_interactive_controls() {
        let html = render_hero();

        assert_eq!(html.matches("<a ").count(), 2);
        assert_eq!(html.matches("<button").count(), 0);
        assert_eq!(html.matches("<input").count(), 0);
        assert_eq!(html.matches("<select").count(), 0);
        assert_eq!(html.matches("<textarea").count(), 0);
    }

    #[test]
    fn get_started_targets_upload_page() {
        let html = render_hero();
        let tag = tag_with(&html, r#"data-slot="button""#);

        assert!(tag.contains(r#"href="/upload_ingredients""#));
        assert!(!tag.contains("target="));
    }

    #[test]
    fn learn_more_opens_repository_in_new_context() {
        let html = render_hero();
        let tag = tag_with(&html, r#"href="https://github.com/binaryshrey/Hungr-AI""#);

        assert!(tag.starts_with("<a"));
        assert!(tag.contains(r#"target="_blank""#));
        assert!(tag.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn mockup_image_has_fixed_source_and_size() {
        let html = render_hero();
        assert_eq!(html.matches("<img").count(), 1);

        let tag = tag_with(&html, "<img");
        assert!(tag.contains(r#"src="/mobile.webp""#));
        assert!(tag.contains(r#"width="310""#));
        assert!(tag.contains(r#"height="620""#));
        assert!(tag.contains(r#"alt="App preview""#));
    }

    #[test]
    fn grid_background_uses_fixed_cells() {
        let html = render_hero();
        let tag = tag_with(&html, "hero-grid");

        assert!(tag.contains("background-size: 64px 64px"));
        assert!(tag.contains("opacity: 0.8"));
        assert_eq!(tag.matches("linear-gradient").count(), 2);
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render_hero(), render_hero());
    }
}
