//! Small presentational building blocks shared by the views.
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Secondary,
}

impl BadgeVariant {
    fn class_name(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    #[default]
    Default,
    Lg,
}

impl ButtonSize {
    fn class_name(self) -> &'static str {
        match self {
            ButtonSize::Default => "button",
            ButtonSize::Lg => "button button-lg",
        }
    }
}

/// Non-interactive label pill.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let base = variant.class_name();
    rsx! {
        span {
            "data-slot": "badge",
            class: "{base} {class}",
            {children}
        }
    }
}

/// Anchor styled as a button. Renders a single interactive element, so a
/// button never ends up nested inside a link.
#[component]
pub fn ButtonLink(
    #[props(into)] href: String,
    #[props(default)] size: ButtonSize,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    let base = size.class_name();
    rsx! {
        a {
            "data-slot": "button",
            href: "{href}",
            class: "{base} {class}",
            {children}
        }
    }
}

/// Plain text link. External links open in a new browsing context without
/// leaking the opener or referrer.
#[component]
pub fn TextLink(
    #[props(into)] href: String,
    #[props(default)] external: bool,
    #[props(default, into)] class: String,
    children: Element,
) -> Element {
    if external {
        rsx! {
            a {
                href: "{href}",
                target: "_blank",
                rel: "noopener noreferrer",
                class: "text-link {class}",
                {children}
            }
        }
    } else {
        rsx! {
            a { href: "{href}", class: "text-link {class}", {children} }
        }
    }
}

#[component]
pub fn ArrowRight(#[props(default, into)] class: String) -> Element {
    rsx! {
        svg {
            "aria-hidden": "true",
            class: "icon {class}",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M5 12h14" }
            path { d: "m12 5 7 7-7 7" }
        }
    }
}

/// Image with intrinsic dimensions so the layout is reserved before the
/// asset loads.
#[component]
pub fn Image(
    #[props(into)] src: String,
    #[props(into)] alt: String,
    width: u32,
    height: u32,
    #[props(default, into)] class: String,
) -> Element {
    rsx! {
        img {
            src: "{src}",
            alt: "{alt}",
            width: "{width}",
            height: "{height}",
            "decoding": "async",
            class: "{class}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn internal_text_link_has_no_target() {
        let html = render(|| rsx! { TextLink { href: "/about", "About" } });

        assert!(html.contains(r#"href="/about""#));
        assert!(!html.contains("target="));
        assert!(!html.contains("rel="));
    }

    #[test]
    fn external_text_link_opens_new_context() {
        let html = render(|| rsx! { TextLink { href: "https://example.com", external: true, "Docs" } });

        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn button_link_is_a_single_anchor() {
        let html = render(|| rsx! { ButtonLink { href: "/go", size: ButtonSize::Lg, "Go" } });

        assert_eq!(html.matches("<a").count(), 1);
        assert!(!html.contains("<button"));
        assert!(html.contains("button-lg"));
    }
}
