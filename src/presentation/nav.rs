use leptos::*;

use crate::domain::logging::{LogComponent, get_logger};
use crate::infrastructure::dom::scroll_to_selector;

/// (caption, target selector) pairs of the top navigation.
pub const NAV_TARGETS: &[(&str, &str)] = &[
    ("Board", "#board"),
    ("Chat", "#chat"),
    ("FAQ", "#faq"),
    ("Ateliers", "#ateliers"),
];

fn scroll_to(target: &'static str, offset_px: f64) {
    match scroll_to_selector(target, offset_px) {
        Ok(true) => {}
        Ok(false) => get_logger().debug(
            LogComponent::Presentation("Nav"),
            &format!("Scroll target '{}' not on page", target),
        ),
        Err(err) => get_logger().warn(LogComponent::Presentation("Nav"), &err.to_string()),
    }
}

#[component]
fn ScrollButton(
    target: &'static str,
    offset_px: f64,
    css_class: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button type="button" class=css_class data-scroll=target on:click=move |_| scroll_to(target, offset_px)>
            {children()}
        </button>
    }
}

#[component]
pub fn NavBar(offset_px: f64) -> impl IntoView {
    view! {
        <header class="nav-bar">
            <span class="nav-brand">"FEIS"</span>
            <nav class="nav-links">
                {NAV_TARGETS
                    .iter()
                    .map(|(label, target)| {
                        view! {
                            <ScrollButton target=*target offset_px=offset_px css_class="nav-link">
                                {*label}
                            </ScrollButton>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}

#[component]
pub fn Hero(offset_px: f64) -> impl IntoView {
    view! {
        <section class="hero reveal">
            <p class="hero-kicker">"Club finance étudiant"</p>
            <h1>"Comprendre les marchés sans jargon"</h1>
            <p class="hero-text">
                "Un board pédagogique, un chat pour débuter et des ateliers pour relier "
                "actualité, indices et construction de portefeuille."
            </p>
            <div class="hero-actions">
                <ScrollButton target="#board" offset_px=offset_px css_class="cta primary">
                    "Voir le board"
                </ScrollButton>
                <ScrollButton target="#chat" offset_px=offset_px css_class="cta">
                    "Poser une question"
                </ScrollButton>
            </div>
        </section>
    }
}
