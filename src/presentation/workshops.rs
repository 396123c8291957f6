use leptos::*;

use crate::domain::learning::{WORKSHOPS, Workshop};

#[component]
pub fn WorkshopCarousel() -> impl IntoView {
    view! {
        <section id="ateliers" class="workshops-section reveal">
            <div class="section-heading">
                <h2>"Ateliers du club"</h2>
                <p class="section-sub">"Fais défiler pour voir les formats proposés."</p>
            </div>
            <div id="workshop-carousel" class="workshop-carousel">
                {WORKSHOPS.iter().map(|workshop| view! { <WorkshopCard workshop=workshop /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn WorkshopCard(workshop: &'static Workshop) -> impl IntoView {
    view! {
        <article class="workshop-card">
            <div>
                <p class="workshop-tag">{workshop.tag}</p>
                <p class="workshop-title">{workshop.title}</p>
                <p class="workshop-text" inner_html=workshop.text></p>
            </div>
        </article>
    }
}
