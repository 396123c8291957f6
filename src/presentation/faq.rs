use leptos::*;

use crate::domain::{
    learning::faq::{self, FAQ_CHIPS, FAQ_PROMPT, FaqChip},
    logging::{LogComponent, get_logger},
};

/// Question chips and a single answer panel replaced on each click.
#[component]
pub fn FaqWidget(#[prop(default = FAQ_CHIPS)] chips: &'static [FaqChip]) -> impl IntoView {
    let answer = create_rw_signal(FAQ_PROMPT);

    let buttons = chips
        .iter()
        .map(|chip| {
            let key = chip.key;
            let on_click = move |_: ev::MouseEvent| {
                if faq::lookup(key).is_none() {
                    get_logger().debug(
                        LogComponent::Presentation("Faq"),
                        &format!("No answer registered for chip '{}'", key),
                    );
                }
                answer.set(faq::answer_for_chip(key));
            };
            view! {
                <button type="button" class="faq-chip" data-faq=key on:click=on_click>
                    {chip.label}
                </button>
            }
        })
        .collect_view();

    view! {
        <section id="faq" class="faq-section reveal">
            <div class="section-heading">
                <h2>"Questions fréquentes"</h2>
            </div>
            <div class="faq-chips">{buttons}</div>
            <div id="faq-answer" class="faq-answer" inner_html=move || answer.get()></div>
        </section>
    }
}
