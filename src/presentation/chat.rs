use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;

use crate::application::{ChatMessage, ChatTranscript, Sender};
use crate::domain::logging::LogComponent;
use crate::{log_debug, log_trace};

/// Beginner chat: keyword-matched canned answers, each delivered after `reply_delay`.
#[component]
pub fn ChatWidget(reply_delay: Duration) -> impl IntoView {
    let transcript = create_rw_signal(ChatTranscript::new());
    let input_ref = create_node_ref::<html::Input>();
    let log_ref = create_node_ref::<html::Div>();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get() else {
            return;
        };
        let question = input.value();
        if question.trim().is_empty() {
            return;
        }
        let Some(reply) = transcript.try_update(|t| t.submit(&question)).flatten() else {
            return;
        };
        input.set_value("");

        // Equal delays keep replies in submission order.
        wasm_bindgen_futures::spawn_local(async move {
            sleep(reply_delay).await;
            log_trace!(LogComponent::Presentation("Chat"), "Delivering reply for topic {:?}", reply.topic);
            if transcript.try_update(|t| t.deliver(reply)).is_none() {
                log_debug!(LogComponent::Presentation("Chat"), "Chat widget disposed before reply");
            }
        });
    };

    let widget = view! {
        <section id="chat" class="chat-section reveal">
            <div class="section-heading">
                <h2>"Chat débutant"</h2>
                <p class="section-sub">
                    "Pose une question avec tes mots : livret, ETF, crypto, risque, horizon..."
                </p>
            </div>
            <div id="chat-log" class="chat-log" node_ref=log_ref>
                <For
                    each=move || transcript.with(|t| t.messages().to_vec())
                    key=|message| message.id
                    children=move |message| view! { <ChatLine message=message /> }
                />
            </div>
            <form id="chat-form" class="chat-form" on:submit=on_submit>
                <input
                    id="chat-input"
                    class="chat-input"
                    type="text"
                    autocomplete="off"
                    placeholder="Ex : livret ou ETF pour commencer ?"
                    node_ref=input_ref
                />
                <button type="submit" class="chat-send">"Envoyer"</button>
            </form>
        </section>
    };

    create_effect(move |_| {
        transcript.with(|t| t.messages().len());
        if let Some(log) = log_ref.get() {
            // After the next frame, once the new line is laid out.
            request_animation_frame(move || log.set_scroll_top(log.scroll_height()));
        }
    });

    widget
}

#[component]
fn ChatLine(message: ChatMessage) -> impl IntoView {
    let class = format!("chat-message {}", message.sender.css_class());
    let bubble = match message.sender {
        Sender::User => view! { <div class="chat-bubble">{message.text}</div> },
        Sender::Bot => view! { <div class="chat-bubble" inner_html=message.text></div> },
    };
    view! { <div class=class>{bubble}</div> }
}
