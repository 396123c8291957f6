#![cfg(target_arch = "wasm32")]
use feis_board_wasm::app::App;
use feis_board_wasm::domain::chart::PLACEHOLDER_TITLE;
use feis_board_wasm::domain::learning::{FaqChip, NO_ANSWER, answer_for_chip};
use feis_board_wasm::presentation::FaqWidget;
use gloo_timers::future::sleep;
use leptos::*;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn container() -> HtmlElement {
    let document = gloo::utils::document();
    let root = document
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    root
}

fn mount_page() -> HtmlElement {
    let root = container();
    mount_to(root.clone(), || view! { <App /> });
    root
}

fn all(root: &Element, selector: &str) -> Vec<Element> {
    let list = root.query_selector_all(selector).unwrap();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|node| node.dyn_into::<Element>().unwrap())
        .collect()
}

fn one(root: &Element, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

fn text(root: &Element, selector: &str) -> String {
    one(root, selector).text_content().unwrap_or_default()
}

fn click(root: &Element, selector: &str) {
    one(root, selector).dyn_into::<HtmlElement>().unwrap().click();
}

async fn settle() {
    sleep(Duration::from_millis(10)).await;
}

fn submit_chat(root: &Element, value: &str) {
    one(root, ".chat-input").dyn_into::<HtmlInputElement>().unwrap().set_value(value);
    one(root, ".chat-form")
        .dyn_into::<HtmlFormElement>()
        .unwrap()
        .request_submit()
        .unwrap();
}

#[wasm_bindgen_test]
async fn initial_load_shows_board_and_default_chart() {
    let root = mount_page();
    settle().await;

    assert_eq!(all(&root, ".table-row").len(), 5);
    assert_eq!(text(&root, ".chart-title"), "S&P 500");
    assert_eq!(text(&root, ".chart-ticker"), "^GSPC");
    assert_eq!(all(&root, ".chart-bar").len(), 8);
    assert_eq!(all(&root, ".chart-tag").len(), 3);

    let active = all(&root, ".filter-btn.active");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].get_attribute("data-filter").as_deref(), Some("all"));

    assert_eq!(text(&root, ".table-row .table-value"), "5 098");
    assert!(one(&root, ".table-row .table-change").class_list().contains("neg"));
    assert_eq!(all(&root, ".workshop-card").len(), 4);
}

#[wasm_bindgen_test]
async fn filtering_out_the_selection_resets_the_chart() {
    let root = mount_page();
    settle().await;

    click(&root, ".filter-btn[data-filter='crypto']");
    settle().await;

    assert_eq!(all(&root, ".table-row").len(), 2);
    assert_eq!(text(&root, ".chart-title"), PLACEHOLDER_TITLE);
    assert_eq!(text(&root, ".chart-ticker"), "");
    assert!(all(&root, ".chart-bar").is_empty());
    assert!(all(&root, ".chart-tag").is_empty());
    let active = all(&root, ".filter-btn.active");
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].get_attribute("data-filter").as_deref(), Some("crypto"));

    click(&root, ".filter-btn[data-filter='all']");
    settle().await;
    assert_eq!(all(&root, ".table-row").len(), 5);
    assert_eq!(text(&root, ".chart-title"), PLACEHOLDER_TITLE);
}

#[wasm_bindgen_test]
async fn clicking_a_row_selects_it() {
    let root = mount_page();
    settle().await;

    click(&root, ".table-row[data-asset-id='bitcoin']");
    settle().await;

    assert_eq!(text(&root, ".chart-title"), "Bitcoin");
    assert_eq!(text(&root, ".chart-ticker"), "BTC");
    assert_eq!(all(&root, ".chart-tag").len(), 2);
    let bars = all(&root, ".chart-bar");
    assert_eq!(bars.len(), 8);
    let style = bars[7].get_attribute("style").unwrap_or_default();
    assert!(style.contains("scaleY(1)"), "{style}");
}

#[wasm_bindgen_test]
async fn chat_answers_after_a_delay() {
    let root = mount_page();
    settle().await;

    submit_chat(&root, "Un ETF pour commencer ?");
    settle().await;
    assert_eq!(all(&root, ".chat-message.user").len(), 1);
    assert!(all(&root, ".chat-message.bot").is_empty());
    let input = one(&root, ".chat-input").dyn_into::<HtmlInputElement>().unwrap();
    assert_eq!(input.value(), "");

    sleep(Duration::from_millis(400)).await;
    let bot = all(&root, ".chat-message.bot .chat-bubble");
    assert_eq!(bot.len(), 1);
    assert!(bot[0].text_content().unwrap_or_default().contains("Lecture FEIS – ETF"));
}

#[wasm_bindgen_test]
async fn chat_ignores_blank_input_and_falls_back_on_unknown_words() {
    let root = mount_page();
    settle().await;

    submit_chat(&root, "   ");
    settle().await;
    assert!(all(&root, ".chat-message").is_empty());
    let input = one(&root, ".chat-input").dyn_into::<HtmlInputElement>().unwrap();
    assert_eq!(input.value(), "   ");

    submit_chat(&root, "asdf1234");
    sleep(Duration::from_millis(400)).await;
    let bot = all(&root, ".chat-message.bot .chat-bubble");
    assert_eq!(bot.len(), 1);
    assert!(bot[0].text_content().unwrap_or_default().contains("Reformule avec un mot clé"));
}

#[wasm_bindgen_test]
async fn chat_log_follows_the_latest_message() {
    let root = mount_page();
    settle().await;

    for question in ["livret ?", "crypto ?", "risque ?", "horizon ?", "etf ?"] {
        submit_chat(&root, question);
    }
    sleep(Duration::from_millis(500)).await;

    assert_eq!(all(&root, ".chat-message").len(), 10);
    let log = one(&root, ".chat-log");
    assert!(log.scroll_height() > log.client_height(), "log should overflow");
    assert!(
        log.scroll_top() + log.client_height() >= log.scroll_height() - 1,
        "scroll_top={} client_height={} scroll_height={}",
        log.scroll_top(),
        log.client_height(),
        log.scroll_height()
    );
}

#[wasm_bindgen_test]
async fn faq_chip_replaces_the_answer_panel() {
    let root = mount_page();
    settle().await;

    click(&root, ".faq-chip[data-faq='crypto']");
    settle().await;

    let expected = gloo::utils::document().create_element("div").unwrap();
    expected.set_inner_html(answer_for_chip("crypto"));
    assert_eq!(one(&root, ".faq-answer").inner_html(), expected.inner_html());
}

static CHIPS_WITH_UNKNOWN: &[FaqChip] = &[
    FaqChip { key: "etf", label: "ETF" },
    FaqChip { key: "immobilier", label: "Immobilier ?" },
];

#[wasm_bindgen_test]
async fn unknown_faq_chip_shows_the_placeholder() {
    let root = container();
    mount_to(root.clone(), || view! { <FaqWidget chips=CHIPS_WITH_UNKNOWN /> });
    settle().await;

    click(&root, ".faq-chip[data-faq='etf']");
    settle().await;
    click(&root, ".faq-chip[data-faq='immobilier']");
    settle().await;

    assert_eq!(text(&root, ".faq-answer"), NO_ANSWER);
}
