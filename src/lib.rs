use leptos::*;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::domain::config::SiteConfig;
use crate::domain::logging::{LogComponent, LogLevel, get_logger, init_logger, init_time_provider};
use crate::infrastructure::dom::{REVEAL_SELECTOR, RevealObserver, read_site_config};
use crate::infrastructure::services::{BrowserTimeProvider, ConsoleLogger};

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

thread_local! {
    // Lives for the whole page; dropping it would disconnect the observer.
    static REVEAL_OBSERVER: RefCell<Option<RevealObserver>> = const { RefCell::new(None) };
}

/// Boot the page: logging, configuration, the Leptos tree, then reveal-on-scroll.
#[wasm_bindgen]
pub fn boot() {
    console_error_panic_hook::set_once();

    let config = read_site_config();
    let level = config.as_ref().map_or_else(|_| LogLevel::for_build(), |c| c.log_level);
    init_logger(Box::new(ConsoleLogger::new(level)));
    init_time_provider(Box::new(BrowserTimeProvider::new()));

    let config = config.unwrap_or_else(|err| {
        get_logger().warn(
            LogComponent::Presentation("Start"),
            &format!("{}; using defaults", err),
        );
        SiteConfig::default()
    });

    get_logger().info(
        LogComponent::Presentation("Start"),
        &format!("🚀 Mounting FEIS page (default asset '{}')", config.default_asset),
    );

    let threshold = config.reveal_threshold;
    mount_to_body(move || view! { <App config=config /> });
    install_reveal(threshold);
}

fn install_reveal(threshold: f64) {
    let installed = RevealObserver::new(threshold)
        .and_then(|observer| observer.observe_all(REVEAL_SELECTOR).map(|count| (observer, count)));

    match installed {
        Ok((observer, count)) => {
            get_logger().debug(
                LogComponent::Presentation("Reveal"),
                &format!("Observing {} sections", count),
            );
            REVEAL_OBSERVER.with(|slot| *slot.borrow_mut() = Some(observer));
        }
        Err(err) => get_logger().warn(LogComponent::Presentation("Reveal"), &err.to_string()),
    }
}
