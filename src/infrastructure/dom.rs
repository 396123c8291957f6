//! Browser adapters used outside of Leptos components: page configuration,
//! smooth scrolling and the one-shot reveal observer.

use gloo::utils::{document, window};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions,
};

use crate::domain::{
    config::SiteConfig,
    errors::{AppError, AppResult, browser_error},
    logging::{LogComponent, get_logger},
};
use crate::{log_error, log_trace};

pub const CONFIG_ELEMENT_ID: &str = "site-config";
pub const REVEAL_SELECTOR: &str = ".reveal";
pub const VISIBLE_CLASS: &str = "visible";

/// Read the optional `<script id="site-config" type="application/json">` block.
/// No block means defaults; a malformed block is an error.
pub fn read_site_config() -> AppResult<SiteConfig> {
    match document().get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => SiteConfig::from_json(&element.text_content().unwrap_or_default()),
        None => Ok(SiteConfig::default()),
    }
}

/// Document-relative top for a target so that it lands `offset_px` below the viewport top.
pub fn scroll_target_top(rect_top: f64, scroll_y: f64, offset_px: f64) -> f64 {
    rect_top + scroll_y - offset_px
}

/// Smooth-scroll to the first element matching `selector`.
/// Returns `Ok(false)` when nothing matches.
pub fn scroll_to_selector(selector: &str, offset_px: f64) -> AppResult<bool> {
    let Some(target) = document()
        .query_selector(selector)
        .map_err(|e| browser_error("querySelector", e))?
    else {
        get_logger().debug(
            LogComponent::Infrastructure("Scroll"),
            &format!("No scroll target for '{}'", selector),
        );
        return Ok(false);
    };

    let window = window();
    let scroll_y = window.scroll_y().map_err(|e| browser_error("scrollY", e))?;
    let top = scroll_target_top(target.get_bounding_client_rect().top(), scroll_y, offset_px);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(true)
}

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Adds [`VISIBLE_CLASS`] to each observed element the first time it crosses
/// the threshold, then stops observing it.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: ObserverCallback,
}

impl RevealObserver {
    pub fn new(threshold: f64) -> AppResult<Self> {
        let callback: ObserverCallback = Closure::wrap(Box::new(
            |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Err(e) = target.class_list().add_1(VISIBLE_CLASS) {
                        log_error!(LogComponent::Infrastructure("Reveal"), "classList.add failed: {:?}", e);
                    }
                    observer.unobserve(&target);
                    log_trace!(LogComponent::Infrastructure("Reveal"), "Revealed #{}", target.id());
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| browser_error("IntersectionObserver", e))?;

        Ok(Self { observer, _callback: callback })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    /// Observe every element matching `selector`; returns how many were found.
    pub fn observe_all(&self, selector: &str) -> AppResult<u32> {
        let nodes = document()
            .query_selector_all(selector)
            .map_err(|e| browser_error("querySelectorAll", e))?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                self.observe(&element);
                observed += 1;
            }
        }
        if observed == 0 {
            return Err(AppError::ElementNotFound(selector.to_string()));
        }
        Ok(observed)
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
