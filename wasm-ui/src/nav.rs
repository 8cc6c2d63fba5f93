//! Smooth scrolling for in-page anchors.

use gloo::utils::document;
use tastetales::markup::IN_PAGE_ANCHORS;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::dom;

fn scroll_to(selector: &str) {
    match document().query_selector(selector) {
        Ok(Some(target)) => dom::scroll_smoothly(&target),
        Ok(None) => log::warn!("no element matches anchor {}", selector),
        Err(err) => log::warn!("bad anchor {}: {}", selector, dom::js_message(&err)),
    }
}

/// Bind every anchor present at load time; returns how many were bound.
pub fn bind() -> u32 {
    let anchors = match document().query_selector_all(IN_PAGE_ANCHORS) {
        Ok(anchors) => anchors,
        Err(err) => {
            log::warn!("anchor lookup failed: {}", dom::js_message(&err));
            return 0;
        }
    };

    let mut bound = 0;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            if let Some(selector) = link.get_attribute("href") {
                scroll_to(&selector);
            }
        });
        bound += 1;
    }
    bound
}
