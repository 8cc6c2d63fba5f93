//! Small helpers over the page document.

use gloo::events::{EventListener, EventListenerOptions};
use gloo::utils::{document, window};
use tastetales::Component;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement,
    ScrollBehavior, ScrollIntoViewOptions,
};

/// Element with the given id, if present and of the expected type.
pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document().get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn present(id: &str) -> bool {
    document().get_element_by_id(id).is_some()
}

/// Whether all of a component's markup is on this page.
pub fn bindable(component: Component) -> bool {
    match component.check(present) {
        Ok(()) => true,
        Err(missing) => {
            log::debug!("not binding: {}", missing);
            false
        }
    }
}

/// Current value of an input, textarea or select; empty if none matches.
pub fn field_value(id: &str) -> String {
    let Some(element) = document().get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        area.value()
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        select.value()
    } else {
        String::new()
    }
}

/// Attach a listener for the lifetime of the page.
///
/// Listeners are registered non-passive so handlers may call
/// `prevent_default`.
pub fn listen<F>(target: &EventTarget, event: &'static str, handler: F)
where
    F: FnMut(&Event) + 'static,
{
    EventListener::new_with_options(
        target,
        event,
        EventListenerOptions::enable_prevent_default(),
        handler,
    )
    .forget();
}

pub fn navigate(url: &str) {
    log::info!("navigating to {}", url);
    if let Err(err) = window().location().set_href(url) {
        log::error!("navigation to {} failed: {}", url, js_message(&err));
    }
}

pub fn scroll_smoothly(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Readable text for a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value
        .as_string()
        .unwrap_or_else(|| format!("{:?}", value))
}
