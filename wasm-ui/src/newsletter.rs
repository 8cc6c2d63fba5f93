use tastetales::markup::NEWSLETTER_FORM;
use tastetales::newsletter::confirmation;
use wasm_bindgen::JsCast;
use web_sys::{HtmlFormElement, HtmlInputElement};

use crate::dom;

pub fn bind() -> Option<()> {
    let form: HtmlFormElement = dom::by_id(NEWSLETTER_FORM)?;
    let target = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let email = target
            .query_selector("input")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();
        gloo::dialogs::alert(&confirmation(&email));
        target.reset();
    });
    Some(())
}
