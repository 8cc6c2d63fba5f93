//! Search box: debounced typing and Enter navigate to the search page.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use tastetales::markup::SEARCH_INPUT;
use tastetales::search::{debounced_target, enter_target};
use tastetales::Debounce;
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, KeyboardEvent};

use crate::dom;

pub fn bind(delay_ms: u32) -> Option<()> {
    let input: HtmlInputElement = dom::by_id(SEARCH_INPUT)?;
    let debounce: Rc<RefCell<Debounce<Timeout>>> = Rc::new(RefCell::new(Debounce::new()));

    {
        let debounce = debounce.clone();
        let field = input.clone();
        dom::listen(&input, "input", move |_| {
            // Dropping the previous Timeout cancels it.
            match debounced_target(&field.value()) {
                Some(url) => {
                    let timer = Timeout::new(delay_ms, move || dom::navigate(&url));
                    debounce.borrow_mut().schedule(timer);
                }
                None => debounce.borrow_mut().cancel(),
            }
        });
    }

    let field = input.clone();
    dom::listen(&input, "keydown", move |event| {
        let is_enter = event
            .dyn_ref::<KeyboardEvent>()
            .is_some_and(|key| key.key() == "Enter");
        if is_enter {
            event.prevent_default();
            debounce.borrow_mut().cancel();
            dom::navigate(&enter_target(&field.value()));
        }
    });

    Some(())
}
