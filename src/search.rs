//! Search box policy: debounced typing and Enter both lead to the search page.

use crate::routes::search_page;

/// Quiet period before a typed query navigates.
pub const DEFAULT_DEBOUNCE_MS: u32 = 600;

/// Owner of at most one pending timer handle.
///
/// Scheduling a new handle drops the previous one. Timer handles that cancel
/// on drop (such as `gloo::timers::callback::Timeout`) therefore guarantee
/// that only the most recently scheduled action can fire.
#[derive(Debug)]
pub struct Debounce<H> {
    pending: Option<H>,
}

impl<H> Debounce<H> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Replace the pending handle. The old one, if any, is dropped.
    pub fn schedule(&mut self, handle: H) {
        if self.pending.replace(handle).is_some() {
            log::debug!("search debounce: superseded pending timer");
        }
    }

    /// Drop the pending handle without scheduling a new one.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl<H> Default for Debounce<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Where a debounced input should navigate once the quiet period elapses.
///
/// The value is trimmed when typed; an empty query goes nowhere.
pub fn debounced_target(value: &str) -> Option<String> {
    let query = value.trim();
    if query.is_empty() {
        None
    } else {
        Some(search_page(query))
    }
}

/// Where pressing Enter navigates. Unlike typing, an empty query still
/// navigates (to the search page with no results).
pub fn enter_target(value: &str) -> String {
    search_page(value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records its label when dropped, standing in for a cancel-on-drop timer.
    struct FakeTimer {
        label: &'static str,
        dropped: Rc<RefCell<Vec<&'static str>>>,
    }

    impl Drop for FakeTimer {
        fn drop(&mut self) {
            self.dropped.borrow_mut().push(self.label);
        }
    }

    #[test]
    fn test_debounced_target_trims_and_encodes() {
        assert_eq!(
            debounced_target("  green curry "),
            Some("/search?q=green%20curry".to_string())
        );
    }

    #[test]
    fn test_debounced_target_ignores_blank() {
        assert_eq!(debounced_target(""), None);
        assert_eq!(debounced_target("   \t"), None);
    }

    #[test]
    fn test_enter_target_navigates_even_when_empty() {
        assert_eq!(enter_target("   "), "/search?q=");
        assert_eq!(enter_target(" tacos"), "/search?q=tacos");
    }

    #[test]
    fn test_schedule_drops_previous_handle() {
        let dropped = Rc::new(RefCell::new(Vec::new()));
        let mut debounce = Debounce::new();

        debounce.schedule(FakeTimer {
            label: "first",
            dropped: dropped.clone(),
        });
        assert!(dropped.borrow().is_empty());

        debounce.schedule(FakeTimer {
            label: "second",
            dropped: dropped.clone(),
        });
        assert_eq!(*dropped.borrow(), vec!["first"]);
        assert!(debounce.is_pending());

        debounce.cancel();
        assert_eq!(*dropped.borrow(), vec!["first", "second"]);
        assert!(!debounce.is_pending());
    }
}
