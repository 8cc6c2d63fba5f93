//! Visibility of the add-recipe section.

/// Follow-up the page performs after a visibility change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEffect {
    /// The section just became visible; scroll it into view.
    Reveal,
    Hide,
}

/// Show/hide state of the add-recipe section.
///
/// The page's `hidden` class is the source of truth; build one of these from
/// it, apply the transition, then write `is_hidden()` back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Panel {
    hidden: bool,
}

impl Panel {
    pub fn from_hidden(hidden: bool) -> Self {
        Self { hidden }
    }

    pub fn is_hidden(self) -> bool {
        self.hidden
    }

    pub fn toggle(&mut self) -> PanelEffect {
        self.hidden = !self.hidden;
        if self.hidden {
            PanelEffect::Hide
        } else {
            PanelEffect::Reveal
        }
    }

    /// Cancel and successful submission both close the section.
    pub fn close(&mut self) {
        self.hidden = true;
    }
}

impl Default for Panel {
    fn default() -> Self {
        Self::from_hidden(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_hidden_reveals() {
        let mut panel = Panel::default();
        assert_eq!(panel.toggle(), PanelEffect::Reveal);
        assert!(!panel.is_hidden());
        assert_eq!(panel.toggle(), PanelEffect::Hide);
        assert!(panel.is_hidden());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut panel = Panel::from_hidden(false);
        panel.close();
        panel.close();
        assert!(panel.is_hidden());
    }
}
