//! Link click classification.

/// Modifier keys held during a click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickModifiers {
    /// Cmd on macOS, the Windows key elsewhere.
    pub meta: bool,
    pub ctrl: bool,
}

impl ClickModifiers {
    /// Whether the user asked the browser to open the link in a new tab.
    pub fn opens_new_tab(self) -> bool {
        self.meta || self.ctrl
    }
}

/// What a link click turned into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkOutcome {
    /// Navigated in place: the default action must be prevented.
    Handled,
    /// Left to the browser (new tab); application state is untouched.
    Default,
}

impl LinkOutcome {
    pub fn classify(modifiers: ClickModifiers) -> Self {
        if modifiers.opens_new_tab() {
            Self::Default
        } else {
            Self::Handled
        }
    }
}
