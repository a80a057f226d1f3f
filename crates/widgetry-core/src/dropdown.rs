//! Dropdown state.
//!
//! The dropdown opens and closes on clicks to its control and closes on any
//! document click that lands outside its bound region.

use serde::Deserialize;

/// One selectable option.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

/// Where a document-level click landed relative to the dropdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOrigin {
    Inside,
    Outside,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Click on the control.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// An option was picked; the menu closes.
    pub fn select(&mut self) {
        self.open = false;
    }

    /// Document click listener. Outside clicks close the menu.
    pub fn handle_document_click(&mut self, origin: ClickOrigin) {
        if origin == ClickOrigin::Outside {
            self.open = false;
        }
    }
}

/// Options to list in the menu: everything but the current selection.
pub fn menu_options<'a>(
    options: &'a [SelectOption],
    selected: &'a SelectOption,
) -> impl Iterator<Item = &'a SelectOption> + 'a {
    options.iter().filter(move |o| o.value != selected.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Vec<SelectOption> {
        [
            ("The Color Red", "red"),
            ("The Color Green", "green"),
            ("A Shade of Blue", "blue"),
        ]
        .into_iter()
        .map(|(label, value)| SelectOption {
            label: label.into(),
            value: value.into(),
        })
        .collect()
    }

    #[test]
    fn test_toggle() {
        let mut state = DropdownState::default();
        assert!(!state.is_open());
        state.toggle();
        assert!(state.is_open());
        state.toggle();
        assert!(!state.is_open());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut state = DropdownState::default();
        state.toggle();
        state.handle_document_click(ClickOrigin::Outside);
        assert!(!state.is_open());
    }

    #[test]
    fn test_inside_click_keeps_open() {
        let mut state = DropdownState::default();
        state.toggle();
        state.handle_document_click(ClickOrigin::Inside);
        assert!(state.is_open());
    }

    #[test]
    fn test_outside_click_when_closed_is_noop() {
        let mut state = DropdownState::default();
        state.handle_document_click(ClickOrigin::Outside);
        assert!(!state.is_open());
    }

    #[test]
    fn test_select_closes() {
        let mut state = DropdownState::default();
        state.toggle();
        state.select();
        assert!(!state.is_open());
    }

    #[test]
    fn test_menu_hides_selected() {
        let options = colors();
        let listed: Vec<&str> = menu_options(&options, &options[1])
            .map(|o| o.value.as_str())
            .collect();
        assert_eq!(listed, vec!["red", "blue"]);
    }
}
