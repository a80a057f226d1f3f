//! Accordion state: at most one expanded item.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    active: Option<usize>,
}

impl AccordionState {
    /// Title click. The clicked item becomes the expanded one; clicking the
    /// expanded item again leaves it expanded.
    pub fn activate(&mut self, index: usize) {
        self.active = Some(index);
    }

    pub fn active(&self) -> Option<usize> {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
