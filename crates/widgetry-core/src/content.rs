//! Site content: navigation entries and the data each widget shows.
//!
//! Content is a TOML document embedded in the binary and validated once at
//! startup.

use std::collections::HashSet;

use serde::Deserialize;

use crate::accordion::AccordionItem;
use crate::dropdown::SelectOption;
use crate::error::ContentError;

/// A header link.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct NavEntry {
    pub path: String,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DropdownContent {
    pub label: String,
    pub options: Vec<SelectOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SearchContent {
    pub label: String,
    pub default_term: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SiteContent {
    pub nav: Vec<NavEntry>,
    #[serde(default)]
    pub accordion: Vec<AccordionItem>,
    pub dropdown: DropdownContent,
    pub search: SearchContent,
}

impl SiteContent {
    /// Parse and validate a content document.
    pub fn from_toml(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(entry) = self.nav.iter().find(|e| !e.path.starts_with('/')) {
            return Err(ContentError::InvalidNavPath(entry.path.clone()));
        }

        if self.dropdown.options.is_empty() {
            return Err(ContentError::NoOptions);
        }

        let mut seen = HashSet::new();
        for option in &self.dropdown.options {
            if !seen.insert(option.value.as_str()) {
                return Err(ContentError::DuplicateOption(option.value.clone()));
            }
        }

        Ok(())
    }

    /// The option selected before the user picks one.
    pub fn initial_option(&self) -> &SelectOption {
        // Non-empty after validation
        &self.dropdown.options[0]
    }
}
