//! The page model.
//!
//! A [`Document`] is the in-memory stand-in for the hosting page: an ordered
//! collection of identified elements whose text content the load pipeline may
//! overwrite. Lookup mirrors `querySelector` restricted to id selectors, which
//! is the only form the page ever uses.

use thiserror::Error;

/// Error raised when a selector matches nothing in the document.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("no element matches selector {selector:?}")]
pub struct NoMatchError {
    pub selector: String,
}

/// A single identified element with mutable text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    text: String,
}

impl Element {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The element's current text content.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

/// An in-memory page: the elements the script can see and mutate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element during page construction.
    #[must_use]
    pub fn with_element(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.elements.push(Element::new(id, text));
        self
    }

    /// Find the first element matching an id selector (`#id`).
    ///
    /// Selectors without a leading `#` match nothing; the page model only
    /// indexes elements by id.
    #[must_use]
    pub fn query_selector(&self, selector: &str) -> Option<&Element> {
        let id = selector.strip_prefix('#')?;
        self.elements.iter().find(|e| e.id == id)
    }

    fn query_selector_mut(&mut self, selector: &str) -> Option<&mut Element> {
        let id = selector.strip_prefix('#')?;
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// Overwrite the text content of the first element matching `selector`.
    pub fn set_text(
        &mut self,
        selector: &str,
        text: impl Into<String>,
    ) -> Result<(), NoMatchError> {
        match self.query_selector_mut(selector) {
            Some(element) => {
                element.text = text.into();
                Ok(())
            }
            None => Err(NoMatchError {
                selector: selector.to_string(),
            }),
        }
    }

    /// Convenience read-back of a matching element's text content.
    #[must_use]
    pub fn text_of(&self, selector: &str) -> Option<&str> {
        self.query_selector(selector).map(Element::text)
    }
}
