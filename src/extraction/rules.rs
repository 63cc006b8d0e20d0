// src/extraction/rules.rs
//! Named, independently testable lookups of one field inside a job fragment

use anyhow::Result;
use scraper::{ElementRef, Selector};

/// Recovers the text of one field from a job fragment.
///
/// `None` means the element is missing or no longer has the expected shape.
pub trait FieldRule {
    fn name(&self) -> &'static str;
    fn extract(&self, fragment: ElementRef<'_>) -> Option<String>;
}

pub fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| anyhow::anyhow!("Invalid selector '{}': {:?}", selector, e))
}

/// Collapses runs of whitespace, including line breaks, into single spaces
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Picks the `nth` match of a selector, optionally descends into a nested
/// element, and optionally keeps only the text before a delimiter.
pub struct SelectorRule {
    name: &'static str,
    selector: Selector,
    nth: usize,
    inner: Option<Selector>,
    before: Option<&'static str>,
}

impl SelectorRule {
    pub fn new(name: &'static str, selector: &str) -> Result<Self> {
        Ok(Self {
            name,
            selector: parse_selector(selector)?,
            nth: 0,
            inner: None,
            before: None,
        })
    }

    pub fn nth(mut self, nth: usize) -> Self {
        self.nth = nth;
        self
    }

    pub fn within(mut self, inner: &str) -> Result<Self> {
        self.inner = Some(parse_selector(inner)?);
        Ok(self)
    }

    pub fn before(mut self, delimiter: &'static str) -> Self {
        self.before = Some(delimiter);
        self
    }
}

impl FieldRule for SelectorRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn extract(&self, fragment: ElementRef<'_>) -> Option<String> {
        let element = fragment.select(&self.selector).nth(self.nth)?;
        let element = match &self.inner {
            Some(inner) => element.select(inner).next()?,
            None => element,
        };

        let text = element_text(element);
        let text = match self.before {
            Some(delimiter) => text.split(delimiter).next().unwrap_or_default().trim().to_string(),
            None => text,
        };

        (!text.is_empty()).then_some(text)
    }
}
