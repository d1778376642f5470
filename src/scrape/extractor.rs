//! Selector-driven extraction of repeated blocks
//!
//! A [`BlockExtractor`] finds every element matching a block selector and
//! reads a set of named fields from inside each one. Missing fields read as
//! empty strings; blocks come back in document order.

use crate::ConfigError;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// Parses a CSS selector, mapping failures to a configuration error
pub fn compile_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|e| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: format!("{:?}", e),
    })
}

/// How a field's value is read from its matched elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Concatenated text of every match
    Text,

    /// The named attribute of the first match
    Attribute(String),
}

#[derive(Debug, Clone)]
struct FieldSelector {
    name: String,
    selector: Selector,
    kind: FieldKind,
}

/// Named field values read from one block
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    values: HashMap<String, String>,
}

impl FieldMap {
    /// Value of a field, or `""` if the block did not have it
    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    /// Removes and returns a field's value, or `""`
    pub fn take(&mut self, name: &str) -> String {
        self.values.remove(name).unwrap_or_default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }
}

/// Extracts one [`FieldMap`] per repeated block
///
/// # Example
///
/// ```
/// use du_harvest::scrape::BlockExtractor;
///
/// let html = r#"<ul><li class="item"><b>One</b></li><li class="item"></li></ul>"#;
/// let extractor = BlockExtractor::new(".item")
///     .unwrap()
///     .text_field("name", "b")
///     .unwrap();
/// let blocks = extractor.extract(html);
/// assert_eq!(blocks.len(), 2);
/// assert_eq!(blocks[0].get("name"), "One");
/// assert_eq!(blocks[1].get("name"), "");
/// ```
#[derive(Debug, Clone)]
pub struct BlockExtractor {
    block: Selector,
    fields: Vec<FieldSelector>,
}

impl BlockExtractor {
    pub fn new(block: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            block: compile_selector(block)?,
            fields: Vec::new(),
        })
    }

    /// Adds a field read as trimmed text
    pub fn text_field(self, name: &str, selector: &str) -> Result<Self, ConfigError> {
        self.field(name, selector, FieldKind::Text)
    }

    /// Adds a field read from an attribute
    pub fn attr_field(self, name: &str, selector: &str, attr: &str) -> Result<Self, ConfigError> {
        self.field(name, selector, FieldKind::Attribute(attr.to_string()))
    }

    fn field(mut self, name: &str, selector: &str, kind: FieldKind) -> Result<Self, ConfigError> {
        self.fields.push(FieldSelector {
            name: name.to_string(),
            selector: compile_selector(selector)?,
            kind,
        });
        Ok(self)
    }

    /// Runs the extraction over a raw HTML document
    pub fn extract(&self, html: &str) -> Vec<FieldMap> {
        let document = Html::parse_document(html);

        document
            .select(&self.block)
            .map(|block| {
                let mut map = FieldMap::default();
                for field in &self.fields {
                    map.insert(field.name.clone(), read_field(block, field));
                }
                map
            })
            .collect()
    }
}

fn read_field(block: ElementRef<'_>, field: &FieldSelector) -> String {
    match &field.kind {
        FieldKind::Text => block
            .select(&field.selector)
            .flat_map(|element| element.text())
            .collect::<String>()
            .trim()
            .to_string(),
        FieldKind::Attribute(attr) => block
            .select(&field.selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(|value| value.trim().to_string())
            .unwrap_or_default(),
    }
}

/// Reads the trimmed text of every `selector` match across a whole document
pub fn extract_text(html: &str, selector: &Selector) -> String {
    let document = Html::parse_document(html);

    document
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}
