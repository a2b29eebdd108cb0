//! Field Lists
//!
//! The `fl` parameter selects which stored fields each result carries.

use serde::{Deserialize, Serialize};

/// Every stored field
pub const ALL_FIELDS: &str = "*";

/// Field-projection macro embedding the JSON document in each record
pub const DOCUMENT_FIELD: &str = "document:[json]";

/// Ordered list of returned fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldList {
    names: Vec<String>,
}

impl FieldList {
    /// Create a new empty field list
    pub fn new() -> Self {
        Self { names: vec![] }
    }

    /// All fields plus the embedded document
    pub fn default_document() -> Self {
        Self::new().with(ALL_FIELDS).with(DOCUMENT_FIELD)
    }

    pub fn add(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.push(name.into());
        self
    }

    /// Add a field (builder pattern)
    pub fn with(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Remove a field by name
    pub fn remove(&mut self, name: &str) {
        self.names.retain(|n| n != name);
    }
}
