//! Session capabilities and document kinds
//!
//! A search session is one generic type. What it may do beyond plain searching
//! is decided by a zero-sized capability marker, and what it searches by the
//! document kind it was seeded with.

use std::fmt;

use cd_queries::filters::fields::CLASSIFICATION;
use serde::{Deserialize, Serialize};

/// Capability marker of a search session
pub trait Capability: Send + Sync + 'static {}

/// Sessions that may include draft and retired documents
pub trait PreviewCapable: Capability {}

/// Published documents only
#[derive(Debug, Clone, Copy, Default)]
pub struct Published;

/// Draft and retired documents on request
#[derive(Debug, Clone, Copy, Default)]
pub struct Preview;

/// Draft and retired documents, protected content, and rendering contexts
#[derive(Debug, Clone, Copy, Default)]
pub struct ContentPreview;

impl Capability for Published {}
impl Capability for Preview {}
impl Capability for ContentPreview {}

impl PreviewCapable for Preview {}
impl PreviewCapable for ContentPreview {}

/// Kind of document a session searches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    /// Any document, no classification filter
    #[default]
    Document,
    Asset,
    Category,
    Content,
    ContentType,
}

impl DocumentKind {
    /// Classification value stored in the search index
    pub fn classification(&self) -> Option<&'static str> {
        match self {
            Self::Document => None,
            Self::Asset => Some("asset"),
            Self::Category => Some("category"),
            Self::Content => Some("content"),
            Self::ContentType => Some("content-type"),
        }
    }

    /// Raw filter a new session of this kind starts with
    pub fn seed_filter(&self) -> Option<String> {
        self.classification()
            .map(|value| format!("{}:{}", CLASSIFICATION, value))
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.classification().unwrap_or("document"))
    }
}
