//! Search results
//!
//! Results of one search, plus a copy of the session that produced them so
//! the neighbouring pages can be requested without touching the original.

use cd_core::{CdError, CdResult};
use serde::de::DeserializeOwned;

use crate::capability::{Capability, Published};
use crate::documents::Documents;
use crate::transport::SearchResponse;

/// One page of search results
#[derive(Debug, Clone)]
pub struct SearchResults<C: Capability = Published> {
    num_found: u64,
    documents: Vec<serde_json::Value>,
    follow_up: Documents<C>,
}

impl<C: Capability> SearchResults<C> {
    pub(crate) fn new(response: SearchResponse, follow_up: Documents<C>) -> Self {
        Self {
            num_found: response.data.num_found.unwrap_or(0),
            documents: response.data.documents.unwrap_or_default(),
            follow_up,
        }
    }

    /// Total number of matches across all pages
    pub fn num_found(&self) -> u64 {
        self.num_found
    }

    /// Documents of this page
    pub fn documents(&self) -> &[serde_json::Value] {
        &self.documents
    }

    pub fn into_documents(self) -> Vec<serde_json::Value> {
        self.documents
    }

    /// Decode the documents of this page into a typed model
    pub fn documents_as<T: DeserializeOwned>(&self) -> CdResult<Vec<T>> {
        self.documents
            .iter()
            .map(|document| serde_json::from_value(document.clone()).map_err(CdError::from))
            .collect()
    }

    /// The session these results continue from
    pub fn session(&self) -> &Documents<C> {
        &self.follow_up
    }

    /// Request the page after this one
    pub async fn next_page(&self) -> CdResult<SearchResults<C>> {
        let mut session = self.follow_up.clone();
        session.next_page();
        session.get().await
    }

    /// Request the page before this one
    pub async fn previous_page(&self) -> CdResult<SearchResults<C>> {
        let mut session = self.follow_up.clone();
        session.previous_page();
        session.get().await
    }
}
