//! Transport collaborator
//!
//! The session produces query strings; a transport turns them into requests
//! against the delivery API. Routing flags live on the transport because they
//! change the endpoint, not the query.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use cd_core::{CdResult, DeliveryConfig, SearchRoute};
use serde::{Deserialize, Serialize};

/// Raw search response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub data: SearchData,
}

/// Payload of a search response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchData {
    /// Total number of matching documents across all pages
    pub num_found: Option<u64>,
    /// Documents of the requested page
    pub documents: Option<Vec<serde_json::Value>>,
}

impl SearchResponse {
    pub fn new(num_found: u64, documents: Vec<serde_json::Value>) -> Self {
        Self {
            data: SearchData {
                num_found: Some(num_found),
                documents: Some(documents),
            },
        }
    }

    /// Decode a response body
    pub fn from_slice(body: &[u8]) -> CdResult<Self> {
        Ok(serde_json::from_slice(body)?)
    }
}

/// Request side of a delivery search
///
/// Flag setters take `&self`: one transport is shared by a session and the
/// follow-up sessions of its results, so implementors keep the flags behind
/// interior mutability.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchTransport: Send + Sync {
    /// Route requests through the preview host
    fn set_preview(&self, preview: bool);

    /// Search authenticated content
    fn set_protected_content(&self, protected_content: bool);

    /// Search rendering contexts instead of bare content
    fn set_complete_content_context(&self, complete_content_context: bool);

    /// Run a search with a serialized query string
    async fn search(&self, query: &str) -> CdResult<SearchResponse>;

    /// End the authenticated session
    async fn logout(&self) -> CdResult<()>;
}

/// Routing flags for transports to embed
///
/// Backs the flag setters of [`SearchTransport`] and resolves the search URL
/// of the next request.
#[derive(Debug, Default)]
pub struct RouteFlags {
    preview: AtomicBool,
    protected_content: AtomicBool,
    complete_content_context: AtomicBool,
}

impl RouteFlags {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_preview(&self, preview: bool) {
        self.preview.store(preview, Ordering::Relaxed);
    }

    pub fn set_protected_content(&self, protected_content: bool) {
        self.protected_content.store(protected_content, Ordering::Relaxed);
    }

    pub fn set_complete_content_context(&self, complete_content_context: bool) {
        self.complete_content_context
            .store(complete_content_context, Ordering::Relaxed);
    }

    /// Snapshot of the current flags
    pub fn route(&self) -> SearchRoute {
        SearchRoute {
            protected_content: self.protected_content.load(Ordering::Relaxed),
            complete_content_context: self.complete_content_context.load(Ordering::Relaxed),
            preview: self.preview.load(Ordering::Relaxed),
        }
    }

    /// Search URL for the current flags
    pub fn search_url(&self, config: &DeliveryConfig) -> String {
        self.route().search_url(config)
    }
}
