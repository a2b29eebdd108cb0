//! # cd-search
//!
//! Delivery search sessions for Content Delivery RS.
//!
//! ## Features
//!
//! - One generic `Documents` session for every document kind
//! - Draft and retired documents through the preview host
//! - Protected content and rendering-context search for content items
//! - Result pages that request their neighbours without touching the original session
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use cd_search::{DeliverySearch, SearchTransport};
//!
//! # async fn run(transport: impl Fn() -> Arc<dyn SearchTransport> + Send + Sync + 'static) -> cd_core::CdResult<()> {
//! let search = DeliverySearch::new(transport);
//!
//! let mut assets = search.assets();
//! assets.filter_by_tags(["banner"]).include_draft(true).set_row_limit(20);
//!
//! let page = assets.get().await?;
//! println!("{} assets", page.num_found());
//!
//! let next = page.next_page().await?;
//! # let _ = next;
//! # Ok(())
//! # }
//! ```

pub mod capability;
pub mod documents;
pub mod factory;
pub mod result;
pub mod transport;
pub mod visibility;

pub use capability::{Capability, ContentPreview, DocumentKind, Preview, PreviewCapable, Published};
pub use documents::{Documents, MATCH_ALL};
pub use factory::DeliverySearch;
pub use result::SearchResults;
pub use transport::{RouteFlags, SearchData, SearchResponse, SearchTransport};
pub use visibility::Visibility;
