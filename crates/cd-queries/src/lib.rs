//! # cd-queries
//!
//! Solr query model for Content Delivery RS.
//!
//! This crate holds the accumulated state of a delivery search request and
//! turns it into the query string the search endpoint expects.
//!
//! ## Structure
//!
//! - `encoding` - URI-component encoding and Solr value escaping
//! - `filters` - `fq` clauses and combined filter groups
//! - `sorts` - Sort criteria for the `sort` parameter
//! - `fields` - The `fl` field list
//! - `query` - The `Query` value shared by a search session
//! - `builder` - Borrowed builder that edits and serializes a `Query`
//!
//! ## Example
//!
//! ```
//! use cd_queries::{Query, QueryBuilder, SortDirection};
//!
//! let mut query = Query::new();
//! let mut builder = QueryBuilder::new(&mut query);
//! builder
//!     .add_search_term("*:*")
//!     .add_filter("name", "\"Hello\"")
//!     .add_sort("lastModified", SortDirection::Asc);
//!
//! assert_eq!(
//!     builder.serialize(),
//!     "q=*:*&sort=lastModified%20asc&fq=name:%22Hello%22&fl=*&fl=document:[json]"
//! );
//! ```

pub mod encoding;
pub mod filters;
pub mod sorts;
pub mod fields;
pub mod query;
pub mod builder;

// Re-exports for convenience
pub use encoding::{encode_component, escape_value};
pub use filters::{FilterItem, FilterOperator, FilterSet};
pub use sorts::{SortCriterion, SortDirection, SortOrder};
pub use fields::{FieldList, ALL_FIELDS, DOCUMENT_FIELD};
pub use query::Query;
pub use builder::QueryBuilder;
