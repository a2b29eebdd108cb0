//! Query Model
//!
//! The accumulated state of one search request. A `Query` is a plain value:
//! cloning it yields an independent snapshot that shares nothing with the
//! original.

use cd_core::PageWindow;
use serde::{Deserialize, Serialize};

use crate::fields::FieldList;
use crate::filters::FilterSet;
use crate::sorts::SortOrder;

/// Accumulated search request state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Full-text terms, joined with AND in `q`
    pub full_text: Vec<String>,
    /// `fq` clauses in wire form
    pub filters: FilterSet,
    /// `fl` entries
    pub fields: FieldList,
    /// `sort` criteria
    pub sorts: SortOrder,
    /// `rows`; omitted when unset
    pub row_limit: Option<u32>,
    /// `start`; omitted when unset or zero
    pub offset: Option<u32>,
}

impl Query {
    /// Seed query of a document session: all fields plus the embedded document
    pub fn new() -> Self {
        Self {
            fields: FieldList::default_document(),
            ..Self::empty()
        }
    }

    /// A query with nothing set at all
    pub fn empty() -> Self {
        Self {
            full_text: vec![],
            filters: FilterSet::new(),
            fields: FieldList::new(),
            sorts: SortOrder::new(),
            row_limit: None,
            offset: None,
        }
    }

    /// Row limit and offset as a paging window
    pub fn window(&self) -> PageWindow {
        PageWindow::new(self.row_limit, self.offset)
    }

    pub fn has_filters(&self) -> bool {
        !self.filters.is_empty()
    }

    pub fn has_full_text(&self) -> bool {
        !self.full_text.is_empty()
    }

    pub fn has_custom_sort(&self) -> bool {
        !self.sorts.is_empty()
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::new()
    }
}
