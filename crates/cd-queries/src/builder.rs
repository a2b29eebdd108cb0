//! Query Builder
//!
//! Accumulates primitives on a borrowed [`Query`] and assembles the Solr query
//! string. The builder never owns the query: it is a short-lived handle over
//! state owned by the search session, so every edit is visible to both sides.

use cd_core::CdResult;

use crate::encoding::encode_component;
use crate::filters::{FilterItem, FilterOperator};
use crate::query::Query;
use crate::sorts::{SortCriterion, SortDirection};

/// Builder operating on a live query
#[derive(Debug)]
pub struct QueryBuilder<'q> {
    query: &'q mut Query,
}

impl<'q> QueryBuilder<'q> {
    pub fn new(query: &'q mut Query) -> Self {
        Self { query }
    }

    /// The live query
    pub fn query(&self) -> &Query {
        self.query
    }

    /// The live query, for direct edits the primitives do not cover
    pub fn query_mut(&mut self) -> &mut Query {
        self.query
    }

    // Filter methods

    /// Add `field:value` to `fq`, percent-encoding the value only
    pub fn add_filter(&mut self, field: &str, value: &str) -> &mut Self {
        self.query.filters.add(FilterItem::new(field, value));
        self
    }

    /// Add a clause to `fq` verbatim
    pub fn add_raw_filter(&mut self, clause: impl Into<String>) -> &mut Self {
        self.query.filters.add_raw(clause);
        self
    }

    /// Add one `fq` clause joining all items with the operator
    ///
    /// Fails with [`cd_core::CdError::EmptyFilterGroup`] when `items` is empty.
    pub fn add_combined_filter(&mut self, items: &[FilterItem], operator: FilterOperator) -> CdResult<&mut Self> {
        self.query.filters.add_combined(items, operator)?;
        Ok(self)
    }

    // Sort methods

    /// Append a sort criterion; duplicates are not checked here
    pub fn add_sort(&mut self, field: &str, direction: SortDirection) -> &mut Self {
        self.query.sorts.add(SortCriterion::new(field, direction));
        self
    }

    // Paging methods

    /// Overwrite the row limit
    pub fn set_row_limit(&mut self, rows: u32) -> &mut Self {
        self.query.row_limit = Some(rows);
        self
    }

    /// Overwrite the offset
    pub fn set_offset(&mut self, offset: u32) -> &mut Self {
        self.query.offset = Some(offset);
        self
    }

    // Full-text methods

    pub fn add_search_term(&mut self, text: impl Into<String>) -> &mut Self {
        self.query.full_text.push(text.into());
        self
    }

    pub fn clear_search_terms(&mut self) -> &mut Self {
        self.query.full_text.clear();
        self
    }

    /// Assemble the query string
    ///
    /// Parameters appear in the fixed order `q`, `sort`, `rows`, `start`, `fq`,
    /// `fl`; empty ones are left out entirely.
    pub fn serialize(&self) -> String {
        let query = &*self.query;
        let mut params: Vec<(&str, String)> = Vec::with_capacity(6);

        if query.has_full_text() {
            params.push(("q", query.full_text.join("%20AND%20")));
        }

        if query.has_custom_sort() {
            params.push(("sort", encode_component(&query.sorts.to_param())));
        }

        if let Some(rows) = query.row_limit.filter(|r| *r > 0) {
            params.push(("rows", rows.to_string()));
        }

        if let Some(start) = query.offset.filter(|s| *s > 0) {
            params.push(("start", start.to_string()));
        }

        if query.has_filters() {
            params.push(("fq", query.filters.clauses().join("&fq=")));
        }

        if !query.fields.is_empty() {
            params.push(("fl", query.fields.names().join("&fl=")));
        }

        params
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect::<Vec<_>>()
            .join("&")
    }
}
