//! Query Filters
//!
//! Filters end up in repeated `fq` parameters. Each stored clause is already in
//! wire form: `field:value` with the value percent-encoded, or a raw clause the
//! caller encoded itself.

use cd_core::{CdError, CdResult};
use serde::{Deserialize, Serialize};

use crate::encoding::encode_component;

/// Boolean operator joining the items of a combined filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FilterOperator {
    #[default]
    And,
    Or,
}

impl FilterOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Separator placed between the items of a combined filter
    pub fn separator(&self) -> String {
        format!("%20{}%20", self.as_str())
    }
}

/// A single `field:value` pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterItem {
    pub field: String,
    pub value: String,
}

impl FilterItem {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Wire form: the field stays raw, the value is percent-encoded
    pub fn to_clause(&self) -> String {
        format!("{}:{}", self.field, encode_component(&self.value))
    }
}

impl<F: Into<String>, V: Into<String>> From<(F, V)> for FilterItem {
    fn from((field, value): (F, V)) -> Self {
        Self::new(field, value)
    }
}

/// Join several items into one clause
pub fn combine(items: &[FilterItem], operator: FilterOperator) -> CdResult<String> {
    if items.is_empty() {
        return Err(CdError::EmptyFilterGroup);
    }

    Ok(items
        .iter()
        .map(FilterItem::to_clause)
        .collect::<Vec<_>>()
        .join(&operator.separator()))
}

/// Known filter fields of delivery documents
pub mod fields {
    pub const NAME: &str = "name";
    pub const TAGS: &str = "tags";
    pub const ID: &str = "id";
    pub const CATEGORIES: &str = "categories";
    pub const CLASSIFICATION: &str = "classification";
    pub const STATUS: &str = "status";
    pub const DRAFT_STATUS: &str = "draftStatus";
}

/// Ordered list of `fq` clauses, combined with AND by the search engine
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    clauses: Vec<String>,
}

impl FilterSet {
    /// Create a new empty filter set
    pub fn new() -> Self {
        Self { clauses: vec![] }
    }

    /// Add a `field:value` clause, encoding the value
    pub fn add(&mut self, item: FilterItem) -> &mut Self {
        self.clauses.push(item.to_clause());
        self
    }

    /// Add a clause verbatim
    pub fn add_raw(&mut self, clause: impl Into<String>) -> &mut Self {
        self.clauses.push(clause.into());
        self
    }

    /// Add one clause joining all items with the operator
    pub fn add_combined(&mut self, items: &[FilterItem], operator: FilterOperator) -> CdResult<&mut Self> {
        let clause = combine(items, operator)?;
        self.clauses.push(clause);
        Ok(self)
    }

    /// Add a raw clause and return self (builder pattern)
    pub fn with_raw(mut self, clause: impl Into<String>) -> Self {
        self.clauses.push(clause.into());
        self
    }

    /// Get all clauses in insertion order
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Check if an exact clause is present
    pub fn contains(&self, clause: &str) -> bool {
        self.clauses.iter().any(|c| c == clause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_operator() {
        assert_eq!(FilterOperator::default(), FilterOperator::And);
        assert_eq!(FilterOperator::Or.separator(), "%20OR%20");
    }

    #[test]
    fn test_filter_item_clause() {
        assert_eq!(FilterItem::new("isManaged", "false").to_clause(), "isManaged:false");
        assert_eq!(FilterItem::new("name", "\"value\"").to_clause(), "name:%22value%22");
        assert_eq!(
            FilterItem::from(("categories", "(\"value\")")).to_clause(),
            "categories:(%22value%22)"
        );
    }

    #[test]
    fn test_combine() {
        let items = vec![FilterItem::new("field1", "v1"), FilterItem::new("field2", "v2")];
        assert_eq!(
            combine(&items, FilterOperator::And).unwrap(),
            "field1:v1%20AND%20field2:v2"
        );
        assert_eq!(
            combine(&items, FilterOperator::Or).unwrap(),
            "field1:v1%20OR%20field2:v2"
        );
    }

    #[test]
    fn test_combine_empty() {
        let err = combine(&[], FilterOperator::And).unwrap_err();
        assert!(matches!(err, CdError::EmptyFilterGroup));
    }

    #[test]
    fn test_filter_set() {
        let mut filters = FilterSet::new();
        filters
            .add(FilterItem::new("isManaged", "false"))
            .add_raw("classification:asset");

        assert_eq!(filters.len(), 2);
        assert_eq!(filters.clauses(), ["isManaged:false", "classification:asset"]);
        assert!(filters.contains("classification:asset"));
    }

    #[test]
    fn test_filter_set_combined_empty_leaves_set_unchanged() {
        let mut filters = FilterSet::new().with_raw("classification:asset");
        assert!(filters.add_combined(&[], FilterOperator::Or).is_err());
        assert_eq!(filters.len(), 1);
    }
}
