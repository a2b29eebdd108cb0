//! Query Sort Orders
//!
//! Sort orders become the single `sort` parameter, e.g. `lastModified asc,created desc`.

use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Ascending order (A-Z, 1-9, oldest first)
    #[default]
    Asc,
    /// Descending order (Z-A, 9-1, newest first)
    Desc,
}

impl SortDirection {
    pub fn from_ascending(ascending: bool) -> Self {
        if ascending {
            Self::Asc
        } else {
            Self::Desc
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A single sort criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortCriterion {
    /// The field to sort by
    pub field: String,
    /// The sort direction
    pub direction: SortDirection,
}

impl SortCriterion {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Desc)
    }

    /// Wire form, e.g. `created desc`
    pub fn to_param(&self) -> String {
        format!("{} {}", self.field, self.direction.as_str())
    }
}

/// Ordered collection of sort criteria
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SortOrder {
    criteria: Vec<SortCriterion>,
}

impl SortOrder {
    /// Create a new empty sort order
    pub fn new() -> Self {
        Self { criteria: vec![] }
    }

    /// Append a criterion without checking for duplicates
    pub fn add(&mut self, criterion: SortCriterion) -> &mut Self {
        self.criteria.push(criterion);
        self
    }

    /// Append a criterion (builder pattern)
    pub fn then(mut self, criterion: SortCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    pub fn criteria(&self) -> &[SortCriterion] {
        &self.criteria
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty()
    }

    pub fn len(&self) -> usize {
        self.criteria.len()
    }

    /// Remove sort for a specific field
    pub fn remove_sort_for(&mut self, field: &str) {
        self.criteria.retain(|c| c.field != field);
    }

    /// Comma-joined wire form, not yet percent-encoded
    pub fn to_param(&self) -> String {
        self.criteria
            .iter()
            .map(SortCriterion::to_param)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Common sort fields of delivery documents
pub mod fields {
    pub const LAST_MODIFIED: &str = "lastModified";
}

/// Sort applied when a request specifies none
pub fn default_sort() -> SortCriterion {
    SortCriterion::asc(fields::LAST_MODIFIED)
}
