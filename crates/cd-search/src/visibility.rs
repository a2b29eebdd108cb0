//! Draft and retired visibility
//!
//! Published documents are always visible. Draft and retired documents are
//! requested per query: the flags are set on the session, turned into one
//! status clause when the query string is built, and then dropped.

use cd_core::CdResult;
use cd_queries::filters::fields::{DRAFT_STATUS, STATUS};
use cd_queries::{FilterItem, FilterOperator, QueryBuilder};
use serde::{Deserialize, Serialize};

/// Which unpublished documents the next query includes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only ready documents
    #[default]
    Published,
    DraftOnly,
    RetiredOnly,
    /// Ready, draft, and retired documents
    Both,
}

impl Visibility {
    pub fn from_flags(draft: bool, retired: bool) -> Self {
        match (draft, retired) {
            (false, false) => Self::Published,
            (true, false) => Self::DraftOnly,
            (false, true) => Self::RetiredOnly,
            (true, true) => Self::Both,
        }
    }

    pub fn includes_draft(&self) -> bool {
        matches!(self, Self::DraftOnly | Self::Both)
    }

    pub fn includes_retired(&self) -> bool {
        matches!(self, Self::RetiredOnly | Self::Both)
    }

    /// Assign the draft flag, keeping the retired flag
    pub fn with_draft(self, draft: bool) -> Self {
        Self::from_flags(draft, self.includes_retired())
    }

    /// Assign the retired flag, keeping the draft flag
    pub fn with_retired(self, retired: bool) -> Self {
        Self::from_flags(self.includes_draft(), retired)
    }

    /// Unpublished documents are only served by the preview host
    pub fn requires_preview(&self) -> bool {
        !matches!(self, Self::Published)
    }

    /// Add the status clause for this visibility to the query
    pub fn apply(&self, builder: &mut QueryBuilder<'_>) -> CdResult<()> {
        match self {
            Self::Published => {}
            Self::Both => {
                builder.add_combined_filter(
                    &[
                        FilterItem::new(STATUS, "ready"),
                        FilterItem::new(STATUS, "draft"),
                        FilterItem::new(DRAFT_STATUS, "*"),
                        FilterItem::new(STATUS, "retired"),
                    ],
                    FilterOperator::Or,
                )?;
            }
            Self::DraftOnly => {
                builder.add_combined_filter(
                    &[
                        FilterItem::new(DRAFT_STATUS, "*"),
                        FilterItem::new(STATUS, "ready"),
                        FilterItem::new(STATUS, "draft"),
                    ],
                    FilterOperator::Or,
                )?;
            }
            Self::RetiredOnly => {
                // Single encoded clause `status:(ready%20OR%20retired)`, not a combined filter
                builder.add_filter(STATUS, "(ready OR retired)");
            }
        }
        Ok(())
    }
}
