//! Paging arithmetic for search requests
//!
//! The search API pages with `rows`/`start` parameters. A missing row limit
//! falls back to [`DEFAULT_ROWS`] for offset calculations only.

use serde::{Deserialize, Serialize};

/// Row count assumed when no row limit is set
pub const DEFAULT_ROWS: u32 = 10;

/// Accept a row limit, offset, or page number only when it is a positive integer
/// that fits the wire type.
pub fn positive(n: i64) -> Option<u32> {
    if n > 0 {
        u32::try_from(n).ok()
    } else {
        None
    }
}

/// Row limit and offset of a single request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// Requested row limit, if any
    pub row_limit: Option<u32>,
    /// Current offset, if any
    pub offset: Option<u32>,
}

impl PageWindow {
    pub fn new(row_limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { row_limit, offset }
    }

    /// Effective page size
    pub fn rows(&self) -> u32 {
        match self.row_limit {
            Some(rows) if rows > 0 => rows,
            _ => DEFAULT_ROWS,
        }
    }

    /// Offset of the page after the current one, `None` past `u32::MAX`
    pub fn next_offset(&self) -> Option<u32> {
        self.offset.unwrap_or(0).checked_add(self.rows())
    }

    /// Offset of the page before the current one, never below zero
    pub fn previous_offset(&self) -> u32 {
        self.offset.unwrap_or(0).saturating_sub(self.rows())
    }

    /// Offset of a 1-indexed page number, `None` past `u32::MAX`
    pub fn offset_for_page(&self, page: u32) -> Option<u32> {
        let rows = self.rows();
        page.checked_sub(1)?.checked_mul(rows)
    }
}
