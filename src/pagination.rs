// 📄 Pagination Planner
// Maps a (page, page_size, total) triple onto a slice of the virtual record
// set and carries the envelope metadata for the response

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

// ============================================================================
// BOUNDS & DEFAULTS
// ============================================================================

/// Default page number when the query omits `page`
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when the query omits `page_size`
pub const DEFAULT_PAGE_SIZE: u64 = 10;

/// Default virtual record count when the query omits `total_records`
pub const DEFAULT_TOTAL_RECORDS: u64 = 1_000;

/// Largest accepted `page_size`
pub const MAX_PAGE_SIZE: u64 = 100;

/// Largest accepted `total_records`
pub const MAX_TOTAL_RECORDS: u64 = 10_000;

// ============================================================================
// QUERY VALIDATION
// ============================================================================

/// Raw pagination query as it arrives from the HTTP layer.
///
/// Fields are signed so that negative values reach the validator and produce
/// the same rejection shape as any other out-of-range value.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
    pub total_records: Option<i64>,
}

/// Bounds-checked pagination request, safe to hand to [`plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
    pub total_records: u64,
}

/// A rejected query parameter, reported before the core runs.
#[derive(Debug, Clone)]
pub struct ParamError {
    pub param: &'static str,
    pub message: String,
}

impl ParamError {
    fn out_of_range(param: &'static str, min: u64, max: u64, got: i64) -> Self {
        ParamError {
            param,
            message: format!("must be between {min} and {max}, got {got}"),
        }
    }
}

impl std::fmt::Display for ParamError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.param, self.message)
    }
}

impl std::error::Error for ParamError {}

impl PageQuery {
    /// Apply defaults and bounds checks.
    ///
    /// `page` has no upper bound: requesting a page past the end of the
    /// virtual set is a valid query that yields an empty page.
    pub fn validate(self) -> Result<PageRequest, ParamError> {
        let page = self.page.unwrap_or(DEFAULT_PAGE as i64);
        if page < 1 {
            return Err(ParamError {
                param: "page",
                message: format!("must be >= 1, got {page}"),
            });
        }

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE as i64);
        if page_size < 1 || page_size > MAX_PAGE_SIZE as i64 {
            return Err(ParamError::out_of_range(
                "page_size",
                1,
                MAX_PAGE_SIZE,
                page_size,
            ));
        }

        let total_records = self.total_records.unwrap_or(DEFAULT_TOTAL_RECORDS as i64);
        if total_records < 1 || total_records > MAX_TOTAL_RECORDS as i64 {
            return Err(ParamError::out_of_range(
                "total_records",
                1,
                MAX_TOTAL_RECORDS,
                total_records,
            ));
        }

        Ok(PageRequest {
            page: page as u64,
            page_size: page_size as u64,
            total_records: total_records as u64,
        })
    }
}

// ============================================================================
// PAGE PLAN
// ============================================================================

/// The computed slice of the virtual record set for one request.
///
/// Pure value: holds the request triple, the derived page count, and the
/// clamped half-open index range to materialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    pub page: u64,
    pub page_size: u64,
    pub total: u64,
    pub total_pages: u64,
    start: u64,
    end: u64,
}

/// Compute the page plan for a validated request.
///
/// A `page` beyond `total_pages` produces an empty plan, not an error: the
/// service deliberately answers past-the-end pages with an empty success
/// envelope so clients can walk pages without a terminal failure case.
pub fn plan(page: u64, page_size: u64, total: u64) -> PagePlan {
    debug_assert!(page >= 1, "page is 1-based");
    debug_assert!((1..=MAX_PAGE_SIZE).contains(&page_size));
    debug_assert!((1..=MAX_TOTAL_RECORDS).contains(&total));

    let total_pages = (total + page_size - 1) / page_size;

    // Saturate so absurdly large page numbers clamp to an empty slice
    // instead of overflowing.
    let start = (page - 1).saturating_mul(page_size).min(total);
    let end = (start + page_size).min(total);

    PagePlan {
        page,
        page_size,
        total,
        total_pages,
        start,
        end,
    }
}

impl PagePlan {
    /// Ascending 1-based identities to synthesize for this page.
    pub fn identities(&self) -> RangeInclusive<u64> {
        self.start + 1..=self.end
    }

    /// Number of records this page will contain.
    pub fn record_count(&self) -> u64 {
        self.end - self.start
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}

// ============================================================================
// PAGE ENVELOPE
// ============================================================================

/// Response wrapper bundling one page of records with pagination metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageEnvelope<T> {
    /// Assemble the envelope from a plan and the records synthesized for it.
    pub fn assemble(plan: &PagePlan, data: Vec<T>) -> Self {
        debug_assert_eq!(data.len() as u64, plan.record_count());
        PageEnvelope {
            data,
            total: plan.total,
            page: plan.page,
            page_size: plan.page_size,
            total_pages: plan.total_pages,
            has_next: plan.has_next(),
            has_previous: plan.has_previous(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
