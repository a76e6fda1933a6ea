//! Pagination arithmetic
//!
//! Turns a `(page, limit)` request into an offset, and a total count into
//! page metadata. Pages are 1-based. A zero page or limit is a contract
//! violation and is reported, never clamped.

use serde::{Deserialize, Serialize};

use crate::error::{ReportError, ReportResult};

/// Default page size when the caller does not ask for one
pub const DEFAULT_LIMIT: u32 = 10;

/// A requested page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationParams {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PaginationParams {
    pub fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Reject zero page or limit
    pub fn validate(&self) -> ReportResult<()> {
        if self.page == 0 || self.limit == 0 {
            return Err(ReportError::InvalidPagination {
                page: self.page,
                limit: self.limit,
            });
        }
        Ok(())
    }

    /// Offset of the first item on this page
    pub fn skip(&self) -> ReportResult<u64> {
        calculate_skip(self.page, self.limit)
    }
}

/// A raw page slice plus the counters it was cut with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationResult<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

/// Derived page metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u64,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

/// A page of data as handed to the transport layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub meta: PaginationMeta,
}

/// `(page - 1) * limit`
pub fn calculate_skip(page: u32, limit: u32) -> ReportResult<u64> {
    PaginationParams::new(page, limit).validate()?;
    Ok(u64::from(page - 1) * u64::from(limit))
}

/// Compute page count and navigation flags for `total` items
///
/// With `total == 0` there are no pages, so both flags are false whatever
/// `page` says.
pub fn build_meta(total: u64, limit: u32, page: u32) -> ReportResult<PaginationMeta> {
    PaginationParams::new(page, limit).validate()?;

    let total_pages = total.div_ceil(u64::from(limit));
    let has_next_page = u64::from(page) < total_pages;
    let has_previous_page = total_pages > 0 && page > 1;

    Ok(PaginationMeta {
        page,
        limit,
        total,
        total_pages,
        has_next_page,
        has_previous_page,
    })
}

pub fn create_pagination_result<T>(
    data: Vec<T>,
    total: u64,
    page: u32,
    limit: u32,
) -> PaginationResult<T> {
    PaginationResult {
        data,
        total,
        page,
        limit,
    }
}

/// Wrap a page of data with its metadata
pub fn get_pagination_response<T>(
    data: Vec<T>,
    total: u64,
    limit: u32,
    page: u32,
) -> ReportResult<PaginatedResponse<T>> {
    let meta = build_meta(total, limit, page)?;
    Ok(PaginatedResponse { data, meta })
}

impl<T> PaginationResult<T> {
    pub fn into_response(self) -> ReportResult<PaginatedResponse<T>> {
        get_pagination_response(self.data, self.total, self.limit, self.page)
    }
}
