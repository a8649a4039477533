//! Page planning.

use crate::QueryError;

/// Page size bounds applied to requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    /// Page size used when a request does not carry one.
    pub default_page_size: u32,
    /// Largest accepted page size.
    pub max_page_size: u32,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: 100,
        }
    }
}

/// Result window in index coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// Number of leading matches to skip.
    pub offset: usize,
    /// Maximum number of matches to return.
    pub limit: usize,
}

/// A resolved page: the requested coordinates plus the index window they map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagePlan {
    /// 1-based page number.
    pub page_no: u32,
    /// Page size.
    pub page_size: u32,
    /// Window to fetch.
    pub window: PageWindow,
}

/// Resolves 1-based page coordinates to an offset/limit window.
///
/// `offset = (page_no - 1) * page_size` and `limit = page_size`. Absent values fall back to the
/// first page and the default page size.
pub fn plan_page(
    page_no: Option<u32>,
    page_size: Option<u32>,
    limits: PageLimits,
) -> Result<PagePlan, QueryError> {
    let page_no = page_no.unwrap_or(1);
    let page_size = page_size.unwrap_or(limits.default_page_size);

    if page_no < 1 {
        return Err(QueryError::InvalidPageNo(page_no));
    }
    if page_size < 1 || page_size > limits.max_page_size {
        return Err(QueryError::InvalidPageSize {
            size: page_size,
            max: limits.max_page_size,
        });
    }

    // u32 * u32 always fits in u64
    let offset = u64::from(page_no - 1) * u64::from(page_size);
    let offset = usize::try_from(offset).map_err(|_| QueryError::WindowOverflow(offset))?;
    let limit = usize::try_from(page_size)
        .map_err(|_| QueryError::WindowOverflow(u64::from(page_size)))?;

    Ok(PagePlan {
        page_no,
        page_size,
        window: PageWindow { offset, limit },
    })
}
