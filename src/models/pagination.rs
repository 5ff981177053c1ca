// src/models/pagination.rs
// DOCUMENTATION: Page/limit handling for the list endpoints
// PURPOSE: Coerce query parameters and build the `info` block of list responses

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

/// Query string of GET /maps and GET /multimedia
/// Kept as raw strings so bad input falls back to the defaults instead of failing
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Resolved page window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// Leading integer of a string: optional sign then digits, the rest ignored.
/// "2.5" gives 2 and "5abc" gives 5.
fn leading_integer(raw: &str) -> Option<i64> {
    let raw = raw.trim_start();
    let sign_len = usize::from(raw.starts_with(['+', '-']));
    let digits_len = raw[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return None;
    }
    raw[..sign_len + digits_len].parse::<i64>().ok()
}

fn positive_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(leading_integer)
        .filter(|v| *v >= 1)
        .unwrap_or(default)
}

impl ListQuery {
    /// Values without leading digits, zero and negative values collapse to the defaults.
    /// The limit has no upper bound.
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: positive_or(self.page.as_deref(), DEFAULT_PAGE),
            limit: positive_or(self.limit.as_deref(), DEFAULT_LIMIT),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub total_pages: i64,
}

impl PageInfo {
    pub fn new(total: i64, pagination: Pagination) -> Self {
        // ceil(total / limit), limit is always >= 1
        let total_pages = if total <= 0 {
            0
        } else {
            (total - 1) / pagination.limit + 1
        };
        PageInfo {
            total,
            page: pagination.page,
            limit: pagination.limit,
            total_pages,
        }
    }
}

/// List envelope: `{success, info, results}`
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub success: bool,
    pub info: PageInfo,
    pub results: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(total: i64, pagination: Pagination, results: Vec<T>) -> Self {
        ListResponse {
            success: true,
            info: PageInfo::new(total, pagination),
            results,
        }
    }
}
