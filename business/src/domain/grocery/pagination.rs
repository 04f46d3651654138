pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;

/// Page number, page size and row offset derived from raw query parameters.
///
/// Values are not clamped: a zero or negative page or limit is handed to the
/// storage layer as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            page,
            limit,
            offset: page.saturating_sub(1).saturating_mul(limit),
        }
    }

    /// Unparseable or missing values fall back to the defaults.
    pub fn resolve(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(
            parse_or(page, DEFAULT_PAGE),
            parse_or(limit, DEFAULT_LIMIT),
        )
    }

    /// Number of pages needed to show `total_count` rows, 0 when the limit is
    /// not positive.
    pub fn max_page(&self, total_count: i64) -> i64 {
        if self.limit <= 0 || total_count <= 0 {
            return 0;
        }
        (total_count - 1) / self.limit + 1
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

fn parse_or(raw: Option<&str>, default: i64) -> i64 {
    raw.and_then(|value| value.parse::<i64>().ok())
        .unwrap_or(default)
}
