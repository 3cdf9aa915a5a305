pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PaginationError {
    #[error("pagination.invalid_page")]
    InvalidPage,
    #[error("pagination.invalid_limit")]
    InvalidLimit,
}

/// A validated page request. Both page and limit are 1-based and positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: i64,
    limit: i64,
}

impl Pagination {
    pub fn new(page: i64, limit: i64) -> Result<Self, PaginationError> {
        if page < 1 {
            return Err(PaginationError::InvalidPage);
        }
        if limit < 1 {
            return Err(PaginationError::InvalidLimit);
        }
        Ok(Self { page, limit })
    }

    /// Builds a pagination from optional query values, falling back to defaults.
    pub fn from_query(page: Option<i64>, limit: Option<i64>) -> Result<Self, PaginationError> {
        Self::new(page.unwrap_or(DEFAULT_PAGE), limit.unwrap_or(DEFAULT_LIMIT))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn should_use_defaults_when_query_is_empty() {
        let pagination = Pagination::from_query(None, None).unwrap();

        assert_eq!(pagination.page(), 1);
        assert_eq!(pagination.limit(), 10);
        assert_eq!(pagination.offset(), 0);
    }

    #[test]
    fn should_compute_offset_from_page_and_limit() {
        let pagination = Pagination::new(3, 20).unwrap();

        assert_eq!(pagination.offset(), 40);
    }

    #[test]
    fn should_reject_zero_page() {
        assert_eq!(Pagination::new(0, 10), Err(PaginationError::InvalidPage));
    }

    #[test]
    fn should_reject_zero_limit() {
        assert_eq!(Pagination::new(1, 0), Err(PaginationError::InvalidLimit));
    }

    proptest! {
        #[test]
        fn should_reject_any_non_positive_page(page in i64::MIN..1, limit in any::<i64>()) {
            prop_assert!(Pagination::new(page, limit).is_err());
        }

        #[test]
        fn should_reject_any_non_positive_limit(page in any::<i64>(), limit in i64::MIN..1) {
            prop_assert!(Pagination::new(page, limit).is_err());
        }

        #[test]
        fn should_accept_any_positive_pair(page in 1i64..10_000, limit in 1i64..1_000) {
            let pagination = Pagination::new(page, limit).unwrap();
            prop_assert_eq!(pagination.offset(), (page - 1) * limit);
        }
    }
}
