//! Skip/limit paging policy.
//!
//! Callers may send any integers; the store always receives a non-negative
//! skip and a positive limit. Pagination is offset-based and only stable
//! while no edges are added or removed between calls.

/// Page size used when a followee/follower listing asks for `limit <= 0`.
pub const DEFAULT_FOLLOWEES_LIMIT: i64 = 20;

/// Result count used when a recommendation request asks for `limit <= 0`.
pub const DEFAULT_RECOMMENDATION_LIMIT: i64 = 10;

/// A normalized `(skip, limit)` window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    skip: i64,
    limit: i64,
}

impl PageRequest {
    /// Normalize raw input: negative skip clamps to 0, non-positive limit
    /// falls back to `default_limit`.
    pub fn new(skip: i64, limit: i64, default_limit: i64) -> Self {
        Self {
            skip: skip.max(0),
            limit: Self::limit_or(limit, default_limit),
        }
    }

    /// Window for followee and follower listings.
    ///
    /// ```
    /// use followgraph_domain::PageRequest;
    ///
    /// let page = PageRequest::followees(-5, 0);
    /// assert_eq!((page.skip(), page.limit()), (0, 20));
    /// ```
    pub fn followees(skip: i64, limit: i64) -> Self {
        Self::new(skip, limit, DEFAULT_FOLLOWEES_LIMIT)
    }

    /// Result count for a recommendation request.
    pub fn recommendation_limit(limit: i64) -> i64 {
        Self::limit_or(limit, DEFAULT_RECOMMENDATION_LIMIT)
    }

    pub fn skip(&self) -> i64 {
        self.skip
    }

    pub fn limit(&self) -> i64 {
        self.limit
    }

    fn limit_or(limit: i64, default_limit: i64) -> i64 {
        if limit <= 0 {
            default_limit
        } else {
            limit
        }
    }
}
