//! Page size bounds.

/// Number of items served per page, clamped to `1..=MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimit(usize);

impl PageLimit {
    /// Size used when the client does not ask for one.
    pub const DEFAULT: usize = 20;
    /// Largest page a client may request.
    pub const MAX: usize = 100;

    /// Clamp a requested size into the supported range.
    ///
    /// ```
    /// use pagination::PageLimit;
    ///
    /// assert_eq!(PageLimit::new(None).get(), PageLimit::DEFAULT);
    /// assert_eq!(PageLimit::new(Some(0)).get(), 1);
    /// assert_eq!(PageLimit::new(Some(500)).get(), PageLimit::MAX);
    /// ```
    #[must_use]
    pub fn new(requested: Option<usize>) -> Self {
        Self(requested.unwrap_or(Self::DEFAULT).clamp(1, Self::MAX))
    }

    /// The clamped size.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Number of rows to fetch so the presence of a further page can be
    /// detected without a second query.
    #[must_use]
    pub const fn probe_size(self) -> usize {
        self.0 + 1
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::new(None)
    }
}
