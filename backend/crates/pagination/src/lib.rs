//! Offset pagination primitives shared by backend endpoints.
//!
//! A [`PageRequest`] names the zero-based page index and page size a caller
//! asked for; a [`Page`] is the envelope returned to them, carrying the rows
//! for that page plus the total number of matching rows so clients can render
//! page controls without a second round trip.

use serde::{Deserialize, Serialize};

/// Page size applied when a request does not name one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound on the page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Validation failures raised when constructing a [`PageRequest`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PageRequestError {
    /// The requested size is zero or exceeds [`MAX_PAGE_SIZE`].
    #[error("page size must be between 1 and {MAX_PAGE_SIZE}, got {size}")]
    SizeOutOfRange { size: u32 },
}

/// A validated request for one page of results.
///
/// Only constructible through [`PageRequest::new`] (or [`PageRequest::first`]),
/// so a zero size can never reach [`Page::new`]'s page-count division.
/// Deliberately not `Deserialize`: wire types carry raw `page`/`size` numbers
/// and validate them into a request at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    index: u32,
    size: u32,
}

impl PageRequest {
    /// Build a request for the given zero-based page index and size.
    ///
    /// # Errors
    /// Returns [`PageRequestError::SizeOutOfRange`] when `size` is zero or
    /// larger than [`MAX_PAGE_SIZE`].
    pub fn new(index: u32, size: u32) -> Result<Self, PageRequestError> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(PageRequestError::SizeOutOfRange { size });
        }
        Ok(Self { index, size })
    }

    /// Request for the first page with the default size.
    #[must_use]
    pub fn first() -> Self {
        Self {
            index: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Zero-based page index.
    #[must_use]
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Number of rows per page.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Number of rows to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> i64 {
        i64::from(self.index) * i64::from(self.size)
    }

    /// Maximum number of rows on this page.
    #[must_use]
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One page of results together with pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    page: u32,
    size: u32,
    total_elements: u64,
    total_pages: u64,
}

impl<T> Page<T> {
    /// Assemble a page from loaded rows, the originating request, and the
    /// total count of rows matching the query across all pages.
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.size()));
        Self {
            content,
            page: request.index(),
            size: request.size(),
            total_elements,
            total_pages,
        }
    }

    /// Rows on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Zero-based index of this page.
    #[must_use]
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Requested page size.
    #[must_use]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total rows matching the query across all pages.
    #[must_use]
    pub fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Total number of pages at the requested size.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Whether this page carries no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Transform each row while keeping the pagination metadata.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }

    /// Consume the page, yielding its rows.
    #[must_use]
    pub fn into_content(self) -> Vec<T> {
        self.content
    }
}
