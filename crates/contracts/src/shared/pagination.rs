//! Server-driven pagination: page math and the `{result, total}` list contract.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed page length of every admin table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Query parameters sent with every list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub offset: usize,
    pub limit: usize,
}

impl PageRequest {
    pub fn new(offset: usize, limit: usize) -> Self {
        Self { offset, limit }
    }

    /// First `limit` records; used to fill select boxes with options.
    pub fn first(limit: usize) -> Self {
        Self { offset: 0, limit }
    }
}

/// One page of records plus the server-authoritative total.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResponse<T> {
    pub result: Vec<T>,
    pub total: usize,
}

/// List payload as the API returns it.
///
/// Paginated collections answer `{ "result": [...], "total": n }`, the
/// unpaginated ones (banners, reviews) answer a bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Page {
        result: Vec<T>,
        #[serde(default)]
        total: Option<usize>,
    },
    Plain(Vec<T>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedPage {
    MissingTotal { rows: usize },
}

impl fmt::Display for MalformedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MalformedPage::MissingTotal { rows } => {
                write!(f, "page of {rows} row(s) came without a total row count")
            }
        }
    }
}

impl std::error::Error for MalformedPage {}

impl<T> ListPayload<T> {
    pub fn into_page(self) -> Result<PageResponse<T>, MalformedPage> {
        match self {
            ListPayload::Page {
                result,
                total: Some(total),
            } => Ok(PageResponse { result, total }),
            ListPayload::Page {
                result,
                total: None,
            } => Err(MalformedPage::MissingTotal { rows: result.len() }),
            ListPayload::Plain(result) => {
                let total = result.len();
                Ok(PageResponse { result, total })
            }
        }
    }
}

/// Pagination state owned by a single table instance.
///
/// `page_index` is 1-based and always within `[1, total_pages]`. Until the
/// first response arrives the total is unknown and forward navigation is
/// disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page_index: usize,
    page_size: usize,
    total: Option<usize>,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 1,
            page_size: page_size.max(1),
            total: None,
        }
    }

    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn request(&self) -> PageRequest {
        PageRequest {
            offset: (self.page_index - 1) * self.page_size,
            limit: self.page_size,
        }
    }

    /// `max(1, ceil(total / page_size))`, or `None` before the first load.
    pub fn total_pages(&self) -> Option<usize> {
        self.total.map(|t| t.div_ceil(self.page_size).max(1))
    }

    pub fn can_go_previous(&self) -> bool {
        self.page_index > 1
    }

    pub fn can_go_next(&self) -> bool {
        matches!(self.total_pages(), Some(last) if self.page_index < last)
    }

    /// Returns `true` when the page actually changed.
    pub fn go_previous(&mut self) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.page_index -= 1;
        true
    }

    /// Returns `true` when the page actually changed.
    pub fn go_next(&mut self) -> bool {
        if !self.can_go_next() {
            return false;
        }
        self.page_index += 1;
        true
    }

    /// Records the server total and pulls the index back into range
    /// (e.g. after the last row of the last page was deleted).
    /// Returns `true` when the index moved and the page must be re-fetched.
    pub fn apply_total(&mut self, total: usize) -> bool {
        self.total = Some(total);
        let last = total.div_ceil(self.page_size).max(1);
        if self.page_index > last {
            self.page_index = last;
            return true;
        }
        false
    }

    /// Running "shown so far" figure for the footer.
    pub fn shown_through(&self, rows_on_page: usize) -> usize {
        (self.page_index - 1) * self.page_size + rows_on_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_never_zero() {
        let mut state = PageState::default();
        assert_eq!(state.total_pages(), None);
        for (total, expected) in [(0, 1), (1, 1), (10, 1), (11, 2), (25, 3), (100, 10)] {
            state.apply_total(total);
            assert_eq!(state.total_pages(), Some(expected), "total = {total}");
        }
    }

    #[test]
    fn test_offsets_stay_inside_total() {
        for total in 1..=105usize {
            let mut state = PageState::default();
            state.apply_total(total);
            loop {
                let request = state.request();
                assert!(request.offset < total, "offset {} total {}", request.offset, total);
                assert_eq!(request.offset, (state.page_index() - 1) * 10);
                if !state.go_next() {
                    break;
                }
            }
            assert_eq!(Some(state.page_index()), state.total_pages());
        }
    }

    #[test]
    fn test_twenty_five_rows_scenario() {
        let mut state = PageState::default();
        state.apply_total(25);

        assert_eq!(state.request(), PageRequest::new(0, 10));
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());
        assert_eq!(state.shown_through(10), 10);

        assert!(state.go_next());
        assert!(state.go_next());
        assert_eq!(state.page_index(), 3);
        assert_eq!(state.request(), PageRequest::new(20, 10));
        assert!(!state.can_go_next());
        assert!(state.can_go_previous());
        assert_eq!(state.shown_through(5), 25);

        assert!(!state.go_next());
        assert_eq!(state.page_index(), 3);
    }

    #[test]
    fn test_navigation_disabled_until_total_known() {
        let mut state = PageState::default();
        assert!(!state.can_go_next());
        assert!(!state.go_next());
        assert!(!state.go_previous());
        assert_eq!(state.request().offset, 0);
    }

    #[test]
    fn test_empty_collection_has_single_page() {
        let mut state = PageState::default();
        state.apply_total(0);
        assert_eq!(state.total_pages(), Some(1));
        assert!(!state.can_go_next());
        assert!(!state.can_go_previous());
    }

    #[test]
    fn test_shrinking_total_clamps_index() {
        let mut state = PageState::default();
        state.apply_total(21);
        state.go_next();
        state.go_next();
        assert_eq!(state.page_index(), 3);

        assert!(state.apply_total(20));
        assert_eq!(state.page_index(), 2);
        assert!(!state.apply_total(20));
    }

    #[test]
    fn test_list_payload_shapes() {
        let page: ListPayload<u32> =
            serde_json::from_str(r#"{"result":[1,2,3],"total":25}"#).unwrap();
        assert_eq!(
            page.into_page().unwrap(),
            PageResponse {
                result: vec![1, 2, 3],
                total: 25
            }
        );

        let plain: ListPayload<u32> = serde_json::from_str("[4,5]").unwrap();
        assert_eq!(plain.into_page().unwrap().total, 2);

        let missing: ListPayload<u32> = serde_json::from_str(r#"{"result":[1]}"#).unwrap();
        assert_eq!(
            missing.into_page(),
            Err(MalformedPage::MissingTotal { rows: 1 })
        );
    }
}
