use crate::shared::error::AdminError;
use crate::shared::request_seq::RequestSeq;
use contracts::shared::page_cache::remove_record;
use contracts::shared::pagination::{PageRequest, PageResponse, PageState};
use leptos::prelude::*;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// What the caller does after a page response was handed to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// A newer request was issued meanwhile; the response was ignored.
    Stale,
    Applied,
    /// The total shrank below the current page; fetch the clamped page.
    Refetch,
}

/// Footer figures, available once a page is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterInfo {
    pub shown: usize,
    pub total: usize,
    pub page_index: usize,
    pub total_pages: usize,
}

#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub page: PageState,
    pub rows: Vec<Value>,
    pub status: LoadStatus,
    requests: RequestSeq,
}

impl TableState {
    /// Starts a fetch of the current page. Only the response carrying the
    /// returned sequence number will be applied.
    pub fn begin_fetch(&mut self) -> (u64, PageRequest) {
        let seq = self.requests.begin();
        self.status = LoadStatus::Loading;
        (seq, self.page.request())
    }

    pub fn finish_fetch(
        &mut self,
        seq: u64,
        result: Result<PageResponse<Value>, AdminError>,
    ) -> FetchOutcome {
        if !self.requests.is_current(seq) {
            return FetchOutcome::Stale;
        }
        match result {
            Ok(page) => {
                if self.page.apply_total(page.total) {
                    return FetchOutcome::Refetch;
                }
                self.rows = page.result;
                self.status = LoadStatus::Loaded;
                FetchOutcome::Applied
            }
            Err(e) => {
                self.rows.clear();
                self.status = LoadStatus::Failed(e.to_string());
                FetchOutcome::Applied
            }
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_loading() && self.page.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_loading() && self.page.can_go_next()
    }

    /// Drops a row the server confirmed as deleted.
    pub fn remove_row(&mut self, id: &str) -> bool {
        remove_record(&mut self.rows, id)
    }

    pub fn footer(&self) -> Option<FooterInfo> {
        if self.status != LoadStatus::Loaded {
            return None;
        }
        Some(FooterInfo {
            shown: self.page.shown_through(self.rows.len()),
            total: self.page.total()?,
            page_index: self.page.page_index(),
            total_pages: self.page.total_pages()?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.status == LoadStatus::Loaded && self.rows.is_empty()
    }
}

pub fn create_state() -> RwSignal<TableState> {
    RwSignal::new(TableState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::error::TransportError;
    use serde_json::json;

    fn rows(count: usize, from: usize) -> Vec<Value> {
        (from..from + count)
            .map(|i| json!({"_id": format!("r{i}"), "name": format!("Row {i}")}))
            .collect()
    }

    fn page(count: usize, from: usize, total: usize) -> Result<PageResponse<Value>, AdminError> {
        Ok(PageResponse {
            result: rows(count, from),
            total,
        })
    }

    #[test]
    fn test_walks_pages_of_25() {
        let mut state = TableState::default();
        let (seq, request) = state.begin_fetch();
        assert_eq!((request.offset, request.limit), (0, 10));
        assert!(!state.can_go_next());
        assert_eq!(state.finish_fetch(seq, page(10, 0, 25)), FetchOutcome::Applied);
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());
        assert_eq!(
            state.footer(),
            Some(FooterInfo {
                shown: 10,
                total: 25,
                page_index: 1,
                total_pages: 3
            })
        );

        state.page.go_next();
        state.page.go_next();
        let (seq, request) = state.begin_fetch();
        assert_eq!(request.offset, 20);
        state.finish_fetch(seq, page(5, 20, 25));
        assert_eq!(state.rows.len(), 5);
        assert!(!state.can_go_next());
        assert!(state.can_go_previous());
        assert_eq!(state.footer().map(|f| f.shown), Some(25));
    }

    #[test]
    fn test_superseded_response_is_dropped() {
        let mut state = TableState::default();
        let (first, _) = state.begin_fetch();
        let (second, _) = state.begin_fetch();
        assert_eq!(state.finish_fetch(second, page(3, 0, 3)), FetchOutcome::Applied);
        assert_eq!(state.finish_fetch(first, page(10, 100, 50)), FetchOutcome::Stale);
        assert_eq!(state.rows.len(), 3);
        assert_eq!(state.page.total(), Some(3));
    }

    #[test]
    fn test_shrunk_total_clamps_and_refetches() {
        let mut state = TableState::default();
        let (seq, _) = state.begin_fetch();
        state.finish_fetch(seq, page(10, 0, 21));
        state.page.go_next();
        state.page.go_next();
        assert_eq!(state.page.page_index(), 3);

        let (seq, _) = state.begin_fetch();
        assert_eq!(state.finish_fetch(seq, page(0, 0, 20)), FetchOutcome::Refetch);
        assert_eq!(state.page.page_index(), 2);
        let (seq, request) = state.begin_fetch();
        assert_eq!(request.offset, 10);
        assert_eq!(state.finish_fetch(seq, page(10, 10, 20)), FetchOutcome::Applied);
    }

    #[test]
    fn test_failure_is_not_an_empty_result() {
        let mut state = TableState::default();
        let (seq, _) = state.begin_fetch();
        state.finish_fetch(seq, page(2, 0, 2));
        let (seq, _) = state.begin_fetch();
        state.finish_fetch(seq, Err(AdminError::Fetch(TransportError::Status(500))));
        assert!(matches!(state.status, LoadStatus::Failed(_)));
        assert!(!state.is_empty());
        assert!(state.rows.is_empty());
        assert_eq!(state.footer(), None);
    }

    #[test]
    fn test_empty_and_remove() {
        let mut state = TableState::default();
        let (seq, _) = state.begin_fetch();
        state.finish_fetch(seq, page(1, 0, 1));
        assert!(!state.is_empty());
        assert!(state.remove_row("r0"));
        assert!(state.is_empty());
        assert_eq!(
            state.footer().map(|f| f.total_pages),
            Some(1)
        );
    }
}
