//! Ordering guard for reloads: only the latest request may write its result.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    /// Ticket of a new request. Every earlier ticket becomes stale.
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_refresh_supersedes_first() {
        let mut requests = RequestSeq::default();
        let first = requests.begin();
        let second = requests.begin();

        // The first response arrives last: it must be dropped.
        assert!(requests.is_current(second));
        assert!(!requests.is_current(first));
    }

    #[test]
    fn test_single_request_is_current() {
        let mut requests = RequestSeq::default();
        assert!(!requests.is_current(1));
        let ticket = requests.begin();
        assert!(requests.is_current(ticket));
    }
}
