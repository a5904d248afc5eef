//! Request sequencing for components that fetch on selection changes.
//!
//! Each fetching component holds one [`RequestFence`] in a signal. Every
//! outgoing request takes a token from [`RequestFence::next`]; when the
//! response arrives, the task commits results only if its token is still
//! the newest one. Responses that land out of order are dropped instead
//! of overwriting fresher data.

/// Monotonic sequence of request tokens for a single component instance.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RequestFence {
    latest: u64,
}

impl RequestFence {
    /// Issue a token for a new request, invalidating all earlier ones.
    pub fn next(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    /// Whether `token` belongs to the most recently issued request.
    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_token_is_current() {
        let mut fence = RequestFence::default();
        let token = fence.next();
        assert!(fence.is_current(token));
    }

    #[test]
    fn test_newer_request_invalidates_older_token() {
        let mut fence = RequestFence::default();
        let first = fence.next();
        let second = fence.next();
        assert!(!fence.is_current(first), "superseded token must not commit");
        assert!(fence.is_current(second));
    }

    #[test]
    fn test_out_of_order_completion_keeps_latest() {
        // Request A is issued, then request B. A completing after B must
        // still be rejected, regardless of arrival order.
        let mut fence = RequestFence::default();
        let a = fence.next();
        let b = fence.next();
        assert!(fence.is_current(b), "B arrives first and commits");
        assert!(!fence.is_current(a), "A arrives last and is dropped");
    }

    #[test]
    fn test_tokens_increase_monotonically() {
        let mut fence = RequestFence::default();
        let mut prev = 0;
        for _ in 0..5 {
            let token = fence.next();
            assert!(token > prev);
            prev = token;
        }
    }
}
