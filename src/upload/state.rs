//! Batch progress tracking.

/// Counters for one batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchState {
    /// Files accepted by the server.
    pub uploaded: u64,
    /// Files retried with a refetched CSRF token.
    pub token_refetches: u64,
    /// Files retried after a rate-limit pause.
    pub ratelimit_waits: u64,
}

impl BatchState {
    /// Record a successful upload.
    pub fn increment_uploaded(&mut self) {
        self.uploaded += 1;
    }

    /// Record a CSRF token refetch.
    pub fn increment_token_refetch(&mut self) {
        self.token_refetches += 1;
    }

    /// Record a rate-limit pause.
    pub fn increment_ratelimit_wait(&mut self) {
        self.ratelimit_waits += 1;
    }
}
