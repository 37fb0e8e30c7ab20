//! Animation frame coalescing
//!
//! Bursts of wheel events collapse into at most one recomputation per frame.

/// At most one pending frame request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameRequest {
    pending: bool,
}

impl FrameRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask for a frame. Returns `true` only if the host must schedule one;
    /// requests made while one is pending are merged into it.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consume the pending request when the frame fires
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Drop a pending request without running it
    pub fn cancel(&mut self) {
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requests_coalesce() {
        let mut frame = FrameRequest::new();
        assert!(frame.request());
        assert!(!frame.request());
        assert!(!frame.request());
        assert!(frame.is_pending());

        assert!(frame.take());
        assert!(!frame.take());
        assert!(frame.request());
    }

    #[test]
    fn test_cancel() {
        let mut frame = FrameRequest::new();
        frame.request();
        frame.cancel();
        assert!(!frame.take());
    }
}
