//! Bounded-timeout liveness probe against the backend root.

use std::rc::Rc;

use crate::ports::HttpPort;

pub struct ConnectivityProber {
    http: Rc<dyn HttpPort>,
    timeout_ms: u64,
}

impl ConnectivityProber {
    pub fn new(http: Rc<dyn HttpPort>, timeout_ms: u64) -> Self {
        Self { http, timeout_ms }
    }

    /// True only for a 2xx answer inside the timeout. No retries.
    pub async fn probe(&self) -> bool {
        match self.http.get("/", Some(self.timeout_ms)).await {
            Ok(reply) if reply.is_success() => true,
            Ok(reply) => {
                log::warn!(
                    "Backend at {} answered probe with HTTP {}",
                    self.http.base_url(),
                    reply.status
                );
                false
            }
            Err(e) => {
                log::warn!("Backend connection error ({}): {}", self.http.base_url(), e);
                false
            }
        }
    }
}
