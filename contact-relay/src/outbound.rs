use log::warn;
use std::{fmt::Display, future::Future, time::Duration};
use tokio::time::{error::Elapsed, timeout};

/// Timeout and retry budget for calls that leave the process
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutboundPolicy {
    pub timeout: Duration,
    pub retries: u8,
}

impl Default for OutboundPolicy {
    fn default() -> Self {
        OutboundPolicy {
            timeout: Duration::from_secs(10),
            retries: 0,
        }
    }
}

impl OutboundPolicy {
    pub const MAX_RETRIES: u8 = 1;

    /// Runs `call` until it succeeds or the retry budget is spent, bounding each attempt
    pub async fn run<T, E, F, Fut>(&self, what: &str, mut call: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<Elapsed> + Display,
    {
        let mut attempt = 0;
        loop {
            let result = match timeout(self.timeout, call()).await {
                Ok(result) => result,
                Err(elapsed) => Err(E::from(elapsed)),
            };

            match result {
                Err(error) if attempt < self.retries => {
                    attempt += 1;
                    warn!("{what} failed, retrying ({attempt}/{}): {error}", self.retries);
                }
                result => return result,
            }
        }
    }
}
