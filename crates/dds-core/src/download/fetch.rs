//! Single-resource fetcher: one GET, body written to the destination path.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::transport::{self, TransportConfig};

/// Failure kinds for one fetch attempt. Consumed only by the dispatcher's
/// logging sink; never propagated past the batch.
#[derive(Debug)]
pub enum FetchError {
    /// curl reported an error (timeout, connection, TLS, bad URL).
    Transport(curl::Error),
    /// Response finished with a status other than 200.
    Http(u32),
    /// The body could not be written to the destination.
    Write(std::io::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(e) => write!(f, "{}", e),
            FetchError::Http(code) => write!(f, "HTTP {}", code),
            FetchError::Write(e) => write!(f, "write: {}", e),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Transport(e) => Some(e),
            FetchError::Write(e) => Some(e),
            FetchError::Http(_) => None,
        }
    }
}

/// Result of one fetch attempt.
pub type FetchOutcome = Result<(), FetchError>;

/// One blocking fetch of one URL. `Sync` so a worker pool can share one
/// instance by reference; tests substitute instrumented implementations.
pub trait Fetch: Sync {
    fn fetch(&self, url: &str, destination: &Path) -> FetchOutcome;
}

/// Production fetcher over the shared transport config.
pub struct HttpFetcher {
    transport: TransportConfig,
}

impl HttpFetcher {
    pub fn new(transport: TransportConfig) -> Self {
        Self { transport }
    }
}

impl Fetch for HttpFetcher {
    /// GETs `url` and writes the full body to `destination` on a 200.
    /// Any other status, transport error, or write error becomes a
    /// `FetchError`; no partial or placeholder file is left behind.
    fn fetch(&self, url: &str, destination: &Path) -> FetchOutcome {
        let resp = transport::get(url, &[], &self.transport).map_err(FetchError::Transport)?;
        if resp.status != 200 {
            return Err(FetchError::Http(resp.status));
        }
        fs::write(destination, &resp.body).map_err(FetchError::Write)
    }
}
