//! Search error taxonomy.

use thiserror::Error;

/// Failure of one search call. Unlike bulk-download failures these surface
/// to the caller: without results there is nothing to render or fetch.
#[derive(Debug, Error)]
pub enum SearchError {
    /// curl reported an error (timeout, connection, TLS, bad URL).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),

    /// An endpoint answered with a non-200 status.
    #[error("HTTP {0}")]
    Http(u32),

    /// The front page yielded no vqd token for this query.
    #[error("no vqd token for query \"{0}\"")]
    Vqd(String),

    /// A response body could not be parsed (HTML selectors or JSON).
    #[error("parse: {0}")]
    Parse(String),
}
