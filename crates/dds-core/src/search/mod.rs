//! Search client for the DuckDuckGo endpoints.
//!
//! Text search scrapes the HTML-only endpoint; images, news and videos use
//! the JSON endpoints behind a per-query vqd token. All requests go through
//! the shared blocking transport.

mod error;
mod images;
mod news;
mod text;
mod types;
mod videos;
mod vqd;

pub use error::SearchError;
pub use types::{
    ImagesResult, NewsResult, Record, TextResult, VideoImages, VideoStats, VideosResult,
};

use crate::transport::{self, TransportConfig};

/// Safesearch level shared by all search modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SafeSearch {
    On,
    #[default]
    Moderate,
    Off,
}

impl SafeSearch {
    /// `p` parameter of the JSON endpoints.
    fn as_param(self) -> &'static str {
        match self {
            SafeSearch::On => "1",
            SafeSearch::Moderate => "-1",
            SafeSearch::Off => "-2",
        }
    }
}

/// Time filter (`df` parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timelimit {
    Day,
    Week,
    Month,
    Year,
}

impl Timelimit {
    fn as_param(self) -> &'static str {
        match self {
            Timelimit::Day => "d",
            Timelimit::Week => "w",
            Timelimit::Month => "m",
            Timelimit::Year => "y",
        }
    }
}

/// Parameters shared by every search mode.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub keywords: String,
    pub region: String,
    pub safesearch: SafeSearch,
    pub timelimit: Option<Timelimit>,
    pub max_results: usize,
}

impl SearchQuery {
    pub fn new(keywords: impl Into<String>, max_results: usize) -> Self {
        Self {
            keywords: keywords.into(),
            region: "wt-wt".to_string(),
            safesearch: SafeSearch::default(),
            timelimit: None,
            max_results,
        }
    }
}

/// Image filters (`f` parameter entries). Values are the endpoint's own
/// vocabulary (e.g. size "Large", color "Monochrome", license "any").
#[derive(Debug, Clone, Default)]
pub struct ImageFilters {
    pub size: Option<String>,
    pub color: Option<String>,
    pub type_image: Option<String>,
    pub layout: Option<String>,
    pub license_image: Option<String>,
}

/// Video filters (`f` parameter entries).
#[derive(Debug, Clone, Default)]
pub struct VideoFilters {
    pub resolution: Option<String>,
    pub duration: Option<String>,
    pub license_videos: Option<String>,
}

/// Joins present filters as the comma-separated `key:value` list the JSON
/// endpoints expect.
fn build_filters(pairs: &[(&str, Option<&str>)]) -> String {
    pairs
        .iter()
        .filter_map(|(k, v)| v.map(|v| format!("{}:{}", k, v)))
        .collect::<Vec<_>>()
        .join(",")
}

/// Client for one command's worth of searches. Owns the shared transport;
/// cheap to construct, no connection state.
pub struct SearchClient {
    transport: TransportConfig,
}

impl SearchClient {
    pub fn new(transport: TransportConfig) -> Self {
        Self { transport }
    }

    /// Text search via the HTML-only endpoint.
    pub fn text(&self, query: &SearchQuery) -> Result<Vec<TextResult>, SearchError> {
        text::search(self, query)
    }

    /// Image search via the `i.js` JSON endpoint.
    pub fn images(
        &self,
        query: &SearchQuery,
        filters: &ImageFilters,
    ) -> Result<Vec<ImagesResult>, SearchError> {
        images::search(self, query, filters)
    }

    /// News search via the `news.js` JSON endpoint.
    pub fn news(&self, query: &SearchQuery) -> Result<Vec<NewsResult>, SearchError> {
        news::search(self, query)
    }

    /// Video search via the `v.js` JSON endpoint.
    pub fn videos(
        &self,
        query: &SearchQuery,
        filters: &VideoFilters,
    ) -> Result<Vec<VideosResult>, SearchError> {
        videos::search(self, query, filters)
    }

    pub(crate) fn transport(&self) -> &TransportConfig {
        &self.transport
    }

    /// Scrapes the front page for the vqd token the JSON endpoints require.
    pub(crate) fn vqd_for(&self, keywords: &str) -> Result<String, SearchError> {
        let url = format!(
            "https://duckduckgo.com/?{}",
            transport::encode_params(&[("q".to_string(), keywords.to_string())])
        );
        let resp = transport::get(&url, &[], &self.transport)?;
        if resp.status != 200 {
            return Err(SearchError::Http(resp.status));
        }
        vqd::extract_vqd(&resp.text()).ok_or_else(|| SearchError::Vqd(keywords.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safesearch_params() {
        assert_eq!(SafeSearch::On.as_param(), "1");
        assert_eq!(SafeSearch::Moderate.as_param(), "-1");
        assert_eq!(SafeSearch::Off.as_param(), "-2");
        assert_eq!(SafeSearch::default(), SafeSearch::Moderate);
    }

    #[test]
    fn timelimit_params() {
        assert_eq!(Timelimit::Day.as_param(), "d");
        assert_eq!(Timelimit::Year.as_param(), "y");
    }

    #[test]
    fn build_filters_skips_absent() {
        assert_eq!(
            build_filters(&[
                ("size", Some("Large")),
                ("color", None),
                ("type", Some("photo")),
            ]),
            "size:Large,type:photo"
        );
        assert_eq!(build_filters(&[("size", None)]), "");
    }

    #[test]
    fn query_defaults() {
        let q = SearchQuery::new("cats", 20);
        assert_eq!(q.region, "wt-wt");
        assert_eq!(q.max_results, 20);
        assert!(q.timelimit.is_none());
    }
}
