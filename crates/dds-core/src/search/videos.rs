//! Video search via the `v.js` JSON endpoint.

use serde::Deserialize;

use super::{build_filters, SearchClient, SearchError, SearchQuery, VideoFilters, VideosResult};
use crate::transport;

const ENDPOINT: &str = "https://duckduckgo.com/v.js";

const MAX_PAGES: usize = 8;

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    results: Vec<VideosResult>,
    #[serde(default)]
    next: Option<String>,
}

pub(super) fn search(
    client: &SearchClient,
    query: &SearchQuery,
    filters: &VideoFilters,
) -> Result<Vec<VideosResult>, SearchError> {
    let vqd = client.vqd_for(&query.keywords)?;
    // The time filter rides inside `f` here, unlike the other backends.
    let timelimit = query.timelimit.map(|tl| tl.as_param());
    let f = build_filters(&[
        ("publishedAfter", timelimit),
        ("videoDefinition", filters.resolution.as_deref()),
        ("videoDuration", filters.duration.as_deref()),
        ("videoLicense", filters.license_videos.as_deref()),
    ]);

    let mut results: Vec<VideosResult> = Vec::new();
    let mut offset = 0usize;

    for _ in 0..MAX_PAGES {
        let pairs = vec![
            ("q".to_string(), query.keywords.clone()),
            ("o".to_string(), "json".to_string()),
            ("l".to_string(), query.region.clone()),
            ("p".to_string(), query.safesearch.as_param().to_string()),
            ("f".to_string(), f.clone()),
            ("s".to_string(), offset.to_string()),
            ("vqd".to_string(), vqd.clone()),
        ];
        let url = format!("{}?{}", ENDPOINT, transport::encode_params(&pairs));
        let resp = transport::get(&url, &[], client.transport())?;
        if resp.status != 200 {
            return Err(SearchError::Http(resp.status));
        }

        let page = parse_page(&resp.body)?;
        if page.results.is_empty() {
            break;
        }
        offset += page.results.len();
        results.extend(page.results);
        if results.len() >= query.max_results || page.next.is_none() {
            break;
        }
    }

    results.truncate(query.max_results);
    tracing::debug!(count = results.len(), "video results parsed");
    Ok(results)
}

fn parse_page(body: &[u8]) -> Result<Page, SearchError> {
    serde_json::from_slice(body).map_err(|e| SearchError::Parse(e.to_string()))
}
