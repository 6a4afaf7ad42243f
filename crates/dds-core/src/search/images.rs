//! Image search via the `i.js` JSON endpoint.

use serde::Deserialize;

use super::{build_filters, ImageFilters, ImagesResult, SearchClient, SearchError, SearchQuery};
use crate::transport;

const ENDPOINT: &str = "https://duckduckgo.com/i.js";

/// The endpoint serves 100 results a page; a hard page cap guards against
/// a server that keeps returning `next`.
const MAX_PAGES: usize = 10;

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    results: Vec<ImagesResult>,
    #[serde(default)]
    next: Option<String>,
}

pub(super) fn search(
    client: &SearchClient,
    query: &SearchQuery,
    filters: &ImageFilters,
) -> Result<Vec<ImagesResult>, SearchError> {
    let vqd = client.vqd_for(&query.keywords)?;
    let f = build_filters(&[
        ("size", filters.size.as_deref()),
        ("color", filters.color.as_deref()),
        ("type", filters.type_image.as_deref()),
        ("layout", filters.layout.as_deref()),
        ("license", filters.license_image.as_deref()),
    ]);

    let mut results: Vec<ImagesResult> = Vec::new();
    let mut offset = 0usize;

    for _ in 0..MAX_PAGES {
        let params = transport::encode_params(&[
            ("q".to_string(), query.keywords.clone()),
            ("o".to_string(), "json".to_string()),
            ("l".to_string(), query.region.clone()),
            ("p".to_string(), query.safesearch.as_param().to_string()),
            ("f".to_string(), f.clone()),
            ("s".to_string(), offset.to_string()),
            ("vqd".to_string(), vqd.clone()),
        ]);
        let url = format!("{}?{}", ENDPOINT, params);
        let resp = transport::get(
            &url,
            &[("Referer", "https://duckduckgo.com/")],
            client.transport(),
        )?;
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
    tracing::debug!(count = results.len(), "image results parsed");
    Ok(results)
}

fn parse_page(body: &[u8]) -> Result<Page, SearchError> {
    serde_json::from_slice(body).map_err(|e| SearchError::Parse(e.to_string()))
}
