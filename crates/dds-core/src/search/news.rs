//! News search via the `news.js` JSON endpoint.

use chrono::DateTime;
use serde::Deserialize;

use super::{NewsResult, SearchClient, SearchError, SearchQuery};
use crate::transport;

const ENDPOINT: &str = "https://duckduckgo.com/news.js";

/// Pages are ~30 results; hard cap like the other JSON backends.
const MAX_PAGES: usize = 10;

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    results: Vec<RawNews>,
}

/// Wire shape of one item; `excerpt` becomes `body`, epoch seconds become
/// RFC 3339.
#[derive(Debug, Deserialize)]
struct RawNews {
    #[serde(default)]
    date: i64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    excerpt: String,
    #[serde(default)]
    url: String,
    #[serde(default)]
    image: String,
    #[serde(default)]
    source: String,
}

impl From<RawNews> for NewsResult {
    fn from(raw: RawNews) -> Self {
        let date = DateTime::from_timestamp(raw.date, 0)
            .map(|d| d.to_rfc3339())
            .unwrap_or_default();
        NewsResult {
            date,
            title: raw.title,
            body: raw.excerpt,
            url: raw.url,
            image: raw.image,
            source: raw.source,
        }
    }
}

pub(super) fn search(
    client: &SearchClient,
    query: &SearchQuery,
) -> Result<Vec<NewsResult>, SearchError> {
    let vqd = client.vqd_for(&query.keywords)?;

    let mut results: Vec<NewsResult> = Vec::new();
    let mut offset = 0usize;

    for _ in 0..MAX_PAGES {
        let mut pairs = vec![
            ("q".to_string(), query.keywords.clone()),
            ("o".to_string(), "json".to_string()),
            ("l".to_string(), query.region.clone()),
            ("noamp".to_string(), "1".to_string()),
            ("p".to_string(), query.safesearch.as_param().to_string()),
            ("s".to_string(), offset.to_string()),
            ("vqd".to_string(), vqd.clone()),
        ];
        if let Some(tl) = query.timelimit {
            pairs.push(("df".to_string(), tl.as_param().to_string()));
        }
        let url = format!("{}?{}", ENDPOINT, transport::encode_params(&pairs));
        let resp = transport::get(&url, &[], client.transport())?;
        if resp.status != 200 {
            return Err(SearchError::Http(resp.status));
        }

        let page = parse_page(&resp.body)?;
        if page.is_empty() {
            break;
        }
        offset += page.len();
        results.extend(page);
        if results.len() >= query.max_results {
            break;
        }
    }

    results.truncate(query.max_results);
    tracing::debug!(count = results.len(), "news results parsed");
    Ok(results)
}

fn parse_page(body: &[u8]) -> Result<Vec<NewsResult>, SearchError> {
    let page: Page = serde_json::from_slice(body).map_err(|e| SearchError::Parse(e.to_string()))?;
    Ok(page.results.into_iter().map(NewsResult::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_PAGE: &str = r#"{
        "results": [
            {
                "date": 1715935805,
                "title": "Crustaceans in the news",
                "excerpt": "A long excerpt about crabs.",
                "url": "https://news.test/crabs",
                "image": "https://news.test/crab.jpg",
                "source": "The Crab Times"
            }
        ]
    }"#;

    #[test]
    fn parse_maps_fields_and_date() {
        let results = parse_page(MOCK_PAGE.as_bytes()).unwrap();
        assert_eq!(results.len(), 1);
        let r = &results[0];
        assert_eq!(r.title, "Crustaceans in the news");
        assert_eq!(r.body, "A long excerpt about crabs.");
        assert_eq!(r.source, "The Crab Times");
        assert!(r.date.starts_with("2024-05-17T"), "got {}", r.date);
    }

    #[test]
    fn parse_empty_results() {
        assert!(parse_page(br#"{"results": []}"#).unwrap().is_empty());
    }
}
