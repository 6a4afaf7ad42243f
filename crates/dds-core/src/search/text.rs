//! Text search via the HTML-only endpoint.
//!
//! POSTs the query form to `html.duckduckgo.com`, parses results with CSS
//! selectors, unwraps the engine's redirect links, and pages by replaying
//! the hidden inputs of the "next" form each response carries.

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use super::{SafeSearch, SearchClient, SearchError, SearchQuery, TextResult};
use crate::transport;

const HTML_ENDPOINT: &str = "https://html.duckduckgo.com/html/";

/// Pagination safety stop; the endpoint serves ~25 organic results a page.
const MAX_PAGES: usize = 10;

pub(super) fn search(
    client: &SearchClient,
    query: &SearchQuery,
) -> Result<Vec<TextResult>, SearchError> {
    let mut results: Vec<TextResult> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    let mut form: Vec<(String, String)> = vec![
        ("q".to_string(), query.keywords.clone()),
        ("b".to_string(), String::new()),
        ("kl".to_string(), query.region.clone()),
    ];
    if let Some(tl) = query.timelimit {
        form.push(("df".to_string(), tl.as_param().to_string()));
    }
    if query.safesearch == SafeSearch::On {
        form.push(("kp".to_string(), "1".to_string()));
    }

    for _ in 0..MAX_PAGES {
        let resp = transport::post_form(HTML_ENDPOINT, &form, client.transport())?;
        if resp.status != 200 {
            return Err(SearchError::Http(resp.status));
        }
        let html = resp.text();

        let mut fresh = 0usize;
        for result in parse_results(&html)? {
            if !seen.insert(result.href.clone()) {
                continue;
            }
            results.push(result);
            fresh += 1;
            if results.len() >= query.max_results {
                return Ok(results);
            }
        }
        if fresh == 0 {
            break;
        }

        match next_page_form(&html) {
            Some(next) => form = next,
            None => break,
        }
    }

    tracing::debug!(count = results.len(), "text results parsed");
    Ok(results)
}

/// Extracts the real URL from the engine's `/l/?uddg=` redirect wrapper;
/// direct links pass through.
fn extract_url(href: &str) -> Option<String> {
    let full_href = if href.starts_with("//") {
        format!("https:{}", href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&full_href).ok()?;
    if parsed.host_str() == Some("duckduckgo.com") && parsed.path().starts_with("/l/") {
        parsed
            .query_pairs()
            .find(|(key, _)| key == "uddg")
            .map(|(_, value)| value.into_owned())
    } else {
        Some(full_href)
    }
}

/// Parses one result page. Separate from `search` so it can be exercised
/// with canned HTML.
fn parse_results(html: &str) -> Result<Vec<TextResult>, SearchError> {
    let document = Html::parse_document(html);

    let result_sel = Selector::parse(
        ".result.results_links.results_links_deep:not(.result--ad), .web-result:not(.result--ad)",
    )
    .map_err(|e| SearchError::Parse(format!("result selector: {:?}", e)))?;
    let title_sel = Selector::parse(".result__a")
        .map_err(|e| SearchError::Parse(format!("title selector: {:?}", e)))?;
    let snippet_sel = Selector::parse(".result__snippet")
        .map_err(|e| SearchError::Parse(format!("snippet selector: {:?}", e)))?;

    let mut results = Vec::new();
    for element in document.select(&result_sel) {
        let Some(title_el) = element.select(&title_sel).next() else {
            continue;
        };
        let title = title_el.text().collect::<String>().trim().to_string();
        if title.is_empty() {
            continue;
        }
        let Some(href) = title_el.value().attr("href") else {
            continue;
        };
        let Some(url) = extract_url(href) else {
            continue;
        };
        let body = element
            .select(&snippet_sel)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        results.push(TextResult {
            title,
            href: url,
            body,
        });
    }
    Ok(results)
}

/// Hidden inputs of the last navigation form — the request that fetches the
/// next page. None once the last page is reached.
fn next_page_form(html: &str) -> Option<Vec<(String, String)>> {
    let document = Html::parse_document(html);
    let form_sel = Selector::parse("div.nav-link form").ok()?;
    let input_sel = Selector::parse("input").ok()?;

    let form = document.select(&form_sel).last()?;
    let mut fields = Vec::new();
    for input in form.select(&input_sel) {
        let value = input.value();
        if let Some(name) = value.attr("name") {
            fields.push((
                name.to_string(),
                value.attr("value").unwrap_or("").to_string(),
            ));
        }
    }
    fields.iter().any(|(name, _)| name == "q").then_some(fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="//duckduckgo.com/l/?uddg=https%3A%2F%2Fwww.rust-lang.org%2F&amp;rut=abc123">
        Rust Programming Language
    </a>
    <div class="result__snippet">
        A language empowering everyone to build reliable and efficient software.
    </div>
</div>
<div class="result results_links results_links_deep web-result">
    <a class="result__a" href="https://doc.rust-lang.org/book/">
        The Rust Programming Language Book
    </a>
    <div class="result__snippet">
        An introductory book about Rust.
    </div>
</div>
<div class="nav-link">
  <form action="/html/" method="post">
    <input type="submit" class="btn" value="Next" />
    <input type="hidden" name="q" value="rust" />
    <input type="hidden" name="s" value="23" />
    <input type="hidden" name="dc" value="24" />
    <input type="hidden" name="kl" value="wt-wt" />
  </form>
</div>
</body>
</html>"#;

    #[test]
    fn extract_url_from_redirect() {
        let href = "//duckduckgo.com/l/?uddg=https%3A%2F%2Fexample.com%2Fpage&rut=abc";
        assert_eq!(
            extract_url(href).as_deref(),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn extract_url_direct_link() {
        assert_eq!(
            extract_url("https://example.com/direct").as_deref(),
            Some("https://example.com/direct")
        );
    }

    #[test]
    fn extract_url_invalid() {
        assert!(extract_url("not-a-url").is_none());
    }

    #[test]
    fn parse_mock_html() {
        let results = parse_results(MOCK_HTML).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Rust Programming Language");
        assert_eq!(results[0].href, "https://www.rust-lang.org/");
        assert!(results[0].body.contains("reliable and efficient"));
        assert_eq!(results[1].href, "https://doc.rust-lang.org/book/");
    }

    #[test]
    fn parse_empty_html() {
        let results = parse_results("<html><body></body></html>").unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn next_form_collects_hidden_inputs() {
        let fields = next_page_form(MOCK_HTML).unwrap();
        assert!(fields.contains(&("q".to_string(), "rust".to_string())));
        assert!(fields.contains(&("s".to_string(), "23".to_string())));
        assert!(fields.contains(&("kl".to_string(), "wt-wt".to_string())));
    }

    #[test]
    fn next_form_absent_on_last_page() {
        assert!(next_page_form("<html><body></body></html>").is_none());
    }
}
