//! Blocking HTTP transport over libcurl.
//!
//! One `Easy` handle per request, configured from a shared read-only
//! `TransportConfig`. Follows redirects, so callers see the final hop's
//! status code. Runs in the current thread; batch callers fan requests out
//! across their own worker threads.

use std::str;
use std::time::Duration;

/// Fixed network timeout applied to every request unless overridden.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Browser-like identity presented to remote servers so automated fetches
/// look like an ordinary client.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/130.0.0.0 Safari/537.36";

/// Conventional local Tor Browser SOCKS endpoint, selected with the "tb" alias.
const TOR_BROWSER_PROXY: &str = "socks5://127.0.0.1:9150";

/// Network-level parameters shared read-only by every request in a command:
/// proxy, timeout, TLS verification, and client identity. Never mutated
/// after the command starts.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Proxy endpoint passed through to libcurl as given (http, https, socks5, ...).
    pub proxy: Option<String>,
    /// Whole-request timeout (connect + transfer).
    pub timeout: Duration,
    /// When false, certificate and hostname verification are disabled.
    pub verify_tls: bool,
    /// Value of the User-Agent header.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            proxy: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            verify_tls: true,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Expands the "tb" proxy alias to the local Tor Browser endpoint;
/// any other value passes through untouched.
pub fn expand_proxy_alias(proxy: Option<&str>) -> Option<String> {
    match proxy {
        Some("tb") => Some(TOR_BROWSER_PROXY.to_string()),
        Some(p) => Some(p.to_string()),
        None => None,
    }
}

/// One finished HTTP exchange: final status code, body, and the raw header
/// lines of every hop (used e.g. to pick up rotated session tokens).
#[derive(Debug)]
pub struct Response {
    pub status: u32,
    pub body: Vec<u8>,
    header_lines: Vec<String>,
}

impl Response {
    /// Last value seen for `name` (case-insensitive), i.e. the final hop's.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_lines.iter().rev().find_map(|line| {
            let (k, v) = line.split_once(':')?;
            k.trim().eq_ignore_ascii_case(name).then(|| v.trim())
        })
    }

    /// Body as text (lossy UTF-8).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Percent-encodes `pairs` as a query/form string.
pub fn encode_params(pairs: &[(String, String)]) -> String {
    let mut serializer = url::form_urlencoded::Serializer::new(String::new());
    for (k, v) in pairs {
        serializer.append_pair(k, v);
    }
    serializer.finish()
}

/// GET `url` with optional extra headers.
pub fn get(
    url: &str,
    headers: &[(&str, &str)],
    cfg: &TransportConfig,
) -> Result<Response, curl::Error> {
    perform(url, None, headers, cfg)
}

/// POST `fields` as an urlencoded form.
pub fn post_form(
    url: &str,
    fields: &[(String, String)],
    cfg: &TransportConfig,
) -> Result<Response, curl::Error> {
    let body = encode_params(fields).into_bytes();
    perform(
        url,
        Some(("application/x-www-form-urlencoded", &body)),
        &[],
        cfg,
    )
}

/// POST a JSON body with optional extra headers.
pub fn post_json(
    url: &str,
    body: &[u8],
    headers: &[(&str, &str)],
    cfg: &TransportConfig,
) -> Result<Response, curl::Error> {
    perform(url, Some(("application/json", body)), headers, cfg)
}

fn perform(
    url: &str,
    body: Option<(&str, &[u8])>,
    headers: &[(&str, &str)],
    cfg: &TransportConfig,
) -> Result<Response, curl::Error> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.useragent(&cfg.user_agent)?;
    easy.timeout(cfg.timeout)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.accept_encoding("")?;
    if let Some(proxy) = &cfg.proxy {
        easy.proxy(proxy)?;
    }
    if !cfg.verify_tls {
        easy.ssl_verify_peer(false)?;
        easy.ssl_verify_host(false)?;
    }

    let mut list = curl::easy::List::new();
    for (k, v) in headers {
        list.append(&format!("{}: {}", k, v))?;
    }
    if let Some((content_type, data)) = body {
        list.append(&format!("Content-Type: {}", content_type))?;
        easy.post(true)?;
        easy.post_fields_copy(data)?;
    }
    if !headers.is_empty() || body.is_some() {
        easy.http_headers(list)?;
    }

    let mut out: Vec<u8> = Vec::new();
    let mut header_lines: Vec<String> = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            out.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    Ok(Response {
        status,
        body: out,
        header_lines,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proxy_alias_expansion() {
        assert_eq!(
            expand_proxy_alias(Some("tb")).as_deref(),
            Some("socks5://127.0.0.1:9150")
        );
        assert_eq!(
            expand_proxy_alias(Some("socks5://10.0.0.1:9050")).as_deref(),
            Some("socks5://10.0.0.1:9050")
        );
        assert_eq!(expand_proxy_alias(None), None);
    }

    #[test]
    fn response_header_lookup_takes_last_hop() {
        let resp = Response {
            status: 200,
            body: Vec::new(),
            header_lines: vec![
                "HTTP/1.1 302 Found".to_string(),
                "x-vqd-4: first".to_string(),
                "HTTP/1.1 200 OK".to_string(),
                "X-Vqd-4: second".to_string(),
                "Content-Type: text/html".to_string(),
            ],
        };
        assert_eq!(resp.header("x-vqd-4"), Some("second"));
        assert_eq!(resp.header("content-type"), Some("text/html"));
        assert_eq!(resp.header("missing"), None);
    }

    #[test]
    fn encode_params_escapes() {
        let encoded = encode_params(&[
            ("q".to_string(), "rust lang".to_string()),
            ("kl".to_string(), "wt-wt".to_string()),
        ]);
        assert_eq!(encoded, "q=rust+lang&kl=wt-wt");
    }
}
