//! vqd token extraction.
//!
//! The JSON endpoints require a per-query token that the engine embeds in
//! its front page markup, in one of a few quoting styles.

/// Finds the vqd token in a front-page body.
pub(super) fn extract_vqd(body: &str) -> Option<String> {
    for (prefix, terminator) in [("vqd=\"", '"'), ("vqd='", '\''), ("vqd=", '&')] {
        if let Some(start) = body.find(prefix) {
            let rest = &body[start + prefix.len()..];
            if let Some(end) = rest.find(terminator) {
                let token = &rest[..end];
                if !token.is_empty() {
                    return Some(token.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn double_quoted() {
        let body = r#"<script>nrji('/d.js?q=x&vqd="4-123456789"&kl=wt-wt');</script>"#;
        assert_eq!(extract_vqd(body).as_deref(), Some("4-123456789"));
    }

    #[test]
    fn single_quoted() {
        let body = "x=1;vqd='4-987';y=2";
        assert_eq!(extract_vqd(body).as_deref(), Some("4-987"));
    }

    #[test]
    fn bare_until_ampersand() {
        let body = "https://duckduckgo.com/i.js?q=cats&vqd=4-555&o=json";
        assert_eq!(extract_vqd(body).as_deref(), Some("4-555"));
    }

    #[test]
    fn missing_token() {
        assert_eq!(extract_vqd("<html>nothing here</html>"), None);
        assert_eq!(extract_vqd("vqd=\"\"rest"), None);
    }
}
