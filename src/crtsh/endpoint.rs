//! crt.sh endpoint construction.

/// Public crt.sh search endpoint.
pub const DEFAULT_BASE_URL: &str = "https://crt.sh/";

/// Build the JSON search URL for a domain.
///
/// The domain is percent-encoded the way `encodeURIComponent` does it, and a
/// missing trailing `/` on the base URL is added.
pub fn query_url(base_url: &str, domain: &str) -> String {
    let separator = if base_url.ends_with('/') { "" } else { "/" };
    format!(
        "{base_url}{separator}?q={}&output=json",
        urlencoding::encode(domain)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_url_default() {
        assert_eq!(
            query_url(DEFAULT_BASE_URL, "example.com"),
            "https://crt.sh/?q=example.com&output=json"
        );
    }

    #[test]
    fn test_query_url_encodes_domain() {
        let url = query_url("http://127.0.0.1:9000", "%.example.com");
        assert_eq!(url, "http://127.0.0.1:9000/?q=%25.example.com&output=json");
    }
}
