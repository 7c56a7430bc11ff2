//! HTML page rendering.
//!
//! Every page is the same fixed shell with one `{{content}}` marker; only
//! the fragment placed there changes.

use crate::types::SubdomainSet;

/// Placeholder replaced by the page content.
pub const CONTENT_MARKER: &str = "{{content}}";

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Subdomain Lookup</title>
  <style>
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: 'Inter', sans-serif;
      background-color: #f5faff;
      color: #333;
      display: flex;
      flex-direction: column;
      align-items: center;
      padding: 20px;
      min-height: 100vh;
    }
    h1 { font-size: 36px; font-weight: 700; color: #007bff; margin-bottom: 30px; }
    .search-bar { display: flex; gap: 10px; width: 100%; max-width: 600px; margin-bottom: 30px; }
    .search-bar input[type="text"] {
      flex-grow: 1;
      padding: 14px 20px;
      font-size: 16px;
      border: 2px solid #ddd;
      border-radius: 8px;
    }
    .search-bar button {
      padding: 14px 20px;
      font-size: 16px;
      font-weight: 600;
      color: white;
      background-color: #007bff;
      border: none;
      border-radius: 8px;
      cursor: pointer;
    }
    .subdomain-list {
      width: 100%;
      max-width: 600px;
      max-height: 400px;
      background-color: #ffffff;
      border-radius: 8px;
      box-shadow: 0 4px 10px rgba(0, 0, 0, 0.1);
      overflow-y: auto;
      padding: 20px;
    }
    .subdomain-list p {
      padding: 8px 0;
      border-bottom: 1px solid #f0f0f0;
      word-wrap: break-word;
    }
    .subdomain-list p:last-child { border-bottom: none; }
  </style>
</head>
<body>
  <h1>Subdomain Lookup</h1>
  {{content}}
</body>
</html>
"#;

const SEARCH_FORM: &str = r#"<div class="search-bar">
    <form method="GET" action="/lookup">
      <input type="text" name="domain"
        placeholder="Enter domain name (e.g., example.com)" required />
      <button type="submit">Look Up</button>
    </form>
  </div>"#;

/// Substitute a content fragment into the page shell
pub fn render(fragment: &str) -> String {
    PAGE_TEMPLATE.replacen(CONTENT_MARKER, fragment, 1)
}

/// Bare search form
pub fn search_form() -> &'static str {
    SEARCH_FORM
}

/// Search form followed by one `<p>` per subdomain, each HTML-escaped
pub fn results_fragment(subdomains: &SubdomainSet) -> String {
    let entries: String = subdomains
        .iter()
        .map(|name| format!("<p>{}</p>", html_escape::encode_safe(name)))
        .collect();

    format!("{SEARCH_FORM}\n  <div class=\"subdomain-list\">{entries}</div>")
}

/// Home page with an empty search form
pub fn home_page() -> String {
    render(search_form())
}

/// Page listing lookup results
pub fn results_page(subdomains: &SubdomainSet) -> String {
    render(&results_fragment(subdomains))
}
