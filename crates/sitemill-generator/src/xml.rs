//! Shared XML helpers for sitemap documents.

use chrono::{DateTime, Utc};

/// XML namespace for sitemaps and sitemap indexes.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Declaration at the top of every generated document.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escape special XML characters.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Format a timestamp for `<lastmod>` (W3C datetime, seconds, UTC).
#[must_use]
pub fn format_lastmod(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Start a document with the declaration and an opening `root` element in
/// the sitemap namespace.
pub(crate) fn open_document(root: &str) -> String {
    let mut xml = String::with_capacity(4096);
    xml.push_str(XML_DECLARATION);
    xml.push('\n');
    xml.push_str(&format!(r#"<{root} xmlns="{SITEMAP_NS}">"#));
    xml.push('\n');
    xml
}
