//! Sitemap page generation.
//!
//! Renders one batch of entries as a `<urlset>` document:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/about/</loc>
//!     <lastmod>2025-01-01T00:00:00Z</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>0.3</priority>
//!   </url>
//! </urlset>
//! ```

use std::io::Write;

use sitemill_core::{BaseUrl, CoreError, Entry};
use thiserror::Error;
use tracing::debug;

use crate::xml::{escape_xml, format_lastmod, open_document};

/// Sitemap generation errors.
#[derive(Debug, Error)]
pub enum SitemapError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry or URL could not be resolved.
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;

/// Sitemap page generator.
#[derive(Debug, Clone)]
pub struct SitemapGenerator {
    base_url: BaseUrl,
}

impl SitemapGenerator {
    /// Create a new sitemap generator.
    #[must_use]
    pub fn new(base_url: BaseUrl) -> Self {
        Self { base_url }
    }

    /// Generate sitemap XML from entries, in order.
    pub fn generate(&self, entries: &[Entry]) -> Result<String> {
        debug!(count = entries.len(), "generating sitemap page");

        let mut xml = open_document("urlset");
        for entry in entries {
            xml.push_str(&self.entry_to_xml(entry)?);
        }
        xml.push_str("</urlset>\n");

        Ok(xml)
    }

    /// Convert an entry to a `<url>` element.
    fn entry_to_xml(&self, entry: &Entry) -> Result<String> {
        let loc = self.base_url.join(&entry.path)?;

        let mut xml = String::from("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));

        if let Some(lastmod) = &entry.lastmod {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                format_lastmod(lastmod)
            ));
        }

        if let Some(changefreq) = &entry.changefreq {
            xml.push_str(&format!(
                "    <changefreq>{}</changefreq>\n",
                changefreq.as_str()
            ));
        }

        if let Some(priority) = entry.priority.as_ref().filter(|p| !p.is_empty()) {
            xml.push_str(&format!(
                "    <priority>{}</priority>\n",
                escape_xml(priority.as_str())
            ));
        }

        xml.push_str("  </url>\n");
        Ok(xml)
    }

    /// Write sitemap to a writer.
    pub fn write_to<W: Write>(&self, entries: &[Entry], writer: &mut W) -> Result<()> {
        let xml = self.generate(entries)?;
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }
}
