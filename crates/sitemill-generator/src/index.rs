//! Sitemap index generation.
//!
//! An index lists the pages `s{n}-1.xml ..= s{n}-{count}.xml` of index
//! `n`. Every `<lastmod>` carries the time the index was written.

use std::io::Write;

use chrono::{DateTime, Utc};
use sitemill_core::BaseUrl;
use tracing::debug;

use crate::{
    naming::page_file_name,
    sitemap::Result,
    xml::{escape_xml, format_lastmod, open_document},
};

/// Sitemap index generator.
#[derive(Debug, Clone)]
pub struct IndexGenerator {
    base_url: BaseUrl,
}

impl IndexGenerator {
    /// Create a new index generator.
    #[must_use]
    pub fn new(base_url: BaseUrl) -> Self {
        Self { base_url }
    }

    /// Generate the index document for `index`, which owns `page_count` pages.
    pub fn generate(
        &self,
        index: usize,
        page_count: usize,
        generated_at: DateTime<Utc>,
    ) -> Result<String> {
        debug!(index, page_count, "generating sitemap index");

        let lastmod = format_lastmod(&generated_at);
        let mut xml = open_document("sitemapindex");

        for page in 1..=page_count {
            let loc = self.base_url.join(&page_file_name(index, page))?;
            xml.push_str("  <sitemap>\n");
            xml.push_str(&format!("    <loc>{}</loc>\n", escape_xml(&loc)));
            xml.push_str(&format!("    <lastmod>{lastmod}</lastmod>\n"));
            xml.push_str("  </sitemap>\n");
        }

        xml.push_str("</sitemapindex>\n");
        Ok(xml)
    }

    /// Write the index to a writer, stamped with the current time.
    pub fn write_to<W: Write>(
        &self,
        index: usize,
        page_count: usize,
        writer: &mut W,
    ) -> Result<()> {
        let xml = self.generate(index, page_count, Utc::now())?;
        writer.write_all(xml.as_bytes())?;
        Ok(())
    }
}
