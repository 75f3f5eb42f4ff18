//! Robots.txt sitemap lines.
//!
//! Produces `Sitemap: <url>` lines referencing every index a closed builder
//! wrote. Writing robots.txt itself is left to the caller.

use std::{fs, path::Path};

use sitemill_core::{BaseUrl, CoreError};
use thiserror::Error;
use tracing::debug;

use crate::{
    build::{SitemapBuilder, SitemapStats},
    naming::{index_file_name, parse_index_file_name},
};

/// Robots line generation errors.
#[derive(Debug, Error)]
pub enum RobotsError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Index URL could not be resolved.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Lines were requested from a builder that has not been closed.
    #[error("sitemap builder must be closed before generating robots lines")]
    NotClosed,
}

/// Result type for robots line generation.
pub type Result<T> = std::result::Result<T, RobotsError>;

/// Lazy sequence of `Sitemap:` lines for indexes `1..=count`.
#[derive(Debug, Clone)]
pub struct RobotsLines {
    base_url: BaseUrl,
    next: usize,
    count: usize,
}

impl RobotsLines {
    /// Count the index files in `output_dir` and reference each of them.
    ///
    /// Lines are ordered by index number, independently of directory
    /// listing order.
    pub fn scan(output_dir: &Path, base_url: &BaseUrl) -> Result<Self> {
        let mut count = 0;
        for entry in fs::read_dir(output_dir)? {
            let entry = entry?;
            let name = entry.file_name();
            let is_index = name.to_str().and_then(parse_index_file_name).is_some();
            if is_index && entry.file_type()?.is_file() {
                count += 1;
            }
        }

        debug!(
            output = %output_dir.display(),
            indexes = count,
            "scanned sitemap indexes"
        );
        Ok(Self::with_count(count, base_url))
    }

    /// Reference the indexes reported by a closed builder's stats.
    #[must_use]
    pub fn from_stats(stats: &SitemapStats, base_url: &BaseUrl) -> Self {
        Self::with_count(stats.indexes, base_url)
    }

    /// Scan the output directory of a closed builder.
    pub fn for_builder(builder: &SitemapBuilder) -> Result<Self> {
        if !builder.is_closed() {
            return Err(RobotsError::NotClosed);
        }
        Self::scan(builder.output_dir(), builder.base_url())
    }

    fn with_count(count: usize, base_url: &BaseUrl) -> Self {
        Self {
            base_url: base_url.clone(),
            next: 1,
            count,
        }
    }
}

impl Iterator for RobotsLines {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.count {
            return None;
        }
        let index = self.next;
        self.next += 1;

        Some(
            self.base_url
                .join(&index_file_name(index))
                .map(|url| format!("Sitemap: {url}"))
                .map_err(RobotsError::from),
        )
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RobotsLines {}
