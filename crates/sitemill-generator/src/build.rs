//! Incremental sitemap building.
//!
//! [`SitemapBuilder`] accumulates entries and writes a sitemap page every
//! time `per_map` entries have been collected, and an index every time
//! `per_index` pages have been written. Sitemap indexes are produced for any
//! number of entries, even below `per_map`.
//!
//! Only item counts are enforced; the 50MB size limit of the protocol is not.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use sitemill_core::{BaseUrl, Config, CoreError, Entry, Limits};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    index::IndexGenerator,
    naming::{index_file_name, page_file_name},
    sitemap::{SitemapError, SitemapGenerator},
};

/// Build errors.
#[derive(Debug, Error)]
pub enum BuildError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sitemap generation error.
    #[error("sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    /// Configuration or validation error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Entry was added without a path.
    #[error("entry path cannot be empty")]
    MissingPath,

    /// Builder was used after `close`.
    #[error("sitemap builder is already closed")]
    Closed,
}

/// Result type for build operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Counts of what a builder has produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SitemapStats {
    /// Number of entries added.
    pub entries: usize,

    /// Number of sitemap page files written.
    pub pages: usize,

    /// Number of sitemap index files written.
    pub indexes: usize,
}

/// Incrementally constructs and saves sitemaps and indexes of them.
///
/// Not safe for concurrent use: two builders writing to the same directory
/// overwrite each other's files.
#[derive(Debug)]
pub struct SitemapBuilder {
    output_dir: PathBuf,
    base_url: BaseUrl,
    limits: Limits,
    sitemap: SitemapGenerator,
    index: IndexGenerator,

    batch: Vec<Entry>,
    page_number: usize,
    index_number: usize,

    stats: SitemapStats,
    closed: bool,
}

impl SitemapBuilder {
    /// Create a builder writing into `output_dir`, which must already exist.
    pub fn new(output_dir: impl Into<PathBuf>, base_url: BaseUrl, limits: Limits) -> Result<Self> {
        limits.validate()?;

        Ok(Self {
            output_dir: output_dir.into(),
            sitemap: SitemapGenerator::new(base_url.clone()),
            index: IndexGenerator::new(base_url.clone()),
            base_url,
            limits,
            batch: Vec::new(),
            page_number: 1,
            index_number: 1,
            stats: SitemapStats::default(),
            closed: false,
        })
    }

    /// Create a builder from a loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        Self::new(config.output.dir.clone(), config.base_url()?, config.limits)
    }

    /// Add a page to the sitemap.
    ///
    /// Writes the current page (and possibly the current index) first when
    /// the page is already full.
    pub fn add(&mut self, entry: impl Into<Entry>) -> Result<()> {
        if self.closed {
            return Err(BuildError::Closed);
        }

        let entry = entry.into();
        if entry.path.is_empty() {
            return Err(BuildError::MissingPath);
        }

        if self.batch.len() == self.limits.per_map {
            self.rollover(false)?;
        }
        self.batch.push(entry);
        self.stats.entries += 1;
        Ok(())
    }

    /// Add every entry of `entries`, stopping at the first error.
    pub fn add_all<I>(&mut self, entries: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Entry>,
    {
        entries.into_iter().try_for_each(|entry| self.add(entry))
    }

    /// Finish writing to the file system.
    ///
    /// Always writes the current page, even when it is empty, and the current
    /// index. Must be called exactly once.
    pub fn close(&mut self) -> Result<SitemapStats> {
        if self.closed {
            return Err(BuildError::Closed);
        }

        self.rollover(true)?;
        self.closed = true;

        info!(
            output = %self.output_dir.display(),
            entries = self.stats.entries,
            pages = self.stats.pages,
            indexes = self.stats.indexes,
            "sitemaps written"
        );

        Ok(self.stats)
    }

    fn rollover(&mut self, force: bool) -> Result<()> {
        self.write_page()?;
        self.batch.clear();

        if self.page_number == self.limits.per_index {
            self.write_index()?;
            self.index_number += 1;
            self.page_number = 1;
        } else {
            if force {
                self.write_index()?;
            }
            self.page_number += 1;
        }
        Ok(())
    }

    fn write_page(&mut self) -> Result<()> {
        let name = page_file_name(self.index_number, self.page_number);
        let mut writer = self.create(&name)?;
        self.sitemap.write_to(&self.batch, &mut writer)?;
        writer.flush()?;

        self.stats.pages += 1;
        debug!(file = %name, entries = self.batch.len(), "wrote sitemap page");
        Ok(())
    }

    fn write_index(&mut self) -> Result<()> {
        let name = index_file_name(self.index_number);
        let mut writer = self.create(&name)?;
        self.index
            .write_to(self.index_number, self.page_number, &mut writer)?;
        writer.flush()?;

        self.stats.indexes += 1;
        debug!(file = %name, pages = self.page_number, "wrote sitemap index");
        Ok(())
    }

    fn create(&self, name: &str) -> Result<BufWriter<File>> {
        Ok(BufWriter::new(File::create(self.output_dir.join(name))?))
    }

    /// Directory pages and indexes are written to.
    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// URL sitemap locations are resolved against.
    #[must_use]
    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Pagination thresholds of this builder.
    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Counts so far; final once the builder is closed.
    #[must_use]
    pub fn stats(&self) -> SitemapStats {
        self.stats
    }

    /// Whether `close` has completed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn builder(dir: &Path, per_map: usize, per_index: usize) -> SitemapBuilder {
        SitemapBuilder::new(
            dir,
            BaseUrl::parse("http://example.com/sitemaps/").unwrap(),
            Limits::new(per_map, per_index).unwrap(),
        )
        .unwrap()
    }

    fn file_names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_add_writes_nothing_until_page_is_full() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 3, 3);

        for i in 0..3 {
            b.add(format!("/p/{i}/")).unwrap();
        }
        assert!(file_names(dir.path()).is_empty());

        b.add("/p/3/").unwrap();
        assert_eq!(file_names(dir.path()), vec!["s1-1.xml"]);
    }

    #[test]
    fn test_full_index_written_on_rollover() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 1, 2);

        b.add_all(["/a/", "/b/", "/c/"]).unwrap();

        assert_eq!(file_names(dir.path()), vec!["i1.xml", "s1-1.xml", "s1-2.xml"]);
        assert_eq!(b.stats().pages, 2);
        assert_eq!(b.stats().indexes, 1);
    }

    #[test]
    fn test_exactly_full_page_then_close() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 5, 5);

        b.add_all((0..5).map(|i| format!("/p/{i}/"))).unwrap();
        let stats = b.close().unwrap();

        assert_eq!(file_names(dir.path()), vec!["i1.xml", "s1-1.xml"]);
        assert_eq!(
            stats,
            SitemapStats {
                entries: 5,
                pages: 1,
                indexes: 1
            }
        );
    }

    #[test]
    fn test_close_on_empty_builder_writes_empty_page_and_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 5, 5);

        let stats = b.close().unwrap();

        assert_eq!(file_names(dir.path()), vec!["i1.xml", "s1-1.xml"]);
        assert_eq!(stats.pages, 1);
        assert_eq!(stats.indexes, 1);
        let page = fs::read_to_string(dir.path().join("s1-1.xml")).unwrap();
        assert!(!page.contains("<url>"));
        let index = fs::read_to_string(dir.path().join("i1.xml")).unwrap();
        assert_eq!(index.matches("<sitemap>").count(), 1);
    }

    #[test]
    fn test_close_with_full_last_index() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 2, 2);

        b.add_all(["/a/", "/b/", "/c/", "/d/"]).unwrap();
        let stats = b.close().unwrap();

        assert_eq!(
            file_names(dir.path()),
            vec!["i1.xml", "s1-1.xml", "s1-2.xml"]
        );
        assert_eq!(stats.indexes, 1);
    }

    #[test]
    fn test_add_after_close_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 5, 5);
        b.add("/a/").unwrap();
        b.close().unwrap();

        assert!(b.is_closed());
        assert!(matches!(b.add("/b/"), Err(BuildError::Closed)));
        assert!(matches!(b.close(), Err(BuildError::Closed)));
        assert_eq!(b.stats().entries, 1);
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut b = builder(dir.path(), 5, 5);

        assert!(matches!(b.add(""), Err(BuildError::MissingPath)));
        assert_eq!(b.stats().entries, 0);
    }

    #[test]
    fn test_missing_output_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let mut b = builder(&missing, 5, 5);

        b.add("/a/").unwrap();
        assert!(matches!(b.close(), Err(BuildError::Io(_))));
    }

    #[test]
    fn test_zero_limits_rejected() {
        let limits = Limits {
            per_map: 0,
            per_index: 1,
        };
        let result = SitemapBuilder::new(
            "out",
            BaseUrl::parse("http://example.com/").unwrap(),
            limits,
        );
        assert!(matches!(result, Err(BuildError::Core(_))));
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::new("https://example.com/maps/");
        config.output.dir = dir.path().to_path_buf();
        config.limits = Limits::new(10, 10).unwrap();

        let b = SitemapBuilder::from_config(&config).unwrap();
        assert_eq!(b.output_dir(), dir.path());
        assert_eq!(b.base_url().as_str(), "https://example.com/maps/");
        assert_eq!(b.limits(), Limits::new(10, 10).unwrap());
        assert!(!b.is_closed());
    }
}
