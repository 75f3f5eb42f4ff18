//! sitemill generator library
//!
//! Incremental generation of paginated sitemaps and sitemap indexes.
//!
//! # Modules
//!
//! - [`build`] - Paginating builder that decides rollover and writes files
//! - [`sitemap`] - Sitemap page (`<urlset>`) generation
//! - [`index`] - Sitemap index (`<sitemapindex>`) generation
//! - [`naming`] - File names of pages and indexes
//! - [`robots`] - `Sitemap:` lines for robots.txt
//! - [`xml`] - Shared XML helpers

pub mod build;
pub mod index;
pub mod naming;
pub mod robots;
pub mod sitemap;
pub mod xml;

pub use build::{BuildError, SitemapBuilder, SitemapStats};
pub use index::IndexGenerator;
pub use robots::{RobotsError, RobotsLines};
pub use sitemap::{SitemapError, SitemapGenerator};
