//! sitemill core library
//!
//! Entry types, configuration, and error handling shared by the sitemill
//! sitemap generator.

pub mod base_url;
pub mod config;
pub mod entry;
pub mod error;

pub use base_url::BaseUrl;
pub use config::{Config, Limits, PROTOCOL_MAX_ITEMS};
pub use entry::{ChangeFreq, Entry, Priority};
pub use error::{CoreError, Result};
