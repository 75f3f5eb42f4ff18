//! Sitemap entry types.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// How frequently a page is likely to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    /// Every variant, from most to least frequent.
    pub const ALL: [ChangeFreq; 7] = [
        Self::Always,
        Self::Hourly,
        Self::Daily,
        Self::Weekly,
        Self::Monthly,
        Self::Yearly,
        Self::Never,
    ];

    /// Text written into `<changefreq>`.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChangeFreq {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|freq| freq.as_str() == s)
            .ok_or_else(|| CoreError::validation(format!("unknown change frequency: {s:?}")))
    }
}

/// Relative priority of a URL, stored as the literal text written into
/// `<priority>`.
///
/// Numbers are formatted with exactly one decimal place; strings are kept
/// verbatim. Ranges are not checked.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Priority(String);

impl Priority {
    /// The stored text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the stored text is empty; empty priorities are not written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<f64> for Priority {
    fn from(value: f64) -> Self {
        Self(format!("{value:.1}"))
    }
}

impl From<f32> for Priority {
    fn from(value: f32) -> Self {
        Self(format!("{value:.1}"))
    }
}

impl From<i32> for Priority {
    fn from(value: i32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<u32> for Priority {
    fn from(value: u32) -> Self {
        Self::from(f64::from(value))
    }
}

impl From<&str> for Priority {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// One URL to be listed in a sitemap page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// URL path of the page (e.g. `/something/`), resolved against the base URL.
    pub path: String,

    /// Last modification time.
    pub lastmod: Option<DateTime<Utc>>,

    /// How often the page changes.
    pub changefreq: Option<ChangeFreq>,

    /// Priority relative to other URLs of the site.
    pub priority: Option<Priority>,
}

impl Entry {
    /// Create an entry with only a path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            lastmod: None,
            changefreq: None,
            priority: None,
        }
    }

    /// Set the last modification time.
    #[must_use]
    pub fn lastmod(mut self, lastmod: DateTime<Utc>) -> Self {
        self.lastmod = Some(lastmod);
        self
    }

    /// Set the change frequency.
    #[must_use]
    pub fn changefreq(mut self, changefreq: ChangeFreq) -> Self {
        self.changefreq = Some(changefreq);
        self
    }

    /// Set the priority.
    #[must_use]
    pub fn priority(mut self, priority: impl Into<Priority>) -> Self {
        self.priority = Some(priority.into());
        self
    }
}

impl From<&str> for Entry {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for Entry {
    fn from(path: String) -> Self {
        Self::new(path)
    }
}
