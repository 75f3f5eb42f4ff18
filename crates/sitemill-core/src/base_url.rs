//! Base URL handling.
//!
//! Every `loc` written by sitemill is a reference resolved against the
//! site's base URL, following RFC 3986 rules.

use std::fmt;

use url::Url;

use crate::error::{CoreError, Result};

/// A URL that sitemap locations are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parse and validate a base URL.
    ///
    /// Fails when the input is not an absolute URL or cannot act as a base
    /// (e.g. `mailto:` URLs).
    pub fn parse(input: &str) -> Result<Self> {
        let url = Url::parse(input)?;
        if url.cannot_be_a_base() {
            return Err(CoreError::validation(format!(
                "URL cannot be used as a base: {input}"
            )));
        }
        if !url.path().ends_with('/') {
            tracing::warn!(
                base_url = %url,
                "base URL has no trailing slash, relative paths replace its last segment"
            );
        }
        Ok(Self(url))
    }

    /// Resolve `reference` against this base.
    ///
    /// Absolute paths (`/about/`) replace the base path; relative paths
    /// (`s1-1.xml`) are resolved against the base's directory.
    pub fn join(&self, reference: &str) -> Result<String> {
        Ok(self.0.join(reference)?.into())
    }

    /// The underlying URL.
    #[must_use]
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// The base URL as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BaseUrl {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
