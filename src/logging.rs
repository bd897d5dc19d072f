//! Secret masking for log and CLI output.
//!
//! The API token and any `x-api-key` value go through [`MaskedSecret`]
//! before they reach a log line or the terminal.

use std::fmt;

/// Number of leading characters left visible
const VISIBLE_CHARS: usize = 4;

/// Shortest secret that gets a visible prefix; anything shorter is fully hidden
const MIN_MASKED_LEN: usize = 8;

/// Masked representation of a secret
///
/// Shows the first 4 characters followed by `***`.
#[derive(Clone, Copy, Debug)]
pub struct MaskedSecret<'a> {
    inner: &'a str,
}

impl<'a> MaskedSecret<'a> {
    /// # Example
    /// ```
    /// use tiered_pricing::logging::MaskedSecret;
    ///
    /// assert_eq!(MaskedSecret::new("prod-7f3a9c21").to_string(), "prod***");
    /// assert_eq!(MaskedSecret::new("short").to_string(), "***");
    /// ```
    pub fn new(secret: &'a str) -> Self {
        Self { inner: secret }
    }
}

impl fmt::Display for MaskedSecret<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inner.chars().count() < MIN_MASKED_LEN {
            return write!(f, "***");
        }

        let prefix: String = self.inner.chars().take(VISIBLE_CHARS).collect();
        write!(f, "{}***", prefix)
    }
}

/// Owned masked copy, for places that need a `String`
pub fn mask_secret(secret: &str) -> String {
    MaskedSecret::new(secret).to_string()
}
