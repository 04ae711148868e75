//! Centralized configuration for the converter.
//!
//! Single tunable today: the namespace domain suffix appended to every
//! derived output-file stem. Env takes effect first (TM2SNIP_DOMAIN), the
//! CLI flag overrides it via the fluent setter.

use std::fmt;

pub const DEFAULT_DOMAIN: &str = "zope";

/// Converter configuration.
#[derive(Clone, Debug)]
pub struct ConvertConfig {
    /// Domain suffix joined onto every namespace key (e.g. "python-django-zope").
    /// Env: TM2SNIP_DOMAIN (default "zope")
    pub domain: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("TM2SNIP_DOMAIN") {
            let s = v.trim();
            if !s.is_empty() {
                cfg.domain = s.to_string();
            }
        }

        cfg
    }

    /// Fluent setter to override the domain suffix.
    pub fn with_domain<S: Into<String>>(mut self, domain: S) -> Self {
        self.domain = domain.into();
        self
    }
}

impl fmt::Display for ConvertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConvertConfig {{ domain: {} }}", self.domain)
    }
}
