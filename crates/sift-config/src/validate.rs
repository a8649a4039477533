//! Configuration validation.
//!
//! Validates a loaded configuration and reports warnings for potential issues.

use std::{fmt, net::SocketAddr};

use crate::{Config, MAX_FACET_SIZE};

/// A non-fatal warning about the configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigWarning {
    /// The promotion boost is zero, negative or not finite.
    NonPositiveBoost {
        /// Configured boost.
        boost: f32,
    },
    /// A page size setting is zero.
    ZeroPageSize {
        /// Name of the offending setting.
        setting: &'static str,
    },
    /// The default page size exceeds the maximum page size.
    DefaultPageSizeAboveMax {
        /// Configured default.
        default: u32,
        /// Configured maximum.
        max: u32,
    },
    /// Facets are configured to return no values.
    ZeroFacetSize,
    /// Facets are configured to return more values than are ever served.
    FacetSizeAboveMax {
        /// Configured size.
        size: usize,
        /// Cap applied at search time.
        max: usize,
    },
    /// The server bind address is not a socket address.
    InvalidBindAddress {
        /// Configured address.
        bind: String,
    },
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveBoost { boost } => {
                write!(f, "promoted_boost should be a positive number, got {boost}")
            }
            Self::ZeroPageSize { setting } => write!(f, "{setting} must be at least 1"),
            Self::DefaultPageSizeAboveMax { default, max } => write!(
                f,
                "default_page_size ({default}) exceeds max_page_size ({max})"
            ),
            Self::ZeroFacetSize => write!(f, "facet_size is 0, facets will always be empty"),
            Self::FacetSizeAboveMax { size, max } => write!(
                f,
                "facet_size ({size}) exceeds the cap of {max}, only {max} values are returned"
            ),
            Self::InvalidBindAddress { bind } => {
                write!(f, "server bind address is not host:port: {bind}")
            }
        }
    }
}

/// Validates the configuration and returns any warnings.
pub fn validate_config(config: &Config) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let search = &config.search;

    if !(search.promoted_boost.is_finite() && search.promoted_boost > 0.0) {
        warnings.push(ConfigWarning::NonPositiveBoost {
            boost: search.promoted_boost,
        });
    }

    if search.default_page_size == 0 {
        warnings.push(ConfigWarning::ZeroPageSize {
            setting: "default_page_size",
        });
    }
    if search.max_page_size == 0 {
        warnings.push(ConfigWarning::ZeroPageSize {
            setting: "max_page_size",
        });
    }
    if search.max_page_size > 0 && search.default_page_size > search.max_page_size {
        warnings.push(ConfigWarning::DefaultPageSizeAboveMax {
            default: search.default_page_size,
            max: search.max_page_size,
        });
    }

    if search.facet_size == 0 {
        warnings.push(ConfigWarning::ZeroFacetSize);
    }
    if search.facet_size > MAX_FACET_SIZE {
        warnings.push(ConfigWarning::FacetSizeAboveMax {
            size: search.facet_size,
            max: MAX_FACET_SIZE,
        });
    }

    if config.server.bind.parse::<SocketAddr>().is_err() {
        warnings.push(ConfigWarning::InvalidBindAddress {
            bind: config.server.bind.clone(),
        });
    }

    warnings
}
