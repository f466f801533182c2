//! Error types for the Beaker workspace.
//!
//! Organized by subsystem: the entity store and the world configuration.
//! A [`StoreError::NotFound`] during event drain is an expected race (the
//! entity was already processed by an earlier event) and is handled by
//! skipping, never treated as fatal. Configuration errors are fatal and
//! raised at world construction, before any tick runs.

use std::error::Error;
use std::fmt;

/// Errors from stable-id store lookups.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// The id is unknown or its slot has been tombstoned.
    NotFound,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => write!(f, "stable id not found (unknown or tombstoned)"),
        }
    }
}

impl Error for StoreError {}

/// Errors detected during [`WorldConfig::validate()`](crate::config::WorldConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The heat map must have at least one bucket.
    ZeroHeatBuckets,
    /// `min_radius` must be strictly below `max_radius`.
    RadiusRangeEmpty {
        /// Configured minimum radius.
        min: f64,
        /// Configured maximum radius.
        max: f64,
    },
    /// World width and height must be positive and finite.
    NonPositiveExtent {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// A threshold that must be non-negative and finite is not.
    NegativeThreshold {
        /// Name of the offending configuration field.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A divisor that must be positive and finite is not.
    NonPositiveDivisor {
        /// Name of the offending configuration field.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// A rate or fraction that must lie in `[0, 1]` does not.
    RateOutOfRange {
        /// Name of the offending configuration field.
        name: &'static str,
        /// The invalid value.
        value: f64,
    },
    /// The population capacity must be at least 1.
    ZeroCapacity,
    /// The per-tick behavior cycle budget must be at least 1.
    ZeroCycleBudget,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHeatBuckets => write!(f, "heat_buckets must be at least 1"),
            Self::RadiusRangeEmpty { min, max } => {
                write!(f, "min_radius ({min}) must be below max_radius ({max})")
            }
            Self::NonPositiveExtent { width, height } => {
                write!(f, "world extent must be positive, got {width} x {height}")
            }
            Self::NegativeThreshold { name, value } => {
                write!(f, "{name} must be non-negative and finite, got {value}")
            }
            Self::NonPositiveDivisor { name, value } => {
                write!(f, "{name} must be positive and finite, got {value}")
            }
            Self::RateOutOfRange { name, value } => {
                write!(f, "{name} must lie in [0, 1], got {value}")
            }
            Self::ZeroCapacity => write!(f, "max_population must be at least 1"),
            Self::ZeroCycleBudget => write!(f, "cycle_budget must be at least 1"),
        }
    }
}

impl Error for ConfigError {}
