//! Configuration module for focus-rail.
//!
//! Provides types for loading and validating the rail configuration from
//! TOML files (with `std` feature) or pre-parsed data.

#[cfg(feature = "std")]
mod loader;
mod rail;
pub mod units;
mod validation;

pub use rail::{AutofocusConfig, RailConfig, SystemConfig};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Steps, StepsPerSec};
