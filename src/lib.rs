//! # focus-rail
//!
//! Limit-switch-bounded focus rail control with embedded-hal 1.0 support.
//!
//! Positions a motorized linear rail (e.g. a camera focus stage) with a
//! stepper motor between two hard limit switches, under held-button manual
//! control or a one-shot scan-to-limit-then-retract sequence.
//!
//! ## Features
//!
//! - **Configuration-driven**: Speeds and retraction distance in a TOML file
//! - **embedded-hal 1.0**: `OutputPin` for STEP/DIR, `InputPin` for buttons
//!   and limit switches, `DelayNs` for timing
//! - **no_std compatible**: Core library works without standard library
//! - **Limit gating**: Motion toward a triggered limit switch is never
//!   commanded
//! - **Non-blocking sequences**: Scan and retraction advance one motion step
//!   per control cycle
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use focus_rail::{FocusController, PinSampler, RailDriver};
//!
//! // Load configuration from TOML
//! let config = focus_rail::load_config("rail.toml")?;
//!
//! // Create the step/dir driver with embedded-hal pins
//! let mut driver = RailDriver::builder()
//!     .step_pin(step_pin)
//!     .dir_pin(dir_pin)
//!     .delay(delay)
//!     .from_config(&config.rail)
//!     .build()?;
//!
//! let mut inputs = PinSampler::new(up_pin, down_pin, pos_limit, neg_limit)
//!     .with_autofocus(autofocus_pin);
//! let mut controller = FocusController::from_config(&config.rail);
//!
//! loop {
//!     let snapshot = inputs.sample()?;
//!     controller.tick(&snapshot, &mut driver)?;
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O and TOML parsing
//! - `alloc`: Enables heap allocation for no_std with allocator
//! - `defmt`: Enables defmt logging for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Core modules
pub mod config;
pub mod control;
pub mod driver;
pub mod error;

// Re-exports for ergonomic API
pub use config::{validate_config, AutofocusConfig, RailConfig, SystemConfig};
pub use control::{
    Activity, FocusController, InputSnapshot, Mode, PinSampler, SequencePhase, Unwired,
};
pub use driver::{Direction, MotionDriver, RailDriver, RailDriverBuilder, RampProfile};
pub use error::{Error, Result};

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Steps, StepsPerSec};
