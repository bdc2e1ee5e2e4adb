//! Error types for the focus-rail library.
//!
//! Provides unified error handling across configuration, motor control, and
//! input sampling. The control logic itself never fabricates errors: all
//! failure-like conditions (blocked buttons, triggered limits) are handled by
//! input gating, so `Error` only surfaces hardware pin faults and rejected
//! configuration.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all focus-rail operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Motor operation error
    Motor(MotorError),
    /// Input sampling error
    Input(InputError),
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Invalid manual speed (must be > 0)
    InvalidManualSpeed(f32),
    /// Invalid autofocus speed (must be > 0)
    InvalidAutofocusSpeed(f32),
    /// Invalid retraction distance (must be > 0)
    InvalidRetractSteps(u32),
    /// Invalid acceleration (must be > 0)
    InvalidAcceleration(f32),
    /// Speed ceiling below a commanded speed
    InvalidMaxSpeed {
        /// Commanded speed that exceeds the ceiling
        requested: f32,
        /// Configured ceiling
        max: f32,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq)]
pub enum MotorError {
    /// STEP or DIR pin operation failed
    PinError,
}

/// Input sampling errors.
#[derive(Debug, Clone, PartialEq)]
pub enum InputError {
    /// Button or limit switch pin read failed
    PinError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Input(e) => write!(f, "Input error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidManualSpeed(v) => {
                write!(f, "Invalid manual speed: {}. Must be > 0", v)
            }
            ConfigError::InvalidAutofocusSpeed(v) => {
                write!(f, "Invalid autofocus speed: {}. Must be > 0", v)
            }
            ConfigError::InvalidRetractSteps(v) => {
                write!(f, "Invalid retract steps: {}. Must be > 0", v)
            }
            ConfigError::InvalidAcceleration(v) => {
                write!(f, "Invalid acceleration: {}. Must be > 0", v)
            }
            ConfigError::InvalidMaxSpeed { requested, max } => {
                write!(f, "Commanded speed {} exceeds ceiling {}", requested, max)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::PinError => write!(f, "STEP/DIR pin operation failed"),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::PinError => write!(f, "button/limit switch read failed"),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
