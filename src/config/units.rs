//! Unit types for physical quantities.
//!
//! Provides type-safe representations of rail positions and step rates to
//! prevent unit confusion at compile time.

use core::ops::{Add, Neg, Sub};

use serde::Deserialize;

/// Rail position in motor steps (absolute from an arbitrary zero).
///
/// Uses i64 for unlimited range in either direction. The rail is open-loop:
/// this is a count of emitted step pulses, not a measured position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Deserialize)]
#[serde(transparent)]
pub struct Steps(pub i64);

impl Steps {
    /// Create a new Steps value.
    #[inline]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> i64 {
        self.0
    }

    /// Get absolute value as u64.
    #[inline]
    pub fn abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    /// Check for the zero position/distance.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl Add for Steps {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Steps {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Neg for Steps {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Step rate in steps per second. Sign encodes direction along the rail.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[serde(transparent)]
pub struct StepsPerSec(pub f32);

impl StepsPerSec {
    /// Create a new StepsPerSec value.
    #[inline]
    pub const fn new(value: f32) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Step interval in nanoseconds at this rate (ignoring sign).
    ///
    /// Returns `u32::MAX` for a zero rate.
    #[inline]
    pub fn interval_ns(self) -> u32 {
        let magnitude = if self.0 < 0.0 { -self.0 } else { self.0 };
        if magnitude > 0.0 {
            (1_000_000_000.0 / magnitude) as u32
        } else {
            u32::MAX
        }
    }

    /// Check whether the rate commands motion at all.
    #[inline]
    pub fn is_stopped(self) -> bool {
        self.0 == 0.0
    }
}

impl Neg for StepsPerSec {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
