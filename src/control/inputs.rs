//! Input sampling for buttons and limit switches.
//!
//! All inputs are wired active-low with pull-ups: a pressed button or a
//! triggered limit switch reads LOW. Samples are taken fresh every control
//! cycle and never cached, since the limit switches gate motion safety.
//! There is no explicit debounce; the loop cadence is the only filter.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType, InputPin};

use crate::error::{Error, InputError, Result};

/// One cycle's worth of input state.
///
/// `true` means active: button pressed, limit switch triggered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputSnapshot {
    /// Up (toward positive stop) button pressed.
    pub up: bool,
    /// Down (toward negative stop) button pressed.
    pub down: bool,
    /// Autofocus trigger button pressed.
    pub autofocus: bool,
    /// Positive end-of-travel switch triggered.
    pub positive_limit: bool,
    /// Negative end-of-travel switch triggered.
    pub negative_limit: bool,
}

impl InputSnapshot {
    /// A snapshot with nothing active.
    pub const fn idle() -> Self {
        Self {
            up: false,
            down: false,
            autofocus: false,
            positive_limit: false,
            negative_limit: false,
        }
    }
}

/// Placeholder for an input that is not wired up.
///
/// Reads as a floating pull-up: always high, never active. Stands in for the
/// autofocus trigger on hardware without that button.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unwired;

impl ErrorType for Unwired {
    type Error = Infallible;
}

impl InputPin for Unwired {
    fn is_high(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(true)
    }

    fn is_low(&mut self) -> core::result::Result<bool, Self::Error> {
        Ok(false)
    }
}

/// Samples the five control inputs from embedded-hal pins.
///
/// Generic over the pin types; the autofocus trigger defaults to
/// [`Unwired`] for hardware without that button.
pub struct PinSampler<UP, DOWN, POS, NEG, AF = Unwired> {
    up: UP,
    down: DOWN,
    positive: POS,
    negative: NEG,
    autofocus: AF,
}

impl<UP, DOWN, POS, NEG> PinSampler<UP, DOWN, POS, NEG> {
    /// Create a sampler for the two buttons and two limit switches.
    pub fn new(up: UP, down: DOWN, positive: POS, negative: NEG) -> Self {
        Self {
            up,
            down,
            positive,
            negative,
            autofocus: Unwired,
        }
    }
}

impl<UP, DOWN, POS, NEG, AF> PinSampler<UP, DOWN, POS, NEG, AF> {
    /// Attach the autofocus trigger button.
    pub fn with_autofocus<T: InputPin>(self, pin: T) -> PinSampler<UP, DOWN, POS, NEG, T> {
        PinSampler {
            up: self.up,
            down: self.down,
            positive: self.positive,
            negative: self.negative,
            autofocus: pin,
        }
    }
}

impl<UP, DOWN, POS, NEG, AF> PinSampler<UP, DOWN, POS, NEG, AF>
where
    UP: InputPin,
    DOWN: InputPin,
    POS: InputPin,
    NEG: InputPin,
    AF: InputPin,
{
    /// Read every input fresh.
    pub fn sample(&mut self) -> Result<InputSnapshot> {
        Ok(InputSnapshot {
            up: active(&mut self.up)?,
            down: active(&mut self.down)?,
            autofocus: active(&mut self.autofocus)?,
            positive_limit: active(&mut self.positive)?,
            negative_limit: active(&mut self.negative)?,
        })
    }
}

/// Active-low read: LOW means pressed/triggered.
fn active<P: InputPin>(pin: &mut P) -> Result<bool> {
    pin.is_low().map_err(|_| Error::Input(InputError::PinError))
}
