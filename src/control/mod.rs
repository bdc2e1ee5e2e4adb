//! Control module for focus-rail.
//!
//! Provides the per-cycle control core: input sampling, the operating-mode
//! state machine, manual motion gating, and the scan/retract sequencer.

mod controller;
mod inputs;
mod mode;

pub use controller::FocusController;
pub use inputs::{InputSnapshot, PinSampler, Unwired};
pub use mode::{Activity, Mode, SequencePhase};
