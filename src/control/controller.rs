//! The per-cycle motion control state machine.
//!
//! [`FocusController`] decides each control cycle what to command from the
//! motion driver: held-button velocity moves gated by the limit switches, or
//! the one-shot autofocus scan-and-retract sequence. Scan and retraction run
//! as explicit phases advanced one motion step per cycle; while a phase is
//! active only its own completion condition is consulted and every other
//! input is ignored, so a sequence always runs to completion once started.
//!
//! There are no timeouts: a limit switch that never triggers or a target
//! that is never reached leaves the controller in its current phase
//! indefinitely.

use crate::config::units::{Steps, StepsPerSec};
use crate::config::RailConfig;
use crate::driver::MotionDriver;
use crate::error::Result;

use super::inputs::InputSnapshot;
use super::mode::{Activity, Mode, SequencePhase};

/// Motion control state machine for one rail.
///
/// Owns all control state; the motion driver and input sampler are passed in
/// per tick so simulated implementations can stand in during tests.
///
/// # Safety invariants
///
/// - Motion toward a currently-triggered limit switch is never commanded.
/// - The rail never rests at the positive stop's trigger point: the scan
///   sequence always retracts afterward.
///
/// When both movement buttons are held, Up wins; Down is only evaluated when
/// Up is not actionable. This tie-break is contractual, not incidental.
pub struct FocusController {
    /// Held-button travel speed.
    manual_speed: StepsPerSec,

    /// Scan speed; `None` for manual-only controllers.
    autofocus_speed: Option<StepsPerSec>,

    /// Back-off distance from a triggered stop.
    retract: Steps,

    /// Current operating mode.
    mode: Mode,

    /// In-flight autofocus sequence phase.
    sequence: Option<SequencePhase>,

    /// Bounded back-off from the negative stop in flight (manual-only).
    backing_off: bool,
}

impl FocusController {
    /// Create a controller from a rail configuration.
    ///
    /// The presence of the `[rail.autofocus]` table decides whether this
    /// controller answers the autofocus trigger.
    pub fn from_config(config: &RailConfig) -> Self {
        Self {
            manual_speed: config.manual_speed,
            autofocus_speed: config.autofocus_speed(),
            retract: Steps(config.retract_steps as i64),
            mode: Mode::Manual,
            sequence: None,
            backing_off: false,
        }
    }

    /// Current operating mode.
    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether a scan-and-retract sequence is underway.
    ///
    /// True only while [`mode`](Self::mode) is [`Mode::Autofocus`]; set when
    /// the sequence starts and cleared when its retraction completes.
    #[inline]
    pub fn autofocus_in_progress(&self) -> bool {
        self.sequence.is_some()
    }

    /// Phase of the in-flight autofocus sequence, if any.
    #[inline]
    pub fn sequence_phase(&self) -> Option<SequencePhase> {
        self.sequence
    }

    /// Whether a manual back-off from the negative stop is in flight.
    #[inline]
    pub fn is_backing_off(&self) -> bool {
        self.backing_off
    }

    /// Whether this controller answers the autofocus trigger.
    #[inline]
    pub fn has_autofocus(&self) -> bool {
        self.autofocus_speed.is_some()
    }

    /// Run one control cycle.
    ///
    /// `inputs` must be sampled fresh for this cycle. At most one motion step
    /// is executed per call, so inputs stay responsive whenever no sequence
    /// is in flight.
    pub fn tick<D: MotionDriver>(
        &mut self,
        inputs: &InputSnapshot,
        driver: &mut D,
    ) -> Result<Activity> {
        match self.mode {
            Mode::Manual => self.tick_manual(inputs, driver),
            Mode::Autofocus => self.tick_autofocus(inputs, driver),
        }
    }

    /// Manual mode: held-button velocity moves, limit switches gating each
    /// direction.
    fn tick_manual<D: MotionDriver>(
        &mut self,
        inputs: &InputSnapshot,
        driver: &mut D,
    ) -> Result<Activity> {
        if self.backing_off {
            // Only distance-to-go matters until the back-off lands
            driver.step_position()?;
            if driver.distance_to_go().is_zero() {
                self.backing_off = false;
                #[cfg(feature = "defmt")]
                defmt::info!("back-off from negative stop complete");
            }
            return Ok(Activity::BackingOff);
        }

        // The autofocus trigger outranks the movement buttons
        if self.autofocus_speed.is_some() && inputs.autofocus {
            self.mode = Mode::Autofocus;
            self.sequence = Some(SequencePhase::Scanning);
            #[cfg(feature = "defmt")]
            defmt::info!("switching to autofocus mode");
            return Ok(Activity::Scanning);
        }

        if inputs.up && !inputs.positive_limit {
            driver.set_velocity(self.manual_speed);
            driver.step_velocity()?;
            Ok(Activity::MovingUp)
        } else if inputs.down && !inputs.negative_limit {
            driver.set_velocity(-self.manual_speed);
            driver.step_velocity()?;
            Ok(Activity::MovingDown)
        } else if inputs.down && inputs.negative_limit && self.autofocus_speed.is_none() {
            // Manual-only controllers back off the negative stop on contact.
            // Dual-mode controllers fall through and hold instead; only the
            // autofocus sequence retracts from the positive stop.
            driver.halt();
            driver.move_by(self.retract);
            self.backing_off = true;
            #[cfg(feature = "defmt")]
            defmt::info!("negative stop contact, backing off");
            Ok(Activity::BackingOff)
        } else {
            // Freeze the open-loop position where the motor settled
            driver.halt();
            let settled = driver.distance_to_go();
            driver.set_current_position(settled);
            Ok(Activity::Holding)
        }
    }

    /// Autofocus mode: advance the in-flight sequence, or wait for the
    /// trigger to be released once it is done.
    fn tick_autofocus<D: MotionDriver>(
        &mut self,
        inputs: &InputSnapshot,
        driver: &mut D,
    ) -> Result<Activity> {
        match self.sequence {
            Some(SequencePhase::Scanning) => {
                if inputs.positive_limit {
                    // The stop is a binary trigger with no positional
                    // precision; back off a fixed worst-case distance
                    driver.halt();
                    driver.move_by(-self.retract);
                    self.sequence = Some(SequencePhase::Retracting);
                    #[cfg(feature = "defmt")]
                    defmt::info!("positive stop triggered, retracting");
                    Ok(Activity::Retracting)
                } else {
                    driver.set_velocity(self.autofocus_speed.unwrap_or(self.manual_speed));
                    driver.step_velocity()?;
                    Ok(Activity::Scanning)
                }
            }
            Some(SequencePhase::Retracting) => {
                driver.step_position()?;
                if driver.distance_to_go().is_zero() {
                    self.sequence = None;
                    #[cfg(feature = "defmt")]
                    defmt::info!("autofocus retract complete");
                }
                Ok(Activity::Retracting)
            }
            None => {
                // Stay here while the trigger is held so a single press
                // runs a single sequence
                if inputs.autofocus {
                    Ok(Activity::AwaitingRelease)
                } else {
                    self.mode = Mode::Manual;
                    #[cfg(feature = "defmt")]
                    defmt::info!("autofocus complete, returning to manual mode");
                    Ok(Activity::Holding)
                }
            }
        }
    }
}
