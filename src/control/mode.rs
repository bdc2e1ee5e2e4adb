//! Operating mode and sequence state types.

/// Operating mode of the controller.
///
/// Starts in [`Manual`](Mode::Manual); there is no terminal mode. Controllers
/// without an autofocus trigger stay in Manual for their whole life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Held-button velocity control, limit switches gating each direction.
    Manual,
    /// One-shot scan-to-limit-then-retract sequence.
    Autofocus,
}

/// Phase of an in-flight autofocus sequence.
///
/// Each phase advances one motion step per control cycle and consults only
/// its own completion condition; every other input is ignored until the
/// sequence finishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SequencePhase {
    /// Travelling toward the positive stop until it triggers.
    Scanning,
    /// Backing off the triggered stop by the configured distance.
    Retracting,
}

/// What a control cycle did, for diagnostics.
///
/// Purely observational; callers may print it, log it, or drop it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Activity {
    /// No motion commanded; position frozen where the motor settled.
    Holding,
    /// Velocity-mode travel toward the positive stop.
    MovingUp,
    /// Velocity-mode travel toward the negative stop.
    MovingDown,
    /// Bounded back-off from the negative stop (manual-only controllers).
    BackingOff,
    /// Autofocus scan toward the positive stop.
    Scanning,
    /// Autofocus retraction from the positive stop.
    Retracting,
    /// Sequence finished; waiting for the trigger button to be released.
    AwaitingRelease,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_equality() {
        assert_eq!(Mode::Manual, Mode::Manual);
        assert_ne!(Mode::Manual, Mode::Autofocus);
    }

    #[test]
    fn test_phase_equality() {
        assert_ne!(SequencePhase::Scanning, SequencePhase::Retracting);
    }
}
