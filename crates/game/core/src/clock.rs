//! Simulation time source.
//!
//! Every time-dependent value in the core (modifier expiry, cooldowns, pending
//! skill uses) reads [`Clock`] instead of the wall clock. The host advances it
//! once per step and may reset it between runs for deterministic tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::error::{ErrorSeverity, GameError};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct ClockState {
    time: f32,
    delta_time: f32,
}

/// Shared, single-threaded handle to the simulation time.
///
/// Cloning a `Clock` yields another handle to the *same* time: attributes and
/// characters keep a clone, the host keeps the original and drives it.
/// Independent simulations (parallel tests) construct independent clocks.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    state: Rc<Cell<ClockState>>,
}

impl Clock {
    /// Creates a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current simulation time in seconds.
    #[inline]
    pub fn time(&self) -> f32 {
        self.state.get().time
    }

    /// Difference between the current and the previous time.
    ///
    /// Only meaningful immediately after a time update.
    #[inline]
    pub fn delta_time(&self) -> f32 {
        self.state.get().delta_time
    }

    /// Moves the clock to `time`.
    ///
    /// Time never runs backwards: a smaller `time` is rejected and leaves the
    /// clock untouched. Setting the same time again yields `delta_time == 0`.
    ///
    /// # Errors
    ///
    /// Returns [`ClockError::Backwards`] when `time` precedes the current time and
    /// [`ClockError::NonFinite`] for NaN or infinite input.
    pub fn set_time(&self, time: f32) -> Result<(), ClockError> {
        if !time.is_finite() {
            tracing::warn!(time, "rejected non-finite clock time");
            return Err(ClockError::NonFinite(time));
        }

        let previous = self.state.get();
        if time < previous.time {
            tracing::warn!(
                previous = previous.time,
                requested = time,
                "rejected backwards clock update"
            );
            return Err(ClockError::Backwards {
                previous: previous.time,
                requested: time,
            });
        }

        self.state.set(ClockState {
            time,
            delta_time: time - previous.time,
        });
        Ok(())
    }

    /// Advances the clock by `delta` seconds.
    pub fn advance(&self, delta: f32) -> Result<(), ClockError> {
        self.set_time(self.time() + delta)
    }

    /// Zeroes both time and delta time.
    pub fn reset(&self) {
        self.state.set(ClockState::default());
    }
}

/// Errors raised by [`Clock`] updates.
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum ClockError {
    #[error("clock cannot move backwards from {previous} to {requested}")]
    Backwards { previous: f32, requested: f32 },

    #[error("clock time must be finite, got {0}")]
    NonFinite(f32),
}

impl GameError for ClockError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Backwards { .. } => "CLOCK_BACKWARDS",
            Self::NonFinite(_) => "CLOCK_NON_FINITE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_time_tracks_delta() {
        let clock = Clock::new();
        clock.set_time(1.5).unwrap();
        assert_eq!(clock.time(), 1.5);
        assert_eq!(clock.delta_time(), 1.5);

        clock.set_time(2.0).unwrap();
        assert_eq!(clock.time(), 2.0);
        assert_eq!(clock.delta_time(), 0.5);
    }

    #[test]
    fn clones_share_time() {
        let clock = Clock::new();
        let handle = clock.clone();
        clock.set_time(4.0).unwrap();
        assert_eq!(handle.time(), 4.0);
    }

    #[test]
    fn backwards_update_is_rejected_without_change() {
        let clock = Clock::new();
        clock.set_time(5.0).unwrap();

        let result = clock.set_time(3.0);
        assert!(matches!(result, Err(ClockError::Backwards { .. })));
        assert_eq!(clock.time(), 5.0);
        assert_eq!(clock.delta_time(), 5.0);
    }

    #[test]
    fn non_finite_time_is_rejected() {
        let clock = Clock::new();
        assert!(matches!(
            clock.set_time(f32::NAN),
            Err(ClockError::NonFinite(_))
        ));
        assert!(clock.set_time(f32::INFINITY).is_err());
        assert_eq!(clock.time(), 0.0);
    }

    #[test]
    fn reset_zeroes_both_fields() {
        let clock = Clock::new();
        clock.advance(2.0).unwrap();
        clock.advance(1.0).unwrap();
        clock.reset();
        assert_eq!(clock.time(), 0.0);
        assert_eq!(clock.delta_time(), 0.0);
    }

    #[test]
    fn error_codes_are_stable() {
        let err = ClockError::Backwards {
            previous: 1.0,
            requested: 0.0,
        };
        assert_eq!(err.error_code(), "CLOCK_BACKWARDS");
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }
}
