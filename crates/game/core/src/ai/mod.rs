//! Combat AI state machine.
//!
//! States only decide which transition or action applies. Distance checks and
//! cooldown bookkeeping happen in the controller and on the character, which
//! condense them into a [`Perception`] before calling [`step`].
//!
//! ```text
//! Idle ⇄ Alert ⇄ Chase ⇄ Attack
//!   any ──(Life at minimum)──► Dying
//! ```

mod state;

pub use state::{AiAction, AiState, Perception, Step, step};
