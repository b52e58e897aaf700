//! Additive attribute modifiers.
//!
//! A modifier adds a flat amount to an attribute's effective value while it is
//! active. Time-based modifiers stamp an absolute end time when they are
//! attached (`clock.time + duration`) and are active while `end_time > now`.
//! Expired modifiers are purged lazily by the next read of the attribute.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::clock::Clock;

static NEXT_MODIFIER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a single modifier instance, used by `remove_modifier`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModifierId(u64);

impl ModifierId {
    fn next() -> Self {
        Self(NEXT_MODIFIER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Activation policy of a modifier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ModifierDuration {
    /// Active until explicitly removed.
    Permanent,

    /// Active for `duration` seconds after being attached.
    TimeBased { duration: f32 },
}

/// A flat contribution to an attribute's value.
///
/// Modifiers are never shared: every application creates a fresh instance
/// with its own [`ModifierId`], which is why this type is not `Clone`.
#[derive(Debug)]
pub struct AttributeModifier {
    id: ModifierId,
    name: String,
    value: f32,
    duration: ModifierDuration,
    end_time: Option<f32>,
}

impl AttributeModifier {
    pub fn new(name: impl Into<String>, value: f32, duration: ModifierDuration) -> Self {
        Self {
            id: ModifierId::next(),
            name: name.into(),
            value,
            duration,
            end_time: None,
        }
    }

    pub fn permanent(name: impl Into<String>, value: f32) -> Self {
        Self::new(name, value, ModifierDuration::Permanent)
    }

    pub fn time_based(name: impl Into<String>, value: f32, duration: f32) -> Self {
        Self::new(name, value, ModifierDuration::TimeBased { duration })
    }

    pub fn id(&self) -> ModifierId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn duration(&self) -> ModifierDuration {
        self.duration
    }

    /// Absolute expiry time, once activated. `None` for permanent modifiers.
    pub fn end_time(&self) -> Option<f32> {
        self.end_time
    }

    /// Stamps the end time from the current clock time.
    pub fn activate(&mut self, clock: &Clock) {
        if let ModifierDuration::TimeBased { duration } = self.duration {
            self.end_time = Some(clock.time() + duration);
        }
    }

    /// Whether the modifier contributes at time `now`.
    ///
    /// A time-based modifier that was never activated is inactive.
    pub fn is_active_at(&self, now: f32) -> bool {
        match self.duration {
            ModifierDuration::Permanent => true,
            ModifierDuration::TimeBased { .. } => self.end_time.is_some_and(|end| end > now),
        }
    }

    pub fn is_active(&self, clock: &Clock) -> bool {
        self.is_active_at(clock.time())
    }
}

/// Serializable recipe for a modifier, instantiated once per application.
///
/// `attribute` names the target attribute on the receiving stat block.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModifierSpec {
    pub attribute: String,
    pub name: String,
    pub value: f32,
    pub duration: ModifierDuration,
}

impl ModifierSpec {
    pub fn instantiate(&self) -> AttributeModifier {
        AttributeModifier::new(self.name.clone(), self.value, self.duration)
    }
}
