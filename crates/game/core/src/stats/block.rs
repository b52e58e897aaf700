//! Per-character bundle of attributes.
//!
//! ```text
//! Experience ──► Level ──┬──► Life  (Volume, inputs [Level, Body])
//!                        └──► Magic (Volume, inputs [Level, Soul])
//! Body, Mind, Soul, MagicRegenerationRate, AlertnessRange, AttackRange: Primary
//! ```
//!
//! The derived attributes hold their inputs by handle. Replacing an input
//! attribute wholesale (see [`StatBlock::restore`] and [`StatBlock::replace`])
//! must be followed by [`StatBlock::rewire`], which both methods do, or the
//! derived values silently stop following their inputs.

use std::str::FromStr;

use super::StatError;
use super::attribute::Attribute;
use super::formula;
use crate::clock::Clock;
use crate::config::ArchetypeTemplate;

/// Names of the attributes every stat block carries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum StatKind {
    Body,
    Mind,
    Soul,
    Experience,
    Level,
    Life,
    Magic,
    MagicRegenerationRate,
    AlertnessRange,
    AttackRange,
}

impl StatKind {
    pub const ALL: [StatKind; 10] = [
        StatKind::Body,
        StatKind::Mind,
        StatKind::Soul,
        StatKind::Experience,
        StatKind::Level,
        StatKind::Life,
        StatKind::Magic,
        StatKind::MagicRegenerationRate,
        StatKind::AlertnessRange,
        StatKind::AttackRange,
    ];

    /// Level, Life and Magic are computed from other attributes.
    pub fn is_derived(self) -> bool {
        matches!(self, StatKind::Level | StatKind::Life | StatKind::Magic)
    }
}

/// Attribute bounds used by every archetype.
pub mod bounds {
    pub const CORE: (f32, f32) = (0.0, 999.0);
    pub const EXPERIENCE: (f32, f32) = (0.0, 1_000_000.0);
    pub const LEVEL: (f32, f32) = (0.0, 99.0);
    pub const VOLUME: (f32, f32) = (0.0, 999.0);
    pub const REGENERATION: (f32, f32) = (0.0, 100.0);
    pub const RANGE: (f32, f32) = (0.0, 1000.0);
}

/// The attribute set of one character.
#[derive(Debug)]
pub struct StatBlock {
    clock: Clock,
    body: Attribute,
    mind: Attribute,
    soul: Attribute,
    experience: Attribute,
    level: Attribute,
    life: Attribute,
    magic: Attribute,
    magic_regeneration_rate: Attribute,
    alertness_range: Attribute,
    attack_range: Attribute,
}

impl StatBlock {
    /// Builds and wires a stat block from an archetype template.
    ///
    /// Life and Magic start full.
    pub fn new(template: &ArchetypeTemplate, clock: &Clock) -> Self {
        let body = primary(StatKind::Body, bounds::CORE, template.body, clock);
        let mind = primary(StatKind::Mind, bounds::CORE, template.mind, clock);
        let soul = primary(StatKind::Soul, bounds::CORE, template.soul, clock);
        let experience = primary(
            StatKind::Experience,
            bounds::EXPERIENCE,
            template.experience,
            clock,
        );

        let level = Attribute::builder(StatKind::Level.as_ref())
            .bounds(bounds::LEVEL.0, bounds::LEVEL.1)
            .secondary(clock, vec![experience.clone()], formula::level);
        let life = Attribute::builder(StatKind::Life.as_ref())
            .bounds(bounds::VOLUME.0, bounds::VOLUME.1)
            .volume(clock, vec![level.clone(), body.clone()], formula::volume_max);
        let magic = Attribute::builder(StatKind::Magic.as_ref())
            .bounds(bounds::VOLUME.0, bounds::VOLUME.1)
            .volume(clock, vec![level.clone(), soul.clone()], formula::volume_max);

        Self {
            clock: clock.clone(),
            body,
            mind,
            soul,
            experience,
            level,
            life,
            magic,
            magic_regeneration_rate: primary(
                StatKind::MagicRegenerationRate,
                bounds::REGENERATION,
                template.magic_regeneration_rate,
                clock,
            ),
            alertness_range: primary(
                StatKind::AlertnessRange,
                bounds::RANGE,
                template.alertness_range,
                clock,
            ),
            attack_range: primary(
                StatKind::AttackRange,
                bounds::RANGE,
                template.attack_range,
                clock,
            ),
        }
    }

    pub fn get(&self, kind: StatKind) -> &Attribute {
        match kind {
            StatKind::Body => &self.body,
            StatKind::Mind => &self.mind,
            StatKind::Soul => &self.soul,
            StatKind::Experience => &self.experience,
            StatKind::Level => &self.level,
            StatKind::Life => &self.life,
            StatKind::Magic => &self.magic,
            StatKind::MagicRegenerationRate => &self.magic_regeneration_rate,
            StatKind::AlertnessRange => &self.alertness_range,
            StatKind::AttackRange => &self.attack_range,
        }
    }

    /// Name-indexed lookup, used by skills that target an attribute by name.
    ///
    /// Matching is ASCII case-insensitive.
    pub fn by_name(&self, name: &str) -> Option<&Attribute> {
        StatKind::from_str(name).ok().map(|kind| self.get(kind))
    }

    /// Effective value of `kind`.
    pub fn value(&self, kind: StatKind) -> f32 {
        self.get(kind).value()
    }

    pub fn body(&self) -> &Attribute {
        &self.body
    }

    pub fn soul(&self) -> &Attribute {
        &self.soul
    }

    pub fn experience(&self) -> &Attribute {
        &self.experience
    }

    pub fn level(&self) -> &Attribute {
        &self.level
    }

    pub fn life(&self) -> &Attribute {
        &self.life
    }

    pub fn magic(&self) -> &Attribute {
        &self.magic
    }

    pub fn magic_regeneration_rate(&self) -> &Attribute {
        &self.magic_regeneration_rate
    }

    pub fn alertness_range(&self) -> &Attribute {
        &self.alertness_range
    }

    pub fn attack_range(&self) -> &Attribute {
        &self.attack_range
    }

    /// Replaces a primary attribute and re-establishes derived wiring.
    ///
    /// # Errors
    ///
    /// Returns [`StatError::DerivedStat`] for Level, Life and Magic.
    pub fn replace(&mut self, kind: StatKind, attribute: Attribute) -> Result<(), StatError> {
        let slot = match kind {
            StatKind::Body => &mut self.body,
            StatKind::Mind => &mut self.mind,
            StatKind::Soul => &mut self.soul,
            StatKind::Experience => &mut self.experience,
            StatKind::MagicRegenerationRate => &mut self.magic_regeneration_rate,
            StatKind::AlertnessRange => &mut self.alertness_range,
            StatKind::AttackRange => &mut self.attack_range,
            StatKind::Level | StatKind::Life | StatKind::Magic => {
                return Err(StatError::DerivedStat(kind));
            }
        };
        *slot = attribute;
        self.rewire()
    }

    /// Re-subscribes Level, Life and Magic to the current input attributes.
    pub fn rewire(&self) -> Result<(), StatError> {
        self.level.set_inputs(vec![self.experience.clone()])?;
        self.life
            .set_inputs(vec![self.level.clone(), self.body.clone()])?;
        self.magic
            .set_inputs(vec![self.level.clone(), self.soul.clone()])?;
        Ok(())
    }

    /// Captures base values of inputs and current amounts of volumes.
    pub fn snapshot(&self) -> StatSnapshot {
        StatSnapshot {
            body: self.body.base_value(),
            mind: self.mind.base_value(),
            soul: self.soul.base_value(),
            experience: self.experience.base_value(),
            life: self.life.base_value(),
            magic: self.magic.base_value(),
            magic_regeneration_rate: self.magic_regeneration_rate.base_value(),
            alertness_range: self.alertness_range.base_value(),
            attack_range: self.attack_range.base_value(),
        }
    }

    /// Restores persisted values.
    ///
    /// Input attributes are rebuilt from the snapshot (dropping any attached
    /// modifiers), the derived attributes are rewired to them, then the volume
    /// current amounts are restored. Subscribers on Level, Life and Magic are kept.
    pub fn restore(&mut self, snapshot: &StatSnapshot) -> Result<(), StatError> {
        let clock = self.clock.clone();
        self.body = primary(StatKind::Body, bounds::CORE, snapshot.body, &clock);
        self.mind = primary(StatKind::Mind, bounds::CORE, snapshot.mind, &clock);
        self.soul = primary(StatKind::Soul, bounds::CORE, snapshot.soul, &clock);
        self.experience = primary(
            StatKind::Experience,
            bounds::EXPERIENCE,
            snapshot.experience,
            &clock,
        );
        self.magic_regeneration_rate = primary(
            StatKind::MagicRegenerationRate,
            bounds::REGENERATION,
            snapshot.magic_regeneration_rate,
            &clock,
        );
        self.alertness_range = primary(
            StatKind::AlertnessRange,
            bounds::RANGE,
            snapshot.alertness_range,
            &clock,
        );
        self.attack_range = primary(
            StatKind::AttackRange,
            bounds::RANGE,
            snapshot.attack_range,
            &clock,
        );

        self.rewire()?;
        self.life.set_value(snapshot.life);
        self.magic.set_value(snapshot.magic);
        Ok(())
    }

    /// Refills volumes; inputs keep their values.
    pub fn refill(&self) {
        self.life.reset();
        self.magic.reset();
    }
}

fn primary(kind: StatKind, (min, max): (f32, f32), value: f32, clock: &Clock) -> Attribute {
    Attribute::builder(kind.as_ref())
        .bounds(min, max)
        .value(value)
        .primary(clock)
}

/// Persistable stat values. Derived maxima are recomputed on restore.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatSnapshot {
    pub body: f32,
    pub mind: f32,
    pub soul: f32,
    pub experience: f32,
    pub life: f32,
    pub magic: f32,
    pub magic_regeneration_rate: f32,
    pub alertness_range: f32,
    pub attack_range: f32,
}
