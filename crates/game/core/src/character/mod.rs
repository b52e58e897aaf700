//! Characters: stats, learned skills, AI state and enemy bookkeeping.
//!
//! This module contains everything a single character owns:
//! - Character: the aggregate, created at spawn and dropped at despawn
//! - Skills: learn / check / trigger / use (see `skills.rs`)
//! - Combat: enemy tracking, damage, weapons (see `combat.rs`)
//! - Inventory and Position value types
//!
//! Characters never hold references to each other. Enemies are named by
//! [`CharacterId`] and resolved through the [`World`](crate::world::World).

mod combat;
mod error;
mod event;
mod inventory;
mod position;
mod skills;

pub use combat::{EquippedWeapon, Strike, TrackedEnemy};
pub use error::EquipError;
pub use event::CharacterEvent;
pub use inventory::Inventory;
pub use position::Position;

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::ai::{self, AiAction, AiState, Perception};
use crate::clock::Clock;
use crate::config::{ArchetypeTemplate, SimConfig};
use crate::env::{Env, SkillId};
use crate::event::Publisher;
use crate::skill::{LearnedSkills, PendingUses};
use crate::stats::{StatBlock, StatKind};

/// Unique identifier of a spawned character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub u32);

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Which side a character fights for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Player,
    Enemy,
}

/// A simulated character.
///
/// # Invariants
///
/// - `magic_skills` and `combat_skills` keep ids and cooldown ends index-aligned
/// - `in_attack_range` is a subset of the ids in `enemies`
/// - once `state` is [`AiState::Dying`] it only leaves through [`Character::respawn`]
#[derive(Debug)]
pub struct Character {
    id: CharacterId,
    name: String,
    role: Role,
    stats: StatBlock,
    inventory: Inventory,
    position: Position,

    state: AiState,
    dead: bool,

    // === Skills ===
    magic_skills: LearnedSkills,
    combat_skills: LearnedSkills,
    /// Combat skill used by the Attack state. Defaults to the first one learned.
    attack_skill: Option<SkillId>,
    pending: PendingUses,

    // === Enemy bookkeeping, rewritten by the controller every tick ===
    enemies: Vec<TrackedEnemy>,
    in_attack_range: Vec<CharacterId>,

    weapon: Option<EquippedWeapon>,
    experience_reward: f32,

    clock: Clock,
    /// Clock time of the previous `advance`, for regeneration.
    last_advanced_at: f32,
    /// Raised by Life's min-reached handler, consumed by `sync_death`.
    life_depleted: Rc<Cell<bool>>,
    events: Publisher<CharacterEvent>,
}

impl Character {
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        role: Role,
        template: &ArchetypeTemplate,
        position: Position,
        clock: &Clock,
    ) -> Self {
        let stats = StatBlock::new(template, clock);
        let life_depleted = Rc::new(Cell::new(false));
        let flag = Rc::clone(&life_depleted);
        stats.life().min_reached().subscribe(move |_| flag.set(true));

        Self {
            id,
            name: name.into(),
            role,
            stats,
            inventory: Inventory::new(),
            position,
            state: AiState::Idle,
            dead: false,
            magic_skills: LearnedSkills::new(),
            combat_skills: LearnedSkills::new(),
            attack_skill: None,
            pending: PendingUses::new(),
            enemies: Vec::new(),
            in_attack_range: Vec::new(),
            weapon: None,
            experience_reward: template.experience_reward,
            clock: clock.clone(),
            last_advanced_at: clock.time(),
            life_depleted,
            events: Publisher::new(),
        }
    }

    pub fn id(&self) -> CharacterId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn stats(&self) -> &StatBlock {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut StatBlock {
        &mut self.stats
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn inventory_mut(&mut self) -> &mut Inventory {
        &mut self.inventory
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position.set(position);
    }

    pub fn state(&self) -> AiState {
        self.state
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn experience_reward(&self) -> f32 {
        self.experience_reward
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    /// Character-level notifications.
    pub fn events(&self) -> &Publisher<CharacterEvent> {
        &self.events
    }

    pub(crate) fn emit(&self, event: CharacterEvent) {
        self.events.emit(&event);
    }

    /// Switches AI state. Returns whether the state changed.
    ///
    /// Leaving Dying is refused; entering it marks the character dead, drops
    /// its enemy lists and pending uses, and raises [`CharacterEvent::Died`].
    pub fn change_state(&mut self, next: AiState) -> bool {
        if self.state == next {
            return false;
        }
        if self.state.is_terminal() {
            tracing::debug!(character = %self.name, to = %next, "dying character cannot change state");
            return false;
        }

        let from = self.state;
        self.state = next;
        tracing::debug!(character = %self.name, %from, to = %next, "state changed");
        self.emit(CharacterEvent::StateChanged { from, to: next });

        if next == AiState::Dying {
            self.dead = true;
            self.pending.clear();
            self.enemies.clear();
            self.in_attack_range.clear();
            tracing::info!(character = %self.name, id = %self.id, "character died");
            self.emit(CharacterEvent::Died);
        }
        true
    }

    /// Enters Dying if Life reached its minimum since the last check.
    pub fn sync_death(&mut self) -> bool {
        if self.life_depleted.get() && !self.dead {
            return self.change_state(AiState::Dying);
        }
        false
    }

    /// One tick of this character: death check, regeneration, AI step.
    ///
    /// Enemy membership must already be current; the controller updates it
    /// before advancing.
    pub fn advance(&mut self, env: &Env<'_>, config: &SimConfig) {
        self.sync_death();

        let now = self.clock.time();
        let elapsed = (now - self.last_advanced_at).max(0.0);
        self.last_advanced_at = now;
        if self.dead {
            return;
        }

        if config.magic_regeneration {
            self.regenerate_magic(elapsed);
        }

        let perception = self.perceive(env, config);
        let step = ai::step(self.state, &perception);
        self.change_state(step.next);

        if step.action == Some(AiAction::TriggerAttack) {
            if let Some(skill) = self.attack_skill {
                self.trigger_combat_skill(skill, env);
            }
        }
    }

    /// Condenses enemy lists and attack readiness for the state machine.
    pub fn perceive(&self, env: &Env<'_>, config: &SimConfig) -> Perception {
        let nearest = self.nearest_enemy();
        let chase_range = config.chase_range_factor * self.stats.value(StatKind::AlertnessRange);

        Perception {
            tracked: self.enemies.len(),
            nearest_in_chase_range: nearest
                .is_some_and(|enemy| enemy.distance_sq <= chase_range * chase_range),
            nearest_in_attack_range: nearest
                .is_some_and(|enemy| self.in_attack_range.contains(&enemy.id)),
            attack_ready: self
                .attack_skill
                .is_some_and(|skill| self.check_combat_skill(skill, env).is_ok()),
        }
    }

    fn regenerate_magic(&self, elapsed: f32) {
        let rate = self.stats.value(StatKind::MagicRegenerationRate);
        if elapsed <= 0.0 || rate <= 0.0 {
            return;
        }
        let magic = self.stats.magic();
        let current = magic.base_value();
        if current < magic.max_value() {
            magic.set_value(current + rate * elapsed);
        }
    }

    /// Adds experience; Level and the volume maxima follow through the stat graph.
    pub fn gain_experience(&self, amount: f32) {
        if amount <= 0.0 {
            return;
        }
        let experience = self.stats.experience();
        experience.set_value(experience.base_value() + amount);
    }

    /// Returns a dead or pooled character to a fresh Idle state.
    ///
    /// Life and Magic are refilled; learned skills, inventory and weapon are kept.
    pub fn respawn(&mut self) {
        self.dead = false;
        self.life_depleted.set(false);

        let from = self.state;
        self.state = AiState::Idle;
        if from != AiState::Idle {
            self.emit(CharacterEvent::StateChanged {
                from,
                to: AiState::Idle,
            });
        }

        self.stats.refill();
        self.enemies.clear();
        self.in_attack_range.clear();
        self.magic_skills.clear_cooldowns();
        self.combat_skills.clear_cooldowns();
        self.pending.clear();
        self.last_advanced_at = self.clock.time();
        tracing::debug!(character = %self.name, "respawned");
    }
}
