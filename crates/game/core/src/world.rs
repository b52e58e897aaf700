//! Arena owning every spawned character.
//!
//! Characters refer to each other by [`CharacterId`]; the world resolves ids
//! and performs the operations that touch more than one character, such as
//! applying a combat strike to its targets.

use std::collections::BTreeMap;

use crate::character::{Character, CharacterEvent, CharacterId, Position, Role};
use crate::clock::Clock;
use crate::config::SimConfig;
use crate::env::{Env, SkillId, SkillKind};

#[derive(Debug)]
pub struct World {
    clock: Clock,
    config: SimConfig,
    characters: BTreeMap<CharacterId, Character>,
    next_id: u32,
}

impl World {
    pub fn new(clock: Clock, config: SimConfig) -> Self {
        Self {
            clock,
            config,
            characters: BTreeMap::new(),
            next_id: 0,
        }
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Creates a character from the role's archetype template.
    pub fn spawn(&mut self, role: Role, name: impl Into<String>, position: Position) -> CharacterId {
        let id = CharacterId(self.next_id);
        self.next_id += 1;
        let character = Character::new(
            id,
            name,
            role,
            self.config.template(role),
            position,
            &self.clock,
        );
        tracing::debug!(%id, name = character.name(), %role, "spawned");
        self.characters.insert(id, character);
        id
    }

    /// Removes a character. Ids held elsewhere go stale.
    pub fn despawn(&mut self, id: CharacterId) -> Option<Character> {
        let removed = self.characters.remove(&id);
        if removed.is_some() {
            tracing::debug!(%id, "despawned");
        }
        removed
    }

    pub fn contains(&self, id: CharacterId) -> bool {
        self.characters.contains_key(&id)
    }

    pub fn get(&self, id: CharacterId) -> Option<&Character> {
        self.characters.get(&id)
    }

    pub fn get_mut(&mut self, id: CharacterId) -> Option<&mut Character> {
        self.characters.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn use_magic_skill(&mut self, caster: CharacterId, skill: SkillId, env: &Env<'_>) -> bool {
        self.characters
            .get_mut(&caster)
            .is_some_and(|character| character.use_magic_skill(skill, env))
    }

    /// Applies a combat skill of `attacker` to its in-range enemies.
    ///
    /// Every target takes the full damage. Killing blows award the victim's
    /// experience reward to the attacker. Returns false when the attacker
    /// cannot use the skill.
    pub fn use_combat_skill(&mut self, attacker: CharacterId, skill: SkillId, env: &Env<'_>) -> bool {
        let Some(strike) = self
            .characters
            .get_mut(&attacker)
            .and_then(|character| character.prepare_strike(skill, env))
        else {
            return false;
        };

        let mut reward = 0.0;
        for target in &strike.targets {
            let Some(victim) = self.characters.get_mut(target) else {
                continue;
            };
            if victim.on_attacked(attacker, strike.damage) {
                reward += victim.experience_reward();
            }
        }

        if let Some(character) = self.characters.get(&attacker) {
            character.gain_experience(reward);
            character.emit(CharacterEvent::SkillUsed {
                skill,
                targets: strike.targets,
            });
        }
        true
    }

    /// Advances one character, then applies its due skill uses when the
    /// config asks the world to resolve them.
    pub fn advance(&mut self, id: CharacterId, env: &Env<'_>) {
        let Some(character) = self.characters.get_mut(&id) else {
            return;
        };
        character.advance(env, &self.config);
        if !self.config.resolve_pending_uses {
            return;
        }

        for skill in character.due_uses() {
            self.resolve_use(id, skill, env);
        }
    }

    fn resolve_use(&mut self, id: CharacterId, skill: SkillId, env: &Env<'_>) {
        match env.skills().skill(skill).map(|definition| &definition.kind) {
            Some(SkillKind::Magic(_)) => {
                self.use_magic_skill(id, skill, env);
            }
            Some(SkillKind::Combat(_)) => {
                self.use_combat_skill(id, skill, env);
            }
            None => {
                if let Some(character) = self.characters.get_mut(&id) {
                    character.discard_pending(skill);
                }
            }
        }
    }
}
