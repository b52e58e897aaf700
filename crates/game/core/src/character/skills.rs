//! Learn / check / trigger / use for magic and combat skills.
//!
//! Trigger starts the cooldown and records a pending use; the effect is only
//! applied by the matching use call, which the host may delay until a cast or
//! swing animation completes.

use super::{Character, CharacterEvent, Strike};
use crate::env::{CombatSkill, Env, MagicSkill, Skill, SkillId};
use crate::skill::{LearnedSkills, PendingUses, SkillError};

impl Character {
    /// `Ok(false)` if the id was already learned.
    pub fn learn_magic_skill(&mut self, id: SkillId) -> Result<bool, SkillError> {
        self.magic_skills.learn(id)
    }

    /// `Ok(false)` if the id was already learned. The first combat skill
    /// learned becomes the attack skill.
    pub fn learn_combat_skill(&mut self, id: SkillId) -> Result<bool, SkillError> {
        let learned = self.combat_skills.learn(id)?;
        if learned && self.attack_skill.is_none() {
            self.attack_skill = Some(id);
        }
        Ok(learned)
    }

    pub fn magic_skills(&self) -> &LearnedSkills {
        &self.magic_skills
    }

    pub fn combat_skills(&self) -> &LearnedSkills {
        &self.combat_skills
    }

    pub fn pending_uses(&self) -> &PendingUses {
        &self.pending
    }

    pub fn attack_skill(&self) -> Option<SkillId> {
        self.attack_skill
    }

    /// Selects a learned combat skill for the Attack state.
    pub fn set_attack_skill(&mut self, id: SkillId) -> bool {
        if !self.combat_skills.contains(id) {
            return false;
        }
        self.attack_skill = Some(id);
        true
    }

    /// Skills whose pending use is due now.
    pub fn due_uses(&self) -> Vec<SkillId> {
        self.pending.due(self.clock.time())
    }

    /// Drops a pending use without applying it.
    pub fn discard_pending(&mut self, id: SkillId) -> bool {
        self.pending.take(id).is_some()
    }

    // ===== magic =====

    fn learned_magic<'e>(
        &self,
        id: SkillId,
        env: &Env<'e>,
    ) -> Result<(&'e Skill, &'e MagicSkill), SkillError> {
        let skill = learned(&self.magic_skills, id, env)?;
        let magic = skill.as_magic().ok_or(SkillError::WrongKind(id))?;
        Ok((skill, magic))
    }

    /// Why [`trigger_magic_skill`](Self::trigger_magic_skill) would refuse `id` now.
    ///
    /// Guards run in order: alive, learned, registered as magic, affordable, off cooldown.
    ///
    /// The cost is paid from the stored Magic amount, so modifiers on Magic
    /// never count towards it.
    pub fn check_magic_skill(&self, id: SkillId, env: &Env<'_>) -> Result<(), SkillError> {
        if self.dead {
            return Err(SkillError::Dead);
        }
        let (_, magic) = self.learned_magic(id, env)?;
        let available = self.stats.magic().base_value();
        if available < magic.cost {
            return Err(SkillError::InsufficientMagic {
                required: magic.cost,
                available,
            });
        }
        self.cooldown_guard(&self.magic_skills, id)
    }

    /// Deducts the cost, starts the cooldown and queues the use.
    ///
    /// A refused trigger returns false and changes nothing.
    pub fn trigger_magic_skill(&mut self, id: SkillId, env: &Env<'_>) -> bool {
        if let Err(error) = self.check_magic_skill(id, env) {
            tracing::debug!(character = %self.name, skill = %id, %error, "magic skill refused");
            return false;
        }
        let Ok((skill, magic)) = self.learned_magic(id, env) else {
            return false;
        };

        if magic.cost > 0.0 {
            let pool = self.stats.magic();
            pool.set_value(pool.base_value() - magic.cost);
        }
        let now = self.clock.time();
        self.magic_skills.start_cooldown(id, now, skill.cooldown_time);
        self.queue_use(skill, now);
        true
    }

    /// Attaches the skill's modifier to the named attribute of the caster.
    ///
    /// Consumes the pending use if there is one. Returns false for dying
    /// casters, unknown skills, or a target attribute the stat block lacks.
    pub fn use_magic_skill(&mut self, id: SkillId, env: &Env<'_>) -> bool {
        self.pending.take(id);
        if self.dead {
            return false;
        }
        let Ok((_, magic)) = self.learned_magic(id, env) else {
            return false;
        };
        let Some(attribute) = self.stats.by_name(&magic.effect.attribute) else {
            tracing::warn!(
                skill = %id,
                attribute = %magic.effect.attribute,
                "magic skill targets an unknown attribute"
            );
            return false;
        };

        attribute.add_modifier(magic.effect.instantiate());
        self.emit(CharacterEvent::SkillUsed {
            skill: id,
            targets: vec![self.id],
        });
        true
    }

    // ===== combat =====

    fn learned_combat<'e>(
        &self,
        id: SkillId,
        env: &Env<'e>,
    ) -> Result<(&'e Skill, &'e CombatSkill), SkillError> {
        let skill = learned(&self.combat_skills, id, env)?;
        let combat = skill.as_combat().ok_or(SkillError::WrongKind(id))?;
        Ok((skill, combat))
    }

    /// Why [`trigger_combat_skill`](Self::trigger_combat_skill) would refuse `id` now.
    ///
    /// Guards run in order: alive, learned, registered as combat, an enemy in
    /// attack range, off cooldown.
    pub fn check_combat_skill(&self, id: SkillId, env: &Env<'_>) -> Result<(), SkillError> {
        if self.dead {
            return Err(SkillError::Dead);
        }
        self.learned_combat(id, env)?;
        if self.in_attack_range.is_empty() {
            return Err(SkillError::NoTargetInRange);
        }
        self.cooldown_guard(&self.combat_skills, id)
    }

    /// Starts the cooldown (plus `1 / speed` of the equipped weapon) and queues the use.
    pub fn trigger_combat_skill(&mut self, id: SkillId, env: &Env<'_>) -> bool {
        if let Err(error) = self.check_combat_skill(id, env) {
            tracing::debug!(character = %self.name, skill = %id, %error, "combat skill refused");
            return false;
        }
        let Ok((skill, _)) = self.learned_combat(id, env) else {
            return false;
        };

        let penalty = self
            .weapon
            .map_or(0.0, |weapon| weapon.data.cooldown_penalty());
        let now = self.clock.time();
        self.combat_skills
            .start_cooldown(id, now, skill.cooldown_time + penalty);
        self.queue_use(skill, now);
        true
    }

    /// Character half of a combat use: picks up to `maximum_targets` enemies
    /// from the front of the in-range list and computes the damage.
    ///
    /// Consumes the pending use. The world applies the strike to the targets.
    pub fn prepare_strike(&mut self, id: SkillId, env: &Env<'_>) -> Option<Strike> {
        self.pending.take(id);
        if self.dead {
            return None;
        }
        let (_, combat) = self.learned_combat(id, env).ok()?;
        let damage = combat.damage + self.weapon.map_or(0.0, |weapon| weapon.data.damage);
        let targets = self
            .in_attack_range
            .iter()
            .take(combat.maximum_targets)
            .copied()
            .collect();

        Some(Strike {
            attacker: self.id,
            skill: id,
            damage,
            targets,
        })
    }

    // ===== shared =====

    fn cooldown_guard(&self, learned: &LearnedSkills, id: SkillId) -> Result<(), SkillError> {
        let now = self.clock.time();
        if learned.is_ready(id, now) {
            Ok(())
        } else {
            Err(SkillError::OnCooldown {
                remaining: learned.remaining(id, now),
            })
        }
    }

    fn queue_use(&mut self, skill: &Skill, now: f32) {
        let due_at = now + skill.pre_use_time.max(0.0);
        if !self.pending.push(skill.id, due_at) {
            tracing::warn!(character = %self.name, skill = %skill.name, "no room for pending use");
        }
        tracing::debug!(character = %self.name, skill = %skill.name, due_at, "skill triggered");
        self.emit(CharacterEvent::SkillTriggered {
            skill: skill.id,
            due_at,
        });
    }
}

fn learned<'e>(
    learned: &LearnedSkills,
    id: SkillId,
    env: &Env<'e>,
) -> Result<&'e Skill, SkillError> {
    if !learned.contains(id) {
        return Err(SkillError::NotLearned(id));
    }
    env.skills().skill(id).ok_or(SkillError::UnknownSkill(id))
}
