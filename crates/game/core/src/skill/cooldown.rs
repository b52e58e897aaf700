use arrayvec::ArrayVec;

use super::SkillError;
use crate::config::SimConfig;
use crate::env::SkillId;

/// Learned skill ids with their cooldown end times.
///
/// `ids[i]` is ready again once the clock reaches `cooldown_ends[i]`. Both
/// lists always have the same length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LearnedSkills {
    ids: ArrayVec<SkillId, { SimConfig::MAX_LEARNED_SKILLS }>,
    cooldown_ends: ArrayVec<f32, { SimConfig::MAX_LEARNED_SKILLS }>,
}

impl LearnedSkills {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id`, ready immediately.
    ///
    /// Learning a known id is a no-op and returns `Ok(false)`. A new id that
    /// does not fit is an error.
    pub fn learn(&mut self, id: SkillId) -> Result<bool, SkillError> {
        if self.contains(id) {
            return Ok(false);
        }
        if self.ids.is_full() {
            return Err(SkillError::TooManySkills {
                skill: id,
                capacity: SimConfig::MAX_LEARNED_SKILLS,
            });
        }
        self.ids.push(id);
        self.cooldown_ends.push(0.0);
        Ok(true)
    }

    pub fn contains(&self, id: SkillId) -> bool {
        self.ids.contains(&id)
    }

    fn index(&self, id: SkillId) -> Option<usize> {
        self.ids.iter().position(|known| *known == id)
    }

    /// Time at which `id` is ready again. `None` if not learned.
    pub fn cooldown_end(&self, id: SkillId) -> Option<f32> {
        self.index(id).map(|index| self.cooldown_ends[index])
    }

    /// Seconds until `id` is ready. Zero when ready or unknown.
    pub fn remaining(&self, id: SkillId, now: f32) -> f32 {
        self.cooldown_end(id)
            .map_or(0.0, |end| (end - now).max(0.0))
    }

    /// Learned and `now >= cooldown end`.
    pub fn is_ready(&self, id: SkillId, now: f32) -> bool {
        self.cooldown_end(id).is_some_and(|end| now >= end)
    }

    /// Stores `now + duration` as the new cooldown end.
    pub fn start_cooldown(&mut self, id: SkillId, now: f32, duration: f32) -> bool {
        match self.index(id) {
            Some(index) => {
                self.cooldown_ends[index] = now + duration;
                true
            }
            None => false,
        }
    }

    /// Makes every learned skill ready.
    pub fn clear_cooldowns(&mut self) {
        for end in &mut self.cooldown_ends {
            *end = 0.0;
        }
    }

    pub fn ids(&self) -> &[SkillId] {
        &self.ids
    }

    pub fn cooldown_ends(&self) -> &[f32] {
        &self.cooldown_ends
    }

    pub fn first(&self) -> Option<SkillId> {
        self.ids.first().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
