use arrayvec::ArrayVec;

use crate::config::SimConfig;
use crate::env::SkillId;

/// A triggered skill whose effect has not been applied yet.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingUse {
    pub skill: SkillId,
    /// Trigger time plus the skill's pre-use time.
    pub due_at: f32,
}

/// At most one pending use per skill; re-triggering replaces the entry.
///
/// Sized for every skill a character can learn (magic and combat lists
/// together), so a learned skill always finds room.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PendingUses {
    entries: ArrayVec<PendingUse, { SimConfig::MAX_PENDING_USES }>,
}

impl PendingUses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records or replaces the entry for `skill`. Returns false, leaving the
    /// existing entries untouched, when there is no room.
    pub fn push(&mut self, skill: SkillId, due_at: f32) -> bool {
        self.take(skill);
        self.entries.try_push(PendingUse { skill, due_at }).is_ok()
    }

    /// Removes and returns the entry for `skill`.
    pub fn take(&mut self, skill: SkillId) -> Option<PendingUse> {
        let index = self.entries.iter().position(|entry| entry.skill == skill)?;
        Some(self.entries.remove(index))
    }

    /// Skills whose use is due at `now`, in trigger order.
    pub fn due(&self, now: f32) -> Vec<SkillId> {
        self.entries
            .iter()
            .filter(|entry| entry.due_at <= now)
            .map(|entry| entry.skill)
            .collect()
    }

    pub fn contains(&self, skill: SkillId) -> bool {
        self.entries.iter().any(|entry| entry.skill == skill)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrigger_replaces_entry() {
        let mut pending = PendingUses::new();
        pending.push(SkillId(1), 1.0);
        pending.push(SkillId(1), 4.0);
        assert_eq!(pending.len(), 1);
        assert!(pending.due(2.0).is_empty());
        assert_eq!(pending.due(4.0), vec![SkillId(1)]);
    }

    #[test]
    fn holds_one_entry_per_learnable_skill() {
        assert!(SimConfig::MAX_PENDING_USES >= 2 * SimConfig::MAX_LEARNED_SKILLS);

        let mut pending = PendingUses::new();
        for id in 0..SimConfig::MAX_PENDING_USES as u32 {
            assert!(pending.push(SkillId(id), 1.0));
        }
        assert!(!pending.push(SkillId(999), 1.0));
        assert!(pending.contains(SkillId(0)));
        assert!(!pending.contains(SkillId(999)));

        // Replacing an existing entry still fits.
        assert!(pending.push(SkillId(0), 2.0));
        assert_eq!(pending.len(), SimConfig::MAX_PENDING_USES);
    }

    #[test]
    fn take_consumes() {
        let mut pending = PendingUses::new();
        pending.push(SkillId(1), 0.0);
        pending.push(SkillId(2), 0.0);
        assert_eq!(pending.take(SkillId(1)).map(|p| p.due_at), Some(0.0));
        assert!(pending.take(SkillId(1)).is_none());
        assert_eq!(pending.due(0.0), vec![SkillId(2)]);
    }
}
