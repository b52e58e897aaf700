use super::CharacterId;
use crate::ai::AiState;
use crate::env::SkillId;

/// Notifications raised by a character, mainly for presentation layers.
#[derive(Clone, Debug, PartialEq)]
pub enum CharacterEvent {
    /// A trigger succeeded; the cooldown started and the use is pending.
    SkillTriggered { skill: SkillId, due_at: f32 },
    /// The skill's effect was applied. Magic skills list the caster as target.
    SkillUsed {
        skill: SkillId,
        targets: Vec<CharacterId>,
    },
    StateChanged { from: AiState, to: AiState },
    Attacked { attacker: CharacterId, damage: f32 },
    Died,
}
