/// Simulation configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Multiplier on AlertnessRange giving the distance at which an alerted
    /// character starts chasing. 1.0 chases as soon as an enemy is tracked.
    pub chase_range_factor: f32,

    /// When set, the world applies pending skill uses once their pre-use time
    /// has elapsed. Otherwise the consumer calls `use_*` itself.
    pub resolve_pending_uses: bool,

    /// Refill Magic by `MagicRegenerationRate` per second on every advance.
    pub magic_regeneration: bool,

    pub player: ArchetypeTemplate,
    pub enemy: ArchetypeTemplate,
}

impl SimConfig {
    // ===== compile-time capacities =====
    pub const MAX_LEARNED_SKILLS: usize = 16;
    /// One pending use per learnable magic and combat skill.
    pub const MAX_PENDING_USES: usize = 2 * Self::MAX_LEARNED_SKILLS;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_CHASE_RANGE_FACTOR: f32 = 1.0;

    pub fn new() -> Self {
        Self {
            chase_range_factor: Self::DEFAULT_CHASE_RANGE_FACTOR,
            resolve_pending_uses: true,
            magic_regeneration: true,
            player: ArchetypeTemplate::player(),
            enemy: ArchetypeTemplate::enemy(),
        }
    }

    /// Stat template for a role.
    pub fn template(&self, role: crate::character::Role) -> &ArchetypeTemplate {
        match role {
            crate::character::Role::Player => &self.player,
            crate::character::Role::Enemy => &self.enemy,
        }
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Initial attribute values of a character archetype.
///
/// When deserialized every field is required; an omitted table falls back to
/// the whole default template instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeTemplate {
    pub body: f32,
    pub mind: f32,
    pub soul: f32,
    pub experience: f32,
    pub magic_regeneration_rate: f32,
    pub alertness_range: f32,
    pub attack_range: f32,
    /// Experience granted to whoever lands the killing blow.
    pub experience_reward: f32,
}

impl ArchetypeTemplate {
    pub fn player() -> Self {
        Self {
            body: 10.0,
            mind: 10.0,
            soul: 10.0,
            experience: 0.0,
            magic_regeneration_rate: 1.0,
            alertness_range: 12.0,
            attack_range: 2.0,
            experience_reward: 0.0,
        }
    }

    pub fn enemy() -> Self {
        Self {
            body: 5.0,
            mind: 5.0,
            soul: 5.0,
            experience: 0.0,
            magic_regeneration_rate: 0.5,
            alertness_range: 8.0,
            attack_range: 1.5,
            experience_reward: 50.0,
        }
    }
}

impl Default for ArchetypeTemplate {
    fn default() -> Self {
        Self::player()
    }
}
