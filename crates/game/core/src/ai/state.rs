/// Per-character AI mode.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AiState {
    /// No tracked enemies.
    #[default]
    Idle,
    /// At least one tracked enemy outside chase range.
    Alert,
    /// Closing distance to the nearest tracked enemy.
    Chase,
    /// Nearest enemy within attack range.
    Attack,
    /// Terminal until respawn.
    Dying,
}

impl AiState {
    pub fn is_terminal(self) -> bool {
        matches!(self, AiState::Dying)
    }
}

/// What a character knows about its surroundings this tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Perception {
    /// Number of tracked enemies.
    pub tracked: usize,
    /// The nearest tracked enemy is within chase range.
    pub nearest_in_chase_range: bool,
    /// The nearest tracked enemy is within attack range.
    pub nearest_in_attack_range: bool,
    /// The selected attack skill could be triggered now.
    pub attack_ready: bool,
}

/// Side effect requested by a state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AiAction {
    /// Trigger the selected attack skill against the in-range enemies.
    TriggerAttack,
}

/// Result of evaluating one state for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub next: AiState,
    pub action: Option<AiAction>,
}

impl Step {
    fn to(next: AiState) -> Self {
        Self { next, action: None }
    }
}

/// Transition table, evaluated once per tick.
///
/// Dying is entered from the character's Life min-reached handler, never from here.
pub fn step(state: AiState, perception: &Perception) -> Step {
    match state {
        AiState::Idle if perception.tracked > 0 => Step::to(AiState::Alert),
        AiState::Alert if perception.tracked == 0 => Step::to(AiState::Idle),
        AiState::Alert if perception.nearest_in_chase_range => Step::to(AiState::Chase),
        AiState::Chase if perception.tracked == 0 || !perception.nearest_in_chase_range => {
            Step::to(AiState::Alert)
        }
        AiState::Chase if perception.nearest_in_attack_range => Step::to(AiState::Attack),
        AiState::Attack if perception.tracked == 0 || !perception.nearest_in_attack_range => {
            Step::to(AiState::Chase)
        }
        AiState::Attack if perception.attack_ready => Step {
            next: AiState::Attack,
            action: Some(AiAction::TriggerAttack),
        },
        other => Step::to(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(tracked: usize, chase: bool, attack: bool) -> Perception {
        Perception {
            tracked,
            nearest_in_chase_range: chase,
            nearest_in_attack_range: attack,
            attack_ready: true,
        }
    }

    #[test]
    fn escalates_one_state_per_tick() {
        let close = seen(1, true, true);
        let mut state = AiState::Idle;
        let mut path = Vec::new();
        for _ in 0..3 {
            state = step(state, &close).next;
            path.push(state);
        }
        assert_eq!(path, vec![AiState::Alert, AiState::Chase, AiState::Attack]);
    }

    #[test]
    fn attack_triggers_only_when_ready() {
        let mut perception = seen(1, true, true);
        assert_eq!(
            step(AiState::Attack, &perception).action,
            Some(AiAction::TriggerAttack)
        );
        perception.attack_ready = false;
        assert_eq!(step(AiState::Attack, &perception), Step::to(AiState::Attack));
    }

    #[test]
    fn losing_enemies_walks_back_to_idle() {
        let empty = Perception::default();
        assert_eq!(step(AiState::Attack, &empty).next, AiState::Chase);
        assert_eq!(step(AiState::Chase, &empty).next, AiState::Alert);
        assert_eq!(step(AiState::Alert, &empty).next, AiState::Idle);
        assert_eq!(step(AiState::Idle, &empty).next, AiState::Idle);
    }

    #[test]
    fn leaving_range_steps_down() {
        assert_eq!(step(AiState::Attack, &seen(1, true, false)).next, AiState::Chase);
        assert_eq!(step(AiState::Chase, &seen(1, false, false)).next, AiState::Alert);
        assert_eq!(step(AiState::Alert, &seen(1, false, false)).next, AiState::Alert);
    }

    #[test]
    fn dying_is_absorbing() {
        assert_eq!(step(AiState::Dying, &seen(3, true, true)), Step::to(AiState::Dying));
    }
}
