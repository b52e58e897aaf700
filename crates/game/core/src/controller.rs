//! Per-tick driver.
//!
//! The controller is a side table of ids: it never owns characters, so a
//! despawned character simply stops resolving and is dropped from the roster.

use crate::character::CharacterId;
use crate::env::Env;
use crate::world::World;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Controller {
    player: Option<CharacterId>,
    enemies: Vec<CharacterId>,
}

impl Controller {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(&self) -> Option<CharacterId> {
        self.player
    }

    pub fn enemies(&self) -> &[CharacterId] {
        &self.enemies
    }

    pub fn register_player(&mut self, id: CharacterId) {
        if self.player != Some(id) {
            tracing::debug!(%id, "player registered");
            self.player = Some(id);
        }
    }

    /// Appends `id` to the roster. Registering twice is a no-op.
    pub fn register_enemy(&mut self, id: CharacterId) {
        if Some(id) == self.player || self.enemies.contains(&id) {
            return;
        }
        tracing::debug!(%id, "enemy registered");
        self.enemies.push(id);
    }

    /// One tick.
    ///
    /// 1. No-op without a live player id.
    /// 2. Each enemy: stale ids are dropped; dead enemies are detached from the
    ///    player; otherwise the squared distance is computed once, both sides
    ///    update their tracked and in-range membership, and the enemy advances.
    /// 3. The player advances last.
    pub fn update(&mut self, world: &mut World, env: &Env<'_>) {
        let Some(player_id) = self.player else {
            return;
        };
        if !world.contains(player_id) {
            tracing::warn!(id = %player_id, "registered player no longer exists");
            self.player = None;
            return;
        }

        let mut stale = Vec::new();
        for &enemy_id in &self.enemies {
            let Some(enemy) = world.get(enemy_id) else {
                stale.push(enemy_id);
                continue;
            };
            let enemy_dead = enemy.is_dead();
            let enemy_position = enemy.position();

            let Some(player) = world.get_mut(player_id) else {
                return;
            };
            if enemy_dead {
                player.remove_enemy(enemy_id);
                continue;
            }
            let distance_sq = player.position().distance_squared(&enemy_position);
            let player_dead = player.is_dead();
            player.sense(enemy_id, distance_sq);

            if let Some(enemy) = world.get_mut(enemy_id) {
                if player_dead {
                    enemy.remove_enemy(player_id);
                } else {
                    enemy.sense(player_id, distance_sq);
                }
            }
            world.advance(enemy_id, env);
        }

        if !stale.is_empty() {
            self.enemies.retain(|id| !stale.contains(id));
            if let Some(player) = world.get_mut(player_id) {
                for id in &stale {
                    player.remove_enemy(*id);
                }
            }
            tracing::debug!(dropped = stale.len(), "dropped despawned enemies");
        }

        world.advance(player_id, env);
    }
}
