//! Arena skirmish: one player against a ring of enemies.

use std::cell::RefCell;
use std::f32::consts::TAU;
use std::fmt;
use std::rc::Rc;

use anyhow::{Context, Result};
use arpg_content::ContentRegistry;
use arpg_core::{
    AiState, CharacterEvent, CharacterId, Clock, Controller, ItemId, Position, Publisher, Role,
    SimConfig, SkillId, SkillOracle, StatKind, World,
};

use crate::config::CliConfig;

/// Units per second a chasing character closes in.
const MOVE_SPEED: f32 = 3.0;
/// Radius of the ring enemies spawn on.
const SPAWN_RADIUS: f32 = 10.0;
const PLAYER_WEAPON: ItemId = ItemId(100);

#[derive(Clone, Debug, Default)]
struct Tally {
    transitions: u32,
    skill_uses: u32,
    deaths: Vec<CharacterId>,
}

pub struct Scenario {
    world: World,
    controller: Controller,
    player: CharacterId,
    player_spell: Option<SkillId>,
    tally: Rc<RefCell<Tally>>,
}

impl Scenario {
    pub fn new(registry: &ContentRegistry, config: SimConfig, cli: &CliConfig) -> Result<Self> {
        let mut world = World::new(Clock::new(), config);
        let mut controller = Controller::new();
        let tally = Rc::new(RefCell::new(Tally::default()));

        let player = world.spawn(Role::Player, "hero", Position::ORIGIN);
        let hero = world
            .get_mut(player)
            .context("player missing right after spawn")?;
        let slash = skill_id(registry, "Slash")?;
        hero.learn_combat_skill(slash)?;
        if let Ok(cleave) = skill_id(registry, "Cleave") {
            hero.learn_combat_skill(cleave)?;
        }
        let player_spell = skill_id(registry, "Fireball").ok();
        if let Some(spell) = player_spell {
            hero.learn_magic_skill(spell)?;
        }
        hero.inventory_mut().add(PLAYER_WEAPON, 1);
        if let Err(error) = hero.equip_weapon(PLAYER_WEAPON, registry) {
            tracing::warn!(%error, "player fights unarmed");
        }
        observe(hero.events(), player, hero.name().to_owned(), &tally);
        controller.register_player(player);

        let bite = skill_id(registry, "Bite")?;
        for index in 0..cli.enemies {
            let angle = TAU * index as f32 / cli.enemies.max(1) as f32;
            let position = Position::new(
                SPAWN_RADIUS * angle.cos(),
                SPAWN_RADIUS * angle.sin(),
                0.0,
            );
            let id = world.spawn(Role::Enemy, format!("wolf-{index}"), position);
            let wolf = world.get_mut(id).context("enemy missing right after spawn")?;
            wolf.learn_combat_skill(bite)?;
            observe(wolf.events(), id, wolf.name().to_owned(), &tally);
            controller.register_enemy(id);
        }

        Ok(Self {
            world,
            controller,
            player,
            player_spell,
            tally,
        })
    }

    pub fn run(&mut self, registry: &ContentRegistry, cli: &CliConfig) -> Result<Summary> {
        let env = registry.env();
        let clock = self.world.clock().clone();

        for _ in 0..cli.ticks {
            self.controller.update(&mut self.world, &env);

            if let (Some(spell), Some(hero)) = (self.player_spell, self.world.get_mut(self.player))
            {
                if hero.state() == AiState::Attack {
                    hero.trigger_magic_skill(spell, &env);
                }
            }

            self.move_chasers(cli.tick_seconds);
            clock
                .advance(cli.tick_seconds)
                .context("advancing simulation clock")?;

            let player_dead = self.world.get(self.player).is_none_or(|hero| hero.is_dead());
            if player_dead || self.enemies_alive() == 0 {
                break;
            }
        }

        let hero = self
            .world
            .get(self.player)
            .context("player despawned during the run")?;
        let tally = self.tally.borrow();
        Ok(Summary {
            elapsed: clock.time(),
            player_state: hero.state(),
            player_life: hero.stats().value(StatKind::Life),
            player_level: hero.stats().value(StatKind::Level),
            enemies_alive: self.enemies_alive(),
            enemies_total: self.controller.enemies().len(),
            transitions: tally.transitions,
            skill_uses: tally.skill_uses,
            deaths: tally.deaths.len(),
        })
    }

    fn enemies_alive(&self) -> usize {
        self.controller
            .enemies()
            .iter()
            .filter(|id| self.world.get(**id).is_some_and(|enemy| !enemy.is_dead()))
            .count()
    }

    /// Moves every chasing character towards its nearest enemy, stopping at
    /// attack reach.
    fn move_chasers(&mut self, dt: f32) {
        let moves: Vec<(CharacterId, Position)> = self
            .world
            .iter()
            .filter(|character| character.state() == AiState::Chase)
            .filter_map(|character| {
                let nearest = character.nearest_enemy()?;
                let target = self.world.get(nearest.id)?.position();
                let from = character.position();
                let gap = from.distance(&target) - character.attack_reach() * 0.9;
                if gap <= 0.0 {
                    return None;
                }
                let step = (MOVE_SPEED * dt).min(gap);
                Some((character.id(), from.move_towards(&target, step)))
            })
            .collect();

        for (id, position) in moves {
            if let Some(character) = self.world.get_mut(id) {
                character.set_position(position);
            }
        }
    }
}

fn skill_id(registry: &ContentRegistry, name: &str) -> Result<SkillId> {
    registry
        .skill_by_name(name)
        .map(|skill| skill.id)
        .with_context(|| format!("content has no skill named '{name}'"))
}

fn observe(
    events: &Publisher<CharacterEvent>,
    id: CharacterId,
    name: String,
    tally: &Rc<RefCell<Tally>>,
) {
    let tally = Rc::clone(tally);
    events.subscribe(move |event| match event {
        CharacterEvent::StateChanged { from, to } => {
            tracing::info!(character = %name, %from, %to, "transition");
            tally.borrow_mut().transitions += 1;
        }
        CharacterEvent::SkillUsed { skill, targets } => {
            tracing::info!(character = %name, %skill, targets = targets.len(), "skill used");
            tally.borrow_mut().skill_uses += 1;
        }
        CharacterEvent::Died => {
            tracing::info!(character = %name, "died");
            tally.borrow_mut().deaths.push(id);
        }
        CharacterEvent::SkillTriggered { .. } | CharacterEvent::Attacked { .. } => {}
    });
}

/// End-of-run report printed to stdout.
#[derive(Clone, Debug)]
pub struct Summary {
    pub elapsed: f32,
    pub player_state: AiState,
    pub player_life: f32,
    pub player_level: f32,
    pub enemies_alive: usize,
    pub enemies_total: usize,
    pub transitions: u32,
    pub skill_uses: u32,
    pub deaths: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "simulated {:.2}s", self.elapsed)?;
        writeln!(
            f,
            "player: {} (life {}, level {})",
            self.player_state, self.player_life, self.player_level
        )?;
        writeln!(
            f,
            "enemies alive: {}/{}",
            self.enemies_alive, self.enemies_total
        )?;
        write!(
            f,
            "{} transitions, {} skill uses, {} deaths",
            self.transitions, self.skill_uses, self.deaths
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arpg_content::ConfigLoader;

    #[test]
    fn skirmish_with_embedded_content_makes_progress() {
        let registry = ContentRegistry::embedded().unwrap();
        let config = ConfigLoader::embedded().unwrap();
        let cli = CliConfig {
            ticks: 400,
            enemies: 2,
            ..CliConfig::default()
        };

        let mut scenario = Scenario::new(&registry, config, &cli).unwrap();
        let summary = scenario.run(&registry, &cli).unwrap();

        assert_eq!(summary.enemies_total, 2);
        assert!(summary.transitions > 0);
        assert!(summary.skill_uses > 0);
        assert!(summary.elapsed > 0.0);
    }
}
