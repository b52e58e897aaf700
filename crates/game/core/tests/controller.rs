mod common;

use std::cell::Cell;
use std::rc::Rc;

use arpg_core::{
    AiState, CharacterEvent, CharacterId, Controller, Env, Position, Role, SimConfig, StatKind,
    World,
};
use common::{FIREBALL, SLASH};

fn state(world: &World, id: CharacterId) -> AiState {
    world.get(id).unwrap().state()
}

fn place(world: &mut World, id: CharacterId, x: f32) {
    world
        .get_mut(id)
        .unwrap()
        .set_position(Position::new(x, 0.0, 0.0));
}

fn count_deaths(world: &World, id: CharacterId) -> Rc<Cell<u32>> {
    let deaths = Rc::new(Cell::new(0));
    let counter = Rc::clone(&deaths);
    world.get(id).unwrap().events().subscribe(move |event| {
        if *event == CharacterEvent::Died {
            counter.set(counter.get() + 1);
        }
    });
    deaths
}

#[test]
fn proximity_walks_the_state_machine_up_and_back_down() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let foe = world.spawn(Role::Enemy, "goblin", Position::new(20.0, 0.0, 0.0));
    let mut controller = Controller::new();
    controller.register_player(hero);
    controller.register_enemy(foe);

    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Idle);
    assert!(world.get(hero).unwrap().enemies().is_empty());

    // inside the player's alertness (12) but outside the goblin's (8)
    place(&mut world, foe, 10.0);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Alert);
    assert_eq!(state(&world, foe), AiState::Idle);

    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Chase);

    place(&mut world, foe, 1.5);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Attack);
    assert_eq!(state(&world, foe), AiState::Alert);
    assert_eq!(world.get(foe).unwrap().in_attack_range(), &[hero]);

    controller.update(&mut world, &env);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, foe), AiState::Attack);

    place(&mut world, foe, 50.0);
    let mut path = Vec::new();
    for _ in 0..3 {
        controller.update(&mut world, &env);
        path.push(state(&world, hero));
    }
    assert_eq!(path, vec![AiState::Chase, AiState::Alert, AiState::Idle]);
    assert_eq!(state(&world, foe), AiState::Idle);
}

#[test]
fn fight_kills_enemy_once_and_player_stands_down() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let clock = world.clock().clone();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let foe = world.spawn(Role::Enemy, "goblin", Position::new(1.0, 0.0, 0.0));
    world.get_mut(hero).unwrap().learn_combat_skill(SLASH).unwrap();
    let deaths = count_deaths(&world, foe);

    let mut controller = Controller::new();
    controller.register_player(hero);
    controller.register_enemy(foe);

    for _ in 0..20 {
        controller.update(&mut world, &env);
        clock.advance(0.5).unwrap();
    }

    assert!(world.get(foe).unwrap().is_dead());
    assert_eq!(state(&world, foe), AiState::Dying);
    assert_eq!(deaths.get(), 1);

    let player = world.get(hero).unwrap();
    assert!(player.enemies().is_empty());
    assert_eq!(player.state(), AiState::Idle);
    assert_eq!(player.stats().value(StatKind::Experience), 50.0);
}

#[test]
fn dying_is_entered_once_and_is_irreversible() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let deaths = count_deaths(&world, hero);
    let mut controller = Controller::new();
    controller.register_player(hero);

    world.get(hero).unwrap().stats().life().set_value(-10.0);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Dying);

    world.get(hero).unwrap().stats().life().set_value(0.0);
    controller.update(&mut world, &env);
    let character = world.get_mut(hero).unwrap();
    assert!(!character.change_state(AiState::Idle));
    assert!(!character.on_attacked(CharacterId(42), 5.0));
    assert_eq!(character.state(), AiState::Dying);
    assert_eq!(deaths.get(), 1);

    character.respawn();
    assert_eq!(character.state(), AiState::Idle);
    assert!(!character.is_dead());
    assert_eq!(character.stats().value(StatKind::Life), 23.0);

    character.stats().life().set_value(0.0);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Dying);
    assert_eq!(deaths.get(), 2);
}

#[test]
fn killing_blow_reports_death() {
    let mut world = common::world();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let character = world.get_mut(hero).unwrap();

    assert!(!character.on_attacked(CharacterId(9), 20.0));
    assert_eq!(character.stats().value(StatKind::Life), 3.0);
    assert!(character.on_attacked(CharacterId(9), 20.0));
    assert!(character.is_dead());
}

#[test]
fn despawned_enemies_are_dropped_from_the_roster() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let foe = world.spawn(Role::Enemy, "goblin", Position::new(3.0, 0.0, 0.0));
    let mut controller = Controller::new();
    controller.register_player(hero);
    controller.register_enemy(foe);

    controller.update(&mut world, &env);
    assert_eq!(world.get(hero).unwrap().enemies().len(), 1);

    assert!(world.despawn(foe).is_some());
    controller.update(&mut world, &env);
    assert!(controller.enemies().is_empty());
    assert!(world.get(hero).unwrap().enemies().is_empty());
}

#[test]
fn dead_player_is_forgotten_by_enemies() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let foe = world.spawn(Role::Enemy, "goblin", Position::new(1.0, 0.0, 0.0));
    let mut controller = Controller::new();
    controller.register_player(hero);
    controller.register_enemy(foe);

    controller.update(&mut world, &env);
    assert_eq!(world.get(foe).unwrap().enemies().len(), 1);

    world.get(hero).unwrap().stats().life().set_value(0.0);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, hero), AiState::Dying);

    controller.update(&mut world, &env);
    let enemy = world.get(foe).unwrap();
    assert!(enemy.enemies().is_empty());
    assert!(enemy.in_attack_range().is_empty());
}

#[test]
fn registration_is_idempotent_and_update_needs_a_player() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let foe = world.spawn(Role::Enemy, "goblin", Position::ORIGIN);
    let mut controller = Controller::new();

    controller.register_enemy(foe);
    controller.register_enemy(foe);
    assert_eq!(controller.enemies(), &[foe]);

    world.get(foe).unwrap().stats().life().set_value(0.0);
    controller.update(&mut world, &env);
    assert_eq!(state(&world, foe), AiState::Idle);
}

#[test]
fn advance_regenerates_magic_and_resolves_due_uses() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world();
    let clock = world.clock().clone();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let mut controller = Controller::new();
    controller.register_player(hero);

    let character = world.get_mut(hero).unwrap();
    character.learn_magic_skill(FIREBALL).unwrap();
    assert!(character.trigger_magic_skill(FIREBALL, &env));
    assert_eq!(character.stats().value(StatKind::Magic), 13.0);

    clock.set_time(2.0).unwrap();
    controller.update(&mut world, &env);
    let character = world.get(hero).unwrap();
    assert_eq!(character.stats().value(StatKind::Magic), 15.0);
    assert_eq!(character.stats().value(StatKind::Body), 15.0);
    assert!(character.pending_uses().is_empty());

    character.stats().life().set_value(0.0);
    controller.update(&mut world, &env);
    clock.set_time(6.0).unwrap();
    controller.update(&mut world, &env);
    assert_eq!(world.get(hero).unwrap().stats().value(StatKind::Magic), 15.0);
}

#[test]
fn pending_uses_wait_for_the_caller_when_not_resolved_by_the_world() {
    let (skills, items) = (common::skills(), common::items());
    let env = Env::new(&skills, &items);
    let mut world = common::world_with(SimConfig {
        resolve_pending_uses: false,
        magic_regeneration: false,
        ..SimConfig::default()
    });
    let clock = world.clock().clone();
    let hero = world.spawn(Role::Player, "hero", Position::ORIGIN);
    let mut controller = Controller::new();
    controller.register_player(hero);

    let character = world.get_mut(hero).unwrap();
    character.learn_magic_skill(FIREBALL).unwrap();
    character.trigger_magic_skill(FIREBALL, &env);

    clock.set_time(1.0).unwrap();
    controller.update(&mut world, &env);
    let character = world.get(hero).unwrap();
    assert_eq!(character.stats().value(StatKind::Body), 10.0);
    assert_eq!(character.stats().value(StatKind::Magic), 13.0);
    assert_eq!(character.due_uses(), vec![FIREBALL]);

    assert!(world.use_magic_skill(hero, FIREBALL, &env));
    assert_eq!(world.get(hero).unwrap().stats().value(StatKind::Body), 15.0);
}
