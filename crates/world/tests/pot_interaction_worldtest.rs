//! Worldtest: Coloured Pot Interactions
//!
//! Validates:
//! - Attaching to an empty pot (survival consumes, creative does not)
//! - Same-item interaction is a silent no-op
//! - Swapping ejects the old plant before attaching the new one
//! - Empty hand clears the pot
//! - Destroying an occupied pot drops exactly its plant

use displayblocks_core::{BlockPos, GameMode, SimTick};
use displayblocks_testkit::{
    held_amount, item, stack, world_with, JsonlSink, BUILDER, ORIGIN, SURVIVOR,
};
use displayblocks_world::{
    AddonConfig, ContentEncoding, HostEvent, PotContents, PotEncoding, SimWorld, CONTENTS_STATE,
    FLOWER_TYPE_STATE, PLANT_SOUND, POT_COMPONENT, SWAP_SOUND,
};

fn pot_contents(world: &SimWorld) -> PotContents {
    PotEncoding
        .read(world.permutation(ORIGIN).expect("pot placed"))
        .expect("pot permutation readable")
}

fn sounds(events: &[HostEvent]) -> Vec<&str> {
    events
        .iter()
        .filter_map(|event| match event {
            HostEvent::SoundPlayed { sound, .. } => Some(sound.as_str()),
            _ => None,
        })
        .collect()
}

fn spawned(events: &[HostEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| match event {
            HostEvent::ItemSpawned { item, .. } => Some(item.to_string()),
            _ => None,
        })
        .collect()
}

#[test]
fn survival_attach_consumes_one() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:poppy", 5)).unwrap();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    assert_eq!(pot_contents(&world), PotContents::Flower(item("minecraft:poppy")));
    let perm = world.permutation(ORIGIN).unwrap();
    assert_eq!(perm.string_state(CONTENTS_STATE).unwrap(), "flower");
    assert_eq!(perm.string_state(FLOWER_TYPE_STATE).unwrap(), "minecraft:poppy");
    assert_eq!(held_amount(&world, SURVIVOR), 4);
    assert_eq!(sounds(world.events()), vec![PLANT_SOUND]);
    assert!(world.spawned_items().is_empty());
    assert_eq!(world.permutation_writes(), 1);
}

#[test]
fn placement_sound_uses_configured_volume() {
    let config = AddonConfig {
        place_volume: 0.25,
        ..AddonConfig::default()
    };
    let mut world = SimWorld::with_config(&config).expect("config registers");
    world.place(ORIGIN, POT_COMPONENT).unwrap();
    world.add_player(SURVIVOR, GameMode::Survival);
    world.give(SURVIVOR, stack("minecraft:poppy", 2)).unwrap();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    let played: Vec<_> = world
        .events()
        .iter()
        .filter_map(|event| match event {
            HostEvent::SoundPlayed { sound, volume, .. } => Some((sound.as_str(), *volume)),
            _ => None,
        })
        .collect();
    assert_eq!(played, vec![(PLANT_SOUND, Some(0.25))]);
}

#[test]
fn last_item_in_survival_empties_the_hand() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:cactus", 1)).unwrap();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    assert_eq!(pot_contents(&world), PotContents::Cactus);
    let hand = world.player(SURVIVOR).unwrap().main_hand.as_ref().unwrap();
    assert!(!hand.has_item());
}

#[test]
fn creative_attach_keeps_the_stack() {
    let mut world = world_with(POT_COMPONENT);
    world.give(BUILDER, stack("minecraft:oak_sapling", 3)).unwrap();

    world.interact(BUILDER, ORIGIN).unwrap();

    assert_eq!(
        pot_contents(&world),
        PotContents::Sapling(item("minecraft:oak_sapling"))
    );
    assert_eq!(held_amount(&world, BUILDER), 3);
}

#[test]
fn same_item_twice_is_a_noop() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:warped_fungus", 4)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();
    world.drain_events();
    let before = world.permutation(ORIGIN).unwrap().clone();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    assert!(world.events().is_empty(), "no sound, spawn or write expected");
    assert_eq!(world.permutation(ORIGIN).unwrap(), &before);
    assert_eq!(held_amount(&world, SURVIVOR), 3);
    assert_eq!(world.permutation_writes(), 1);
}

#[test]
fn different_item_swaps_after_ejecting() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:azalea", 1)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();
    world.drain_events();

    world.give(SURVIVOR, stack("minecraft:bamboo", 2)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();

    let events = world.drain_events();
    assert_eq!(sounds(&events), vec![SWAP_SOUND, PLANT_SOUND]);
    assert_eq!(spawned(&events), vec!["minecraft:azalea".to_string()]);
    assert_eq!(pot_contents(&world), PotContents::Bamboo);
    assert_eq!(held_amount(&world, SURVIVOR), 1);

    let dropped = &world.spawned_items()[0];
    assert_eq!(dropped.stack.amount, 1);
    assert_eq!(dropped.at, ORIGIN.center());
}

#[test]
fn empty_hand_clears_pot() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:wither_rose", 1)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();
    world.drain_events();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    let events = world.drain_events();
    assert_eq!(spawned(&events), vec!["minecraft:wither_rose".to_string()]);
    assert!(sounds(&events).is_empty());
    assert_eq!(pot_contents(&world), PotContents::Empty);

    // Clearing an empty pot does nothing.
    world.interact(SURVIVOR, ORIGIN).unwrap();
    assert!(world.events().is_empty());
}

#[test]
fn unknown_items_are_ignored() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:diamond_sword", 1)).unwrap();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    assert!(world.events().is_empty());
    assert_eq!(pot_contents(&world), PotContents::Empty);
    assert_eq!(held_amount(&world, SURVIVOR), 1);
}

#[test]
fn player_without_equipment_is_ignored() {
    let mut world = world_with(POT_COMPONENT);
    world.add_player_without_equipment("mob", GameMode::Survival);

    world.interact("mob", ORIGIN).unwrap();

    assert!(world.events().is_empty());
}

#[test]
fn destroy_drops_exactly_the_content() {
    let mut world = world_with(POT_COMPONENT);
    world.give(SURVIVOR, stack("minecraft:crimson_roots", 1)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();
    world.drain_events();

    world.destroy(ORIGIN).unwrap();

    assert_eq!(spawned(world.events()), vec!["minecraft:crimson_roots".to_string()]);
    assert!(world.permutation(ORIGIN).is_none());
}

#[test]
fn destroying_an_empty_pot_drops_nothing() {
    let mut world = world_with(POT_COMPONENT);
    let pos = BlockPos::new(4, 64, 4);
    world.place(pos, POT_COMPONENT).unwrap();

    world.destroy(pos).unwrap();
    world.destroy(ORIGIN).unwrap();

    assert!(world.spawned_items().is_empty());
}

#[test]
fn malformed_permutation_reads_as_empty() {
    let mut world = world_with(POT_COMPONENT);
    let broken = world
        .permutation(ORIGIN)
        .unwrap()
        .with_state(CONTENTS_STATE, "lava");
    world.set_permutation(ORIGIN, broken).unwrap();

    world.destroy(ORIGIN).unwrap();

    assert!(world.spawned_items().is_empty());
}

#[test]
fn pot_session_event_log() {
    let log_path = std::env::temp_dir().join("pot_interaction_worldtest.jsonl");
    let mut event_log = JsonlSink::create(&log_path).expect("create event log");

    let mut world = world_with(POT_COMPONENT);
    let plants = [
        "minecraft:dandelion",
        "minecraft:cherry_sapling",
        "minecraft:flowering_azalea",
        "minecraft:brown_mushroom",
        "minecraft:cactus",
    ];
    let mut tick = SimTick::ZERO;
    for plant in plants {
        world.give(SURVIVOR, stack(plant, 1)).unwrap();
        world.interact(SURVIVOR, ORIGIN).unwrap();
        tick = tick.advance(1);
        event_log
            .write_all(tick, &world.drain_events())
            .expect("write events");
    }
    world.destroy(ORIGIN).unwrap();
    event_log
        .write_all(tick.advance(1), &world.drain_events())
        .expect("write events");

    // Four swaps drop four plants, destroying drops the fifth.
    let dropped: Vec<_> = world
        .spawned_items()
        .iter()
        .map(|item| item.stack.item.to_string())
        .collect();
    assert_eq!(dropped, plants.iter().map(|p| p.to_string()).collect::<Vec<_>>());

    let log = std::fs::read_to_string(&log_path).expect("log readable");
    assert!(log.lines().count() >= plants.len() * 2);
}
