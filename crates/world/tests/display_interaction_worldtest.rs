//! Worldtest: Display Item Block
//!
//! Validates the numeric category/variant block with the default catalog
//! and with a custom configured block.

use displayblocks_core::GameMode;
use displayblocks_testkit::{held_amount, stack, world_with, ORIGIN, SURVIVOR};
use displayblocks_world::{AddonConfig, DisplayBlockConfig, DisplayItemConfig, HostEvent, SimWorld};

const DISPLAY: &str = "mkt:display_item";

fn pair(world: &SimWorld) -> (i32, i32) {
    let perm = world.permutation(ORIGIN).expect("display placed");
    (
        perm.int_state("mkt:catergory").unwrap(),
        perm.int_state("mkt:variant").unwrap(),
    )
}

#[test]
fn attach_writes_category_and_variant() {
    let mut world = world_with(DISPLAY);
    assert_eq!(pair(&world), (0, 0));
    world.give(SURVIVOR, stack("minecraft:emerald", 2)).unwrap();

    world.interact(SURVIVOR, ORIGIN).unwrap();

    assert_eq!(pair(&world), (2, 1));
    assert_eq!(held_amount(&world, SURVIVOR), 1);
    let played: Vec<_> = world
        .events()
        .iter()
        .filter_map(|event| match event {
            HostEvent::SoundPlayed { sound, volume, .. } => Some((sound.clone(), *volume)),
            _ => None,
        })
        .collect();
    assert_eq!(played, vec![("random.orb".to_string(), Some(0.5))]);
}

#[test]
fn swap_then_clear_then_destroy() {
    let mut world = world_with(DISPLAY);
    world.give(SURVIVOR, stack("minecraft:iron_ingot", 1)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();
    world.give(SURVIVOR, stack("minecraft:cake", 1)).unwrap();
    world.interact(SURVIVOR, ORIGIN).unwrap();
    assert_eq!(pair(&world), (3, 3));

    world.interact(SURVIVOR, ORIGIN).unwrap();
    assert_eq!(pair(&world), (0, 0));

    world.destroy(ORIGIN).unwrap();

    let dropped: Vec<_> = world
        .spawned_items()
        .iter()
        .map(|item| item.stack.item.to_string())
        .collect();
    assert_eq!(dropped, vec!["minecraft:iron_ingot", "minecraft:cake"]);
}

#[test]
fn destroy_resolves_item_from_pair() {
    let mut world = world_with(DISPLAY);
    let perm = world
        .permutation(ORIGIN)
        .unwrap()
        .with_state("mkt:catergory", 2)
        .with_state("mkt:variant", 2);
    world.set_permutation(ORIGIN, perm).unwrap();

    world.destroy(ORIGIN).unwrap();

    assert_eq!(world.spawned_items().len(), 1);
    assert_eq!(
        world.spawned_items()[0].stack.item.to_string(),
        "minecraft:amethyst_shard"
    );
}

#[test]
fn unknown_pair_drops_nothing() {
    let mut world = world_with(DISPLAY);
    let perm = world
        .permutation(ORIGIN)
        .unwrap()
        .with_state("mkt:catergory", 9)
        .with_state("mkt:variant", 9);
    world.set_permutation(ORIGIN, perm).unwrap();

    world.destroy(ORIGIN).unwrap();

    assert!(world.spawned_items().is_empty());
}

#[test]
fn configured_display_block() {
    let config = AddonConfig {
        coloured_pot: false,
        display_blocks: vec![DisplayBlockConfig {
            component: "shop:shelf".to_string(),
            block: "shop:shelf".to_string(),
            category_state: "shop:kind".to_string(),
            variant_state: "shop:model".to_string(),
            items: vec![DisplayItemConfig {
                item: "minecraft:book".to_string(),
                category: 0,
                variant: 1,
                sound: None,
            }],
        }],
        ..AddonConfig::default()
    };
    let mut world = SimWorld::with_config(&config).expect("config registers");
    world.place(ORIGIN, "shop:shelf").unwrap();
    world.add_player("librarian", GameMode::Adventure);
    world.give("librarian", stack("minecraft:book", 1)).unwrap();

    world.interact("librarian", ORIGIN).unwrap();

    let perm = world.permutation(ORIGIN).unwrap();
    assert_eq!(perm.int_state("shop:kind").unwrap(), 0);
    assert_eq!(perm.int_state("shop:model").unwrap(), 1);
    // Adventure mode keeps the stack; entries without a sound use the default.
    assert_eq!(held_amount(&world, "librarian"), 1);
    assert!(world.events().iter().any(|event| matches!(
        event,
        HostEvent::SoundPlayed { sound, .. } if sound == "dig.grass"
    )));
    assert_eq!(world.registry().ids().collect::<Vec<_>>(), vec!["shop:shelf"]);
}
