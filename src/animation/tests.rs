//! Animation domain: unit tests for the sink contract.

use bevy::prelude::*;

use super::{AnimParam, AnimParamKeys, AnimatorRegistry, move_towards_f32, normalized_velocity};

#[test]
fn test_param_keys_are_stable_and_distinct() {
    let first = AnimParamKeys::default();
    let second = AnimParamKeys::default();

    for param in AnimParam::ALL {
        assert_eq!(first.key(param), second.key(param));
    }

    let mut keys: Vec<u32> = AnimParam::ALL.iter().map(|&p| first.key(p)).collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), AnimParam::ALL.len());
}

fn spawn_entities(world: &mut World, count: usize) -> Vec<Entity> {
    (0..count).map(|_| world.spawn_empty().id()).collect()
}

#[test]
fn test_registry_add_is_idempotent_and_ordered() {
    let mut world = World::new();
    let entities = spawn_entities(&mut world, 2);
    let (a, b) = (entities[0], entities[1]);

    let mut registry = AnimatorRegistry::default();
    registry.add(a);
    registry.add(b);
    registry.add(a);

    let entities: Vec<Entity> = registry.iter().collect();
    assert_eq!(entities, vec![a, b]);
}

#[test]
fn test_registry_set_replaces_all() {
    let mut world = World::new();
    let entities = spawn_entities(&mut world, 3);
    let (a, b, c) = (entities[0], entities[1], entities[2]);

    let mut registry = AnimatorRegistry::default();

    registry.add(a);
    registry.set([b, c, b]);

    let entities: Vec<Entity> = registry.iter().collect();
    assert_eq!(entities, vec![b, c]);

    registry.remove(b);
    assert_eq!(registry.iter().collect::<Vec<_>>(), vec![c]);
}

#[test]
fn test_move_towards_f32_clamps_at_target() {
    assert_eq!(move_towards_f32(0.0, 1.0, 0.25), 0.25);
    assert_eq!(move_towards_f32(0.9, 1.0, 0.25), 1.0);
    assert_eq!(move_towards_f32(1.0, 0.0, 0.4), 0.6);
    assert_eq!(move_towards_f32(0.5, 0.5, 0.1), 0.5);
}

#[test]
fn test_normalized_velocity_clamps_to_unit_range() {
    assert_eq!(normalized_velocity(5.0, 10.0), 0.5);
    assert_eq!(normalized_velocity(25.0, 10.0), 1.0);
    assert_eq!(normalized_velocity(-1.0, 10.0), 0.0);
}
