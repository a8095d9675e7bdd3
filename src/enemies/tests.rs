//! Enemies domain: tests for the registry, composition selection, and live set.

use bevy::prelude::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::{
    Composition, CompositionSelector, EnemyEntry, EnemyRegistry, Health, LiveEnemySet,
    RandomIndexSource, RegistryError, SelectionError, build_enemy_content,
};
use crate::content::{EnemyDef, EnemyStatsDef};
use crate::rooms::NodeId;

/// Plays back fixed picks and records the bound of every draw.
struct ScriptedIndices {
    picks: Vec<usize>,
    cursor: usize,
    requested: Vec<usize>,
}

impl ScriptedIndices {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            cursor: 0,
            requested: Vec::new(),
        }
    }
}

impl RandomIndexSource for ScriptedIndices {
    fn uniform(&mut self, max_inclusive: usize) -> usize {
        self.requested.push(max_inclusive);
        let pick = self.picks.get(self.cursor).copied().unwrap_or(0);
        self.cursor += 1;
        pick
    }
}

fn registry(ranks: &[u32]) -> EnemyRegistry {
    EnemyRegistry::new(
        ranks
            .iter()
            .enumerate()
            .map(|(i, rank)| EnemyEntry::new(format!("enemy_{i}"), *rank))
            .collect(),
    )
    .expect("valid registry")
}

fn enemy_def(id: &str, rank: u32) -> EnemyDef {
    EnemyDef {
        id: id.to_string(),
        name: id.to_uppercase(),
        rank,
        base_stats: EnemyStatsDef {
            health: 10.0 * rank as f32,
            move_speed: 100.0,
        },
        color: (1.0, 0.0, 0.0),
    }
}

// -----------------------------------------------------------------------------
// EnemyRegistry tests
// -----------------------------------------------------------------------------

#[test]
fn test_registry_sorts_ascending_by_rank() {
    let registry = EnemyRegistry::new(vec![
        EnemyEntry::new("brute", 3),
        EnemyEntry::new("goomba", 1),
        EnemyEntry::new("archer", 2),
    ])
    .unwrap();

    assert_eq!(registry.count(), 3);
    let ids: Vec<&str> = registry.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["goomba", "archer", "brute"]);
    assert_eq!(registry.rank_cost(0), Some(1));
    assert_eq!(registry.rank_cost(2), Some(3));
    assert_eq!(registry.rank_cost(3), None);
}

#[test]
fn test_registry_keeps_authored_order_for_equal_ranks() {
    let registry = EnemyRegistry::new(vec![
        EnemyEntry::new("b", 2),
        EnemyEntry::new("a", 1),
        EnemyEntry::new("c", 2),
    ])
    .unwrap();

    let ids: Vec<&str> = registry.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn test_max_index_for_rank() {
    let registry = registry(&[1, 2, 3]);
    assert_eq!(registry.max_index_for_rank(0), None);
    assert_eq!(registry.max_index_for_rank(1), Some(0));
    assert_eq!(registry.max_index_for_rank(2), Some(1));
    assert_eq!(registry.max_index_for_rank(3), Some(2));
    assert_eq!(registry.max_index_for_rank(100), Some(2));
}

#[test]
fn test_max_index_for_rank_includes_every_equal_cost() {
    let registry = registry(&[1, 2, 2, 5]);
    assert_eq!(registry.max_index_for_rank(2), Some(2));
    assert_eq!(registry.max_index_for_rank(4), Some(2));
}

#[test]
fn test_max_index_for_rank_none_when_cheapest_too_expensive() {
    let registry = registry(&[4, 6]);
    assert_eq!(registry.max_index_for_rank(3), None);
}

#[test]
fn test_registry_rejects_empty() {
    assert_eq!(EnemyRegistry::new(Vec::new()).unwrap_err(), RegistryError::Empty);
}

#[test]
fn test_registry_rejects_zero_rank() {
    let err = EnemyRegistry::new(vec![EnemyEntry::new("a", 1), EnemyEntry::new("free", 0)])
        .unwrap_err();
    assert_eq!(err, RegistryError::ZeroRank("free".to_string()));
}

#[test]
fn test_registry_rejects_duplicate_archetype() {
    let err = EnemyRegistry::new(vec![EnemyEntry::new("a", 1), EnemyEntry::new("a", 2)])
        .unwrap_err();
    assert_eq!(err, RegistryError::DuplicateArchetype("a".to_string()));
}

#[test]
fn test_registry_clones_share_entries() {
    let registry = registry(&[1, 2]);
    let clone = registry.clone();
    assert_eq!(clone.count(), registry.count());
    assert_eq!(clone.entry(1), registry.entry(1));
}

// -----------------------------------------------------------------------------
// CompositionSelector tests
// -----------------------------------------------------------------------------

#[test]
fn test_zero_budget_yields_empty_composition() {
    let registry = registry(&[1, 2, 3]);
    let mut source = ScriptedIndices::new(&[]);
    let composition = CompositionSelector::new(&registry)
        .select(0, &mut source)
        .unwrap();

    assert!(composition.is_empty());
    assert!(source.requested.is_empty());
}

#[test]
fn test_budget_below_cheapest_yields_empty_composition() {
    let registry = registry(&[3, 5]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let composition = CompositionSelector::new(&registry)
        .select(2, &mut rng)
        .unwrap();

    assert!(composition.is_empty());
    assert_eq!(composition, Composition::empty(2));
}

#[test]
fn test_negative_budget_is_rejected() {
    let registry = registry(&[1]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let err = CompositionSelector::new(&registry)
        .select(-1, &mut rng)
        .unwrap_err();
    assert_eq!(err, SelectionError::NegativeBudget(-1));
}

#[test]
fn test_each_draw_spans_the_affordable_prefix() {
    let registry = registry(&[1, 2, 3]);
    let mut source = ScriptedIndices::new(&[0, 1]);
    let composition = CompositionSelector::new(&registry)
        .select(3, &mut source)
        .unwrap();

    // 3 affords all three; after paying 1, 2 affords the first two.
    assert_eq!(source.requested, [2, 1]);
    assert_eq!(composition.count(0), 1);
    assert_eq!(composition.count(1), 1);
    assert_eq!(composition.count(2), 0);
    assert_eq!(composition.total_cost(&registry), 3);
}

#[test]
fn test_leftover_budget_is_left_unspent() {
    let registry = registry(&[2, 3]);
    let mut source = ScriptedIndices::new(&[0]);
    let composition = CompositionSelector::new(&registry)
        .select(3, &mut source)
        .unwrap();

    assert_eq!(source.requested, [1]);
    assert_eq!(composition.total_cost(&registry), 2);
    assert_eq!(composition.total_enemies(), 1);
}

#[test]
fn test_out_of_range_pick_is_clamped() {
    let registry = registry(&[1, 5]);
    let mut source = ScriptedIndices::new(&[9, 9, 9]);
    let composition = CompositionSelector::new(&registry)
        .select(3, &mut source)
        .unwrap();

    assert_eq!(composition.count(0), 3);
    assert_eq!(composition.count(1), 0);
}

#[test]
fn test_composition_never_exceeds_budget() {
    let registry = registry(&[1, 2, 3, 5, 8]);
    let selector = CompositionSelector::new(&registry);

    for seed in 0..64 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        for budget in 0..40 {
            let composition = selector.select(budget, &mut rng).unwrap();
            let cost = composition.total_cost(&registry);
            assert!(cost <= budget as u32, "seed {seed}: cost {cost} > {budget}");
            // Every draw costs at least one rank.
            assert!(composition.total_enemies() <= budget as u32);
        }
    }
}

#[test]
fn test_unit_cost_archetype_spends_budget_exactly() {
    let registry = registry(&[1, 4]);
    let selector = CompositionSelector::new(&registry);

    for seed in 0..16 {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let composition = selector.select(9, &mut rng).unwrap();
        assert_eq!(composition.total_cost(&registry), 9);
    }
}

#[test]
fn test_selection_is_reproducible_for_a_seed() {
    let registry = registry(&[1, 2, 3]);
    let selector = CompositionSelector::new(&registry);

    let a = selector
        .select(20, &mut ChaCha8Rng::seed_from_u64(99))
        .unwrap();
    let b = selector
        .select(20, &mut ChaCha8Rng::seed_from_u64(99))
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_composition_iter_skips_zero_counts() {
    let registry = registry(&[1, 2, 3]);
    let mut source = ScriptedIndices::new(&[2, 2]);
    let composition = CompositionSelector::new(&registry)
        .select(6, &mut source)
        .unwrap();

    let entries: Vec<(usize, u32)> = composition.iter().collect();
    assert_eq!(entries, [(2, 2)]);
}

// -----------------------------------------------------------------------------
// Catalog tests
// -----------------------------------------------------------------------------

#[test]
fn test_catalog_follows_registry_order() {
    let defs = vec![enemy_def("brute", 3), enemy_def("goomba", 1)];
    let (registry, catalog) = build_enemy_content(&defs).unwrap();

    assert_eq!(catalog.len(), registry.count());
    assert_eq!(catalog.get(0).map(|a| a.id.as_str()), Some("goomba"));
    assert_eq!(catalog.get(1).map(|a| a.health), Some(30.0));
}

#[test]
fn test_catalog_rejects_duplicate_ids() {
    let defs = vec![enemy_def("goomba", 1), enemy_def("goomba", 2)];
    assert!(matches!(
        build_enemy_content(&defs),
        Err(RegistryError::DuplicateArchetype(_))
    ));
}

// -----------------------------------------------------------------------------
// LiveEnemySet tests
// -----------------------------------------------------------------------------

#[test]
fn test_live_set_tracks_enemies_per_room() {
    let mut world = World::new();
    let a = world.spawn_empty().id();
    let b = world.spawn_empty().id();
    let c = world.spawn_empty().id();

    let mut live = LiveEnemySet::default();
    live.register(NodeId(0), a);
    live.register(NodeId(0), b);
    live.register(NodeId(1), c);

    assert_eq!(live.len(), 3);
    assert_eq!(live.in_room(NodeId(0)), [a, b]);
    assert_eq!(live.in_room(NodeId(1)), [c]);

    assert_eq!(live.remove(a), Some(NodeId(0)));
    assert_eq!(live.remove(a), None);
    assert_eq!(live.in_room(NodeId(0)), [b]);

    let taken = live.take_room(NodeId(0));
    assert_eq!(taken, [b]);
    assert!(live.in_room(NodeId(0)).is_empty());
    assert_eq!(live.iter().collect::<Vec<_>>(), [c]);
}

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_scale_keeps_ratio() {
    let mut health = Health::new(100.0);
    health.take_damage(50.0);
    health.scale(0.5);

    assert_eq!(health.max, 50.0);
    assert_eq!(health.current, 25.0);
    assert!(!health.is_dead());

    health.take_damage(100.0);
    assert!(health.is_dead());
}
