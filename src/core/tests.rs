//! Core domain: tests for input routing and run configuration.

use bevy::prelude::*;
use bevy::window::WindowFocused;
use rand::Rng;

use super::systems::track_window_focus;
use super::{ActionMap, InputRouting, RunConfig};

// -----------------------------------------------------------------------------
// InputRouting tests
// -----------------------------------------------------------------------------

#[test]
fn test_input_routing_defaults_to_player() {
    let routing = InputRouting::default();
    assert_eq!(routing.action_map(), ActionMap::Player);
    assert!(routing.player_actions_enabled());
    assert!(!routing.ui_actions_enabled());
}

#[test]
fn test_input_routing_switches_to_ui() {
    let mut routing = InputRouting::default();
    routing.set_action_map(ActionMap::Ui);

    assert!(!routing.player_actions_enabled());
    assert!(routing.ui_actions_enabled());
}

#[test]
fn test_disabled_map_receives_nothing_even_when_selected() {
    let mut routing = InputRouting::default();
    routing.set_player_enabled(false);
    assert!(!routing.player_actions_enabled());

    routing.set_action_map(ActionMap::Ui);
    routing.set_ui_enabled(false);
    assert!(!routing.ui_actions_enabled());

    routing.set_ui_enabled(true);
    assert!(routing.ui_actions_enabled());
}

#[test]
fn test_window_focus_loss_mutes_both_maps() {
    let mut app = App::new();
    app.add_message::<WindowFocused>()
        .init_resource::<InputRouting>()
        .add_systems(Update, track_window_focus);
    let window = app.world_mut().spawn_empty().id();

    app.world_mut().write_message(WindowFocused { window, focused: false });
    app.update();
    let routing = app.world().resource::<InputRouting>();
    assert!(!routing.player_actions_enabled());

    app.world_mut().resource_mut::<InputRouting>().set_action_map(ActionMap::Ui);
    app.update();
    assert!(!app.world().resource::<InputRouting>().ui_actions_enabled());

    app.world_mut().write_message(WindowFocused { window, focused: true });
    app.update();
    assert!(app.world().resource::<InputRouting>().ui_actions_enabled());
}

// -----------------------------------------------------------------------------
// RunConfig tests
// -----------------------------------------------------------------------------

#[test]
fn test_generation_rng_is_reproducible_from_seed() {
    let config = RunConfig { seed: 42 };
    let a: Vec<u32> = {
        let mut rng = config.generation_rng();
        (0..8).map(|_| rng.random()).collect()
    };
    let b: Vec<u32> = {
        let mut rng = config.generation_rng();
        (0..8).map(|_| rng.random()).collect()
    };
    assert_eq!(a, b);
}
