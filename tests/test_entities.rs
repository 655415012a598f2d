use std::time::Duration;

use space_shooter::entities::*;
use space_shooter::error::ConfigError;

#[test]
fn difficulty_params_table() {
    let easy = Difficulty::Easy.params();
    assert_eq!(easy.obstacles_per_tick, 1);
    assert_eq!(easy.speed_increment, 0.002);

    let medium = Difficulty::Medium.params();
    assert_eq!(medium.obstacles_per_tick, 4);
    assert_eq!(medium.speed_increment, 0.01);

    let hard = Difficulty::Hard.params();
    assert_eq!(hard.obstacles_per_tick, 6);
    assert_eq!(hard.speed_increment, 0.02);
}

#[test]
fn difficulty_parses_names_and_menu_keys() {
    assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
    assert_eq!(" Medium ".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
    assert_eq!("2".parse::<Difficulty>(), Ok(Difficulty::Medium));
    assert_eq!(
        "nightmare".parse::<Difficulty>(),
        Err(ConfigError::UnknownDifficulty {
            value: "nightmare".to_string()
        })
    );
}

#[test]
fn difficulty_name_round_trips() {
    for d in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        assert_eq!(d.as_str().parse::<Difficulty>(), Ok(d));
    }
}

#[test]
fn bounds_use_fixed_shapes() {
    let craft = Craft { x: 1.0, y: 2.0, speed: CRAFT_SPEED };
    assert_eq!(craft.bounds(), Rect::new(1.0, 2.0, 50.0, 50.0));

    let projectile = Projectile { x: 3.0, y: 4.0, speed: PROJECTILE_SPEED };
    assert_eq!(projectile.bounds(), Rect::new(3.0, 4.0, 10.0, 20.0));

    let adversary = Adversary { x: 5.0, y: 6.0, speed: 2.0, exploded_for: None };
    assert_eq!(adversary.bounds(), Rect::new(5.0, 6.0, 50.0, 50.0));

    let obstacle = Obstacle { x: 7.0, y: 8.0 };
    assert_eq!(obstacle.bounds(), Rect::new(7.0, 8.0, 40.0, 40.0));
}

#[test]
fn adversary_exploded_flag_follows_timer() {
    let mut adversary = Adversary { x: 0.0, y: 0.0, speed: 2.0, exploded_for: None };
    assert!(!adversary.is_exploded());
    adversary.exploded_for = Some(Duration::ZERO);
    assert!(adversary.is_exploded());
}

#[test]
fn input_defaults_to_nothing_pressed() {
    let input = InputState::default();
    assert!(!input.left && !input.right && !input.fire);
}
