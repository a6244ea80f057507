//! Property tests for the horizontal reflection policy

use gallery_core::config::geometry::{ENEMY_WIDTH, PLAYER_RADIUS};
use gallery_core::config::Bounds;
use gallery_core::objects::{reflect_horizontal, Vec2};
use gallery_core::state::SharedState;
use gallery_core::traits::{Color, DrawSurface, Font};
use gallery_core::world::{TickOutcome, World};
use proptest::prelude::*;

fn bounds_and_width() -> impl Strategy<Value = (Bounds, i32)> {
    prop_oneof![
        Just((Bounds::PLAYER, PLAYER_RADIUS * 2)),
        Just((Bounds::ENEMY, ENEMY_WIDTH)),
    ]
}

proptest! {
    #[test]
    fn reflected_position_is_inside_bounds(
        (bounds, width) in bounds_and_width(),
        x in -10_000i32..10_000,
        step in -20i32..=20,
    ) {
        let mut position = Vec2::new(x, 0);
        let mut velocity = Vec2::new(step, 0);
        reflect_horizontal(&mut position, &mut velocity, width, bounds);

        prop_assert!(bounds.x_min < position.x);
        prop_assert!(position.x + width <= bounds.x_max);
        prop_assert_eq!(velocity.x.abs(), step.abs());
    }

    #[test]
    fn reflection_is_idempotent_inside_bounds(
        (bounds, width) in bounds_and_width(),
        x in -10_000i32..10_000,
        step in -20i32..=20,
    ) {
        let mut position = Vec2::new(x, 0);
        let mut velocity = Vec2::new(step, 0);
        reflect_horizontal(&mut position, &mut velocity, width, bounds);

        let (settled_position, settled_velocity) = (position, velocity);
        reflect_horizontal(&mut position, &mut velocity, width, bounds);

        prop_assert_eq!(position, settled_position);
        prop_assert_eq!(velocity, settled_velocity);
    }

    #[test]
    fn reflection_points_away_from_violated_edge(
        (bounds, width) in bounds_and_width(),
        overshoot in 0i32..500,
        step in 1i32..=20,
    ) {
        let mut position = Vec2::new(bounds.x_min - overshoot, 0);
        let mut velocity = Vec2::new(-step, 0);
        reflect_horizontal(&mut position, &mut velocity, width, bounds);
        prop_assert_eq!(velocity.x, step);

        let mut position = Vec2::new(bounds.x_max - width + 1 + overshoot, 0);
        let mut velocity = Vec2::new(step, 0);
        reflect_horizontal(&mut position, &mut velocity, width, bounds);
        prop_assert_eq!(velocity.x, -step);
    }
}

/// Surface that drops everything
struct NullSurface;

impl DrawSurface for NullSurface {
    type Error = core::convert::Infallible;

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fill_rect(&mut self, _: i32, _: i32, _: u32, _: u32, _: Color) -> Result<(), Self::Error> {
        Ok(())
    }

    fn fill_circle(&mut self, _: i32, _: i32, _: u32, _: Color) -> Result<(), Self::Error> {
        Ok(())
    }

    fn goto_xy(&mut self, _: i32, _: i32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn puts(&mut self, _: &str, _: Font, _: Color) -> Result<(), Self::Error> {
        Ok(())
    }
}

proptest! {
    #[test]
    fn objects_stay_in_bounds_after_every_boundary_pass(ticks in 1usize..600) {
        let shared = SharedState::new(3);
        let mut world = World::default();

        for _ in 0..ticks {
            let outcome = world.tick(&mut NullSurface, &shared).unwrap();
            prop_assert!(matches!(outcome, TickOutcome::Rendered(_)));

            // Positions after a tick are one step past the reflected ones
            let player = world.player();
            let reflected = player.position.x - player.velocity.x;
            prop_assert!(Bounds::PLAYER.x_min < reflected);
            prop_assert!(reflected + PLAYER_RADIUS * 2 <= Bounds::PLAYER.x_max);

            let enemy = world.enemy();
            let reflected = enemy.position.x - enemy.velocity.x;
            prop_assert!(Bounds::ENEMY.x_min < reflected);
            prop_assert!(reflected + ENEMY_WIDTH <= Bounds::ENEMY.x_max);
        }
    }
}
