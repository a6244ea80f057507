//! Boundary geometry shared by the object policies

use super::Vec2;
use crate::config::geometry::{ENEMY_HEIGHT, ENEMY_WIDTH, HIT_MARGIN};
use crate::config::Bounds;

/// Keep a horizontally moving sprite inside `bounds`
///
/// Touching or crossing the left edge moves the sprite one pixel inside
/// it and points the step to the right; crossing the right edge does the
/// same toward the left. The step magnitude is never changed. Both edges
/// are checked on every call.
pub fn reflect_horizontal(position: &mut Vec2, velocity: &mut Vec2, width: i32, bounds: Bounds) {
    if position.x <= bounds.x_min {
        position.x = bounds.x_min + 1;
        velocity.x = step_towards_max(velocity.x);
    }

    if position.x.saturating_add(width) > bounds.x_max {
        position.x = bounds.x_max - width - 1;
        velocity.x = step_towards_min(velocity.x);
    }
}

fn step_towards_max(step: i32) -> i32 {
    step.saturating_abs()
}

fn step_towards_min(step: i32) -> i32 {
    -step.saturating_abs()
}

/// Whether a bullet at `bullet` lies inside the enemy box at `enemy`
///
/// The enemy box is shrunk by [`HIT_MARGIN`] on both horizontal sides.
/// All comparisons are strict.
pub fn overlaps_enemy(bullet: Vec2, enemy: Vec2) -> bool {
    let x_inside = bullet.x > enemy.x + HIT_MARGIN && bullet.x < enemy.x + ENEMY_WIDTH - HIT_MARGIN;
    let y_inside = bullet.y > enemy.y - ENEMY_HEIGHT && bullet.y < enemy.y;

    x_inside && y_inside
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reflect_left_edge() {
        let mut pos = Vec2::new(8, 7);
        let mut vel = Vec2::new(-3, 0);
        reflect_horizontal(&mut pos, &mut vel, 10, Bounds::PLAYER);

        assert_eq!(pos.x, 9);
        assert_eq!(vel.x, 3);
    }

    #[test]
    fn test_reflect_right_edge() {
        let mut pos = Vec2::new(120, 7);
        let mut vel = Vec2::new(3, 0);
        reflect_horizontal(&mut pos, &mut vel, 10, Bounds::PLAYER);

        assert_eq!(pos.x, 127 - 10 - 1);
        assert_eq!(vel.x, -3);
    }

    #[test]
    fn test_reflect_keeps_direction_inside() {
        let mut pos = Vec2::new(50, 40);
        let mut vel = Vec2::new(-4, 0);
        reflect_horizontal(&mut pos, &mut vel, 20, Bounds::ENEMY);

        assert_eq!(pos.x, 50);
        assert_eq!(vel.x, -4);
    }

    #[test]
    fn test_reflect_left_edge_already_positive() {
        let mut pos = Vec2::new(2, 40);
        let mut vel = Vec2::new(4, 0);
        reflect_horizontal(&mut pos, &mut vel, 20, Bounds::ENEMY);

        assert_eq!(pos.x, 16);
        assert_eq!(vel.x, 4);
    }

    #[test]
    fn test_overlap_inside_margin() {
        let enemy = Vec2::new(32, 40);
        assert!(overlaps_enemy(Vec2::new(35, 39), enemy));
    }

    #[test]
    fn test_overlap_rejects_margin() {
        let enemy = Vec2::new(32, 40);
        assert!(!overlaps_enemy(Vec2::new(33, 39), enemy));
        assert!(!overlaps_enemy(Vec2::new(34, 39), enemy));
        assert!(!overlaps_enemy(Vec2::new(50, 39), enemy));
        assert!(overlaps_enemy(Vec2::new(49, 39), enemy));
    }

    #[test]
    fn test_overlap_vertical_window() {
        let enemy = Vec2::new(32, 40);
        assert!(!overlaps_enemy(Vec2::new(40, 40), enemy));
        assert!(!overlaps_enemy(Vec2::new(40, 20), enemy));
        assert!(overlaps_enemy(Vec2::new(40, 21), enemy));
    }
}
