//! Stateless collision and catch predicates
//!
//! Both take post-advance positions for the current tick. The player hitbox
//! is smaller than its sprite: the visual box is shrunk by `HIT_PADDING` on
//! every side before the overlap test, so near-misses feel fair. The catch
//! test is a Chebyshev-distance check on the top-left anchors, not Euclidean;
//! that asymmetry is part of the game's feel and must not be "fixed".

use glam::Vec2;

use crate::consts::*;

/// True iff the padded player box overlaps the obstacle box.
///
/// Positions are top-left corners; the obstacle box is not shrunk.
pub fn hits_obstacle(player_pos: Vec2, obstacle_pos: Vec2) -> bool {
    player_pos.x + HIT_PADDING < obstacle_pos.x + OBSTACLE_WIDTH
        && player_pos.x + PLAYER_SIZE - HIT_PADDING > obstacle_pos.x
        && player_pos.y + HIT_PADDING < obstacle_pos.y + OBSTACLE_HEIGHT
        && player_pos.y + PLAYER_SIZE - HIT_PADDING > obstacle_pos.y
}

/// True iff the player is within the catch radius of the collectible on both
/// axes independently
pub fn catches_collectible(player_pos: Vec2, collectible_pos: Vec2) -> bool {
    (player_pos.x - collectible_pos.x).abs() < CATCH_RADIUS
        && (player_pos.y - collectible_pos.y).abs() < CATCH_RADIUS
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_hit_when_boxes_overlap() {
        // Player and obstacle share a corner region
        assert!(hits_obstacle(
            Vec2::new(100.0, 290.0),
            Vec2::new(100.0, 290.0)
        ));
    }

    #[test]
    fn test_no_hit_when_player_below() {
        // Player well under the obstacle's vertical extent
        assert!(!hits_obstacle(
            Vec2::new(100.0, 400.0),
            Vec2::new(100.0, 290.0)
        ));
    }

    #[test]
    fn test_padding_forgives_grazing_contact() {
        // Boxes overlap visually by less than the padding: no hit
        let obstacle = Vec2::new(0.0, 0.0);
        let player = Vec2::new(OBSTACLE_WIDTH - HIT_PADDING, 0.0);
        assert!(!hits_obstacle(player, obstacle));
        // One more pixel of overlap crosses the padded edge
        let player = Vec2::new(OBSTACLE_WIDTH - HIT_PADDING - 1.0, 0.0);
        assert!(hits_obstacle(player, obstacle));
    }

    #[test]
    fn test_catch_within_radius_both_axes() {
        let player = Vec2::new(100.0, 300.0);
        assert!(catches_collectible(player, Vec2::new(130.0, 310.0)));
    }

    #[test]
    fn test_no_catch_when_one_axis_out() {
        let player = Vec2::new(100.0, 300.0);
        // Δx = 100 exceeds the radius even though Δy is tiny
        assert!(!catches_collectible(player, Vec2::new(200.0, 310.0)));
        // Δy out, Δx in
        assert!(!catches_collectible(player, Vec2::new(110.0, 360.0)));
    }

    #[test]
    fn test_catch_is_chebyshev_not_euclidean() {
        // Diagonal offset of (45, 45) has Euclidean distance ~63.6 > 50 but
        // still catches, because each axis is tested independently
        let player = Vec2::new(100.0, 300.0);
        assert!(catches_collectible(player, Vec2::new(145.0, 345.0)));
    }

    proptest! {
        #[test]
        fn prop_hit_implies_sprite_overlap(
            px in -100.0f32..900.0, py in 0.0f32..500.0,
            ox in -100.0f32..900.0, oy in 0.0f32..500.0,
        ) {
            // The padded hitbox is strictly inside the sprite box, so a hit
            // always implies the unpadded sprites overlap too
            let player = Vec2::new(px, py);
            let obstacle = Vec2::new(ox, oy);
            if hits_obstacle(player, obstacle) {
                prop_assert!(px < ox + OBSTACLE_WIDTH && px + PLAYER_SIZE > ox);
                prop_assert!(py < oy + OBSTACLE_HEIGHT && py + PLAYER_SIZE > oy);
            }
        }

        #[test]
        fn prop_catch_is_symmetric(
            px in -100.0f32..900.0, py in 0.0f32..500.0,
            cx in -100.0f32..900.0, cy in 0.0f32..500.0,
        ) {
            let a = Vec2::new(px, py);
            let b = Vec2::new(cx, cy);
            prop_assert_eq!(catches_collectible(a, b), catches_collectible(b, a));
        }
    }
}
