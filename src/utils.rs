// utils.rs
// Spawn-time sampling helpers

use ultraviolet::Vec2;

use crate::config;
use crate::system::Viewport;

/// Uniform spawn value in [MIN_CHARGE_VALUE, MAX_CHARGE_VALUE].
pub fn random_value() -> i32 {
    fastrand::i32(config::MIN_CHARGE_VALUE..=config::MAX_CHARGE_VALUE)
}

/// Uniform spawn position keeping one `extent` clear of every viewport
/// edge.
pub fn random_position(viewport: Viewport, extent: f32) -> Vec2 {
    let span_x = (viewport.width - 2.0 * extent).max(0.0);
    let span_y = (viewport.height - 2.0 * extent).max(0.0);
    Vec2::new(
        extent + fastrand::f32() * span_x,
        extent + fastrand::f32() * span_y,
    )
}

#[cfg(test)]
mod tests {
    use super::{random_position, random_value};
    use crate::system::Viewport;

    #[test]
    fn values_stay_in_generation_range() {
        for _ in 0..200 {
            assert!((-20..=20).contains(&random_value()));
        }
    }

    #[test]
    fn positions_respect_the_edge_margin() {
        let viewport = Viewport {
            width: 300.0,
            height: 200.0,
        };
        for _ in 0..200 {
            let pos = random_position(viewport, 40.0);
            assert!(pos.x >= 40.0 && pos.x <= 260.0);
            assert!(pos.y >= 40.0 && pos.y <= 160.0);
        }
    }

    #[test]
    fn degenerate_viewport_pins_spawns_to_the_margin() {
        let viewport = Viewport {
            width: 50.0,
            height: 50.0,
        };
        let pos = random_position(viewport, 40.0);
        assert_eq!(pos.x, 40.0);
        assert_eq!(pos.y, 40.0);
    }
}
