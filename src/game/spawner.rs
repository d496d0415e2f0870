use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ui::Rect;

/// Picks target positions uniformly over the sub-rectangle in which the full
/// circle fits. Bounds narrower than one diameter per axis are widened to the
/// minimum viable rectangle instead of erroring.
#[derive(Debug)]
pub struct Spawner {
    rng: StdRng,
}

impl Spawner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns the center of the next target circle.
    pub fn next(&mut self, bounds: Rect, radius: f32) -> Vec2 {
        let bounds = Self::viable(bounds, radius);
        let x = self
            .rng
            .random_range(bounds.x + radius..=bounds.right() - radius);
        let y = self
            .rng
            .random_range(bounds.y + radius..=bounds.bottom() - radius);
        Vec2::new(x, y)
    }

    fn viable(bounds: Rect, radius: f32) -> Rect {
        let diameter = 2.0 * radius;
        Rect::new(
            bounds.x,
            bounds.y,
            bounds.width.max(diameter),
            bounds.height.max(diameter),
        )
    }
}

impl Default for Spawner {
    fn default() -> Self {
        Self::new()
    }
}
