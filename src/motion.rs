use nalgebra as na;

use crate::config::TrackerConfig;

/// Constant-velocity predictor with exponentially smoothed velocity.
///
/// Velocity is kept in units per nominal frame. `elapsed` counts the
/// nominal frames since the last observation so that a re-acquired track
/// does not read a multi-frame jump as single-frame speed.
#[derive(Debug, Clone)]
pub struct Motion {
    pub velocity: na::Vector2<f32>,
    elapsed: f32,
}

impl Default for Motion {
    fn default() -> Self {
        Self::new()
    }
}

impl Motion {
    pub fn new() -> Self {
        Self {
            velocity: na::Vector2::zeros(),
            elapsed: 0.0,
        }
    }

    /// Moves the clock forward by `dt` nominal frames.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
    }

    #[inline]
    pub fn predict(&self, from: na::Point2<f32>, dt: f32) -> na::Point2<f32> {
        from + self.velocity * dt
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.velocity.norm()
    }

    /// Blends the displacement `prev -> next` into the velocity estimate:
    /// `v = alpha * (next - prev) / elapsed + (1 - alpha) * v`.
    pub fn observe(&mut self, prev: na::Point2<f32>, next: na::Point2<f32>, alpha: f32) {
        let elapsed = if self.elapsed > f32::EPSILON {
            self.elapsed
        } else {
            1.0
        };

        let measured = (next - prev) / elapsed;

        self.velocity = measured * alpha + self.velocity * (1.0 - alpha);
        self.elapsed = 0.0;
    }
}

/// `base + speed_factor * speed + growth_factor * disappeared`, clamped to
/// `[base_search_radius, max_search_radius]`.
pub fn search_radius(cfg: &TrackerConfig, speed: f32, disappeared: u32) -> f32 {
    let radius = cfg.base_search_radius
        + cfg.speed_factor * speed
        + cfg.growth_factor * disappeared as f32;

    radius
        .min(cfg.max_search_radius)
        .max(cfg.base_search_radius)
}
