use glam::Vec2;
use rand::Rng;

use crate::{
    color::{OIL_PALETTE, Rgb},
    config::Config,
    fountain::Nozzle,
};

/// A single oil droplet.
///
/// Particles are never created or dropped during a run: once a droplet
/// falls back past the nozzle or runs out of life it is re-randomized in
/// place by [`Particle::reset`].
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Pixels per tick; negative `y` is upward.
    pub vel: Vec2,
    /// Base radius, scaled by `life` when drawn.
    pub size: f32,
    pub gravity: f32,
    pub color: Rgb,
    /// Remaining life in `(0, 1]`.
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    /// Creates a particle already scattered around the nozzle.
    pub fn spawn(nozzle: &Nozzle, cfg: &Config, rng: &mut impl Rng) -> Self {
        let mut p = Self {
            pos: nozzle.origin,
            vel: Vec2::ZERO,
            size: cfg.size.min,
            gravity: cfg.gravity,
            color: OIL_PALETTE[0],
            life: 1.0,
            decay: cfg.decay.min,
        };
        p.reset(nozzle, cfg, rng);
        p
    }

    /// Re-randomizes every field as if the droplet had just left the nozzle.
    ///
    /// The particle starts exactly on the nozzle baseline with a small
    /// horizontal jitter and an upward speed of at least `nozzle.power`.
    pub fn reset(&mut self, nozzle: &Nozzle, cfg: &Config, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            nozzle.origin.x + cfg.spawn_jitter.sample(rng),
            nozzle.origin.y,
        );
        self.size = cfg.size.sample(rng);
        self.vel = Vec2::new(
            cfg.drift.sample(rng),
            -(cfg.lift.sample(rng) + nozzle.power),
        );
        self.gravity = cfg.gravity;
        self.color = OIL_PALETTE[rng.random_range(0..OIL_PALETTE.len())];
        self.life = 1.0;
        self.decay = cfg.decay.sample(rng);
    }

    /// Advances the particle by one tick.
    ///
    /// Gravity is applied to the velocity before the position is
    /// integrated. A particle that ends the tick below the nozzle baseline
    /// or without life is reset.
    ///
    /// ### Returns
    /// `true` if the particle was recycled during this tick.
    pub fn update(&mut self, nozzle: &Nozzle, cfg: &Config, rng: &mut impl Rng) -> bool {
        self.vel.y += self.gravity;
        self.pos += self.vel;
        self.life -= self.decay;

        if self.pos.y > nozzle.origin.y || self.life <= 0.0 {
            self.reset(nozzle, cfg, rng);
            return true;
        }
        false
    }

    /// Radius the droplet is drawn with, or `None` when it is too faded
    /// to be visible.
    #[inline]
    pub fn radius(&self) -> Option<f32> {
        if self.life <= 0.0 {
            return None;
        }
        let r = self.size * self.life;
        (r > 1.0).then_some(r)
    }

    /// Center and radius of the glossy highlight, offset toward the
    /// top-left of the droplet.
    pub fn highlight(&self) -> Option<(Vec2, f32)> {
        self.radius().map(|r| (self.pos - Vec2::splat(r * 0.3), r * 0.35))
    }
}
