use glam::Vec2;
use log::debug;
use rand::Rng;

use crate::{config::Config, particle::Particle};

/// The part of a fountain its particles read when they are reset.
///
/// Particles never hold on to their fountain; the fountain lends its
/// nozzle for the duration of each particle call instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nozzle {
    /// Emission point; also the baseline particles are recycled below.
    pub origin: Vec2,
    /// Upward speed every droplet leaves the nozzle with, at minimum.
    pub power: f32,
}

/// An emission source owning a fixed pool of particles.
#[derive(Debug)]
pub struct Fountain {
    nozzle: Nozzle,
    particles: Box<[Particle]>,
}

impl Fountain {
    /// Builds a fountain and scatters its `particle_count` particles
    /// around the nozzle.
    pub fn new(
        origin: Vec2,
        particle_count: usize,
        power: f32,
        cfg: &Config,
        rng: &mut impl Rng,
    ) -> Self {
        let nozzle = Nozzle { origin, power };
        let particles = (0..particle_count)
            .map(|_| Particle::spawn(&nozzle, cfg, rng))
            .collect();

        Self { nozzle, particles }
    }

    /// Advances every particle by exactly one tick.
    ///
    /// ### Returns
    /// How many particles were recycled during this tick.
    pub fn update(&mut self, cfg: &Config, rng: &mut impl Rng) -> usize {
        let mut recycled = 0;
        for p in self.particles.iter_mut() {
            if p.update(&self.nozzle, cfg, rng) {
                recycled += 1;
            }
        }
        recycled
    }

    /// Kicks a random share of the particles upward.
    ///
    /// Each particle is picked with probability `cfg.boost_chance` and gets
    /// a fresh upward speed from `cfg.boost_lift` plus a wider sideways
    /// drift. Life and pool size are untouched.
    ///
    /// ### Returns
    /// The number of particles that were kicked.
    pub fn boost(&mut self, cfg: &Config, rng: &mut impl Rng) -> usize {
        let mut kicked = 0;
        for p in self.particles.iter_mut() {
            if rng.random_bool(cfg.boost_chance) {
                p.vel = Vec2::new(
                    cfg.boost_drift.sample(rng),
                    -cfg.boost_lift.sample(rng),
                );
                kicked += 1;
            }
        }
        debug!(
            "boosted fountain at x={:.0}: {kicked}/{} particles",
            self.nozzle.origin.x,
            self.particles.len()
        );
        kicked
    }

    #[inline]
    pub fn nozzle(&self) -> &Nozzle {
        &self.nozzle
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        self.nozzle.origin
    }

    #[inline]
    pub fn power(&self) -> f32 {
        self.nozzle.power
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
