use std::time::Duration;

use rand::{Rng, distr::uniform::SampleUniform};
use thiserror::Error;

/// Half-open sampling interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span<T> {
    pub min: T,
    pub max: T,
}

impl<T> Span<T> {
    pub const fn new(min: T, max: T) -> Self {
        Self { min, max }
    }
}

impl<T: SampleUniform + PartialOrd + Copy> Span<T> {
    /// Draws a uniform value from `[min, max)`.
    ///
    /// ### Panics
    /// Panics if the span is empty; [`Config::validate`] rejects such spans.
    #[inline]
    pub fn sample(&self, rng: &mut impl Rng) -> T {
        rng.random_range(self.min..self.max)
    }

    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.min <= value && value < self.max
    }

    fn is_empty(&self) -> bool {
        (self.min..self.max).is_empty()
    }
}

/// Tunable constants of the simulation and the scene layout.
///
/// Nothing here is read from the outside world; [`Config::default`] is the
/// only configuration the overlay ever runs with.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Downward acceleration, pixels per tick squared.
    pub gravity: f32,
    /// Horizontal spawn offset around the fountain origin.
    pub spawn_jitter: Span<f32>,
    /// Extra upward speed on top of the fountain power.
    pub lift: Span<f32>,
    /// Horizontal speed at spawn.
    pub drift: Span<f32>,
    pub size: Span<f32>,
    /// Life lost per tick.
    pub decay: Span<f32>,

    pub particle_count: Span<usize>,
    pub power: Span<f32>,

    /// Screen width reserved per fountain when deciding how many fit.
    pub fountain_spacing: u32,
    pub max_fountains: usize,
    /// Distance of the fountain baseline from the bottom edge.
    pub baseline_offset: f32,

    pub tick_interval: Duration,

    /// Probability that a given particle is kicked by a boost.
    pub boost_chance: f64,
    pub boost_lift: Span<f32>,
    pub boost_drift: Span<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gravity: 0.15,
            spawn_jitter: Span::new(-5.0, 5.0),
            lift: Span::new(0.0, 8.0),
            drift: Span::new(-1.5, 1.5),
            size: Span::new(3.0, 9.0),
            decay: Span::new(0.003, 0.008),
            particle_count: Span::new(70, 100),
            power: Span::new(10.0, 15.0),
            fountain_spacing: 200,
            max_fountains: 5,
            baseline_offset: 60.0,
            tick_interval: Duration::from_millis(16),
            boost_chance: 0.6,
            boost_lift: Span::new(14.0, 20.0),
            boost_drift: Span::new(-3.0, 3.0),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("sampling range `{name}` is empty")]
    EmptyRange { name: &'static str },

    #[error("fountain spacing must be non-zero")]
    ZeroSpacing,

    #[error("tick interval must be non-zero")]
    ZeroTickInterval,

    #[error("boost chance {0} is outside [0, 1]")]
    BoostChance(f64),
}

impl Config {
    /// Checks that every range can be sampled and the layout is well defined.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let spans = [
            ("spawn_jitter", self.spawn_jitter),
            ("lift", self.lift),
            ("drift", self.drift),
            ("size", self.size),
            ("decay", self.decay),
            ("power", self.power),
            ("boost_lift", self.boost_lift),
            ("boost_drift", self.boost_drift),
        ];
        if let Some((name, _)) = spans.iter().find(|(_, s)| s.is_empty()) {
            return Err(ConfigError::EmptyRange { name: *name });
        }
        if self.particle_count.is_empty() {
            return Err(ConfigError::EmptyRange {
                name: "particle_count",
            });
        }
        if self.fountain_spacing == 0 {
            return Err(ConfigError::ZeroSpacing);
        }
        if self.tick_interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }
        if !(0.0..=1.0).contains(&self.boost_chance) {
            return Err(ConfigError::BoostChance(self.boost_chance));
        }
        Ok(())
    }
}
