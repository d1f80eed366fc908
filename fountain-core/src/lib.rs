//! Particle simulation behind the oil fountains overlay.
//!
//! Main components:
//! - [`particle`] — a single droplet and its per-tick kinematics.
//! - [`fountain`] — a nozzle with a fixed, recycled pool of particles.
//! - [`scene`] — fountains laid out on a surface, plus run/stop state.
//! - [`draw`] — the shapes a frame is made of.
//! - [`color`] — fixed palette.
//! - [`config`] — tunable constants.
//! - [`types`] — shared type aliases and IDs.

pub mod color;
pub mod config;
pub mod draw;
pub mod fountain;
pub mod particle;
pub mod scene;
pub mod types;
