//! The set of fountains on screen and the run/stop state around them.
//!
//! A driver owns one [`Scene`] and, at a fixed interval, calls
//! [`Scene::tick`] followed by [`Scene::draw`]. The scene has no notion of
//! time or windows; it only knows whether it is still running.

use glam::Vec2;
use log::{info, trace};
use rand::Rng;

use crate::{
    config::Config,
    draw::{self, Shape},
    fountain::Fountain,
    types::FountainId,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    /// Terminal; a stopped scene never ticks again.
    Stopped,
}

/// Fountains spread along the bottom of a `width` x `height` surface.
///
/// ### Fields
/// - `fountains` - Laid out left to right.
/// - `cfg` - Constants shared by every fountain and particle.
/// - `rng` - The only source of randomness; every reset draws from it.
/// - `state` - Running until [`Scene::stop`] is called.
/// - `ticks` - Number of completed ticks.
#[derive(Debug)]
pub struct Scene<R> {
    fountains: Vec<Fountain>,
    cfg: Config,
    rng: R,

    width: u32,
    height: u32,

    state: RunState,
    ticks: u64,
}

impl<R: Rng> Scene<R> {
    /// Lays out a new running scene for the given surface size.
    ///
    /// `cfg` is expected to have passed [`Config::validate`].
    pub fn new(width: u32, height: u32, cfg: Config, mut rng: R) -> Self {
        let fountains = layout(width, height, &cfg, &mut rng);
        info!(
            "scene {width}x{height}: {} fountains, {} particles",
            fountains.len(),
            fountains.iter().map(Fountain::len).sum::<usize>()
        );

        Self {
            fountains,
            cfg,
            rng,
            width,
            height,
            state: RunState::Running,
            ticks: 0,
        }
    }

    /// Advances every fountain by one tick.
    ///
    /// ### Returns
    /// `false` without doing anything once the scene is stopped.
    pub fn tick(&mut self) -> bool {
        if self.state == RunState::Stopped {
            return false;
        }

        let mut recycled = 0;
        for f in &mut self.fountains {
            recycled += f.update(&self.cfg, &mut self.rng);
        }
        self.ticks += 1;
        trace!("tick {}: {recycled} particles recycled", self.ticks);
        true
    }

    /// Moves the scene to [`RunState::Stopped`]. Calling it again is a no-op.
    pub fn stop(&mut self) {
        if self.state == RunState::Running {
            self.state = RunState::Stopped;
            info!("scene stopped after {} ticks", self.ticks);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == RunState::Running
    }

    #[inline]
    pub fn state(&self) -> RunState {
        self.state
    }

    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn fountains(&self) -> &[Fountain] {
        &self.fountains
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.cfg
    }

    /// Re-lays out the fountains for a new surface size.
    ///
    /// Fountains are rebuilt from scratch, so particle counts and powers
    /// are re-randomized. Nothing happens if the size is unchanged or the
    /// scene is stopped.
    ///
    /// ### Returns
    /// `true` if the layout was rebuilt.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if !self.is_running() || (width, height) == (self.width, self.height) {
            return false;
        }

        self.fountains = layout(width, height, &self.cfg, &mut self.rng);
        info!(
            "resized {}x{} -> {width}x{height}: {} fountains",
            self.width,
            self.height,
            self.fountains.len()
        );
        self.width = width;
        self.height = height;
        true
    }

    /// Boosts the fountain horizontally closest to `x`.
    ///
    /// ### Returns
    /// The boosted fountain, or `None` if there is none or the scene is
    /// stopped.
    pub fn boost_nearest(&mut self, x: f32) -> Option<FountainId> {
        if !self.is_running() {
            return None;
        }

        let id = self
            .fountains
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                let da = (a.origin().x - x).abs();
                let db = (b.origin().x - x).abs();
                da.total_cmp(&db)
            })
            .map(|(id, _)| id)?;

        self.fountains[id].boost(&self.cfg, &mut self.rng);
        Some(id)
    }

    /// Replaces the contents of `out` with the shapes of the current frame.
    pub fn draw(&self, out: &mut Vec<Shape>) {
        out.clear();
        for f in &self.fountains {
            draw::push_fountain(out, f);
        }
    }
}

/// Spreads fountains evenly along the bottom of the surface.
///
/// At most `cfg.max_fountains` fountains are placed, one per
/// `cfg.fountain_spacing` pixels of width; surfaces narrower than one
/// spacing get none.
pub fn layout(width: u32, height: u32, cfg: &Config, rng: &mut impl Rng) -> Vec<Fountain> {
    let count = cfg
        .max_fountains
        .min((width / cfg.fountain_spacing) as usize);
    let spacing = width / (count as u32 + 1);
    let y = height as f32 - cfg.baseline_offset;

    (0..count)
        .map(|i| {
            let x = (spacing * (i as u32 + 1)) as f32;
            let particle_count = cfg.particle_count.sample(rng);
            let power = cfg.power.sample(rng);
            Fountain::new(Vec2::new(x, y), particle_count, power, cfg, rng)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn scene(width: u32, height: u32) -> Scene<StdRng> {
        Scene::new(width, height, Config::default(), StdRng::seed_from_u64(17))
    }

    #[test]
    fn layout_caps_fountain_count_and_spaces_evenly() {
        let s = scene(1920, 1080);
        assert_eq!(s.fountains().len(), 5);

        // 1920 / 6 = 320
        let xs: Vec<f32> = s.fountains().iter().map(|f| f.origin().x).collect();
        assert_eq!(xs, vec![320.0, 640.0, 960.0, 1280.0, 1600.0]);

        for f in s.fountains() {
            assert_eq!(f.origin().y, 1020.0);
            assert!((70..100).contains(&f.len()));
            assert!((10.0..15.0).contains(&f.power()));
        }
    }

    #[test]
    fn layout_uses_integer_spacing_on_narrow_screens() {
        let s = scene(650, 480);
        // 650 / 200 = 3 fountains, 650 / 4 = 162 pixels apart.
        let xs: Vec<f32> = s.fountains().iter().map(|f| f.origin().x).collect();
        assert_eq!(xs, vec![162.0, 324.0, 486.0]);
    }

    #[test]
    fn tiny_surface_has_no_fountains_but_still_runs() {
        let mut s = scene(150, 300);
        assert!(s.fountains().is_empty());
        assert!(s.tick());
        assert_eq!(s.ticks(), 1);

        let mut out = vec![];
        s.draw(&mut out);
        assert!(out.is_empty());
        assert_eq!(s.boost_nearest(10.0), None);
    }

    #[test]
    fn tick_updates_until_stopped() {
        let mut s = scene(800, 600);
        assert_eq!(s.state(), RunState::Running);

        for _ in 0..10 {
            assert!(s.tick());
        }
        assert_eq!(s.ticks(), 10);

        s.stop();
        assert!(!s.is_running());

        let snapshot: Vec<_> = s.fountains()[0].particles().to_vec();
        assert!(!s.tick());
        assert_eq!(s.ticks(), 10);
        assert_eq!(s.fountains()[0].particles(), snapshot.as_slice());

        // Stopping twice changes nothing.
        s.stop();
        assert_eq!(s.state(), RunState::Stopped);
    }

    #[test]
    fn fountain_sizes_never_change_while_ticking() {
        let mut s = scene(1280, 720);
        let sizes: Vec<usize> = s.fountains().iter().map(Fountain::len).collect();

        for _ in 0..500 {
            s.tick();
        }

        let after: Vec<usize> = s.fountains().iter().map(Fountain::len).collect();
        assert_eq!(sizes, after);
    }

    #[test]
    fn resize_rebuilds_layout() {
        let mut s = scene(1920, 1080);

        assert!(!s.resize(1920, 1080));
        assert!(s.resize(600, 400));
        assert_eq!(s.size(), (600, 400));
        assert_eq!(s.fountains().len(), 3);
        assert!(s.fountains().iter().all(|f| f.origin().y == 340.0));

        s.stop();
        assert!(!s.resize(1920, 1080));
        assert_eq!(s.size(), (600, 400));
    }

    #[test]
    fn boost_nearest_picks_closest_fountain() {
        let mut s = scene(1920, 1080);

        assert_eq!(s.boost_nearest(0.0), Some(0));
        assert_eq!(s.boost_nearest(1000.0), Some(2));
        assert_eq!(s.boost_nearest(5000.0), Some(4));

        s.stop();
        assert_eq!(s.boost_nearest(1000.0), None);
    }

    #[test]
    fn draw_replaces_previous_frame() {
        let mut s = scene(800, 600);
        let mut out = Vec::new();

        s.draw(&mut out);
        let first = out.len();
        // Four fountains, each with a pool and a nozzle.
        assert_eq!(s.fountains().len(), 4);
        assert!(first >= 8);

        s.tick();
        s.draw(&mut out);
        assert!(out.len() <= first);
        assert!(matches!(out[0], Shape::Ellipse { .. }));
    }

    #[test]
    fn same_seed_gives_same_scene() {
        let mut a = scene(1024, 768);
        let mut b = scene(1024, 768);

        for _ in 0..200 {
            a.tick();
            b.tick();
        }

        for (fa, fb) in a.fountains().iter().zip(b.fountains()) {
            assert_eq!(fa.particles(), fb.particles());
        }
    }
}
