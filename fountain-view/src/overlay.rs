//! Fullscreen transparent overlay built with eframe/egui.
//!
//! This module defines [`Overlay`], which owns the fountain [`Scene`] and
//! implements [`eframe::App`] to tick it at a fixed interval and paint its
//! draw list with no background.

use eframe::App;
use fountain_core::{color::Rgb, config::Config, draw::Shape, scene::Scene};
use glam::Vec2;
use log::{debug, info};
use rand::rngs::ThreadRng;

/// What the user asked for during a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    /// Stop the scene and close the window.
    Exit,
    /// Kick the fountain closest to this x coordinate.
    Boost(f32),
}

/// Main application state for the overlay.
///
/// ### Fields
/// - `scene` - Fountains, their particles and the run/stop state.
/// - `shapes` - Draw list reused between frames.
/// - `last_tick_time` - egui time of the last simulation tick.
pub struct Overlay {
    scene: Scene<ThreadRng>,
    shapes: Vec<Shape>,
    last_tick_time: f64,
}

impl Overlay {
    /// Creates an overlay whose scene covers a surface of `size` points.
    pub fn new(cfg: Config, size: egui::Vec2) -> Self {
        let (width, height) = surface_size(size);
        Self {
            scene: Scene::new(width, height, cfg, rand::rng()),
            shapes: Vec::with_capacity(1024),
            last_tick_time: f64::NEG_INFINITY,
        }
    }

    /// Runs one simulation tick if the tick interval has elapsed.
    ///
    /// ### Returns
    /// `true` if the scene was advanced.
    fn step(&mut self, now: f64) -> bool {
        let interval = self.scene.config().tick_interval.as_secs_f64();
        if !tick_due(now, self.last_tick_time, interval) {
            return false;
        }
        self.last_tick_time = now;
        self.scene.tick()
    }

    fn apply(&mut self, ctx: &egui::Context, action: Action) {
        match action {
            Action::Exit => {
                info!("exit requested");
                self.scene.stop();
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
            Action::Boost(x) => {
                if let Some(id) = self.scene.boost_nearest(x) {
                    debug!("boost at x={x:.0} hit fountain {id}");
                }
            }
        }
    }

    /// Paints the current draw list on the background layer.
    fn paint(&mut self, ctx: &egui::Context) {
        self.scene.draw(&mut self.shapes);
        let painter = ctx.layer_painter(egui::LayerId::background());
        for shape in &self.shapes {
            paint_shape(&painter, shape);
        }
    }
}

impl App for Overlay {
    /// eframe callback run once per frame.
    ///
    /// Handles exit/boost input, follows the window size, ticks the scene
    /// when due and repaints it from scratch.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let action = ctx.input(|i| {
            let boost_x = i
                .pointer
                .secondary_clicked()
                .then(|| i.pointer.interact_pos())
                .flatten()
                .map(|p| p.x);
            action_for(
                i.key_pressed(egui::Key::Escape),
                i.pointer.primary_clicked(),
                boost_x,
            )
        });
        if let Some(action) = action {
            self.apply(ctx, action);
        }

        if !self.scene.is_running() {
            return;
        }

        let (width, height) = surface_size(ctx.screen_rect().size());
        self.scene.resize(width, height);

        let now = ctx.input(|i| i.time);
        self.step(now);
        self.paint(ctx);

        ctx.request_repaint_after(self.scene.config().tick_interval);
    }

    /// Fully transparent, so only painted shapes show.
    fn clear_color(&self, _visuals: &egui::Visuals) -> [f32; 4] {
        [0.0; 4]
    }
}

/// Maps raw input of one frame to an [`Action`].
///
/// Escape and the primary click both exit and win over a boost.
fn action_for(escape: bool, primary_click: bool, secondary_click_x: Option<f32>) -> Option<Action> {
    if escape || primary_click {
        Some(Action::Exit)
    } else {
        secondary_click_x.map(Action::Boost)
    }
}

#[inline]
fn tick_due(now: f64, last_tick_time: f64, interval: f64) -> bool {
    now - last_tick_time >= interval
}

fn surface_size(size: egui::Vec2) -> (u32, u32) {
    (size.x.max(0.0) as u32, size.y.max(0.0) as u32)
}

#[inline]
fn to_color32(c: Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(c.r, c.g, c.b)
}

#[inline]
fn to_pos2(v: Vec2) -> egui::Pos2 {
    egui::pos2(v.x, v.y)
}

fn paint_shape(painter: &egui::Painter, shape: &Shape) {
    match *shape {
        Shape::Ellipse {
            center,
            radii,
            fill,
            stroke,
        } => {
            let center = to_pos2(center);
            let radii = egui::vec2(radii.x, radii.y);
            painter.add(egui::Shape::ellipse_filled(center, radii, to_color32(fill)));
            if let Some(stroke) = stroke {
                painter.add(egui::Shape::ellipse_stroke(
                    center,
                    radii,
                    egui::Stroke::new(1.0, to_color32(stroke)),
                ));
            }
        }

        Shape::Rect {
            min,
            max,
            fill,
            stroke,
        } => {
            let rect = egui::Rect::from_min_max(to_pos2(min), to_pos2(max));
            painter.rect_filled(rect, 0.0, to_color32(fill));
            if let Some(stroke) = stroke {
                painter.rect_stroke(
                    rect,
                    0.0,
                    egui::Stroke::new(1.0, to_color32(stroke)),
                    egui::StrokeKind::Inside,
                );
            }
        }

        Shape::Circle {
            center,
            radius,
            fill,
        } => {
            painter.circle_filled(to_pos2(center), radius, to_color32(fill));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fountain_core::scene::RunState;

    fn overlay() -> Overlay {
        Overlay::new(Config::default(), egui::vec2(1920.0, 1080.0))
    }

    #[test]
    fn escape_and_primary_click_exit() {
        assert_eq!(action_for(true, false, None), Some(Action::Exit));
        assert_eq!(action_for(false, true, None), Some(Action::Exit));
        // Exit wins over a boost in the same frame.
        assert_eq!(action_for(false, true, Some(10.0)), Some(Action::Exit));
    }

    #[test]
    fn secondary_click_boosts() {
        assert_eq!(action_for(false, false, Some(640.0)), Some(Action::Boost(640.0)));
        assert_eq!(action_for(false, false, None), None);
    }

    #[test]
    fn tick_waits_for_interval() {
        let mut o = overlay();

        // The very first frame always ticks.
        assert!(o.step(0.0));
        assert!(!o.step(0.005));
        assert!(!o.step(0.010));
        assert!(o.step(0.020));
        assert_eq!(o.scene.ticks(), 2);
    }

    #[test]
    fn exit_stops_ticking() {
        let mut o = overlay();
        let ctx = egui::Context::default();

        assert!(o.step(0.0));
        o.apply(&ctx, Action::Exit);

        assert_eq!(o.scene.state(), RunState::Stopped);
        assert!(!o.step(1.0));
        assert_eq!(o.scene.ticks(), 1);
    }

    #[test]
    fn boost_keeps_scene_running() {
        let mut o = overlay();
        let ctx = egui::Context::default();
        let sizes: Vec<usize> = o.scene.fountains().iter().map(|f| f.len()).collect();

        o.apply(&ctx, Action::Boost(960.0));

        assert!(o.scene.is_running());
        let after: Vec<usize> = o.scene.fountains().iter().map(|f| f.len()).collect();
        assert_eq!(sizes, after);
    }

    #[test]
    fn overlay_lays_out_for_its_size() {
        let o = overlay();
        assert_eq!(o.scene.size(), (1920, 1080));
        assert_eq!(o.scene.fountains().len(), 5);

        let tiny = Overlay::new(Config::default(), egui::vec2(-5.0, 100.0));
        assert_eq!(tiny.scene.size(), (0, 100));
        assert!(tiny.scene.fountains().is_empty());
    }

    #[test]
    fn colors_map_channel_for_channel() {
        let c = to_color32(Rgb::from_hex(0x302a24));
        assert_eq!(c, egui::Color32::from_rgb(0x30, 0x2a, 0x24));
    }
}
