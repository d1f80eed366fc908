//! Translation of the simulation into paintable shapes.
//!
//! The core never paints anything itself. Each frame the driver asks the
//! scene for a fresh list of [`Shape`]s and hands it to whatever 2-D
//! surface it owns.

use glam::Vec2;

use crate::{
    color::{BASE_FILL, BASE_OUTLINE, HIGHLIGHT, NOZZLE_FILL, NOZZLE_OUTLINE, Rgb},
    fountain::Fountain,
};

/// Half extents of the pool drawn under each nozzle.
pub const BASE_RADII: Vec2 = Vec2::new(45.0, 15.0);
/// Half extents of the nozzle block.
pub const NOZZLE_HALF_EXTENTS: Vec2 = Vec2::new(5.0, 8.0);

/// A filled primitive in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Ellipse {
        center: Vec2,
        radii: Vec2,
        fill: Rgb,
        stroke: Option<Rgb>,
    },
    Rect {
        min: Vec2,
        max: Vec2,
        fill: Rgb,
        stroke: Option<Rgb>,
    },
    Circle {
        center: Vec2,
        radius: f32,
        fill: Rgb,
    },
}

/// Appends the shapes of one fountain: base pool, nozzle, then every
/// visible droplet followed by its highlight.
pub fn push_fountain(out: &mut Vec<Shape>, fountain: &Fountain) {
    let origin = fountain.origin();

    // The pool hangs below the baseline.
    out.push(Shape::Ellipse {
        center: origin + Vec2::new(0.0, BASE_RADII.y),
        radii: BASE_RADII,
        fill: BASE_FILL,
        stroke: Some(BASE_OUTLINE),
    });
    out.push(Shape::Rect {
        min: origin - NOZZLE_HALF_EXTENTS,
        max: origin + NOZZLE_HALF_EXTENTS,
        fill: NOZZLE_FILL,
        stroke: Some(NOZZLE_OUTLINE),
    });

    for p in fountain.particles() {
        let (Some(radius), Some((hl_center, hl_radius))) = (p.radius(), p.highlight()) else {
            continue;
        };
        out.push(Shape::Circle {
            center: p.pos,
            radius,
            fill: p.color,
        });
        out.push(Shape::Circle {
            center: hl_center,
            radius: hl_radius,
            fill: HIGHLIGHT,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn fountain_shapes_start_with_pool_and_nozzle() {
        let mut rng = StdRng::seed_from_u64(8);
        let f = Fountain::new(Vec2::new(100.0, 200.0), 70, 10.0, &Config::default(), &mut rng);

        let mut out = Vec::new();
        push_fountain(&mut out, &f);

        assert_eq!(
            out[0],
            Shape::Ellipse {
                center: Vec2::new(100.0, 215.0),
                radii: Vec2::new(45.0, 15.0),
                fill: BASE_FILL,
                stroke: Some(BASE_OUTLINE),
            }
        );
        assert_eq!(
            out[1],
            Shape::Rect {
                min: Vec2::new(95.0, 192.0),
                max: Vec2::new(105.0, 208.0),
                fill: NOZZLE_FILL,
                stroke: Some(NOZZLE_OUTLINE),
            }
        );
        // Fresh droplets have life 1 and size >= 3, so all are visible.
        assert_eq!(out.len(), 2 + 2 * 70);
    }

    #[test]
    fn faded_droplets_are_skipped() {
        let cfg = Config::default();
        let mut rng = StdRng::seed_from_u64(8);
        let mut f = Fountain::new(Vec2::new(100.0, 200.0), 70, 10.0, &cfg, &mut rng);

        // Run until at least one droplet has faded below a one pixel radius.
        let mut ticks = 0;
        while f.particles().iter().all(|p| p.radius().is_some()) && ticks < 10_000 {
            f.update(&cfg, &mut rng);
            ticks += 1;
        }
        let visible = f.particles().iter().filter(|p| p.radius().is_some()).count();

        let mut out = Vec::new();
        push_fountain(&mut out, &f);

        assert!(visible < 70);
        assert_eq!(out.len(), 2 + 2 * visible);
    }

    #[test]
    fn droplet_is_followed_by_its_highlight() {
        let mut rng = StdRng::seed_from_u64(8);
        let f = Fountain::new(Vec2::new(100.0, 200.0), 70, 10.0, &Config::default(), &mut rng);

        let mut out = Vec::new();
        push_fountain(&mut out, &f);

        let p = &f.particles()[0];
        let (hl_center, hl_radius) = p.highlight().unwrap();
        assert_eq!(
            out[2],
            Shape::Circle {
                center: p.pos,
                radius: p.size,
                fill: p.color,
            }
        );
        assert_eq!(
            out[3],
            Shape::Circle {
                center: hl_center,
                radius: hl_radius,
                fill: HIGHLIGHT,
            }
        );
    }
}
