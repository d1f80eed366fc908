//! Fixed colors used by the simulation and the draw list.

/// An opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }
}

/// Droplet colors; every reset picks one uniformly.
pub const OIL_PALETTE: [Rgb; 6] = [
    Rgb::from_hex(0x1a1a1f),
    Rgb::from_hex(0x252530),
    Rgb::from_hex(0x202028),
    Rgb::from_hex(0x151518),
    Rgb::from_hex(0x2a251f),
    Rgb::from_hex(0x302a24),
];

pub const HIGHLIGHT: Rgb = Rgb::from_hex(0x4a4a50);

pub const BASE_FILL: Rgb = Rgb::from_hex(0x1e1e23);
pub const BASE_OUTLINE: Rgb = Rgb::from_hex(0x2a2a30);

pub const NOZZLE_FILL: Rgb = Rgb::from_hex(0x2a2a30);
pub const NOZZLE_OUTLINE: Rgb = Rgb::from_hex(0x3a3a40);
