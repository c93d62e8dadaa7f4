//! Mapping live cells to screen rectangles, and the colors they are drawn in.

use crate::Coord;
use rand::seq::IndexedRandom;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const GREEN: Rgb = Rgb(0, 204, 0);
pub const PURPLE: Rgb = Rgb(127, 0, 255);
pub const CYAN: Rgb = Rgb(0, 255, 255);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const HOT_PINK: Rgb = Rgb(255, 0, 127);

/// Background (dead) and foreground (alive) colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub dead: Rgb,
    pub alive: Rgb,
}
impl ColorScheme {
    pub const fn new(dead: Rgb, alive: Rgb) -> Self {
        Self { dead, alive }
    }

    /// Any scheme from [`SCHEMES`]
    pub fn random() -> Self {
        SCHEMES
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or_default()
    }
}
impl Default for ColorScheme {
    fn default() -> Self {
        SCHEMES[0]
    }
}

pub const SCHEMES: [ColorScheme; 7] = [
    ColorScheme::new(BLACK, HOT_PINK),
    ColorScheme::new(BLUE, YELLOW),
    ColorScheme::new(WHITE, BLACK),
    ColorScheme::new(PURPLE, CYAN),
    ColorScheme::new(YELLOW, HOT_PINK),
    ColorScheme::new(GREEN, BLUE),
    ColorScheme::new(RED, GREEN),
];

pub const PAUSE_BACKGROUND: Rgb = BLACK;
pub const PAUSE_BARS: Rgb = WHITE;

/// An on-screen rectangle, in surface units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// The rectangle a live cell occupies on a `surface` of `(width, height)`
///
/// The cell at `origin` is drawn at the top-left corner and every cell is
/// `scale x scale`. Cells entirely off the surface yield [`None`]; cells
/// overlapping the right or bottom edge are clipped.
pub fn cell_rect(cell: Coord, scale: u16, origin: Coord, surface: (u16, u16)) -> Option<Rect> {
    let scale = scale.max(1);
    let rel = cell - origin;
    let left = rel.x.checked_mul(i64::from(scale))?;
    let top = rel.y.checked_mul(i64::from(scale))?;
    let (surface_w, surface_h) = (i64::from(surface.0), i64::from(surface.1));
    if !(0..surface_w).contains(&left) || !(0..surface_h).contains(&top) {
        return None;
    }

    let (x, y) = (left as u16, top as u16);
    Some(Rect {
        x,
        y,
        width: scale.min(surface.0 - x),
        height: scale.min(surface.1 - y),
    })
}

/// How many cells fit across a `surface`, counting partially visible ones
pub fn visible_cells(surface: (u16, u16), scale: u16) -> Coord {
    let scale = i64::from(scale.max(1));
    Coord {
        x: (i64::from(surface.0) + scale - 1) / scale,
        y: (i64::from(surface.1) + scale - 1) / scale,
    }
}

/// The paused indicator: a 5x5 cell square in the top-right corner with two
/// vertical bars
pub fn pause_icon(surface: (u16, u16), scale: u16) -> Vec<(Rect, Rgb)> {
    let scale = scale.max(1);
    let columns = surface.0 / scale;
    if columns < 5 {
        return Vec::new();
    }

    let mut background = Vec::with_capacity(25);
    let mut bars = Vec::with_capacity(6);
    for col in columns - 5..columns {
        for row in 0..5u16 {
            let rect = Rect {
                x: col * scale,
                y: row * scale,
                width: scale,
                height: scale,
            };
            if rect.y >= surface.1 {
                continue;
            }
            let rect = Rect {
                height: scale.min(surface.1 - rect.y),
                ..rect
            };
            background.push((rect, PAUSE_BACKGROUND));
            if (1..=3).contains(&row) && (columns - col) % 2 == 0 {
                bars.push((rect, PAUSE_BARS));
            }
        }
    }
    background.extend(bars);
    background
}
