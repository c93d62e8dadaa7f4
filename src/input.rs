//! Screen position to board coordinate mapping.

use crate::Coord;

/// Maps a pointer position on the surface to the cell drawn under it
///
/// Each axis is floor-divided by `scale`, then shifted by the viewport
/// `origin` (the board cell drawn at the surface's top-left corner). A zero
/// scale is treated as one.
#[inline]
pub fn pixel_to_coord(pixel: (u16, u16), scale: u16, origin: Coord) -> Coord {
    let scale = i64::from(scale.max(1));
    let (col, row) = pixel;
    origin
        + Coord {
            x: i64::from(col).div_euclid(scale),
            y: i64::from(row).div_euclid(scale),
        }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_each_axis_by_scale() {
        assert_eq!(pixel_to_coord((0, 0), 4, Coord::zero()), Coord::new(0, 0));
        assert_eq!(pixel_to_coord((3, 3), 4, Coord::zero()), Coord::new(0, 0));
        assert_eq!(pixel_to_coord((4, 11), 4, Coord::zero()), Coord::new(1, 2));
    }

    #[test]
    fn shifts_by_origin() {
        let origin = Coord::new(-50, 7);

        assert_eq!(pixel_to_coord((10, 1), 2, origin), Coord::new(-45, 7));
    }

    #[test]
    fn zero_scale_is_unit() {
        assert_eq!(pixel_to_coord((9, 2), 0, Coord::zero()), Coord::new(9, 2));
    }
}
