use std::{
    cmp::Ordering,
    ops::{Add, Neg, Sub},
};

/// A cell on the unbounded plane.
///
/// Arithmetic wraps at the `i64` limits, so every coordinate has eight
/// neighbors and offsetting never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}
impl Coord {
    #[inline]
    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }
    #[inline]
    pub const fn one() -> Self {
        Self { x: 1, y: 1 }
    }

    /// Chebyshev (king-move) distance between two coordinates
    #[inline]
    pub fn chebyshev(self, other: Self) -> u64 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        dx.max(dy)
    }
}
impl Default for Coord {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}
impl From<(i64, i64)> for Coord {
    #[inline]
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}
impl PartialOrd for Coord {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl Ord for Coord {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        // row-major: y first, then x within the row
        Ord::cmp(&self.y, &other.y).then(Ord::cmp(&self.x, &other.x))
    }
}
impl Neg for Coord {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self {
            x: self.x.wrapping_neg(),
            y: self.y.wrapping_neg(),
        }
    }
}
impl Add for Coord {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.wrapping_add(rhs.x),
            y: self.y.wrapping_add(rhs.y),
        }
    }
}
impl Sub for Coord {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x.wrapping_sub(rhs.x),
            y: self.y.wrapping_sub(rhs.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn orders_row_major() {
        let mut cells = vec![Coord::new(5, 1), Coord::new(0, 2), Coord::new(-3, 1)];
        cells.sort();

        assert_eq!(
            cells,
            vec![Coord::new(-3, 1), Coord::new(5, 1), Coord::new(0, 2)]
        );
    }

    #[test]
    fn offsets_wrap_at_limits() {
        let edge = Coord::new(i64::MAX, i64::MIN);

        assert_eq!(edge + Coord::one(), Coord::new(i64::MIN, i64::MIN + 1));
        assert_eq!(edge - Coord::one() + Coord::one(), edge);
    }

    #[test]
    fn chebyshev_is_king_distance() {
        assert_eq!(Coord::new(0, 0).chebyshev(Coord::new(3, -1)), 3);
        assert_eq!(Coord::new(2, 2).chebyshev(Coord::new(2, 2)), 0);
    }
}
