use crate::Coord;
use std::collections::HashSet;

/// The eight deltas from a cell to its Moore neighborhood
pub const NEIGHBOR_OFFSETS: [Coord; 8] = [
    Coord::new(-1, -1),
    Coord::new(-1, 0),
    Coord::new(-1, 1),
    Coord::new(0, -1),
    Coord::new(0, 1),
    Coord::new(1, -1),
    Coord::new(1, 0),
    Coord::new(1, 1),
];

/// Iterates the eight neighbors of `coord`
#[inline]
pub fn neighbors(coord: Coord) -> impl Iterator<Item = Coord> {
    NEIGHBOR_OFFSETS.into_iter().map(move |offset| coord + offset)
}

/// Counts how many of the eight cells around `coord` are in `live`
///
/// The result is always in `0..=8`. `live` must be the frozen generation the
/// count is taken against, never a set that is still being built.
#[inline]
pub fn live_neighbor_count(live: &HashSet<Coord>, coord: Coord) -> u8 {
    neighbors(coord).filter(|n| live.contains(n)).count() as u8
}

/// Standard Life (B3/S23): whether a cell is alive in the next generation
#[inline]
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2) | (_, 3))
}
