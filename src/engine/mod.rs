mod rule;
mod view;

pub use self::rule::{NEIGHBOR_OFFSETS, live_neighbor_count, neighbors, next_state};
pub use self::view::Viewport;
use crate::Coord;
use rayon::prelude::*;
use std::collections::{HashSet, hash_set};

/// What one call to [`LifeBoard::step`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    /// Number of distinct cells whose next state was evaluated
    pub examined: usize,
    /// Live cells in the new generation
    pub population: usize,
}

/// A sparse Game of Life board on the unbounded plane
///
/// Only live cells are stored; every coordinate not in the set is dead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LifeBoard {
    live: HashSet<Coord>,
}

impl LifeBoard {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells<I: IntoIterator<Item = Coord>>(cells: I) -> Self {
        Self {
            live: cells.into_iter().collect(),
        }
    }

    /// Advances the board by one generation
    ///
    /// Only the candidate frontier is visited: the live cells and their
    /// neighbors. The next generation is built into a fresh set while the
    /// current one stays frozen, then swapped in.
    pub fn step(&mut self) -> StepReport {
        let candidates = self.candidates();
        let next: HashSet<Coord> = candidates
            .iter()
            .copied()
            .filter(|&cell| Self::lives_on(&self.live, cell))
            .collect();

        self.replace(next, candidates.len())
    }

    /// Same transition as [`LifeBoard::step`], with the frontier evaluated
    /// on the rayon thread pool
    pub fn step_parallel(&mut self) -> StepReport {
        if self.live.is_empty() {
            return StepReport::default();
        }

        let candidates = self.candidates();
        let live = &self.live;
        let next: HashSet<Coord> = candidates
            .par_iter()
            .copied()
            .filter(|&cell| Self::lives_on(live, cell))
            .collect();

        self.replace(next, candidates.len())
    }

    /// Flips the liveness of a single cell
    ///
    /// Returns whether the cell is alive afterwards.
    pub fn toggle(&mut self, coord: Coord) -> bool {
        if self.live.remove(&coord) {
            false
        } else {
            self.live.insert(coord);
            true
        }
    }

    #[inline]
    pub fn clear(&mut self) {
        self.live.clear();
    }

    #[inline]
    pub fn is_alive(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    /// A read-only view of the current generation
    #[inline]
    pub fn live_cells(&self) -> LiveCells<'_> {
        LiveCells { live: &self.live }
    }

    #[inline]
    pub fn population(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Every cell that could change state on the next step
    pub fn candidates(&self) -> HashSet<Coord> {
        let mut candidates = HashSet::with_capacity(self.live.len() * 9);
        for &cell in &self.live {
            candidates.insert(cell);
            candidates.extend(neighbors(cell));
        }
        candidates
    }

    pub fn window(&self, top_left: Coord, bottom_right: Coord) -> Viewport<'_> {
        Viewport::new(self, top_left, bottom_right)
    }

    #[inline]
    fn lives_on(live: &HashSet<Coord>, cell: Coord) -> bool {
        next_state(live.contains(&cell), live_neighbor_count(live, cell))
    }

    fn replace(&mut self, next: HashSet<Coord>, examined: usize) -> StepReport {
        self.live = next;
        StepReport {
            examined,
            population: self.live.len(),
        }
    }
}

impl FromIterator<Coord> for LifeBoard {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self::from_cells(iter)
    }
}

/// Borrowed snapshot of a board's live cells
///
/// Unordered and restartable: iterating it any number of times never touches
/// the board.
#[derive(Debug, Clone, Copy)]
pub struct LiveCells<'a> {
    live: &'a HashSet<Coord>,
}

impl<'a> LiveCells<'a> {
    #[inline]
    pub fn iter(self) -> impl Iterator<Item = Coord> + 'a {
        self.live.iter().copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        self.live.contains(&coord)
    }

    /// Smallest and largest corner of the box holding every live cell
    pub fn bounds(self) -> Option<(Coord, Coord)> {
        self.iter().fold(None, |acc, cell| match acc {
            None => Some((cell, cell)),
            Some((lo, hi)) => Some((
                Coord::new(lo.x.min(cell.x), lo.y.min(cell.y)),
                Coord::new(hi.x.max(cell.x), hi.y.max(cell.y)),
            )),
        })
    }

    /// The cells in row-major order
    pub fn sorted(self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter().collect();
        cells.sort_unstable();
        cells
    }
}

impl<'a> IntoIterator for LiveCells<'a> {
    type Item = Coord;
    type IntoIter = std::iter::Copied<hash_set::Iter<'a, Coord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.live.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &[(i64, i64)]) -> LifeBoard {
        cells.iter().copied().map(Coord::from).collect()
    }

    fn sorted(cells: &[(i64, i64)]) -> Vec<Coord> {
        let mut cells: Vec<Coord> = cells.iter().copied().map(Coord::from).collect();
        cells.sort();
        cells
    }

    const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

    #[test]
    fn block_is_still_life() {
        let block = [(0, 0), (1, 0), (0, 1), (1, 1)];
        let mut game = board(&block);

        for _ in 0..10 {
            game.step();
            assert_eq!(game.live_cells().sorted(), sorted(&block));
        }
    }

    #[test]
    fn blinker_has_period_two() {
        let blinker = [(0, 1), (1, 1), (2, 1)];
        let mut game = board(&blinker);

        game.step();
        assert_eq!(game.live_cells().sorted(), sorted(&[(1, 0), (1, 1), (1, 2)]));

        game.step();
        assert_eq!(game.live_cells().sorted(), sorted(&blinker));
    }

    #[test]
    fn glider_translates_after_four_steps() {
        let mut game = board(&GLIDER);
        for _ in 0..4 {
            game.step();
        }

        let moved: Vec<(i64, i64)> = GLIDER.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
        assert_eq!(game.live_cells().sorted(), sorted(&moved));
    }

    #[test]
    fn glider_travels_far_from_origin() {
        let far = Coord::new(1 << 40, -(1 << 40));
        let mut game: LifeBoard = GLIDER.iter().map(|&c| Coord::from(c) + far).collect();
        for _ in 0..40 {
            game.step();
        }

        let mut expected: Vec<Coord> = GLIDER
            .iter()
            .map(|&c| Coord::from(c) + far + Coord::new(10, 10))
            .collect();
        expected.sort();
        assert_eq!(game.live_cells().sorted(), expected);
    }

    #[test]
    fn toggle_is_an_involution() {
        let original = board(&GLIDER);
        let mut game = original.clone();

        for coord in [Coord::new(0, 1), Coord::new(7, -3), Coord::new(i64::MIN, 0)] {
            game.toggle(coord);
            game.toggle(coord);
            assert_eq!(game, original);
        }
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut game = LifeBoard::new();
        let far = Coord::new(-1_000_000_000_000, 42);

        assert!(game.toggle(far));
        assert!(game.is_alive(far));
        assert!(!game.toggle(far));
        assert!(!game.is_alive(far));
    }

    #[test]
    fn empty_board_is_fixed_point() {
        let mut game = LifeBoard::new();
        let report = game.step();

        assert!(game.is_empty());
        assert_eq!(report, StepReport::default());
    }

    #[test]
    fn births_stay_near_previous_life() {
        let scattered = [(0, 0), (1, 0), (2, 0), (40, 40), (41, 41), (40, 41), (-9, 3)];
        let mut game = board(&scattered);
        let before: Vec<Coord> = game.live_cells().iter().collect();

        game.step();
        for cell in game.live_cells() {
            assert!(
                before.iter().any(|&prev| prev.chebyshev(cell) <= 1),
                "{cell:?} appeared away from previous life"
            );
        }
    }

    #[test]
    fn examined_cells_are_bounded_by_population() {
        let scattered = [(0, 0), (5, 5), (5, 6), (6, 5), (100, -100)];
        let mut game = board(&scattered);
        let population = game.population();

        let report = game.step();
        assert!(report.examined <= 9 * population);
        // isolated cells contribute the full nine-cell neighborhood
        assert!(report.examined > 9 * 2);
        assert_eq!(report.population, game.population());
    }

    #[test]
    fn clear_empties_board() {
        let mut game = board(&GLIDER);
        game.clear();

        assert!(game.is_empty());
        assert_eq!(game.live_cells().iter().count(), 0);
    }

    #[test]
    fn live_cells_is_restartable() {
        let game = board(&GLIDER);
        let cells = game.live_cells();

        let first: Vec<Coord> = cells.iter().collect();
        let second: Vec<Coord> = cells.into_iter().collect();
        assert_eq!(first.len(), 5);
        assert_eq!(first, second);
        assert!(cells.contains(Coord::new(2, 2)));
    }

    #[test]
    fn bounds_cover_live_cells() {
        let game = board(&[(3, -2), (-1, 5), (0, 0)]);

        assert_eq!(
            game.live_cells().bounds(),
            Some((Coord::new(-1, -2), Coord::new(3, 5)))
        );
        assert_eq!(LifeBoard::new().live_cells().bounds(), None);
    }

    #[test]
    fn parallel_step_matches_serial() {
        let mut alive = Vec::new();
        for y in 0..32 {
            for x in 0..32 {
                if (x * 7 + y * 13) % 5 < 2 {
                    alive.push(Coord::new(x, y));
                }
            }
        }
        let mut serial = LifeBoard::from_cells(alive.clone());
        let mut parallel = LifeBoard::from_cells(alive);

        for _ in 0..8 {
            let a = serial.step();
            let b = parallel.step_parallel();
            assert_eq!(a, b);
            assert_eq!(serial, parallel);
        }
    }
}
