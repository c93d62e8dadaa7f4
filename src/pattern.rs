//! Seed patterns for a new board.

use crate::{Coord, Error, Result};
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

/// The five cells of a glider heading toward +x/+y
pub const GLIDER: [Coord; 5] = [
    Coord::new(0, 1),
    Coord::new(1, 2),
    Coord::new(2, 0),
    Coord::new(2, 1),
    Coord::new(2, 2),
];
pub const BLINKER: [Coord; 3] = [Coord::new(0, 1), Coord::new(1, 1), Coord::new(2, 1)];
pub const BLOCK: [Coord; 4] = [
    Coord::new(0, 0),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(1, 1),
];

/// Where the initial live cells come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    Glider,
    Blinker,
    Block,
    Random,
    Alternating,
    Empty,
}
impl Seed {
    pub fn parse<S: AsRef<str>>(s: S) -> Result<Self> {
        match s.as_ref() {
            "glider" => Ok(Self::Glider),
            "blinker" => Ok(Self::Blinker),
            "block" => Ok(Self::Block),
            "random" => Ok(Self::Random),
            "alternating" => Ok(Self::Alternating),
            "empty" => Ok(Self::Empty),
            other => Err(Error::UnknownPattern(other.to_owned())),
        }
    }

    /// Produces the live cells, using `w x h` as the area for fills
    pub fn create_alive(self, w: i64, h: i64) -> Vec<Coord> {
        match self {
            Self::Glider => GLIDER.to_vec(),
            Self::Blinker => BLINKER.to_vec(),
            Self::Block => BLOCK.to_vec(),
            Self::Random => {
                let mut rng = rand::rng();
                fill(w, h, |_| rng.random_bool(0.5))
            }
            Self::Alternating => fill(w, h, |cell| (cell.x + cell.y) % 2 == 0),
            Self::Empty => Vec::new(),
        }
    }
}

fn fill<F: FnMut(Coord) -> bool>(w: i64, h: i64, mut is_alive: F) -> Vec<Coord> {
    let mut alive = Vec::new();
    for y in 0..h {
        for x in 0..w {
            let cell = Coord { x, y };
            if is_alive(cell) {
                alive.push(cell);
            }
        }
    }
    alive
}

/// Moves every cell by `offset`
pub fn translate(cells: &[Coord], offset: Coord) -> Vec<Coord> {
    cells.iter().map(|&cell| cell + offset).collect()
}

fn rle_token() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d*)([bo$!])").expect("static regex is valid"))
}

/// Longest single run accepted by [`decode_rle`]
pub const MAX_RUN: i64 = 1 << 20;

/// Decodes a pattern in the run-length encoded format used by Life tools
///
/// `#` comment lines and the `x = .., y = ..` header are skipped. Cells are
/// placed with the pattern's top-left corner at the origin.
pub fn decode_rle(value: &str) -> Result<Vec<Coord>> {
    let mut alive = Vec::new();
    let mut cursor = Coord::zero();
    'lines_loop: for (i, line) in value.lines().enumerate() {
        let line = line.trim();
        if line.starts_with('#') || line.starts_with('x') || line.is_empty() {
            continue;
        }
        let bad = |message: String| Error::Pattern {
            line: i + 1,
            message,
        };

        // anything besides tokens and whitespace is malformed
        let stray = rle_token().replace_all(line, "");
        if let Some(c) = stray.chars().find(|c| !c.is_whitespace()) {
            return Err(bad(format!("unexpected character {c:?}")));
        }

        for (_, [run_str, state]) in rle_token().captures_iter(line).map(|c| c.extract()) {
            let run = match run_str {
                "" => 1,
                digits => digits
                    .parse::<i64>()
                    .map_err(|e| bad(format!("bad run length {digits:?}: {e}")))?,
            };
            if run > MAX_RUN {
                return Err(bad(format!("run length {run} exceeds {MAX_RUN}")));
            }
            let advance = |from: i64| {
                from.checked_add(run)
                    .ok_or_else(|| bad(format!("run of {run} leaves the plane")))
            };

            match state {
                "!" => break 'lines_loop,
                "o" => {
                    let end = advance(cursor.x)?;
                    alive.extend((cursor.x..end).map(|x| Coord { x, y: cursor.y }));
                    cursor.x = end;
                }
                "b" => cursor.x = advance(cursor.x)?,
                "$" => {
                    cursor.x = 0;
                    cursor.y = advance(cursor.y)?;
                }
                _ => unreachable!("regex only matches b, o, $ and !"),
            }
        }
    }

    Ok(alive)
}
