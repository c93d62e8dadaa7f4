use super::LifeBoard;
use crate::Coord;
use std::fmt::Write as _;

/// A finite rectangle `[top_left, bottom_right)` looking onto a board
pub struct Viewport<'a> {
    tl: Coord,
    br: Coord,
    board: &'a LifeBoard,
}
impl<'a> Viewport<'a> {
    pub fn new(board: &'a LifeBoard, top_left: Coord, bottom_right: Coord) -> Self {
        Self {
            tl: top_left,
            br: bottom_right,
            board,
        }
    }

    #[inline]
    pub fn contains(&self, cell: Coord) -> bool {
        (self.tl.x..self.br.x).contains(&cell.x) && (self.tl.y..self.br.y).contains(&cell.y)
    }

    /// Live cells inside the rectangle, unordered
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.board
            .live_cells()
            .iter()
            .filter(move |&cell| self.contains(cell))
    }

    /// Live cells inside the rectangle in row-major order
    pub fn sorted(&self) -> Vec<Coord> {
        let mut cells: Vec<Coord> = self.iter().collect();
        cells.sort_unstable();
        cells
    }
}

/// One text row per board row, `█` for live cells; trailing blanks and rows
/// after the last live cell are omitted
impl std::fmt::Display for Viewport<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.sorted();
        let Some(last_row) = cells.last().map(|cell| cell.y) else {
            return Ok(());
        };

        let mut rows = cells.chunk_by(|a, b| a.y == b.y).peekable();
        for y in self.tl.y..=last_row {
            if y != self.tl.y {
                f.write_char('\n')?;
            }
            let Some(row) = rows.next_if(|row| row[0].y == y) else {
                continue;
            };
            let mut col = self.tl.x;
            for cell in row {
                write!(f, "{:gap$}█", "", gap = (cell.x - col) as usize)?;
                col = cell.x + 1;
            }
        }
        Ok(())
    }
}
