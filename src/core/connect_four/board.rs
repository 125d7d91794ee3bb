//! Connect Four board - grid, gravity placement and win/draw detection.
//!
//! The board is pure state with no I/O. Row 0 is the top row, so a disc dropped into
//! a column lands on the highest free row index.

/// Number of rows on the board
pub const ROWS: usize = 6;
/// Number of columns on the board
pub const COLUMNS: usize = 7;
/// Discs in a line needed to win
pub const WIN_LENGTH: usize = 4;

/// Glyph for an empty cell (black circle)
pub const EMPTY_GLYPH: &str = "\u{26ab}";

/// Keycap glyphs 1-7, used as the legend under the board and as button labels.
pub const COLUMN_GLYPHS: [&str; COLUMNS] = [
    "1\u{fe0f}\u{20e3}",
    "2\u{fe0f}\u{20e3}",
    "3\u{fe0f}\u{20e3}",
    "4\u{fe0f}\u{20e3}",
    "5\u{fe0f}\u{20e3}",
    "6\u{fe0f}\u{20e3}",
    "7\u{fe0f}\u{20e3}",
];

// (row step, column step): horizontal, vertical, down-right, down-left
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A player's marker on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disc {
    /// Player one
    Red,
    /// Player two
    Yellow,
}

impl Disc {
    /// Circle glyph used when rendering this disc.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Red => "\u{1f534}",
            Self::Yellow => "\u{1f7e1}",
        }
    }
}

/// A 6x7 Connect Four grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Disc>; COLUMNS]; ROWS],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops `disc` into `column` and returns the row it landed on.
    ///
    /// Returns `None` without touching the board when the column is full or does not
    /// exist.
    pub fn place(&mut self, column: usize, disc: Disc) -> Option<usize> {
        if column >= COLUMNS {
            return None;
        }

        let row = (0..ROWS).rev().find(|&row| self.cells[row][column].is_none())?;
        self.cells[row][column] = Some(disc);
        Some(row)
    }

    /// Disc at the given cell, `None` for empty or out-of-range cells.
    #[must_use]
    pub fn get(&self, row: usize, column: usize) -> Option<Disc> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    /// True when the column cannot take another disc (out-of-range columns count as full).
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.cells[0].get(column).is_none_or(Option::is_some)
    }

    /// True when the top row is occupied, which under gravity means every cell is.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells[0].iter().all(Option::is_some)
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// True when `disc` has four in a row horizontally, vertically or diagonally.
    #[must_use]
    pub fn is_win(&self, disc: Disc) -> bool {
        DIRECTIONS.iter().any(|&(row_step, column_step)| {
            (0..ROWS).any(|row| {
                (0..COLUMNS).any(|column| self.line_from(row, column, row_step, column_step, disc))
            })
        })
    }

    fn line_from(
        &self,
        row: usize,
        column: usize,
        row_step: isize,
        column_step: isize,
        disc: Disc,
    ) -> bool {
        (0..WIN_LENGTH).all(|offset| {
            #[allow(clippy::cast_possible_wrap)] // board dimensions are tiny
            let (row, column, offset) = (row as isize, column as isize, offset as isize);
            self.cell_at(row + row_step * offset, column + column_step * offset) == Some(disc)
        })
    }

    fn cell_at(&self, row: isize, column: isize) -> Option<Disc> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        self.get(row, column)
    }

    /// Renders the grid row by row followed by the column legend.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for row in &self.cells {
            for cell in row {
                out.push_str(cell.map_or(EMPTY_GLYPH, Disc::glyph));
            }
            out.push('\n');
        }
        out.push_str(&COLUMN_GLYPHS.concat());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize, Disc)]) -> Board {
        let mut board = Board::new();
        for &(row, column, disc) in cells {
            board.cells[row][column] = Some(disc);
        }
        board
    }

    #[test]
    fn test_place_drops_to_lowest_row() {
        let mut board = Board::new();
        assert_eq!(board.place(3, Disc::Red), Some(5));
        assert_eq!(board.place(3, Disc::Yellow), Some(4));
        assert_eq!(board.place(0, Disc::Yellow), Some(5));
        assert_eq!(board.get(5, 3), Some(Disc::Red));
        assert_eq!(board.get(4, 3), Some(Disc::Yellow));
        assert_eq!(board.get(3, 3), None);
    }

    #[test]
    fn test_place_on_full_column_is_noop() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            assert!(board.place(6, Disc::Red).is_some());
        }
        let before = board.clone();

        assert_eq!(board.place(6, Disc::Yellow), None);
        assert_eq!(board, before);
        assert!(board.is_column_full(6));
        assert!(!board.is_column_full(5));
    }

    #[test]
    fn test_place_out_of_range_column() {
        let mut board = Board::new();
        assert_eq!(board.place(COLUMNS, Disc::Red), None);
        assert_eq!(board.occupied(), 0);
        assert!(board.is_column_full(COLUMNS));
    }

    #[test]
    fn test_is_full_only_when_every_cell_taken() {
        let mut board = Board::new();
        // Fill column by column with alternating discs so nobody gets four vertically.
        let mut placed = 0;
        for column in 0..COLUMNS {
            for row in 0..ROWS {
                assert!(!board.is_full());
                let disc = if (row / 2 + column) % 2 == 0 {
                    Disc::Red
                } else {
                    Disc::Yellow
                };
                board.place(column, disc);
                placed += 1;
            }
        }
        assert_eq!(placed, ROWS * COLUMNS);
        assert_eq!(board.occupied(), 42);
        assert!(board.is_full());

        let before = board.clone();
        for column in 0..COLUMNS {
            assert_eq!(board.place(column, Disc::Red), None);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn test_vertical_win_after_four_drops() {
        let mut board = Board::new();
        for drop in 0..4 {
            assert!(!board.is_win(Disc::Red), "no win after {drop} drops");
            board.place(3, Disc::Red);
        }
        assert!(board.is_win(Disc::Red));
        assert!(!board.is_win(Disc::Yellow));
    }

    #[test]
    fn test_horizontal_win() {
        let board = board_with(&[
            (5, 2, Disc::Yellow),
            (5, 3, Disc::Yellow),
            (5, 4, Disc::Yellow),
            (5, 5, Disc::Yellow),
        ]);
        assert!(board.is_win(Disc::Yellow));
        assert!(!board.is_win(Disc::Red));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_with(&[
            (2, 0, Disc::Red),
            (3, 1, Disc::Red),
            (4, 2, Disc::Red),
            (5, 3, Disc::Red),
        ]);
        assert!(board.is_win(Disc::Red));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let board = board_with(&[
            (0, 6, Disc::Yellow),
            (1, 5, Disc::Yellow),
            (2, 4, Disc::Yellow),
            (3, 3, Disc::Yellow),
        ]);
        assert!(board.is_win(Disc::Yellow));
    }

    #[test]
    fn test_no_win_for_three_or_broken_lines() {
        let board = board_with(&[
            (5, 0, Disc::Red),
            (5, 1, Disc::Red),
            (5, 2, Disc::Red),
            (5, 3, Disc::Yellow),
            (5, 4, Disc::Red),
            (4, 0, Disc::Red),
            (3, 0, Disc::Red),
            (4, 1, Disc::Yellow),
            (3, 2, Disc::Red),
        ]);
        assert!(!board.is_win(Disc::Red));
        assert!(!board.is_win(Disc::Yellow));
    }

    #[test]
    fn test_lines_do_not_wrap_around_edges() {
        // Three at the right edge of row 5 and one at the left edge of row 4.
        let board = board_with(&[
            (5, 4, Disc::Red),
            (5, 5, Disc::Red),
            (5, 6, Disc::Red),
            (4, 0, Disc::Red),
        ]);
        assert!(!board.is_win(Disc::Red));
    }

    #[test]
    fn test_render_layout() {
        let mut board = Board::new();
        board.place(0, Disc::Red);
        board.place(1, Disc::Yellow);

        let rendered = board.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), ROWS + 1);
        assert_eq!(lines[0], EMPTY_GLYPH.repeat(COLUMNS));
        assert_eq!(
            lines[5],
            format!("{}{}{}", Disc::Red.glyph(), Disc::Yellow.glyph(), EMPTY_GLYPH.repeat(5))
        );
        assert_eq!(lines[6], COLUMN_GLYPHS.concat());
    }
}
