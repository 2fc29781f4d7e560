use serde::{Deserialize, Serialize};
use std::fmt;

pub const BOARD_SIZE: usize = 9;
pub const DEFAULT_NAME_X: &str = "Player X";
pub const DEFAULT_NAME_O: &str = "Player O";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mark::X => "X",
            Mark::O => "O",
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The 3x3 grid, stored row-major: indices 0..=2 are the top row,
/// 3..=5 the middle row and 6..=8 the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the mark at `index`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells.get(index).copied().flatten()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Mark> {
        if row >= 3 || col >= 3 {
            return None;
        }
        self.get(row * 3 + col)
    }

    pub fn is_empty(&self, index: usize) -> bool {
        index < BOARD_SIZE && self.cells[index].is_none()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    pub fn cells(&self) -> &[Option<Mark>; BOARD_SIZE] {
        &self.cells
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| index)
    }

    /// Returns the first line in scan order held entirely by one mark.
    pub fn winning_line(&self) -> Option<(Mark, WinningLine)> {
        WINNING_LINES.iter().find_map(|line| {
            let [a, b, c] = line.cells();
            match self.get(a) {
                Some(mark) if self.get(b) == Some(mark) && self.get(c) == Some(mark) => {
                    Some((mark, *line))
                }
                _ => None,
            }
        })
    }

    pub(crate) fn set(&mut self, index: usize, mark: Mark) {
        self.cells[index] = Some(mark);
    }

    pub(crate) fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    pub const fn cells(&self) -> [usize; 3] {
        self.0
    }

    pub const fn start(&self) -> usize {
        self.0[0]
    }

    pub const fn end(&self) -> usize {
        self.0[2]
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    pub fn orientation(&self) -> Orientation {
        let [a, b, _] = self.0;
        match b - a {
            1 => Orientation::Horizontal,
            3 => Orientation::Vertical,
            4 => Orientation::Diagonal,
            _ => Orientation::AntiDiagonal,
        }
    }
}

/// Rows, then columns, then the two diagonals. A move that completes more
/// than one line reports whichever comes first here.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub mark: Mark,
    pub name: String,
    pub score: u32,
}

impl Player {
    pub fn new(mark: Mark, name: &str) -> Self {
        Player {
            mark,
            name: Self::resolve_name(name, mark),
            score: 0,
        }
    }

    /// Trims the submitted name and falls back to the mark's default when
    /// nothing is left.
    pub fn resolve_name(input: &str, mark: Mark) -> String {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            Self::default_name(mark).to_string()
        } else {
            trimmed.to_string()
        }
    }

    pub fn default_name(mark: Mark) -> &'static str {
        match mark {
            Mark::X => DEFAULT_NAME_X,
            Mark::O => DEFAULT_NAME_O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundOutcome {
    InProgress,
    Won { mark: Mark, line: WinningLine },
    Draw,
}

impl RoundOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::InProgress)
    }
}
