use crate::Grid;
use std::fmt;

/// Immutable rectangular seed for a field.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Pattern {
    cells: Grid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "pattern row {row} has {found} cells, expected {expected} like the first row"
            ),
        }
    }
}

impl std::error::Error for PatternError {}

impl Pattern {
    /// Builds a pattern from rows of equal length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self, PatternError> {
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, r) in rows.iter().enumerate() {
            let found = r.as_ref().len();
            if found != width {
                return Err(PatternError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
        }
        let cells = Grid::from_fn(width, rows.len(), |x, y| rows[y].as_ref()[x]);
        Ok(Self { cells })
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.cells.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.cells.width()
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells.get(x, y)
    }

    pub fn population(&self) -> usize {
        crate::count(&self.cells)
    }

    /// Copies the pattern onto a fresh dead `n x n` field, centred.
    ///
    /// Offsets are `floor((n - size) / 2)` on each axis; cells landing outside
    /// the field are dropped, so oversized patterns get clipped.
    pub fn stamp(&self, n: usize) -> Grid {
        let mut grid = Grid::square(n);
        let off_y = (n as i64 - self.height() as i64).div_euclid(2);
        let off_x = (n as i64 - self.width() as i64).div_euclid(2);
        for y in 0..self.height() {
            for x in 0..self.width() {
                if let Some(i) = grid.index_of(off_x + x as i64, off_y + y as i64) {
                    *grid.cell_mut(i) = self.get(x, y);
                }
            }
        }
        grid
    }
}

/// Named pattern shipped with the application.
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    /// `O` marks a live cell, anything else a dead one.
    rows: &'static [&'static str],
}

impl Preset {
    pub fn pattern(&self) -> Pattern {
        let width = self.rows.first().map_or(0, |r| r.len());
        let cells = Grid::from_fn(width, self.rows.len(), |x, y| {
            self.rows[y].as_bytes().get(x) == Some(&b'O')
        });
        Pattern { cells }
    }
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Glider",
        description: "A pattern that travels diagonally across the grid",
        rows: &[
            ".O.", //
            "..O",
            "OOO",
        ],
    },
    Preset {
        name: "Blinker",
        description: "A simple oscillator that alternates between two states",
        rows: &[
            "...", //
            "OOO",
            "...",
        ],
    },
    Preset {
        name: "Pulsar",
        description: "A complex oscillator with a period of 3",
        rows: &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    },
    Preset {
        name: "Gosper Glider Gun",
        description: "Creates an infinite stream of gliders",
        rows: &[
            "........................O...........",
            "......................O.O...........",
            "............OO......OO............OO",
            "...........O...O....OO............OO",
            "OO........O.....O...OO..............",
            "OO........O...O.OO....O.O...........",
            "..........O.....O.......O...........",
            "...........O...O....................",
            "............OO......................",
        ],
    },
];

/// Case-insensitive lookup in [`PRESETS`].
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}
