//! Immutable walkability lookup for a rectangular map.

use thiserror::Error;

use crate::Position;

/// Terrain type of a single map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Wall or other impassable terrain, encoded as `0`.
    Blocked,
    /// Floor that actors may stand on, encoded as `1`.
    Open,
}

impl Cell {
    /// Decodes a map provider cell code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Blocked),
            1 => Some(Self::Open),
            _ => None,
        }
    }
}

/// Reasons a cell matrix cannot become a [`Grid`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GridError {
    /// The matrix contained no rows or only empty rows.
    #[error("map must contain at least one cell")]
    Empty,
    /// A row did not match the width of the first row.
    #[error("map row {row} has {found} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Width established by the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// A cell carried a code other than `0` or `1`.
    #[error("map cell ({row}, {column}) has unknown code {code}")]
    UnknownCell {
        /// Row of the offending cell.
        row: usize,
        /// Column of the offending cell.
        column: usize,
        /// Code found in the cell.
        code: u8,
    },
}

/// Rectangular walkability grid, fixed for the lifetime of a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Builds a grid from rows of cell codes (`0` blocked, `1` open).
    pub fn from_rows<R>(rows: &[R]) -> Result<Self, GridError>
    where
        R: AsRef<[u8]>,
    {
        let columns = rows.first().map_or(0, |row| row.as_ref().len());
        if columns == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(columns * rows.len());
        for (row_index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != columns {
                return Err(GridError::Ragged {
                    row: row_index,
                    expected: columns,
                    found: row.len(),
                });
            }
            for (column_index, &code) in row.iter().enumerate() {
                let cell = Cell::from_code(code).ok_or(GridError::UnknownCell {
                    row: row_index,
                    column: column_index,
                    code,
                })?;
                cells.push(cell);
            }
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    /// Number of rows in the grid.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the grid.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Terrain at the provided position, `None` when out of bounds.
    fn cell(&self, position: Position) -> Option<Cell> {
        self.index(position)
            .and_then(|index| self.cells.get(index).copied())
    }

    /// Reports whether the position is inside the grid and walkable.
    ///
    /// Out-of-bounds positions are simply not open.
    #[must_use]
    pub fn is_open(&self, position: Position) -> bool {
        self.cell(position) == Some(Cell::Open)
    }

    /// Iterator over the rows of the grid, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns)
    }

    fn index(&self, position: Position) -> Option<usize> {
        let row = usize::try_from(position.row()).ok()?;
        let column = usize::try_from(position.column()).ok()?;
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }
}
