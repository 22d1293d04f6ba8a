use crate::Topology;
use thiserror::Error;

/// Errors raised while building a grid from caller-supplied rows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    #[error("Row {row} has {found} cells, expected {expected} (grid must be rectangular)")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell held something other than 0 (water) or 1 (land).
    #[error("Cell ({x}, {y}) has value {value}, expected 0 or 1")]
    InvalidCell {
        /// Column of the cell.
        x: usize,
        /// Row of the cell.
        y: usize,
        /// The value found there.
        value: u8,
    },
}

/// Dense row-major 2D grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    pub(crate) data: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Creates a new grid with the given dimensions, initialized with default values.
    pub fn new(width: usize, height: usize) -> Self {
        let data = vec![T::default(); width * height];
        Self {
            width,
            height,
            data,
        }
    }

    /// Returns a grid of the same shape as `self` filled with default values.
    pub fn overlay<U: Clone + Default>(&self) -> Grid<U> {
        Grid::new(self.width, self.height)
    }
}

impl<T> Grid<T> {
    /// Returns an immutable reference to the element at the given coordinates,
    /// or None if the coordinates are out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).and_then(|idx| self.data.get(idx))
    }

    /// Returns a mutable reference to the element at the given coordinates,
    /// or None if the coordinates are out of bounds.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Option<&mut T> {
        self.index(x, y).and_then(move |idx| self.data.get_mut(idx))
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when the grid has no cells (zero rows or zero columns).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates over `(x, y)` coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }

    /// Returns the coordinates of the four orthogonal neighbours of `(x, y)`
    /// that exist under the given topology (N, S, E, W order).
    pub fn neighbors(
        &self,
        x: usize,
        y: usize,
        topology: Topology,
    ) -> impl Iterator<Item = (usize, usize)> {
        const OFFSETS: [(isize, isize); 4] = [(0, -1), (0, 1), (1, 0), (-1, 0)];
        let (width, height) = (self.width, self.height);

        OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let nx_raw = x as isize + dx;
            let ny_raw = y as isize + dy;

            match topology {
                Topology::Bounded => {
                    if nx_raw >= 0
                        && nx_raw < width as isize
                        && ny_raw >= 0
                        && ny_raw < height as isize
                    {
                        Some((nx_raw as usize, ny_raw as usize))
                    } else {
                        None
                    }
                }
                Topology::Toroidal => {
                    if width == 0 || height == 0 {
                        return None;
                    }
                    let nx = nx_raw.rem_euclid(width as isize) as usize;
                    let ny = ny_raw.rem_euclid(height as isize) as usize;
                    Some((nx, ny))
                }
            }
        })
    }

    /// Calculates the 1D index for the given 2D coordinates.
    /// Returns None if the coordinates are out of bounds.
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }
}

/// Grid of land (`true`) and water (`false`) cells.
pub type LandGrid = Grid<bool>;

impl LandGrid {
    /// Builds a land grid from rows of 0/1 values.
    ///
    /// An empty slice (or rows of length zero) produces an empty grid.
    ///
    /// # Errors
    ///
    /// Returns `GridError::RaggedRow` if the rows differ in length and
    /// `GridError::InvalidCell` for any value other than 0 or 1.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(width * height);

        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    expected: width,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                match value {
                    0 => data.push(false),
                    1 => data.push(true),
                    _ => return Err(GridError::InvalidCell { x, y, value }),
                }
            }
        }

        // A zero-width grid has no cells regardless of how many rows were given.
        let height = if width == 0 { 0 } else { height };
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Number of land cells.
    pub fn land_count(&self) -> usize {
        self.data.iter().filter(|&&land| land).count()
    }
}
