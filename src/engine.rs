/// Rectangular field of cells stored row-major.
///
/// Cells are addressed as `(x, y)` where `x` is the column and `y` is the row.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a dead field with dimensions `width x height`.
    pub fn blank(width: usize, height: usize) -> Self {
        Self {
            cells: vec![false; width * height],
            width,
            height,
        }
    }

    /// Create a dead square field with side `n`.
    pub fn square(n: usize) -> Self {
        Self::blank(n, n)
    }

    /// Create a field of `width x height` with every cell computed by `f(x, y)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Side length of a square field.
    pub fn side(&self) -> usize {
        debug_assert_eq!(self.width, self.height);
        self.width
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[x + y * self.width]
    }

    /// Returns `None` when `(x, y)` lies outside the field.
    pub fn try_get(&self, x: i64, y: i64) -> Option<bool> {
        self.index_of(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, state: bool) {
        self.cells[x + y * self.width] = state;
    }

    /// Row-major index of `(x, y)` if it lies inside the field.
    pub(crate) fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = usize::try_from(y).ok().filter(|&y| y < self.height)?;
        Some(x + y * self.width)
    }

    pub(crate) fn cell_mut(&mut self, index: usize) -> &mut bool {
        &mut self.cells[index]
    }

    /// Iterates over rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // `chunks_exact` refuses a zero chunk size
        self.cells
            .chunks_exact(self.width.max(1))
            .take(self.height)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}

/// Live neighbours of `(x, y)` with both axes wrapped modulo the field size.
///
/// The offsets are applied literally, so on fields narrower than 3 cells the
/// same neighbour (or the cell itself) is counted several times.
fn count_neighbours(grid: &Grid, x: usize, y: usize) -> usize {
    let (w, h) = (grid.width, grid.height);
    let mut neighbours = 0;
    for dy in 0..3 {
        for dx in 0..3 {
            if dx == 1 && dy == 1 {
                continue;
            }
            let nx = (x + w + dx - 1) % w;
            let ny = (y + h + dy - 1) % h;
            neighbours += grid.get(nx, ny) as usize;
        }
    }
    neighbours
}

/// Computes the next generation on a torus.
///
/// Every cell is decided from `grid` alone, which is left untouched.
/// Returns the new field and its population.
pub fn step(grid: &Grid) -> (Grid, usize) {
    let mut alive = 0;
    let next = Grid::from_fn(grid.width, grid.height, |x, y| {
        let neibs = count_neighbours(grid, x, y);
        let state = if grid.get(x, y) {
            neibs == 2 || neibs == 3
        } else {
            neibs == 3
        };
        alive += state as usize;
        state
    });
    (next, alive)
}

/// Number of live cells.
pub fn count(grid: &Grid) -> usize {
    grid.cells.iter().filter(|&&c| c).count()
}
