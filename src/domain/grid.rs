use super::Cell;

/// Moore neighborhood offsets, row by row, skipping the center.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Grid is a fixed-size 2D board of cells with bounded (non-wrapping) edges.
/// Dimensions never change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions as (width, height), i.e. (cols, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    /// Check whether the cell at position is alive; out of bounds counts as dead
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position. Out-of-bounds writes are ignored and reported as `false`.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx] = cell;
            true
        } else {
            false
        }
    }

    /// Count live neighbors. Cells past the border do not exist, so corner
    /// cells have 3 candidates and edge cells 5.
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dx, dy)| {
                let nx = x.checked_add_signed(dx)?;
                let ny = y.checked_add_signed(dy)?;
                self.get(nx, ny)
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Compute the next generation into `next` without touching `self`.
    ///
    /// `next` must have the same dimensions; every one of its cells is overwritten.
    pub fn evolve_into(&self, next: &mut Grid) {
        debug_assert_eq!(self.dimensions(), next.dimensions());

        for y in 0..self.height {
            for x in 0..self.width {
                let idx = self.get_index(x, y);
                let neighbors = self.count_live_neighbors(x, y);
                next.cells[idx] = self.cells[idx].evolve(neighbors);
            }
        }
    }

    /// Pure functional evolution - returns a freshly allocated next generation
    pub fn evolve(&self) -> Self {
        let mut next = Grid::new(self.width, self.height);
        self.evolve_into(&mut next);
        next
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx % self.width, idx / self.width, cell))
    }

    /// Positions of every live cell in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::new(width, height);
        for &(x, y) in alive {
            grid.set(x, y, Cell::Alive);
        }
        grid
    }

    fn full_grid(width: usize, height: usize) -> Grid {
        let all: Vec<_> = (0..height)
            .flat_map(|y| (0..width).map(move |x| (x, y)))
            .collect();
        grid_with(width, height, &all)
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(7, 4);
        assert_eq!(grid.dimensions(), (7, 4));
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.live_cells().count(), 0);
    }

    #[test]
    fn test_out_of_bounds_access() {
        let mut grid = Grid::new(3, 3);
        assert_eq!(grid.get(3, 0), None);
        assert_eq!(grid.get(0, 3), None);
        assert!(!grid.set(5, 5, Cell::Alive));
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_neighbor_counts_are_bounded_by_position() {
        let grid = full_grid(5, 4);
        let (w, h) = grid.dimensions();

        for (x, y, _) in grid.iter_cells() {
            let on_x_edge = x == 0 || x == w - 1;
            let on_y_edge = y == 0 || y == h - 1;
            let expected = match (on_x_edge, on_y_edge) {
                (true, true) => 3,
                (true, false) | (false, true) => 5,
                (false, false) => 8,
            };
            assert_eq!(grid.count_live_neighbors(x, y), expected, "cell ({x}, {y})");
        }
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let grid = grid_with(3, 3, &[(1, 1)]);
        assert_eq!(grid.count_live_neighbors(1, 1), 0);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        // A live cell on the left edge must not be seen from the right edge
        let grid = grid_with(5, 5, &[(0, 2)]);
        assert_eq!(grid.count_live_neighbors(4, 2), 0);
        assert_eq!(grid.count_live_neighbors(2, 4), 0);
    }

    #[test]
    fn test_block_is_still_life() {
        let grid = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        assert_eq!(grid.evolve(), grid);
    }

    #[test]
    fn test_block_in_corner_is_still_life() {
        let grid = grid_with(4, 4, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
        assert_eq!(grid.evolve(), grid);
    }

    #[test]
    fn test_blinker_oscillates_with_period_two() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let once = horizontal.evolve();
        assert_eq!(once, vertical);
        assert_eq!(once.evolve(), horizontal);
    }

    #[test]
    fn test_evolve_is_deterministic() {
        let start = grid_with(8, 8, &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2), (6, 6)]);
        let a = start.evolve().evolve();
        let b = start.evolve().evolve();
        assert_eq!(a, b);
        // Source grid untouched
        assert_eq!(start.population(), 6);
    }

    #[test]
    fn test_evolve_into_overwrites_stale_cells() {
        let start = grid_with(4, 4, &[(1, 1)]);
        let mut next = full_grid(4, 4);
        start.evolve_into(&mut next);
        assert_eq!(next.population(), 0);
    }

    #[test]
    fn test_live_cells_row_major() {
        let grid = grid_with(4, 3, &[(3, 0), (0, 2), (1, 0)]);
        let live: Vec<_> = grid.live_cells().collect();
        assert_eq!(live, vec![(1, 0), (3, 0), (0, 2)]);
    }
}
