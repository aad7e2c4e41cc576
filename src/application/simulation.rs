use crate::domain::{Grid, Pattern, seed};

/// Simulation owns the double-buffered grid and the generation counter.
///
/// `current` is what gets rendered; `next` is scratch space for the
/// transition step. After each step the two swap roles, so no buffer is
/// ever copied or reallocated.
pub struct Simulation {
    current: Grid,
    next: Grid,
    generation: u64,
}

impl Simulation {
    /// Create a simulation over an all-dead `cols` x `rows` grid
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            current: Grid::new(cols, rows),
            next: Grid::new(cols, rows),
            generation: 0,
        }
    }

    /// Start from an existing grid snapshot
    pub fn from_grid(grid: Grid) -> Self {
        let (cols, rows) = grid.dimensions();
        Self {
            current: grid,
            next: Grid::new(cols, rows),
            generation: 0,
        }
    }

    /// Seed the pattern with its origin at the grid center `(cols/2, rows/2)`.
    /// Returns how many cells landed on the grid.
    pub fn seed_centered(&mut self, pattern: &Pattern) -> usize {
        let (cols, rows) = self.current.dimensions();
        seed(&mut self.current, pattern, cols / 2, rows / 2)
    }

    /// Advance exactly one generation
    pub fn step(&mut self) {
        self.current.evolve_into(&mut self.next);
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
    }

    /// The generation currently shown
    pub fn grid(&self) -> &Grid {
        &self.current
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.current.dimensions()
    }
}
