//! Step throughput benchmark on square grids of increasing size

use std::time::Instant;

use gol_runner::{Cell, Grid, Simulation};
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Fill about 30% of the cells, seeded so runs are comparable
fn random_grid(size: usize, seed: u64) -> Grid {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut grid = Grid::new(size, size);
    for y in 0..size {
        for x in 0..size {
            grid.set(x, y, Cell::from(rng.random_bool(0.3)));
        }
    }
    grid
}

/// Average milliseconds per generation
fn benchmark_step(size: usize, iterations: u32) -> (f64, usize) {
    let mut sim = Simulation::from_grid(random_grid(size, 42));

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step();
    }
    let ms = start.elapsed().as_secs_f64() * 1000.0 / iterations as f64;
    (ms, sim.grid().population())
}

fn main() {
    println!("=== Game of Life Step Benchmark ===\n");

    let sizes = [50, 100, 500, 1000, 2000];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16} {:>12}", "Size", "ms/gen", "Mcells/sec", "Alive");
    println!("{:-<54}", "");

    for size in sizes {
        let (ms, alive) = benchmark_step(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1} {:>12}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0,
            alive
        );
    }
}
