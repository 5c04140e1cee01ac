//! Serial vs parallel neighbor counting on random soups

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use viewport_life::domain::{AliveSet, Strategy, Viewport, randomize, step_with};

const CELL_SIZE: u32 = 1;
const DENSITY: f64 = 0.3;

fn soup(side: u32) -> (AliveSet, Viewport) {
    let viewport = Viewport::from_cells(side, side, CELL_SIZE);
    let mut rng = StdRng::seed_from_u64(u64::from(side));
    (randomize(viewport, DENSITY, &mut rng), viewport)
}

/// Average milliseconds per generation
fn benchmark(strategy: Strategy, side: u32, iterations: u32) -> f64 {
    let (mut alive, viewport) = soup(side);

    let start = Instant::now();
    for _ in 0..iterations {
        alive = step_with(&alive, viewport, strategy);
    }
    start.elapsed().as_secs_f64() * 1000.0 / f64::from(iterations)
}

fn main() {
    println!("=== Sparse Life Benchmark ===\n");

    let sides = [64, 128, 256, 512, 1024, 2048];
    let iterations = 20;

    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>10}",
        "Viewport", "Population", "Serial", "Parallel", "Speedup"
    );
    println!("{:-<60}", "");

    for side in sides {
        let population = soup(side).0.len();
        let serial_ms = benchmark(Strategy::Serial, side, iterations);
        let parallel_ms = benchmark(Strategy::Parallel, side, iterations);

        println!(
            "{:>10} {:>12} {:>12.2} {:>12.2} {:>9.1}x",
            format!("{}x{}", side, side),
            population,
            serial_ms,
            parallel_ms,
            serial_ms / parallel_ms
        );
    }
}
