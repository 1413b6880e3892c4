/// Pure Rust core benchmarks for the segment computation.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for parameter
/// generation, and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use sewerline_core::{compute, compute_batch, linspace, sweep, ParamField, ParameterSet};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic parameter sets in plausible ranges.
fn make_rows(n: usize, seed: u64) -> Vec<ParameterSet> {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..n)
        .map(|_| {
            ParameterSet::DEFAULT
                .with_field(ParamField::DwellingCount, 1.0 + next_f64() * 2000.0)
                .with_field(ParamField::Slope, 0.001 + next_f64() * 0.05)
                .with_field(ParamField::Diameter, 100.0 + next_f64() * 500.0)
                .with_field(ParamField::ManningCoefficient, 0.010 + next_f64() * 0.006)
        })
        .collect()
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_single(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let rows = make_rows(n, 42);

        // Warmup
        for p in &rows {
            black_box(compute(p));
        }

        let dur = median_time(|| {
            for p in &rows {
                black_box(compute(p));
            }
        });
        results.push(("compute", n, dur));
    }
    results
}

fn bench_batch(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let rows = make_rows(n, 7);

        // Warmup
        black_box(compute_batch(&rows));

        let dur = median_time(|| {
            black_box(compute_batch(&rows));
        });
        results.push(("compute_batch", n, dur));
    }
    results
}

fn bench_sweep(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let values = linspace(0.001, 0.05, n);

        // Warmup
        black_box(sweep(&ParameterSet::DEFAULT, ParamField::Slope, &values));

        let dur = median_time(|| {
            black_box(sweep(&ParameterSet::DEFAULT, ParamField::Slope, &values));
        });
        results.push(("sweep_slope", n, dur));
    }
    results
}

fn main() {
    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}", "Case", "N", "Median (ms)");
    println!("--------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_single(&[1_000, 100_000]));
    all_results.extend(bench_batch(&[1_000, 100_000]));
    all_results.extend(bench_sweep(&[1_000, 100_000]));

    for (case, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        println!("{:<18} {:>8}      {:>8.2}", case, n, ms);
    }

    println!("============================================================");
}
