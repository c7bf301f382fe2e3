use std::hint::black_box;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::config::HarnessConfig;
use crate::fibonacci::{Algorithm, FibonacciError, MAX_EXACT_N};
use crate::sequence::{verify_agreement, verify_agreement_rayon};

/// Mean wall-clock cost of one variant at one input size.
#[derive(Clone, Debug)]
pub struct Measurement {
    pub algorithm: Algorithm,
    pub n: u64,
    pub iterations: u32,
    pub value: i64,
    pub per_call: Duration,
}

/// Times `algorithm` at `n` over `iterations` calls.
pub fn measure(algorithm: Algorithm, n: u64, iterations: u32) -> Measurement {
    let iterations = iterations.max(1);
    let mut value = 0;

    let start = Instant::now();
    for _ in 0..iterations {
        value = black_box(algorithm.compute(black_box(n)));
    }
    let per_call = start.elapsed() / iterations;

    debug!(%algorithm, n, ?per_call, "measured");

    Measurement {
        algorithm,
        n,
        iterations,
        value,
        per_call,
    }
}

/// Number of leading indices checked by `--verify`: up to the largest size,
/// but never past the exact `i64` range.
pub fn verification_limit(sizes: &[u64]) -> u64 {
    sizes
        .iter()
        .copied()
        .max()
        .unwrap_or(0)
        .saturating_add(1)
        .min(MAX_EXACT_N + 1)
}

/// Runs every selected variant at every configured size.
///
/// Sizes past `naive_cap` are skipped for the exponential variant. With
/// `verify` set, the variants are first checked for agreement over
/// [`verification_limit`] indices and a disagreement aborts the run.
pub fn run(config: &HarnessConfig) -> Result<Vec<Measurement>, FibonacciError> {
    if config.verify {
        let limit = verification_limit(&config.sizes);
        if config.parallel {
            verify_agreement_rayon(limit, config.naive_cap)?;
        } else {
            verify_agreement(limit, config.naive_cap)?;
        }
    }

    let mut measurements = Vec::new();
    for algorithm in config.algorithms() {
        for &n in &config.sizes {
            if !algorithm.is_practical(n, config.naive_cap) {
                warn!(%algorithm, n, cap = config.naive_cap, "skipping size");
                continue;
            }
            measurements.push(measure(algorithm, n, config.iterations));
        }
    }

    Ok(measurements)
}

/// Formats measurements as a fixed-width table.
pub fn render(measurements: &[Measurement]) -> String {
    let mut out = format!(
        "{:<16} {:>8} {:>12} {:>14} {:>22}\n",
        "algorithm", "n", "iterations", "ns/call", "F(n)"
    );
    for m in measurements {
        out.push_str(&format!(
            "{:<16} {:>8} {:>12} {:>14} {:>22}\n",
            m.algorithm.name(),
            m.n,
            m.iterations,
            m.per_call.as_nanos(),
            m.value
        ));
    }
    out
}
