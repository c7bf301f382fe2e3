//! Harness configuration from CLI flags and environment.

use std::str::FromStr;

use clap::Parser;

use crate::fibonacci::{Algorithm, FibonacciError, NAIVE_BENCH_CAP};

/// One `--algo` entry: a single variant, or `all` of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    All,
    Only(Algorithm),
}

impl FromStr for Selection {
    type Err = FibonacciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        s.parse().map(Selection::Only)
    }
}

fn parse_selection(s: &str) -> Result<Selection, FibonacciError> {
    s.parse()
}

/// Times every Fibonacci variant across a range of input sizes.
#[derive(Parser, Debug, Clone)]
#[command(name = "fibonacci_variants", version, about)]
pub struct HarnessConfig {
    /// Input sizes to time, comma separated.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        default_value = "1,10,20,32,50,90",
        env = "FIB_SIZES"
    )]
    pub sizes: Vec<u64>,

    /// Variants to time, comma separated: recursive, recursive-cache,
    /// tail-recursive, iterative, matrix-linear, matrix-log, or all.
    #[arg(
        short,
        long,
        value_delimiter = ',',
        value_parser = parse_selection,
        default_value = "all",
        env = "FIB_ALGO"
    )]
    pub algo: Vec<Selection>,

    /// Calls per measurement.
    #[arg(short, long, default_value_t = 1000, env = "FIB_ITERATIONS")]
    pub iterations: u32,

    /// Largest size fed to the exponential variant.
    #[arg(long, default_value_t = NAIVE_BENCH_CAP, env = "FIB_NAIVE_CAP")]
    pub naive_cap: u64,

    /// Check that all variants agree up to the largest size before timing.
    #[arg(long, env = "FIB_VERIFY")]
    pub verify: bool,

    /// Run the agreement check on the rayon pool.
    #[arg(long, env = "FIB_PARALLEL")]
    pub parallel: bool,
}

impl HarnessConfig {
    /// Parse CLI arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// The variants to run, in declaration order.
    pub fn algorithms(&self) -> Vec<Algorithm> {
        if self.algo.is_empty() || self.algo.contains(&Selection::All) {
            return Algorithm::ALL.to_vec();
        }
        Algorithm::ALL
            .into_iter()
            .filter(|algorithm| self.algo.contains(&Selection::Only(*algorithm)))
            .collect()
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        HarnessConfig {
            sizes: vec![1, 10, 20, 32, 50, 90],
            algo: vec![Selection::All],
            iterations: 1000,
            naive_cap: NAIVE_BENCH_CAP,
            verify: false,
            parallel: false,
        }
    }
}
