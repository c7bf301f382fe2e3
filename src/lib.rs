//! # Fibonacci Variants Library
//!
//! This library provides six alternative algorithms for computing the nth Fibonacci number
//! (F(0) = 0, F(1) = 1), plus a small harness for comparing their runtime cost across input
//! sizes. Every variant is a pure function of its index: no state survives a call, so any of
//! them may be called concurrently from several threads.
//!
//! Results are `i64` and wrap silently once the true value no longer fits (past F(92)).
//! [`fibonacci::fib_checked`] rejects those inputs instead.
//!
//! ## Overview of Functions
//!
//! ### Errors
//! - `FibonacciError`: negative or overflowing indices for the checked entry point, unknown
//!   algorithm names, and disagreements found while cross-checking variants.
//!
//! ### Fibonacci Computation Approaches
//!
//! #### `fib_recursive`
//! Plain double recursion. Exponential time, so it is only benchmarked up to n = 32.
//!
//! #### `fib_recursive_cache`
//! Fills a cache of `n + 1` values in the order a recursive descent would write them. O(n)
//! time and space.
//!
//! #### `fib_tail_recursive`
//! Carries an accumulator pair `(first, second)` through `n` steps. O(n) time, constant stack.
//!
//! #### `fib_iterative`
//! The classic two-variable loop. Fastest for small and moderate `n`.
//!
//! #### `fib_matrix_linear`
//! Top-left entry of `[[1,1],[1,0]]^(n-1)`, powered by repeated multiplication.
//!
//! #### `fib_matrix_log`
//! Same matrix, powered by recursive halving and squaring in O(log n) multiplications.
//!
//! ### Sequences and Verification
//! `sequence::seq` and `sequence::seq_rayon` generate prefixes of the sequence with any
//! variant; `sequence::verify_agreement` (and its rayon twin) checks that all variants agree.
//!
//! ### Harness
//! `harness::run` times the selected variants over a [`config::HarnessConfig`] and
//! `harness::render` prints the table.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_variants::fibonacci::Algorithm;
//! for algorithm in Algorithm::ALL {
//!     assert_eq!(algorithm.compute(20), 6765);
//! }
//! ```

pub mod config;
pub mod fibonacci;
pub mod harness;
pub mod math;
pub mod sequence;
