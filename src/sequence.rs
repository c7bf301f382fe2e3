use rayon::iter::{IntoParallelIterator, ParallelIterator};
use tracing::{debug, info};

use crate::fibonacci::{fib_iterative, Algorithm, FibonacciError};

/// Computes F(0)..F(limit-1), each index independently with `algorithm`.
///
/// ```
/// use fibonacci_variants::fibonacci::Algorithm;
/// use fibonacci_variants::sequence::seq;
/// assert_eq!(seq(Algorithm::TailRecursive, 8), vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// ```
pub fn seq(algorithm: Algorithm, limit: u64) -> Vec<i64> {
    (0..limit).map(|n| algorithm.compute(n)).collect()
}

// Same as `seq`, with the indices spread over the rayon pool
pub fn seq_rayon(algorithm: Algorithm, limit: u64) -> Vec<i64> {
    (0..limit)
        .into_par_iter()
        .map(|n| algorithm.compute(n))
        .collect()
}

// Compares one index across every practical variant against the iterative
// reference. Returns how many variants were compared.
fn check_index(n: u64, naive_cap: u64) -> Result<usize, FibonacciError> {
    let expected = fib_iterative(n);
    let mut compared = 0;
    for algorithm in Algorithm::ALL {
        if !algorithm.is_practical(n, naive_cap) {
            continue;
        }
        compared += 1;
        let actual = algorithm.compute(n);
        if actual != expected {
            return Err(FibonacciError::Mismatch {
                algorithm,
                n,
                expected,
                actual,
            });
        }
    }
    Ok(compared)
}

/// Checks that all variants agree for every `n < limit`.
///
/// The exponential variant is only consulted up to `naive_cap`.
/// Returns the first disagreement found.
pub fn verify_agreement(limit: u64, naive_cap: u64) -> Result<(), FibonacciError> {
    for n in 0..limit {
        check_index(n, naive_cap)?;
    }
    info!(limit, "all variants agree");
    Ok(())
}

/// Parallel version of [`verify_agreement`].
///
/// Indices are checked concurrently; when several disagree, the lowest one
/// is reported.
pub fn verify_agreement_rayon(limit: u64, naive_cap: u64) -> Result<(), FibonacciError> {
    let failures: Vec<FibonacciError> = (0..limit)
        .into_par_iter()
        .filter_map(|n| check_index(n, naive_cap).err())
        .collect();

    debug!(limit, failures = failures.len(), "parallel verification done");

    // collect() keeps the iteration order, so the first failure has the lowest n
    match failures.into_iter().next() {
        Some(err) => Err(err),
        None => {
            info!(limit, "all variants agree");
            Ok(())
        }
    }
}
