use std::fmt;
use std::str::FromStr;

use crate::math::{fib_power_linear, fib_power_log, Matrix};

/// Largest index whose Fibonacci number fits in an `i64`.
pub const MAX_EXACT_N: u64 = 92;

/// Largest index the benchmark harness feeds the exponential variant.
pub const NAIVE_BENCH_CAP: u64 = 32;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("negative Fibonacci index: {0}")]
    NegativeIndex(i64),
    #[error("F({0}) does not fit in i64 (largest exact index is {})", MAX_EXACT_N)]
    Overflow(u64),
    #[error("{algorithm} disagrees at n={n}: expected {expected}, got {actual}")]
    Mismatch {
        algorithm: Algorithm,
        n: u64,
        expected: i64,
        actual: i64,
    },
    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),
}

/// Basic recursive algorithm with exponential run time.
///
/// Makes two calls per level and caches nothing, so it is impractical
/// beyond roughly n = 40. Benchmarks stop at [`NAIVE_BENCH_CAP`].
///
/// ```
/// use fibonacci_variants::fibonacci::fib_recursive;
/// assert_eq!(fib_recursive(20), 6765);
/// ```
pub fn fib_recursive(n: u64) -> i64 {
    if n < 2 {
        return n as i64;
    }
    fib_recursive(n - 1).wrapping_add(fib_recursive(n - 2))
}

/// Linear-time variant that fills a cache of `n + 1` values.
///
/// The cache is owned by this call and lent exclusively to the helper, and
/// the value at the greatest index is the answer.
pub fn fib_recursive_cache(n: u64) -> i64 {
    let mut cache = vec![0; n as usize + 1];
    fill_cache(&mut cache);
    cache[n as usize]
}

// Writes the base cases, then every cache[k] in increasing k, which is the
// order the recursive descent to the base case writes them while unwinding.
// Expressed as a loop so deep caches do not exhaust the stack.
fn fill_cache(cache: &mut [i64]) {
    cache[0] = 0;
    if cache.len() > 1 {
        cache[1] = 1;
    }
    for k in 2..cache.len() {
        cache[k] = cache[k - 1].wrapping_add(cache[k - 2]);
    }
}

/// Accumulator variant: carries `(first, second)` down `n` steps.
///
/// Each step is the tail call `(n - 1, second, first + second)`; without
/// guaranteed tail-call elimination it runs as a loop in constant stack.
pub fn fib_tail_recursive(n: u64) -> i64 {
    let (mut n, mut first, mut second) = (n, 0i64, 1i64);
    while n != 0 {
        (n, first, second) = (n - 1, second, first.wrapping_add(second));
    }
    first
}

/// Linear, iterative two-variable update in O(1) space.
///
/// Runs `n - 1` update steps and returns `second`. `n == 0` returns 0
/// rather than the untouched initial `second`.
///
/// ```
/// use fibonacci_variants::fibonacci::fib_iterative;
/// assert_eq!(fib_iterative(0), 0);
/// assert_eq!(fib_iterative(16), 987);
/// ```
pub fn fib_iterative(n: u64) -> i64 {
    if n == 0 {
        return 0;
    }

    let mut temp;
    let mut first: i64 = 0;
    let mut second: i64 = 1;
    for _ in 1..n {
        temp = second;
        second = first.wrapping_add(second);
        first = temp;
    }
    second
}

/// F(n) as the top-left entry of `Q^(n-1)`, powered by O(n) multiplications.
pub fn fib_matrix_linear(n: u64) -> i64 {
    if n == 0 {
        return 0;
    }
    let mut f = Matrix::fibonacci_q();
    fib_power_linear(&mut f, n - 1);
    f.a
}

/// F(n) as the top-left entry of `Q^(n-1)`, powered by divide and conquer.
///
/// O(log n) multiplications; slower than [`fib_iterative`] for small `n`,
/// faster once `n` reaches the hundreds.
///
/// ```
/// use fibonacci_variants::fibonacci::fib_matrix_log;
/// assert_eq!(fib_matrix_log(92), 7_540_113_804_746_346_429);
/// ```
pub fn fib_matrix_log(n: u64) -> i64 {
    if n == 0 {
        return 0;
    }
    let mut f = Matrix::fibonacci_q();
    fib_power_log(&mut f, n - 1);
    f.a
}

/// F(n) with the input validated instead of wrapped.
///
/// Negative indices and indices past [`MAX_EXACT_N`] are rejected.
///
/// ```
/// use fibonacci_variants::fibonacci::{fib_checked, FibonacciError};
/// assert_eq!(fib_checked(10), Ok(55));
/// assert_eq!(fib_checked(-1), Err(FibonacciError::NegativeIndex(-1)));
/// assert_eq!(fib_checked(93), Err(FibonacciError::Overflow(93)));
/// ```
pub fn fib_checked(n: i64) -> Result<i64, FibonacciError> {
    let n = u64::try_from(n).map_err(|_| FibonacciError::NegativeIndex(n))?;
    if n > MAX_EXACT_N {
        return Err(FibonacciError::Overflow(n));
    }
    Ok(fib_matrix_log(n))
}

/// The six interchangeable implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Recursive,
    RecursiveCache,
    TailRecursive,
    Iterative,
    MatrixLinear,
    MatrixLog,
}

impl Algorithm {
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Recursive,
        Algorithm::RecursiveCache,
        Algorithm::TailRecursive,
        Algorithm::Iterative,
        Algorithm::MatrixLinear,
        Algorithm::MatrixLog,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Recursive => "recursive",
            Algorithm::RecursiveCache => "recursive-cache",
            Algorithm::TailRecursive => "tail-recursive",
            Algorithm::Iterative => "iterative",
            Algorithm::MatrixLinear => "matrix-linear",
            Algorithm::MatrixLog => "matrix-log",
        }
    }

    pub fn compute(self, n: u64) -> i64 {
        match self {
            Algorithm::Recursive => fib_recursive(n),
            Algorithm::RecursiveCache => fib_recursive_cache(n),
            Algorithm::TailRecursive => fib_tail_recursive(n),
            Algorithm::Iterative => fib_iterative(n),
            Algorithm::MatrixLinear => fib_matrix_linear(n),
            Algorithm::MatrixLog => fib_matrix_log(n),
        }
    }

    /// Whether the variant is still practical to run at `n`.
    pub fn is_practical(self, n: u64, naive_cap: u64) -> bool {
        self != Algorithm::Recursive || n <= naive_cap
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = FibonacciError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name() == wanted)
            .ok_or_else(|| FibonacciError::UnknownAlgorithm(s.to_string()))
    }
}
