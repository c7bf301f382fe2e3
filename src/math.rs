// Matrix structure for 2x2 matrices, laid out as [[a, b], [c, d]]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix {
    pub a: i64,
    pub b: i64,
    pub c: i64,
    pub d: i64,
}

impl Matrix {
    /// The Fibonacci Q matrix `[[1, 1], [1, 0]]`.
    ///
    /// `Q^n` is `[[F(n+1), F(n)], [F(n), F(n-1)]]`.
    pub const fn fibonacci_q() -> Self {
        Matrix {
            a: 1,
            b: 1,
            c: 1,
            d: 0,
        }
    }
}

// Matrix multiplication for 2x2 matrices, wrapping silently on overflow
pub fn matrix_mult(m1: &Matrix, m2: &Matrix) -> Matrix {
    Matrix {
        a: m1.a.wrapping_mul(m2.a).wrapping_add(m1.b.wrapping_mul(m2.c)),
        b: m1.a.wrapping_mul(m2.b).wrapping_add(m1.b.wrapping_mul(m2.d)),
        c: m1.c.wrapping_mul(m2.a).wrapping_add(m1.d.wrapping_mul(m2.c)),
        d: m1.c.wrapping_mul(m2.b).wrapping_add(m1.d.wrapping_mul(m2.d)),
    }
}

/// Multiplies `f` by `m` in place, so that `f` holds `f * m` afterwards.
pub fn fib_multiply(f: &mut Matrix, m: &Matrix) {
    *f = matrix_mult(f, m);
}

/// Raises `f` to the `n`th power by repeated multiplication with Q.
///
/// `f` is expected to start out as Q. Exponents 0 and 1 leave it untouched.
/// Returns the number of matrix multiplications performed.
pub fn fib_power_linear(f: &mut Matrix, n: u64) -> usize {
    let q = Matrix::fibonacci_q();
    let mut multiplications = 0;

    for _ in 2..=n {
        fib_multiply(f, &q);
        multiplications += 1;
    }

    multiplications
}

/// Raises `f` to the `n`th power by recursive halving (O(log n)).
///
/// `f` is expected to start out as Q. The exponent is halved, the partial
/// result squared in place, and an odd exponent gets one more multiply by Q.
/// Exponents 0 and 1 leave `f` untouched.
///
/// Returns the number of matrix multiplications performed.
pub fn fib_power_log(f: &mut Matrix, n: u64) -> usize {
    if n < 2 {
        return 0;
    }

    let mut multiplications = fib_power_log(f, n / 2);

    // Square
    let half = *f;
    fib_multiply(f, &half);
    multiplications += 1;

    if n % 2 == 1 {
        fib_multiply(f, &Matrix::fibonacci_q());
        multiplications += 1;
    }

    multiplications
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: Matrix = Matrix {
        a: 1,
        b: 0,
        c: 0,
        d: 1,
    };

    fn q_pow(n: u64) -> Matrix {
        let mut m = IDENTITY;
        for _ in 0..n {
            m = matrix_mult(&m, &Matrix::fibonacci_q());
        }
        m
    }

    #[test]
    fn multiply_identity() {
        let q = Matrix::fibonacci_q();
        assert_eq!(matrix_mult(&IDENTITY, &q), q);
        assert_eq!(matrix_mult(&q, &IDENTITY), q);
    }

    #[test]
    fn square_q_matrix() {
        let q = Matrix::fibonacci_q();
        // Q^2 = [[2,1],[1,1]]
        assert_eq!(
            matrix_mult(&q, &q),
            Matrix {
                a: 2,
                b: 1,
                c: 1,
                d: 1
            }
        );
    }

    #[test]
    fn multiply_is_not_commutative_in_general() {
        let m1 = Matrix {
            a: 1,
            b: 2,
            c: 3,
            d: 4,
        };
        let m2 = Matrix {
            a: 0,
            b: 1,
            c: 1,
            d: 0,
        };
        assert_eq!(
            matrix_mult(&m1, &m2),
            Matrix {
                a: 2,
                b: 1,
                c: 4,
                d: 3
            }
        );
        assert_eq!(
            matrix_mult(&m2, &m1),
            Matrix {
                a: 3,
                b: 4,
                c: 1,
                d: 2
            }
        );
    }

    #[test]
    fn fib_multiply_writes_into_first_argument() {
        let mut f = Matrix::fibonacci_q();
        let m = Matrix::fibonacci_q();
        fib_multiply(&mut f, &m);
        assert_eq!(f, q_pow(2));
        assert_eq!(m, Matrix::fibonacci_q());
    }

    #[test]
    fn multiply_wraps_on_overflow() {
        let big = Matrix {
            a: i64::MAX,
            b: 0,
            c: 0,
            d: 1,
        };
        let doubled = matrix_mult(
            &big,
            &Matrix {
                a: 2,
                b: 0,
                c: 0,
                d: 1,
            },
        );
        assert_eq!(doubled.a, i64::MAX.wrapping_mul(2));
    }

    #[test]
    fn power_linear_matches_repeated_product() {
        for n in 1..40 {
            let mut f = Matrix::fibonacci_q();
            fib_power_linear(&mut f, n);
            assert_eq!(f, q_pow(n), "Q^{n}");
        }
    }

    #[test]
    fn power_log_matches_repeated_product() {
        for n in 1..40 {
            let mut f = Matrix::fibonacci_q();
            fib_power_log(&mut f, n);
            assert_eq!(f, q_pow(n), "Q^{n}");
        }
    }

    #[test]
    fn low_exponents_leave_matrix_unchanged() {
        for n in [0, 1] {
            let mut f = Matrix::fibonacci_q();
            assert_eq!(fib_power_linear(&mut f, n), 0);
            assert_eq!(f, Matrix::fibonacci_q());

            let mut f = Matrix::fibonacci_q();
            assert_eq!(fib_power_log(&mut f, n), 0);
            assert_eq!(f, Matrix::fibonacci_q());
        }
    }

    #[test]
    fn linear_multiplication_count() {
        let mut f = Matrix::fibonacci_q();
        assert_eq!(fib_power_linear(&mut f, 100), 99);
    }

    #[test]
    fn log_multiplication_count_for_powers_of_two() {
        for k in 1..20 {
            let mut f = Matrix::fibonacci_q();
            assert_eq!(fib_power_log(&mut f, 1 << k), k as usize, "2^{k}");
        }
    }

    #[test]
    fn log_multiplication_count_for_all_ones_exponent() {
        // 2^k - 1 squares k-1 times and multiplies by Q k-1 times
        for k in 2..20u32 {
            let mut f = Matrix::fibonacci_q();
            let n = (1u64 << k) - 1;
            assert_eq!(fib_power_log(&mut f, n), 2 * (k as usize - 1), "n = {n}");
        }
    }
}
