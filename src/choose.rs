/// Computes `n choose k` through the multiplicative formula.
///
/// The partial product right before dividing by `i` is `i * choose(n, i)`,
/// so the truncating division is exact at every step. Runs in 32 bit
/// arithmetic and silently wraps once the true value stops fitting, which
/// keeps the word width demonstration honest. Counts up to `n = 62` with
/// small `k` are exact, as is the whole `n <= 20` sweep.
pub fn choose(n: u32, k: u32) -> i32 {
    assert!(k <= n, "Cannot pick {} items out of {}", k, n);

    let mut result: i32 = 1;

    for i in 1..=k {
        result = result.wrapping_mul((n + 1 - i) as i32) / i as i32;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;

    /// We want to test the oracle for universes up to this size.
    const UPPER_BOUND: u32 = 20;

    /// Pascal's triangle, built with additions only, as a cross check
    /// computed nothing like the multiplicative formula.
    static PASCAL: Lazy<Vec<Vec<i32>>> = Lazy::new(|| {
        let mut rows = vec![vec![1]];

        for n in 1..=UPPER_BOUND as usize {
            let previous = &rows[n - 1];
            let mut row = vec![1];

            for k in 1..n {
                row.push(previous[k - 1] + previous[k]);
            }

            row.push(1);
            rows.push(row);
        }

        rows
    });

    #[test]
    fn matches_pascals_triangle() {
        for n in 0..=UPPER_BOUND {
            for k in 0..=n {
                assert_eq!(
                    choose(n, k),
                    PASCAL[n as usize][k as usize],
                    "Failed for ({}, {})",
                    n,
                    k
                );
            }
        }
    }

    /// `n choose k` counts the k-element subsets of a set with n elements,
    /// and a set with n elements has 2^n subsets in total, so the row sums
    /// of the triangle should be powers of two.
    #[test]
    fn choices_add_to_powers_of_two() {
        for n in 0..=UPPER_BOUND {
            let total: i64 = (0..=n).map(|k| choose(n, k) as i64).sum();

            assert_eq!(total, 1 << n, "Failed for {}", n);
        }
    }

    /// Tests that `n choose k` is equal to `n choose n - k`.
    #[test]
    fn choice_complements() {
        for n in 0..=UPPER_BOUND {
            for k in 0..=n {
                assert_eq!(choose(n, k), choose(n, n - k));
            }
        }
    }

    #[test]
    fn wide_universe_examples() {
        assert_eq!(choose(5, 2), 10);
        assert_eq!(choose(62, 3), 37820);
        assert_eq!(choose(63, 2), 1953);
    }
}
