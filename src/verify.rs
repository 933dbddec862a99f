use derive_more::{Add, AddAssign, Display, Sum};
use itertools::Itertools;
use rayon::prelude::*;

use crate::choose::choose;
use crate::subsets::{subsets_of_size, unsnoob, Mask};

// {{{ Invariant violations
/// The one failure mode of this crate: a law of the enumeration broke
/// mid-walk. Fatal at the binary's top level, a plain value everywhere
/// else.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    #[display(fmt = "({}, {}): mask {:b} should have {} bits set", n, k, mask, k)]
    PopcountDrift { n: u32, k: u32, mask: Mask },

    #[display(fmt = "({}, {}): successor {:b} of {:b} did not increase", n, k, after, before)]
    NotIncreasing {
        n: u32,
        k: u32,
        before: Mask,
        after: Mask,
    },

    #[display(fmt = "({}, {}): predecessor of {:b} is not {:b}", n, k, after, before)]
    BrokenRoundTrip {
        n: u32,
        k: u32,
        before: Mask,
        after: Mask,
    },

    #[display(fmt = "({}, {}): oracle says {}, enumeration visited {}", n, k, expected, actual)]
    CountMismatch {
        n: u32,
        k: u32,
        expected: i64,
        actual: i64,
    },
}
// }}}
// {{{ Checking a single pair
/// Work done by a sweep, aggregated across all the checked pairs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Add, AddAssign, Sum)]
pub struct SweepStats {
    pub pairs: usize,
    pub subsets: usize,
}

/// Walks the full enumeration for a single `(n, k)` pair, holding every
/// step against the enumeration laws, then compares the visited count
/// against the closed form oracle.
pub fn check_pair(n: u32, k: u32) -> Result<SweepStats, InvariantViolation> {
    let mut previous: Option<Mask> = None;
    let mut actual: i64 = 0;

    for mask in subsets_of_size(n, k) {
        if mask.count_ones() != k {
            return Err(InvariantViolation::PopcountDrift { n, k, mask });
        }

        if let Some(before) = previous {
            // `mask` is the successor `snoob` produced for `before`, so
            // this is the predecessor round trip on last turn's value.
            if mask <= before {
                return Err(InvariantViolation::NotIncreasing {
                    n,
                    k,
                    before,
                    after: mask,
                });
            }

            if unsnoob(mask) != before {
                return Err(InvariantViolation::BrokenRoundTrip {
                    n,
                    k,
                    before,
                    after: mask,
                });
            }
        }

        previous = Some(mask);
        actual += 1;
    }

    let expected = choose(n, k) as i64;

    if expected != actual {
        return Err(InvariantViolation::CountMismatch {
            n,
            k,
            expected,
            actual,
        });
    }

    Ok(SweepStats {
        pairs: 1,
        subsets: actual as usize,
    })
}
// }}}
// {{{ The sweep
/// Cross checks the enumerator against the oracle for every pair with
/// `0 <= k <= n <= max_n`.
///
/// The pairs share no state, so the sweep fans out over the rayon pool
/// and sums the per pair stats back together; any violation wins over
/// the stats.
pub fn verify(max_n: u32) -> Result<SweepStats, InvariantViolation> {
    let pairs = (0..=max_n)
        .flat_map(|n| (0..=n).map(move |k| (n, k)))
        .collect_vec();

    pairs
        .into_par_iter()
        .map(|(n, k)| check_pair(n, k))
        .sum()
}
// }}}
// {{{ Boundary demonstration
/// Outcome of racing the oracle against the enumerator at one `(n, k)`
/// pair, kept around for reporting instead of being asserted on.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryCheck {
    pub n: u32,
    pub k: u32,
    pub oracle: i64,
    pub enumerated: i64,
}

impl BoundaryCheck {
    pub fn run(n: u32, k: u32) -> Self {
        Self {
            n,
            k,
            oracle: choose(n, k) as i64,
            enumerated: subsets_of_size(n, k).count() as i64,
        }
    }

    pub fn matched(&self) -> bool {
        self.oracle == self.enumerated
    }
}
// }}}
