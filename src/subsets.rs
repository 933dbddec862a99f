// The bit tricks in this file are Gosper's hack, in the shape given by
// [Hacker's Delight](https://web.archive.org/web/20130731200134/http://hackersdelight.org/hdcodetxt/snoob.c.txt)

/// Bitmask over a universe of items `0..n`. Bit `j` being set means item
/// `j` is in the subset.
///
/// Signed on purpose: `snoob` and `unsnoob` lean on two's complement
/// negation, and the sign bit is what makes the walk past
/// [`MAX_UNIVERSE`] fall over in the documented way.
pub type Mask = i64;

/// Largest universe the enumeration is reliable for.
///
/// The successor of the last in-range mask can spill one bit past `n`
/// before the range check catches it, hence the two bit margin below the
/// word width. [`subsets_of_size`] deliberately accepts `n` one past this
/// so the failure stays observable.
pub const MAX_UNIVERSE: u32 = Mask::BITS - 2;

// {{{ Successor and predecessor
/// Computes the next integer with the same number of bits set.
///
/// Meaningless for `x <= 0`: zero is alone in its popcount class.
pub fn snoob(x: Mask) -> Mask {
    debug_assert!(x > 0, "No successor with the same popcount as {:b}", x);

    // x = xxx0 1111 0000

    //     0000 0001 0000
    let smallest = x & x.wrapping_neg();

    //     xxx1 0000 0000
    let ripple = x.wrapping_add(smallest);

    //     0001 1111 0000
    let ones = x ^ ripple;

    //     0000 0000 0111
    let shifted_ones = (ones / smallest) >> 2;

    //     xxx1 0000 0111
    ripple | shifted_ones
}

/// Computes the previous integer with the same number of bits set.
///
/// Inverse of [`snoob`]: `unsnoob(snoob(x)) == x` whenever the successor
/// step stayed inside the word. Handing it the smallest member of a
/// popcount class returns `0`, since nothing smaller is left.
pub fn unsnoob(y: Mask) -> Mask {
    debug_assert!(y > 0, "No predecessor with the same popcount as {:b}", y);

    // y = xxx1 0000 0111

    //     xxx1 0000 1000
    let carried = y.wrapping_add(1);

    //     0000 0000 1111
    let flipped = carried ^ y;

    //     xxx1 0000 0000
    let kept = carried & y;

    //     0001 0000 0000
    let lowest_kept = kept & kept.wrapping_neg();

    //     xxx0 1111 0000
    kept.wrapping_sub(lowest_kept / flipped.wrapping_add(1))
}
// }}}
// {{{ SubsetsOfSize
/// Iterator over every mask with exactly `k` of the bits `0..n` set, in
/// strictly increasing order. See [`subsets_of_size`].
pub struct SubsetsOfSize {
    value: Mask,
    limit: Mask,
}

/// Enumerates the `k` element subsets of the universe `0..n`, starting at
/// the smallest mask `2^k - 1` and ending at `(2^k - 1) << (n - k)`.
///
/// Counts are only correct for `n <= MAX_UNIVERSE`. At `n = 63` the limit
/// `1 << n` wraps into the sign bit and the walk silently cuts short;
/// the constructor still admits that shape because the mismatch against
/// the oracle is the point of the word width demonstration. Only shapes
/// that cannot be represented at all are rejected.
pub fn subsets_of_size(n: u32, k: u32) -> SubsetsOfSize {
    assert!(k <= n, "Cannot pick {} items out of {}", k, n);
    assert!(
        n < Mask::BITS,
        "A universe of {} items does not fit a {} bit mask",
        n,
        Mask::BITS
    );

    SubsetsOfSize {
        value: (1 as Mask).wrapping_shl(k).wrapping_sub(1),
        limit: (1 as Mask).wrapping_shl(n),
    }
}

impl Iterator for SubsetsOfSize {
    type Item = Mask;

    fn next(&mut self) -> Option<Self::Item> {
        if self.value >= self.limit {
            return None;
        }

        let result = self.value;

        // The empty set is the entire popcount zero class, so there is
        // no successor to step to.
        self.value = if result == 0 {
            self.limit
        } else {
            snoob(result)
        };

        Some(result)
    }
}
// }}}
