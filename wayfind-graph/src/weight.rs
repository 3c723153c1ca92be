//! Edge weight helper trait.

use std::ops::Add;

/// Numeric abstraction over edge weights and accumulated distances.
///
/// Brings together the zero value (the distance from a node to itself),
/// a validity check run at graph construction, and a total-order key for
/// types such as `f64` which are not `Ord` themselves. The key is only
/// meaningful for comparisons, its value itself is meaningless.
pub trait Weight: Copy + PartialOrd + Add<Output = Self> {
    /// Zero distance.
    const ZERO: Self;

    /// Some substitute `Ord` type which can be used instead of `Self` for ordering purposes.
    type OrdKey: Ord + Copy;

    /// Convert self into `Ord`-supporting key `Self::OrdKey`.
    fn ord_key(self) -> Self::OrdKey;

    /// Whether the value is usable as an edge weight (e.g. finite for floats).
    fn is_valid_weight(self) -> bool;
}

impl Weight for f64 {
    const ZERO: f64 = 0.0;

    type OrdKey = i64;

    fn ord_key(self) -> i64 {
        debug_assert!(self.is_finite(), "Non-finite weight detected: {}", self);
        // For the explanation of this black magic,
        // see implementation of `f64::total_ord()` (unstable as of Rust 1.46)
        let x = self.to_bits() as i64;
        x ^ (((x >> 63) as u64) >> 1) as i64
    }

    fn is_valid_weight(self) -> bool {
        self.is_finite()
    }
}

impl Weight for u32 {
    const ZERO: u32 = 0;

    type OrdKey = u32;

    fn ord_key(self) -> u32 {
        self
    }

    fn is_valid_weight(self) -> bool {
        true
    }
}

impl Weight for u64 {
    const ZERO: u64 = 0;

    type OrdKey = u64;

    fn ord_key(self) -> u64 {
        self
    }

    fn is_valid_weight(self) -> bool {
        true
    }
}

#[test]
fn test_ord_key_f64() {
    let ord = |x: f64| x.ord_key();
    assert!(ord(0.0) > ord(-1.0));
    assert!(ord(0.0) < ord(1.0));
    assert!(ord(-1.0) < ord(1.0));
    assert!(ord(2.0) > ord(1.0));
    assert!(ord(-2.0) < ord(-1.0));
    assert!(ord(100.0) > ord(10.0));
    assert!(ord(0.5) < ord(0.75));
}

#[test]
fn test_valid_weight_f64() {
    assert!(1.5.is_valid_weight());
    assert!(0.0.is_valid_weight());
    assert!(!f64::INFINITY.is_valid_weight());
    assert!(!f64::NAN.is_valid_weight());
}
