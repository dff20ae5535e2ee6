use tracing::warn;

use crate::Generator;

/// Park–Miller minimal standard generator, `seed = A * seed % M`.
///
/// The product is evaluated with Schrage's factorization `M = A * Q + R`, so
/// no intermediate value leaves the 32-bit range.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lehmer {
    seed: i32,
}

impl Lehmer {
    /// The Mersenne prime `2^31 - 1`.
    pub const M: i32 = 2147483647;
    /// Primitive root of `M`.
    pub const A: i32 = 16807;
    pub const Q: i32 = Self::M / Self::A;
    pub const R: i32 = Self::M % Self::A;

    pub fn new(seed: i32) -> Self {
        if !(1..Self::M).contains(&seed) {
            warn!(seed, "lehmer seed outside 1..M");
        }
        Lehmer { seed }
    }

    /// The most recent value, from which the next draw is computed.
    #[inline]
    pub fn seed(&self) -> i32 {
        self.seed
    }
}

impl Generator for Lehmer {
    fn next(&mut self) -> i32 {
        let hi = self.seed / Self::Q;
        let lo = self.seed % Self::Q;
        let mut test = Self::A * lo - Self::R * hi;
        if test <= 0 {
            test += Self::M;
        }
        self.seed = test;
        test
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn factorization() {
        assert_eq!(Lehmer::Q, 127773);
        assert_eq!(Lehmer::R, 2836);
    }

    #[test]
    fn reference_sequence() {
        let mut rng = Lehmer::new(10569345);
        let first = (0..5).map(|_| rng.next()).collect::<Vec<_>>();
        assert_eq!(
            first,
            [1545322361, 565694509, 717507494, 1027773753, 1582493850],
        );
        for _ in 5..100 {
            let v = rng.next();
            assert!(0 < v && v < Lehmer::M);
        }
    }

    #[test]
    fn matches_wide_product() {
        let mut rng = Lehmer::new(1);
        let mut wide = 1i64;
        for _ in 0..10_000 {
            wide = wide * i64::from(Lehmer::A) % i64::from(Lehmer::M);
            assert_eq!(i64::from(rng.next()), wide);
        }
    }

    #[test]
    fn reproducible() {
        let mut a = Lehmer::new(42);
        let mut b = a.clone();
        assert_eq!(a.int_array(100, 0, 1000), b.int_array(100, 0, 1000));
        assert_eq!(a.seed(), b.seed());
    }

    #[test]
    fn range_across_seeds() {
        for seed in [1, 7, 10569345, 123456789, Lehmer::M - 1] {
            let mut rng = Lehmer::new(seed);
            for _ in 0..10_000 {
                let v = rng.next_range(-5, 17);
                assert!((-5..17).contains(&v), "{v} outside -5..17");
            }
        }
    }

    #[test]
    fn shuffle_permutes() {
        let mut rng = Lehmer::new(10569345);
        let mut items = (0..50).collect::<Vec<_>>();
        rng.shuffle(&mut items);
        assert_ne!(items, (0..50).collect::<Vec<_>>());
        items.sort_unstable();
        assert_eq!(items, (0..50).collect::<Vec<_>>());
    }

    proptest! {
        #[test]
        fn draws_stay_in_modulus(seed in 1..Lehmer::M) {
            let mut rng = Lehmer::new(seed);
            for _ in 0..100 {
                let v = rng.next();
                prop_assert!(0 < v && v < Lehmer::M);
            }
        }
    }
}
