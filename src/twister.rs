use tracing::{debug, trace};

use crate::{BitOps, Bits32, Error, Result};

/// Degree of recurrence, the number of words in the state.
pub const N: usize = 624;
/// Middle word offset of the recurrence.
pub const M: usize = 397;

const UPPER_MASK: i32 = i32::MIN; // 0x80000000
const LOWER_MASK: i32 = i32::MAX; // 0x7fffffff
const MAGIC: [i32; 2] = [0, 0x9908b0df_u32 as i32];
pub(crate) const MAGIC_FACTOR1: i32 = 1812433253;
const MAGIC_FACTOR2: i32 = 1664525;
const MAGIC_FACTOR3: i32 = 1566083941;
const MAGIC_SEED: i32 = 19650218;
const TEMPER_MASK1: i32 = 0x9d2c5680_u32 as i32;
const TEMPER_MASK2: i32 = 0xefc60000_u32 as i32;

/// The MT19937 Mersenne Twister, with every bit manipulation routed through
/// [`Bits32`].
///
/// The state is a buffer of [`N`] words and a cursor into it. When the cursor
/// reaches `N`, the whole buffer is twisted before the next word is read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MersenneTwister {
    state: Box<[i32; N]>,
    index: usize,
}

impl MersenneTwister {
    pub const DEFAULT_SEED: i32 = 5489;

    /// Initializes the state from a single word, as `init_genrand`.
    pub fn from_seed(seed: i32) -> Self {
        let mut rng = MersenneTwister::from_state(Box::new([0; N]));
        rng.seed(seed);
        rng
    }

    /// Initializes the state from a key of words, as `init_by_array`.
    pub fn from_key(key: &[i32]) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::EmptyKey);
        }
        let mut rng = MersenneTwister::from_seed(MAGIC_SEED);
        let state = &mut rng.state;

        let (mut i, mut j) = (1, 0);
        for _ in 0..N.max(key.len()) {
            let mixed = spread(state[i - 1]).wrapping_mul(MAGIC_FACTOR2);
            state[i] = Bits32::xor(state[i], mixed)
                .wrapping_add(key[j])
                .wrapping_add(j as i32);
            i += 1;
            j += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
            if j >= key.len() {
                j = 0;
            }
        }
        for _ in 0..N - 1 {
            let mixed = spread(state[i - 1]).wrapping_mul(MAGIC_FACTOR3);
            state[i] = Bits32::xor(state[i], mixed).wrapping_sub(i as i32);
            i += 1;
            if i >= N {
                state[0] = state[N - 1];
                i = 1;
            }
        }
        // Guarantees a non-zero state.
        state[0] = UPPER_MASK;

        debug!(key_len = key.len(), "seeded mt19937 state from key");
        Ok(rng)
    }

    /// Uses `state` as the untwisted state, so the first draw twists it.
    pub fn from_state(state: Box<[i32; N]>) -> Self {
        MersenneTwister { state, index: N }
    }

    /// Resets the state from a single word.
    pub fn seed(&mut self, seed: i32) {
        let state = &mut self.state;
        state[0] = seed;
        for i in 1..N {
            state[i] = MAGIC_FACTOR1
                .wrapping_mul(spread(state[i - 1]))
                .wrapping_add(i as i32);
        }
        self.index = N;
        debug!(seed, "seeded mt19937 state");
    }

    #[inline]
    pub fn state(&self) -> &[i32; N] {
        &self.state
    }

    /// Position of the next word to be tempered. `N` means the state is
    /// exhausted and is twisted on the next draw.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the next word, keeping only its `bits` most significant bits,
    /// shifted down into the low end of the result.
    pub fn try_next(&mut self, bits: u32) -> Result<i32> {
        if !(1..=32).contains(&bits) {
            return Err(Error::InvalidBitCount(bits));
        }
        if self.index >= N {
            self.twist();
        }
        let y = self.state[self.index];
        self.index += 1;
        Ok(Bits32::unsigned_shift_right(
            MersenneTwister::temper(y),
            32 - bits,
        ))
    }

    /// Like [`MersenneTwister::try_next`], but panics when `bits` is not in
    /// `1..=32`.
    pub fn next(&mut self, bits: u32) -> i32 {
        match self.try_next(bits) {
            Ok(v) => v,
            Err(err) => panic!("{err}"),
        }
    }

    /// Equivalent to `genrand_int32`.
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        self.next(32) as u32
    }

    /// Returns a float in `[0, 1)` with 53-bit resolution, as `genrand_res53`.
    pub fn next_f64(&mut self) -> f64 {
        let a = self.next(27) as f64;
        let b = self.next(26) as f64;
        (a * 67108864.0 + b) * (1.0 / 9007199254740992.0)
    }

    /// Regenerates all `N` words of the state.
    fn twist(&mut self) {
        let state = &mut self.state;
        for k in 0..N {
            let y = Bits32::or(
                Bits32::and(state[k], UPPER_MASK),
                Bits32::and(state[(k + 1) % N], LOWER_MASK),
            );
            let mag = MAGIC[Bits32::and(y, 1) as usize];
            state[k] = Bits32::xor(
                Bits32::xor(state[(k + M) % N], Bits32::unsigned_shift_right(y, 1)),
                mag,
            );
        }
        self.index = 0;
        trace!("twisted mt19937 state");
    }

    /// Applies the output tempering transform to a state word.
    pub fn temper(mut y: i32) -> i32 {
        y = Bits32::xor(y, Bits32::unsigned_shift_right(y, 11));
        y = Bits32::xor(y, Bits32::and(Bits32::shift_left(y, 7), TEMPER_MASK1));
        y = Bits32::xor(y, Bits32::and(Bits32::shift_left(y, 15), TEMPER_MASK2));
        Bits32::xor(y, Bits32::unsigned_shift_right(y, 18))
    }
}

impl Default for MersenneTwister {
    fn default() -> Self {
        MersenneTwister::from_seed(MersenneTwister::DEFAULT_SEED)
    }
}

/// `x ^ (x >> 30)`, the mixing step of both seeding routines.
#[inline]
pub(crate) fn spread(x: i32) -> i32 {
    Bits32::xor(x, Bits32::unsigned_shift_right(x, 30))
}

/// Packs bytes into little-endian words, zero-padding the last word, for use
/// as a key to [`MersenneTwister::from_key`].
pub fn pack_bytes(bytes: &[u8]) -> Vec<i32> {
    bytes
        .chunks(4)
        .map(|chunk| {
            chunk.iter().rev().fold(0, |word, &b| {
                Bits32::or(Bits32::shift_left(word, 8), i32::from(b))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_seed_sequence() {
        let mut rng = MersenneTwister::default();
        let first = (0..10).map(|_| rng.next_u32()).collect::<Vec<_>>();
        assert_eq!(
            first,
            [
                3499211612_u32, 581869302, 3890346734, 3586334585, 545404204, 4161255391, 3922919429,
                949333985, 2715962298, 1323567403,
            ],
        );
    }

    #[test]
    fn ten_thousandth_output() {
        let mut rng = MersenneTwister::from_seed(5489);
        for _ in 0..9999 {
            rng.next(32);
        }
        assert_eq!(rng.next_u32(), 4123659995);
    }

    #[test]
    fn key_sequence() {
        let mut rng = MersenneTwister::from_key(&[0x123, 0x234, 0x345, 0x456]).unwrap();
        let first = (0..5).map(|_| rng.next_u32()).collect::<Vec<_>>();
        assert_eq!(
            first,
            [1067595299_u32, 955945823, 477289528, 4107218783, 4228976476],
        );
    }

    #[test]
    fn empty_key() {
        assert_eq!(MersenneTwister::from_key(&[]), Err(Error::EmptyKey));
    }

    #[test]
    fn fewer_bits_are_high_bits() {
        let mut full = MersenneTwister::from_seed(42);
        let mut part = MersenneTwister::from_seed(42);
        for bits in 1..=32 {
            let v = full.next_u32();
            assert_eq!(part.next(bits) as u32, v >> (32 - bits));
        }
    }

    #[test]
    fn invalid_bit_counts() {
        let mut rng = MersenneTwister::default();
        assert_eq!(rng.try_next(0), Err(Error::InvalidBitCount(0)));
        assert_eq!(rng.try_next(33), Err(Error::InvalidBitCount(33)));
        assert_eq!(rng.index(), N);
    }

    #[test]
    #[should_panic(expected = "requested bit count must be in 1..=32, got 40")]
    fn next_panics_on_bit_count() {
        MersenneTwister::default().next(40);
    }

    #[test]
    fn exported_dimensions() {
        let rng = MersenneTwister::default();
        assert_eq!(rng.state().len(), crate::MT_N);
        assert_eq!(crate::MT_M, 397);
        assert_ne!(crate::MT_M as i32, crate::Lehmer::M);
    }

    #[test]
    fn index_cycles() {
        let mut rng = MersenneTwister::from_seed(1);
        assert_eq!(rng.index(), N);
        rng.next(32);
        assert_eq!(rng.index(), 1);
        for _ in 1..N {
            rng.next(32);
        }
        assert_eq!(rng.index(), N);
        rng.next(32);
        assert_eq!(rng.index(), 1);
    }

    #[test]
    fn reseed_restarts_sequence() {
        let mut rng = MersenneTwister::from_seed(-77);
        let first = (0..700).map(|_| rng.next(32)).collect::<Vec<_>>();
        rng.seed(-77);
        let again = (0..700).map(|_| rng.next(32)).collect::<Vec<_>>();
        assert_eq!(first, again);
    }

    #[test]
    fn f64_in_unit_interval() {
        let mut rng = MersenneTwister::default();
        for _ in 0..1000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn pack() {
        assert_eq!(
            pack_bytes(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06]),
            [0x04030201, 0x00000605],
        );
        assert_eq!(pack_bytes(&[0xff; 4]), [-1]);
        assert!(pack_bytes(&[]).is_empty());
    }
}
