use crate::twister::{spread, MAGIC_FACTOR1, N};
use crate::{BitOps, Bits32, MersenneTwister};

impl MersenneTwister {
    /// Reverses [`MersenneTwister::from_seed`], returning the seed if the
    /// state is exactly one produced by it and not yet twisted.
    pub fn unseed(&self) -> Option<i32> {
        const MULT_INV: i32 = 2520285293_u32 as i32; // MAGIC_FACTOR1 * MULT_INV == 1
        debug_assert_eq!(MAGIC_FACTOR1.wrapping_mul(MULT_INV), 1);
        if self.index() != N {
            return None;
        }
        let state = self.state();
        for i in (1..N).rev() {
            let si = state[i].wrapping_sub(i as i32).wrapping_mul(MULT_INV);
            if si != spread(state[i - 1]) {
                return None;
            }
        }
        Some(state[0])
    }

    /// Reverses [`MersenneTwister::temper`].
    pub fn untemper(mut x: i32) -> i32 {
        // Reverse `y ^= y >> 18`
        x = Bits32::xor(x, Bits32::unsigned_shift_right(x, 18));
        // Reverse `y ^= (y << 15) & 0xefc60000`
        for mask in [0x2fc60000, 0xc0000000_u32 as i32] {
            x = Bits32::xor(x, Bits32::and(Bits32::shift_left(x, 15), mask));
        }
        // Reverse `y ^= (y << 7) & 0x9d2c5680`
        for mask in [0x00001680, 0x000c4000, 0x0d200000, 0x90000000_u32 as i32] {
            x = Bits32::xor(x, Bits32::and(Bits32::shift_left(x, 7), mask));
        }
        // Reverse `y ^= y >> 11`
        x = Bits32::xor(x, Bits32::unsigned_shift_right(x, 11));
        Bits32::xor(x, Bits32::unsigned_shift_right(x, 22))
    }
}
