//! Bitwise operations on fixed-width words, computed with only addition,
//! subtraction, multiplication, division, and remainder.
//!
//! AND is evaluated a nibble at a time through [`AND_TABLE`], and OR and XOR
//! are derived from it algebraically. Shifts become multiplication or
//! division by a power of two, with the sign bit moved out of the way first
//! so that truncating division only ever sees a non-negative dividend.

/// `AND_TABLE[hi * 16 + lo]` is the AND of the nibbles `hi` and `lo`.
pub const AND_TABLE: [u8; 256] = and_table();

const fn and_table() -> [u8; 256] {
    let mut table = [0; 256];
    let mut i = 0;
    while i < 256 {
        let (mut hi, mut lo) = (i / 16, i % 16);
        let (mut bit, mut and) = (1, 0);
        while bit < 16 {
            and += (hi % 2) * (lo % 2) * bit;
            hi /= 2;
            lo /= 2;
            bit *= 2;
        }
        table[i] = and as u8;
        i += 1;
    }
    table
}

/// Bitwise primitives over a two's-complement word of `WIDTH` bits.
///
/// Shift amounts must be in `0..=WIDTH`; larger amounts are a contract
/// violation and panic. Rotations accept any amount.
pub trait BitOps {
    type Word: Copy;
    const WIDTH: u32;

    fn and(a: Self::Word, b: Self::Word) -> Self::Word;
    fn or(a: Self::Word, b: Self::Word) -> Self::Word;
    fn xor(a: Self::Word, b: Self::Word) -> Self::Word;
    /// One's complement, `!a`.
    fn complement(a: Self::Word) -> Self::Word;
    fn shift_left(a: Self::Word, n: u32) -> Self::Word;
    /// Logical shift right, filling with zeros.
    fn unsigned_shift_right(a: Self::Word, n: u32) -> Self::Word;
    /// Arithmetic shift right, filling with copies of the sign bit.
    fn signed_shift_right(a: Self::Word, n: u32) -> Self::Word;

    fn rotate_left(a: Self::Word, n: u32) -> Self::Word {
        let n = n % Self::WIDTH;
        Self::or(
            Self::shift_left(a, n),
            Self::unsigned_shift_right(a, Self::WIDTH - n),
        )
    }

    fn rotate_right(a: Self::Word, n: u32) -> Self::Word {
        let n = n % Self::WIDTH;
        Self::or(
            Self::unsigned_shift_right(a, n),
            Self::shift_left(a, Self::WIDTH - n),
        )
    }
}

macro_rules! bit_ops(($(#[$attr:meta])* $Bits:ident, $Word:ty, $width:literal) => {
    $(#[$attr])*
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct $Bits;

    impl $Bits {
        /// `POW[n]` is `2^n` truncated to the word, so the last entry is the
        /// minimum word value.
        pub const POW: [$Word; $width] = {
            let mut pow: [$Word; $width] = [1; $width];
            let mut i = 1;
            while i < $width {
                pow[i] = pow[i - 1].wrapping_mul(2);
                i += 1;
            }
            pow
        };

        #[inline]
        fn check_shift(n: u32) {
            assert!(n <= $width, "shift amount {n} exceeds word width {}", $width);
        }
    }

    impl BitOps for $Bits {
        type Word = $Word;
        const WIDTH: u32 = $width;

        fn and(mut a: $Word, mut b: $Word) -> $Word {
            let sign = a < 0 && b < 0;
            if a < 0 {
                a = a.wrapping_add(<$Word>::MIN);
            }
            if b < 0 {
                b = b.wrapping_add(<$Word>::MIN);
            }
            let mut r: $Word = 0;
            for i in 0..$width / 4 {
                let nibble = AND_TABLE[(a % 16 * 16 + b % 16) as usize];
                r += <$Word>::from(nibble) * Self::POW[4 * i];
                a /= 16;
                b /= 16;
            }
            if sign {
                r + <$Word>::MIN
            } else {
                r
            }
        }

        fn or(a: $Word, b: $Word) -> $Word {
            let and = Self::and(a, b);
            // (a ^ b) + (a & b)
            a.wrapping_add(b).wrapping_sub(and)
        }

        fn xor(a: $Word, b: $Word) -> $Word {
            a.wrapping_add(b).wrapping_sub(Self::and(a, b).wrapping_mul(2))
        }

        #[inline]
        fn complement(a: $Word) -> $Word {
            <$Word>::wrapping_sub(-1, a)
        }

        fn shift_left(a: $Word, n: u32) -> $Word {
            Self::check_shift(n);
            if n == $width {
                0
            } else {
                a.wrapping_mul(Self::POW[n as usize])
            }
        }

        fn unsigned_shift_right(a: $Word, n: u32) -> $Word {
            Self::check_shift(n);
            let n = n as usize;
            if n == 0 {
                a
            } else if n == $width {
                0
            } else if a < 0 {
                // Shift without the sign bit, then put it back where it
                // lands after the shift.
                a.wrapping_add(<$Word>::MIN) / Self::POW[n] + Self::POW[$width - 1 - n]
            } else {
                a / Self::POW[n]
            }
        }

        fn signed_shift_right(a: $Word, n: u32) -> $Word {
            Self::check_shift(n);
            let n = n as usize;
            if n >= $width - 1 {
                if a < 0 {
                    -1
                } else {
                    0
                }
            } else if n == 0 {
                a
            } else if a < 0 {
                a.wrapping_add(<$Word>::MIN) / Self::POW[n] - Self::POW[$width - 1 - n]
            } else {
                a / Self::POW[n]
            }
        }
    }
});

bit_ops!(
    /// Bitwise operations on 16-bit words.
    Bits16,
    i16,
    16
);
bit_ops!(
    /// Bitwise operations on 32-bit words.
    Bits32,
    i32,
    32
);
