//! Pseudorandom number generators whose bit manipulation is computed with
//! integer arithmetic alone.
//!
//! [`Bits16`] and [`Bits32`] implement AND, OR, XOR, complement, shifts, and
//! rotations through addition, subtraction, multiplication, division, and
//! remainder. The [MT19937 Mersenne Twister](http://www.math.sci.hiroshima-u.ac.jp/m-mat/MT/emt.html)
//! is built on [`Bits32`] and reproduces the reference mt19937ar output
//! bit for bit. Two lighter generators, [`Lcg`] and [`Lehmer`], share the
//! derived draws of [`Generator`].
//!
//! None of the generators are cryptographically secure.

mod bitops;
mod error;
mod generator;
mod lcg;
mod lehmer;
mod reverse;
mod twister;

pub use bitops::*;
pub use error::*;
pub use generator::*;
pub use lcg::*;
pub use lehmer::*;
pub use twister::{pack_bytes, MersenneTwister, M as MT_M, N as MT_N};
