use tracing::debug;

use crate::{Error, Generator, Result};

/// Parameters of a linear congruential generator,
/// `value = (multiplier * value + increment) % modulus`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcgParams {
    pub multiplier: i32,
    pub increment: i32,
    pub modulus: i32,
}

impl Default for LcgParams {
    fn default() -> Self {
        LcgParams {
            multiplier: 2147483629,
            increment: 2147483587,
            modulus: 2147483647,
        }
    }
}

/// Multiplicative-additive linear congruential generator over wrapping
/// 32-bit arithmetic.
///
/// The product and sum wrap before the remainder is taken, and the remainder
/// keeps the sign of the wrapped sum, so [`Generator::next`] may be negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    params: LcgParams,
    value: i32,
}

impl Lcg {
    pub fn new(multiplier: i32, increment: i32, modulus: i32) -> Result<Self> {
        Lcg::from_params(LcgParams {
            multiplier,
            increment,
            modulus,
        })
    }

    pub fn from_params(params: LcgParams) -> Result<Self> {
        if params.modulus <= 0 {
            return Err(Error::InvalidModulus(params.modulus));
        }
        debug!(
            multiplier = params.multiplier,
            increment = params.increment,
            modulus = params.modulus,
            "constructed lcg"
        );
        Ok(Lcg { params, value: 0 })
    }

    /// Replaces the current value, from which the next draw is computed.
    pub fn seed(&mut self, value: i32) {
        self.value = value;
    }

    #[inline]
    pub fn params(&self) -> LcgParams {
        self.params
    }

    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Lcg {
            params: LcgParams::default(),
            value: 0,
        }
    }
}

impl Generator for Lcg {
    fn next(&mut self) -> i32 {
        let LcgParams {
            multiplier,
            increment,
            modulus,
        } = self.params;
        self.value = multiplier.wrapping_mul(self.value).wrapping_add(increment) % modulus;
        self.value
    }
}
