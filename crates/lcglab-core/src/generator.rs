//! Linear congruential generators.
//!
//! A generator owns its running seed: two [`Lcg`] instances never share
//! state, so independent streams can coexist and be tested in isolation.

use serde::Serialize;

/// Parameters of the recurrence `seed' = (multiplier * seed + increment) mod modulus`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LcgParams {
    pub multiplier: u64,
    pub increment: u64,
    pub modulus: u64,
    /// Initial seed the stream starts from.
    pub seed: u64,
}

impl LcgParams {
    /// General-purpose mixed congruential parameterization.
    pub const MIXED: Self = Self {
        multiplier: 101_427,
        increment: 321,
        modulus: 1 << 16,
        seed: 123_456_789,
    };

    /// RANDU, the historically notorious multiplicative parameterization.
    /// Kept for comparison runs precisely because of its poor quality.
    pub const RANDU: Self = Self {
        multiplier: 65_539,
        increment: 0,
        modulus: 1 << 31,
        seed: 123_456_789,
    };
}

/// A linear congruential generator with its own running seed.
#[derive(Debug, Clone)]
pub struct Lcg {
    params: LcgParams,
    seed: u64,
}

impl Lcg {
    pub fn new(params: LcgParams) -> Self {
        Self {
            params,
            seed: params.seed,
        }
    }

    /// Generator with the general-purpose mixed parameterization.
    pub fn mixed() -> Self {
        Self::new(LcgParams::MIXED)
    }

    /// Generator with the RANDU parameterization.
    pub fn randu() -> Self {
        Self::new(LcgParams::RANDU)
    }

    /// The parameterization this stream was built from.
    pub fn params(&self) -> LcgParams {
        self.params
    }

    /// Advance the recurrence once and map the new seed into [0, 1).
    ///
    /// The multiply goes through u128 so no parameterization can overflow.
    pub fn next_value(&mut self) -> f64 {
        let p = self.params;
        let next = (u128::from(p.multiplier) * u128::from(self.seed) + u128::from(p.increment))
            % u128::from(p.modulus);
        self.seed = next as u64;
        self.seed as f64 / p.modulus as f64
    }

    /// Collect the next `n` values of the stream.
    pub fn generate(&mut self, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.next_value()).collect()
    }
}

impl Iterator for Lcg {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }
}
