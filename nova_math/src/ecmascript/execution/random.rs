// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The per-agent `Math.random` generator: a 48-bit linear congruential
//! generator with the same constants and seed scrambling as
//! `java.util.Random`, so a given seed yields a published sequence.

use rand::RngCore;

pub const MULTIPLIER: u64 = 0x5_DEEC_E66D;
pub const ADDEND: u64 = 0xB;
pub const MASK: u64 = (1 << 48) - 1;

/// 2^53, the number of distinct doubles `next_double` can produce.
const DOUBLE_SCALE: f64 = (1u64 << 53) as f64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathRandom {
    state: u64,
}

impl MathRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            state: Self::scramble(seed),
        }
    }

    #[inline]
    fn scramble(seed: u64) -> u64 {
        (seed ^ MULTIPLIER) & MASK
    }

    pub fn set_seed(&mut self, seed: u64) {
        self.state = Self::scramble(seed);
    }

    /// The current 48-bit state.
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Advances the state by one step and returns its top `bits` bits.
    #[inline]
    pub fn next_bits(&mut self, bits: u32) -> u64 {
        debug_assert!((1..=48).contains(&bits));
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(ADDEND)
            & MASK;
        self.state >> (48 - bits)
    }

    /// A double in `[0, 1)` built from two steps: 26 high bits and 27 low
    /// bits of a 53-bit mantissa.
    #[inline]
    pub fn next_double(&mut self) -> f64 {
        let high = self.next_bits(26);
        let low = self.next_bits(27);
        ((high << 27) + low) as f64 / DOUBLE_SCALE
    }
}

impl RngCore for MathRandom {
    fn next_u32(&mut self) -> u32 {
        self.next_bits(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let high = self.next_bits(32);
        let low = self.next_bits(32);
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
