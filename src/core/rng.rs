//! Deterministic random number generation for attack-order tie-breaks.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces an identical sequence on every
//!   platform. The generator is pure integer arithmetic.
//! - **Serializable**: The whole state is one 31-bit word.
//! - **`rand` compatible**: implements `RngCore`/`SeedableRng`, so it can
//!   drive any `rand` consumer.
//!
//! The generator is a linear congruential generator:
//!
//! ```text
//! state' = (1103515245 * state + 12345) mod 2^31
//! next   = state' / (2^31 - 1)
//! ```
//!
//! ```
//! use deck_brawl::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! assert_eq!(a.next_f64(), b.next_f64());
//! ```

use rand::{Error, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;
const MODULUS_MASK: u64 = 0x7FFF_FFFF;
const DIVISOR: f64 = 2_147_483_647.0;

/// Seeded 31-bit linear congruential generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRng {
    state: u32,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    ///
    /// Only the low 31 bits of the seed are kept.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.seed(seed);
        rng
    }

    /// Reset the internal state from a seed.
    pub fn seed(&mut self, value: u64) {
        self.state = (value & MODULUS_MASK) as u32;
    }

    /// Advance the generator and return the raw 31-bit state.
    pub fn next_raw(&mut self) -> u32 {
        let next = (MULTIPLIER * u64::from(self.state) + INCREMENT) & MODULUS_MASK;
        self.state = next as u32;
        self.state
    }

    /// Next float draw, `state / (2^31 - 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / DIVISOR
    }

    /// Coin flip centred on zero: `next_f64() - 0.5`.
    ///
    /// Positive means "the first operand goes after the second".
    pub fn coin_flip(&mut self) -> f64 {
        self.next_f64() - 0.5
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState { state: self.state }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        Self {
            state: state.state & MODULUS_MASK as u32,
        }
    }
}

impl RngCore for GameRng {
    fn next_u32(&mut self) -> u32 {
        // Two 31-bit draws, keeping the high 16 bits of each.
        let hi = self.next_raw() >> 15;
        let lo = self.next_raw() >> 15;
        (hi << 16) | lo
    }

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GameRng {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from(u32::from_le_bytes(seed)))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Serializable RNG state for checkpointing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Current 31-bit generator word.
    pub state: u32,
}
