//! Random password generation
//!
//! Each character is drawn independently and uniformly, with replacement,
//! from the enabled alphabet. There is no class-coverage guarantee: a
//! password generated with digits enabled may still contain no digit.

use rand::rngs::OsRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shortest allowed password
pub const MIN_LENGTH: usize = 6;

/// Longest allowed password
pub const MAX_LENGTH: usize = 32;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Generator settings. Letters are always included; `length` is clamped to
/// `[MIN_LENGTH, MAX_LENGTH]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_numbers: bool,
    pub include_symbols: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 12,
            include_numbers: true,
            include_symbols: true,
        }
    }
}

impl GeneratorConfig {
    /// The enabled alphabet: letters, plus digits and symbols when switched on
    pub fn alphabet(&self) -> Vec<u8> {
        let mut chars = Vec::with_capacity(
            LOWERCASE.len() + UPPERCASE.len() + DIGITS.len() + SYMBOLS.len(),
        );
        chars.extend_from_slice(LOWERCASE);
        chars.extend_from_slice(UPPERCASE);
        if self.include_numbers {
            chars.extend_from_slice(DIGITS);
        }
        if self.include_symbols {
            chars.extend_from_slice(SYMBOLS);
        }
        chars
    }

    fn effective_length(&self) -> usize {
        self.length.clamp(MIN_LENGTH, MAX_LENGTH)
    }
}

/// Generate a password of `config.length` characters, each drawn uniformly
/// at random from the enabled alphabet
pub fn generate(config: &GeneratorConfig) -> String {
    let alphabet = config.alphabet();
    let mut rng = OsRng;

    (0..config.effective_length())
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())] as char)
        .collect()
}
