use crate::{CONSTANTS, KEY_WORDS, NONCE_WORDS, STATE_WORDS};
use core::fmt::{self, Debug};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Index of the block counter word.
const COUNTER_INDEX: usize = 12;

/// The 16-word ChaCha state.
///
/// ```text
/// cccccccc  cccccccc  cccccccc  cccccccc
/// kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
/// kkkkkkkk  kkkkkkkk  kkkkkkkk  kkkkkkkk
/// bbbbbbbb  nnnnnnnn  nnnnnnnn  nnnnnnnn
/// ```
///
/// `c` = constant, `k` = key, `b` = block counter, `n` = nonce.
#[allow(missing_copy_implementations)]
#[derive(Clone, PartialEq, Eq)]
pub struct State {
    state: [u32; STATE_WORDS],
}

impl State {
    /// Build the initial state for a block.
    #[must_use]
    pub fn new(key: [u32; KEY_WORDS], nonce: [u32; NONCE_WORDS], counter: u32) -> Self {
        Self {
            state: [
                CONSTANTS[0],
                CONSTANTS[1],
                CONSTANTS[2],
                CONSTANTS[3],
                key[0],
                key[1],
                key[2],
                key[3],
                key[4],
                key[5],
                key[6],
                key[7],
                counter,
                nonce[0],
                nonce[1],
                nonce[2],
            ],
        }
    }

    /// Add `other` onto `self` word by word (wrapping).
    #[inline]
    pub fn add(&mut self, other: &Self) {
        for (s, o) in self.state.iter_mut().zip(other.state.iter()) {
            *s = s.wrapping_add(*o);
        }
    }

    /// Copy of the state words.
    #[inline]
    #[must_use]
    pub const fn words(&self) -> [u32; STATE_WORDS] {
        self.state
    }

    /// Borrow the state words.
    #[inline]
    #[must_use]
    pub const fn as_words(&self) -> &[u32; STATE_WORDS] {
        &self.state
    }

    /// Block counter word.
    #[inline]
    #[must_use]
    pub const fn counter(&self) -> u32 {
        self.state[COUNTER_INDEX]
    }

    #[inline(always)]
    pub(crate) fn words_mut(&mut self) -> &mut [u32; STATE_WORDS] {
        &mut self.state
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("State { .. }")
    }
}

#[cfg(feature = "zeroize")]
impl Drop for State {
    fn drop(&mut self) {
        self.state.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for State {}
