//! The ChaCha20 block function as described in [RFC 7539] (obsoleted by
//! [RFC 8439], which leaves the block function unchanged).
//!
//! This crate computes exactly one 512-bit keystream block from a 256-bit
//! key, a 96-bit nonce and a 32-bit block counter. Everything is expressed
//! over 32-bit words: callers unpack key and nonce bytes into words before
//! calling [`block`], and serialize the result with [`to_le_bytes`] when
//! they need bytes. Generating a longer keystream (incrementing the counter
//! every 64 bytes) and XORing it with data are left to the caller.
//!
//! # Usage
//!
//! ```
//! use chacha20_block::{block, key_words, nonce_words, to_le_bytes};
//! use hex_literal::hex;
//!
//! let key = key_words(&hex!(
//!     "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f"
//! ))?;
//! let nonce = nonce_words(&hex!("000000090000004a00000000"))?;
//!
//! let words = block(key, nonce, 1);
//! assert_eq!(words[0], 0xe4e7_f110);
//!
//! let bytes = to_le_bytes(words);
//! assert_eq!(&bytes[..4], &hex!("10f1e7e4"));
//! # Ok::<(), chacha20_block::InvalidLength>(())
//! ```
//!
//! # Reduced-round variants
//!
//! [`block_with_rounds`] runs the same pipeline with a different round
//! count, selected by one of the [`R8`], [`R12`] or [`R20`] markers.
//! [`block`] is `block_with_rounds::<R20>`.
//!
//! # Backends
//!
//! On `x86`/`x86_64` the round schedule runs on SSE2 registers when the CPU
//! supports it. The portable backend can be forced with:
//!
//! ```text
//! RUSTFLAGS='--cfg chacha20_backend="soft"'
//! ```
//!
//! # Security
//!
//! The `zeroize` feature wipes every [`State`] when it is dropped. Beyond
//! that, the implementation offers no side-channel protection other than
//! what constant-time add/xor/rotate arithmetic naturally provides.
//!
//! [RFC 7539]: https://tools.ietf.org/html/rfc7539
//! [RFC 8439]: https://tools.ietf.org/html/rfc8439

#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]

mod backends;
mod encoding;
mod errors;
mod state;
mod variants;

pub use crate::{
    encoding::{key_words, nonce_words, to_le_bytes},
    errors::InvalidLength,
    state::State,
    variants::{R8, R12, R20, Rounds},
};

#[cfg(feature = "zeroize")]
pub use zeroize;

/// Number of 32-bit words in the ChaCha state
pub const STATE_WORDS: usize = 16;

/// Number of 32-bit words in a ChaCha key
pub const KEY_WORDS: usize = 8;

/// Number of 32-bit words in a ChaCha nonce (IETF variant)
pub const NONCE_WORDS: usize = 3;

/// Size of a ChaCha key in bytes
pub const KEY_SIZE: usize = KEY_WORDS * 4;

/// Size of a ChaCha nonce in bytes
pub const NONCE_SIZE: usize = NONCE_WORDS * 4;

/// Size of a keystream block in bytes
pub const BLOCK_SIZE: usize = STATE_WORDS * 4;

/// State initialization constant ("expand 32-byte k")
pub const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// Compute the ChaCha20 block for `key`, `nonce` and `counter`.
///
/// Returns the 16 output words; use [`to_le_bytes`] to obtain the 64-byte
/// keystream block.
#[inline]
#[must_use]
pub fn block(key: [u32; KEY_WORDS], nonce: [u32; NONCE_WORDS], counter: u32) -> [u32; STATE_WORDS] {
    block_with_rounds::<R20>(key, nonce, counter)
}

/// Compute a ChaCha block with `R::COUNT` double rounds.
///
/// The permuted working state is added word-by-word onto a second,
/// untouched copy of the input state. Without this feed-forward the output
/// could be run backwards to recover the key.
#[must_use]
pub fn block_with_rounds<R: Rounds>(
    key: [u32; KEY_WORDS],
    nonce: [u32; NONCE_WORDS],
    counter: u32,
) -> [u32; STATE_WORDS] {
    let mut original = State::new(key, nonce, counter);
    let mut working = State::new(key, nonce, counter);

    backends::rounds::<R>(&mut working);

    original.add(&working);
    original.words()
}

/// One column round followed by one diagonal round.
#[inline]
pub fn double_round(state: &mut State) {
    let [x0, x1, x2, x3, x4, x5, x6, x7, x8, x9, x10, x11, x12, x13, x14, x15] =
        state.words_mut();

    // column rounds
    quarter_round(x0, x4, x8, x12);
    quarter_round(x1, x5, x9, x13);
    quarter_round(x2, x6, x10, x14);
    quarter_round(x3, x7, x11, x15);

    // diagonal rounds
    quarter_round(x0, x5, x10, x15);
    quarter_round(x1, x6, x11, x12);
    quarter_round(x2, x7, x8, x13);
    quarter_round(x3, x4, x9, x14);
}

/// The ChaCha quarter round function
#[inline(always)]
#[allow(clippy::many_single_char_names)]
pub fn quarter_round(a: &mut u32, b: &mut u32, c: &mut u32, d: &mut u32) {
    *a = a.wrapping_add(*b);
    *d ^= *a;
    *d = rotate_left(*d, 16);

    *c = c.wrapping_add(*d);
    *b ^= *c;
    *b = rotate_left(*b, 12);

    *a = a.wrapping_add(*b);
    *d ^= *a;
    *d = rotate_left(*d, 8);

    *c = c.wrapping_add(*d);
    *b ^= *c;
    *b = rotate_left(*b, 7);
}

/// Rotate `x` left by `n` bits.
///
/// # Panics
///
/// If `n` is not in `1..=31`. The complementary shift `32 - n` is only a
/// valid shift amount in that range.
#[inline(always)]
#[must_use]
pub const fn rotate_left(x: u32, n: u8) -> u32 {
    assert!(n != 0 && n < 32, "rotation amount must be in 1..=31");
    (x << n) | (x >> (32 - n))
}
