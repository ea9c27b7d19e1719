//! Little-endian conversions between bytes and ChaCha words.

use crate::{BLOCK_SIZE, InvalidLength, KEY_WORDS, NONCE_WORDS, STATE_WORDS};

/// Serialize block output words into a 64-byte keystream block.
///
/// Word `i` is written least-significant byte first at `[4 * i, 4 * i + 4)`.
#[inline]
#[must_use]
pub fn to_le_bytes(state: [u32; STATE_WORDS]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    for (chunk, val) in block.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&val.to_le_bytes());
    }
    block
}

/// Unpack a 32-byte key into little-endian words.
///
/// # Errors
///
/// Returns [`InvalidLength`] if `key` is not exactly [`KEY_SIZE`][crate::KEY_SIZE] bytes.
#[inline]
pub fn key_words(key: &[u8]) -> Result<[u32; KEY_WORDS], InvalidLength> {
    le_words(key)
}

/// Unpack a 12-byte nonce into little-endian words.
///
/// # Errors
///
/// Returns [`InvalidLength`] if `nonce` is not exactly [`NONCE_SIZE`][crate::NONCE_SIZE] bytes.
#[inline]
pub fn nonce_words(nonce: &[u8]) -> Result<[u32; NONCE_WORDS], InvalidLength> {
    le_words(nonce)
}

fn le_words<const N: usize>(bytes: &[u8]) -> Result<[u32; N], InvalidLength> {
    if bytes.len() != N * 4 {
        return Err(InvalidLength);
    }

    let mut words = [0u32; N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(words)
}
