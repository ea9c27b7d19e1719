//! Error types.
use core::fmt;

/// The key or nonce byte slice does not have the expected length.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct InvalidLength;

impl fmt::Display for InvalidLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid length of key or nonce")
    }
}

impl core::error::Error for InvalidLength {}
