//! Distinguishing features of ChaCha variants.
//!
//! The variants only differ in how many rounds the block function runs.

/// Number of rounds performed by a ChaCha variant
pub trait Rounds: Copy {
    /// Number of double rounds (half the round count)
    const COUNT: usize;
}

/// 8-rounds
#[derive(Copy, Clone, Debug)]
pub struct R8;

impl Rounds for R8 {
    const COUNT: usize = 4;
}

/// 12-rounds
#[derive(Copy, Clone, Debug)]
pub struct R12;

impl Rounds for R12 {
    const COUNT: usize = 6;
}

/// 20-rounds
#[derive(Copy, Clone, Debug)]
pub struct R20;

impl Rounds for R20 {
    const COUNT: usize = 10;
}
