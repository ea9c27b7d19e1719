//! Portable implementation which does not rely on architecture-specific
//! intrinsics.

use crate::{Rounds, State, double_round};

#[inline(always)]
pub(crate) fn rounds<R: Rounds>(state: &mut State) {
    for _ in 0..R::COUNT {
        double_round(state);
    }
}
