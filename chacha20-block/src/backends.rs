//! Backends running the ChaCha round schedule.
//!
//! Defined in RFC 8439 Section 2.3:
//! <https://tools.ietf.org/html/rfc8439#section-2.3>

use crate::{Rounds, State};
use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(chacha20_backend = "soft")] {
        pub(crate) mod soft;
    } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
        pub(crate) mod soft;
        pub(crate) mod sse2;

        cpufeatures::new!(sse2_cpuid, "sse2");
    } else {
        pub(crate) mod soft;
    }
}

/// Apply `R::COUNT` double rounds to `state` in place.
#[inline]
pub(crate) fn rounds<R: Rounds>(state: &mut State) {
    cfg_if! {
        if #[cfg(chacha20_backend = "soft")] {
            soft::rounds::<R>(state);
        } else if #[cfg(any(target_arch = "x86", target_arch = "x86_64"))] {
            if sse2_cpuid::get() {
                // SAFETY: we have used CPU feature detection to ensure SSE2 is available
                unsafe { sse2::rounds::<R>(state) }
            } else {
                soft::rounds::<R>(state);
            }
        } else {
            soft::rounds::<R>(state);
        }
    }
}
