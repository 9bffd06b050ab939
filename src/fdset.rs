//! Callable versions of `FD_ZERO`, `FD_SET`, `FD_ISSET` and `FD_CLR`.
//!
//! Each function is a direct pass-through to the `libc` crate's version of
//! the macro.  The libc versions are `extern "C"`, so a bounds-check panic
//! inside them cannot unwind and aborts the process instead.  The
//! descriptor is therefore asserted in range here first, which turns a bad
//! descriptor into an ordinary panic.

use libc::{c_int, fd_set};
use std::mem;

use crate::constants::FD_SETSIZE;

/// Returns a new, empty `fd_set`.  The value lives wherever the caller
/// puts it.
#[must_use] // must use the return value if you call it.
pub fn init_fd_set() -> fd_set {
    let raw_fd_set: fd_set;
    // SAFETY: FD_ZERO writes every word of the set before assume_init.
    unsafe {
        let mut this_fd_set = mem::MaybeUninit::<fd_set>::uninit();
        libc::FD_ZERO(this_fd_set.as_mut_ptr());
        raw_fd_set = this_fd_set.assume_init();
    }
    raw_fd_set
}

/// Marks every descriptor absent (`FD_ZERO`).
pub fn clear(set: &mut fd_set) {
    // SAFETY: set is a valid &mut fd_set.
    unsafe { libc::FD_ZERO(set) }
}

/// Marks `descriptor` present (`FD_SET`).
///
/// # Panics
///
/// If `descriptor` is outside `0..FD_SETSIZE`.
pub fn add(descriptor: c_int, set: &mut fd_set) {
    assert_in_range(descriptor);
    // SAFETY: set is a valid &mut fd_set and descriptor is in range.
    unsafe { libc::FD_SET(descriptor, set) }
}

/// Reports whether `descriptor` is present (`FD_ISSET`).
///
/// # Panics
///
/// Same as [`add`] for out-of-range descriptors.
#[must_use]
pub fn contains(descriptor: c_int, set: &fd_set) -> bool {
    assert_in_range(descriptor);
    // SAFETY: set is a valid &fd_set and descriptor is in range.
    unsafe { libc::FD_ISSET(descriptor, set) }
}

/// Marks `descriptor` absent (`FD_CLR`).
///
/// # Panics
///
/// Same as [`add`] for out-of-range descriptors.
pub fn remove(descriptor: c_int, set: &mut fd_set) {
    assert_in_range(descriptor);
    // SAFETY: set is a valid &mut fd_set and descriptor is in range.
    unsafe { libc::FD_CLR(descriptor, set) }
}

/// True if `descriptor` has a bit in an `fd_set`.
#[must_use]
pub fn is_valid_descriptor(descriptor: c_int) -> bool {
    usize::try_from(descriptor).is_ok_and(|fd| fd < FD_SETSIZE)
}

fn assert_in_range(descriptor: c_int) {
    assert!(
        is_valid_descriptor(descriptor),
        "descriptor {} is outside of 0..{}",
        descriptor,
        FD_SETSIZE
    );
}
