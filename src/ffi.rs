//! C entry points, declared in `include/select.h`.
//!
//! Unwinding out of an `extern "C"` function aborts the process, and the
//! Rust surface panics on an out-of-range descriptor.  So every entry
//! point checks its arguments first.  A rejected call leaves
//! the set untouched, logs a warning, and `fd_isset` answers `0`.

use libc::{c_int, fd_set};

use crate::fdset;
use crate::sanitize::{get_descriptor, get_fdset, get_fdset_mut};

/// `FD_ZERO(set)`.
///
/// # Safety
///
/// `set` is null or points to a valid `fd_set` not accessed concurrently.
#[no_mangle]
pub unsafe extern "C" fn fd_zero(set: *mut fd_set) {
    log::trace!("fd_zero({:p})", set);
    if let Ok(set) = get_fdset_mut(set, "fd_zero") {
        fdset::clear(set);
    }
}

/// `FD_SET(d, set)`.
///
/// # Safety
///
/// `set` is null or points to a valid `fd_set` not accessed concurrently.
#[no_mangle]
pub unsafe extern "C" fn fd_setter(d: c_int, set: *mut fd_set) {
    log::trace!("fd_setter({}, {:p})", d, set);
    let Ok(set) = get_fdset_mut(set, "fd_setter") else {
        return;
    };
    if let Ok(d) = get_descriptor(d, "fd_setter") {
        fdset::add(d, set);
    }
}

/// `FD_ISSET(d, set)`: `1` if `d` is present, `0` otherwise.
///
/// # Safety
///
/// `set` is null or points to a valid `fd_set` not written concurrently.
#[no_mangle]
pub unsafe extern "C" fn fd_isset(d: c_int, set: *mut fd_set) -> c_int {
    log::trace!("fd_isset({}, {:p})", d, set);
    // Declared non-const in select.h; only read here.
    let Ok(set) = get_fdset(set, "fd_isset") else {
        return 0;
    };
    match get_descriptor(d, "fd_isset") {
        Ok(d) => c_int::from(fdset::contains(d, set)),
        Err(_) => 0,
    }
}

/// `FD_CLR(d, set)`.
///
/// # Safety
///
/// `set` is null or points to a valid `fd_set` not accessed concurrently.
#[no_mangle]
pub unsafe extern "C" fn fd_clr(d: c_int, set: *mut fd_set) {
    log::trace!("fd_clr({}, {:p})", d, set);
    let Ok(set) = get_fdset_mut(set, "fd_clr") else {
        return;
    };
    if let Ok(d) = get_descriptor(d, "fd_clr") {
        fdset::remove(d, set);
    }
}
