//! Argument checks for the C entry points.
//!
//! Each helper turns a raw C argument into something the Rust surface can
//! take, or into a negated errno (already logged) when it cannot.

use libc::{c_int, fd_set};

use crate::errno::{syscall_error, Errno};
use crate::fdset::is_valid_descriptor;

/// Turns a set pointer into a mutable reference.
///
/// # Errors
///
/// `-EFAULT` if `set` is null.
///
/// # Safety
///
/// A non-null `set` must point to a live, aligned `fd_set` that nothing
/// else touches for the lifetime `'a`.
pub unsafe fn get_fdset_mut<'a>(set: *mut fd_set, syscall: &str) -> Result<&'a mut fd_set, i32> {
    match set.as_mut() {
        Some(set) => Ok(set),
        None => Err(syscall_error(Errno::EFAULT, syscall, "fd_set pointer is null")),
    }
}

/// Turns a set pointer into a shared reference.
///
/// # Errors
///
/// `-EFAULT` if `set` is null.
///
/// # Safety
///
/// A non-null `set` must point to a live, aligned `fd_set` that is not
/// written for the lifetime `'a`.
pub unsafe fn get_fdset<'a>(set: *const fd_set, syscall: &str) -> Result<&'a fd_set, i32> {
    match set.as_ref() {
        Some(set) => Ok(set),
        None => Err(syscall_error(Errno::EFAULT, syscall, "fd_set pointer is null")),
    }
}

/// Checks that `descriptor` has a bit in an `fd_set`.
///
/// # Errors
///
/// `-EBADF` if `descriptor` is negative or not below `FD_SETSIZE`.
pub fn get_descriptor(descriptor: c_int, syscall: &str) -> Result<c_int, i32> {
    if is_valid_descriptor(descriptor) {
        return Ok(descriptor);
    }
    Err(syscall_error(
        Errno::EBADF,
        syscall,
        "descriptor is outside of the fd_set range",
    ))
}
