//! Errno values for the checks done at the C boundary.

// Let's not have clippy warn for EBADF, etc.
#![allow(clippy::upper_case_acronyms)]

/// The errors a C entry point can run into.  The discriminants are the
/// Linux errno numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Errno {
    /// Descriptor is negative or not below `FD_SETSIZE`.
    EBADF = 9, // Bad file number
    /// Set pointer is null.
    EFAULT = 14, // Bad address
}

/// Logs a rejected call and returns the negated errno, the same shape a
/// syscall return value has.
pub fn syscall_error(e: Errno, syscall: &str, message: &str) -> i32 {
    log::warn!("{}: {} ({:?})", syscall, message, e);
    -(e as i32)
}
