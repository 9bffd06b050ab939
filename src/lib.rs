//! The POSIX descriptor-set macros as plain callable functions.
//!
//! `FD_ZERO`, `FD_SET`, `FD_ISSET` and `FD_CLR` are macros in C, so a
//! runtime that can only call symbols (a Wasm host, a foreign function
//! interface, ...) has no way to reach them.  This crate re-exposes the
//! four of them twice:
//!
//! * [`fdset`] is the Rust surface: safe free functions over a
//!   caller-owned `libc::fd_set`.
//! * [`ffi`] is the C surface: `fd_zero`, `fd_setter`, `fd_isset` and
//!   `fd_clr`, exported unmangled from the `cdylib` and declared in
//!   `include/select.h`.
//!
//! The set itself always belongs to the caller.  Nothing here allocates,
//! frees or remembers anything between calls; the resulting set is meant
//! to be handed to `select(2)`, which this crate does not wrap.

// ********************** CLIPPY DISCUSSION **************************** //
// Same lint setup as fdtables: everything pedantic is a warning during
// development, CI decides what is fatal.
#![warn(clippy::all, missing_docs, clippy::pedantic)]
// libc::FD_SETSIZE is a usize on some targets and a c_int on others, so
// the casts that normalize it look unnecessary on one of them.
#![allow(clippy::unnecessary_cast)]
// ********************* END CLIPPY DISCUSSION ************************* //

pub mod constants;
pub mod errno;
pub mod fdset;
pub mod ffi;
pub mod sanitize;

#[cfg(test)]
mod tests;

pub use constants::{FD_SETSIZE, FD_SET_BYTES, FD_SET_MAX_FD};
pub use errno::{syscall_error, Errno};
pub use fdset::{add, clear, contains, init_fd_set, is_valid_descriptor, remove};
