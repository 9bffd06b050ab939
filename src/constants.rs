//! Platform constants for `fd_set`.
//!
/// ===== Descriptor set capacity =====
///
/// Number of descriptors an `fd_set` can hold.  Valid descriptors are
/// `0..FD_SETSIZE`.
pub const FD_SETSIZE: usize = libc::FD_SETSIZE as usize;

/// Exclusive upper bound on a descriptor, as the `c_int` the C entry
/// points receive.
pub const FD_SET_MAX_FD: libc::c_int = FD_SETSIZE as libc::c_int;

/// Size in bytes of one `fd_set` (128 on Linux and macOS).
pub const FD_SET_BYTES: usize = std::mem::size_of::<libc::fd_set>();
