
use libc::fd_set;

// View the raw bytes of a set, to check that a call left it untouched.
pub fn fdset_bytes(set: &fd_set) -> &[u8] {
    unsafe {
        std::slice::from_raw_parts(
            (set as *const fd_set).cast::<u8>(),
            std::mem::size_of::<fd_set>(),
        )
    }
}
