//! Sets built through both surfaces, handed to the real select(2).

use cselect::ffi::{fd_clr, fd_isset, fd_setter, fd_zero};
use cselect::{add, contains, init_fd_set};
use libc::{c_int, fd_set};
use std::ptr;

// Helper functions:

/// A fresh pipe, closed again when dropped.
struct Pipe {
    rd: c_int,
    wr: c_int,
}

impl Pipe {
    fn new() -> Pipe {
        let mut fds = [0 as c_int; 2];
        assert_eq!(unsafe { libc::pipe(fds.as_mut_ptr()) }, 0, "pipe() failed");
        Pipe {
            rd: fds[0],
            wr: fds[1],
        }
    }

    fn write_byte(&self) {
        let byte = [b'x'];
        let n = unsafe { libc::write(self.wr, byte.as_ptr().cast(), 1) };
        assert_eq!(n, 1);
    }
}

impl Drop for Pipe {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.rd);
            libc::close(self.wr);
        }
    }
}

/// select() with a zero timeout, so the test never blocks.
fn poll_select(nfds: c_int, readfds: *mut fd_set, writefds: *mut fd_set) -> c_int {
    let mut timeout = libc::timeval {
        tv_sec: 0,
        tv_usec: 0,
    };
    unsafe { libc::select(nfds, readfds, writefds, ptr::null_mut(), &mut timeout) }
}

#[test]
fn test_select_reports_readable_pipe() {
    let pipe = Pipe::new();
    let nfds = pipe.rd.max(pipe.wr) + 1;

    // Nothing written yet: select leaves the read set empty.
    let mut readfds = init_fd_set();
    add(pipe.rd, &mut readfds);
    assert_eq!(poll_select(nfds, &mut readfds, ptr::null_mut()), 0);
    assert!(!contains(pipe.rd, &readfds));

    pipe.write_byte();

    let mut readfds = init_fd_set();
    add(pipe.rd, &mut readfds);
    assert_eq!(poll_select(nfds, &mut readfds, ptr::null_mut()), 1);
    assert!(contains(pipe.rd, &readfds));
}

#[test]
fn test_select_with_c_entry_points() {
    let pipe = Pipe::new();
    let nfds = pipe.rd.max(pipe.wr) + 1;

    let mut readfds = init_fd_set();
    let mut writefds = init_fd_set();
    unsafe {
        fd_zero(&mut readfds);
        fd_zero(&mut writefds);
        fd_setter(pipe.rd, &mut readfds);
        fd_setter(pipe.wr, &mut writefds);
        // Asking about the read end for writing is pointless, drop it again.
        fd_setter(pipe.rd, &mut writefds);
        fd_clr(pipe.rd, &mut writefds);
    }

    // An empty pipe is writable but not readable.
    assert_eq!(poll_select(nfds, &mut readfds, &mut writefds), 1);
    unsafe {
        assert_eq!(fd_isset(pipe.rd, &mut readfds), 0);
        assert_eq!(fd_isset(pipe.wr, &mut writefds), 1);
        assert_eq!(fd_isset(pipe.rd, &mut writefds), 0);
    }
}

#[test]
fn test_select_only_keeps_ready_members() {
    let quiet = Pipe::new();
    let busy = Pipe::new();
    busy.write_byte();
    let nfds = [quiet.rd, quiet.wr, busy.rd, busy.wr]
        .into_iter()
        .max()
        .unwrap()
        + 1;

    let mut readfds = init_fd_set();
    add(quiet.rd, &mut readfds);
    add(busy.rd, &mut readfds);
    assert_eq!(poll_select(nfds, &mut readfds, ptr::null_mut()), 1);
    assert!(contains(busy.rd, &readfds));
    assert!(!contains(quiet.rd, &readfds));
}
