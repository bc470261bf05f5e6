//! The Emitter: two calls across the kernel boundary, nothing else.
//!
//! The whole program is a straight-line sequence:
//!
//! ┌────────────────────────────────────────────┐
//! │ write(STDOUT_FILENO, MESSAGE, MESSAGE_LEN) │
//! ├────────────────────────────────────────────┤
//! │ exit(0)                                    │
//! └────────────────────────────────────────────┘
//!
//! On Unix the write goes through libc straight to `write(2)`: file
//! descriptor 1 is standard output by convention, handed to the process by
//! its parent before `main` runs, and released implicitly at process exit.
//! The kernel copies the 14 bytes out of our address space and the call
//! returns; there is no userspace buffering between us and the stream.
//!
//! There is no branching, no loop, no retry. The write result is not
//! checked: whatever the kernel reports, the next step is process exit
//! with status 0.

use crate::message::{MESSAGE, MESSAGE_LEN};

/// Exit status reported on the (only) path through the program.
pub const EXIT_SUCCESS: i32 = 0;

/// Writes the full Message to standard output in one operation.
///
/// The return value of the underlying call is deliberately ignored,
/// matching the original artifact (see DESIGN.md): a short write or a
/// closed descriptor changes nothing about what happens next.
#[cfg(unix)]
#[inline(always)]
pub fn emit() {
    // SAFETY: MESSAGE points to MESSAGE_LEN valid immutable bytes, and
    // fd 1 stays open for the whole process lifetime.
    unsafe {
        let _ = libc::write(
            libc::STDOUT_FILENO,
            MESSAGE.as_ptr() as *const libc::c_void,
            MESSAGE_LEN,
        );
    }
}

/// Fallback for non-Unix targets: same one-shot semantics via std.
#[cfg(not(unix))]
#[inline(always)]
pub fn emit() {
    use std::io::Write;

    let mut out = std::io::stdout();
    let _ = out.write_all(MESSAGE);
    let _ = out.flush();
}

/// Emits the Message, then yields the process exit status.
#[inline(always)]
pub fn run() -> i32 {
    emit();
    EXIT_SUCCESS
}
