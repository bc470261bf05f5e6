//! Herald binary: emit the Message, then exit.
//!
//! Usage:
//!   herald
//!
//! Arguments are accepted and ignored; stdin is never read.

fn main() {
    // One write, then process teardown with status 0.
    std::process::exit(herald::emitter::run());
}
