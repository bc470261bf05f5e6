//! Herald - Minimal One-Shot Emitter
//!
//! Design principles:
//! - Fixed Payload: 14 bytes, baked into the binary at compile time
//! - Single Syscall: one `write(2)`, no buffering layer in between
//! - No Error Path: the write result is never inspected
//! - No Input: arguments and stdin are never read

pub mod emitter;
pub mod message;
