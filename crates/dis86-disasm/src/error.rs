//! Decode error types.

use thiserror::Error;

/// Error type for instruction decoding.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A multi-byte instruction began decoding but the stream ended
    /// before all required bytes were available.
    #[error("instruction stream ended mid-instruction")]
    UnexpectedEndOfStream,

    /// The first byte matched no known opcode family.
    #[error("unrecognized opcode byte {0:#04x}")]
    UnrecognizedOpcode(u8),
}
