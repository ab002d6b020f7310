//! # dis86-disasm
//!
//! Instruction decoder for the 8086 MOV subset.
//!
//! The decoder pulls bytes through a bounds-checked [`ByteCursor`] and
//! produces one [`dis86_core::Instruction`] per call. Supported
//! encodings:
//! - register/memory to/from register (`100010dw`, ModR/M addressing)
//! - immediate to register (`1011wrrr`)

pub mod cursor;
pub mod decoder;
pub mod error;
pub mod modrm;
pub mod opcodes;

pub use cursor::ByteCursor;
pub use decoder::{decode_next, Instructions};
pub use error::DecodeError;
