//! # dis86-core
//!
//! Core types for the dis86 disassembler. This crate defines the
//! register, operand, and instruction representations for the 8086
//! MOV subset, along with their textual rendering.

pub mod instruction;
pub mod operand;
pub mod register;

pub use instruction::Instruction;
pub use operand::{Immediate, MemoryRef, Operand};
pub use register::{Register, Width};
