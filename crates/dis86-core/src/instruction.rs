//! Decoded instruction representation.

use crate::Operand;

/// A decoded instruction.
///
/// Immutable once constructed; the decoder never returns a partially
/// filled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Instruction {
    /// Mnemonic string (e.g. "mov").
    pub mnemonic: String,
    /// Destination operand.
    pub dst: Operand,
    /// Source operand.
    pub src: Operand,
}

impl Instruction {
    /// Creates a new instruction.
    pub fn new(mnemonic: impl Into<String>, dst: Operand, src: Operand) -> Self {
        Self {
            mnemonic: mnemonic.into(),
            dst,
            src,
        }
    }
}

impl std::fmt::Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}, {}", self.mnemonic, self.dst, self.src)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::{code, Register};

    #[test]
    fn renders_mnemonic_dst_src() {
        let inst = Instruction::new(
            "mov",
            Operand::reg(Register::word(code::CX)),
            Operand::reg(Register::word(code::BX)),
        );
        assert_eq!(inst.to_string(), "mov cx, bx");
    }
}
