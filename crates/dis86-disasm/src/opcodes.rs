//! Opcode family definitions and lookup.
//!
//! 8086 opcode tags vary in width, so the table is ordered widest tag
//! first and scanned in order; the most specific pattern wins.

/// How the bytes following the opcode byte encode operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperandEncoding {
    /// ModR/M byte follows: register to/from register-or-memory,
    /// direction selected by the D bit.
    RegRm,
    /// Register in the opcode byte, immediate data follows.
    RegImm,
}

/// Opcode family table entry.
#[derive(Debug, Clone, Copy)]
pub struct OpcodeFamily {
    /// Mnemonic for every instruction in the family.
    pub mnemonic: &'static str,
    /// Width of the tag in bits.
    pub tag_bits: u8,
    /// Tag value, right-aligned (the top `tag_bits` of the opcode byte).
    pub tag: u8,
    /// Operand encoding used by this family.
    pub encoding: OperandEncoding,
}

/// Known opcode families, widest tag first.
pub static OPCODE_FAMILIES: [OpcodeFamily; 2] = [
    OpcodeFamily {
        mnemonic: "mov",
        tag_bits: 6,
        tag: 0b100010,
        encoding: OperandEncoding::RegRm,
    },
    OpcodeFamily {
        mnemonic: "mov",
        tag_bits: 4,
        tag: 0b1011,
        encoding: OperandEncoding::RegImm,
    },
];

/// Looks up the family whose tag matches the top bits of `byte`.
pub fn lookup(byte: u8) -> Option<&'static OpcodeFamily> {
    OPCODE_FAMILIES
        .iter()
        .find(|family| byte >> (8 - family.tag_bits) == family.tag)
}
