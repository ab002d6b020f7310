//! 8086 register representation.

/// Operand width, selected by the W bit of the opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Width {
    /// 8-bit operands (W=0).
    Byte,
    /// 16-bit operands (W=1).
    Word,
}

impl Width {
    /// Selects the width from the low bit of `w`.
    pub fn from_w_bit(w: u8) -> Self {
        if w & 1 == 1 {
            Self::Word
        } else {
            Self::Byte
        }
    }

    /// Returns the width in bits.
    pub fn bits(&self) -> u16 {
        match self {
            Self::Byte => 8,
            Self::Word => 16,
        }
    }
}

/// An 8086 general purpose register.
///
/// Identified by its 3-bit encoding in the reg/rm fields plus the
/// operand width; the same code names a different register in each
/// width bank (e.g. code 1 is `cl` or `cx`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Register {
    /// 3-bit register code as encoded in the instruction.
    pub code: u8,
    /// Width bank the code is resolved in.
    pub width: Width,
}

// 8086 register codes as they appear in the reg and rm fields.
pub mod code {
    pub const AX: u8 = 0;
    pub const CX: u8 = 1;
    pub const DX: u8 = 2;
    pub const BX: u8 = 3;
    pub const SP: u8 = 4;
    pub const BP: u8 = 5;
    pub const SI: u8 = 6;
    pub const DI: u8 = 7;
}

impl Register {
    /// Creates a register from a 3-bit code and a width.
    pub fn new(code: u8, width: Width) -> Self {
        Self {
            code: code & 0x7,
            width,
        }
    }

    /// Creates a 16-bit register.
    pub fn word(code: u8) -> Self {
        Self::new(code, Width::Word)
    }

    /// Creates an 8-bit register.
    pub fn byte(code: u8) -> Self {
        Self::new(code, Width::Byte)
    }

    /// Returns the canonical name for this register.
    ///
    /// The two banks are fixed by the 8086 encoding; the ordering here
    /// must not change.
    pub fn name(&self) -> &'static str {
        match (self.width, self.code) {
            (Width::Byte, 0b000) => "al",
            (Width::Byte, 0b001) => "cl",
            (Width::Byte, 0b010) => "dl",
            (Width::Byte, 0b011) => "bl",
            (Width::Byte, 0b100) => "ah",
            (Width::Byte, 0b101) => "ch",
            (Width::Byte, 0b110) => "dh",
            (Width::Byte, 0b111) => "bh",

            (Width::Word, 0b000) => "ax",
            (Width::Word, 0b001) => "cx",
            (Width::Word, 0b010) => "dx",
            (Width::Word, 0b011) => "bx",
            (Width::Word, 0b100) => "sp",
            (Width::Word, 0b101) => "bp",
            (Width::Word, 0b110) => "si",
            (Width::Word, 0b111) => "di",

            _ => "unknown",
        }
    }
}

impl std::fmt::Display for Register {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
