//! ModR/M byte decoding and effective-address resolution.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use dis86_core::register::code;
use dis86_core::{MemoryRef, Operand, Register, Width};

/// Decoded ModR/M byte.
#[derive(Debug, Clone, Copy)]
pub struct ModRM {
    /// Mod field (2 bits).
    pub mod_: u8,
    /// Reg field (3 bits).
    pub reg: u8,
    /// R/M field (3 bits).
    pub rm: u8,
}

impl ModRM {
    /// Parse a ModR/M byte.
    pub fn parse(byte: u8) -> Self {
        Self {
            mod_: (byte >> 6) & 0x3,
            reg: (byte >> 3) & 0x7,
            rm: byte & 0x7,
        }
    }

    /// Returns true if the r/m field names a register directly (mod=11).
    pub fn is_register(&self) -> bool {
        self.mod_ == 0b11
    }

    /// Returns true for the direct-address escape (mod=00, rm=110).
    pub fn is_direct_address(&self) -> bool {
        self.mod_ == 0b00 && self.rm == 0b110
    }

    /// Returns true if an 8-bit displacement follows.
    pub fn has_disp8(&self) -> bool {
        self.mod_ == 0b01
    }

    /// Returns true if a 16-bit displacement follows.
    pub fn has_disp16(&self) -> bool {
        self.mod_ == 0b10
    }
}

/// Base/index register pair for each rm code. Fixed by the 8086
/// encoding; code 6 (bp) only applies outside the direct-address case.
fn effective_address(rm: u8) -> (Option<Register>, Option<Register>) {
    match rm & 0x7 {
        0b000 => (Some(Register::word(code::BX)), Some(Register::word(code::SI))),
        0b001 => (Some(Register::word(code::BX)), Some(Register::word(code::DI))),
        0b010 => (Some(Register::word(code::BP)), Some(Register::word(code::SI))),
        0b011 => (Some(Register::word(code::BP)), Some(Register::word(code::DI))),
        0b100 => (None, Some(Register::word(code::SI))),
        0b101 => (None, Some(Register::word(code::DI))),
        0b110 => (Some(Register::word(code::BP)), None),
        _ => (Some(Register::word(code::BX)), None),
    }
}

/// Resolve the reg field as a register operand.
pub fn decode_reg(modrm: ModRM, width: Width) -> Operand {
    Operand::Register(Register::new(modrm.reg, width))
}

/// Resolve the r/m field, consuming displacement bytes from the cursor.
///
/// Displacements are sign-extended from their encoded width, matching
/// real 8086 semantics.
pub fn decode_rm(
    cursor: &mut ByteCursor<'_>,
    modrm: ModRM,
    width: Width,
) -> Result<Operand, DecodeError> {
    if modrm.is_register() {
        return Ok(Operand::Register(Register::new(modrm.rm, width)));
    }

    if modrm.is_direct_address() {
        let address = cursor
            .read_u16_le()
            .ok_or(DecodeError::UnexpectedEndOfStream)?;
        return Ok(Operand::Memory(MemoryRef::direct(address)));
    }

    let (base, index) = effective_address(modrm.rm);

    let displacement = if modrm.has_disp8() {
        let byte = cursor.read_u8().ok_or(DecodeError::UnexpectedEndOfStream)?;
        byte as i8 as i32
    } else if modrm.has_disp16() {
        let word = cursor
            .read_u16_le()
            .ok_or(DecodeError::UnexpectedEndOfStream)?;
        word as i16 as i32
    } else {
        0
    };

    Ok(Operand::Memory(MemoryRef::new(base, index, displacement)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fields() {
        let modrm = ModRM::parse(0b11_011_001);
        assert_eq!(modrm.mod_, 0b11);
        assert_eq!(modrm.reg, 0b011);
        assert_eq!(modrm.rm, 0b001);
    }

    #[test]
    fn mod_11_resolves_register_and_consumes_nothing() {
        let mut cursor = ByteCursor::new(&[0xAA]);
        let operand = decode_rm(&mut cursor, ModRM::parse(0b11_000_001), Width::Word).unwrap();
        assert_eq!(operand.to_string(), "cx");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn mod_00_has_no_displacement() {
        let mut cursor = ByteCursor::new(&[]);
        let operand = decode_rm(&mut cursor, ModRM::parse(0b00_000_000), Width::Byte).unwrap();
        assert_eq!(operand.to_string(), "[bx + si]");
    }

    #[test]
    fn direct_address_consumes_two_bytes() {
        let mut cursor = ByteCursor::new(&[0x34, 0x12]);
        let operand = decode_rm(&mut cursor, ModRM::parse(0b00_000_110), Width::Word).unwrap();
        assert_eq!(operand.to_string(), "[4660]");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn disp8_is_sign_extended() {
        let mut cursor = ByteCursor::new(&[0xDB]);
        let operand = decode_rm(&mut cursor, ModRM::parse(0b01_000_001), Width::Word).unwrap();
        assert_eq!(operand.to_string(), "[bx + di - 37]");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn disp16_is_sign_extended() {
        let mut cursor = ByteCursor::new(&[0xFE, 0xFF]);
        let operand = decode_rm(&mut cursor, ModRM::parse(0b10_000_110), Width::Word).unwrap();
        assert_eq!(operand.to_string(), "[bp - 2]");
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn bp_is_a_plain_base_outside_mod_00() {
        // rm=110 with mod=01 means [bp + disp8], not a direct address.
        let mut cursor = ByteCursor::new(&[0x00]);
        let operand = decode_rm(&mut cursor, ModRM::parse(0b01_000_110), Width::Word).unwrap();
        assert_eq!(operand.to_string(), "[bp]");
    }

    #[test]
    fn truncated_displacement_is_an_error() {
        let mut cursor = ByteCursor::new(&[]);
        let err = decode_rm(&mut cursor, ModRM::parse(0b01_000_000), Width::Word).unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedEndOfStream);

        let mut cursor = ByteCursor::new(&[0x01]);
        let err = decode_rm(&mut cursor, ModRM::parse(0b10_000_000), Width::Word).unwrap_err();
        assert_eq!(err, DecodeError::UnexpectedEndOfStream);
    }
}
