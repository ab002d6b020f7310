//! 8086 MOV-family instruction decoder.

use crate::cursor::ByteCursor;
use crate::error::DecodeError;
use crate::modrm::{decode_reg, decode_rm, ModRM};
use crate::opcodes::{self, OperandEncoding};
use dis86_core::{Instruction, Operand, Register, Width};

/// Decode the next instruction from the cursor.
///
/// On success the cursor sits after the last byte of the instruction.
/// On failure no partial instruction is returned and the cursor stops
/// where the failure was detected; an unrecognized opcode consumes
/// only the opcode byte itself.
pub fn decode_next(cursor: &mut ByteCursor<'_>) -> Result<Instruction, DecodeError> {
    let b0 = cursor.read_u8().ok_or(DecodeError::UnexpectedEndOfStream)?;
    let family = opcodes::lookup(b0).ok_or(DecodeError::UnrecognizedOpcode(b0))?;

    match family.encoding {
        OperandEncoding::RegRm => {
            let d_bit = (b0 >> 1) & 1;
            let width = Width::from_w_bit(b0);

            let modrm_byte = cursor.read_u8().ok_or(DecodeError::UnexpectedEndOfStream)?;
            let modrm = ModRM::parse(modrm_byte);

            let reg_operand = decode_reg(modrm, width);
            let rm_operand = decode_rm(cursor, modrm, width)?;

            let (dst, src) = if d_bit == 1 {
                (reg_operand, rm_operand)
            } else {
                (rm_operand, reg_operand)
            };

            Ok(Instruction::new(family.mnemonic, dst, src))
        }

        OperandEncoding::RegImm => {
            let width = Width::from_w_bit(b0 >> 3);
            let reg = Register::new(b0 & 0x7, width);

            let value = match width {
                Width::Byte => cursor
                    .read_u8()
                    .ok_or(DecodeError::UnexpectedEndOfStream)?
                    as u16,
                Width::Word => cursor
                    .read_u16_le()
                    .ok_or(DecodeError::UnexpectedEndOfStream)?,
            };

            Ok(Instruction::new(
                family.mnemonic,
                Operand::reg(reg),
                Operand::imm(value, width),
            ))
        }
    }
}

/// Iterator over the instructions in a byte buffer.
///
/// Yields decoded instructions until the buffer is exhausted. After
/// the first error the iterator stops: the decoder performs no
/// resynchronization, so instruction boundaries past an undecodable
/// byte are unknown.
pub struct Instructions<'a> {
    cursor: ByteCursor<'a>,
    failed: bool,
}

impl<'a> Instructions<'a> {
    /// Creates an iterator over `bytes`.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: ByteCursor::new(bytes),
            failed: false,
        }
    }

    /// Byte offset of the next undecoded byte.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl Iterator for Instructions<'_> {
    type Item = Result<Instruction, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.cursor.has_remaining() {
            return None;
        }
        let result = decode_next(&mut self.cursor);
        if result.is_err() {
            self.failed = true;
        }
        Some(result)
    }
}
