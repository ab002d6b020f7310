//! Instruction operand types.

use crate::register::{Register, Width};

/// An instruction operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    /// Register operand.
    Register(Register),
    /// Immediate value.
    Immediate(Immediate),
    /// Memory reference.
    Memory(MemoryRef),
}

impl Operand {
    /// Creates a register operand.
    pub fn reg(reg: Register) -> Self {
        Self::Register(reg)
    }

    /// Creates an immediate operand.
    pub fn imm(value: u16, width: Width) -> Self {
        Self::Immediate(Immediate { value, width })
    }

    /// Returns true if this is a register operand.
    pub fn is_register(&self) -> bool {
        matches!(self, Self::Register(_))
    }

    /// Returns true if this is an immediate operand.
    pub fn is_immediate(&self) -> bool {
        matches!(self, Self::Immediate(_))
    }

    /// Returns true if this is a memory operand.
    pub fn is_memory(&self) -> bool {
        matches!(self, Self::Memory(_))
    }
}

/// Immediate value operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Immediate {
    /// The value, zero-extended to u16.
    pub value: u16,
    /// Encoded width (one or two bytes in the instruction stream).
    pub width: Width,
}

/// Memory reference operand.
///
/// Represents an 8086 effective address: `[base + index + disp]`,
/// where each part is optional. A direct address has neither base nor
/// index, only a displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MemoryRef {
    /// Base register (bx or bp), if any.
    pub base: Option<Register>,
    /// Index register (si or di), if any.
    pub index: Option<Register>,
    /// Displacement, sign-extended from its encoded width. Direct
    /// addresses store the unsigned 16-bit address here.
    pub displacement: i32,
}

impl MemoryRef {
    /// Creates a memory reference from base/index registers and a
    /// displacement.
    pub fn new(base: Option<Register>, index: Option<Register>, displacement: i32) -> Self {
        Self {
            base,
            index,
            displacement,
        }
    }

    /// Creates a direct-address reference (mod=00, rm=110).
    pub fn direct(address: u16) -> Self {
        Self {
            base: None,
            index: None,
            displacement: address as i32,
        }
    }
}

impl std::fmt::Display for Operand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Register(reg) => write!(f, "{}", reg.name()),
            Self::Immediate(imm) => write!(f, "{}", imm.value),
            Self::Memory(mem) => {
                write!(f, "[")?;
                let mut has_content = false;

                if let Some(ref base) = mem.base {
                    write!(f, "{}", base.name())?;
                    has_content = true;
                }

                if let Some(ref index) = mem.index {
                    if has_content {
                        write!(f, " + ")?;
                    }
                    write!(f, "{}", index.name())?;
                    has_content = true;
                }

                if !has_content {
                    // Direct address: always rendered, even zero.
                    write!(f, "{}", mem.displacement)?;
                } else if mem.displacement != 0 {
                    if mem.displacement > 0 {
                        write!(f, " + {}", mem.displacement)?;
                    } else {
                        write!(f, " - {}", -mem.displacement)?;
                    }
                }

                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::code;

    #[test]
    fn register_operand_renders_name() {
        let op = Operand::reg(Register::word(code::CX));
        assert_eq!(op.to_string(), "cx");
    }

    #[test]
    fn immediate_renders_decimal() {
        assert_eq!(Operand::imm(12, Width::Byte).to_string(), "12");
        assert_eq!(Operand::imm(4660, Width::Word).to_string(), "4660");
    }

    #[test]
    fn memory_omits_zero_displacement() {
        let mem = MemoryRef::new(
            Some(Register::word(code::BX)),
            Some(Register::word(code::SI)),
            0,
        );
        assert_eq!(Operand::Memory(mem).to_string(), "[bx + si]");
    }

    #[test]
    fn memory_renders_signed_displacement() {
        let plus = MemoryRef::new(
            Some(Register::word(code::BX)),
            Some(Register::word(code::SI)),
            4,
        );
        assert_eq!(Operand::Memory(plus).to_string(), "[bx + si + 4]");

        let minus = MemoryRef::new(
            Some(Register::word(code::BX)),
            Some(Register::word(code::DI)),
            -37,
        );
        assert_eq!(Operand::Memory(minus).to_string(), "[bx + di - 37]");
    }

    #[test]
    fn single_register_effective_address() {
        let mem = MemoryRef::new(None, Some(Register::word(code::SI)), 0);
        assert_eq!(Operand::Memory(mem).to_string(), "[si]");

        let mem = MemoryRef::new(Some(Register::word(code::BP)), None, -2);
        assert_eq!(Operand::Memory(mem).to_string(), "[bp - 2]");
    }

    #[test]
    fn direct_address_always_rendered() {
        assert_eq!(Operand::Memory(MemoryRef::direct(0)).to_string(), "[0]");
        assert_eq!(
            Operand::Memory(MemoryRef::direct(4660)).to_string(),
            "[4660]"
        );
    }

    #[test]
    fn operand_kind_predicates() {
        assert!(Operand::reg(Register::byte(0)).is_register());
        assert!(Operand::imm(1, Width::Byte).is_immediate());
        assert!(Operand::Memory(MemoryRef::direct(0)).is_memory());
    }
}
