//! # Addressing Modes
//!
//! This module is the addressing-mode catalog: the closed set of 13 modes,
//! and for each one its instruction byte length, its effective-address
//! computation rule, and its canonical operand text form.
//!
//! The byte length is a pure function of the mode alone, independent of the
//! opcode. That is what lets the same catalog drive execution-pointer
//! advancement, disassembly widths and assembly operand widths.

use crate::context::Context;

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the CPU interprets the operand bytes
/// that follow an opcode and how it calculates the effective memory address
/// for the operation.
///
/// # Instruction lengths (including the opcode byte)
///
/// - **1 byte**: Implicit, Invalid
/// - **2 bytes**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **3 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP, and the accumulator forms of the shifts
    Implicit,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10 (load immediate value 0x10 into accumulator)
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80 (load from address 0x0080)
    ZeroPage,

    /// Zero page address indexed by X register.
    ///
    /// Example: LDA $80, X (load from 0x0080 + X, wraps within zero page)
    ZeroPageX,

    /// Zero page address indexed by Y register.
    ///
    /// Example: LDX $80, Y (load from 0x0080 + Y, wraps within zero page)
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// after the instruction.
    ///
    /// Example: BNE -5
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234 (jump to address 0x1234)
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234, X (load from address 0x1234 + X)
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234, Y (load from address 0x1234 + Y)
    AbsoluteY,

    /// Indirect jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC) (jump to the address stored at 0xFFFC/0xFFFD)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40, X) (add X to 0x40 within zero page, read a 16-bit
    /// address from there, load from the result)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40), Y (read a 16-bit address from ZP 0x40, add Y,
    /// load from the result)
    IndirectY,

    /// Unassigned opcode. One byte long, no effective address; the bound
    /// routine performs no state change.
    Invalid,
}

impl AddressingMode {
    /// Total instruction length in bytes for this mode, opcode included.
    pub fn instruction_bytes(self) -> u16 {
        use AddressingMode::*;

        match self {
            Implicit | Invalid => 1,
            Immediate | ZeroPage | ZeroPageX | ZeroPageY | Relative | IndirectX | IndirectY => 2,
            Absolute | AbsoluteX | AbsoluteY | Indirect => 3,
        }
    }

    /// Computes the effective address for an instruction whose operand bytes
    /// begin at `operand_addr`.
    ///
    /// For `Immediate` the operand address itself is the effective address
    /// (the literal lives in the instruction stream). `Implicit` and
    /// `Invalid` have no effective address; they resolve to zero and the
    /// routines bound to those modes ignore it.
    pub fn resolve<C: Context>(self, ctx: &C, operand_addr: u16) -> u16 {
        use AddressingMode::*;

        match self {
            Implicit | Invalid => 0,
            Immediate => operand_addr,
            ZeroPage => u16::from(ctx.peek_byte(operand_addr)),
            ZeroPageX => u16::from(ctx.peek_byte(operand_addr).wrapping_add(ctx.x())),
            ZeroPageY => u16::from(ctx.peek_byte(operand_addr).wrapping_add(ctx.y())),
            Absolute => ctx.peek_word(operand_addr),
            AbsoluteX => ctx.peek_word(operand_addr).wrapping_add(u16::from(ctx.x())),
            AbsoluteY => ctx.peek_word(operand_addr).wrapping_add(u16::from(ctx.y())),
            IndirectX => {
                let zp = ctx.peek_byte(operand_addr).wrapping_add(ctx.x());
                ctx.peek_word(u16::from(zp))
            }
            IndirectY => {
                let base = ctx.peek_word(u16::from(ctx.peek_byte(operand_addr)));
                base.wrapping_add(u16::from(ctx.y()))
            }
            Indirect => ctx.peek_word(ctx.peek_word(operand_addr)),
            Relative => {
                let offset = ctx.peek_byte(operand_addr) as i8;
                // Branch targets are relative to the address after the
                // two-byte instruction.
                operand_addr
                    .wrapping_add(1)
                    .wrapping_add_signed(i16::from(offset))
            }
        }
    }

    /// Formats the canonical operand text for an instruction whose operand
    /// bytes begin at `operand_addr`.
    ///
    /// This is the single source of operand syntax shared by the
    /// disassembler and (in reverse) the assembler. `Implicit` and `Invalid`
    /// produce no operand text.
    pub fn operand_text<C: Context>(self, ctx: &C, operand_addr: u16) -> String {
        use AddressingMode::*;

        match self {
            Implicit | Invalid => String::new(),
            Immediate => format!("#${:02x}", ctx.peek_byte(operand_addr)),
            ZeroPage => format!("${:02x}", ctx.peek_byte(operand_addr)),
            ZeroPageX => format!("${:02x}, X", ctx.peek_byte(operand_addr)),
            ZeroPageY => format!("${:02x}, Y", ctx.peek_byte(operand_addr)),
            Absolute => format!("${:04x}", ctx.peek_word(operand_addr)),
            AbsoluteX => format!("${:04x}, X", ctx.peek_word(operand_addr)),
            AbsoluteY => format!("${:04x}, Y", ctx.peek_word(operand_addr)),
            IndirectX => format!("(${:02x}, X)", ctx.peek_byte(operand_addr)),
            IndirectY => format!("(${:02x}), Y", ctx.peek_byte(operand_addr)),
            Indirect => format!("(${:04x})", ctx.peek_word(operand_addr)),
            Relative => format!("{}", ctx.peek_byte(operand_addr) as i8),
        }
    }
}
