//! # Disassembler
//!
//! Converts machine code in a [`Context`] back into assembly text, one
//! instruction at a time. Operand syntax comes from the addressing-mode
//! catalog, the same table the assembler parses against, so the text
//! encoding is byte-for-byte reversible.
//!
//! Disassembly never fails: an unassigned opcode byte is a valid *output*, a
//! one-byte `db` data directive, not an error.

use crate::addressing::AddressingMode;
use crate::context::Context;
use crate::opcodes::OPCODE_TABLE;

/// A single disassembled instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Disassembly {
    /// Formatted text: `"<mnemonic> <operand>"`, the bare mnemonic for
    /// implicit instructions, or a `db` directive for unassigned opcodes.
    pub text: String,

    /// Bytes the instruction occupies (1-3); add this to the address to
    /// reach the next instruction.
    pub length: u16,

    /// False when the opcode byte has no assigned instruction.
    pub valid: bool,
}

/// Disassembles the instruction at `addr`.
///
/// # Examples
///
/// ```
/// use sim6502::{disassemble, Context, FlatContext};
///
/// let mut ctx = FlatContext::new();
/// ctx.poke_byte(0x0600, 0xA9); // lda #$05
/// ctx.poke_byte(0x0601, 0x05);
///
/// let out = disassemble(&ctx, 0x0600);
/// assert_eq!(out.text, "lda #$05");
/// assert_eq!(out.length, 2);
/// assert!(out.valid);
/// ```
pub fn disassemble<C: Context>(ctx: &C, addr: u16) -> Disassembly {
    let opcode = ctx.peek_byte(addr);
    let entry = &OPCODE_TABLE[opcode as usize];

    if entry.mode == AddressingMode::Invalid {
        return Disassembly {
            text: format!("db  ${:02x}", opcode),
            length: 1,
            valid: false,
        };
    }

    let operand = entry.mode.operand_text(ctx, addr.wrapping_add(1));
    let text = if operand.is_empty() {
        entry.mnemonic.to_string()
    } else {
        format!("{} {}", entry.mnemonic, operand)
    };

    Disassembly {
        text,
        length: entry.mode.instruction_bytes(),
        valid: true,
    }
}
