//! # 6502 Instruction-Set Simulator
//!
//! An emulator core for the MOS Technology 6502 processor: register and flag
//! state, the thirteen addressing modes, a complete 256-entry opcode table, a
//! single-step fetch-decode-execute engine, and an assembler/disassembler
//! pair that share the addressing-mode encoding rules, so every instruction
//! has a byte-for-byte reversible text form.
//!
//! ## Quick Start
//!
//! ```rust
//! use sim6502::{assemble, disassemble, execute, hard_reset, Context, FlatContext};
//!
//! let mut ctx = FlatContext::new();
//!
//! // Point the reset vector at 0x0600 and reset the machine
//! ctx.poke_word(0xFFFC, 0x0600);
//! hard_reset(&mut ctx);
//! assert_eq!(ctx.pc(), 0x0600);
//!
//! // Assemble one instruction, inspect it, then run it
//! let next = assemble(&mut ctx, 0x0600, "lda #$05").unwrap();
//! assert_eq!(next, 0x0602);
//! assert_eq!(disassemble(&ctx, 0x0600).text, "lda #$05");
//!
//! let consumed = execute(&mut ctx).unwrap();
//! assert_eq!(consumed, 2);
//! assert_eq!(ctx.a(), 0x05);
//! ```
//!
//! ## Architecture
//!
//! Every component operates through the [`Context`] trait, the capability set
//! for memory and register access. The execute engine and the disassembler
//! both consult the opcode table and the addressing-mode catalog but never
//! each other; the assembler is the sole reverse path from text to bytes.
//!
//! - **Modularity**: machine state is behind the `Context` trait; the core
//!   makes no assumption about backing storage beyond byte and little-endian
//!   word access
//! - **Table-driven design**: all 256 opcodes live in one `const` table,
//!   built once and never mutated
//! - **Total operations**: memory, register, reset and disassembly
//!   operations never fail; the only fallible paths are decoding an
//!   unassigned opcode and parsing assembler input
//!
//! ## Modules
//!
//! - `context` - `Context` trait and the flat 64KiB `FlatContext`
//! - `addressing` - addressing-mode catalog: lengths, resolution, text forms
//! - `opcodes` - the 256-entry instruction table
//! - `cpu` - execute engine and reset routines
//! - `disassembler` / `assembler` - the reversible text encoding

pub mod addressing;
pub mod assembler;
pub mod context;
pub mod cpu;
pub mod disassembler;
pub mod opcodes;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::AddressingMode;
pub use assembler::assemble;
pub use context::{Context, FlatContext};
pub use cpu::{execute, hard_reset, soft_reset};
pub use disassembler::{disassemble, Disassembly};
pub use opcodes::{opcode_for, Op, Opcode, OPCODE_TABLE};

use thiserror::Error;

/// Errors that can occur during CPU execution.
///
/// Decode failures are recoverable: the machine state is left at its
/// pre-fetch values and the caller decides whether to halt, skip, or report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExecutionError {
    /// The opcode byte at the program counter has no assigned instruction.
    #[error("opcode 0x{0:02X} is not implemented")]
    UnimplementedOpcode(u8),
}

/// Errors that can occur while assembling a line of text.
///
/// All variants are parse-level: they are raised before the first byte is
/// written, so a failed [`assemble`] call leaves memory untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssembleError {
    /// The mnemonic is not in the instruction table.
    #[error("unknown mnemonic: {0}")]
    UnknownMnemonic(String),

    /// The operand text matches none of the canonical addressing-mode forms.
    #[error("operand `{0}` does not match any addressing mode")]
    MalformedOperand(String),

    /// The operand parsed, but its value does not fit the mode's width.
    #[error("operand value out of range: {0}")]
    OperandOutOfRange(String),

    /// The mnemonic exists but has no encoding in the given addressing mode.
    #[error("{mnemonic} has no {mode:?} encoding")]
    NoSuchEncoding {
        /// The recognized mnemonic.
        mnemonic: String,
        /// The mode derived from the operand syntax.
        mode: AddressingMode,
    },
}
