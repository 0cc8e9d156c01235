//! # Instruction Table
//!
//! This module contains the complete 256-entry instruction table, the single
//! source of truth binding each opcode byte to a mnemonic, an addressing
//! mode, and an execution routine.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 unassigned opcodes** - Marked with the "???" mnemonic, the
//!   `Invalid` addressing mode, and a routine that performs no state change
//!
//! The table is `const` data: built once, never mutated, `O(1)` lookup by
//! opcode byte. The assembler walks it in reverse through [`opcode_for`].

use crate::addressing::AddressingMode;
use AddressingMode::*;

/// Instruction semantic, one variant per execution routine.
///
/// The accumulator forms of the shift instructions get their own variants
/// (`AslAcc` and friends): they share a mnemonic with the memory forms but
/// operate on the A register and carry no operand bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc,
    And,
    Asl,
    AslAcc,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    LsrAcc,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    RolAcc,
    Ror,
    RorAcc,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Unassigned opcode; executing it is a decode failure and performs no
    /// state change.
    Invalid,
}

/// A single instruction table entry: the immutable (mnemonic, mode, routine)
/// triple for one opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    /// Canonical lowercase mnemonic ("lda", "sta", "???" for unassigned).
    pub mnemonic: &'static str,

    /// Addressing mode; determines operand length, effective address, and
    /// operand text.
    pub mode: AddressingMode,

    /// Execution routine selector.
    pub op: Op,
}

const fn entry(mnemonic: &'static str, mode: AddressingMode, op: Op) -> Opcode {
    Opcode { mnemonic, mode, op }
}

const UNASSIGNED: Opcode = entry("???", Invalid, Op::Invalid);

/// Complete 256-entry instruction table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use sim6502::{AddressingMode, Op, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "lda");
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.op, Op::Lda);
///
/// let unassigned = &OPCODE_TABLE[0xFF];
/// assert_eq!(unassigned.mode, AddressingMode::Invalid);
/// ```
pub const OPCODE_TABLE: [Opcode; 256] = [
    entry("brk", Implicit, Op::Brk),    // 0x00
    entry("ora", IndirectX, Op::Ora),   // 0x01
    UNASSIGNED,                         // 0x02
    UNASSIGNED,                         // 0x03
    UNASSIGNED,                         // 0x04
    entry("ora", ZeroPage, Op::Ora),    // 0x05
    entry("asl", ZeroPage, Op::Asl),    // 0x06
    UNASSIGNED,                         // 0x07
    entry("php", Implicit, Op::Php),    // 0x08
    entry("ora", Immediate, Op::Ora),   // 0x09
    entry("asl", Implicit, Op::AslAcc), // 0x0A
    UNASSIGNED,                         // 0x0B
    UNASSIGNED,                         // 0x0C
    entry("ora", Absolute, Op::Ora),    // 0x0D
    entry("asl", Absolute, Op::Asl),    // 0x0E
    UNASSIGNED,                         // 0x0F
    entry("bpl", Relative, Op::Bpl),    // 0x10
    entry("ora", IndirectY, Op::Ora),   // 0x11
    UNASSIGNED,                         // 0x12
    UNASSIGNED,                         // 0x13
    UNASSIGNED,                         // 0x14
    entry("ora", ZeroPageX, Op::Ora),   // 0x15
    entry("asl", ZeroPageX, Op::Asl),   // 0x16
    UNASSIGNED,                         // 0x17
    entry("clc", Implicit, Op::Clc),    // 0x18
    entry("ora", AbsoluteY, Op::Ora),   // 0x19
    UNASSIGNED,                         // 0x1A
    UNASSIGNED,                         // 0x1B
    UNASSIGNED,                         // 0x1C
    entry("ora", AbsoluteX, Op::Ora),   // 0x1D
    entry("asl", AbsoluteX, Op::Asl),   // 0x1E
    UNASSIGNED,                         // 0x1F
    entry("jsr", Absolute, Op::Jsr),    // 0x20
    entry("and", IndirectX, Op::And),   // 0x21
    UNASSIGNED,                         // 0x22
    UNASSIGNED,                         // 0x23
    entry("bit", ZeroPage, Op::Bit),    // 0x24
    entry("and", ZeroPage, Op::And),    // 0x25
    entry("rol", ZeroPage, Op::Rol),    // 0x26
    UNASSIGNED,                         // 0x27
    entry("plp", Implicit, Op::Plp),    // 0x28
    entry("and", Immediate, Op::And),   // 0x29
    entry("rol", Implicit, Op::RolAcc), // 0x2A
    UNASSIGNED,                         // 0x2B
    entry("bit", Absolute, Op::Bit),    // 0x2C
    entry("and", Absolute, Op::And),    // 0x2D
    entry("rol", Absolute, Op::Rol),    // 0x2E
    UNASSIGNED,                         // 0x2F
    entry("bmi", Relative, Op::Bmi),    // 0x30
    entry("and", IndirectY, Op::And),   // 0x31
    UNASSIGNED,                         // 0x32
    UNASSIGNED,                         // 0x33
    UNASSIGNED,                         // 0x34
    entry("and", ZeroPageX, Op::And),   // 0x35
    entry("rol", ZeroPageX, Op::Rol),   // 0x36
    UNASSIGNED,                         // 0x37
    entry("sec", Implicit, Op::Sec),    // 0x38
    entry("and", AbsoluteY, Op::And),   // 0x39
    UNASSIGNED,                         // 0x3A
    UNASSIGNED,                         // 0x3B
    UNASSIGNED,                         // 0x3C
    entry("and", AbsoluteX, Op::And),   // 0x3D
    entry("rol", AbsoluteX, Op::Rol),   // 0x3E
    UNASSIGNED,                         // 0x3F
    entry("rti", Implicit, Op::Rti),    // 0x40
    entry("eor", IndirectX, Op::Eor),   // 0x41
    UNASSIGNED,                         // 0x42
    UNASSIGNED,                         // 0x43
    UNASSIGNED,                         // 0x44
    entry("eor", ZeroPage, Op::Eor),    // 0x45
    entry("lsr", ZeroPage, Op::Lsr),    // 0x46
    UNASSIGNED,                         // 0x47
    entry("pha", Implicit, Op::Pha),    // 0x48
    entry("eor", Immediate, Op::Eor),   // 0x49
    entry("lsr", Implicit, Op::LsrAcc), // 0x4A
    UNASSIGNED,                         // 0x4B
    entry("jmp", Absolute, Op::Jmp),    // 0x4C
    entry("eor", Absolute, Op::Eor),    // 0x4D
    entry("lsr", Absolute, Op::Lsr),    // 0x4E
    UNASSIGNED,                         // 0x4F
    entry("bvc", Relative, Op::Bvc),    // 0x50
    entry("eor", IndirectY, Op::Eor),   // 0x51
    UNASSIGNED,                         // 0x52
    UNASSIGNED,                         // 0x53
    UNASSIGNED,                         // 0x54
    entry("eor", ZeroPageX, Op::Eor),   // 0x55
    entry("lsr", ZeroPageX, Op::Lsr),   // 0x56
    UNASSIGNED,                         // 0x57
    entry("cli", Implicit, Op::Cli),    // 0x58
    entry("eor", AbsoluteY, Op::Eor),   // 0x59
    UNASSIGNED,                         // 0x5A
    UNASSIGNED,                         // 0x5B
    UNASSIGNED,                         // 0x5C
    entry("eor", AbsoluteX, Op::Eor),   // 0x5D
    entry("lsr", AbsoluteX, Op::Lsr),   // 0x5E
    UNASSIGNED,                         // 0x5F
    entry("rts", Implicit, Op::Rts),    // 0x60
    entry("adc", IndirectX, Op::Adc),   // 0x61
    UNASSIGNED,                         // 0x62
    UNASSIGNED,                         // 0x63
    UNASSIGNED,                         // 0x64
    entry("adc", ZeroPage, Op::Adc),    // 0x65
    entry("ror", ZeroPage, Op::Ror),    // 0x66
    UNASSIGNED,                         // 0x67
    entry("pla", Implicit, Op::Pla),    // 0x68
    entry("adc", Immediate, Op::Adc),   // 0x69
    entry("ror", Implicit, Op::RorAcc), // 0x6A
    UNASSIGNED,                         // 0x6B
    entry("jmp", Indirect, Op::Jmp),    // 0x6C
    entry("adc", Absolute, Op::Adc),    // 0x6D
    entry("ror", Absolute, Op::Ror),    // 0x6E
    UNASSIGNED,                         // 0x6F
    entry("bvs", Relative, Op::Bvs),    // 0x70
    entry("adc", IndirectY, Op::Adc),   // 0x71
    UNASSIGNED,                         // 0x72
    UNASSIGNED,                         // 0x73
    UNASSIGNED,                         // 0x74
    entry("adc", ZeroPageX, Op::Adc),   // 0x75
    entry("ror", ZeroPageX, Op::Ror),   // 0x76
    UNASSIGNED,                         // 0x77
    entry("sei", Implicit, Op::Sei),    // 0x78
    entry("adc", AbsoluteY, Op::Adc),   // 0x79
    UNASSIGNED,                         // 0x7A
    UNASSIGNED,                         // 0x7B
    UNASSIGNED,                         // 0x7C
    entry("adc", AbsoluteX, Op::Adc),   // 0x7D
    entry("ror", AbsoluteX, Op::Ror),   // 0x7E
    UNASSIGNED,                         // 0x7F
    UNASSIGNED,                         // 0x80
    entry("sta", IndirectX, Op::Sta),   // 0x81
    UNASSIGNED,                         // 0x82
    UNASSIGNED,                         // 0x83
    entry("sty", ZeroPage, Op::Sty),    // 0x84
    entry("sta", ZeroPage, Op::Sta),    // 0x85
    entry("stx", ZeroPage, Op::Stx),    // 0x86
    UNASSIGNED,                         // 0x87
    entry("dey", Implicit, Op::Dey),    // 0x88
    UNASSIGNED,                         // 0x89
    entry("txa", Implicit, Op::Txa),    // 0x8A
    UNASSIGNED,                         // 0x8B
    entry("sty", Absolute, Op::Sty),    // 0x8C
    entry("sta", Absolute, Op::Sta),    // 0x8D
    entry("stx", Absolute, Op::Stx),    // 0x8E
    UNASSIGNED,                         // 0x8F
    entry("bcc", Relative, Op::Bcc),    // 0x90
    entry("sta", IndirectY, Op::Sta),   // 0x91
    UNASSIGNED,                         // 0x92
    UNASSIGNED,                         // 0x93
    entry("sty", ZeroPageX, Op::Sty),   // 0x94
    entry("sta", ZeroPageX, Op::Sta),   // 0x95
    entry("stx", ZeroPageY, Op::Stx),   // 0x96
    UNASSIGNED,                         // 0x97
    entry("tya", Implicit, Op::Tya),    // 0x98
    entry("sta", AbsoluteY, Op::Sta),   // 0x99
    entry("txs", Implicit, Op::Txs),    // 0x9A
    UNASSIGNED,                         // 0x9B
    UNASSIGNED,                         // 0x9C
    entry("sta", AbsoluteX, Op::Sta),   // 0x9D
    UNASSIGNED,                         // 0x9E
    UNASSIGNED,                         // 0x9F
    entry("ldy", Immediate, Op::Ldy),   // 0xA0
    entry("lda", IndirectX, Op::Lda),   // 0xA1
    entry("ldx", Immediate, Op::Ldx),   // 0xA2
    UNASSIGNED,                         // 0xA3
    entry("ldy", ZeroPage, Op::Ldy),    // 0xA4
    entry("lda", ZeroPage, Op::Lda),    // 0xA5
    entry("ldx", ZeroPage, Op::Ldx),    // 0xA6
    UNASSIGNED,                         // 0xA7
    entry("tay", Implicit, Op::Tay),    // 0xA8
    entry("lda", Immediate, Op::Lda),   // 0xA9
    entry("tax", Implicit, Op::Tax),    // 0xAA
    UNASSIGNED,                         // 0xAB
    entry("ldy", Absolute, Op::Ldy),    // 0xAC
    entry("lda", Absolute, Op::Lda),    // 0xAD
    entry("ldx", Absolute, Op::Ldx),    // 0xAE
    UNASSIGNED,                         // 0xAF
    entry("bcs", Relative, Op::Bcs),    // 0xB0
    entry("lda", IndirectY, Op::Lda),   // 0xB1
    UNASSIGNED,                         // 0xB2
    UNASSIGNED,                         // 0xB3
    entry("ldy", ZeroPageX, Op::Ldy),   // 0xB4
    entry("lda", ZeroPageX, Op::Lda),   // 0xB5
    entry("ldx", ZeroPageY, Op::Ldx),   // 0xB6
    UNASSIGNED,                         // 0xB7
    entry("clv", Implicit, Op::Clv),    // 0xB8
    entry("lda", AbsoluteY, Op::Lda),   // 0xB9
    entry("tsx", Implicit, Op::Tsx),    // 0xBA
    UNASSIGNED,                         // 0xBB
    entry("ldy", AbsoluteX, Op::Ldy),   // 0xBC
    entry("lda", AbsoluteX, Op::Lda),   // 0xBD
    entry("ldx", AbsoluteY, Op::Ldx),   // 0xBE
    UNASSIGNED,                         // 0xBF
    entry("cpy", Immediate, Op::Cpy),   // 0xC0
    entry("cmp", IndirectX, Op::Cmp),   // 0xC1
    UNASSIGNED,                         // 0xC2
    UNASSIGNED,                         // 0xC3
    entry("cpy", ZeroPage, Op::Cpy),    // 0xC4
    entry("cmp", ZeroPage, Op::Cmp),    // 0xC5
    entry("dec", ZeroPage, Op::Dec),    // 0xC6
    UNASSIGNED,                         // 0xC7
    entry("iny", Implicit, Op::Iny),    // 0xC8
    entry("cmp", Immediate, Op::Cmp),   // 0xC9
    entry("dex", Implicit, Op::Dex),    // 0xCA
    UNASSIGNED,                         // 0xCB
    entry("cpy", Absolute, Op::Cpy),    // 0xCC
    entry("cmp", Absolute, Op::Cmp),    // 0xCD
    entry("dec", Absolute, Op::Dec),    // 0xCE
    UNASSIGNED,                         // 0xCF
    entry("bne", Relative, Op::Bne),    // 0xD0
    entry("cmp", IndirectY, Op::Cmp),   // 0xD1
    UNASSIGNED,                         // 0xD2
    UNASSIGNED,                         // 0xD3
    UNASSIGNED,                         // 0xD4
    entry("cmp", ZeroPageX, Op::Cmp),   // 0xD5
    entry("dec", ZeroPageX, Op::Dec),   // 0xD6
    UNASSIGNED,                         // 0xD7
    entry("cld", Implicit, Op::Cld),    // 0xD8
    entry("cmp", AbsoluteY, Op::Cmp),   // 0xD9
    UNASSIGNED,                         // 0xDA
    UNASSIGNED,                         // 0xDB
    UNASSIGNED,                         // 0xDC
    entry("cmp", AbsoluteX, Op::Cmp),   // 0xDD
    entry("dec", AbsoluteX, Op::Dec),   // 0xDE
    UNASSIGNED,                         // 0xDF
    entry("cpx", Immediate, Op::Cpx),   // 0xE0
    entry("sbc", IndirectX, Op::Sbc),   // 0xE1
    UNASSIGNED,                         // 0xE2
    UNASSIGNED,                         // 0xE3
    entry("cpx", ZeroPage, Op::Cpx),    // 0xE4
    entry("sbc", ZeroPage, Op::Sbc),    // 0xE5
    entry("inc", ZeroPage, Op::Inc),    // 0xE6
    UNASSIGNED,                         // 0xE7
    entry("inx", Implicit, Op::Inx),    // 0xE8
    entry("sbc", Immediate, Op::Sbc),   // 0xE9
    entry("nop", Implicit, Op::Nop),    // 0xEA
    UNASSIGNED,                         // 0xEB
    entry("cpx", Absolute, Op::Cpx),    // 0xEC
    entry("sbc", Absolute, Op::Sbc),    // 0xED
    entry("inc", Absolute, Op::Inc),    // 0xEE
    UNASSIGNED,                         // 0xEF
    entry("beq", Relative, Op::Beq),    // 0xF0
    entry("sbc", IndirectY, Op::Sbc),   // 0xF1
    UNASSIGNED,                         // 0xF2
    UNASSIGNED,                         // 0xF3
    UNASSIGNED,                         // 0xF4
    entry("sbc", ZeroPageX, Op::Sbc),   // 0xF5
    entry("inc", ZeroPageX, Op::Inc),   // 0xF6
    UNASSIGNED,                         // 0xF7
    entry("sed", Implicit, Op::Sed),    // 0xF8
    entry("sbc", AbsoluteY, Op::Sbc),   // 0xF9
    UNASSIGNED,                         // 0xFA
    UNASSIGNED,                         // 0xFB
    UNASSIGNED,                         // 0xFC
    entry("sbc", AbsoluteX, Op::Sbc),   // 0xFD
    entry("inc", AbsoluteX, Op::Inc),   // 0xFE
    UNASSIGNED,                         // 0xFF
];

/// Finds the opcode byte that encodes `mnemonic` in `mode`.
///
/// The reverse lookup used by the assembler once operand syntax has fixed
/// the addressing mode. Expects the canonical lowercase mnemonic.
///
/// # Examples
///
/// ```
/// use sim6502::{opcode_for, AddressingMode};
///
/// assert_eq!(opcode_for("lda", AddressingMode::Immediate), Some(0xA9));
/// assert_eq!(opcode_for("sta", AddressingMode::Immediate), None);
/// ```
pub fn opcode_for(mnemonic: &str, mode: AddressingMode) -> Option<u8> {
    OPCODE_TABLE
        .iter()
        .position(|o| o.mode == mode && o.mnemonic == mnemonic)
        .map(|i| i as u8)
}
