//! Exhaustive round-trip tests over the whole instruction table.
//!
//! For every defined (mnemonic, mode) pair: place the canonical
//! opcode+operand bytes in memory, disassemble them, assemble the resulting
//! text elsewhere, and require the identical bytes back.

use sim6502::{assemble, disassemble, AddressingMode, Context, FlatContext, Op, OPCODE_TABLE};

/// Canonical operand bytes used to exercise each instruction length.
fn operand_bytes(mode: AddressingMode) -> Vec<u8> {
    match mode.instruction_bytes() {
        1 => vec![],
        2 => vec![0x42],
        _ => vec![0x34, 0x12],
    }
}

#[test]
fn test_every_assigned_opcode_round_trips() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.op == Op::Invalid {
            continue;
        }

        let mut ctx = FlatContext::new();
        let mut bytes = vec![opcode as u8];
        bytes.extend(operand_bytes(entry.mode));
        ctx.load(0x0600, &bytes);

        let out = disassemble(&ctx, 0x0600);
        assert!(out.valid, "opcode 0x{:02X} should disassemble", opcode);
        assert_eq!(
            out.length as usize,
            bytes.len(),
            "length mismatch for 0x{:02X}",
            opcode
        );

        let next = assemble(&mut ctx, 0x0700, &out.text).unwrap_or_else(|e| {
            panic!("reassembling `{}` (0x{:02X}) failed: {}", out.text, opcode, e)
        });
        assert_eq!(next, 0x0700 + out.length);

        for (i, &b) in bytes.iter().enumerate() {
            assert_eq!(
                ctx.peek_byte(0x0700 + i as u16),
                b,
                "byte {} of `{}` (0x{:02X})",
                i,
                out.text,
                opcode
            );
        }
    }
}

#[test]
fn test_unassigned_opcodes_round_trip_through_db() {
    for (opcode, entry) in OPCODE_TABLE.iter().enumerate() {
        if entry.op != Op::Invalid {
            continue;
        }

        let mut ctx = FlatContext::new();
        ctx.poke_byte(0x0600, opcode as u8);

        let out = disassemble(&ctx, 0x0600);
        assert!(!out.valid);
        assert_eq!(out.length, 1);

        let next = assemble(&mut ctx, 0x0700, &out.text).unwrap();
        assert_eq!(next, 0x0701);
        assert_eq!(ctx.peek_byte(0x0700), opcode as u8);
    }
}

#[test]
fn test_relative_extremes_round_trip() {
    for offset in [0x00u8, 0x01, 0x7F, 0x80, 0xFF] {
        let mut ctx = FlatContext::new();
        ctx.load(0x0600, &[0xD0, offset]); // bne

        let out = disassemble(&ctx, 0x0600);
        assemble(&mut ctx, 0x0700, &out.text).unwrap();

        assert_eq!(ctx.peek_byte(0x0700), 0xD0);
        assert_eq!(ctx.peek_byte(0x0701), offset, "offset {}", offset as i8);
    }
}

#[test]
fn test_boundary_operand_values_round_trip() {
    // Zero operands must keep their canonical width in both directions
    let cases: &[(&[u8], &str)] = &[
        (&[0xA9, 0x00], "lda #$00"),
        (&[0xA5, 0x00], "lda $00"),
        (&[0xAD, 0x00, 0x00], "lda $0000"),
        (&[0xAD, 0x44, 0x00], "lda $0044"),
        (&[0xBD, 0xFF, 0xFF], "lda $ffff, X"),
    ];

    for (bytes, expected) in cases {
        let mut ctx = FlatContext::new();
        ctx.load(0x0600, bytes);

        let out = disassemble(&ctx, 0x0600);
        assert_eq!(&out.text, expected);

        assemble(&mut ctx, 0x0700, &out.text).unwrap();
        for (i, &b) in bytes.iter().enumerate() {
            assert_eq!(ctx.peek_byte(0x0700 + i as u16), b);
        }
    }
}
