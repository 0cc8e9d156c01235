//! Assembler integration tests: writing programs through the context and
//! assembling then disassembling the same line.

use sim6502::{assemble, disassemble, execute, hard_reset, AssembleError, Context, FlatContext};

#[test]
fn test_assemble_then_disassemble_round_trips_text() {
    let mut ctx = FlatContext::new();

    let next = assemble(&mut ctx, 0x0600, "lda #$05").unwrap();

    assert_eq!(next, 0x0602);
    assert_eq!(ctx.peek_byte(0x0600), 0xA9);
    assert_eq!(ctx.peek_byte(0x0601), 0x05);
    assert_eq!(disassemble(&ctx, 0x0600).text, "lda #$05");
}

#[test]
fn test_assemble_a_program_sequentially() {
    let mut ctx = FlatContext::new();

    let mut addr = 0x0600;
    for line in ["lda #$03", "sta $2000", "dec $2000", "jmp $0600"] {
        addr = assemble(&mut ctx, addr, line).unwrap();
    }

    assert_eq!(addr, 0x060B);
    assert_eq!(
        &[
            ctx.peek_byte(0x0600),
            ctx.peek_byte(0x0601),
            ctx.peek_byte(0x0602),
            ctx.peek_byte(0x0603),
            ctx.peek_byte(0x0604),
        ],
        &[0xA9, 0x03, 0x8D, 0x00, 0x20]
    );
}

#[test]
fn test_assembled_program_executes() {
    let mut ctx = FlatContext::new();
    ctx.poke_word(0xFFFC, 0x0600);
    hard_reset(&mut ctx);

    let mut addr = 0x0600;
    for line in ["lda #$07", "sta $10", "lsr"] {
        addr = assemble(&mut ctx, addr, line).unwrap();
    }

    execute(&mut ctx).unwrap();
    execute(&mut ctx).unwrap();
    execute(&mut ctx).unwrap();

    assert_eq!(ctx.peek_byte(0x0010), 0x07);
    assert_eq!(ctx.a(), 0x03);
    assert!(ctx.flag_c());
}

#[test]
fn test_assemble_overwrites_in_place() {
    let mut ctx = FlatContext::new();

    assemble(&mut ctx, 0x0600, "lda #$05").unwrap();
    assemble(&mut ctx, 0x0600, "nop").unwrap();

    assert_eq!(ctx.peek_byte(0x0600), 0xEA);
    // The old operand byte is stale but the new instruction is intact
    assert_eq!(disassemble(&ctx, 0x0600).text, "nop");
}

#[test]
fn test_assemble_does_not_touch_registers() {
    let mut ctx = FlatContext::new();
    ctx.set_a(0x42);
    ctx.set_pc(0x1234);

    assemble(&mut ctx, 0x0600, "lda #$05").unwrap();

    assert_eq!(ctx.a(), 0x42);
    assert_eq!(ctx.pc(), 0x1234);
}

#[test]
fn test_assemble_rejects_unknown_mnemonic() {
    let mut ctx = FlatContext::new();

    assert_eq!(
        assemble(&mut ctx, 0x0600, "frobnicate #$05").unwrap_err(),
        AssembleError::UnknownMnemonic("frobnicate".to_string())
    );
}

#[test]
fn test_assemble_rejects_impossible_pairs() {
    let mut ctx = FlatContext::new();

    // jmp has no zero-page form; ldx has no X-indexed form
    assert!(matches!(
        assemble(&mut ctx, 0x0600, "jmp $10").unwrap_err(),
        AssembleError::NoSuchEncoding { .. }
    ));
    assert!(matches!(
        assemble(&mut ctx, 0x0600, "ldx $10, X").unwrap_err(),
        AssembleError::NoSuchEncoding { .. }
    ));
}

#[test]
fn test_failed_assembly_writes_nothing() {
    let mut ctx = FlatContext::new();
    ctx.load(0x0600, &[0x11, 0x22, 0x33]);

    assert!(assemble(&mut ctx, 0x0600, "jmp $10").is_err());
    assert!(assemble(&mut ctx, 0x0600, "lda bogus").is_err());

    assert_eq!(ctx.peek_byte(0x0600), 0x11);
    assert_eq!(ctx.peek_byte(0x0601), 0x22);
    assert_eq!(ctx.peek_byte(0x0602), 0x33);
}

#[test]
fn test_db_directive_writes_raw_byte() {
    let mut ctx = FlatContext::new();

    let next = assemble(&mut ctx, 0x0600, "db  $ff").unwrap();

    assert_eq!(next, 0x0601);
    assert_eq!(ctx.peek_byte(0x0600), 0xFF);
    // And the byte disassembles back to the same directive
    assert_eq!(disassemble(&ctx, 0x0600).text, "db  $ff");
}
