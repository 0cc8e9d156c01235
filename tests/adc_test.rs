//! Tests for ADC and SBC: carry, overflow, zero and negative behavior.

use sim6502::{execute, hard_reset, Context, FlatContext};

fn setup(program: &[u8]) -> FlatContext {
    let mut ctx = FlatContext::new();
    ctx.poke_word(0xFFFC, 0x0600);
    hard_reset(&mut ctx);
    ctx.load(0x0600, program);
    ctx
}

#[test]
fn test_adc_simple_addition() {
    let mut ctx = setup(&[0x69, 0x10]); // adc #$10
    ctx.set_a(0x20);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x30);
    assert!(!ctx.flag_c());
    assert!(!ctx.flag_v());
    assert!(!ctx.flag_z());
    assert!(!ctx.flag_n());
}

#[test]
fn test_adc_includes_carry_in() {
    let mut ctx = setup(&[0x69, 0x10]);
    ctx.set_a(0x20);
    ctx.set_flag_c(true);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x31);
}

#[test]
fn test_adc_carry_out() {
    let mut ctx = setup(&[0x69, 0x01]);
    ctx.set_a(0xFF);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x00);
    assert!(ctx.flag_c());
    assert!(ctx.flag_z());
}

#[test]
fn test_adc_signed_overflow() {
    // 0x50 + 0x50 = 0xA0: two positives yield a negative
    let mut ctx = setup(&[0x69, 0x50]);
    ctx.set_a(0x50);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0xA0);
    assert!(ctx.flag_v());
    assert!(ctx.flag_n());
    assert!(!ctx.flag_c());
}

#[test]
fn test_adc_no_overflow_on_mixed_signs() {
    let mut ctx = setup(&[0x69, 0xFF]); // -1
    ctx.set_a(0x10);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x0F);
    assert!(!ctx.flag_v());
    assert!(ctx.flag_c()); // unsigned wrap
}

#[test]
fn test_sbc_with_borrow_clear() {
    // Carry set means no borrow pending
    let mut ctx = setup(&[0xE9, 0x10]); // sbc #$10
    ctx.set_a(0x50);
    ctx.set_flag_c(true);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x40);
    assert!(ctx.flag_c(), "no borrow needed");
}

#[test]
fn test_sbc_with_pending_borrow() {
    let mut ctx = setup(&[0xE9, 0x10]);
    ctx.set_a(0x50);
    ctx.set_flag_c(false);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x3F);
}

#[test]
fn test_sbc_underflow_clears_carry() {
    let mut ctx = setup(&[0xE9, 0x20]);
    ctx.set_a(0x10);
    ctx.set_flag_c(true);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0xF0);
    assert!(!ctx.flag_c(), "borrow occurred");
    assert!(ctx.flag_n());
}

#[test]
fn test_sbc_signed_overflow() {
    // -128 - 1 overflows signed range
    let mut ctx = setup(&[0xE9, 0x01]);
    ctx.set_a(0x80);
    ctx.set_flag_c(true);

    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x7F);
    assert!(ctx.flag_v());
}

#[test]
fn test_adc_from_memory_modes() {
    let mut ctx = setup(&[0x65, 0x10, 0x6D, 0x00, 0x20]); // adc $10 / adc $2000
    ctx.poke_byte(0x0010, 0x01);
    ctx.poke_byte(0x2000, 0x02);

    execute(&mut ctx).unwrap();
    execute(&mut ctx).unwrap();

    assert_eq!(ctx.a(), 0x03);
}
