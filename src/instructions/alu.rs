//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: bitwise operations on the accumulator
//! - CMP, CPX, CPY: register/memory compares
//! - BIT: bit test
//!
//! Arithmetic here is binary; the Decimal flag is carried in the status word
//! but does not alter ADC/SBC results.

use super::set_zn;
use crate::context::Context;

/// ADC - Add with Carry.
///
/// Adds the operand and the carry flag to the accumulator.
///
/// Flags:
/// - C: set if the unsigned result exceeds 0xFF
/// - V: set if both operands share a sign the result does not
/// - Z, N: from the result
pub(crate) fn adc<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.peek_byte(ea);
    add_to_accumulator(ctx, value);
}

/// SBC - Subtract with Carry.
///
/// Subtracts the operand and the borrow (the inverted carry flag) from the
/// accumulator. Implemented as ADC of the operand's one's complement, which
/// yields the documented C/V/Z/N behavior directly.
pub(crate) fn sbc<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.peek_byte(ea);
    add_to_accumulator(ctx, value ^ 0xFF);
}

fn add_to_accumulator<C: Context>(ctx: &mut C, value: u8) {
    let a = ctx.a();
    let carry_in = u16::from(ctx.flag_c());

    let result16 = u16::from(a) + u16::from(value) + carry_in;
    let result = result16 as u8;

    ctx.set_flag_c(result16 > 0xFF);
    // Overflow: both inputs had the same sign and the result has the other
    ctx.set_flag_v((a ^ result) & (value ^ result) & 0x80 != 0);
    set_zn(ctx, result);

    ctx.set_a(result);
}

/// AND - Logical AND with the accumulator.
///
/// Flags: Z and N from the result.
pub(crate) fn and<C: Context>(ctx: &mut C, ea: u16) {
    let result = ctx.a() & ctx.peek_byte(ea);
    ctx.set_a(result);
    set_zn(ctx, result);
}

/// ORA - Logical OR with the accumulator.
///
/// Flags: Z and N from the result.
pub(crate) fn ora<C: Context>(ctx: &mut C, ea: u16) {
    let result = ctx.a() | ctx.peek_byte(ea);
    ctx.set_a(result);
    set_zn(ctx, result);
}

/// EOR - Exclusive OR with the accumulator.
///
/// Flags: Z and N from the result.
pub(crate) fn eor<C: Context>(ctx: &mut C, ea: u16) {
    let result = ctx.a() ^ ctx.peek_byte(ea);
    ctx.set_a(result);
    set_zn(ctx, result);
}

/// CMP - Compare accumulator with memory.
pub(crate) fn cmp<C: Context>(ctx: &mut C, ea: u16) {
    let register = ctx.a();
    compare(ctx, register, ea);
}

/// CPX - Compare X register with memory.
pub(crate) fn cpx<C: Context>(ctx: &mut C, ea: u16) {
    let register = ctx.x();
    compare(ctx, register, ea);
}

/// CPY - Compare Y register with memory.
pub(crate) fn cpy<C: Context>(ctx: &mut C, ea: u16) {
    let register = ctx.y();
    compare(ctx, register, ea);
}

/// Shared compare rule: flags are set from `register - memory` without
/// storing the result.
///
/// Flags:
/// - C: register >= memory (unsigned)
/// - Z: register == memory
/// - N: bit 7 of the difference
fn compare<C: Context>(ctx: &mut C, register: u8, ea: u16) {
    let value = ctx.peek_byte(ea);
    let result = register.wrapping_sub(value);

    ctx.set_flag_c(register >= value);
    set_zn(ctx, result);
}

/// BIT - Bit Test.
///
/// ANDs the accumulator with memory but stores nothing.
///
/// Flags:
/// - Z: from the AND result
/// - N: bit 7 of the memory operand
/// - V: bit 6 of the memory operand
pub(crate) fn bit<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.peek_byte(ea);
    let masked = ctx.a() & value;

    ctx.set_flag_z(masked == 0);
    ctx.set_flag_n(value & 0x80 != 0);
    ctx.set_flag_v(value & 0x40 != 0);
}
