//! # Stack Operations
//!
//! This module implements stack manipulation instructions:
//! - PHA, PLA: push and pull the accumulator
//! - PHP, PLP: push and pull the status register
//!
//! It also provides the push/pull helpers shared with the control-flow
//! instructions (JSR, RTS, BRK, RTI). The stack occupies the fixed page
//! 0x0100-0x01FF, grows downward, and the pointer wraps within the page.

use super::set_zn;
use crate::context::Context;

/// Base address of the stack page.
const STACK_PAGE: u16 = 0x0100;

/// Pushes a byte at the current stack pointer, then decrements it.
///
/// A push with SP=0x00 writes to 0x0100 and wraps the pointer to 0xFF.
pub(crate) fn push_byte<C: Context>(ctx: &mut C, value: u8) {
    let sp = ctx.sp();
    ctx.poke_byte(STACK_PAGE | u16::from(sp), value);
    ctx.set_sp(sp.wrapping_sub(1));
}

/// Increments the stack pointer, then reads the byte it addresses.
pub(crate) fn pull_byte<C: Context>(ctx: &mut C) -> u8 {
    let sp = ctx.sp().wrapping_add(1);
    ctx.set_sp(sp);
    ctx.peek_byte(STACK_PAGE | u16::from(sp))
}

/// Pushes a 16-bit word, high byte first, so it pulls back little-endian.
pub(crate) fn push_word<C: Context>(ctx: &mut C, value: u16) {
    push_byte(ctx, (value >> 8) as u8);
    push_byte(ctx, (value & 0xFF) as u8);
}

/// Pulls a 16-bit word pushed by [`push_word`].
pub(crate) fn pull_word<C: Context>(ctx: &mut C) -> u16 {
    let low = u16::from(pull_byte(ctx));
    let high = u16::from(pull_byte(ctx));
    (high << 8) | low
}

/// PHA - Push Accumulator. Affects no flags.
pub(crate) fn pha<C: Context>(ctx: &mut C) {
    let value = ctx.a();
    push_byte(ctx, value);
}

/// PHP - Push Processor Status.
///
/// The pushed copy has the break bit set; the live flags are unchanged.
pub(crate) fn php<C: Context>(ctx: &mut C) {
    let status = ctx.status() | 0b0001_0000;
    push_byte(ctx, status);
}

/// PLA - Pull Accumulator.
///
/// Flags: Z and N from the pulled value.
pub(crate) fn pla<C: Context>(ctx: &mut C) {
    let value = pull_byte(ctx);
    ctx.set_a(value);
    set_zn(ctx, value);
}

/// PLP - Pull Processor Status.
///
/// All seven flags are loaded from the pulled byte.
pub(crate) fn plp<C: Context>(ctx: &mut C) {
    let status = pull_byte(ctx);
    ctx.set_status(status);
}
