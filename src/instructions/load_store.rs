//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA, LDX, LDY: load a register from memory
//! - STA, STX, STY: store a register to memory
//!
//! Loads update the Z and N flags from the loaded value only; stores affect
//! no flags.

use super::set_zn;
use crate::context::Context;

/// LDA - Load Accumulator.
///
/// Flags: Z and N from the loaded value.
pub(crate) fn lda<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.peek_byte(ea);
    ctx.set_a(value);
    set_zn(ctx, value);
}

/// LDX - Load X Register.
///
/// Flags: Z and N from the loaded value.
pub(crate) fn ldx<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.peek_byte(ea);
    ctx.set_x(value);
    set_zn(ctx, value);
}

/// LDY - Load Y Register.
///
/// Flags: Z and N from the loaded value.
pub(crate) fn ldy<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.peek_byte(ea);
    ctx.set_y(value);
    set_zn(ctx, value);
}

/// STA - Store Accumulator. Affects no flags.
pub(crate) fn sta<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.a();
    ctx.poke_byte(ea, value);
}

/// STX - Store X Register. Affects no flags.
pub(crate) fn stx<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.x();
    ctx.poke_byte(ea, value);
}

/// STY - Store Y Register. Affects no flags.
pub(crate) fn sty<C: Context>(ctx: &mut C, ea: u16) {
    let value = ctx.y();
    ctx.poke_byte(ea, value);
}
