//! # Register Transfer Instructions
//!
//! This module implements register transfer operations:
//! - TAX, TAY, TXA, TYA: between the accumulator and the index registers
//! - TSX, TXS: between X and the stack pointer
//!
//! Every transfer except TXS updates Z and N from the transferred value.

use super::set_zn;
use crate::context::Context;

/// TAX - Transfer Accumulator to X.
pub(crate) fn tax<C: Context>(ctx: &mut C) {
    let value = ctx.a();
    ctx.set_x(value);
    set_zn(ctx, value);
}

/// TAY - Transfer Accumulator to Y.
pub(crate) fn tay<C: Context>(ctx: &mut C) {
    let value = ctx.a();
    ctx.set_y(value);
    set_zn(ctx, value);
}

/// TXA - Transfer X to Accumulator.
pub(crate) fn txa<C: Context>(ctx: &mut C) {
    let value = ctx.x();
    ctx.set_a(value);
    set_zn(ctx, value);
}

/// TYA - Transfer Y to Accumulator.
pub(crate) fn tya<C: Context>(ctx: &mut C) {
    let value = ctx.y();
    ctx.set_a(value);
    set_zn(ctx, value);
}

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx<C: Context>(ctx: &mut C) {
    let value = ctx.sp();
    ctx.set_x(value);
    set_zn(ctx, value);
}

/// TXS - Transfer X to Stack Pointer. Affects no flags.
pub(crate) fn txs<C: Context>(ctx: &mut C) {
    let value = ctx.x();
    ctx.set_sp(value);
}
