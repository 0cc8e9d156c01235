//! # Status Flag Manipulation Instructions
//!
//! This module implements the instructions that directly set or clear a
//! single status flag:
//! - CLC / SEC: carry
//! - CLI / SEI: interrupt disable
//! - CLD / SED: decimal mode
//! - CLV: overflow (there is no SEV)
//!
//! All of them use implicit addressing and touch nothing but their flag.

use crate::context::Context;

/// CLC - Clear Carry Flag.
pub(crate) fn clc<C: Context>(ctx: &mut C) {
    ctx.set_flag_c(false);
}

/// SEC - Set Carry Flag.
pub(crate) fn sec<C: Context>(ctx: &mut C) {
    ctx.set_flag_c(true);
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli<C: Context>(ctx: &mut C) {
    ctx.set_flag_i(false);
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei<C: Context>(ctx: &mut C) {
    ctx.set_flag_i(true);
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld<C: Context>(ctx: &mut C) {
    ctx.set_flag_d(false);
}

/// SED - Set Decimal Mode.
pub(crate) fn sed<C: Context>(ctx: &mut C) {
    ctx.set_flag_d(true);
}

/// CLV - Clear Overflow Flag.
pub(crate) fn clv<C: Context>(ctx: &mut C) {
    ctx.set_flag_v(false);
}
