//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: unconditional jump (absolute or indirect)
//! - JSR, RTS: subroutine call and return
//! - BRK, RTI: software interrupt and return
//! - NOP: no operation
//!
//! The engine advances the program counter past the instruction before these
//! routines run; the jumps overwrite it with their target and the engine
//! does not re-advance afterwards.

use super::stack::{pull_byte, pull_word, push_byte, push_word};
use crate::context::Context;
use crate::cpu::IRQ_VECTOR;

/// JMP - Jump.
///
/// Sets the program counter to the effective address. Affects no flags and
/// does not touch the stack.
pub(crate) fn jmp<C: Context>(ctx: &mut C, ea: u16) {
    ctx.set_pc(ea);
}

/// JSR - Jump to Subroutine.
///
/// Pushes the address of the last byte of the JSR instruction (the
/// already-advanced program counter minus one), then jumps. RTS undoes the
/// off-by-one when it returns.
pub(crate) fn jsr<C: Context>(ctx: &mut C, ea: u16) {
    let return_addr = ctx.pc().wrapping_sub(1);
    push_word(ctx, return_addr);
    ctx.set_pc(ea);
}

/// RTS - Return from Subroutine.
///
/// Pulls the address JSR pushed and resumes one byte past it.
pub(crate) fn rts<C: Context>(ctx: &mut C) {
    let return_addr = pull_word(ctx);
    ctx.set_pc(return_addr.wrapping_add(1));
}

/// BRK - Force Interrupt.
///
/// Pushes the address two bytes past the BRK opcode, pushes the status byte
/// with the break bit set in the pushed copy, sets the interrupt-disable
/// flag, and loads the program counter from the IRQ vector at 0xFFFE.
pub(crate) fn brk<C: Context>(ctx: &mut C) {
    // PC is already one past the opcode; the hardware skips a padding byte
    let return_addr = ctx.pc().wrapping_add(1);
    push_word(ctx, return_addr);

    let status = ctx.status() | 0b0001_0000;
    push_byte(ctx, status);

    ctx.set_flag_i(true);
    let target = ctx.peek_word(IRQ_VECTOR);
    ctx.set_pc(target);
}

/// RTI - Return from Interrupt.
///
/// Pulls the status byte, then the program counter, exactly undoing BRK.
/// Unlike RTS there is no off-by-one to correct.
pub(crate) fn rti<C: Context>(ctx: &mut C) {
    let status = pull_byte(ctx);
    ctx.set_status(status);

    let return_addr = pull_word(ctx);
    ctx.set_pc(return_addr);
}

/// NOP - No Operation.
pub(crate) fn nop<C: Context>(_ctx: &mut C) {}
