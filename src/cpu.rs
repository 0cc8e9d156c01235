//! # Execute Engine and Reset Routines
//!
//! This module contains the fetch-decode-execute step and the two reset
//! routines. The engine is the system's only execution entry point; callers
//! drive it one instruction at a time, so there is no internal notion of
//! "run until halted".
//!
//! ## Execution Model
//!
//! One [`execute`] call performs:
//! 1. Fetch the opcode byte at PC.
//! 2. Look up its table entry; an `Invalid` mode is a decode failure with no
//!    state change, PC included.
//! 3. Resolve the effective address through the addressing-mode catalog.
//! 4. Advance PC past the instruction, then run the execution routine.
//!    Jump and branch routines overwrite PC with their target; the engine
//!    does not re-advance after an explicit jump.

use crate::addressing::AddressingMode;
use crate::context::Context;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::opcodes::{Op, OPCODE_TABLE};
use crate::ExecutionError;

/// Address of the reset vector: the little-endian word loaded into PC by
/// [`soft_reset`].
pub const RESET_VECTOR: u16 = 0xFFFC;

/// Address of the IRQ/BRK vector consumed by the BRK instruction.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Canonical top-of-stack value installed by [`hard_reset`].
pub const STACK_TOP: u8 = 0xFF;

/// Executes one instruction at the program counter.
///
/// Returns the number of bytes consumed (the instruction length, even when a
/// jump or branch moved PC elsewhere). On a decode failure no register or
/// memory mutation occurs and PC is left at its pre-fetch value; the caller
/// decides whether to halt, skip, or report.
///
/// # Examples
///
/// ```
/// use sim6502::{execute, Context, FlatContext};
///
/// let mut ctx = FlatContext::new();
/// ctx.poke_byte(0x0600, 0xA9); // lda #$05
/// ctx.poke_byte(0x0601, 0x05);
/// ctx.set_pc(0x0600);
///
/// assert_eq!(execute(&mut ctx).unwrap(), 2);
/// assert_eq!(ctx.a(), 0x05);
/// assert_eq!(ctx.pc(), 0x0602);
/// ```
pub fn execute<C: Context>(ctx: &mut C) -> Result<u16, ExecutionError> {
    let pc = ctx.pc();
    let opcode = ctx.peek_byte(pc);
    let entry = &OPCODE_TABLE[opcode as usize];

    if entry.mode == AddressingMode::Invalid {
        return Err(ExecutionError::UnimplementedOpcode(opcode));
    }

    let length = entry.mode.instruction_bytes();
    let ea = entry.mode.resolve(ctx, pc.wrapping_add(1));

    log::trace!("execute {:04x}: {} {:?}", pc, entry.mnemonic, entry.mode);

    // PC points past the instruction before the routine runs; jump and
    // branch routines overwrite it with their target.
    ctx.set_pc(pc.wrapping_add(length));
    dispatch(ctx, entry.op, ea);

    Ok(length)
}

/// Routes an instruction semantic to its execution routine.
///
/// `ea` is the resolved effective address; routines bound to implicit-mode
/// opcodes take no address. The match is exhaustive over [`Op`], so adding a
/// semantic without a routine is a compile error.
fn dispatch<C: Context>(ctx: &mut C, op: Op, ea: u16) {
    match op {
        Op::Adc => alu::adc(ctx, ea),
        Op::And => alu::and(ctx, ea),
        Op::Asl => shifts::asl(ctx, ea),
        Op::AslAcc => shifts::asl_acc(ctx),
        Op::Bcc => branches::bcc(ctx, ea),
        Op::Bcs => branches::bcs(ctx, ea),
        Op::Beq => branches::beq(ctx, ea),
        Op::Bit => alu::bit(ctx, ea),
        Op::Bmi => branches::bmi(ctx, ea),
        Op::Bne => branches::bne(ctx, ea),
        Op::Bpl => branches::bpl(ctx, ea),
        Op::Brk => control::brk(ctx),
        Op::Bvc => branches::bvc(ctx, ea),
        Op::Bvs => branches::bvs(ctx, ea),
        Op::Clc => flags::clc(ctx),
        Op::Cld => flags::cld(ctx),
        Op::Cli => flags::cli(ctx),
        Op::Clv => flags::clv(ctx),
        Op::Cmp => alu::cmp(ctx, ea),
        Op::Cpx => alu::cpx(ctx, ea),
        Op::Cpy => alu::cpy(ctx, ea),
        Op::Dec => inc_dec::dec(ctx, ea),
        Op::Dex => inc_dec::dex(ctx),
        Op::Dey => inc_dec::dey(ctx),
        Op::Eor => alu::eor(ctx, ea),
        Op::Inc => inc_dec::inc(ctx, ea),
        Op::Inx => inc_dec::inx(ctx),
        Op::Iny => inc_dec::iny(ctx),
        Op::Jmp => control::jmp(ctx, ea),
        Op::Jsr => control::jsr(ctx, ea),
        Op::Lda => load_store::lda(ctx, ea),
        Op::Ldx => load_store::ldx(ctx, ea),
        Op::Ldy => load_store::ldy(ctx, ea),
        Op::Lsr => shifts::lsr(ctx, ea),
        Op::LsrAcc => shifts::lsr_acc(ctx),
        Op::Nop => control::nop(ctx),
        Op::Ora => alu::ora(ctx, ea),
        Op::Pha => stack::pha(ctx),
        Op::Php => stack::php(ctx),
        Op::Pla => stack::pla(ctx),
        Op::Plp => stack::plp(ctx),
        Op::Rol => shifts::rol(ctx, ea),
        Op::RolAcc => shifts::rol_acc(ctx),
        Op::Ror => shifts::ror(ctx, ea),
        Op::RorAcc => shifts::ror_acc(ctx),
        Op::Rti => control::rti(ctx),
        Op::Rts => control::rts(ctx),
        Op::Sbc => alu::sbc(ctx, ea),
        Op::Sec => flags::sec(ctx),
        Op::Sed => flags::sed(ctx),
        Op::Sei => flags::sei(ctx),
        Op::Sta => load_store::sta(ctx, ea),
        Op::Stx => load_store::stx(ctx, ea),
        Op::Sty => load_store::sty(ctx, ea),
        Op::Tax => transfer::tax(ctx),
        Op::Tay => transfer::tay(ctx),
        Op::Tsx => transfer::tsx(ctx),
        Op::Txa => transfer::txa(ctx),
        Op::Txs => transfer::txs(ctx),
        Op::Tya => transfer::tya(ctx),
        // Unassigned opcodes never reach dispatch; execute fails first.
        Op::Invalid => {}
    }
}

/// Soft reset: reloads PC from the reset vector and sets the
/// interrupt-disable flag. All other registers are untouched.
///
/// Idempotent and total; it never fails.
///
/// # Examples
///
/// ```
/// use sim6502::{soft_reset, Context, FlatContext};
///
/// let mut ctx = FlatContext::new();
/// ctx.poke_byte(0xFFFC, 0x34);
/// ctx.poke_byte(0xFFFD, 0x12);
///
/// soft_reset(&mut ctx);
/// assert_eq!(ctx.pc(), 0x1234);
/// assert!(ctx.flag_i());
/// ```
pub fn soft_reset<C: Context>(ctx: &mut C) {
    let target = ctx.peek_word(RESET_VECTOR);
    ctx.set_pc(target);
    ctx.set_flag_i(true);

    log::trace!("soft reset: pc={:04x}", target);
}

/// Hard reset: zeroes A, X and Y, sets SP to the canonical top of stack,
/// clears the status flags to their baseline, then performs a soft reset.
///
/// Idempotent and total; it never fails.
pub fn hard_reset<C: Context>(ctx: &mut C) {
    ctx.set_a(0x00);
    ctx.set_x(0x00);
    ctx.set_y(0x00);
    ctx.set_sp(STACK_TOP);
    ctx.set_status(0x00);

    soft_reset(ctx);
}
