//! Fixed typed dispatch chain observed by external entry/exit probes.
//!
//! Eight steps, one per primitive type, in the fixed order
//! int → long → double → float → byte → bool → char → short. Each step
//! accepts a value of its designated type, constructs the next step's
//! literal constant, and calls it; the final step returns without calling
//! anything. The incoming value never influences the outgoing constant, so
//! a probe on each boundary sees the same deterministic sequence on every
//! run regardless of how the chain was entered.
//!
//! Every step is `#[no_mangle]` + `#[inline(never)]` so each boundary stays
//! a distinct, stably named symbol in optimized builds, and the incoming
//! parameter goes through `black_box` so its register is live at entry.

use std::hint::black_box;
use std::time::Duration;

#[cfg(test)]
use std::cell::RefCell;

/// Delay before the chain fires, giving an external probe time to attach.
pub const STARTUP_DELAY: Duration = Duration::from_secs(30);

/// Seed value `main` feeds into the first step.
pub const INT_SEED: i32 = 42;

/// Constant forwarded by `step_int` into `step_long`.
pub const LONG_STEP_VALUE: i64 = 254_775_806;
/// Constant forwarded by `step_long` into `step_double`.
pub const DOUBLE_STEP_VALUE: f64 = 3.14;
/// Constant forwarded by `step_double` into `step_float`. Below the 2^24
/// exact-integer threshold of `f32`, so the value is bit-exact.
pub const FLOAT_STEP_VALUE: f32 = 2_345_987.0;
/// Constant forwarded by `step_float` into `step_byte`.
pub const BYTE_STEP_VALUE: i8 = 10;
/// Constant forwarded by `step_byte` into `step_bool`.
pub const BOOL_STEP_VALUE: bool = true;
/// Constant forwarded by `step_bool` into `step_char`.
pub const CHAR_STEP_VALUE: char = 'a';
/// Constant forwarded by `step_char` into `step_short`.
pub const SHORT_STEP_VALUE: i16 = 14;

#[cfg(test)]
thread_local! {
    static CALL_LOG: RefCell<Vec<(&'static str, String)>> =
        const { RefCell::new(Vec::new()) };
}

#[cfg(test)]
fn record(step: &'static str, value: &dyn std::fmt::Debug) {
    CALL_LOG.with(|log| log.borrow_mut().push((step, format!("{value:?}"))));
}

/// Drain the call events recorded on this thread (test builds only).
#[cfg(test)]
pub fn take_call_log() -> Vec<(&'static str, String)> {
    CALL_LOG.with(|log| log.borrow_mut().split_off(0))
}

/// Step 1: 32-bit int boundary.
#[no_mangle]
#[inline(never)]
pub fn step_int(message: i32) {
    #[cfg(test)]
    record("step_int", &message);
    black_box(message);
    let j = LONG_STEP_VALUE;
    step_long(j);
}

/// Step 2: 64-bit int boundary.
#[no_mangle]
#[inline(never)]
pub fn step_long(message: i64) {
    #[cfg(test)]
    record("step_long", &message);
    black_box(message);
    let k = DOUBLE_STEP_VALUE;
    step_double(k);
}

/// Step 3: 64-bit float boundary.
#[no_mangle]
#[inline(never)]
pub fn step_double(message: f64) {
    #[cfg(test)]
    record("step_double", &message);
    black_box(message);
    let l = FLOAT_STEP_VALUE;
    step_float(l);
}

/// Step 4: 32-bit float boundary.
#[no_mangle]
#[inline(never)]
pub fn step_float(message: f32) {
    #[cfg(test)]
    record("step_float", &message);
    black_box(message);
    let n = BYTE_STEP_VALUE;
    step_byte(n);
}

/// Step 5: 8-bit int boundary.
#[no_mangle]
#[inline(never)]
pub fn step_byte(message: i8) {
    #[cfg(test)]
    record("step_byte", &message);
    black_box(message);
    let o = BOOL_STEP_VALUE;
    step_bool(o);
}

/// Step 6: boolean boundary.
#[no_mangle]
#[inline(never)]
pub fn step_bool(message: bool) {
    #[cfg(test)]
    record("step_bool", &message);
    black_box(message);
    let p = CHAR_STEP_VALUE;
    step_char(p);
}

/// Step 7: character boundary.
#[no_mangle]
#[inline(never)]
pub fn step_char(message: char) {
    #[cfg(test)]
    record("step_char", &message);
    black_box(message);
    let q = SHORT_STEP_VALUE;
    step_short(q);
}

/// Step 8: 16-bit int boundary. Terminates the chain.
#[no_mangle]
#[inline(never)]
pub fn step_short(message: i16) {
    #[cfg(test)]
    record("step_short", &message);
    black_box(message);
}
