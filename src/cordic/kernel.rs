//! The four CORDIC iteration loops, plus the fixed-point helpers the evaluators share.
//!
//! Registers are `i64` with `fw` fractional bits, `fw` in `FW_MIN ..= FW_MAX`. Every loop runs
//! a number of micro-rotations fixed by `fw` alone, one table entry and three shift-and-adds
//! each: the timing is data-independent. Callers are responsible for range-reducing the
//! arguments so the registers cannot leave `i64` (the evaluators all do).

use super::tables;
use crate::fix::checks;

/// Working precisions below this gain nothing (the tables themselves are only consumed down
/// to a handful of bits of headroom).
pub(crate) const FW_MIN: u32 = 4;

/// Working precisions above this would overflow the `i64` registers on the extremes of the
/// reduced ranges (the circular registers reach ~1.65·(1+π/2) ≈ 4.2 times the unit).
pub(crate) const FW_MAX: u32 = 58;

/// The working fractional precision for an evaluation from resolution `r_in` to `r_out`
/// (resolutions in bits, i.e. `F + E` of the formats involved).
#[inline]
pub(crate) fn working_frac(r_in: i32, r_out: i32) -> u32 {
  r_in.max(r_out).clamp(FW_MIN as i32, FW_MAX as i32) as u32
}

/// Rescale a stored integer from resolution `res` (fractional bits, i.e. `F + E`) to the
/// working precision. Rounds half away from zero when narrowing; `None` when the magnitude is
/// too large to hold at `fw` fractional bits even in an `i128` — the evaluators treat that as
/// "effectively infinite" and short-circuit.
pub(crate) fn to_working(raw: i128, res: i32, fw: u32) -> Option<i128> {
  let shift = fw as i32 - res;
  if shift >= 0 {
    checks::shl_exact(raw, shift as u32)
  } else {
    Some(checks::shift_round(raw, (-shift) as u32))
  }
}

/// Exact `|raw × 2^-res| <= 1`. Domain checks must not go through [`to_working`], whose
/// rounding would blur the boundary.
pub(crate) fn magnitude_le_one(raw: i128, res: i32) -> bool {
  if raw == 0 {
    true
  } else if res < 0 {
    false
  } else if res > 127 {
    true
  } else {
    raw.unsigned_abs() <= 1u128 << res
  }
}

/// Exact `|raw × 2^-res| < 1`.
pub(crate) fn magnitude_lt_one(raw: i128, res: i32) -> bool {
  if raw == 0 {
    true
  } else if res <= 0 {
    false
  } else if res > 127 {
    true
  } else {
    raw.unsigned_abs() < 1u128 << res
  }
}

/// A Q62 table entry shifted down to `fw` fractional bits, round to nearest.
#[inline]
fn lut_at(table: &[i64; 63], i: u32, fw: u32) -> i64 {
  let s = tables::Q - fw;
  (table[i as usize] + (1 << (s - 1))) >> s
}

/// An unsigned Q62 table entry at `fw` fractional bits, round to nearest (the power-of-two
/// tables; their consumers work in `i128`).
#[inline]
pub(crate) fn lut_u(table: &[u64; 63], i: u32, fw: u32) -> i128 {
  let s = tables::Q - fw;
  ((table[i as usize] + (1 << (s - 1))) >> s) as i128
}

/// A Q62 constant at `fw` fractional bits, round to nearest.
#[inline]
pub(crate) fn const_q(c_q62: i64, fw: u32) -> i64 {
  let s = tables::Q - fw;
  (c_q62 + (1 << (s - 1))) >> s
}

/// π at `fw` fractional bits. Derived from π/2 with one bit less of shift (π itself at Q62
/// does not fit an `i64`).
#[inline]
pub(crate) fn pi(fw: u32) -> i64 {
  let s = tables::Q - fw - 1;
  (tables::PI_2 + (1 << (s - 1))) >> s
}

/// 2π at `fw` fractional bits, same derivation.
#[inline]
pub(crate) fn two_pi(fw: u32) -> i64 {
  let s = tables::Q - fw - 2;
  (tables::PI_2 + (1 << (s - 1))) >> s
}

/// Round-to-nearest fixed-point product at `fw` fractional bits.
#[inline]
pub(crate) fn mul_q(a: i128, b: i128, fw: u32) -> i128 {
  (a * b + (1 << (fw - 1))) >> fw
}

/// Round-to-nearest fixed-point quotient `(a << fw) / b` (floor quotient, then round up on a
/// half or more of the divisor — exact nearest for either sign of either operand).
pub(crate) fn div_q(a: i128, b: i128, fw: u32) -> i128 {
  let num = a << fw;
  let mut q = num / b;
  let mut r = num % b;
  if r != 0 && (r < 0) != (b < 0) {
    q -= 1;
    r += b;
  }
  if 2 * r.abs() >= b.abs() { q + 1 } else { q }
}

/// Circular rotation: drives `z` to 0, taking `(x, y)` to the point `(x, y)` rotated by the
/// angle `z`, times the circular gain. Seed `x` with the inverse gain to get the unit circle.
pub(crate) fn rotate_circular(mut x: i64, mut y: i64, mut z: i64, fw: u32) -> (i64, i64, i64) {
  for i in 0..=fw {
    let a = lut_at(&tables::ATAN, i, fw);
    let (dx, dy) = (y >> i, x >> i);
    if z >= 0 {
      x -= dx;
      y += dy;
      z -= a;
    } else {
      x += dx;
      y -= dy;
      z += a;
    }
  }
  (x, y, z)
}

/// Circular vectoring: drives `y` to 0, accumulating `atan(y/x)` into `z`.
pub(crate) fn vector_circular(mut x: i64, mut y: i64, mut z: i64, fw: u32) -> (i64, i64, i64) {
  for i in 0..=fw {
    let a = lut_at(&tables::ATAN, i, fw);
    let (dx, dy) = (y >> i, x >> i);
    if y <= 0 {
      x -= dx;
      y += dy;
      z -= a;
    } else {
      x += dx;
      y -= dy;
      z += a;
    }
  }
  (x, y, z)
}

/// Hyperbolic rotation: drives `z` to 0, taking `(x, y)` to `(x cosh z + y sinh z, ...)` times
/// the hyperbolic gain. Iterations start at 1; `i = 4, 13, 40` run twice (`k ← 3k + 1`), which
/// is what makes the hyperbolic recurrence converge.
pub(crate) fn rotate_hyperbolic(mut x: i64, mut y: i64, mut z: i64, fw: u32) -> (i64, i64, i64) {
  let mut rep = 4;
  let mut i = 1;
  while i <= fw {
    let twice = i == rep;
    if twice {
      rep = 3 * i + 1;
    }
    let a = lut_at(&tables::ATANH, i, fw);
    for _ in 0..if twice { 2 } else { 1 } {
      let (dx, dy) = (y >> i, x >> i);
      if z >= 0 {
        x += dx;
        y += dy;
        z -= a;
      } else {
        x -= dx;
        y -= dy;
        z += a;
      }
    }
    i += 1;
  }
  (x, y, z)
}

/// Hyperbolic vectoring: drives `y` to 0, accumulating `atanh(y/x)` into `z`; the same
/// repeating schedule as [`rotate_hyperbolic`].
pub(crate) fn vector_hyperbolic(mut x: i64, mut y: i64, mut z: i64, fw: u32) -> (i64, i64, i64) {
  let mut rep = 4;
  let mut i = 1;
  while i <= fw {
    let twice = i == rep;
    if twice {
      rep = 3 * i + 1;
    }
    let a = lut_at(&tables::ATANH, i, fw);
    for _ in 0..if twice { 2 } else { 1 } {
      let (dx, dy) = (y >> i, x >> i);
      if y <= 0 {
        x += dx;
        y += dy;
        z -= a;
      } else {
        x -= dx;
        y -= dy;
        z += a;
      }
    }
    i += 1;
  }
  (x, y, z)
}
