//! Exact raw arithmetic for each operation, as pure functions over a [`Format`] and `i128`
//! stored integers. The operators and the `checked_*` methods are thin layers over the `*_raw`
//! functions, so the range logic has exactly one home; the `*_overflows` predicates ask the
//! same question as a bare yes/no.
//!
//! All functions take operands *already aligned to the same format* `f` (the operators convert
//! the right operand first). `None` means the exact result does not fit `f`'s stored range (or,
//! for quotients, that the divisor is zero).

use super::format::Format;

/// `Some(raw)` if `a + b` fits the format, else `None`.
pub(crate) fn sum_raw(f: Format, a: i128, b: i128) -> Option<i128> {
  match a.checked_add(b) {
    Some(s) if s >= f.raw_min() && s <= f.raw_max() => Some(s),
    _ => None,
  }
}

/// `Some(raw)` if `a - b` fits the format, else `None`.
pub(crate) fn diff_raw(f: Format, a: i128, b: i128) -> Option<i128> {
  match a.checked_sub(b) {
    Some(s) if s >= f.raw_min() && s <= f.raw_max() => Some(s),
    _ => None,
  }
}

/// `Some(raw)` if `-a` fits the format, else `None`. The interesting case is the signed
/// minimum, whose negation is one past the maximum.
pub(crate) fn neg_raw(f: Format, a: i128) -> Option<i128> {
  match a.checked_neg() {
    Some(s) if s >= f.raw_min() && s <= f.raw_max() => Some(s),
    _ => None,
  }
}

/// The same-format product, rounded half away from zero back to the format's scale:
/// `raw = round(a·b / 2^(F+E))`. `None` on overflow. Only called when the product of the
/// format with itself is expandable, so the `a·b` intermediate cannot exceed `i128`.
pub(crate) fn product_raw(f: Format, a: i128, b: i128) -> Option<i128> {
  let p = a.checked_mul(b)?;
  let shift = f.frac as i32 + f.exp;
  let s = if shift >= 0 {
    shift_round(p, shift as u32)
  } else {
    shl_exact(p, (-shift) as u32)?
  };
  if s >= f.raw_min() && s <= f.raw_max() { Some(s) } else { None }
}

/// The same-format quotient, truncated toward zero: `raw = a·2^(F+E) / b`. `None` on overflow
/// or when `b` is zero.
///
/// The shifted dividend is computed in `i128`; in the corner where it alone exceeds 128 bits
/// (large `N` combined with a large positive `E`) the overflow report is conservative.
pub(crate) fn quotient_raw(f: Format, a: i128, b: i128) -> Option<i128> {
  let shift = f.frac as i32 + f.exp;
  match quotient_exact(shift, a, b) {
    Some(s) if s >= f.raw_min() && s <= f.raw_max() => Some(s),
    _ => None,
  }
}

/// The truncated quotient `a·2^shift / b` with no range check; `None` when `b` is zero or the
/// shifted dividend does not fit `i128`.
pub(crate) fn quotient_exact(shift: i32, a: i128, b: i128) -> Option<i128> {
  if b == 0 {
    return None
  }
  // A negative total shift divides the dividend; apply it to the divisor instead, so no
  // precision is discarded before the division. A divisor too large for i128 makes the
  // truncated quotient zero.
  if shift >= 0 {
    let n = shl_exact(a, shift as u32)?;
    // n / -1 is the one native quotient that can itself overflow (n == i128::MIN)
    if b == -1 { n.checked_neg() } else { Some(n / b) }
  } else {
    match shl_exact(b, (-shift) as u32) {
      Some(d) => Some(a / d),
      None => Some(0),
    }
  }
}

/// Left shift that fails instead of discarding value bits.
pub(crate) fn shl_exact(v: i128, shift: u32) -> Option<i128> {
  if v == 0 {
    Some(0)
  } else if shift > 127 {
    None
  } else {
    let headroom = if v > 0 { v.leading_zeros() - 1 } else { (!v).leading_zeros() - 1 };
    if shift <= headroom { Some(v << shift) } else { None }
  }
}

/// Right-shift rounding half away from zero (the crate-wide rounding rule for precision-losing
/// rescales).
pub(crate) fn shift_round(v: i128, shift: u32) -> i128 {
  if shift == 0 {
    v
  } else if shift > 127 {
    0
  } else {
    let half = 1i128 << (shift - 1);
    if v >= 0 { (v + half) >> shift } else { -((-v + half) >> shift) }
  }
}

pub(crate) fn sum_overflows(f: Format, a: i128, b: i128) -> bool {
  sum_raw(f, a, b).is_none()
}

pub(crate) fn diff_overflows(f: Format, a: i128, b: i128) -> bool {
  diff_raw(f, a, b).is_none()
}

pub(crate) fn neg_overflows(f: Format, a: i128) -> bool {
  neg_raw(f, a).is_none()
}

pub(crate) fn product_overflows(f: Format, a: i128, b: i128) -> bool {
  product_raw(f, a, b).is_none()
}

/// True on range overflow *and* on division by zero.
pub(crate) fn quotient_overflows(f: Format, a: i128, b: i128) -> bool {
  quotient_raw(f, a, b).is_none()
}
