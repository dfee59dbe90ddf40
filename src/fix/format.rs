//! The value-level format descriptor and the type-promotion rules.
//!
//! Stable Rust cannot compute with const generics in type position, so the promoted format of
//! an operation is described by a plain value, [`Format`], and a pure function over it,
//! [`Format::promote`]. The widening operations (see [`ops`](super::ops)) take the output
//! format as explicit generic parameters and `const`-assert, at monomorphisation time, that it
//! can hold the format this module computes. The caller writes the width; the compiler checks
//! the arithmetic.

use super::*;

/// The four compile-time parameters of a fixed-point type, as a value. The represented real
/// value of a stored integer `raw` is `raw × 2^(-frac-exp)`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Format {
  /// Total significant bits, including the sign bit if `signed`.
  pub bits: u32,
  /// Fractional bits.
  pub frac: u32,
  /// Scale exponent.
  pub exp: i32,
  /// Whether the stored integer is two's-complement signed.
  pub signed: bool,
}

/// The operation kinds that promote differently (sum and difference share a rule).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Op {
  Sum,
  Product,
  Quotient,
}

impl Format {
  /// The exponent of the format's resolution: adjacent representable values are
  /// `2^(-frac-exp)` apart, and larger `res()` means finer.
  const fn res(self) -> i32 {
    self.frac as i32 + self.exp
  }

  /// The format's integer capacity: the largest representable value is just under
  /// `2^int_capacity()`.
  const fn int_capacity(self) -> i32 {
    (self.bits - self.signed as u32) as i32 - self.res()
  }

  /// The promoted format of a sum or difference: one extra bit to hold the carry. The operands
  /// must agree on fractional bits and scale exponent (the operators align them beforehand).
  pub const fn sum(a: Format, b: Format) -> Format {
    assert!(
      a.frac == b.frac && a.exp == b.exp,
      "Sum/difference promotion requires operands with equal fractional bits and scale exponent",
    );
    let bits = if a.bits >= b.bits { a.bits } else { b.bits } + 1;
    Format { bits, frac: a.frac, exp: a.exp, signed: a.signed || b.signed }
  }

  /// The promoted format of a product: integer bits and fractional bits both add, so the exact
  /// product of any two operand values fits.
  pub const fn product(a: Format, b: Format) -> Format {
    Format {
      bits: a.bits + b.bits,
      frac: a.frac + b.frac,
      exp: a.exp + b.exp,
      signed: a.signed || b.signed,
    }
  }

  /// The promoted format of a quotient: the dividend's total bits on each side of the point.
  /// Integer bits cover the magnitude blow-up from a small divisor, fractional bits absorb the
  /// division's left shift.
  pub const fn quotient(a: Format, b: Format) -> Format {
    Format {
      bits: 2 * a.bits,
      frac: a.bits,
      exp: a.exp - b.exp,
      signed: a.signed || b.signed,
    }
  }

  /// The promoted format of `op` applied to operands of formats `a` and `b`.
  pub const fn promote(op: Op, a: Format, b: Format) -> Format {
    match op {
      Op::Sum => Format::sum(a, b),
      Op::Product => Format::product(a, b),
      Op::Quotient => Format::quotient(a, b),
    }
  }

  /// Whether every stored value of the format fits the widest intermediate this crate computes
  /// in, a signed 128-bit integer. This is the boundary between exact and approximate
  /// arithmetic: an expandable promoted format means the operation's exact result is
  /// representable, a non-expandable one forces the reduced-precision fallback.
  pub const fn expandable(self) -> bool {
    if self.signed { self.bits <= 128 } else { self.bits <= 127 }
  }

  /// Largest stored integer of the format, as an `i128` (only meaningful for expandable
  /// formats).
  pub(crate) const fn raw_max(self) -> i128 {
    let value_bits = self.bits - self.signed as u32;
    // 127 value bits is already the whole positive i128 range; 1 << 127 would overflow
    if value_bits >= 127 { i128::MAX } else { (1i128 << value_bits) - 1 }
  }

  /// Least stored integer of the format, as an `i128`.
  pub(crate) const fn raw_min(self) -> i128 {
    if self.signed { -self.raw_max() - 1 } else { 0 }
  }

  /// Whether every value representable in format `other` is exactly representable in `self`:
  /// at least as fine a resolution, at least the integer capacity, and not unsigned when
  /// `other` can be negative.
  pub const fn holds(self, other: Format) -> bool {
    (self.signed || !other.signed)
      && self.res() >= other.res()
      && self.int_capacity() >= other.int_capacity()
  }
}

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// This type's format, as a value.
  pub const FORMAT: Format =
    Format { bits: Self::BITS, frac: Self::FRAC, exp: Self::SCALE_EXP, signed: Int::SIGNED };
}
