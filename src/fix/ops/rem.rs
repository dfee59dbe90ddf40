use super::*;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// Same-format truncated remainder (the `fmod` convention: the result has the sign of the
  /// dividend and magnitude below `|rhs|`). Exact on the stored integers, and always in
  /// range. A zero divisor panics unconditionally.
  #[inline]
  fn rem_kernel(self, rhs: Self) -> Self {
    if rhs.raw() == 0 {
      panic!("fixed-point division by zero")
    }
    // A divisor of -1 divides everything exactly; the native % would overflow on i128::MIN.
    let r = if rhs.raw() == -1 { 0 } else { self.raw() % rhs.raw() };
    Self::of_word(Int::of_i128(r))
  }

  /// The IEEE-style remainder: `self - q·rhs` where `q` is `self/rhs` rounded to the *nearest*
  /// integer, ties to even. Unlike `%`, the result can be negative for positive operands (its
  /// magnitude is at most `|rhs|/2`), so on unsigned formats it goes through the overflow
  /// policy. A zero divisor panics unconditionally.
  pub fn remainder(self, rhs: Self) -> Self {
    let a = self.raw();
    let b = rhs.raw();
    if b == 0 {
      panic!("fixed-point division by zero")
    }
    // Every value is a multiple of a divisor of -1, so the remainder is zero; going through
    // a / b here would overflow on i128::MIN.
    if b == -1 {
      return Self::of_word(Int::ZERO)
    }
    let q0 = a / b;
    let rem = a % b;
    // Round the true quotient q0 + rem/b to nearest-even: compare twice the remainder against
    // the divisor.
    let m2 = rem.unsigned_abs() * 2;
    let b_abs = b.unsigned_abs();
    let dir: i128 = if (rem < 0) != (b < 0) { -1 } else { 1 };
    let q = if m2 > b_abs || (m2 == b_abs && q0 % 2 != 0) { q0 + dir } else { q0 };
    // q·b is within one divisor of the dividend, so the wrapping arithmetic lands on the
    // mathematically small result even when the intermediate product exceeds i128.
    let r = a.wrapping_sub(q.wrapping_mul(b));
    Self::from_raw_checked(r, "remainder")
  }
}

mk_ops!{Rem, RemAssign, rem, rem_assign, rem_kernel}
