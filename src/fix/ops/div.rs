use super::*;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// How many bits each operand loses before a same-format division so the shifted dividend
  /// fits the 128-bit intermediate. Zero whenever the quotient promotion of the format is
  /// expandable, and for most non-expandable formats with a modest `F + E`.
  const DIV_DROPPED_BITS: u32 = {
    if Format::quotient(Self::FORMAT, Self::FORMAT).expandable() {
      0
    } else {
      let need = N as i32 + F as i32 + E - 127;
      if need < 0 { 0 } else { need as u32 }
    }
  };

  /// Same-format division, truncated toward zero at the format's resolution and
  /// range-checked. Division by zero panics unconditionally (it is a domain error, not a
  /// representability problem, so no policy applies).
  ///
  /// On formats where the 128-bit intermediate cannot hold the shifted dividend, both
  /// operands are right-shifted by [`Self::DIV_DROPPED_BITS`] first (the shifts cancel in the
  /// quotient, but the dropped low bits perturb it; the relative error stays below
  /// `2^(DIV_DROPPED_BITS+1) / |rhs_stored|`).
  #[inline]
  fn div_kernel(self, rhs: Self) -> Self {
    if rhs.raw() == 0 {
      panic!("fixed-point division by zero")
    }
    if const { Format::quotient(Self::FORMAT, Self::FORMAT).expandable() } {
      match checks::quotient_exact(F as i32 + E, self.raw(), rhs.raw()) {
        Some(v) if v >= Self::RAW_MIN && v <= Self::RAW_MAX => {
          Self::of_word(Int::of_i128(v))
        }
        Some(v) => Self::of_word(Ovf::resolve(Self::truncate_to_format(v), "division")),
        // The shifted dividend exceeded i128 (large N with a large positive E): report
        // overflow, conservatively.
        None => Self::of_word(Ovf::resolve(Int::ZERO, "division")),
      }
    } else {
      match self.div_approx(rhs) {
        Some(v) => Self::from_raw_checked(v, "division"),
        None => Self::of_word(Ovf::resolve(Int::ZERO, "division")),
      }
    }
  }

  /// The reduced-precision quotient. `None` when the reduced divisor vanishes (the true
  /// quotient is then far outside the format anyway).
  fn div_approx(self, rhs: Self) -> Option<i128> {
    let r = Self::DIV_DROPPED_BITS;
    checks::quotient_exact(F as i32 + E, self.raw() >> r, rhs.raw() >> r)
  }

  /// Division that returns `None` instead of panicking on a zero divisor or invoking the
  /// overflow policy.
  #[must_use]
  pub fn checked_div(self, rhs: Self) -> Option<Self> {
    if rhs.raw() == 0 {
      return None
    }
    let q = if const { Format::quotient(Self::FORMAT, Self::FORMAT).expandable() } {
      checks::quotient_exact(F as i32 + E, self.raw(), rhs.raw())
    } else {
      self.div_approx(rhs)
    };
    match q {
      Some(v) if v >= Self::RAW_MIN && v <= Self::RAW_MAX => Some(Self::of_word(Int::of_i128(v))),
      _ => None,
    }
  }
}

mk_ops!{Div, DivAssign, div, div_assign, div_kernel}
