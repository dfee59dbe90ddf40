use super::*;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// Negation. Signed formats overflow only at the asymmetric minimum (whose negation is one
  /// past the maximum); unsigned formats use the modular complement `largest - self`, which
  /// never raises.
  #[inline]
  fn neg_kernel(self) -> Self {
    if const { Int::SIGNED } {
      match checks::neg_raw(Self::FORMAT, self.raw()) {
        Some(v) => Self::of_word(Int::of_i128(v)),
        None => Self::of_word(Ovf::resolve(self.to_bits(), "negation")),
      }
    } else {
      Self::of_word(Int::of_i128(Self::RAW_MAX - self.raw()))
    }
  }

  /// Negation that returns `None` instead of invoking the overflow policy. (On unsigned
  /// formats negation never overflows — see [`core::ops::Neg::neg`] — so this is always
  /// `Some` there.)
  #[must_use]
  pub fn checked_neg(self) -> Option<Self> {
    if const { Int::SIGNED } {
      checks::neg_raw(Self::FORMAT, self.raw()).map(|v| Self::of_word(Int::of_i128(v)))
    } else {
      Some(Self::of_word(Int::of_i128(Self::RAW_MAX - self.raw())))
    }
  }

  /// The absolute value. Overflows only for the signed minimum.
  pub fn abs(self) -> Self {
    if self.raw() < 0 { self.neg_kernel() } else { self }
  }

  /// The largest integer value not greater than `self` (round toward minus infinity).
  ///
  /// Overflows only when the format cannot represent the integer itself (e.g. flooring a
  /// negative value on a format with no integer bits).
  pub fn floor(self) -> Self {
    let shift = F as i32 + E;
    if shift <= 0 {
      return self  // the resolution is already a whole number of units
    }
    let shift = shift as u32;
    let t = if shift > 127 {
      if self.raw() < 0 { -1 } else { 0 }
    } else {
      self.raw() >> shift
    };
    Self::rescaled_integer(t, shift, "floor")
  }

  /// The smallest integer value not less than `self` (round toward plus infinity).
  pub fn ceil(self) -> Self {
    let shift = F as i32 + E;
    if shift <= 0 {
      return self
    }
    let shift = shift as u32;
    let t = if shift > 127 {
      if self.raw() > 0 { 1 } else { 0 }
    } else {
      // floor, bumped when any fractional bit is set (no negation: i128::MIN stays in range)
      let down = self.raw() >> shift;
      if self.raw() & ((1i128 << shift) - 1) != 0 { down + 1 } else { down }
    };
    Self::rescaled_integer(t, shift, "ceil")
  }

  /// The nearest integer value, ties away from zero.
  pub fn round(self) -> Self {
    let shift = F as i32 + E;
    if shift <= 0 {
      return self
    }
    let shift = shift as u32;
    Self::rescaled_integer(checks::shift_round(self.raw(), shift), shift, "round")
  }

  /// Scale the integer count `t` back up to the format's resolution, range-checked.
  fn rescaled_integer(t: i128, shift: u32, what: &'static str) -> Self {
    match checks::shl_exact(t, shift) {
      Some(v) => Self::from_raw_checked(v, what),
      None => Self::of_word(Ovf::resolve(Int::ZERO, what)),
    }
  }
}

impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
> core::ops::Neg for Fix<N, F, Int, E, Ovf, Unf> {
  type Output = Self;

  #[inline]
  fn neg(self) -> Self {
    self.neg_kernel()
  }
}

impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
> core::ops::Neg for &Fix<N, F, Int, E, Ovf, Unf> {
  type Output = Fix<N, F, Int, E, Ovf, Unf>;

  #[inline]
  fn neg(self) -> Self::Output {
    (*self).neg_kernel()
  }
}
