use super::*;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// The number of significant bits of this format (i.e. parameter `N`), including the sign bit
  /// for signed formats.
  ///
  /// Note: this is the logical size, not necessarily the size of the underlying word.
  pub const BITS: u32 = {
    assert!(
      N >= 1,
      "A fixed-point format cannot have fewer than 1 bit",
    );
    assert!(
      !Int::SIGNED || N >= 2,
      "A signed fixed-point format needs at least 2 bits (sign plus one value bit)",
    );
    assert!(
      N <= Int::BITS,
      "Cannot store an N-bit fixed-point number in a word with fewer than N bits",
    );
    N
  };

  /// The number of fractional bits (i.e. parameter `F`).
  pub const FRAC: u32 = {
    assert!(
      F <= N,
      "Cannot have more fractional bits F than total significant bits N",
    );
    F
  };

  /// The scale exponent (i.e. parameter `E`). The represented value is `stored × 2^(-F-E)`, so
  /// positive `E` scales the whole format down and negative `E` scales it up.
  pub const SCALE_EXP: i32 = {
    // Extreme scale exponents would push the float conversion factor 2^(F+E) outside the finite
    // f64 range. No real format comes anywhere near this; check it at compile time.
    assert!(
      E >= -768 && E <= 768,
      "The scale exponent E is limited to ±768",
    );
    E
  };

  /// When storing an `N`-bit format in a word whose width is `M > N`, the leftmost `M - N` bits
  /// are junk; they are kept equal to bit `N-1` (the function [`Self::sign_extend`] maintains
  /// this invariant, and for unsigned words they are simply zero).
  pub(crate) const JUNK_BITS: u32 = Int::BITS - Self::BITS;

  /// Largest stored integer of the format, as an `i128`: `2^(N-1) - 1` signed, `2^N - 1`
  /// unsigned.
  pub(crate) const RAW_MAX: i128 = {
    let value_bits = if Int::SIGNED { Self::BITS - 1 } else { Self::BITS };
    // 127 value bits is already the whole positive i128 range; 1 << 127 would overflow
    if value_bits >= 127 { i128::MAX } else { (1i128 << value_bits) - 1 }
  };

  /// Least stored integer of the format, as an `i128`: `-2^(N-1)` signed (the same asymmetric
  /// two's-complement range as the native words, so that an `N`-bit format over an `N`-bit word
  /// has exactly the word's own range), `0` unsigned.
  pub(crate) const RAW_MIN: i128 =
    if Int::SIGNED { -Self::RAW_MAX - 1 } else { 0 };

  /// Construct from a word, without any validation. Only for raw values already known to be in
  /// `RAW_MIN ..= RAW_MAX`.
  #[inline]
  pub(crate) const fn of_word(raw: Int) -> Self {
    Self(raw, core::marker::PhantomData)
  }

  /// Take an `Int` and sign-extend from [`Self::BITS`] (logical width) to `Int::BITS`.
  #[inline]
  pub(crate) fn sign_extend(x: Int) -> Int {
    if const { Self::JUNK_BITS == 0 } {
      x
    } else {
      (x << Self::JUNK_BITS) >> Self::JUNK_BITS
    }
  }

  /// Truncate an `i128` into the stored range of this format, two's-complement style (this is
  /// the value an [`Ignoring`](super::policy::Ignoring) overflow resolves to).
  #[inline]
  pub(crate) fn truncate_to_format(v: i128) -> Int {
    Self::sign_extend(Int::of_i128(v))
  }

  /// Construct a fixed-point number from its raw bit representation, with **no scaling** (the
  /// number constructed from `bits = b` has value `b × 2^(-F-E)`, not `b`). Bits higher (more
  /// significant) than the lowest `N` bits, if any, are ignored.
  #[inline]
  pub fn from_bits(bits: Int) -> Self {
    const { assert!(Self::BITS > 0 && Self::FRAC <= N && Self::SCALE_EXP < 1000) }
    Self::of_word(Self::sign_extend(bits))
  }

  /// Return the underlying bit representation as a machine int. Bits above the lowest `N`, if
  /// any, are sign-extended.
  #[inline]
  pub const fn to_bits(self) -> Int {
    self.0
  }

  /// Directly set the stored integer, after a range check: a `raw` outside the format's stored
  /// range goes through the overflow policy. This is the "already exactly scaled" constructor,
  /// for callers that computed a raw value themselves.
  pub fn wrap(raw: Int) -> Self {
    let v = raw.as_i128();
    if v < Self::RAW_MIN || v > Self::RAW_MAX {
      Self::of_word(Ovf::resolve(Self::truncate_to_format(v), "wrap"))
    } else {
      Self::of_word(raw)
    }
  }

  /// Mutable access to the stored integer, **bypassing every range check**.
  ///
  /// This is the escape hatch for bit-twiddling callers (it is what the CORDIC evaluators use
  /// internally to shift and mask without re-validating on every micro-step). Writing a value
  /// outside the format's stored range through this reference leaves the number in a state
  /// where the format invariant does not hold; everything else in this crate assumes it does.
  #[inline]
  pub fn as_bits_mut(&mut self) -> &mut Int {
    &mut self.0
  }

  /// The stored integer widened to `i128` (lossless for every supported word).
  #[inline]
  pub(crate) fn raw(self) -> i128 {
    self.0.as_i128()
  }

  /// Construct from an `i128` raw value, routing out-of-range values through the overflow
  /// policy.
  #[inline]
  pub(crate) fn from_raw_checked(v: i128, what: &'static str) -> Self {
    if v < Self::RAW_MIN || v > Self::RAW_MAX {
      Self::of_word(Ovf::resolve(Self::truncate_to_format(v), what))
    } else {
      Self::of_word(Int::of_i128(v))
    }
  }

  /// Construct from a value scaled as `v × 2^(-frac)`, rescaling to this format's `2^(-F-E)`.
  /// Right shifts round half away from zero; a nonzero `v` that rounds to exactly zero goes
  /// through the underflow policy, and an out-of-range result through the overflow policy.
  ///
  /// This is the landing path for every CORDIC result and for integer construction.
  pub(crate) fn from_scaled_i128(v: i128, frac: i32, what: &'static str) -> Self {
    let shift = F as i32 + E - frac;
    if v == 0 {
      return Self::of_word(Int::ZERO)
    }
    if shift >= 0 {
      // Widening: exact when the shifted value fits i128 (shl_exact keeps the i128::MIN
      // corner representable), then range-checked against the format.
      match checks::shl_exact(v, shift as u32) {
        Some(w) => Self::from_raw_checked(w, what),
        None => Self::of_word(Ovf::resolve(Int::ZERO, what)),
      }
    } else {
      // Narrowing: round half away from zero, then check for total cancellation.
      let shift = (-shift) as u32;
      let rounded = if shift > 127 {
        0
      } else {
        let half = 1i128 << (shift - 1);
        if v >= 0 { (v + half) >> shift } else { -((-v + half) >> shift) }
      };
      if rounded == 0 {
        return Self::of_word(Unf::resolve(Int::ZERO, what))
      }
      Self::from_raw_checked(rounded, what)
    }
  }

  /// The largest representable value of the format (same value as [`Self::MAX`]).
  #[inline]
  pub fn largest() -> Self {
    Self::MAX
  }

  /// The least representable value of the format (same value as [`Self::MIN`]).
  #[inline]
  pub fn least() -> Self {
    Self::MIN
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::Fix;

  #[test]
  fn bits() {
    assert_eq!(Fix::<8, 4, i8>::BITS, 8);
    assert_eq!(Fix::<25, 21, i32>::BITS, 25);
    assert_eq!(Fix::<64, 32, i64>::BITS, 64);
    assert_eq!(Fix::<10, 10, u16>::BITS, 10);
  }

  #[test]
  fn raw_range_native_widths() {
    assert_eq!(Fix::<8, 4, i8>::RAW_MAX, i8::MAX as i128);
    assert_eq!(Fix::<8, 4, i8>::RAW_MIN, i8::MIN as i128);
    assert_eq!(Fix::<32, 16, i32>::RAW_MAX, i32::MAX as i128);
    assert_eq!(Fix::<32, 16, i32>::RAW_MIN, i32::MIN as i128);
    assert_eq!(Fix::<64, 3, i64>::RAW_MAX, i64::MAX as i128);
    assert_eq!(Fix::<64, 3, i64>::RAW_MIN, i64::MIN as i128);
    assert_eq!(Fix::<128, 64, i128>::RAW_MAX, i128::MAX);
    assert_eq!(Fix::<128, 64, i128>::RAW_MIN, i128::MIN);
    assert_eq!(Fix::<16, 16, u16>::RAW_MAX, u16::MAX as i128);
    assert_eq!(Fix::<16, 16, u16>::RAW_MIN, 0);
    assert_eq!(Fix::<64, 0, u64>::RAW_MAX, u64::MAX as i128);
  }

  #[test]
  fn raw_range_sub_width() {
    assert_eq!(Fix::<25, 21, i32>::RAW_MAX, (1 << 24) - 1);
    assert_eq!(Fix::<25, 21, i32>::RAW_MIN, -(1 << 24));
    assert_eq!(Fix::<6, 2, u8>::RAW_MAX, 63);
  }

  #[test]
  fn q128_works_end_to_end() {
    // The full-width signed format: its stored range is exactly the i128 range, and arithmetic
    // on it must still go through the policies rather than native overflow.
    type T = crate::Q128<0>;
    let x = T::round_from(-5);
    assert_eq!((-x).to_bits(), 5);
    assert_eq!(T::MAX.checked_neg(), Some(T::MIN + T::EPSILON));
    assert_eq!(T::MIN.checked_neg(), None);
  }

  #[test]
  fn scaling_down_to_the_stored_minimum() {
    // -1 at 127 widening bits is exactly i128::MIN, the one left shift whose result has no
    // positive counterpart.
    assert_eq!(Fix::<128, 127, i128>::round_from(-1).to_bits(), i128::MIN);
    assert_eq!(Fix::<128, 127, i128>::round_from(-1), Fix::<128, 127, i128>::MIN);
  }

  #[test]
  fn from_bits_sign_extends() {
    assert_eq!(Fix::<6, 2, i8>::from_bits(0b00_100000).to_bits(), 0b11_100000u8 as i8);
    assert_eq!(Fix::<6, 2, i8>::from_bits(0b01_011010).to_bits(), 0b00_011010);
    assert_eq!(Fix::<6, 2, u8>::from_bits(0b11_100000).to_bits(), 0b00_100000);
  }

  #[test]
  fn wrap_in_range() {
    let x = Fix::<16, 8, i16>::wrap(-1234);
    assert_eq!(x.to_bits(), -1234);
  }

  #[test]
  #[should_panic(expected = "overflow")]
  fn wrap_out_of_range() {
    let _ = Fix::<10, 4, i16>::wrap(1 << 9);
  }

  #[test]
  fn wrap_boundary_is_fine() {
    assert_eq!(Fix::<10, 4, i16>::wrap((1 << 9) - 1).to_bits(), 511);
    assert_eq!(Fix::<10, 4, i16>::wrap(-(1 << 9)).to_bits(), -512);
  }

  #[test]
  fn wrap_ignoring_truncates() {
    use crate::Ignoring;
    let x = Fix::<8, 4, i16, 0, Ignoring, Ignoring>::wrap(0x17f);
    assert_eq!(x.to_bits(), 0x7f);
    let y = Fix::<8, 4, i16, 0, Ignoring, Ignoring>::wrap(0x180);
    assert_eq!(y.to_bits(), -0x80);
  }

  #[test]
  fn as_bits_mut_bypasses_checks() {
    let mut x = Fix::<16, 8, i16>::ZERO;
    *x.as_bits_mut() = 0x100;
    assert_eq!(x, Fix::<16, 8, i16>::ONE);
  }
}
