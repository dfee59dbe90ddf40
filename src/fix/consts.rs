use super::*;
use crate::word::const_i128_as_word;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// Zero, stored as all-zero bits in every format.
  pub const ZERO: Self = Self::of_word(Int::ZERO);

  /// One. Referencing this on a format that cannot represent 1 exactly (`F + E` negative, or
  /// `2^(F+E)` past the stored range) is a compile error.
  pub const ONE: Self = {
    let shift = F as i32 + E;
    assert!(
      shift >= 0 && shift < 127 && (1i128 << shift) <= Self::RAW_MAX,
      "This fixed-point format cannot represent the value 1",
    );
    Self::of_word(const_i128_as_word(1i128 << shift))
  };

  /// One half. Referencing this on a format that cannot represent 0.5 exactly is a compile
  /// error.
  pub const HALF: Self = {
    let shift = F as i32 + E - 1;
    assert!(
      shift >= 0 && shift < 127 && (1i128 << shift) <= Self::RAW_MAX,
      "This fixed-point format cannot represent the value 0.5",
    );
    Self::of_word(const_i128_as_word(1i128 << shift))
  };

  /// Minus one. Referencing this on an unsigned format, or one whose `F + E` is negative, is a
  /// compile error.
  pub const MINUS_ONE: Self = {
    let shift = F as i32 + E;
    assert!(
      Int::SIGNED && shift >= 0 && shift < 127 && -(1i128 << shift) >= Self::RAW_MIN,
      "This fixed-point format cannot represent the value -1",
    );
    Self::of_word(const_i128_as_word(-(1i128 << shift)))
  };

  /// The largest representable value: `(2^(N-1) - 1) × 2^(-F-E)` signed, `(2^N - 1) × 2^(-F-E)`
  /// unsigned.
  pub const MAX: Self = Self::of_word(const_i128_as_word(Self::RAW_MAX));

  /// The least representable value: `-2^(N-1) × 2^(-F-E)` signed, `0` unsigned.
  pub const MIN: Self = Self::of_word(const_i128_as_word(Self::RAW_MIN));

  /// The smallest positive representable value, `2^(-F-E)`; the spacing between any two
  /// adjacent representable values of the format.
  pub const EPSILON: Self = Self::of_word(Int::ONE);

  /// The spacing between adjacent representable values, `2^(-F-E)`, as an `f64` (the float is
  /// exact: `f64` represents every power of two in the permitted `E` range).
  pub fn precision() -> f64 {
    crate::fix::convert::float::pow2(-(F as i32) - E)
  }

  /// The largest error of a round-to-nearest conversion into the format, `2^(-F-E-1)` (half
  /// of [`Self::EPSILON`]), as an `f64`.
  pub fn round_error() -> f64 {
    crate::fix::convert::float::pow2(-(F as i32) - E - 1)
  }

  /// The dynamic range of the format in decibels, `20·log10(2^N) = N × 20·log10(2)`.
  pub fn dynamic_range_db() -> f64 {
    // 20·log10(2), to the last f64 bit.
    const DB_PER_BIT: f64 = 6.020599913279624;
    N as f64 * DB_PER_BIT
  }
}
