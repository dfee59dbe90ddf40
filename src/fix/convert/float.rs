use super::*;

/// `2^k` as an `f64`, for `k` in the normal exponent range. Exact: just the exponent field.
pub(crate) fn pow2(k: i32) -> f64 {
  debug_assert!(-1022 <= k && k <= 1023);
  f64::from_bits(((1023 + k) as u64) << 52)
}

/// `2^127`, the first float past every `i128`.
const TWO_POW_127: f64 = 170141183460469231731687303715884105728.0;

/// Converts an `f64` to fixed-point: `round(value × 2^(F+E))`, rounding half away from zero.
///
/// An input outside the format's range, or a non-finite input, goes through the overflow
/// policy ([`Ignoring`](crate::Ignoring) maps non-finite to zero); a nonzero input that rounds
/// to exactly zero goes through the underflow policy.
impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> RoundFrom<f64> for Fix<N, F, Int, E, Ovf, Unf> {
  fn round_from(value: f64) -> Self {
    if !value.is_finite() {
      return Self::of_word(Ovf::resolve(Int::ZERO, "conversion from float"))
    }
    let scaled = value * pow2(F as i32 + E);
    // Bias by a half ulp, then let the float-to-int cast truncate toward zero: together, round
    // half away from zero.
    let biased = if scaled >= 0.0 { scaled + 0.5 } else { scaled - 0.5 };
    if biased >= TWO_POW_127 || biased < -TWO_POW_127 {
      return Self::of_word(Ovf::resolve(Int::ZERO, "conversion from float"))
    }
    let raw = biased as i128;
    if raw == 0 && value != 0.0 {
      return Self::of_word(Unf::resolve(Int::ZERO, "conversion from float"))
    }
    Self::from_raw_checked(raw, "conversion from float")
  }
}

/// Converts an `f32` to fixed-point; same semantics as the `f64` conversion (widening an `f32`
/// to `f64` is exact).
impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> RoundFrom<f32> for Fix<N, F, Int, E, Ovf, Unf> {
  fn round_from(value: f32) -> Self {
    Self::round_from(value as f64)
  }
}

/// Converts fixed-point to an `f64`: `stored × 2^(-F-E)`, rounded to the nearest float (exact
/// whenever the stored integer has at most 53 significant bits).
impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> RoundFrom<Fix<N, F, Int, E, Ovf, Unf>> for f64 {
  fn round_from(value: Fix<N, F, Int, E, Ovf, Unf>) -> Self {
    value.raw() as f64 * pow2(-(F as i32) - E)
  }
}

/// Converts fixed-point to an `f32`, through the `f64` conversion.
impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> RoundFrom<Fix<N, F, Int, E, Ovf, Unf>> for f32 {
  fn round_from(value: Fix<N, F, Int, E, Ovf, Unf>) -> Self {
    f64::round_from(value) as f32
  }
}
