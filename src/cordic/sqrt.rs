//! Square root by hyperbolic vectoring: with `x = m + ¼` and `y = m - ¼` the vectoring
//! invariant `√(x² - y²)` comes out as `√m`, up to the hyperbolic gain.

use crate::fix::checks;
use crate::{Fix, OverflowPolicy, UnderflowPolicy, Word};
use super::{kernel, tables};

/// √ of a non-negative working-scale value, at the same scale.
pub(super) fn sqrt_scaled(x: i128, fw: u32) -> i128 {
  if x == 0 {
    return 0
  }
  let (r, h) = sqrt_parts(x, fw as i32, fw);
  if h >= 0 { r << h } else { checks::shift_round(r, (-h) as u32) }
}

/// √(raw × 2^-res) for `raw > 0`, as `r × 2^(h - fw)` with `r` near [1, √2)·2^fw. Splitting
/// mantissa and exponent keeps every intermediate in range no matter how extreme the format.
pub(super) fn sqrt_parts(raw: i128, res: i32, fw: u32) -> (i128, i32) {
  let one = 1i128 << fw;
  let top = 127 - (raw as u128).leading_zeros() as i32;
  let mut k = top - res;
  let s = fw as i32 - top;
  let mut m = if s >= 0 { raw << s } else { checks::shift_round(raw, (-s) as u32) };
  if m >= 2 * one {
    m >>= 1;
    k += 1;
  }
  let (x, _, _) = kernel::vector_hyperbolic((m + one / 4) as i64, (m - one / 4) as i64, 0, fw);
  let mut r = kernel::mul_q(x as i128, kernel::const_q(tables::HYP_GAIN_INV, fw) as i128, fw);
  if k & 1 != 0 {
    // odd exponents: √(m·2^k) = √m·√2·2^((k-1)/2)
    r = kernel::mul_q(r, kernel::const_q(tables::SQRT_2, fw) as i128, fw);
    k -= 1;
  }
  (r, k >> 1)
}

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// The square root, into a caller-chosen output format.
  ///
  /// # Panics
  ///
  /// For negative values (domain panic).
  pub fn sqrt_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    if self.raw() < 0 {
      panic!("fixed-point square root of a negative value")
    }
    if self.raw() == 0 {
      return Fix::of_word(IntR::ZERO)
    }
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let (r, h) = sqrt_parts(self.raw(), F as i32 + E, fw);
    Fix::from_scaled_i128(r, fw as i32 - h, "sqrt")
  }

  /// The square root.
  ///
  /// ```
  /// use soft_fixed::{Fix, RoundFrom};
  /// let two = Fix::<23, 17, i32>::round_from(2.0);
  /// assert!((f64::round_from(two.sqrt()) - 1.41421).abs() < 1e-2);
  /// ```
  pub fn sqrt(self) -> Self {
    self.sqrt_as::<N, F, E, Int>()
  }
}
