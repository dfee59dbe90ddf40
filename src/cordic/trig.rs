//! The circular functions: sin/cos/tan by rotation after mod-2π reduction, their inverses by
//! vectoring.

use crate::fix::checks;
use crate::{Fix, OverflowPolicy, UnderflowPolicy, Word};
use super::{kernel, tables};

/// sin and cos of `raw × 2^-res` at `fw` fractional bits, plus whether the reduced argument
/// sits exactly on ±π/2 (a tangent pole, as this precision sees one).
///
/// The reduction is modular on the stored integer — `(raw · 2^s) mod 2π` evaluated as a
/// product of residues — so arguments many periods out cost no more accuracy than the 2π
/// constant itself gives up.
fn sin_cos_scaled(raw: i128, res: i32, fw: u32) -> (i64, i64, bool) {
  let two_pi = kernel::two_pi(fw) as i128;
  let pi = kernel::pi(fw) as i128;
  let pi_2 = kernel::const_q(tables::PI_2, fw) as i128;
  let shift = fw as i32 - res;
  let mut r = if shift <= 0 {
    checks::shift_round(raw, (-shift) as u32).rem_euclid(two_pi)
  } else {
    let mut p = 1i128;
    for _ in 0..shift {
      p = (p << 1) % two_pi;
    }
    raw.rem_euclid(two_pi) * p % two_pi
  };
  // into (-π, π], then fold the outer quadrants over (cos changes sign)
  if r > pi {
    r -= two_pi;
  }
  let at_pole = r == pi_2 || r == -pi_2;
  let mut flip = false;
  if r > pi_2 {
    r = pi - r;
    flip = true;
  } else if r < -pi_2 {
    r = -pi - r;
    flip = true;
  }
  let x0 = kernel::const_q(tables::CIRC_GAIN_INV, fw);
  let (x, y, _) = kernel::rotate_circular(x0, 0, r as i64, fw);
  (y, if flip { -x } else { x }, at_pole)
}

/// atan of a working-scale value of any magnitude; `|x| > 1` goes through the reciprocal.
fn atan_scaled(x: i128, fw: u32) -> i128 {
  let one = 1i128 << fw;
  if x.abs() <= one {
    let (_, _, z) = kernel::vector_circular(one as i64, x as i64, 0, fw);
    return z as i128
  }
  let inv = kernel::div_q(one, x, fw);
  let (_, _, z) = kernel::vector_circular(one as i64, inv as i64, 0, fw);
  let pi_2 = kernel::const_q(tables::PI_2, fw) as i128;
  if x > 0 { pi_2 - z as i128 } else { -pi_2 - z as i128 }
}

/// asin of a working-scale value with `|x| <= 1`, as `atan(x / √(1-x²))`.
fn asin_scaled(x: i128, fw: u32) -> i128 {
  let one = 1i128 << fw;
  let pi_2 = kernel::const_q(tables::PI_2, fw) as i128;
  if x.abs() >= one {
    return if x > 0 { pi_2 } else { -pi_2 }
  }
  let t = one - kernel::mul_q(x, x, fw);
  let s = super::sqrt::sqrt_scaled(t, fw);
  if s == 0 {
    return if x > 0 { pi_2 } else { -pi_2 }
  }
  atan_scaled(kernel::div_q(x, s, fw), fw)
}

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// The sine, into a caller-chosen output format. The working precision follows the finer of
  /// the two resolutions (clamped to at most 58 fractional bits), so asking for a finer output
  /// buys a finer evaluation.
  pub fn sin_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let (s, _, _) = sin_cos_scaled(self.raw(), F as i32 + E, fw);
    Fix::from_scaled_i128(s as i128, fw as i32, "sin")
  }

  /// The sine.
  ///
  /// ```
  /// use soft_fixed::{Fix, RoundFrom};
  /// let x = Fix::<25, 21, i32>::round_from(core::f64::consts::FRAC_PI_4);
  /// assert!((f64::round_from(x.sin()) - 0.70711).abs() < 1e-4);
  /// ```
  pub fn sin(self) -> Self {
    self.sin_as::<N, F, E, Int>()
  }

  /// The cosine, into a caller-chosen output format.
  pub fn cos_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let (_, c, _) = sin_cos_scaled(self.raw(), F as i32 + E, fw);
    Fix::from_scaled_i128(c as i128, fw as i32, "cos")
  }

  /// The cosine.
  pub fn cos(self) -> Self {
    self.cos_as::<N, F, E, Int>()
  }

  /// The tangent, into a caller-chosen output format.
  ///
  /// # Panics
  ///
  /// At a pole: when the reduced argument is exactly ±π/2 at the working precision (or the
  /// computed cosine is zero). This is a domain panic, not an overflow, so no policy softens
  /// it.
  pub fn tan_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let (s, c, at_pole) = sin_cos_scaled(self.raw(), F as i32 + E, fw);
    if at_pole || c == 0 {
      panic!("fixed-point tangent pole")
    }
    Fix::from_scaled_i128(kernel::div_q(s as i128, c as i128, fw), fw as i32, "tan")
  }

  /// The tangent. Panics at a pole; see [`Self::tan_as`].
  pub fn tan(self) -> Self {
    self.tan_as::<N, F, E, Int>()
  }

  /// The arcsine, into a caller-chosen output format. `±1` maps to exactly ±π/2 (as rounded
  /// to the output resolution).
  ///
  /// # Panics
  ///
  /// When `|self| > 1` (domain panic).
  pub fn asin_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    if !kernel::magnitude_le_one(self.raw(), F as i32 + E) {
      panic!("fixed-point asin of a value outside [-1, 1]")
    }
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    // |self| <= 1, so the working rescale cannot overflow
    let x = kernel::to_working(self.raw(), F as i32 + E, fw).unwrap_or(0);
    Fix::from_scaled_i128(asin_scaled(x, fw), fw as i32, "asin")
  }

  /// The arcsine. Panics outside [-1, 1]; see [`Self::asin_as`].
  pub fn asin(self) -> Self {
    self.asin_as::<N, F, E, Int>()
  }

  /// The arccosine (π/2 − asin), into a caller-chosen output format.
  ///
  /// # Panics
  ///
  /// When `|self| > 1` (domain panic).
  pub fn acos_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    if !kernel::magnitude_le_one(self.raw(), F as i32 + E) {
      panic!("fixed-point acos of a value outside [-1, 1]")
    }
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let x = kernel::to_working(self.raw(), F as i32 + E, fw).unwrap_or(0);
    let pi_2 = kernel::const_q(tables::PI_2, fw) as i128;
    Fix::from_scaled_i128(pi_2 - asin_scaled(x, fw), fw as i32, "acos")
  }

  /// The arccosine. Panics outside [-1, 1]; see [`Self::acos_as`].
  pub fn acos(self) -> Self {
    self.acos_as::<N, F, E, Int>()
  }

  /// The arctangent, into a caller-chosen output format. Total: any argument magnitude works,
  /// saturating toward ±π/2.
  pub fn atan_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let z = match kernel::to_working(self.raw(), F as i32 + E, fw) {
      Some(x) => atan_scaled(x, fw),
      // magnitude beyond even an i128 at the working scale: the reciprocal is zero there
      None => {
        let pi_2 = kernel::const_q(tables::PI_2, fw) as i128;
        if self.raw() > 0 { pi_2 } else { -pi_2 }
      }
    };
    Fix::from_scaled_i128(z, fw as i32, "atan")
  }

  /// The arctangent.
  pub fn atan(self) -> Self {
    self.atan_as::<N, F, E, Int>()
  }
}

#[cfg(test)]
mod tests {
  use crate::{Fix, RoundFrom};
  use core::f64::consts;

  type Angle = Fix<25, 21, i32>;

  fn close(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() < tol
  }

  #[test]
  fn sin_of_quarter_pi() {
    let x = Angle::round_from(consts::FRAC_PI_4);
    assert!(close(f64::round_from(x.sin()), 0.70711, 1e-4));
  }

  #[test]
  fn sin_cos_sweep() {
    for i in -200..200 {
      let v = i as f64 * 0.037;
      let x = Angle::round_from(v);
      assert!(close(f64::round_from(x.sin()), v.sin(), 1e-5), "sin {v}");
      assert!(close(f64::round_from(x.cos()), v.cos(), 1e-5), "cos {v}");
    }
  }

  #[test]
  fn many_periods_out() {
    // Reduction is modular on the stored integer, so far arguments stay accurate.
    let x = Fix::<32, 16, i32>::round_from(300.0);
    assert!(close(f64::round_from(x.sin()), (300.0f64).sin(), 1e-3));
    // ~2000 periods out the phase error is dominated by the rounding of 2π itself
    let y = Fix::<64, 32, i64>::round_from(12345.678);
    assert!(close(f64::round_from(y.sin()), (12345.678f64).sin(), 1e-5));
  }

  #[test]
  fn coarse_format_is_coarsely_right() {
    let x = Fix::<16, 8, i16>::round_from(2.0);
    assert!(close(f64::round_from(x.sin()), (2.0f64).sin(), 0.05));
  }

  #[test]
  fn tan_matches() {
    let x = Angle::round_from(1.0);
    assert!(close(f64::round_from(x.tan()), (1.0f64).tan(), 1e-4));
    let y = Angle::round_from(-0.4);
    assert!(close(f64::round_from(y.tan()), (-0.4f64).tan(), 1e-4));
  }

  #[test]
  #[should_panic(expected = "tangent pole")]
  fn tan_at_the_pole_raises() {
    // π/2 rounded to this format is exactly the working-precision pole.
    let _ = Angle::round_from(consts::FRAC_PI_2).tan();
  }

  #[test]
  fn atan_of_one_is_quarter_pi() {
    let x = Fix::<32, 20, i32>::round_from(1.0);
    assert!(close(f64::round_from(x.atan()), consts::FRAC_PI_4, 1e-5));
  }

  #[test]
  fn atan_sweep_crosses_the_reciprocal_split() {
    for i in -100..100 {
      let v = i as f64 * 0.11;
      let x = Fix::<32, 20, i32>::round_from(v);
      assert!(close(f64::round_from(x.atan()), v.atan(), 1e-5), "atan {v}");
    }
  }

  #[test]
  fn atan_saturates_for_huge_arguments() {
    let x = Fix::<64, 8, i64>::round_from(1.0e12);
    assert!(close(f64::round_from(x.atan()), consts::FRAC_PI_2, 1e-2));
    assert!(close(f64::round_from((-x).atan()), -consts::FRAC_PI_2, 1e-2));
  }

  #[test]
  fn asin_of_one_is_half_pi_exactly() {
    assert_eq!(Angle::ONE.asin(), Angle::round_from(consts::FRAC_PI_2));
    assert_eq!(Angle::MINUS_ONE.asin(), -Angle::round_from(consts::FRAC_PI_2));
  }

  #[test]
  fn asin_acos_sweep() {
    for i in -99..100 {
      let v = i as f64 * 0.01;
      let x = Angle::round_from(v);
      assert!(close(f64::round_from(x.asin()), v.asin(), 1e-4), "asin {v}");
      assert!(close(f64::round_from(x.acos()), v.acos(), 1e-4), "acos {v}");
    }
  }

  #[test]
  fn acos_at_the_boundaries() {
    assert_eq!(f64::round_from(Angle::ONE.acos()), 0.0);
    assert!(close(f64::round_from(Angle::MINUS_ONE.acos()), consts::PI, 1e-5));
  }

  #[test]
  #[should_panic(expected = "asin of a value outside")]
  fn asin_outside_the_domain_raises() {
    let _ = Angle::round_from(1.5).asin();
  }

  #[test]
  #[should_panic(expected = "acos of a value outside")]
  fn acos_outside_the_domain_raises() {
    let _ = Angle::round_from(1.5).acos();
  }

  #[test]
  fn cross_format_output() {
    let x = Fix::<16, 12, i16>::round_from(0.5);
    let s = x.sin_as::<32, 24, 0, i32>();
    // the finer output format drives the working precision up
    assert!(close(f64::round_from(s), (0.5f64).sin(), 1e-5));
  }

  #[test]
  fn unsigned_input() {
    let x = crate::UQ16::<8>::round_from(1.0);
    assert!(close(f64::round_from(x.sin_as::<16, 8, 0, i16>()), (1.0f64).sin(), 0.05));
  }

  #[test]
  #[should_panic(expected = "overflow in sin")]
  fn negative_sine_cannot_land_unsigned() {
    let x = crate::UQ16::<8>::round_from(4.0);  // sin(4) < 0
    let _ = x.sin();
  }
}
