//! Hyperbolic functions and their inverses: rotation on the unit hyperbola where the
//! recurrence converges (|x| ≤ 1), exp/log compositions beyond.

use crate::fix::checks;
use crate::{Fix, OverflowPolicy, UnderflowPolicy, Word};
use super::{explog, kernel, sqrt, tables};

/// `e^a` and `e^-a` for a working-scale `a > 1`, both at `fw` fractional bits. Only valid
/// while `e^a` fits an `i128` at that scale (the callers bound `a` or check `k` first).
fn exp_pair(a: i128, fw: u32) -> (i128, i128) {
  let (mp, kp) = explog::exp_split(a, fw);
  let (mm, km) = explog::exp_split(-a, fw);
  // a > 1 forces k ≥ 1 on the positive side and ≤ -2 on the negative
  (mp << kp, checks::shift_round(mm, (-km) as u32))
}

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// The hyperbolic sine, into a caller-chosen output format.
  pub fn sinh_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let one = 1i128 << fw;
    let Some(x) = kernel::to_working(self.raw(), F as i32 + E, fw) else {
      return Fix::of_word(Ovf::resolve(IntR::ZERO, "sinh"))
    };
    if x.abs() <= one {
      let x0 = kernel::const_q(tables::HYP_GAIN_INV, fw);
      let (_, y, _) = kernel::rotate_hyperbolic(x0, 0, x as i64, fw);
      return Fix::from_scaled_i128(y as i128, fw as i32, "sinh")
    }
    if x.abs() > 1024 * one {
      return Fix::of_word(Ovf::resolve(IntR::ZERO, "sinh"))
    }
    let a = x.abs();
    let (m, k) = explog::exp_split(a, fw);
    if k > 126 - fw as i32 {
      // e^-a is entirely below working precision at this magnitude: sinh = ±e^|x|/2
      return Fix::from_scaled_i128(if x < 0 { -m } else { m }, fw as i32 - k + 1, "sinh")
    }
    let (ep, em) = exp_pair(a, fw);
    let s = (if x < 0 { em - ep } else { ep - em }) >> 1;
    Fix::from_scaled_i128(s, fw as i32, "sinh")
  }

  /// The hyperbolic sine.
  pub fn sinh(self) -> Self {
    self.sinh_as::<N, F, E, Int>()
  }

  /// The hyperbolic cosine, into a caller-chosen output format.
  pub fn cosh_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let one = 1i128 << fw;
    let Some(x) = kernel::to_working(self.raw(), F as i32 + E, fw) else {
      return Fix::of_word(Ovf::resolve(IntR::ZERO, "cosh"))
    };
    if x.abs() <= one {
      let x0 = kernel::const_q(tables::HYP_GAIN_INV, fw);
      let (c, _, _) = kernel::rotate_hyperbolic(x0, 0, x as i64, fw);
      return Fix::from_scaled_i128(c as i128, fw as i32, "cosh")
    }
    if x.abs() > 1024 * one {
      return Fix::of_word(Ovf::resolve(IntR::ZERO, "cosh"))
    }
    let a = x.abs();
    let (m, k) = explog::exp_split(a, fw);
    if k > 126 - fw as i32 {
      return Fix::from_scaled_i128(m, fw as i32 - k + 1, "cosh")
    }
    let (ep, em) = exp_pair(a, fw);
    Fix::from_scaled_i128((ep + em) >> 1, fw as i32, "cosh")
  }

  /// The hyperbolic cosine.
  pub fn cosh(self) -> Self {
    self.cosh_as::<N, F, E, Int>()
  }

  /// The hyperbolic tangent, into a caller-chosen output format. Total, saturating toward ±1.
  pub fn tanh_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let one = 1i128 << fw;
    let (s, c) = match kernel::to_working(self.raw(), F as i32 + E, fw) {
      Some(x) if x.abs() <= one => {
        let x0 = kernel::const_q(tables::HYP_GAIN_INV, fw);
        let (c, s, _) = kernel::rotate_hyperbolic(x0, 0, x as i64, fw);
        (s as i128, c as i128)
      }
      Some(x) if x.abs() <= 32 * one => {
        let (ep, em) = exp_pair(x.abs(), fw);
        ((if x < 0 { em - ep } else { ep - em }) >> 1, (ep + em) >> 1)
      }
      // tanh is ±1 to working precision from here on out
      _ => (if self.raw() > 0 { one } else { -one }, one),
    };
    Fix::from_scaled_i128(kernel::div_q(s, c, fw), fw as i32, "tanh")
  }

  /// The hyperbolic tangent.
  pub fn tanh(self) -> Self {
    self.tanh_as::<N, F, E, Int>()
  }

  /// The inverse hyperbolic sine `ln(|x| + √(x² + 1))` (signed), into a caller-chosen output
  /// format. Total over the whole line.
  pub fn asinh_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let one = 1i128 << fw;
    if self.raw() == 0 {
      return Fix::of_word(IntR::ZERO)
    }
    let neg = self.raw() < 0;
    let mag = kernel::to_working(self.raw(), F as i32 + E, fw).map(i128::unsigned_abs);
    let r = match mag {
      Some(a) if a <= (16 * one) as u128 => {
        let a = a as i128;
        let s = sqrt::sqrt_scaled(kernel::mul_q(a, a, fw) + one, fw);
        explog::log_scaled(a + s, fw)
      }
      big => {
        // asinh(x) = ln 2|x| + 1/(4x²) - O(x⁻⁴); the tail is below working precision here
        let lnx = explog::log_from_raw(self.raw().unsigned_abs(), F as i32 + E, fw);
        let corr = match big {
          Some(a) if a < 1u128 << 120 => {
            let u = kernel::div_q(one, a as i128, fw);
            kernel::mul_q(u, u, fw) >> 2
          }
          _ => 0,
        };
        lnx + kernel::const_q(tables::LN_2, fw) as i128 + corr
      }
    };
    Fix::from_scaled_i128(if neg { -r } else { r }, fw as i32, "asinh")
  }

  /// The inverse hyperbolic sine.
  pub fn asinh(self) -> Self {
    self.asinh_as::<N, F, E, Int>()
  }

  /// The inverse hyperbolic cosine `ln(x + √(x² - 1))`, into a caller-chosen output format.
  ///
  /// # Panics
  ///
  /// When `self < 1` (domain panic).
  pub fn acosh_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    if self.raw() <= 0 || kernel::magnitude_lt_one(self.raw(), F as i32 + E) {
      panic!("fixed-point acosh of a value below 1")
    }
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let one = 1i128 << fw;
    let r = match kernel::to_working(self.raw(), F as i32 + E, fw) {
      Some(x) if x <= 16 * one => {
        let s = sqrt::sqrt_scaled(kernel::mul_q(x, x, fw) - one, fw);
        explog::log_scaled(x + s, fw)
      }
      big => {
        // acosh(x) = ln 2x - 1/(4x²) - O(x⁻⁴)
        let lnx = explog::log_from_raw(self.raw() as u128, F as i32 + E, fw);
        let corr = match big {
          Some(x) if x < 1i128 << 120 => {
            let u = kernel::div_q(one, x, fw);
            kernel::mul_q(u, u, fw) >> 2
          }
          _ => 0,
        };
        lnx + kernel::const_q(tables::LN_2, fw) as i128 - corr
      }
    };
    Fix::from_scaled_i128(r, fw as i32, "acosh")
  }

  /// The inverse hyperbolic cosine.
  pub fn acosh(self) -> Self {
    self.acosh_as::<N, F, E, Int>()
  }

  /// The inverse hyperbolic tangent `½·ln((1+x)/(1-x))`, into a caller-chosen output format.
  ///
  /// # Panics
  ///
  /// When `|self| >= 1` (domain panic; the function diverges at ±1).
  pub fn atanh_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    if !kernel::magnitude_lt_one(self.raw(), F as i32 + E) {
      panic!("fixed-point atanh of a value outside (-1, 1)")
    }
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let one = 1i128 << fw;
    // in-domain values finer than the working precision can still round onto the boundary
    let x = kernel::to_working(self.raw(), F as i32 + E, fw)
      .unwrap_or(0)
      .clamp(-(one - 1), one - 1);
    let r = explog::log_scaled(kernel::div_q(one + x, one - x, fw), fw) >> 1;
    Fix::from_scaled_i128(r, fw as i32, "atanh")
  }

  /// The inverse hyperbolic tangent.
  pub fn atanh(self) -> Self {
    self.atanh_as::<N, F, E, Int>()
  }
}

#[cfg(test)]
mod tests {
  use crate::{Fix, RoundFrom};

  type W = Fix<64, 21, i64>;

  fn close(actual: f64, expected: f64, tol: f64) -> bool {
    (actual - expected).abs() < tol
  }

  #[test]
  fn sinh_cosh_small_and_large_paths() {
    for &v in &[-2.5f64, -0.75, -0.2, 0.0, 0.3, 0.75, 1.0, 2.5, 10.0] {
      let x = W::round_from(v);
      // the error grows with the result: rounding v onto the 21-bit grid alone moves
      // sinh(10) by cosh(10)·2^-22, so the bound scales with cosh
      let tol = 1e-4 * v.cosh().max(1.0);
      assert!(close(f64::round_from(x.sinh()), v.sinh(), tol), "sinh {v}");
      assert!(close(f64::round_from(x.cosh()), v.cosh(), tol), "cosh {v}");
    }
  }

  #[test]
  fn cosh_is_even() {
    let x = W::round_from(0.5);
    assert!(close(f64::round_from(x.cosh()), f64::round_from((-x).cosh()), 1e-5));
    assert!(close(f64::round_from(W::ZERO.cosh()), 1.0, 1e-5));
  }

  #[test]
  #[should_panic(expected = "overflow in sinh")]
  fn sinh_overflow_raises() {
    let _ = Fix::<16, 8, i16>::round_from(10.0).sinh();
  }

  #[test]
  fn tanh_sweep_and_saturation() {
    for i in -40..40 {
      let v = i as f64 * 0.09;
      let x = W::round_from(v);
      assert!(close(f64::round_from(x.tanh()), v.tanh(), 1e-4), "tanh {v}");
    }
    assert_eq!(f64::round_from(W::round_from(100.0).tanh()), 1.0);
    assert_eq!(f64::round_from(W::round_from(-100.0).tanh()), -1.0);
  }

  #[test]
  fn asinh_sweep() {
    for i in -60..60 {
      let v = i as f64 * 0.13;
      let x = W::round_from(v);
      assert!(close(f64::round_from(x.asinh()), v.asinh(), 1e-4), "asinh {v}");
    }
  }

  #[test]
  fn asinh_far_branch() {
    // beyond the CORDIC window the log expansion takes over
    let x = W::round_from(1000.0);
    assert!(close(f64::round_from(x.asinh()), (1000.0f64).asinh(), 1e-4));
    assert!(close(f64::round_from((-x).asinh()), -(1000.0f64).asinh(), 1e-4));
  }

  #[test]
  fn acosh_values() {
    for &v in &[1.0f64, 1.001, 1.01, 1.1, 1.5, 2.0, 3.7, 7.2, 500.0] {
      let x = W::round_from(v);
      assert!(close(f64::round_from(x.acosh()), v.acosh(), 1e-3), "acosh {v}");
    }
    assert_eq!(W::ONE.acosh(), W::ZERO);
  }

  #[test]
  fn atanh_sweep() {
    for i in -99..100 {
      let v = i as f64 * 0.01;
      let x = W::round_from(v);
      assert!(close(f64::round_from(x.atanh()), v.atanh(), 1e-4), "atanh {v}");
    }
  }

  #[test]
  fn hyperbolic_identity() {
    // cosh² - sinh² = 1
    for &v in &[0.25, 0.9, 1.8] {
      let s = f64::round_from(W::round_from(v).sinh());
      let c = f64::round_from(W::round_from(v).cosh());
      assert!(close(c * c - s * s, 1.0, 1e-3), "identity {v}");
    }
  }

  #[test]
  #[should_panic(expected = "acosh of a value below 1")]
  fn acosh_below_one_raises() {
    let _ = W::round_from(0.5).acosh();
  }

  #[test]
  #[should_panic(expected = "atanh of a value outside")]
  fn atanh_at_one_raises() {
    let _ = W::ONE.atanh();
  }

  #[test]
  #[should_panic(expected = "atanh of a value outside")]
  fn atanh_beyond_minus_one_raises() {
    let _ = W::round_from(-1.5).atanh();
  }
}
