use super::*;

/// The widening operations: instead of squeezing the result back into the left operand's
/// format like the closed operators, these return a caller-annotated *promoted* format, and the
/// compiler verifies the annotation.
///
/// Stable Rust cannot spell `Fix<{N + N2}, ...>` in a return type, so the contract is checked
/// the other way around: the caller writes the output format (usually by annotating the
/// binding), and an inline `const` block asserts at monomorphisation time that it can hold the
/// format computed by the promotion rules ([`Format::promote`], dispatched on the [`Op`]).
/// Getting the annotation wrong is a compile error, not a runtime surprise:
///
/// ```compile_fail
/// # use soft_fixed::*;
/// let a = Q16::<8>::ONE;
/// // A 16-bit output cannot hold the 17-bit promoted sum format.
/// let c: Q16<8> = a.widening_add(a);
/// ```
impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// Addition into a caller-annotated format that holds the promoted sum format (one bit wider
  /// than the operands, same fractional bits and scale exponent — the operands must agree on
  /// those two). Always exact.
  ///
  /// ```
  /// # use soft_fixed::*;
  /// let a = Q32::<16>::MAX;
  /// let c: Fix<33, 16, i64> = a.widening_add(a);  // cannot overflow
  /// assert_eq!(f64::round_from(c), 2.0 * f64::round_from(a));
  /// ```
  pub fn widening_add<
    const NR: u32, const FR: u32, IntR: Word, const ER: i32,
    const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
  >(self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    const {
      let promoted = Format::promote(Op::Sum, Self::FORMAT, Fix::<N2, F2, Int2, E2, Ovf2, Unf2>::FORMAT);
      assert!(
        promoted.expandable(),
        "The promoted sum format exceeds the 128-bit intermediate; use the closed operator",
      );
      assert!(
        Fix::<NR, FR, IntR, ER, Ovf, Unf>::FORMAT.holds(promoted),
        "The annotated output format cannot hold the promoted sum format",
      );
    }
    let shift_a = (FR as i32 + ER) - (F as i32 + E);
    let shift_b = (FR as i32 + ER) - (F2 as i32 + E2);
    let sum = (self.raw() << shift_a as u32) + (rhs.raw() << shift_b as u32);
    Fix::from_raw_checked(sum, "widening addition")
  }

  /// Subtraction into a caller-annotated format that holds the promoted sum format. Exact,
  /// with one caveat: the promotion rules keep two unsigned operands unsigned, so an
  /// unsigned widening subtraction with a negative result goes through the overflow policy.
  pub fn widening_sub<
    const NR: u32, const FR: u32, IntR: Word, const ER: i32,
    const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
  >(self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    const {
      let promoted = Format::promote(Op::Sum, Self::FORMAT, Fix::<N2, F2, Int2, E2, Ovf2, Unf2>::FORMAT);
      assert!(
        promoted.expandable(),
        "The promoted sum format exceeds the 128-bit intermediate; use the closed operator",
      );
      assert!(
        Fix::<NR, FR, IntR, ER, Ovf, Unf>::FORMAT.holds(promoted),
        "The annotated output format cannot hold the promoted sum format",
      );
    }
    let shift_a = (FR as i32 + ER) - (F as i32 + E);
    let shift_b = (FR as i32 + ER) - (F2 as i32 + E2);
    let diff = (self.raw() << shift_a as u32) - (rhs.raw() << shift_b as u32);
    Fix::from_raw_checked(diff, "widening subtraction")
  }

  /// Multiplication into a caller-annotated format that holds the promoted product format
  /// (integer bits and fractional bits of both operands added). Always exact — this is the
  /// "promotion exactness" guarantee: as long as the combined width fits 128 bits, the result
  /// is the mathematical product, with zero rounding.
  ///
  /// ```
  /// # use soft_fixed::*;
  /// let a = Q32::<16>::round_from(181.5);
  /// let p: Fix<64, 32, i64> = a.widening_mul(a);
  /// assert_eq!(f64::round_from(p), 181.5 * 181.5);
  /// ```
  pub fn widening_mul<
    const NR: u32, const FR: u32, IntR: Word, const ER: i32,
    const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
  >(self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    const {
      let promoted = Format::promote(Op::Product, Self::FORMAT, Fix::<N2, F2, Int2, E2, Ovf2, Unf2>::FORMAT);
      assert!(
        promoted.expandable(),
        "The promoted product format exceeds the 128-bit intermediate; use the closed operator",
      );
      assert!(
        Fix::<NR, FR, IntR, ER, Ovf, Unf>::FORMAT.holds(promoted),
        "The annotated output format cannot hold the promoted product format",
      );
    }
    let shift = (FR as i32 + ER) - (F as i32 + E) - (F2 as i32 + E2);
    let product = (self.raw() * rhs.raw()) << shift as u32;
    Fix::from_raw_checked(product, "widening multiplication")
  }

  /// Division into a caller-annotated format that holds the promoted quotient format (the
  /// dividend's total bits on each side of the point), truncated toward zero at the output
  /// resolution. A zero divisor panics unconditionally.
  ///
  /// A divisor with more fractional precision than the dividend can still produce a quotient
  /// past the promoted integer range (the rules size the promotion by the dividend alone);
  /// that residual case goes through the overflow policy.
  pub fn widening_div<
    const NR: u32, const FR: u32, IntR: Word, const ER: i32,
    const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
  >(self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    const {
      let promoted = Format::promote(Op::Quotient, Self::FORMAT, Fix::<N2, F2, Int2, E2, Ovf2, Unf2>::FORMAT);
      assert!(
        promoted.expandable(),
        "The promoted quotient format exceeds the 128-bit intermediate; use the closed operator",
      );
      assert!(
        Fix::<NR, FR, IntR, ER, Ovf, Unf>::FORMAT.holds(promoted),
        "The annotated output format cannot hold the promoted quotient format",
      );
    }
    if rhs.raw() == 0 {
      panic!("fixed-point division by zero")
    }
    let shift = (FR as i32 + ER) + (F2 as i32 + E2) - (F as i32 + E);
    match checks::quotient_exact(shift, self.raw(), rhs.raw()) {
      Some(v) => Fix::from_raw_checked(v, "widening division"),
      None => Fix::of_word(Ovf::resolve(IntR::ZERO, "widening division")),
    }
  }
}

#[cfg(test)]
mod tests {
  use crate::{Fix, RoundFrom};
  use malachite::base::num::arithmetic::traits::Abs;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  /// The exact rational value of a fixed-point number.
  fn rat<const N: u32, const F: u32, Int: crate::Word, const E: i32>(
    x: Fix<N, F, Int, E>,
  ) -> Rational {
    Rational::from(x.raw()) >> (F as i64 + E as i64)
  }

  #[test]
  fn add_holds_the_carry() {
    let a = crate::Q16::<8>::MAX;
    let c: Fix<17, 8, i32> = a.widening_add(a);
    assert_eq!(rat(c), rat(a) + rat(a));
  }

  #[test]
  fn sub_of_unsigned_is_unsigned() {
    let a = crate::UQ16::<8>::round_from(2.5);
    let b = crate::UQ16::<8>::round_from(0.75);
    let c: Fix<17, 8, u32> = a.widening_sub(b);
    assert_eq!(rat(c), rat(a) - rat(b));
  }

  #[test]
  #[should_panic(expected = "overflow in widening subtraction")]
  fn sub_of_unsigned_below_zero_raises() {
    let a = crate::UQ16::<8>::round_from(0.75);
    let b = crate::UQ16::<8>::round_from(2.5);
    let _: Fix<17, 8, u32> = a.widening_sub(b);
  }

  #[test]
  fn mul_of_extremes_is_exact() {
    let a = crate::Q16::<8>::MIN;
    let c: Fix<32, 16, i32> = a.widening_mul(a);
    assert_eq!(rat(c), rat(a) * rat(a));
  }

  #[test]
  fn output_may_be_wider_than_the_promotion() {
    let a = crate::Q16::<8>::round_from(-1.5);
    let b = crate::Q16::<8>::round_from(2.25);
    // Q64.20 holds the promoted Q32.16 with room to spare.
    let c: Fix<64, 20, i64> = a.widening_mul(b);
    assert_eq!(rat(c), rat(a) * rat(b));
  }

  #[test]
  #[should_panic(expected = "division by zero")]
  fn div_by_zero_panics() {
    let a = crate::Q16::<8>::ONE;
    let _: Fix<32, 16, i32> = a.widening_div(crate::Q16::<8>::ZERO);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    /// Promotion exactness: a widening product reproduces the mathematical product with zero
    /// error, for every pair of operands.
    #[test]
    fn mul_is_exact(
      a in crate::Q32::<16>::cases_proptest(),
      b in crate::Q32::<16>::cases_proptest(),
    ) {
      let c: Fix<64, 32, i64> = a.widening_mul(b);
      prop_assert_eq!(rat(c), rat(a) * rat(b));
    }

    #[test]
    fn add_is_exact(
      a in crate::Q32::<16>::cases_proptest(),
      b in crate::Q32::<16>::cases_proptest(),
    ) {
      let c: Fix<33, 16, i64> = a.widening_add(b);
      let d: Fix<33, 16, i64> = b.widening_add(a);
      prop_assert_eq!(rat(c), rat(a) + rat(b));
      prop_assert_eq!(c, d);
    }

    #[test]
    fn sub_is_exact(
      a in crate::Q32::<16>::cases_proptest(),
      b in crate::Q32::<16>::cases_proptest(),
    ) {
      let c: Fix<33, 16, i64> = a.widening_sub(b);
      prop_assert_eq!(rat(c), rat(a) - rat(b));
    }

    /// A widening quotient truncates toward zero at the output resolution: it is within one
    /// output ulp of the exact rational quotient, on the zero side of it.
    #[test]
    fn div_truncates_toward_zero(
      a in crate::Q32::<16>::cases_proptest(),
      b in crate::Q32::<16>::cases_proptest(),
    ) {
      prop_assume!(b.raw() != 0);
      let c: Fix<64, 32, i64> = a.widening_div(b);
      let exact = rat(a) / rat(b);
      let got = rat(c);
      let ulp = Rational::from(1) >> 32i64;
      prop_assert!((exact.clone() - got.clone()).abs() < ulp);
      prop_assert!(got.abs() <= exact.abs());
    }
  }
}
