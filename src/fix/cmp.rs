use super::*;
use core::cmp::Ordering;

/// Equality between fixed-point formats follows the same rule as the arithmetic operators: the
/// right operand is first converted to the left operand's format (through the *left* operand's
/// policies, so an rhs outside the lhs range raises there), then the stored integers are
/// compared. The conversion truncates, which makes cross-format comparison lossy for the rhs:
/// a difference finer than the lhs resolution is invisible from that side. This is documented
/// behavior, not an accident, and it means `==` between *different* formats is not symmetric.
impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
  const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
> PartialEq<Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
  fn eq(&self, other: &Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> bool {
    self.to_bits() == Self::round_from(*other).to_bits()
  }
}

impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
> Eq for Fix<N, F, Int, E, Ovf, Unf> {}

/// Ordering, with the same convert-the-rhs-first rule. Within one format the order is total
/// and `partial_cmp` never returns `None` (fixed-point has no NaN).
impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
  const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
> PartialOrd<Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
  fn partial_cmp(&self, other: &Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Option<Ordering> {
    Some(self.to_bits().cmp(&Self::round_from(*other).to_bits()))
  }
}

impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
> Ord for Fix<N, F, Int, E, Ovf, Unf> {
  fn cmp(&self, other: &Self) -> Ordering {
    // Same format: the stored integers order the values directly.
    self.to_bits().cmp(&other.to_bits())
  }
}

#[cfg(test)]
mod tests {
  use crate::{Fix, RoundFrom};

  #[test]
  fn same_format() {
    type Q = crate::Q16<8>;
    assert!(Q::MIN < Q::MINUS_ONE);
    assert!(Q::MINUS_ONE < Q::ZERO);
    assert!(Q::ZERO < Q::EPSILON);
    assert!(Q::EPSILON < Q::MAX);
    assert_eq!(Q::HALF, Q::HALF);
  }

  #[test]
  fn rhs_converts_to_the_lhs_format() {
    let a = crate::Q16::<8>::round_from(1.5);
    let b = crate::Q32::<16>::round_from(1.5);
    let c = crate::UQ16::<4>::round_from(1.5);
    assert!(a == b && b == a && a == c);
    // A difference below the lhs resolution vanishes in the rhs conversion...
    let d = crate::Q32::<16>::round_from(1.5 + 1.0 / 65536.0);
    assert!(a == d);
    // ...but not with the finer format on the left.
    assert!(d != a && d > a);
  }

  #[test]
  fn unsigned_rhs_against_a_signed_lhs() {
    let small = crate::Q8::<4>::round_from(-2.0);
    let big = crate::UQ16::<8>::round_from(5.0);
    assert!(small < big);
    assert!(small != big);
  }

  #[test]
  #[should_panic(expected = "overflow in conversion")]
  fn rhs_outside_the_lhs_range_raises_there() {
    let a = crate::Q8::<4>::round_from(1.0);
    let big = crate::UQ16::<8>::round_from(200.0);
    let _ = a == big;
  }

  #[test]
  fn scale_exponents_compare_by_value() {
    // Same stored bits, different scale: 256 × 2^-8 = 1 vs 256 × 2^-16 = 2^-8.
    let a = crate::Q32::<8>::from_bits(256);
    let b = crate::Fix::<32, 8, i32, 8>::from_bits(256);
    assert!(a > b);
    assert!(b < a);
    assert_eq!(a, crate::Q32::<8>::ONE);
  }

  #[test]
  fn widening_rhs_conversions_are_exact() {
    // Converting the coarse rhs up to 120 fractional bits loses nothing, so these compare
    // by exact value.
    let fine = crate::Q128::<120>::round_from(3.5);
    let coarse = crate::Q8::<1>::round_from(3.5);
    assert!(fine == coarse);
    assert!(fine < crate::Q8::<1>::round_from(4.0));
    assert!(crate::Q128::<120>::round_from(3.5000001) > coarse);
  }

  #[test]
  fn sorting_uses_the_total_order() {
    type Q = crate::Q16<8>;
    let mut v = [Q::MAX, Q::MIN, Q::ZERO, Q::MINUS_ONE, Q::ONE];
    v.sort();
    assert_eq!(v, [Q::MIN, Q::MINUS_ONE, Q::ZERO, Q::ONE, Q::MAX]);
  }
}
