use super::*;

/// Addition and subtraction.
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Remainders: `%` (truncated, like `fmod`) and `remainder` (round-nearest).
mod rem;

/// The widening operations: exact results in a caller-annotated promoted format.
mod wide;

/// Helper macro for implementing a binary operator for all combinations of value and reference,
/// plus the compound-assignment form. The right-hand side may be *any* fixed-point format: it
/// is first converted to the left-hand format (through the left-hand policies), and the
/// operation proper is the same-format `$kernel`.
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident, $kernel:ident) => {
    impl<
      const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
      const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
    > core::ops::$trait<Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
      type Output = Self;

      #[inline]
      fn $name(self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Self {
        self.$kernel(Self::round_from(rhs))
      }
    }

    impl<
      const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
      const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
    > core::ops::$trait<&Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
      type Output = Self;

      #[inline]
      fn $name(self, rhs: &Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Self {
        self.$kernel(Self::round_from(*rhs))
      }
    }

    impl<
      const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
      const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
    > core::ops::$trait<Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for &Fix<N, F, Int, E, Ovf, Unf> {
      type Output = Fix<N, F, Int, E, Ovf, Unf>;

      #[inline]
      fn $name(self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Self::Output {
        (*self).$kernel(Fix::<N, F, Int, E, Ovf, Unf>::round_from(rhs))
      }
    }

    impl<
      const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
      const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
    > core::ops::$trait<&Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for &Fix<N, F, Int, E, Ovf, Unf> {
      type Output = Fix<N, F, Int, E, Ovf, Unf>;

      #[inline]
      fn $name(self, rhs: &Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Self::Output {
        (*self).$kernel(Fix::<N, F, Int, E, Ovf, Unf>::round_from(*rhs))
      }
    }

    impl<
      const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
      const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
    > core::ops::$trait_assign<Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
      #[inline]
      fn $name_assign(&mut self, rhs: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) {
        *self = self.$kernel(Self::round_from(rhs))
      }
    }

    impl<
      const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
      const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
    > core::ops::$trait_assign<&Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
      #[inline]
      fn $name_assign(&mut self, rhs: &Fix<N2, F2, Int2, E2, Ovf2, Unf2>) {
        *self = self.$kernel(Self::round_from(*rhs))
      }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator. Each operator's test
/// module defines `fn is_correct(a, b) -> bool` for same-format operands under ignoring
/// policies (so the wrap semantics are exercised too), and this macro grinds it exhaustively
/// over small formats and by proptest over word-sized ones.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt) => {
    use proptest::prelude::*;

    type Loose<const N: u32, const F: u32, Int> =
      crate::Fix<N, F, Int, 0, crate::Ignoring, crate::Ignoring>;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::Q32::<16>::ONE;
      let mut b = crate::Q32::<16>::HALF;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    macro_rules! test_exhaustive {
      ($name:ident, $fix:ty) => {
        #[test]
        fn $name() {
          for a in <$fix>::cases_exhaustive() {
            for b in <$fix>::cases_exhaustive() {
              assert!(is_correct(a, b), "{:?} ⋅ {:?}", a, b)
            }
          }
        }
      };
    }

    macro_rules! test_proptest {
      ($name:ident, $fix:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$fix>::cases_proptest(),
            b in <$fix>::cases_proptest(),
          ) {
            prop_assert!(is_correct(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    test_exhaustive!{fix_6_3_exhaustive, Loose::<6, 3, i8>}
    test_exhaustive!{fix_8_4_exhaustive, Loose::<8, 4, i8>}
    test_exhaustive!{fix_8_0_exhaustive, Loose::<8, 0, i8>}
    test_exhaustive!{fix_8_8_exhaustive, Loose::<8, 8, i8>}
    test_exhaustive!{ufix_8_4_exhaustive, Loose::<8, 4, u8>}
    test_exhaustive!{ufix_6_6_exhaustive, Loose::<6, 6, u8>}

    // Above ~8 bits = 2^16 pairs per suite, exhaustive testing of binary operations gets slow
    // in debug builds; the word-sized formats get randomised coverage instead.
    test_proptest!{fix_16_8_proptest, Loose::<16, 8, i16>}
    test_proptest!{fix_32_24_proptest, Loose::<32, 24, i32>}
    test_proptest!{fix_64_32_proptest, Loose::<64, 32, i64>}
    test_proptest!{ufix_64_16_proptest, Loose::<64, 16, u64>}
  }
}

pub(crate) use mk_tests;
