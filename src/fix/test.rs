use super::*;
use proptest::prelude::*;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// Every representable value of the format, in stored-integer order. Only sensible for
  /// small `N`.
  pub(crate) fn cases_exhaustive() -> impl Iterator<Item = Self> {
    (Self::RAW_MIN..=Self::RAW_MAX).map(|raw| Self::of_word(Int::of_i128(raw)))
  }

  /// Uniformly random values over the format's full range.
  pub(crate) fn cases_proptest() -> impl Strategy<Value = Self> {
    (Self::RAW_MIN..=Self::RAW_MAX).prop_map(|raw| Self::of_word(Int::of_i128(raw)))
  }
}

#[cfg(test)]
mod tests {
  use crate::Fix;

  #[test]
  fn exhaustive_covers_the_whole_format() {
    let all: Vec<_> = Fix::<6, 3, i8>::cases_exhaustive().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[0], Fix::<6, 3, i8>::MIN);
    assert_eq!(all[63], Fix::<6, 3, i8>::MAX);
    assert!(all.is_sorted());
  }

  #[test]
  fn exhaustive_unsigned() {
    let all: Vec<_> = Fix::<4, 4, u8>::cases_exhaustive().collect();
    assert_eq!(all.len(), 16);
    assert_eq!(all[0], Fix::<4, 4, u8>::ZERO);
  }
}
