use super::*;

/// Converts a primitive integer `n` to the fixed-point value `n`: the stored integer is
/// `n × 2^(F+E)`. Out-of-range inputs go through the overflow policy; on formats whose
/// resolution is coarser than 1 (`F + E < 0`) the scaling rounds half away from zero, and a
/// nonzero input that rounds to zero goes through the underflow policy.
macro_rules! impl_round_from_int {
  ($($t:ty)*) => {$(
    impl<
      const N: u32,
      const F: u32,
      Int: Word,
      const E: i32,
      Ovf: OverflowPolicy,
      Unf: UnderflowPolicy,
    > RoundFrom<$t> for Fix<N, F, Int, E, Ovf, Unf> {
      fn round_from(value: $t) -> Self {
        Self::from_scaled_i128(value as i128, 0, "conversion from integer")
      }
    }
  )*}
}

impl_round_from_int!{i8 i16 i32 i64 i128 u8 u16 u32 u64}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{Fix, Ignoring};

  #[test]
  fn small_ints() {
    assert_eq!(Fix::<16, 8, i16>::round_from(1).to_bits(), 256);
    assert_eq!(Fix::<16, 8, i16>::round_from(-2i8).to_bits(), -512);
    assert_eq!(Fix::<16, 8, i16>::round_from(127u8).to_bits(), 127 << 8);
    assert_eq!(Fix::<16, 8, i16>::round_from(0).to_bits(), 0);
  }

  #[test]
  fn boundaries() {
    // The largest integer a Q16.8 holds is 127; 128 overflows.
    assert_eq!(Fix::<16, 8, i16>::round_from(127).to_bits(), 127 << 8);
    assert_eq!(Fix::<16, 8, i16>::round_from(-128).to_bits(), i16::MIN);
    assert_eq!(Fix::<64, 0, i64>::round_from(i64::MAX).to_bits(), i64::MAX);
    assert_eq!(Fix::<64, 0, u64>::round_from(u64::MAX).to_bits(), u64::MAX);
  }

  #[test]
  #[should_panic(expected = "overflow")]
  fn overflow() {
    let _ = Fix::<16, 8, i16>::round_from(128);
  }

  #[test]
  #[should_panic(expected = "overflow")]
  fn overflow_unsigned_negative() {
    let _ = Fix::<16, 8, u16>::round_from(-1);
  }

  #[test]
  fn coarse_formats_round() {
    // Fix<8, 0, i8, -4> has resolution 16: 24 is exactly between 16 and 32, away from zero.
    assert_eq!(Fix::<8, 0, i8, -4>::round_from(24).to_bits(), 2);
    assert_eq!(Fix::<8, 0, i8, -4>::round_from(-24).to_bits(), -2);
    assert_eq!(Fix::<8, 0, i8, -4>::round_from(23).to_bits(), 1);
  }

  #[test]
  #[should_panic(expected = "underflow")]
  fn coarse_formats_underflow() {
    let _ = Fix::<8, 0, i8, -4>::round_from(7);
  }

  #[test]
  fn coarse_formats_underflow_ignoring() {
    assert_eq!(Fix::<8, 0, i8, -4, Ignoring, Ignoring>::round_from(7).to_bits(), 0);
  }
}
