use super::*;

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// Same-format addition: exact on the stored integers, range-checked against the format.
  #[inline]
  fn add_kernel(self, rhs: Self) -> Self {
    match checks::sum_raw(Self::FORMAT, self.raw(), rhs.raw()) {
      Some(v) => Self::of_word(Int::of_i128(v)),
      None => {
        let wrapped = Self::truncate_to_format(self.raw().wrapping_add(rhs.raw()));
        Self::of_word(Ovf::resolve(wrapped, "addition"))
      }
    }
  }

  /// Same-format subtraction.
  #[inline]
  fn sub_kernel(self, rhs: Self) -> Self {
    match checks::diff_raw(Self::FORMAT, self.raw(), rhs.raw()) {
      Some(v) => Self::of_word(Int::of_i128(v)),
      None => {
        let wrapped = Self::truncate_to_format(self.raw().wrapping_sub(rhs.raw()));
        Self::of_word(Ovf::resolve(wrapped, "subtraction"))
      }
    }
  }

  /// Addition that returns `None` instead of invoking the overflow policy.
  #[must_use]
  pub fn checked_add(self, rhs: Self) -> Option<Self> {
    checks::sum_raw(Self::FORMAT, self.raw(), rhs.raw()).map(|v| Self::of_word(Int::of_i128(v)))
  }

  /// Subtraction that returns `None` instead of invoking the overflow policy.
  #[must_use]
  pub fn checked_sub(self, rhs: Self) -> Option<Self> {
    checks::diff_raw(Self::FORMAT, self.raw(), rhs.raw()).map(|v| Self::of_word(Int::of_i128(v)))
  }
}

mk_ops!{Add, AddAssign, add, add_assign, add_kernel}
mk_ops!{Sub, SubAssign, sub, sub_assign, sub_kernel}
