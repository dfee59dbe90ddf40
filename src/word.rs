//! This module contains the underlying machine-integer operations needed by the fixed-point
//! type. They are hidden from the end-user, who only sees the sealed [`Word`] trait, implemented
//! for `i8`, `i16`, `i32`, `i64`, `i128`, `u8`, `u16`, `u32`, and `u64`.
//!
//! `u128` is deliberately *not* a valid word: every stored value of every supported format must
//! be exactly representable in an `i128`, which is what all the widening arithmetic in this
//! crate runs in. That makes 128 bits (plus sign) the "widest native integer" for the purposes
//! of type promotion (see [`Format::expandable`](crate::Format::expandable)).

/// The trait for the machine integer types that can store a fixed-point number (satisfied by
/// `i8`–`i128` and `u8`–`u64`).
///
/// This is a *sealed* trait.
pub trait Word: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  Eq + Ord +
  core::hash::Hash +
  core::fmt::Debug + core::fmt::Display + core::fmt::Binary +
  core::ops::Add<Self, Output=Self> +
  core::ops::Sub<Self, Output=Self> +
  core::ops::Shl<u32, Output=Self> +
  core::ops::Shr<u32, Output=Self> +
  core::ops::BitAnd<Output=Self> +
  core::ops::BitOr<Output=Self> +
  core::ops::Not<Output=Self>
{
  const ZERO: Self;
  const ONE: Self;
  const MIN: Self;
  const MAX: Self;
  const BITS: u32;
  const SIGNED: bool;

  /// Widen into an `i128` (sign-extending if signed, zero-extending if unsigned). Lossless for
  /// every supported word.
  fn as_i128(self) -> i128;

  /// Truncate an `i128` to this width (plain `as` semantics; high bits are discarded).
  fn of_i128(x: i128) -> Self;

  fn wrapping_add(self, other: Self) -> Self;
  fn wrapping_sub(self, other: Self) -> Self;
  fn wrapping_neg(self) -> Self;
}

/// Implementation of the whole of [`Sealed`], identical for every word type.
macro_rules! impl_word {
  ($int:ty, $signed:expr) => {
    impl Word for $int {}
    impl Sealed for $int {
      const ZERO: Self = 0;
      const ONE: Self = 1;
      const MIN: Self = <$int>::MIN;
      const MAX: Self = <$int>::MAX;
      const BITS: u32 = <$int>::BITS;
      const SIGNED: bool = $signed;

      #[inline]
      fn as_i128(self) -> i128 { self as i128 }

      #[inline]
      fn of_i128(x: i128) -> Self { x as $int }

      #[inline]
      fn wrapping_add(self, other: Self) -> Self { self.wrapping_add(other) }

      #[inline]
      fn wrapping_sub(self, other: Self) -> Self { self.wrapping_sub(other) }

      #[inline]
      fn wrapping_neg(self) -> Self { self.wrapping_neg() }
    }
  }
}

impl_word!{i8, true}
impl_word!{i16, true}
impl_word!{i32, true}
impl_word!{i64, true}
impl_word!{i128, true}
impl_word!{u8, false}
impl_word!{u16, false}
impl_word!{u32, false}
impl_word!{u64, false}

/// One line of the [`const_i128_as_word`] function.
macro_rules! const_as_line {
  ($x:ident, $w:ty) => {
    if const { W::BITS == <$w>::BITS && W::SIGNED == (<$w>::MIN != 0) } {
      let w = $x as $w;
      // SAFETY: `W` is guaranteed to be a word type with the width and signedness of `$w`,
      // therefore `W` *is* `$w` and the transmute_copy is a no-op.
      return unsafe { ::core::mem::transmute_copy::<$w, W>(&w) }
    }
  }
}

/// A type-generic and `const` version of the keyword `as`, for truncating an `i128` into any
/// [`Word`]. (Trait methods cannot be called in const context; this can.)
pub const fn const_i128_as_word<W: Word>(x: i128) -> W {
  const_as_line!(x, i8);
  const_as_line!(x, i16);
  const_as_line!(x, i32);
  const_as_line!(x, i64);
  const_as_line!(x, i128);
  const_as_line!(x, u8);
  const_as_line!(x, u16);
  const_as_line!(x, u32);
  const_as_line!(x, u64);
  unreachable!() // the trait is sealed; no other word types exist
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn const_as_signed() {
    const A: i32 = const_i128_as_word(1i128);
    const B: i32 = const_i128_as_word(-1i128);
    const C: i16 = const_i128_as_word(0x13337i128);
    assert_eq!(A, 1);
    assert_eq!(B, -1);
    assert_eq!(C, 0x3337);
  }

  #[test]
  fn const_as_unsigned() {
    const A: u8 = const_i128_as_word(0x1ffi128);
    const B: u64 = const_i128_as_word(-1i128);
    assert_eq!(A, 0xff);
    assert_eq!(B, u64::MAX);
  }

  #[test]
  fn as_i128_sign_extension() {
    assert_eq!((-5i8).as_i128(), -5);
    assert_eq!(0xffu8.as_i128(), 255);
    assert_eq!(u64::MAX.as_i128(), (1i128 << 64) - 1);
    assert_eq!(i64::MIN.as_i128(), -(1i128 << 63));
  }

  #[test]
  fn of_i128_truncates() {
    assert_eq!(<i8 as Sealed>::of_i128(0x1ff), -1);
    assert_eq!(<u16 as Sealed>::of_i128(0x1_0001), 1);
    assert_eq!(<i128 as Sealed>::of_i128(i128::MIN), i128::MIN);
  }
}
