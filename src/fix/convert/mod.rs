use super::*;

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but — unlike that which is the
/// [convention for the `From` trait](core::convert::From#when-to-implement-from) — these
/// conversions are _not necessarily lossless_: the target fixed-point format has a finite range
/// and a finite resolution, and a value that does not land exactly on the target grid is
/// rounded to the nearest representable value (half away from zero). A value outside the target
/// range goes through the target's overflow policy, and a nonzero value that rounds to exactly
/// zero through its underflow policy; conversions *between fixed-point formats* truncate
/// (round toward minus infinity) instead, matching the underlying arithmetic shift.
///
/// The exact meaning of these conversions depends on the types involved; for the exact
/// description of what each particular conversion does, **consult the documentation for
/// specific implementations of `round_from`**.
///
/// Many of the usage guidelines for [`From`] also apply to [`RoundFrom`]: if you do implement
/// it for your types, prefer implementing [`RoundFrom`] over [`RoundInto`] because implementing
/// [`RoundFrom`] automatically provides one with an implementation of [`RoundInto`], and prefer
/// using [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function.
///
/// (There is deliberately *no* blanket `RoundFrom<T> for T`: the fixed-point-to-fixed-point
/// implementation is generic over both formats and already covers the identity case.)
///
/// # Examples
///
/// ```
/// # use soft_fixed::*;
/// assert_eq!(Q32::<16>::round_from(1.5f64).to_bits(), 3 << 15);
/// assert_eq!(Q32::<16>::round_from(2), Q32::<16>::ONE + Q32::<16>::ONE);
///
/// // Fixed-point to fixed-point re-formats the same value.
/// let x = Q32::<16>::round_from(0.25);
/// assert_eq!(Q16::<8>::round_from(x).to_bits(), 64);
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding to the nearest representable value if
  /// the input does not fit the target grid exactly.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`], and everything in that trait's documentation applies here; prefer using
/// [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function, and the
/// other way around when implementing.
///
/// # Examples
///
/// ```
/// # use soft_fixed::*;
/// let x: Q16<12> = 0.125f64.round_into();
/// assert_eq!(x.to_bits(), 1 << 9);
/// let back: f64 = x.round_into();
/// assert_eq!(back, 0.125);
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if the value does not
  /// fit the target grid exactly.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

pub(crate) mod float;
mod int;
mod fix;
