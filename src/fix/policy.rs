//! What happens when a result does not fit its format is a compile-time property of the
//! fixed-point type, selected by the last two parameters of [`Fix`](super::Fix):
//!
//!   - [`Panicking`] (the default for both) raises at the violation point, with a message
//!     naming the operation.
//!   - [`Ignoring`] keeps the two's-complement truncation on overflow, and a silent zero on
//!     underflow — the conventional wrap semantics of embedded C.
//!
//! Overflow means a result outside the format's stored range; underflow means a nonzero value
//! that rescales to exactly zero (total precision loss). Domain errors of the elementary
//! functions are not policy-controlled; they panic always.

use crate::word::Word;

mod sealed {
  /// Policies are strategy markers, not an extension point.
  pub trait Sealed {}
  impl Sealed for super::Panicking {}
  impl Sealed for super::Ignoring {}
}

/// Strategy for results outside the format's stored range.
pub trait OverflowPolicy: sealed::Sealed {
  /// Either panic, or accept `truncated` (the two's-complement truncation of the exact
  /// result). `what` names the operation for the panic message.
  fn resolve<W: Word>(truncated: W, what: &'static str) -> W;
}

/// Strategy for nonzero results that rescale to exactly zero.
pub trait UnderflowPolicy: sealed::Sealed {
  fn resolve<W: Word>(zero: W, what: &'static str) -> W;
}

/// Panic at the violation point (the default).
pub struct Panicking;

/// Keep the wrapped value (overflow) or the zero (underflow), silently.
pub struct Ignoring;

impl OverflowPolicy for Panicking {
  #[inline]
  fn resolve<W: Word>(_: W, what: &'static str) -> W {
    panic!("fixed-point overflow in {}", what)
  }
}

impl OverflowPolicy for Ignoring {
  #[inline]
  fn resolve<W: Word>(truncated: W, _: &'static str) -> W {
    truncated
  }
}

impl UnderflowPolicy for Panicking {
  #[inline]
  fn resolve<W: Word>(_: W, what: &'static str) -> W {
    panic!("fixed-point underflow in {}", what)
  }
}

impl UnderflowPolicy for Ignoring {
  #[inline]
  fn resolve<W: Word>(zero: W, _: &'static str) -> W {
    zero
  }
}
