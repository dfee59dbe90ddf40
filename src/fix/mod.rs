//! This module and its submodules contain the fixed-point number type, its conversions, its
//! range-checked arithmetic, and the compile-time type-promotion machinery.
//!
//! Some notation used in the comments:
//!
//!   - **Raw / stored integer**: the machine integer inside a [`Fix`]; the represented real
//!     value is `raw × 2^(-F-E)`.
//!   - **Format**: the tuple (significant bits, fractional bits, scale exponent, signedness)
//!     of a fixed-point type; see [`format::Format`].
//!   - **Expandable**: whether a wider intermediate exists in which an operation's exact result
//!     fits (everything in this crate widens through `i128`, so the boundary is 128 bits).

use crate::word::Word;
use convert::RoundFrom;
use format::{Format, Op};
use policy::{OverflowPolicy, Panicking, UnderflowPolicy};

/// A fixed-point number with `N` significant bits of which `F` are fractional, stored in the
/// machine type `Int`, representing the real value `stored × 2^(-F-E)`.
///
/// `Ovf` and `Unf` select what happens when a result does not fit the format: the default
/// [`Panicking`] raises at the violation point, [`Ignoring`](policy::Ignoring) wraps.
///
/// Examples:
///
/// ```
/// # use soft_fixed::Fix;
/// type Foo = Fix<25, 21, i32>;  // 4 integer bits (one of them sign), 21 fractional bits,
///                               // stored sign-extended in an i32
/// type Bar = Fix<16, 8, u16>;   // unsigned, 8 integer and 8 fractional bits
/// ```
pub struct Fix<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32 = 0,
  Ovf: OverflowPolicy = Panicking,
  Unf: UnderflowPolicy = Panicking,
> (Int, core::marker::PhantomData<fn() -> (Ovf, Unf)>);

// Manual impls rather than derives: the derives would put `Clone`/`Copy`/`Hash` bounds on the
// policy parameters, which are only ever used as markers.
impl<const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy>
Clone for Fix<N, F, Int, E, Ovf, Unf> {
  #[inline]
  fn clone(&self) -> Self { *self }
}

impl<const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy>
Copy for Fix<N, F, Int, E, Ovf, Unf> {}

impl<const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy>
core::hash::Hash for Fix<N, F, Int, E, Ovf, Unf> {
  fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
    self.0.hash(state)
  }
}

/// Basics (compile-time format validation, raw access, wrapping)
mod basics;

/// Constants (zero, one, max, epsilon, etc)
mod consts;

/// Overflow/underflow policies
pub(crate) mod policy;

/// The format descriptor and the type-promotion rules
pub(crate) mod format;

/// Overflow predicates for each arithmetic operation
pub(crate) mod checks;

/// Conversions (floats, integers, other fixed-point formats)
pub(crate) mod convert;

/// The arithmetic operators
mod ops;

/// Negation, absolute value, and integer rounding (floor/ceil/round)
mod unary;

/// Comparisons across formats
mod cmp;

/// Debug/Display
mod fmt;

/// Test-case generators
#[cfg(test)]
pub(crate) mod test;
