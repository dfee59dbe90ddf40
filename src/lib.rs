#![cfg_attr(not(test), no_std)]
//! This crate provides a correct, deterministic, software-only implementation of binary
//! **fixed-point arithmetic**, together with the elementary transcendental functions (sin, cos,
//! tan, their inverses, the hyperbolic family, exp, log, sqrt) evaluated with the
//! [CORDIC](https://en.wikipedia.org/wiki/CORDIC) shift-and-add algorithm — no floating-point
//! hardware is used on any evaluation path.
//!
//! # Introduction
//!
//! A fixed-point number represents the real value `stored × 2^(-F-E)`, where `stored` is a plain
//! machine integer, `F` is the number of fractional bits and `E` an extra power-of-two scale
//! exponent. Because every operation is a bounded sequence of integer shifts and adds, results
//! are bit-for-bit reproducible across platforms, and run in constant, data-independent time —
//! which is exactly what embedded and DSP code wants from a numeric type when an FPU is absent,
//! slow, or forbidden.
//!
//! # Usage
//!
//! ```
//! use soft_fixed::{Fix, RoundFrom};
//! type Angle = Fix<25, 21, i32>;  // 25 significant bits, 21 of them fractional
//!
//! let x = Angle::round_from(0.5_f64);
//! let y = Angle::round_from(2);
//!
//! // The usual operators, checked against the format's range.
//! assert_eq!(x + x, Angle::ONE);
//! assert!(x * y == Angle::ONE);
//!
//! // Elementary functions, evaluated by CORDIC iteration.
//! let s = x.asin();
//! assert!((f64::round_from(s) - 0.5235987755982988).abs() < 1e-5);
//! ```
//!
//! # Overflow and underflow policies
//!
//! Whether an out-of-range result panics or wraps is a *compile-time property of the type*: the
//! last two parameters of [`Fix`] select an [`OverflowPolicy`] and an [`UnderflowPolicy`]. The
//! default, [`Panicking`], raises immediately at the violation point; [`Ignoring`] keeps the
//! two's-complement truncation (and silent zero for underflow), which is the conventional wrap
//! semantics of embedded C. Domain errors of the elementary functions (`sqrt(-1)`, `asin(2)`,
//! `log(0)`, ...) are caller logic errors and panic regardless of policy.

mod cordic;
mod fix;
mod word;

pub use fix::Fix;
pub use fix::format::{Format, Op};
pub use fix::policy::{Ignoring, OverflowPolicy, Panicking, UnderflowPolicy};
pub use fix::convert::{RoundFrom, RoundInto};
pub use word::Word;

/// Signed fixed-point in an `i8` word, `F` fractional bits.
pub type Q8<const F: u32> = Fix<8, F, i8>;

/// Signed fixed-point in an `i16` word, `F` fractional bits.
pub type Q16<const F: u32> = Fix<16, F, i16>;

/// Signed fixed-point in an `i32` word, `F` fractional bits.
pub type Q32<const F: u32> = Fix<32, F, i32>;

/// Signed fixed-point in an `i64` word, `F` fractional bits.
pub type Q64<const F: u32> = Fix<64, F, i64>;

/// Signed fixed-point in an `i128` word, `F` fractional bits.
pub type Q128<const F: u32> = Fix<128, F, i128>;

/// Unsigned fixed-point in a `u8` word, `F` fractional bits.
pub type UQ8<const F: u32> = Fix<8, F, u8>;

/// Unsigned fixed-point in a `u16` word, `F` fractional bits.
pub type UQ16<const F: u32> = Fix<16, F, u16>;

/// Unsigned fixed-point in a `u32` word, `F` fractional bits.
pub type UQ32<const F: u32> = Fix<32, F, u32>;

/// Unsigned fixed-point in a `u64` word, `F` fractional bits.
pub type UQ64<const F: u32> = Fix<64, F, u64>;

/// Number of cases for each randomised (proptest) test suite.
#[cfg(test)]
pub(crate) const PROPTEST_CASES: u32 = 1 << 12;
