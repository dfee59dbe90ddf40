//! exp and the natural logarithm, by binary digit decomposition against the `2^±2^-i` tables
//! (the additive-shift relatives of the CORDIC recurrence; no divisions on the hot path).

use crate::{Fix, OverflowPolicy, UnderflowPolicy, Word};
use super::{kernel, tables};

/// `e^x` for a working-scale `x`, split as `m × 2^k` with `m` in [1, 2) at `fw` fractional
/// bits. The caller bounds `|x|` (anything up to 1024 keeps the `x·log2(e)` product inside
/// `i128`; every representable result lies far inside that).
pub(super) fn exp_split(x: i128, fw: u32) -> (i128, i32) {
  let y = kernel::mul_q(x, kernel::const_q(tables::LOG2_E, fw) as i128, fw);
  let k = y >> fw;
  let v = y - (k << fw);
  // 2^v for v in [0, 1): multiply the table entries selected by v's bits
  let mut m = 1i128 << fw;
  for i in 1..=fw {
    if (v >> (fw - i)) & 1 == 1 {
      m = kernel::mul_q(m, kernel::lut_u(&tables::POW2, i, fw), fw);
    }
  }
  (m, k as i32)
}

/// ln of `mag × 2^-res` (`mag > 0`) at `fw` fractional bits. Normalises straight off the
/// stored magnitude, so arbitrarily large or small values never materialise at the working
/// scale.
pub(super) fn log_from_raw(mag: u128, res: i32, fw: u32) -> i128 {
  let one = 1i128 << fw;
  let top = 127 - mag.leading_zeros() as i32;
  let mut k = top - res;
  let s = fw as i32 - top;
  let mut m = if s >= 0 {
    (mag << s) as i128
  } else {
    let sh = (-s) as u32;
    (((mag >> (sh - 1)) + 1) >> 1) as i128
  };
  if m >= 2 * one {
    // the narrowing round carried all the way up
    m >>= 1;
    k += 1;
  }
  // m in [1, 2): peel log2 digits with the 2^-2^-i table
  let mut acc = 0i128;
  let mut cur = m;
  for i in 1..=fw {
    let t = kernel::mul_q(cur, kernel::lut_u(&tables::INVPOW2, i, fw), fw);
    if t >= one {
      cur = t;
      acc |= 1i128 << (fw - i);
    }
  }
  let tot = ((k as i128) << fw) + acc;
  kernel::mul_q(tot, kernel::const_q(tables::LN_2, fw) as i128, fw)
}

/// ln of a positive working-scale value.
pub(super) fn log_scaled(x: i128, fw: u32) -> i128 {
  log_from_raw(x as u128, fw as i32, fw)
}

impl<
  const N: u32,
  const F: u32,
  Int: Word,
  const E: i32,
  Ovf: OverflowPolicy,
  Unf: UnderflowPolicy,
> Fix<N, F, Int, E, Ovf, Unf> {
  /// `e^self`, into a caller-chosen output format. The `2^k` part of the result is folded
  /// into the output conversion, so a large negative argument underflows (and a large
  /// positive one overflows) through the policies rather than by saturating silently.
  pub fn exp_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    match kernel::to_working(self.raw(), F as i32 + E, fw) {
      // |x| ≤ 1024 covers every representable result with room to spare
      Some(x) if x.abs() <= 1024 << fw => {
        let (m, k) = exp_split(x, fw);
        Fix::from_scaled_i128(m, fw as i32 - k, "exp")
      }
      _ if self.raw() > 0 => Fix::of_word(Ovf::resolve(IntR::ZERO, "exp")),
      _ => Fix::of_word(Unf::resolve(IntR::ZERO, "exp")),
    }
  }

  /// `e^self`.
  pub fn exp(self) -> Self {
    self.exp_as::<N, F, E, Int>()
  }

  /// The natural logarithm, into a caller-chosen output format.
  ///
  /// # Panics
  ///
  /// When `self <= 0` (domain panic).
  pub fn log_as<const NR: u32, const FR: u32, const ER: i32, IntR: Word>(
    self,
  ) -> Fix<NR, FR, IntR, ER, Ovf, Unf> {
    if self.raw() <= 0 {
      panic!("fixed-point logarithm of a non-positive value")
    }
    let fw = kernel::working_frac(F as i32 + E, FR as i32 + ER);
    let z = log_from_raw(self.raw() as u128, F as i32 + E, fw);
    Fix::from_scaled_i128(z, fw as i32, "log")
  }

  /// The natural logarithm. Panics for non-positive values; see [`Self::log_as`].
  pub fn log(self) -> Self {
    self.log_as::<N, F, E, Int>()
  }
}
