//! Master lookup tables for the shift-and-add kernels, all at Q62 (62 fractional bits in an
//! `i64`/`u64`), all evaluated at compile time by `const fn` integer arithmetic. Working
//! precisions up to Q58 are obtained by a rounding right shift, so one set of tables serves
//! every format.

/// Fractional bits of the master tables.
pub(crate) const Q: u32 = 62;

const ONE: i64 = 1 << Q;

// Round-to-nearest Q62 images of the transcendental constants the evaluators need. atan(2^0)
// seeds the arctangent table; the rest are range-reduction and scale-correction factors.
pub(crate) const PI_4: i64 = 3622009729038561421;
pub(crate) const PI_2: i64 = 2 * PI_4;
pub(crate) const LN_2: i64 = 3196577161300663915;
pub(crate) const LOG2_E: i64 = 6653256548922161246;
pub(crate) const SQRT_2: i64 = 6521908912666391106;

/// `atan(2^-i)` for `i = 0..=62`, by the alternating odd series `Σ (-1)^k 2^-i(2k+1) / (2k+1)`
/// evaluated in Q62 with each term rounded to nearest. The series is exact once the term
/// exponent drops below zero, so every entry is correct to within an ulp or two.
pub(crate) static ATAN: [i64; 63] = build_atan();

/// `atanh(2^-i)` for `i = 1..=62` (index 0 is unused: the hyperbolic recurrence starts at
/// iteration 1). Same series as [`ATAN`] without the alternation.
pub(crate) static ATANH: [i64; 63] = build_atanh();

/// `2^(2^-i)` for `i = 1..=62`, by repeated square roots of 2. Index 0 holds 2 itself, which
/// needs the unsigned 64th bit and is never read by the digit loops.
pub(crate) static POW2: [u64; 63] = build_pow2();

/// `2^(-2^-i)` for `i = 1..=62`, by repeated square roots of ½ (index 0 holds ½, likewise
/// never read by the digit loops that consume this table).
pub(crate) static INVPOW2: [u64; 63] = build_invpow2();

/// Reciprocal of the circular CORDIC gain `Π √(1 + 4^-i)`, so a rotation seeded with it comes
/// out unit-scaled.
pub(crate) static CIRC_GAIN_INV: i64 = invert_q(circular_gain());

/// Reciprocal of the hyperbolic gain `Π √(1 - 4^-i)` over the hyperbolic iteration schedule
/// (1, 2, 3, 4, 4, 5, ..., with 4, 13 and 40 visited twice).
pub(crate) static HYP_GAIN_INV: i64 = invert_q(hyperbolic_gain());

/// Floor of the integer square root, by Newton's method.
const fn isqrt(n: u128) -> u128 {
  if n == 0 {
    return 0
  }
  let bits = 128 - n.leading_zeros();
  let mut x = 1u128 << bits.div_ceil(2);
  loop {
    let y = (x + n / x) / 2;
    if y >= x {
      return x
    }
    x = y;
  }
}

/// Square root in Q62: `√(x · 2^62)` floored.
const fn sqrt_q(x: u64) -> u64 {
  isqrt((x as u128) << Q) as u64
}

/// Nearest Q62 value of `2^124 / g`, for turning a gain into its reciprocal.
const fn invert_q(g: u64) -> i64 {
  (((1u128 << (2 * Q)) + (g as u128) / 2) / (g as u128)) as i64
}

const fn build_atan() -> [i64; 63] {
  let mut t = [0i64; 63];
  t[0] = PI_4;
  let mut i = 1;
  while i < 63 {
    let mut acc: i64 = 0;
    let mut k: i64 = 0;
    loop {
      let e = Q as i64 - i as i64 * (2 * k + 1);
      if e < 0 {
        break
      }
      let d = 2 * k + 1;
      let term = ((1i64 << e) + d / 2) / d;
      acc += if k % 2 == 0 { term } else { -term };
      k += 1;
    }
    t[i] = acc;
    i += 1;
  }
  t
}

const fn build_atanh() -> [i64; 63] {
  let mut t = [0i64; 63];
  let mut i = 1;
  while i < 63 {
    let mut acc: i64 = 0;
    let mut k: i64 = 0;
    loop {
      let e = Q as i64 - i as i64 * (2 * k + 1);
      if e < 0 {
        break
      }
      let d = 2 * k + 1;
      acc += ((1i64 << e) + d / 2) / d;
      k += 1;
    }
    t[i] = acc;
    i += 1;
  }
  t
}

const fn build_pow2() -> [u64; 63] {
  let mut t = [0u64; 63];
  t[0] = 2u64 << Q;
  let mut i = 1;
  while i < 63 {
    t[i] = sqrt_q(t[i - 1]);
    i += 1;
  }
  t
}

const fn build_invpow2() -> [u64; 63] {
  let mut t = [0u64; 63];
  t[0] = (ONE as u64) >> 1;
  let mut i = 1;
  while i < 63 {
    t[i] = sqrt_q(t[i - 1]);
    i += 1;
  }
  t
}

const fn circular_gain() -> u64 {
  let mut g = ONE as u64;
  let mut i = 0u32;
  while 2 * i <= Q {
    let f = sqrt_q((ONE as u64) + ((ONE as u64) >> (2 * i)));
    g = (((g as u128) * (f as u128)) >> Q) as u64;
    i += 1;
  }
  g
}

const fn hyperbolic_gain() -> u64 {
  let mut g = ONE as u64;
  let mut i = 1u32;
  let mut rep = 4u32;
  loop {
    if 2 * i > Q {
      return g
    }
    let f = sqrt_q((ONE as u64) - ((ONE as u64) >> (2 * i)));
    g = (((g as u128) * (f as u128)) >> Q) as u64;
    if i == rep {
      g = (((g as u128) * (f as u128)) >> Q) as u64;
      rep = 3 * i + 1;
    }
    i += 1;
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn q62(x: i64) -> f64 {
    x as f64 / (1u64 << 62) as f64
  }

  #[test]
  fn constants_match_their_reals() {
    assert!((q62(PI_4) - core::f64::consts::FRAC_PI_4).abs() < 1e-15);
    assert!((q62(PI_2) - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
    assert!((q62(LN_2) - core::f64::consts::LN_2).abs() < 1e-15);
    assert!((q62(LOG2_E) - core::f64::consts::LOG2_E).abs() < 1e-15);
    assert!((q62(SQRT_2) - core::f64::consts::SQRT_2).abs() < 1e-15);
  }

  #[test]
  fn atan_table() {
    assert_eq!(ATAN[0], PI_4);
    for i in 1..63 {
      let exact = (0.5f64).powi(i).atan();
      assert!((q62(ATAN[i as usize]) - exact).abs() < 1e-15, "atan(2^-{i})");
    }
    // Past i=31 the entries coincide with the argument itself at this precision.
    assert_eq!(ATAN[40], 1 << (62 - 40));
  }

  #[test]
  fn atanh_table() {
    assert_eq!(ATANH[0], 0);
    for i in 1..63 {
      let exact = (0.5f64).powi(i).atanh();
      assert!((q62(ATANH[i as usize]) - exact).abs() < 1e-15, "atanh(2^-{i})");
    }
    assert!(ATANH[1] > ATAN[1]);
  }

  #[test]
  fn pow2_tables() {
    assert_eq!(POW2[0], 2u64 << 62);
    for i in 1..63 {
      let exact = (2.0f64).powf((0.5f64).powi(i));
      assert!((q62(POW2[i as usize] as i64) - exact).abs() < 1e-14, "2^2^-{i}");
      let exact = (2.0f64).powf(-(0.5f64).powi(i));
      assert!((q62(INVPOW2[i as usize] as i64) - exact).abs() < 1e-14, "2^-2^-{i}");
    }
    assert_eq!(INVPOW2[0], 1 << 61);
  }

  #[test]
  fn gain_reciprocals() {
    // K = Π √(1 + 4^-i) ≈ 1.6467602581210656; K' over the repeating hyperbolic schedule
    // ≈ 0.8281593609602156.
    assert!((q62(CIRC_GAIN_INV) - 1.0 / 1.6467602581210656).abs() < 1e-12);
    assert!((q62(HYP_GAIN_INV) - 1.0 / 0.8281593609602156).abs() < 1e-12);
  }

  #[test]
  fn gain_reciprocals_match_the_validated_words() {
    assert_eq!(CIRC_GAIN_INV, 2800459870029452973);
    assert_eq!(HYP_GAIN_INV, 5568597344695027973);
  }
}
