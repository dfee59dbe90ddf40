use super::*;

/// Converts between fixed-point formats: the stored integer is shifted from the source
/// resolution `2^(-F2-E2)` to the destination resolution `2^(-F-E)`.
///
/// A widening shift (finer destination) is exact but range-checked through the destination's
/// overflow policy. A narrowing shift (coarser destination) truncates toward minus infinity
/// (the arithmetic right shift); a nonzero source that truncates to exactly zero goes through
/// the destination's underflow policy. The destination's policies apply — the source's never
/// do.
impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
  const N2: u32, const F2: u32, Int2: Word, const E2: i32, Ovf2: OverflowPolicy, Unf2: UnderflowPolicy,
> RoundFrom<Fix<N2, F2, Int2, E2, Ovf2, Unf2>> for Fix<N, F, Int, E, Ovf, Unf> {
  fn round_from(value: Fix<N2, F2, Int2, E2, Ovf2, Unf2>) -> Self {
    const WHAT: &str = "conversion between fixed-point formats";
    let raw = value.raw();
    let shift = (F as i32 + E) - (F2 as i32 + E2);
    if shift >= 0 {
      match crate::fix::checks::shl_exact(raw, shift as u32) {
        Some(v) => Self::from_raw_checked(v, WHAT),
        None => {
          let wrapped = if shift >= 128 { 0 } else { raw.wrapping_shl(shift as u32) };
          Self::of_word(Ovf::resolve(Self::truncate_to_format(wrapped), WHAT))
        }
      }
    } else {
      let s = (-shift) as u32;
      let truncated = if s > 127 { if raw < 0 { -1 } else { 0 } } else { raw >> s };
      if truncated == 0 && raw != 0 {
        return Self::of_word(Unf::resolve(Int::ZERO, WHAT))
      }
      Self::from_raw_checked(truncated, WHAT)
    }
  }
}
