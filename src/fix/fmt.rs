use super::*;

/// Shows the format parameters and the stored bits, with the binary point drawn in: e.g.
/// `Fix<16,8>(00000001.10000000 = 1.5)`. Junk bits above the logical width are not shown; a
/// nonzero scale exponent and unsignedness are spelled out in the parameter list.
impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
> core::fmt::Debug for Fix<N, F, Int, E, Ovf, Unf> {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    write!(f, "Fix<{N},{F}")?;
    if E != 0 {
      write!(f, ",E={E}")?;
    }
    if !Int::SIGNED {
      write!(f, ",u")?;
    }
    write!(f, ">(")?;
    let bits = self.raw();
    for i in (0..N).rev() {
      if F != 0 && F != N && i == F - 1 {
        write!(f, ".")?;
      }
      write!(f, "{}", (bits >> i) & 1)?;
    }
    write!(f, " = {})", f64::round_from(*self))
  }
}

/// Shows the represented value, through the (possibly rounding) `f64` conversion.
impl<
  const N: u32, const F: u32, Int: Word, const E: i32, Ovf: OverflowPolicy, Unf: UnderflowPolicy,
> core::fmt::Display for Fix<N, F, Int, E, Ovf, Unf> {
  fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
    core::fmt::Display::fmt(&f64::round_from(*self), f)
  }
}
