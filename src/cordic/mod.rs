//! The CORDIC engine behind the elementary functions: shift-and-add iteration over integer
//! registers, no floating point anywhere on the evaluation path.
//!
//! Layout:
//!
//!   - [`tables`] holds the master lookup tables (arctangents, hyperbolic arctangents,
//!     fractional powers of two, scale-factor gains), computed *at compile time* at Q62
//!     precision by `const fn` integer arithmetic. Per-call working precisions are produced by
//!     a rounding shift from Q62, so there is nothing to build or cache at runtime.
//!   - [`kernel`] is the iteration proper: one loop shape, in two coordinate systems
//!     (circular/hyperbolic) times two modes (rotation/vectoring), over `i64` registers.
//!   - The remaining modules wire the kernels into the public methods on
//!     [`Fix`](crate::Fix): range reduction in, scale correction out, one module per function
//!     family.
//!
//! Every function works internally at `fw = clamp(max(resolution_in, resolution_out), 4, 58)`
//! fractional bits with an iteration count equal to `fw`: fixed, data-independent timing per
//! format, which is the point of doing numerics this way.

pub(crate) mod tables;
pub(crate) mod kernel;

mod trig;
mod hyper;
mod explog;
mod sqrt;
