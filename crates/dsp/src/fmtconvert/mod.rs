//! Fixed-point to floating-point format conversion.
//!
//! [`FmtConvert`] is the dispatch context for the conversion kernel family:
//! one slot converting an `i32` buffer to scaled `f32`, and one applying a
//! per-block scale factor over 8-sample blocks by composing the scalar
//! slot. Construction selects kernels once against the capability mask;
//! calls go straight through the stored function pointers.
//!
//! # Example
//!
//! ```
//! use dsp::fmtconvert::FmtConvert;
//!
//! let ctx = FmtConvert::new();
//! let src = [1i32, 2, 3, 4, 5, 6, 7, 8];
//! let mut dst = [0.0f32; 8];
//! ctx.fmul_scalar(&mut dst, &src, 2.0);
//! assert_eq!(dst[7], 16.0);
//! ```

pub(crate) mod portable;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
mod x86_64;

use platform::Caps;

use crate::dispatch::{select, Candidate, Selected, PORTABLE};

/// Scalar conversion kernel: `dst[i] = src[i] as f32 * mul`.
///
/// Caller contract: `dst.len() == src.len()`. No per-call validation
/// happens beyond what slice bounds enforce.
pub type FmulScalarFn = fn(dst: &mut [f32], src: &[i32], mul: f32);

/// Block conversion kernel: one scale factor per 8-sample block, applied
/// through the context's scalar slot in increasing block order.
///
/// Caller contract: `dst.len() == src.len()`, a multiple of 8, and
/// `mul.len() == dst.len() / 8`.
pub type FmulArray8Fn = fn(ctx: &FmtConvert, dst: &mut [f32], src: &[i32], mul: &[f32]);

/// Dispatch context for the format-conversion kernel family.
///
/// Every slot is populated after construction — the portable reference
/// implementation is the guaranteed baseline, and capability-gated
/// overrides only ever replace a slot, never unset it. The context is
/// immutable afterwards and safe to call from multiple threads as long
/// as each supplies its own buffers.
#[derive(Clone, Copy, Debug)]
pub struct FmtConvert {
  pub int32_to_float_fmul_scalar: Selected<FmulScalarFn>,
  pub int32_to_float_fmul_array8: Selected<FmulArray8Fn>,
}

impl FmtConvert {
  /// Build a context against the detected CPU capabilities.
  #[must_use]
  pub fn new() -> Self {
    Self::with_caps(platform::caps())
  }

  /// Build a context against an explicit capability mask.
  ///
  /// With [`Caps::NONE`] every slot holds the portable implementation.
  #[must_use]
  pub fn with_caps(caps: Caps) -> Self {
    Self {
      int32_to_float_fmul_scalar: select_fmul_scalar(caps),
      int32_to_float_fmul_array8: select_fmul_array8(caps),
    }
  }

  /// Convert `src` to `dst` scaled by `mul`.
  #[inline]
  pub fn fmul_scalar(&self, dst: &mut [f32], src: &[i32], mul: f32) {
    (self.int32_to_float_fmul_scalar.func)(dst, src, mul);
  }

  /// Convert `src` to `dst` with one scale factor per 8-sample block.
  #[inline]
  pub fn fmul_array8(&self, dst: &mut [f32], src: &[i32], mul: &[f32]) {
    (self.int32_to_float_fmul_array8.func)(self, dst, src, mul);
  }

  /// Names of the selected kernels, scalar slot first.
  #[must_use]
  pub fn kernel_names(&self) -> [&'static str; 2] {
    [
      self.int32_to_float_fmul_scalar.name,
      self.int32_to_float_fmul_array8.name,
    ]
  }
}

impl Default for FmtConvert {
  fn default() -> Self {
    Self::new()
  }
}

fn select_fmul_scalar(caps: Caps) -> Selected<FmulScalarFn> {
  #[cfg(target_arch = "x86_64")]
  let candidates: &[Candidate<FmulScalarFn>] = &[
    Candidate::new(
      "x86_64/avx",
      platform::caps::x86::AVX_READY,
      x86_64::fmul_scalar_avx_safe,
    ),
    Candidate::new(
      "x86_64/sse2",
      platform::caps::x86::SSE2,
      x86_64::fmul_scalar_sse2_safe,
    ),
    Candidate::new(PORTABLE, Caps::NONE, portable::int32_to_float_fmul_scalar),
  ];

  #[cfg(target_arch = "aarch64")]
  let candidates: &[Candidate<FmulScalarFn>] = &[
    Candidate::new(
      "aarch64/neon",
      platform::caps::aarch64::NEON_READY,
      aarch64::fmul_scalar_neon_safe,
    ),
    Candidate::new(PORTABLE, Caps::NONE, portable::int32_to_float_fmul_scalar),
  ];

  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  let candidates: &[Candidate<FmulScalarFn>] =
    &[Candidate::new(PORTABLE, Caps::NONE, portable::int32_to_float_fmul_scalar)];

  select(caps, candidates)
}

fn select_fmul_array8(caps: Caps) -> Selected<FmulArray8Fn> {
  // The block variant composes the scalar slot, so an architecture
  // override at the block level rides along automatically; no separate
  // accelerated body is needed.
  let candidates: &[Candidate<FmulArray8Fn>] =
    &[Candidate::new(PORTABLE, Caps::NONE, portable::int32_to_float_fmul_array8)];
  select(caps, candidates)
}
