//! Portable reference conversion kernels.
//!
//! Correct on any hardware; the guaranteed baseline every context starts
//! from before capability-gated overrides are considered.

use super::FmtConvert;

/// `dst[i] = src[i] as f32 * mul` over `min(dst.len(), src.len())` samples.
pub fn int32_to_float_fmul_scalar(dst: &mut [f32], src: &[i32], mul: f32) {
  for (d, &s) in dst.iter_mut().zip(src) {
    *d = s as f32 * mul;
  }
}

/// Apply one scale factor per 8-sample block by composing the scalar slot.
///
/// Calls the context's (possibly overridden) scalar kernel exactly once
/// per block, in increasing block order, so block-level acceleration is
/// preserved.
pub fn int32_to_float_fmul_array8(ctx: &FmtConvert, dst: &mut [f32], src: &[i32], mul: &[f32]) {
  debug_assert_eq!(dst.len() % 8, 0);
  debug_assert_eq!(mul.len(), dst.len() / 8);

  for ((d, s), &m) in dst.chunks_exact_mut(8).zip(src.chunks_exact(8)).zip(mul) {
    (ctx.int32_to_float_fmul_scalar.func)(d, s, m);
  }
}
