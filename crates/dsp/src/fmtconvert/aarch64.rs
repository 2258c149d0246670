//! aarch64 conversion kernels (NEON).
//!
//! # Safety
//!
//! Uses `unsafe` for NEON intrinsics. The dispatcher verifies NEON before
//! selecting the accelerated kernel.
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::aarch64::*;

/// Scalar-multiply-convert, 4 samples per iteration.
#[inline]
#[target_feature(enable = "neon")]
unsafe fn fmul_scalar_neon(dst: &mut [f32], src: &[i32], mul: f32) {
  let n = dst.len().min(src.len());

  let mut i = 0;
  while i + 4 <= n {
    let v = vld1q_s32(src.as_ptr().add(i));
    let f = vmulq_n_f32(vcvtq_f32_s32(v), mul);
    vst1q_f32(dst.as_mut_ptr().add(i), f);
    i += 4;
  }
  while i < n {
    *dst.get_unchecked_mut(i) = *src.get_unchecked(i) as f32 * mul;
    i += 1;
  }
}

/// Safe wrapper for the NEON kernel.
#[inline]
pub fn fmul_scalar_neon_safe(dst: &mut [f32], src: &[i32], mul: f32) {
  // SAFETY: the dispatcher verifies NEON before selecting this kernel.
  unsafe { fmul_scalar_neon(dst, src, mul) }
}
