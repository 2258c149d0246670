//! x86_64 conversion kernels (SSE2 and AVX).
//!
//! # Safety
//!
//! Uses `unsafe` for x86 SIMD intrinsics. The dispatcher verifies the
//! required capability before selecting an accelerated kernel.
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::*;

/// Scalar-multiply-convert, 4 samples per iteration.
#[inline]
#[target_feature(enable = "sse2")]
unsafe fn fmul_scalar_sse2(dst: &mut [f32], src: &[i32], mul: f32) {
  let n = dst.len().min(src.len());
  let m = _mm_set1_ps(mul);

  let mut i = 0;
  while i + 4 <= n {
    let v = _mm_loadu_si128(src.as_ptr().add(i).cast());
    let f = _mm_mul_ps(_mm_cvtepi32_ps(v), m);
    _mm_storeu_ps(dst.as_mut_ptr().add(i), f);
    i += 4;
  }
  while i < n {
    *dst.get_unchecked_mut(i) = *src.get_unchecked(i) as f32 * mul;
    i += 1;
  }
}

/// Scalar-multiply-convert, 8 samples per iteration.
#[inline]
#[target_feature(enable = "avx")]
unsafe fn fmul_scalar_avx(dst: &mut [f32], src: &[i32], mul: f32) {
  let n = dst.len().min(src.len());
  let m = _mm256_set1_ps(mul);

  let mut i = 0;
  while i + 8 <= n {
    let v = _mm256_loadu_si256(src.as_ptr().add(i).cast());
    let f = _mm256_mul_ps(_mm256_cvtepi32_ps(v), m);
    _mm256_storeu_ps(dst.as_mut_ptr().add(i), f);
    i += 8;
  }
  while i < n {
    *dst.get_unchecked_mut(i) = *src.get_unchecked(i) as f32 * mul;
    i += 1;
  }
}

/// Safe wrapper for the SSE2 kernel.
#[inline]
pub fn fmul_scalar_sse2_safe(dst: &mut [f32], src: &[i32], mul: f32) {
  // SAFETY: the dispatcher verifies SSE2 before selecting this kernel.
  unsafe { fmul_scalar_sse2(dst, src, mul) }
}

/// Safe wrapper for the AVX kernel.
#[inline]
pub fn fmul_scalar_avx_safe(dst: &mut [f32], src: &[i32], mul: f32) {
  // SAFETY: the dispatcher verifies AVX before selecting this kernel.
  unsafe { fmul_scalar_avx(dst, src, mul) }
}
