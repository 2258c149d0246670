//! x86_64 post-filter kernel (FMA).
//!
//! Same tap structure as the portable kernel, contracted into fused
//! multiply-adds. Results differ from the portable kernel only by the
//! intermediate rounding FMA removes.
//!
//! # Safety
//!
//! `#[target_feature]` requires the unsafe-fn/safe-wrapper split; the
//! dispatcher verifies FMA + AVX before selecting this kernel.
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

#[inline]
#[target_feature(enable = "fma")]
unsafe fn postfilter_fma(data: &mut [f32], start: usize, period: usize, gains: &[f32; 3]) {
  debug_assert!(period >= 2);
  debug_assert!(start >= period + 2);
  let [g0, g1, g2] = *gains;

  // Checked loads, so a call violating the history contract panics the
  // same way the portable kernel does.
  let mut x4 = data[start - period - 2];
  let mut x3 = data[start - period - 1];
  let mut x2 = data[start - period];
  let mut x1 = data[start - period + 1];

  for i in start..data.len() {
    let x0 = data[i - period + 2];
    // In bounds: the loop range keeps i below data.len().
    let d = data.get_unchecked_mut(i);
    *d = g2.mul_add(x0 + x4, g1.mul_add(x1 + x3, g0.mul_add(x2, *d)));
    x4 = x3;
    x3 = x2;
    x2 = x1;
    x1 = x0;
  }
}

/// Safe wrapper for the FMA kernel.
#[inline]
pub fn postfilter_fma_safe(data: &mut [f32], start: usize, period: usize, gains: &[f32; 3]) {
  // SAFETY: the dispatcher verifies FMA before selecting this kernel,
  // and the in-bounds accesses mirror the portable kernel's contract.
  unsafe { postfilter_fma(data, start, period, gains) }
}
