//! aarch64 post-filter kernel.
//!
//! AArch64 scalar floating point fuses multiply-adds natively, so this
//! variant contracts the taps with `mul_add` and needs no intrinsics.

/// Post-filter using fused multiply-adds.
#[inline]
pub fn postfilter_fmadd(data: &mut [f32], start: usize, period: usize, gains: &[f32; 3]) {
  debug_assert!(period >= 2);
  debug_assert!(start >= period + 2);
  let [g0, g1, g2] = *gains;

  let mut x4 = data[start - period - 2];
  let mut x3 = data[start - period - 1];
  let mut x2 = data[start - period];
  let mut x1 = data[start - period + 1];

  for i in start..data.len() {
    let x0 = data[i - period + 2];
    data[i] = g2.mul_add(x0 + x4, g1.mul_add(x1 + x3, g0.mul_add(x2, data[i])));
    x4 = x3;
    x3 = x2;
    x2 = x1;
    x1 = x0;
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::opusdsp::portable;

  #[test]
  fn fmadd_matches_portable_within_tolerance() {
    let src: std::vec::Vec<f32> = (0..512).map(|i| ((i * 73) % 97) as f32 / 97.0 - 0.5).collect();
    let mut a = src.clone();
    let mut b = src;
    let gains = [0.4f32, 0.25, 0.15];

    portable::postfilter(&mut a, 32, 17, &gains);
    postfilter_fmadd(&mut b, 32, 17, &gains);

    for (i, (x, y)) in a.iter().zip(&b).enumerate() {
      let tol = 1e-5 * x.abs().max(1.0);
      assert!((x - y).abs() <= tol, "sample {i}: {x} vs {y}");
    }
  }
}
