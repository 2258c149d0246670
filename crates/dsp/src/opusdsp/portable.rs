//! Portable reference post-filter.

/// In-place comb post-filter over `data[start..]`.
///
/// For each sample `i`, adds
/// `g0*x[i-p] + g1*(x[i-p-1] + x[i-p+1]) + g2*(x[i-p-2] + x[i-p+2])`
/// where taps more than `period` behind read already-filtered output
/// (the recurrence is IIR when `period` is shorter than the run).
///
/// The five taps ride a shift register, so each loop iteration performs
/// one load instead of five.
pub fn postfilter(data: &mut [f32], start: usize, period: usize, gains: &[f32; 3]) {
  debug_assert!(period >= 2);
  debug_assert!(start >= period + 2, "need period + 2 samples of history");
  let [g0, g1, g2] = *gains;

  let mut x4 = data[start - period - 2];
  let mut x3 = data[start - period - 1];
  let mut x2 = data[start - period];
  let mut x1 = data[start - period + 1];

  for i in start..data.len() {
    let x0 = data[i - period + 2];
    data[i] += g0 * x2 + g1 * (x1 + x3) + g2 * (x0 + x4);
    x4 = x3;
    x3 = x2;
    x2 = x1;
    x1 = x0;
  }
}
