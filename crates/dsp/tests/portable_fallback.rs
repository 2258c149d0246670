//! Tests verifying the portable tier is always reachable.
//!
//! Constructing a context against an empty capability mask must yield the
//! portable reference kernels on every platform, and those kernels must
//! produce the documented results.

use dsp::{FmtConvert, OpusDsp, PORTABLE};
use platform::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Format Conversion
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn fmtconvert_empty_caps_selects_portable() {
  let ctx = FmtConvert::with_caps(Caps::NONE);
  let [scalar, array8] = ctx.kernel_names();
  assert_eq!(scalar, PORTABLE);
  assert_eq!(array8, PORTABLE);
}

#[test]
fn fmul_scalar_portable_reference_values() {
  let ctx = FmtConvert::with_caps(Caps::NONE);
  let src = [1i32, 2, 3, 4, 5, 6, 7, 8];
  let mut dst = [0.0f32; 8];

  ctx.fmul_scalar(&mut dst, &src, 2.0);

  assert_eq!(dst, [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
}

#[test]
fn fmul_scalar_portable_handles_empty_and_negative() {
  let ctx = FmtConvert::with_caps(Caps::NONE);

  ctx.fmul_scalar(&mut [], &[], 3.0);

  let src = [-1i32, i32::MIN, i32::MAX];
  let mut dst = [0.0f32; 3];
  ctx.fmul_scalar(&mut dst, &src, 1.0);
  assert_eq!(dst[0], -1.0);
  assert_eq!(dst[1], i32::MIN as f32);
  assert_eq!(dst[2], i32::MAX as f32);
}

#[test]
fn fmul_array8_portable_applies_per_block_scales() {
  let ctx = FmtConvert::with_caps(Caps::NONE);
  let src: Vec<i32> = (1..=16).collect();
  let mut dst = vec![0.0f32; 16];
  let mul = [1.0f32, 10.0];

  ctx.fmul_array8(&mut dst, &src, &mul);

  for i in 0..8 {
    assert_eq!(dst[i], (i as f32 + 1.0));
    assert_eq!(dst[i + 8], (i as f32 + 9.0) * 10.0);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Opus Post-Filter
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn opusdsp_empty_caps_selects_portable() {
  let ctx = OpusDsp::with_caps(Caps::NONE);
  assert_eq!(ctx.kernel_name(), PORTABLE);
}

#[test]
fn postfilter_portable_reference_values() {
  let ctx = OpusDsp::with_caps(Caps::NONE);
  let mut data = [1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];

  ctx.postfilter(&mut data, 4, 2, &[0.5, 0.25, 0.125]);

  assert_eq!(data, [1.0, 2.0, 3.0, 4.0, 8.75, 11.0, 13.25, 15.5]);
}

#[test]
fn postfilter_zero_gains_leave_data_untouched() {
  let ctx = OpusDsp::with_caps(Caps::NONE);
  let original: Vec<f32> = (0..64).map(|i| i as f32 * 0.25 - 4.0).collect();
  let mut data = original.clone();

  ctx.postfilter(&mut data, 16, 7, &[0.0, 0.0, 0.0]);

  assert_eq!(data, original);
}

#[test]
fn postfilter_leaves_history_region_untouched() {
  let ctx = OpusDsp::with_caps(Caps::NONE);
  let original: Vec<f32> = (0..64).map(|i| ((i * 13) % 31) as f32 - 15.0).collect();
  let mut data = original.clone();

  ctx.postfilter(&mut data, 24, 9, &[0.3, 0.2, 0.1]);

  assert_eq!(&data[..24], &original[..24]);
}
