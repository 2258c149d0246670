//! Opus post-filter kernel family.
//!
//! [`OpusDsp`] holds the dispatch slot for the CELT-style comb post-filter:
//! an in-place 5-tap filter whose taps sit `period` samples back, weighted
//! by a symmetric 3-value gain curve. The filtered region starts at a
//! caller-chosen offset so the preceding `period + 2` samples serve as
//! history.
//!
//! Portable and accelerated variants agree within floating-point
//! tolerance; the exact operation order is implementation-defined.

pub(crate) mod portable;

#[cfg(target_arch = "aarch64")]
mod aarch64;

#[cfg(target_arch = "x86_64")]
mod x86_64;

use platform::Caps;

use crate::dispatch::{select, Candidate, Selected, PORTABLE};

/// Post-filter kernel over `data[start..]`.
///
/// Caller contract: `start >= period + 2` so every tap has history to
/// read, and `period >= 2`. Violations panic via slice bounds in debug
/// and release alike; no further validation happens per call.
pub type PostfilterFn = fn(data: &mut [f32], start: usize, period: usize, gains: &[f32; 3]);

/// Dispatch context for the Opus post-filter family.
///
/// Constructed once per decoder instance, immutable afterwards. Every
/// slot is populated: the portable kernel is the baseline and overrides
/// only replace it when their capability is present.
#[derive(Clone, Copy, Debug)]
pub struct OpusDsp {
  pub postfilter: Selected<PostfilterFn>,
}

impl OpusDsp {
  /// Build a context against the detected CPU capabilities.
  #[must_use]
  pub fn new() -> Self {
    Self::with_caps(platform::caps())
  }

  /// Build a context against an explicit capability mask.
  #[must_use]
  pub fn with_caps(caps: Caps) -> Self {
    Self {
      postfilter: select_postfilter(caps),
    }
  }

  /// Apply the post-filter in place over `data[start..]`.
  #[inline]
  pub fn postfilter(&self, data: &mut [f32], start: usize, period: usize, gains: &[f32; 3]) {
    (self.postfilter.func)(data, start, period, gains);
  }

  /// Name of the selected post-filter kernel.
  #[must_use]
  pub fn kernel_name(&self) -> &'static str {
    self.postfilter.name
  }
}

impl Default for OpusDsp {
  fn default() -> Self {
    Self::new()
  }
}

fn select_postfilter(caps: Caps) -> Selected<PostfilterFn> {
  #[cfg(target_arch = "x86_64")]
  let candidates: &[Candidate<PostfilterFn>] = &[
    Candidate::new(
      "x86_64/fma",
      platform::caps::x86::FMA_READY,
      x86_64::postfilter_fma_safe,
    ),
    Candidate::new(PORTABLE, Caps::NONE, portable::postfilter),
  ];

  #[cfg(target_arch = "aarch64")]
  let candidates: &[Candidate<PostfilterFn>] = &[
    Candidate::new(
      "aarch64/fmadd",
      platform::caps::aarch64::NEON_READY,
      aarch64::postfilter_fmadd,
    ),
    Candidate::new(PORTABLE, Caps::NONE, portable::postfilter),
  ];

  #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
  let candidates: &[Candidate<PostfilterFn>] =
    &[Candidate::new(PORTABLE, Caps::NONE, portable::postfilter)];

  select(caps, candidates)
}
