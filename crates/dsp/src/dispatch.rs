//! Kernel selection primitives.
//!
//! Each kernel family exposes a context struct whose slots are filled once
//! at construction from an ordered candidate list:
//!
//! - [`Candidate`]: a kernel with capability requirements
//! - [`Selected`]: the chosen kernel plus its diagnostic name
//! - [`select`]: pick the first candidate the detected capabilities satisfy
//!
//! Candidates are ordered best to worst, so when several variants of one
//! slot are eligible the most optimized one wins. The last candidate must
//! require [`Caps::NONE`] — the portable reference implementation — which
//! makes selection total: initialization has no failure mode.

use platform::Caps;

/// Diagnostic name of the portable reference kernels.
pub const PORTABLE: &str = "portable";

/// A candidate kernel with capability requirements.
#[derive(Clone, Copy, Debug)]
pub struct Candidate<F> {
  /// Human-readable name (e.g. `"x86_64/avx"`).
  pub name: &'static str,
  /// Required CPU capabilities; must be a subset of detected caps.
  pub requires: Caps,
  /// The kernel function pointer.
  pub func: F,
}

impl<F> Candidate<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, requires: Caps, func: F) -> Self {
    Self { name, requires, func }
  }
}

/// The result of kernel selection: one populated context slot.
#[derive(Clone, Copy, Debug)]
pub struct Selected<F> {
  /// Name of the selected kernel.
  pub name: &'static str,
  /// The selected kernel function.
  pub func: F,
}

impl<F> Selected<F> {
  #[inline]
  #[must_use]
  pub const fn new(name: &'static str, func: F) -> Self {
    Self { name, func }
  }
}

/// Select the best kernel from an ordered candidate list.
///
/// Returns the first candidate whose `requires` mask is satisfied by
/// `caps`. Capability absence is not an error; it simply leaves a less
/// demanding candidate (ultimately the portable one) in place.
///
/// # Panics
///
/// Panics if no candidate matches, which a well-formed list rules out by
/// ending with a portable fallback requiring [`Caps::NONE`].
#[inline]
#[must_use]
pub fn select<F: Copy>(caps: Caps, candidates: &[Candidate<F>]) -> Selected<F> {
  for candidate in candidates {
    if caps.has(candidate.requires) {
      return Selected::new(candidate.name, candidate.func);
    }
  }
  panic!("candidate list must end with a portable fallback");
}

#[cfg(test)]
mod tests {
  use super::*;

  type TestFn = fn(i32) -> i32;

  fn portable_impl(x: i32) -> i32 {
    x + 1
  }

  fn fast_impl(x: i32) -> i32 {
    x + 2
  }

  fn faster_impl(x: i32) -> i32 {
    x + 3
  }

  #[test]
  fn portable_fallback_selected_without_caps() {
    let candidates: &[Candidate<TestFn>] = &[
      Candidate::new("fast", Caps::bit(0), fast_impl),
      Candidate::new(PORTABLE, Caps::NONE, portable_impl),
    ];

    let selected = select(Caps::NONE, candidates);
    assert_eq!(selected.name, PORTABLE);
    assert_eq!((selected.func)(1), 2);
  }

  #[test]
  fn best_candidate_wins() {
    let candidates: &[Candidate<TestFn>] = &[
      Candidate::new("faster", Caps::bit(1), faster_impl),
      Candidate::new("fast", Caps::bit(0), fast_impl),
      Candidate::new(PORTABLE, Caps::NONE, portable_impl),
    ];

    // Both optimized variants eligible: the first (most optimized) wins.
    let selected = select(Caps::bit(0) | Caps::bit(1), candidates);
    assert_eq!(selected.name, "faster");

    // Masking the best one falls through to the next.
    let selected = select(Caps::bit(0), candidates);
    assert_eq!(selected.name, "fast");
  }

  #[test]
  fn unmet_requirements_are_skipped() {
    let candidates: &[Candidate<TestFn>] = &[
      Candidate::new("needs-both", Caps::bit(0) | Caps::bit(1), faster_impl),
      Candidate::new(PORTABLE, Caps::NONE, portable_impl),
    ];

    // A candidate needing a superset of detected caps is not eligible.
    let selected = select(Caps::bit(0), candidates);
    assert_eq!(selected.name, PORTABLE);
  }
}
