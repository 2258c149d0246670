//! Runtime CPU detection.
//!
//! Combines compile-time detection (`cfg!(target_feature = "...")`) with
//! runtime detection (`is_x86_feature_detected!` and friends under `std`),
//! caches the result, and honors test/bare-metal overrides.
//!
//! Detection runs at most once per process; the capability mask is stable
//! for the process lifetime.

use core::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::caps::Caps;

// ─────────────────────────────────────────────────────────────────────────────
// Override Support
// ─────────────────────────────────────────────────────────────────────────────
//
// The override takes precedence over detection. It exists for bare metal
// targets without runtime detection and for tests that force a specific
// dispatch path process-wide. Stored as plain atomics so the same code
// works with and without `std`.

static OVERRIDE_SET: AtomicBool = AtomicBool::new(false);
static OVERRIDE_BITS: AtomicU64 = AtomicU64::new(0);

/// Set or clear the capability override.
///
/// When set, [`caps()`] returns the override value instead of detecting.
/// Pass `None` to clear the override and resume detection.
///
/// Thread-safe, but intended to be called early, before kernel contexts
/// are constructed; contexts built earlier keep the kernels they selected.
pub fn set_caps_override(value: Option<Caps>) {
  match value {
    Some(caps) => {
      OVERRIDE_BITS.store(caps.as_raw(), Ordering::Release);
      OVERRIDE_SET.store(true, Ordering::Release);
    }
    None => OVERRIDE_SET.store(false, Ordering::Release),
  }
}

/// Check if an override is currently set.
#[inline]
#[must_use]
pub fn has_override() -> bool {
  OVERRIDE_SET.load(Ordering::Acquire)
}

// ─────────────────────────────────────────────────────────────────────────────
// Cached Detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(feature = "std")]
static DETECTED: std::sync::OnceLock<Caps> = std::sync::OnceLock::new();

/// Detected CPU capabilities.
///
/// With `std`, runtime detection runs once and is cached in a `OnceLock`.
/// Without `std`, only compile-time features are reported.
///
/// Under Miri, always returns [`Caps::NONE`] so kernels stay on the
/// portable path instead of interpreting SIMD intrinsics.
#[inline]
#[must_use]
pub fn caps() -> Caps {
  if has_override() {
    return Caps::from_raw(OVERRIDE_BITS.load(Ordering::Acquire));
  }

  if cfg!(miri) {
    return Caps::NONE;
  }

  #[cfg(feature = "std")]
  {
    *DETECTED.get_or_init(detect)
  }
  #[cfg(not(feature = "std"))]
  {
    caps_static()
  }
}

/// Compile-time detected capabilities.
///
/// Reports only `target_feature`s baked into the binary (e.g. SSE2 on
/// x86_64, NEON on aarch64, or `-C target-feature` / `-C target-cpu`
/// additions). A binary compiled for a feature may assume it exists.
#[must_use]
pub const fn caps_static() -> Caps {
  let mut bits = 0u64;

  #[cfg(target_arch = "x86_64")]
  {
    use crate::caps::x86;
    if cfg!(target_feature = "sse2") {
      bits |= x86::SSE2.as_raw();
    }
    if cfg!(target_feature = "sse3") {
      bits |= x86::SSE3.as_raw();
    }
    if cfg!(target_feature = "ssse3") {
      bits |= x86::SSSE3.as_raw();
    }
    if cfg!(target_feature = "sse4.1") {
      bits |= x86::SSE41.as_raw();
    }
    if cfg!(target_feature = "sse4.2") {
      bits |= x86::SSE42.as_raw();
    }
    if cfg!(target_feature = "avx") {
      bits |= x86::AVX.as_raw();
    }
    if cfg!(target_feature = "avx2") {
      bits |= x86::AVX2.as_raw();
    }
    if cfg!(target_feature = "fma") {
      bits |= x86::FMA.as_raw();
    }
    if cfg!(target_feature = "f16c") {
      bits |= x86::F16C.as_raw();
    }
    if cfg!(target_feature = "avx512f") {
      bits |= x86::AVX512F.as_raw();
    }
    if cfg!(target_feature = "avx512bw") {
      bits |= x86::AVX512BW.as_raw();
    }
    if cfg!(target_feature = "avx512vl") {
      bits |= x86::AVX512VL.as_raw();
    }
  }

  #[cfg(target_arch = "aarch64")]
  {
    use crate::caps::aarch64;
    if cfg!(target_feature = "neon") {
      bits |= aarch64::NEON.as_raw();
    }
    if cfg!(target_feature = "fp16") {
      bits |= aarch64::FP16.as_raw();
    }
    if cfg!(target_feature = "dotprod") {
      bits |= aarch64::DOTPROD.as_raw();
    }
    if cfg!(target_feature = "sve") {
      bits |= aarch64::SVE.as_raw();
    }
    if cfg!(target_feature = "sve2") {
      bits |= aarch64::SVE2.as_raw();
    }
  }

  #[cfg(target_arch = "riscv64")]
  {
    use crate::caps::riscv;
    if cfg!(target_feature = "v") {
      bits |= riscv::RVV_F32.as_raw() | riscv::RVV_I32.as_raw();
    }
    if cfg!(target_feature = "zba") {
      bits |= riscv::RVB_ADDR.as_raw();
    }
    if cfg!(target_feature = "zbb") {
      bits |= riscv::RVB_BASIC.as_raw();
    }
  }

  Caps::from_raw(bits)
}

// ─────────────────────────────────────────────────────────────────────────────
// Per-architecture runtime detection
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(all(feature = "std", target_arch = "x86_64"))]
fn detect() -> Caps {
  use crate::caps::x86;

  let mut caps = caps_static();
  if std::arch::is_x86_feature_detected!("sse2") {
    caps |= x86::SSE2;
  }
  if std::arch::is_x86_feature_detected!("sse3") {
    caps |= x86::SSE3;
  }
  if std::arch::is_x86_feature_detected!("ssse3") {
    caps |= x86::SSSE3;
  }
  if std::arch::is_x86_feature_detected!("sse4.1") {
    caps |= x86::SSE41;
  }
  if std::arch::is_x86_feature_detected!("sse4.2") {
    caps |= x86::SSE42;
  }
  if std::arch::is_x86_feature_detected!("avx") {
    caps |= x86::AVX;
  }
  if std::arch::is_x86_feature_detected!("avx2") {
    caps |= x86::AVX2;
  }
  if std::arch::is_x86_feature_detected!("fma") {
    caps |= x86::FMA;
  }
  if std::arch::is_x86_feature_detected!("f16c") {
    caps |= x86::F16C;
  }
  if std::arch::is_x86_feature_detected!("avx512f") {
    caps |= x86::AVX512F;
  }
  if std::arch::is_x86_feature_detected!("avx512bw") {
    caps |= x86::AVX512BW;
  }
  if std::arch::is_x86_feature_detected!("avx512vl") {
    caps |= x86::AVX512VL;
  }
  caps
}

#[cfg(all(feature = "std", target_arch = "aarch64"))]
fn detect() -> Caps {
  use crate::caps::aarch64;

  let mut caps = caps_static();
  if std::arch::is_aarch64_feature_detected!("neon") {
    caps |= aarch64::NEON;
  }
  if std::arch::is_aarch64_feature_detected!("fp16") {
    caps |= aarch64::FP16;
  }
  if std::arch::is_aarch64_feature_detected!("dotprod") {
    caps |= aarch64::DOTPROD;
  }
  if std::arch::is_aarch64_feature_detected!("sve") {
    caps |= aarch64::SVE;
  }
  if std::arch::is_aarch64_feature_detected!("sve2") {
    caps |= aarch64::SVE2;
  }
  caps
}

// No stable runtime detection on the remaining targets; compile-time only.
#[cfg(all(feature = "std", not(any(target_arch = "x86_64", target_arch = "aarch64"))))]
fn detect() -> Caps {
  caps_static()
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  // One test body: the override is process-global state, and parallel test
  // threads observing it mid-toggle would flake.
  #[test]
  fn detection_and_override() {
    let real = caps();
    assert_eq!(real, caps(), "detection must be stable");
    // Runtime detection can only add to what the binary was compiled for.
    assert!(real.has(caps_static()));

    set_caps_override(Some(Caps::NONE));
    assert!(has_override());
    assert!(caps().is_empty());

    let forced = Caps::from_raw(0b1010);
    set_caps_override(Some(forced));
    assert_eq!(caps(), forced);

    set_caps_override(None);
    assert!(!has_override());
    assert_eq!(caps(), real);
  }
}
