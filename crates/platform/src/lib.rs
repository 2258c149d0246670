//! CPU detection and capabilities for the mediadsp workspace.
//!
//! This crate is the single source of truth for hardware feature detection.
//! Kernel families in the `dsp` crate select their implementations once
//! against the mask returned by [`caps()`] and never re-check per call.
//!
//! # Core Type
//!
//! - [`Caps`]: what instructions can legally run on this machine
//!
//! # Usage
//!
//! ```ignore
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! if caps.has(x86::AVX_READY) {
//!     // Use the 256-bit conversion kernel
//! }
//! ```
//!
//! # Design
//!
//! 1. **One API**: kernel families query [`caps()`] instead of doing ad-hoc
//!    detection.
//! 2. **Zero-cost when possible**: compile-time features come from `cfg!`.
//! 3. **Cached otherwise**: runtime detection runs once per process.
//! 4. **Miri-safe**: under Miri, only the portable path is reported.

#![no_std]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]

#[cfg(feature = "std")]
extern crate std;

pub mod caps;
mod detect;

pub use caps::{Arch, Caps};
pub use detect::{caps_static, has_override, set_caps_override};

/// Detected CPU capabilities, cached for the process lifetime.
///
/// Callable before any dispatch context is constructed; the value is
/// stable across calls (hardware does not change at runtime).
#[inline]
#[must_use]
pub fn caps() -> Caps {
  detect::caps()
}
