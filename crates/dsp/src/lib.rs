//! Capability-dispatched DSP kernel families.
//!
//! Each kernel family is a context struct of function pointers, populated
//! once at construction by matching an ordered candidate list against the
//! detected CPU capabilities and immutable afterwards:
//!
//! | Context | Kernels |
//! |---------|---------|
//! | [`FmtConvert`] | `i32` to scaled `f32` conversion, scalar and 8-sample block |
//! | [`OpusDsp`] | CELT-style comb post-filter |
//!
//! Every slot always ends up populated: candidate lists terminate in a
//! portable reference kernel with no capability requirements, so
//! construction cannot fail and accelerated variants only ever replace
//! the baseline. Selected kernel names are exposed for diagnostics via
//! [`FmtConvert::kernel_names`] and [`OpusDsp::kernel_name`].
//!
//! # Example
//!
//! ```rust
//! use dsp::FmtConvert;
//!
//! let ctx = FmtConvert::new();
//! let src = [1i32, 2, 3, 4, 5, 6, 7, 8];
//! let mut dst = [0.0f32; 8];
//! ctx.fmul_scalar(&mut dst, &src, 2.0);
//! assert_eq!(dst, [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0]);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the `std` feature for
//! embedded use; kernel selection then runs against compile-time
//! capabilities only.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(unsafe_code)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

pub mod dispatch;
pub mod fmtconvert;
pub mod opusdsp;

pub use dispatch::{Candidate, Selected, PORTABLE};
pub use fmtconvert::FmtConvert;
pub use opusdsp::OpusDsp;
