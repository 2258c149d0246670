//! Capability-dispatched media DSP kernels with raw format tag tables.
//!
//! `mediadsp` selects optimized kernel variants at context construction
//! based on detected CPU capabilities, always keeping a portable
//! reference implementation as the baseline. It also carries the static
//! tag tables that map container fourcc codes to pixel formats.
//!
//! # Quick Start
//!
//! ```
//! use mediadsp::{FmtConvert, FourCc, PixelFormat, TagList, find_pix_fmt};
//!
//! // Dispatch context, built once per decoder instance
//! let ctx = FmtConvert::new();
//! let src = [1i32, 2, 3, 4, 5, 6, 7, 8];
//! let mut dst = [0.0f32; 8];
//! ctx.fmul_scalar(&mut dst, &src, 2.0);
//! assert_eq!(dst[7], 16.0);
//!
//! // Tag resolution
//! let fmt = find_pix_fmt(TagList::Raw, FourCc::new(*b"YV12"));
//! assert_eq!(fmt, Some(PixelFormat::Yuv420p));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | Enables runtime CPU detection for optimal dispatch |
//!
//! ## `no_std` Usage
//!
//! ```toml
//! [dependencies]
//! mediadsp = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, kernel selection uses compile-time feature detection only.
#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Platform
// =============================================================================

pub use platform::{caps, caps_static, set_caps_override, Arch, Caps};

// =============================================================================
// Kernel Families
// =============================================================================

pub use dsp::{Candidate, FmtConvert, OpusDsp, Selected, PORTABLE};

// =============================================================================
// Format Tags
// =============================================================================

pub use rawtags::{find_fourcc, find_pix_fmt, FourCc, ParseFourCcError, PixelFormat, PixelFormatTag, TagList};

// =============================================================================
// Encoder Boundary
// =============================================================================

pub mod bitstream;
