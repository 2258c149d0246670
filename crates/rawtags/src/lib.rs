//! Raw video pixel-format tag resolution.
//!
//! Containers identify raw pixel layouts with a four-character code, or
//! in the legacy AVI/MOV cases with a bits-per-pixel integer stored in
//! the same tag field. This crate holds the three static tag tables and
//! the lookups over them:
//!
//! - [`find_pix_fmt`]: tag to [`PixelFormat`], first match wins.
//! - [`find_fourcc`]: [`PixelFormat`] to its canonical tag.
//!
//! Absent entries are [`None`]; lookups are total and never panic.
//!
//! # Example
//!
//! ```rust
//! use rawtags::{find_pix_fmt, FourCc, PixelFormat, TagList};
//!
//! let tag = FourCc::new(*b"YV12");
//! assert_eq!(find_pix_fmt(TagList::Raw, tag), Some(PixelFormat::Yuv420p));
//! assert_eq!(find_pix_fmt(TagList::Avi, tag), None);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![deny(unsafe_code)]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod fourcc;
mod tables;

pub use fourcc::{FourCc, ParseFourCcError};
pub use tables::{find_fourcc, find_pix_fmt, PixelFormat, PixelFormatTag, TagList};
