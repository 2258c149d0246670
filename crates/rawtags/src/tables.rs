//! Static pixel-format tag tables and lookups.
//!
//! Three disjoint tables map container tags to pixel formats:
//!
//! - [`TagList::Raw`]: proper fourcc codes as found in raw video streams.
//! - [`TagList::Avi`] and [`TagList::Mov`]: legacy entries keyed on a
//!   bits-per-pixel integer stored in the tag field. The same integer
//!   resolves differently per container (24 bpp is BGR-ordered in AVI,
//!   RGB-ordered in MOV), which is why the tables never merge.
//!
//! Lookups scan in definition order and the first match wins, so a
//! format listed under several tags has a canonical tag: the first one.

use crate::fourcc::FourCc;

/// A raw video pixel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum PixelFormat {
  /// Planar 4:2:0 YUV.
  Yuv420p,
  /// Planar 4:1:0 YUV.
  Yuv410p,
  /// Planar 4:1:1 YUV.
  Yuv411p,
  /// Planar 4:2:2 YUV.
  Yuv422p,
  /// Planar 4:4:4 YUV.
  Yuv444p,
  /// Packed 4:2:2, Y0 Cb Y1 Cr byte order.
  Yuyv422,
  /// Packed 4:2:2, Cb Y0 Cr Y1 byte order.
  Uyvy422,
  /// Semi-planar 4:2:0, interleaved Cb/Cr plane.
  Nv12,
  /// Semi-planar 4:2:0, interleaved Cr/Cb plane.
  Nv21,
  /// 8-bit luma only.
  Gray8,
  /// 16-bit little-endian luma only.
  Gray16le,
  /// 8-bit paletted.
  Pal8,
  /// Packed 12-bit RGB, little-endian.
  Rgb444le,
  /// Packed 15-bit RGB in 16 bits, little-endian.
  Rgb555le,
  /// Packed 15-bit RGB in 16 bits, big-endian.
  Rgb555be,
  /// Packed 24-bit RGB.
  Rgb24,
  /// Packed 24-bit BGR.
  Bgr24,
  /// Packed 32-bit RGBA.
  Rgba,
  /// Packed 32-bit BGRA.
  Bgra,
  /// Packed 32-bit ARGB.
  Argb,
  /// Packed 32-bit ABGR.
  Abgr,
}

/// One table entry: a pixel format and the tag that denotes it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelFormatTag {
  pub pix_fmt: PixelFormat,
  pub tag: FourCc,
}

impl PixelFormatTag {
  const fn new(pix_fmt: PixelFormat, tag: FourCc) -> Self {
    Self { pix_fmt, tag }
  }
}

/// Which tag table to resolve against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagList {
  /// Fourcc codes for raw video streams.
  Raw,
  /// AVI bits-per-pixel entries.
  Avi,
  /// MOV/QuickTime bits-per-pixel entries.
  Mov,
}

impl TagList {
  /// The entries of this table, in definition order.
  #[must_use]
  pub const fn entries(self) -> &'static [PixelFormatTag] {
    match self {
      Self::Raw => RAW_TAGS,
      Self::Avi => AVI_TAGS,
      Self::Mov => MOV_TAGS,
    }
  }
}

const fn raw(pix_fmt: PixelFormat, bytes: [u8; 4]) -> PixelFormatTag {
  PixelFormatTag::new(pix_fmt, FourCc::new(bytes))
}

const fn bps(pix_fmt: PixelFormat, bits: u32) -> PixelFormatTag {
  PixelFormatTag::new(pix_fmt, FourCc::from_u32(bits))
}

/// Fourcc tags for raw video. The first tag listed for a format is its
/// canonical tag for reverse lookup.
static RAW_TAGS: &[PixelFormatTag] = &[
  raw(PixelFormat::Yuv420p, *b"I420"),
  raw(PixelFormat::Yuv420p, *b"IYUV"),
  raw(PixelFormat::Yuv420p, *b"YV12"),
  raw(PixelFormat::Yuv410p, *b"YUV9"),
  raw(PixelFormat::Yuv410p, *b"YVU9"),
  raw(PixelFormat::Yuv411p, *b"Y41B"),
  raw(PixelFormat::Yuv422p, *b"Y42B"),
  raw(PixelFormat::Yuv422p, *b"P422"),
  raw(PixelFormat::Yuv444p, *b"444P"),
  raw(PixelFormat::Yuyv422, *b"YUY2"),
  raw(PixelFormat::Yuyv422, *b"Y422"),
  raw(PixelFormat::Yuyv422, *b"V422"),
  raw(PixelFormat::Yuyv422, *b"YUNV"),
  raw(PixelFormat::Uyvy422, *b"UYVY"),
  raw(PixelFormat::Uyvy422, *b"HDYC"),
  raw(PixelFormat::Uyvy422, *b"UYNV"),
  raw(PixelFormat::Nv12, *b"NV12"),
  raw(PixelFormat::Nv21, *b"NV21"),
  raw(PixelFormat::Gray8, *b"GREY"),
  raw(PixelFormat::Gray8, *b"Y800"),
  raw(PixelFormat::Gray8, *b"Y8  "),
  raw(PixelFormat::Gray16le, *b"Y16 "),
  raw(PixelFormat::Rgb555le, [b'R', b'G', b'B', 15]),
  raw(PixelFormat::Rgb24, [b'R', b'G', b'B', 24]),
  raw(PixelFormat::Bgr24, [b'B', b'G', b'R', 24]),
  raw(PixelFormat::Rgba, *b"RGBA"),
  raw(PixelFormat::Bgra, *b"BGRA"),
  raw(PixelFormat::Argb, *b"ARGB"),
  raw(PixelFormat::Abgr, *b"ABGR"),
];

/// AVI entries keyed on bits per pixel. Low-depth entries are paletted;
/// 24 and 32 bpp are BGR-ordered.
static AVI_TAGS: &[PixelFormatTag] = &[
  bps(PixelFormat::Pal8, 1),
  bps(PixelFormat::Pal8, 2),
  bps(PixelFormat::Pal8, 4),
  bps(PixelFormat::Pal8, 8),
  bps(PixelFormat::Rgb444le, 12),
  bps(PixelFormat::Rgb555le, 15),
  bps(PixelFormat::Rgb555le, 16),
  bps(PixelFormat::Bgr24, 24),
  bps(PixelFormat::Bgra, 32),
];

/// MOV entries keyed on bits per pixel. 16 bpp is big-endian RGB555,
/// 24 and 32 bpp are RGB-ordered, and 33 marks 8-bit grayscale-palette
/// content that still decodes as paletted data.
static MOV_TAGS: &[PixelFormatTag] = &[
  bps(PixelFormat::Pal8, 1),
  bps(PixelFormat::Pal8, 2),
  bps(PixelFormat::Pal8, 4),
  bps(PixelFormat::Pal8, 8),
  bps(PixelFormat::Rgb555be, 16),
  bps(PixelFormat::Rgb24, 24),
  bps(PixelFormat::Argb, 32),
  bps(PixelFormat::Pal8, 33),
];

/// Resolve a tag to a pixel format against one table.
///
/// Scans in definition order; the first match wins. Returns [`None`]
/// when no entry carries the tag.
#[must_use]
pub fn find_pix_fmt(list: TagList, tag: FourCc) -> Option<PixelFormat> {
  list
    .entries()
    .iter()
    .find(|entry| entry.tag == tag)
    .map(|entry| entry.pix_fmt)
}

/// Resolve a pixel format to its canonical tag in one table.
///
/// Returns the first tag listed for the format, or [`None`] when the
/// format has no entry in that table.
#[must_use]
pub fn find_fourcc(list: TagList, pix_fmt: PixelFormat) -> Option<FourCc> {
  list
    .entries()
    .iter()
    .find(|entry| entry.pix_fmt == pix_fmt)
    .map(|entry| entry.tag)
}
