//! MJPEG bitstream boundary.
//!
//! The DSP layer hands encoded coefficients to a bitstream writer it
//! never implements itself. These traits declare that boundary: an
//! encoder backend supplies the implementation, this crate only fixes
//! the shapes the two sides agree on.

use rawtags::PixelFormat;

/// A derived Huffman table: code length and code value per symbol.
#[derive(Clone, Copy, Debug)]
pub struct HuffmanTable {
  /// Code length in bits, per 8-bit symbol.
  pub sizes: [u8; 256],
  /// Code value, left-aligned within `sizes` bits, per 8-bit symbol.
  pub codes: [u16; 256],
}

/// The bits/values table pair a JPEG DHT segment carries.
///
/// `bits[n]` counts the codes of length `n` (index 0 unused, as in the
/// JPEG spec), and `values` lists the symbols in code order.
#[derive(Clone, Copy, Debug)]
pub struct HuffmanSpec<'a> {
  pub bits: &'a [u8; 17],
  pub values: &'a [u8],
}

/// Builds [`HuffmanTable`]s from DHT-style specs.
pub trait HuffmanBuilder {
  /// Derive per-symbol sizes and codes from a bits/values pair.
  fn build(spec: HuffmanSpec<'_>) -> HuffmanTable;
}

/// Frame parameters the picture header needs.
#[derive(Clone, Copy, Debug)]
pub struct PictureParams {
  pub width: u32,
  pub height: u32,
  pub pix_fmt: PixelFormat,
  /// Lossless predictor selection, 0 for baseline DCT.
  pub predictor: u8,
}

/// The MJPEG bitstream writer an encoder backend provides.
///
/// Methods mirror the emission steps of a frame: header, entropy-coded
/// data with DC coefficients, FF-escaping of the scan, trailer.
pub trait MjpegBitstream {
  type Error;

  /// Emit SOI, tables and the frame/scan headers for one picture.
  ///
  /// Returns the number of header bits written, which the trailer
  /// needs to locate the scan start.
  fn encode_picture_header(
    &mut self,
    params: &PictureParams,
    luma_matrix: &[u16; 64],
    chroma_matrix: &[u16; 64],
  ) -> Result<u32, Self::Error>;

  /// Emit EOI and flush; `header_bits` is the header size reported by
  /// [`encode_picture_header`](Self::encode_picture_header).
  fn encode_picture_trailer(&mut self, header_bits: u32) -> Result<(), Self::Error>;

  /// Byte-stuff the scan data from bit offset `start`: every 0xFF data
  /// byte gains a 0x00 stuffing byte.
  fn escape_ff(&mut self, start: u32) -> Result<(), Self::Error>;

  /// Entropy-code one DC coefficient difference with the given table.
  fn encode_dc(&mut self, val: i32, table: &HuffmanTable) -> Result<(), Self::Error>;

  /// Whether the backend can encode frames in this pixel layout.
  fn supports_pix_fmt(&self, pix_fmt: PixelFormat) -> bool;
}
