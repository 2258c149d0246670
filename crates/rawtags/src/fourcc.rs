//! Four-character codes.

use core::fmt;
use core::str::FromStr;

/// Four-character code identifying a raw pixel layout in a container.
///
/// Stored as four bytes; the `u32` encoding is little-endian, so
/// `b"YV12"` and `0x3231_5659` denote the same tag. Container tables
/// that key on bits-per-pixel rather than a printable code reuse the
/// same type with the integer in the `u32` encoding.
///
/// # Example
/// ```rust
/// use rawtags::FourCc;
///
/// let fcc = FourCc::new(*b"YV12");
/// assert_eq!(fcc.to_u32(), 0x3231_5659);
/// assert_eq!(fcc.to_string(), "YV12");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCc([u8; 4]);

impl FourCc {
  /// Construct from raw bytes.
  #[inline]
  #[must_use]
  pub const fn new(bytes: [u8; 4]) -> Self {
    Self(bytes)
  }

  /// Construct from the little-endian `u32` encoding.
  #[inline]
  #[must_use]
  pub const fn from_u32(value: u32) -> Self {
    Self(value.to_le_bytes())
  }

  /// Little-endian `u32` encoding.
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_le_bytes(self.0)
  }

  /// The raw bytes.
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }

  /// Printable form, if all four bytes are printable ASCII.
  #[must_use]
  pub fn as_str(&self) -> Option<&str> {
    if self.0.iter().all(|b| (0x20..0x7f).contains(b)) {
      core::str::from_utf8(&self.0).ok()
    } else {
      None
    }
  }
}

impl From<u32> for FourCc {
  #[inline]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}

impl From<FourCc> for u32 {
  #[inline]
  fn from(fcc: FourCc) -> Self {
    fcc.to_u32()
  }
}

impl fmt::Display for FourCc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if let Some(s) = self.as_str() {
      write!(f, "{s}")
    } else {
      write!(f, "0x{:08x}", self.to_u32())
    }
  }
}

impl fmt::Debug for FourCc {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "FourCc({self})")
  }
}

/// Error parsing a [`FourCc`] from a string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseFourCcError;

impl fmt::Display for ParseFourCcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("fourcc must be exactly four bytes")
  }
}

impl FromStr for FourCc {
  type Err = ParseFourCcError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let bytes: [u8; 4] = s.as_bytes().try_into().map_err(|_| ParseFourCcError)?;
    Ok(Self(bytes))
  }
}

#[cfg(test)]
mod tests {
  use std::string::ToString;

  use super::*;

  #[test]
  fn u32_encoding_is_little_endian() {
    assert_eq!(FourCc::new(*b"YV12").to_u32(), 0x3231_5659);
    assert_eq!(FourCc::from_u32(0x3231_5659), FourCc::new(*b"YV12"));
  }

  #[test]
  fn display_prints_ascii_tags() {
    assert_eq!(FourCc::new(*b"I420").to_string(), "I420");
    assert_eq!(FourCc::new(*b"Y16 ").to_string(), "Y16 ");
  }

  #[test]
  fn display_falls_back_to_hex_for_unprintable_tags() {
    // Bits-per-pixel tags from AVI/MOV tables are not printable.
    assert_eq!(FourCc::from_u32(16).to_string(), "0x00000010");
    assert_eq!(FourCc::new([b'R', b'G', b'B', 24]).to_string(), "0x18424752");
  }

  #[test]
  fn parse_round_trips() {
    let fcc: FourCc = "NV12".parse().unwrap();
    assert_eq!(fcc, FourCc::new(*b"NV12"));
    assert!("NV1".parse::<FourCc>().is_err());
    assert!("NV123".parse::<FourCc>().is_err());
  }
}
