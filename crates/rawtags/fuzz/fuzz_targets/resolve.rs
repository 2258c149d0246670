//! Fuzz target for tag resolution.
//!
//! Lookups must be total: any 32-bit tag against any list returns
//! without panicking, and forward/reverse lookups stay consistent.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rawtags::{find_fourcc, find_pix_fmt, FourCc, TagList};

#[derive(Arbitrary, Debug)]
struct Input {
  raw: u32,
  list: u8,
}

fuzz_target!(|input: Input| {
  let list = match input.list % 3 {
    0 => TagList::Raw,
    1 => TagList::Avi,
    _ => TagList::Mov,
  };
  let tag = FourCc::from_u32(input.raw);

  if let Some(fmt) = find_pix_fmt(list, tag) {
    // A resolvable tag implies the format has a canonical tag in the
    // same list, and that tag resolves back to the same format.
    let canonical = find_fourcc(list, fmt).unwrap();
    assert_eq!(find_pix_fmt(list, canonical), Some(fmt));
  }

  // Display must not panic for any tag, printable or not.
  let _ = tag.to_string();
});
