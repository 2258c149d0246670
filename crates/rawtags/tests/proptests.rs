//! Property-based tests for tag resolution.

#![cfg(not(miri))]

use proptest::prelude::*;
use rawtags::{find_fourcc, find_pix_fmt, FourCc, TagList};

const LISTS: [TagList; 3] = [TagList::Raw, TagList::Avi, TagList::Mov];

proptest! {
  #[test]
  fn lookup_is_total_and_deterministic(raw in any::<u32>()) {
    let tag = FourCc::from_u32(raw);
    for list in LISTS {
      let first = find_pix_fmt(list, tag);
      let second = find_pix_fmt(list, tag);
      prop_assert_eq!(first, second);
    }
  }

  #[test]
  fn fourcc_u32_round_trips(raw in any::<u32>()) {
    prop_assert_eq!(FourCc::from_u32(raw).to_u32(), raw);
    prop_assert_eq!(u32::from(FourCc::from(raw)), raw);
  }
}

#[test]
fn canonical_tags_round_trip() {
  for list in LISTS {
    for entry in list.entries() {
      let canonical = find_fourcc(list, entry.pix_fmt).unwrap();
      assert_eq!(find_pix_fmt(list, canonical), Some(entry.pix_fmt), "{list:?} {canonical}");
    }
  }
}

#[test]
fn raw_tags_never_resolve_in_bps_lists() {
  // Raw fourcc codes have at least one byte >= 0x20 in every position,
  // while the bps tables key on small integers, so the tables stay
  // disjoint in both directions.
  for entry in TagList::Raw.entries() {
    assert_eq!(find_pix_fmt(TagList::Avi, entry.tag), None, "{}", entry.tag);
    assert_eq!(find_pix_fmt(TagList::Mov, entry.tag), None, "{}", entry.tag);
  }
  for list in [TagList::Avi, TagList::Mov] {
    for entry in list.entries() {
      assert_eq!(find_pix_fmt(TagList::Raw, entry.tag), None, "{list:?} {}", entry.tag);
    }
  }
}
