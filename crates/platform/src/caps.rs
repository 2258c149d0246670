//! CPU capability representation.
//!
//! [`Caps`] is a 64-bit bitset describing the vector/instruction-set
//! extensions the running machine supports. DSP contexts query it once at
//! construction to pick kernels; it is never consulted again per call.
//!
//! # Bit Layout
//!
//! - Bits 0-15: x86/x86_64 features
//! - Bits 16-31: aarch64 features
//! - Bits 32-47: RISC-V features
//!
//! # Usage
//!
//! ```ignore
//! use platform::caps::x86;
//!
//! let caps = platform::caps();
//! if caps.has(x86::AVX_READY) {
//!     // 256-bit conversion kernel is safe to run
//! }
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// Core Capability Type
// ─────────────────────────────────────────────────────────────────────────────

/// CPU capabilities: a 64-bit feature bitset.
///
/// Use [`has()`](Caps::has) to check whether all features required by a
/// kernel are available.
///
/// # Thread Safety
///
/// `Caps` is `Copy`, `Send`, and `Sync`, and the detected value is stable
/// for the process lifetime (hardware does not change at runtime).
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Caps(pub(crate) u64);

impl Caps {
  /// Empty capability set (no optional features).
  pub const NONE: Self = Self(0);

  /// Create a capability set from raw bits.
  #[inline]
  #[must_use]
  pub const fn from_raw(bits: u64) -> Self {
    Self(bits)
  }

  /// Raw underlying bits.
  #[inline]
  #[must_use]
  pub const fn as_raw(self) -> u64 {
    self.0
  }

  /// Check if all features in `required` are present.
  ///
  /// This is the dispatch predicate; kernels are selected once against it
  /// and never re-check capabilities per call.
  #[inline(always)]
  #[must_use]
  pub const fn has(self, required: Self) -> bool {
    (self.0 & required.0) == required.0
  }

  /// Union of two capability sets.
  #[inline]
  #[must_use]
  pub const fn union(self, other: Self) -> Self {
    Self(self.0 | other.0)
  }

  /// Intersection of two capability sets.
  #[inline]
  #[must_use]
  pub const fn intersection(self, other: Self) -> Self {
    Self(self.0 & other.0)
  }

  /// Remove the features in `other` from this set.
  #[inline]
  #[must_use]
  pub const fn difference(self, other: Self) -> Self {
    Self(self.0 & !other.0)
  }

  /// Check if the capability set is empty.
  #[inline]
  #[must_use]
  pub const fn is_empty(self) -> bool {
    self.0 == 0
  }

  /// Count the number of features present.
  #[inline]
  #[must_use]
  pub const fn count(self) -> u32 {
    self.0.count_ones()
  }

  /// Create a capability set with a single bit set.
  #[inline]
  #[must_use]
  pub const fn bit(bit: u8) -> Self {
    Self(1u64 << (bit & 63))
  }

  /// Check if a specific bit is set.
  #[inline]
  #[must_use]
  pub const fn has_bit(self, bit: u8) -> bool {
    (self.0 >> (bit & 63)) & 1 != 0
  }
}

impl core::ops::BitOr for Caps {
  type Output = Self;

  #[inline]
  fn bitor(self, rhs: Self) -> Self::Output {
    self.union(rhs)
  }
}

impl core::ops::BitAnd for Caps {
  type Output = Self;

  #[inline]
  fn bitand(self, rhs: Self) -> Self::Output {
    self.intersection(rhs)
  }
}

impl core::ops::BitOrAssign for Caps {
  #[inline]
  fn bitor_assign(&mut self, rhs: Self) {
    *self = self.union(rhs);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Architecture Identification
// ─────────────────────────────────────────────────────────────────────────────

/// Target architecture enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Arch {
  X86_64,
  Aarch64,
  Riscv64,
  #[default]
  Other,
}

impl Arch {
  /// Architecture of the current compilation target.
  ///
  /// Exactly one family is compiled into a given binary; arch-specific
  /// kernel modules key off the same `target_arch` configuration.
  #[inline]
  #[must_use]
  pub const fn current() -> Self {
    #[cfg(target_arch = "x86_64")]
    {
      Self::X86_64
    }
    #[cfg(target_arch = "aarch64")]
    {
      Self::Aarch64
    }
    #[cfg(target_arch = "riscv64")]
    {
      Self::Riscv64
    }
    #[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64", target_arch = "riscv64")))]
    {
      Self::Other
    }
  }

  /// Human-readable architecture name.
  #[inline]
  #[must_use]
  pub const fn name(self) -> &'static str {
    match self {
      Self::X86_64 => "x86_64",
      Self::Aarch64 => "aarch64",
      Self::Riscv64 => "riscv64",
      Self::Other => "other",
    }
  }
}

impl core::fmt::Display for Arch {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str(self.name())
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// x86/x86_64 Features (bits 0-15)
// ─────────────────────────────────────────────────────────────────────────────

/// x86/x86_64 CPU features.
pub mod x86 {
  use super::Caps;

  pub const SSE2: Caps = Caps::bit(0);
  pub const SSE3: Caps = Caps::bit(1);
  pub const SSSE3: Caps = Caps::bit(2);
  pub const SSE41: Caps = Caps::bit(3);
  pub const SSE42: Caps = Caps::bit(4);
  pub const AVX: Caps = Caps::bit(5);
  pub const AVX2: Caps = Caps::bit(6);
  pub const FMA: Caps = Caps::bit(7);
  pub const F16C: Caps = Caps::bit(8);
  pub const AVX512F: Caps = Caps::bit(9);
  pub const AVX512BW: Caps = Caps::bit(10);
  pub const AVX512VL: Caps = Caps::bit(11);

  // ─── Combined Capability Masks ───

  /// 256-bit float conversion ready.
  pub const AVX_READY: Caps = AVX;

  /// Fused multiply-add ready: FMA + AVX (VEX encodings).
  pub const FMA_READY: Caps = Caps(FMA.0 | AVX.0);

  /// AVX2 integer SIMD ready: AVX2 + AVX.
  pub const AVX2_READY: Caps = Caps(AVX2.0 | AVX.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// aarch64 Features (bits 16-31)
// ─────────────────────────────────────────────────────────────────────────────

/// aarch64 CPU features.
pub mod aarch64 {
  use super::Caps;

  /// Baseline on AArch64, still detected rather than assumed.
  pub const NEON: Caps = Caps::bit(16);
  pub const FP16: Caps = Caps::bit(17);
  pub const DOTPROD: Caps = Caps::bit(18);
  pub const SVE: Caps = Caps::bit(19);
  pub const SVE2: Caps = Caps::bit(20);

  // ─── Combined Capability Masks ───

  /// NEON vector float ready.
  pub const NEON_READY: Caps = NEON;
}

// ─────────────────────────────────────────────────────────────────────────────
// RISC-V Features (bits 32-47)
// ─────────────────────────────────────────────────────────────────────────────

/// RISC-V CPU features.
///
/// Only compile-time detection exists for these on stable toolchains; the
/// bits are defined so a capability mask can still describe RVV hardware.
pub mod riscv {
  use super::Caps;

  /// Vector extension with 32-bit float element support.
  pub const RVV_F32: Caps = Caps::bit(32);
  /// Vector extension with 32-bit integer element support.
  pub const RVV_I32: Caps = Caps::bit(33);
  /// Address bit-manipulation (Zba).
  pub const RVB_ADDR: Caps = Caps::bit(34);
  /// Basic bit-manipulation (Zbb).
  pub const RVB_BASIC: Caps = Caps::bit(35);

  // ─── Combined Capability Masks ───

  /// RVV float kernels ready: vector float plus both bitmanip groups.
  pub const RVV_READY: Caps = Caps(RVV_F32.0 | RVB_ADDR.0 | RVB_BASIC.0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Feature Name Lookup (for diagnostics)
// ─────────────────────────────────────────────────────────────────────────────

/// Feature name entry: (bit_index, name).
type FeatureEntry = (u8, &'static str);

const X86_FEATURES: &[FeatureEntry] = &[
  (0, "sse2"),
  (1, "sse3"),
  (2, "ssse3"),
  (3, "sse4.1"),
  (4, "sse4.2"),
  (5, "avx"),
  (6, "avx2"),
  (7, "fma"),
  (8, "f16c"),
  (9, "avx512f"),
  (10, "avx512bw"),
  (11, "avx512vl"),
];

const AARCH64_FEATURES: &[FeatureEntry] = &[
  (16, "neon"),
  (17, "fp16"),
  (18, "dotprod"),
  (19, "sve"),
  (20, "sve2"),
];

const RISCV_FEATURES: &[FeatureEntry] = &[
  (32, "rvv-f32"),
  (33, "rvv-i32"),
  (34, "rvb-addr"),
  (35, "rvb-basic"),
];

impl Caps {
  /// Iterator over the names of all set feature bits.
  pub fn feature_names(self) -> impl Iterator<Item = &'static str> {
    X86_FEATURES
      .iter()
      .chain(AARCH64_FEATURES.iter())
      .chain(RISCV_FEATURES.iter())
      .filter_map(move |(bit, name)| if self.has_bit(*bit) { Some(*name) } else { None })
  }
}

impl core::fmt::Debug for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    write!(f, "Caps({}", Arch::current())?;

    let mut iter = self.feature_names().peekable();
    if iter.peek().is_none() {
      write!(f, ", none)")
    } else {
      write!(f, ", [")?;
      let mut first = true;
      for name in iter {
        if !first {
          write!(f, ", ")?;
        }
        first = false;
        write!(f, "{name}")?;
      }
      write!(f, "])")
    }
  }
}

impl core::fmt::Display for Caps {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    core::fmt::Debug::fmt(self, f)
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn caps_basic() {
    let empty = Caps::NONE;
    assert!(empty.is_empty());
    assert_eq!(empty.count(), 0);

    let bit0 = Caps::bit(0);
    assert!(!bit0.is_empty());
    assert_eq!(bit0.count(), 1);
    assert!(bit0.has_bit(0));
    assert!(!bit0.has_bit(1));
  }

  #[test]
  fn caps_union_intersection() {
    let a = Caps::bit(0);
    let b = Caps::bit(1);
    let ab = a.union(b);

    assert!(ab.has_bit(0));
    assert!(ab.has_bit(1));
    assert_eq!(ab.count(), 2);

    assert!(ab.has(a));
    assert!(ab.has(b));
    assert!(!a.has(ab));
  }

  #[test]
  fn caps_difference() {
    let ab = x86::AVX | x86::AVX2;
    let a = ab.difference(x86::AVX2);
    assert!(a.has(x86::AVX));
    assert!(!a.has(x86::AVX2));
  }

  #[test]
  fn x86_combined_masks() {
    assert!(x86::FMA_READY.has(x86::FMA));
    assert!(x86::FMA_READY.has(x86::AVX));
    assert!(x86::AVX2_READY.has(x86::AVX2));
  }

  #[test]
  fn riscv_combined_mask() {
    assert!(riscv::RVV_READY.has(riscv::RVV_F32));
    assert!(riscv::RVV_READY.has(riscv::RVB_ADDR));
    assert!(riscv::RVV_READY.has(riscv::RVB_BASIC));
    assert!(!riscv::RVV_READY.has(riscv::RVV_I32));
  }

  #[test]
  fn feature_names() {
    let caps = x86::AVX | aarch64::NEON;
    let names: std::vec::Vec<_> = caps.feature_names().collect();
    assert!(names.contains(&"avx"));
    assert!(names.contains(&"neon"));
    assert!(!names.contains(&"sve"));
  }

  #[test]
  fn debug_impl() {
    let caps = x86::SSE2 | x86::AVX;
    let s = std::format!("{caps:?}");
    assert!(s.contains("sse2"));
    assert!(s.contains("avx"));

    let none = std::format!("{:?}", Caps::NONE);
    assert!(none.contains("none"));
  }

  #[test]
  fn bit_positions_distinct() {
    let all = x86::SSE2
      | x86::SSE3
      | x86::SSSE3
      | x86::SSE41
      | x86::SSE42
      | x86::AVX
      | x86::AVX2
      | x86::FMA
      | x86::F16C
      | x86::AVX512F
      | x86::AVX512BW
      | x86::AVX512VL
      | aarch64::NEON
      | aarch64::FP16
      | aarch64::DOTPROD
      | aarch64::SVE
      | aarch64::SVE2
      | riscv::RVV_F32
      | riscv::RVV_I32
      | riscv::RVB_ADDR
      | riscv::RVB_BASIC;
    assert_eq!(all.count(), 21);
  }
}

#[cfg(all(test, not(miri)))]
mod proptests {
  use proptest::prelude::*;

  use super::*;

  fn arb_caps() -> impl Strategy<Value = Caps> {
    any::<u64>().prop_map(Caps::from_raw)
  }

  proptest! {
    #[test]
    fn union_commutative(a in arb_caps(), b in arb_caps()) {
      prop_assert_eq!(a | b, b | a);
    }

    #[test]
    fn union_identity(a in arb_caps()) {
      prop_assert_eq!(a | Caps::NONE, a);
    }

    #[test]
    fn self_containment(caps in arb_caps()) {
      prop_assert!(caps.has(caps));
    }

    #[test]
    fn union_superset(a in arb_caps(), b in arb_caps()) {
      let union = a | b;
      prop_assert!(union.has(a));
      prop_assert!(union.has(b));
    }

    #[test]
    fn intersection_subset(a in arb_caps(), b in arb_caps()) {
      let intersection = a & b;
      prop_assert!(a.has(intersection));
      prop_assert!(b.has(intersection));
    }

    #[test]
    fn difference_removes(a in arb_caps(), b in arb_caps()) {
      let d = a.difference(b);
      prop_assert!(a.has(d));
      prop_assert!(d.intersection(b).is_empty());
    }

    #[test]
    fn count_accuracy(caps in arb_caps()) {
      prop_assert_eq!(caps.count(), caps.as_raw().count_ones());
    }

    #[test]
    fn is_empty_consistency(caps in arb_caps()) {
      prop_assert_eq!(caps.is_empty(), caps.count() == 0);
    }
  }
}
