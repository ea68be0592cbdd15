//! Prefix length and subnet mask conversion.
//!
//! A [`PrefixLength`] is validated once at construction; every conversion on
//! it afterwards is total. The mask form is the plain `u32` bit pattern.

use crate::error::SubnetError;
use serde::{Serialize, Serializer};
use std::fmt;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Count of leading 1-bits in a subnet mask, in [0, 32].
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PrefixLength(u8);

impl PrefixLength {
    /// Build a prefix length, rejecting values above [`MAX_LENGTH`].
    pub fn new(len: u8) -> Result<PrefixLength, SubnetError> {
        if len > MAX_LENGTH {
            Err(SubnetError::Range(format!(
                "prefix length {len} exceeds /{MAX_LENGTH}"
            )))
        } else {
            Ok(PrefixLength(len))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// The mask as a `u32` bit pattern.
    ///
    /// Shifting through a u64 keeps /0 in range: a plain `u32 << 32` would
    /// overflow.
    pub fn to_mask(self) -> u32 {
        let right_len = MAX_LENGTH - self.0;
        let all_bits = u32::MAX as u64;
        ((all_bits >> right_len) << right_len) as u32
    }

    /// Recover the prefix length from a mask by counting 1-bits.
    ///
    /// Precondition: `mask` is contiguous (see [`is_contiguous`]). A
    /// non-contiguous mask still yields a bit count, but the result is
    /// meaningless; callers validate first.
    pub fn from_mask(mask: u32) -> PrefixLength {
        PrefixLength(mask.count_ones() as u8)
    }
}

impl fmt::Display for PrefixLength {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "/{}", self.0)
    }
}

impl Serialize for PrefixLength {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(self.0)
    }
}

/// True iff the mask's binary expansion is a run of 1s followed by a run of
/// 0s (either run possibly empty). `255.255.0.255` fails this.
pub fn is_contiguous(mask: u32) -> bool {
    mask.leading_ones() + mask.trailing_zeros() == 32
}
