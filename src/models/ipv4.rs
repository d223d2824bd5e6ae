//! Dotted-decimal IPv4 addresses and subnet masks.
//!
//! Provides [`Octets`] for representing both addresses and masks, along with
//! the validation gate used before any subnet calculation runs.

use crate::error::SubnetError;
use itertools::Itertools;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Number of bits in an IPv4 address or mask.
pub const MAX_LENGTH: u8 = 32;

/// Number of dot-separated segments in a dotted-decimal address.
pub const OCTET_COUNT: usize = 4;

/// One to three ASCII digits, nothing else.
static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_segment_regex() -> &'static Regex {
    SEGMENT_REGEX.get_or_init(|| Regex::new(r"^[0-9]{1,3}$").expect("Invalid Regex"))
}

/// Parse one decimal segment into an octet, `None` if it is not 0-255.
fn parse_segment(segment: &str) -> Option<u8> {
    if !get_segment_regex().is_match(segment) {
        log::trace!("segment {segment:?} is not decimal");
        return None;
    }
    segment.parse::<u8>().ok()
}

/// Check that `s` holds exactly four `.`-separated base-10 integers in 0-255.
///
/// # Examples
/// ```
/// use subnet_calculator::models::validate_address;
/// assert!(validate_address("192.168.1.10"));
/// assert!(!validate_address("999.1.1.1"));
/// ```
pub fn validate_address(s: &str) -> bool {
    let parts: Vec<&str> = s.trim().split('.').collect();
    parts.len() == OCTET_COUNT && parts.iter().all(|p| parse_segment(p).is_some())
}

/// Parse a dotted-decimal string into [`Octets`].
///
/// The error names the input; callers map it to the address or mask variant.
pub fn parse_octets(s: &str) -> Result<Octets, SubnetError> {
    s.parse()
}

/// Four octets of an IPv4 address or subnet mask, most significant first.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Copy, Clone, Hash, Default)]
pub struct Octets(pub [u8; 4]);

impl Octets {
    pub const fn new(a: u8, b: u8, c: u8, d: u8) -> Octets {
        Octets([a, b, c, d])
    }

    /// The address as a single 32-bit value.
    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    pub fn from_u32(bits: u32) -> Octets {
        Octets(bits.to_be_bytes())
    }

    /// First (most significant) octet, used for classful lookups.
    pub fn first(&self) -> u8 {
        self.0[0]
    }

    /// Total number of 1-bits across all four octets.
    pub fn count_ones(&self) -> u8 {
        self.0.iter().map(|o| o.count_ones() as u8).sum()
    }

    /// True if the bits are a run of ones followed only by zeros.
    pub fn is_contiguous_mask(&self) -> bool {
        let bits = self.to_u32();
        bits.leading_ones() + bits.trailing_zeros() >= u32::from(MAX_LENGTH)
    }

    /// Apply `f` to each pair of octets.
    pub fn zip_with(self, other: Octets, f: impl Fn(u8, u8) -> u8) -> Octets {
        let mut out = [0u8; 4];
        for (i, o) in out.iter_mut().enumerate() {
            *o = f(self.0[i], other.0[i]);
        }
        Octets(out)
    }
}

impl FromStr for Octets {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<Octets, SubnetError> {
        let s = s.trim();
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != OCTET_COUNT {
            return Err(SubnetError::InvalidAddressFormat(s.to_string()));
        }
        let mut octets = [0u8; 4];
        for (o, part) in octets.iter_mut().zip(parts) {
            *o = parse_segment(part)
                .ok_or_else(|| SubnetError::InvalidAddressFormat(s.to_string()))?;
        }
        Ok(Octets(octets))
    }
}

impl From<Ipv4Addr> for Octets {
    fn from(addr: Ipv4Addr) -> Octets {
        Octets(addr.octets())
    }
}

impl From<Octets> for Ipv4Addr {
    fn from(octets: Octets) -> Ipv4Addr {
        Ipv4Addr::from(octets.0)
    }
}

impl fmt::Display for Octets {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.iter().join("."))
    }
}

impl Serialize for Octets {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
