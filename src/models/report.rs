//! Subnet report data model.

use super::Octets;
use serde::{Serialize, Serializer};
use std::fmt;

/// Text shown when a subnet has no assignable host addresses.
pub const NO_USABLE_RANGE: &str = "None (subnet too small)";

/// Legacy classful address class, decided by the first octet only.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressClass {
    A,
    B,
    C,
    D,
    E,
}

impl AddressClass {
    /// Network bits of the classful scheme: 8/16/24, none for D and E.
    pub fn network_bits(&self) -> u8 {
        match self {
            AddressClass::A => 8,
            AddressClass::B => 16,
            AddressClass::C => 24,
            AddressClass::D | AddressClass::E => 0,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
        };
        f.write_str(c)
    }
}

/// Public/private classification against the RFC 1918 blocks.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AddressType {
    Private,
    Public,
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AddressType::Private => f.write_str("Private"),
            AddressType::Public => f.write_str("Public"),
        }
    }
}

/// First and last assignable host addresses, or nothing for tiny subnets.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UsableRange {
    Range { first: Octets, last: Octets },
    None,
}

impl UsableRange {
    pub fn is_none(&self) -> bool {
        matches!(self, UsableRange::None)
    }
}

impl fmt::Display for UsableRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UsableRange::Range { first, last } => write!(f, "{first} - {last}"),
            UsableRange::None => f.write_str(NO_USABLE_RANGE),
        }
    }
}

impl Serialize for UsableRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// The address in binary, cut into network, subnet and host portions.
///
/// Each portion is a run of `0`/`1` characters without separators; use
/// [`crate::processing::format_in_blocks`] for display.
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct BitSegments {
    pub network: String,
    pub subnet: String,
    pub host: String,
}

impl BitSegments {
    pub fn len(&self) -> usize {
        self.network.len() + self.subnet.len() + self.host.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything derived from one address/mask pair.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetReport {
    /// The address as entered (after parsing).
    pub address: Octets,
    /// The mask as entered (after parsing).
    pub mask: Octets,
    /// Count of 1-bits in the mask.
    pub cidr: u8,
    pub network: Octets,
    pub broadcast: Octets,
    pub usable_range: UsableRange,
    /// `2^(32 - cidr)`, up to 2^32.
    pub total_hosts: u64,
    /// `total_hosts - 2`, floored at 0.
    pub usable_hosts: u64,
    pub address_binary: String,
    pub mask_binary: String,
    pub class: AddressClass,
    pub wildcard: Octets,
    pub address_type: AddressType,
    /// False when the mask bits are not a single run of ones.
    pub contiguous_mask: bool,
    pub bits: BitSegments,
}
