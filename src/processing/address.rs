//! Per-address subnet arithmetic.
//!
//! Every function here is pure and works on already parsed [`Octets`].

use crate::models::{AddressClass, AddressType, Octets, UsableRange};
use itertools::Itertools;

/// RFC 1918 blocks as inclusive per-octet bounds.
///
/// Checked octet by octet, which only matches real prefix containment because
/// each block has independent per-octet bounds.
const PRIVATE_RANGES: [(Octets, Octets); 3] = [
    (Octets::new(10, 0, 0, 0), Octets::new(10, 255, 255, 255)),
    (Octets::new(172, 16, 0, 0), Octets::new(172, 31, 255, 255)),
    (Octets::new(192, 168, 0, 0), Octets::new(192, 168, 255, 255)),
];

/// Bitwise AND of address and mask, octet by octet.
pub fn network_address(ip: Octets, mask: Octets) -> Octets {
    ip.zip_with(mask, |i, m| i & m)
}

/// Address with every host bit set: `ip | (255 - mask)` per octet.
pub fn broadcast_address(ip: Octets, mask: Octets) -> Octets {
    ip.zip_with(mask, |i, m| i | !m)
}

/// Prefix length as the total count of 1-bits in the mask.
///
/// Bit order is ignored, so a non-contiguous mask still gets a count.
///
/// # Examples
/// ```
/// use subnet_calculator::models::Octets;
/// use subnet_calculator::processing::mask_to_cidr;
/// assert_eq!(mask_to_cidr(Octets::new(255, 255, 255, 0)), 24);
/// ```
pub fn mask_to_cidr(mask: Octets) -> u8 {
    mask.count_ones()
}

/// Four zero-padded 8-bit groups joined by `.`.
pub fn to_binary_string(octets: Octets) -> String {
    octets.0.iter().map(|o| format!("{o:08b}")).join(".")
}

/// Classful address class of the first octet.
///
/// 0 and 127 fall through to E; loopback is not special-cased.
pub fn address_class(first_octet: u8) -> AddressClass {
    match first_octet {
        1..=126 => AddressClass::A,
        128..=191 => AddressClass::B,
        192..=223 => AddressClass::C,
        224..=239 => AddressClass::D,
        _ => AddressClass::E,
    }
}

/// Bitwise complement of the mask, `255 - octet` per position.
pub fn wildcard_mask(mask: Octets) -> Octets {
    Octets(mask.0.map(|m| 255 - m))
}

/// Private if the address lies inside one of the RFC 1918 blocks.
pub fn address_type(ip: Octets) -> AddressType {
    let in_range = |(start, end): &(Octets, Octets)| {
        (0..4).all(|i| ip.0[i] >= start.0[i] && ip.0[i] <= end.0[i])
    };
    match PRIVATE_RANGES.iter().find(|r| in_range(*r)) {
        Some((start, _)) => {
            log::trace!("{ip} is inside private block {start}");
            AddressType::Private
        }
        None => AddressType::Public,
    }
}

/// Addresses strictly between network and broadcast.
///
/// The ±1 is done on the full 32-bit value so it carries across octets.
/// Returns [`UsableRange::None`] once first usable is not below last usable
/// (/31, /32 and some non-contiguous masks).
pub fn usable_range(network: Octets, broadcast: Octets) -> UsableRange {
    let first = network.to_u32().checked_add(1);
    let last = broadcast.to_u32().checked_sub(1);
    match (first, last) {
        (Some(first), Some(last)) if first < last => UsableRange::Range {
            first: Octets::from_u32(first),
            last: Octets::from_u32(last),
        },
        _ => UsableRange::None,
    }
}

/// `2^(32 - cidr)` addresses in the subnet.
pub fn total_hosts(cidr: u8) -> u64 {
    1u64 << (32 - u32::from(cidr.min(32)))
}

/// Total hosts minus network and broadcast, floored at 0.
pub fn usable_hosts(cidr: u8) -> u64 {
    total_hosts(cidr).saturating_sub(2)
}
