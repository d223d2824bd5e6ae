//! Domain models for the subnet calculator.
//!
//! - [`Octets`] - dotted-decimal IPv4 address or subnet mask
//! - [`SubnetReport`] - everything derived from one address/mask pair

mod ipv4;
mod report;

// Re-export public types
pub use ipv4::{parse_octets, validate_address, Octets, MAX_LENGTH, OCTET_COUNT};
pub use report::{
    AddressClass, AddressType, BitSegments, SubnetReport, UsableRange, NO_USABLE_RANGE,
};
