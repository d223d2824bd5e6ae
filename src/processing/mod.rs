//! Subnet calculation logic.
//!
//! - [`address`] - per-address arithmetic (network, broadcast, class, ...)
//! - [`bits`] - network/subnet/host split of the address bits
//! - [`calculate`] - full [`crate::models::SubnetReport`] for one input pair

mod address;
mod bits;
mod calculate;

// Re-export public functions
pub use address::{
    address_class, address_type, broadcast_address, mask_to_cidr, network_address,
    to_binary_string, total_hosts, usable_hosts, usable_range, wildcard_mask,
};
pub use bits::{bit_segments, format_in_blocks, BitSplit};
pub use calculate::{calculate, calculate_with, CalcOptions, MaskPolicy};
