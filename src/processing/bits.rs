//! Network/subnet/host split of the address bits.

use crate::models::{AddressClass, BitSegments, Octets, MAX_LENGTH};
use itertools::Itertools;
use std::fmt;
use std::str::FromStr;

use crate::error::SubnetError;

/// How the network portion of the bit split is sized.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum BitSplit {
    /// Network bits from the address class (8/16/24), subnet bits are the
    /// rest of the mask's 1-bits. A mask shorter than the class boundary
    /// gets no subnet portion.
    #[default]
    Classful,
    /// Network bits are the class bits cut down to the prefix, so the
    /// network and subnet portions never extend past the mask.
    Prefix,
}

impl FromStr for BitSplit {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<BitSplit, SubnetError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classful" => Ok(BitSplit::Classful),
            "prefix" | "cidr" => Ok(BitSplit::Prefix),
            other => Err(SubnetError::Config(format!(
                "unknown bit split {other:?}, expected classful or prefix"
            ))),
        }
    }
}

impl fmt::Display for BitSplit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BitSplit::Classful => f.write_str("classful"),
            BitSplit::Prefix => f.write_str("prefix"),
        }
    }
}

/// Cut the 32 address bits into network, subnet and host portions.
///
/// Portion sizes come from the class and the count of 1-bits in the mask,
/// never from the positions of those bits.
pub fn bit_segments(ip: Octets, mask: Octets, class: AddressClass, split: BitSplit) -> BitSegments {
    let bits = format!("{:032b}", ip.to_u32());
    let ones = mask.count_ones();
    let class_bits = class.network_bits();

    let (network_bits, subnet_bits) = match split {
        BitSplit::Classful => {
            if ones < class_bits {
                log::debug!(
                    "mask /{ones} is shorter than class {class} boundary /{class_bits}, no subnet bits"
                );
            }
            (class_bits, ones.saturating_sub(class_bits))
        }
        BitSplit::Prefix => {
            let network = class_bits.min(ones);
            (network, ones - network)
        }
    };
    debug_assert!(network_bits + subnet_bits <= MAX_LENGTH);

    let n = usize::from(network_bits);
    let s = n + usize::from(subnet_bits);
    BitSegments {
        network: bits[..n].to_string(),
        subnet: bits[n..s].to_string(),
        host: bits[s..].to_string(),
    }
}

/// Split `bits` into blocks of `size` characters joined by single spaces.
///
/// # Examples
/// ```
/// use subnet_calculator::processing::format_in_blocks;
/// assert_eq!(format_in_blocks("1100000010101000", 8), "11000000 10101000");
/// ```
pub fn format_in_blocks(bits: &str, size: usize) -> String {
    if size == 0 {
        return bits.to_string();
    }
    bits.chars()
        .chunks(size)
        .into_iter()
        .map(|block| block.collect::<String>())
        .join(" ")
}
