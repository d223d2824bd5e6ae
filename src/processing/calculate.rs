//! Full report for one address/mask pair.

use super::address::{
    address_class, address_type, broadcast_address, mask_to_cidr, network_address,
    to_binary_string, total_hosts, usable_hosts, usable_range, wildcard_mask,
};
use super::bits::{bit_segments, BitSplit};
use crate::error::SubnetError;
use crate::models::{parse_octets, validate_address, SubnetReport};
use std::fmt;
use std::str::FromStr;

/// What to do with a mask whose 1-bits are not contiguous.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum MaskPolicy {
    /// Log a warning and compute the report anyway.
    #[default]
    Permit,
    /// Fail with [`SubnetError::NonContiguousMask`].
    Reject,
}

impl FromStr for MaskPolicy {
    type Err = SubnetError;

    fn from_str(s: &str) -> Result<MaskPolicy, SubnetError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permit" => Ok(MaskPolicy::Permit),
            "reject" => Ok(MaskPolicy::Reject),
            other => Err(SubnetError::Config(format!(
                "unknown mask policy {other:?}, expected permit or reject"
            ))),
        }
    }
}

impl fmt::Display for MaskPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MaskPolicy::Permit => f.write_str("permit"),
            MaskPolicy::Reject => f.write_str("reject"),
        }
    }
}

/// Knobs for [`calculate_with`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct CalcOptions {
    pub mask_policy: MaskPolicy,
    pub bit_split: BitSplit,
}

/// Compute a report with default options.
///
/// # Examples
/// ```
/// let report = subnet_calculator::calculate("192.168.1.10", "255.255.255.0").unwrap();
/// assert_eq!(report.cidr, 24);
/// assert_eq!(report.network.to_string(), "192.168.1.0");
/// ```
pub fn calculate(ip: &str, mask: &str) -> Result<SubnetReport, SubnetError> {
    calculate_with(ip, mask, &CalcOptions::default())
}

/// Validate `ip`, parse both inputs and derive every report field.
///
/// Fails before any arithmetic if the address is invalid.
pub fn calculate_with(
    ip: &str,
    mask: &str,
    options: &CalcOptions,
) -> Result<SubnetReport, SubnetError> {
    log::debug!("calculate({ip}, {mask}) options={options:?}");

    if !validate_address(ip) {
        log::debug!("rejecting invalid IP address {ip:?}");
        return Err(SubnetError::InvalidAddressFormat(ip.trim().to_string()));
    }
    let address = parse_octets(ip)?;
    let mask = parse_octets(mask).map_err(|_| {
        log::debug!("rejecting invalid subnet mask {mask:?}");
        SubnetError::InvalidMaskFormat(mask.trim().to_string())
    })?;

    let contiguous_mask = mask.is_contiguous_mask();
    if !contiguous_mask {
        match options.mask_policy {
            MaskPolicy::Permit => log::warn!(
                "subnet mask {mask} is not contiguous, results do not describe a real subnet"
            ),
            MaskPolicy::Reject => {
                return Err(SubnetError::NonContiguousMask(mask.to_string()));
            }
        }
    }

    let network = network_address(address, mask);
    let broadcast = broadcast_address(address, mask);
    let cidr = mask_to_cidr(mask);
    let class = address_class(address.first());

    let report = SubnetReport {
        address,
        mask,
        cidr,
        network,
        broadcast,
        usable_range: usable_range(network, broadcast),
        total_hosts: total_hosts(cidr),
        usable_hosts: usable_hosts(cidr),
        address_binary: to_binary_string(address),
        mask_binary: to_binary_string(mask),
        class,
        wildcard: wildcard_mask(mask),
        address_type: address_type(address),
        contiguous_mask,
        bits: bit_segments(address, mask, class, options.bit_split),
    };
    log::info!("{address}/{cidr} network={network} broadcast={broadcast}");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{run_pair, RunSummary};
    use crate::models::{AddressClass, AddressType, Octets, UsableRange};
    use crate::output::JsonSink;
    use log::{Level, LevelFilter, Log, Metadata, Record};
    use std::cell::RefCell;

    thread_local! {
        static LEVELS: RefCell<Vec<Level>> = const { RefCell::new(Vec::new()) };
    }

    /// Records log levels per test thread.
    struct LevelCapture;

    impl Log for LevelCapture {
        fn enabled(&self, _: &Metadata) -> bool {
            true
        }

        fn log(&self, record: &Record) {
            LEVELS.with(|l| l.borrow_mut().push(record.level()));
        }

        fn flush(&self) {}
    }

    static CAPTURE: LevelCapture = LevelCapture;

    /// Number of warn/error records logged on this thread while `f` runs.
    fn warnings_during(f: impl FnOnce()) -> usize {
        // another test may have installed it already
        let _ = log::set_logger(&CAPTURE);
        log::set_max_level(LevelFilter::Trace);
        LEVELS.with(|l| l.borrow_mut().clear());
        f();
        LEVELS.with(|l| l.borrow().iter().filter(|lv| **lv <= Level::Warn).count())
    }

    #[test]
    fn test_scenario_private_slash24() {
        let r = calculate("192.168.1.10", "255.255.255.0").unwrap();
        assert_eq!(r.cidr, 24);
        assert_eq!(r.network.to_string(), "192.168.1.0");
        assert_eq!(r.broadcast.to_string(), "192.168.1.255");
        assert_eq!(r.usable_range.to_string(), "192.168.1.1 - 192.168.1.254");
        assert_eq!(r.total_hosts, 256);
        assert_eq!(r.usable_hosts, 254);
        assert_eq!(r.class, AddressClass::C);
        assert_eq!(r.wildcard.to_string(), "0.0.0.255");
        assert_eq!(r.address_type, AddressType::Private);
        assert_eq!(r.mask_binary, "11111111.11111111.11111111.00000000");
        assert!(r.contiguous_mask);
    }

    #[test]
    fn test_scenario_public_slash32() {
        let r = calculate("8.8.8.8", "255.255.255.255").unwrap();
        assert_eq!(r.cidr, 32);
        assert_eq!(r.network, Octets::new(8, 8, 8, 8));
        assert_eq!(r.broadcast, r.network);
        assert_eq!(r.usable_range, UsableRange::None);
        assert_eq!(r.total_hosts, 1);
        assert_eq!(r.usable_hosts, 0);
        assert_eq!(r.class, AddressClass::A);
        assert_eq!(r.address_type, AddressType::Public);
    }

    #[test]
    fn test_scenario_private_slash12() {
        let r = calculate("172.16.5.5", "255.240.0.0").unwrap();
        assert_eq!(r.cidr, 12);
        assert_eq!(r.class, AddressClass::B);
        assert_eq!(r.address_type, AddressType::Private);
        assert_eq!(r.wildcard.to_string(), "0.15.255.255");
        // class B split: 16 network bits, mask ends before that
        assert_eq!(r.bits.network.len(), 16);
        assert_eq!(r.bits.subnet, "");
    }

    #[test]
    fn test_slash31() {
        let r = calculate("10.0.0.4", "255.255.255.254").unwrap();
        assert_eq!(r.usable_hosts, 0);
        assert!(r.usable_range.is_none());
    }

    #[test]
    fn test_invalid_address_stops_calculation() {
        let err = calculate("999.1.1.1", "255.255.255.0").unwrap_err();
        assert!(matches!(err, SubnetError::InvalidAddressFormat(ref s) if s == "999.1.1.1"));
        // invalid address wins over an invalid mask
        let err = calculate("1.2.3", "garbage").unwrap_err();
        assert!(matches!(err, SubnetError::InvalidAddressFormat(_)));
    }

    #[test]
    fn test_invalid_input_warns_once() {
        let warnings = warnings_during(|| {
            assert!(calculate("999.1.1.1", "255.255.255.0").is_err());
            assert!(calculate("10.0.0.1", "255.255").is_err());
        });
        assert_eq!(warnings, 0);

        let mut sink = JsonSink::new(Vec::new());
        let mut errors = Vec::new();
        let mut summary = RunSummary::default();
        let warnings = warnings_during(|| {
            run_pair(
                "999.1.1.1",
                "255.255.255.0",
                &CalcOptions::default(),
                &mut sink,
                &mut errors,
                &mut summary,
            )
            .unwrap();
        });
        assert_eq!(warnings, 1);
        assert_eq!(summary.failed, 1);
    }

    #[test]
    fn test_unparseable_mask() {
        let err = calculate("10.0.0.1", "255.255.0").unwrap_err();
        assert!(matches!(err, SubnetError::InvalidMaskFormat(ref s) if s == "255.255.0"));
        let err = calculate("10.0.0.1", "255.255.256.0").unwrap_err();
        assert!(matches!(err, SubnetError::InvalidMaskFormat(_)));
    }

    #[test]
    fn test_non_contiguous_mask_permitted() {
        let r = calculate("10.1.2.3", "255.0.255.0").unwrap();
        assert!(!r.contiguous_mask);
        // popcount prefix, not a real boundary
        assert_eq!(r.cidr, 16);
        assert_eq!(r.network.to_string(), "10.0.2.0");
        assert_eq!(r.broadcast.to_string(), "10.255.2.255");
        assert_eq!(r.total_hosts, 65536);
        assert_eq!(r.usable_hosts, 65534);
        assert_eq!(r.wildcard.to_string(), "0.255.0.255");
        assert_eq!(r.usable_range.to_string(), "10.0.2.1 - 10.255.2.254");
    }

    #[test]
    fn test_non_contiguous_mask_rejected() {
        let options = CalcOptions {
            mask_policy: MaskPolicy::Reject,
            ..Default::default()
        };
        let err = calculate_with("10.1.2.3", "255.0.255.0", &options).unwrap_err();
        assert!(matches!(err, SubnetError::NonContiguousMask(ref m) if m == "255.0.255.0"));
        assert!(calculate_with("10.1.2.3", "255.255.0.0", &options).is_ok());
    }

    #[test]
    fn test_bit_split_option() {
        let options = CalcOptions {
            bit_split: BitSplit::Prefix,
            ..Default::default()
        };
        let r = calculate_with("172.16.5.5", "255.240.0.0", &options).unwrap();
        assert_eq!(r.bits.network.len(), 12);
        assert_eq!(r.bits.host.len(), 20);
    }

    #[test]
    fn test_mask_policy_from_str() {
        assert_eq!("Permit".parse::<MaskPolicy>().unwrap(), MaskPolicy::Permit);
        assert_eq!("reject".parse::<MaskPolicy>().unwrap(), MaskPolicy::Reject);
        assert!("maybe".parse::<MaskPolicy>().is_err());
    }
}
