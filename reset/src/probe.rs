//! Probe a syscon reset controller from its device node.
//!
//! The node is a child of the syscon whose registers it drives. Locating the
//! node and mapping the parent syscon are the platform's job; probe only
//! checks the node and decodes its reset description.

use syscon_regmap::Regmap;

use crate::controller::SysconReset;
use crate::error::{ResetError, Result};

/// Compatible string of syscon reset controller nodes.
pub const COMPATIBLE: &str = "ti,syscon-reset";

/// Property holding the reset description.
pub const RESET_BITS_PROPERTY: &str = "ti,reset-bits";

/// Accessor for a device-tree node, provided by the platform.
pub trait DeviceNode {
    /// Whether the node lists `compatible` in its compatible property.
    fn is_compatible(&self, compatible: &str) -> bool;

    /// Raw bytes of property `name`, if present.
    fn property(&self, name: &str) -> Option<&[u8]>;
}

/// Probe configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProbeConfig {
    /// Compatible string the node must carry.
    pub compatible: &'static str,
    /// Property holding the reset description.
    pub reset_bits_property: &'static str,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            compatible: COMPATIBLE,
            reset_bits_property: RESET_BITS_PROPERTY,
        }
    }
}

/// Build a controller for `node` over the parent syscon's `regmap`.
pub fn probe<N, R>(node: &N, regmap: R, config: &ProbeConfig) -> Result<SysconReset<R>>
where
    N: DeviceNode + ?Sized,
    R: Regmap,
{
    if !node.is_compatible(config.compatible) {
        log::debug!("ti-syscon reset: node is not {}", config.compatible);
        return Err(ResetError::NotCompatible);
    }

    let reset_bits = match node.property(config.reset_bits_property) {
        Some(bits) => bits,
        None => {
            log::warn!("ti-syscon reset: missing {} property", config.reset_bits_property);
            return Err(ResetError::MalformedDescription);
        }
    };

    SysconReset::new(regmap, reset_bits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flags::*;
    use std::vec::Vec;
    use syscon_regmap::RamRegmap;

    struct Node {
        compatible: &'static str,
        reset_bits: Option<Vec<u8>>,
    }

    impl DeviceNode for Node {
        fn is_compatible(&self, compatible: &str) -> bool {
            self.compatible == compatible
        }

        fn property(&self, name: &str) -> Option<&[u8]> {
            if name == RESET_BITS_PROPERTY {
                self.reset_bits.as_deref()
            } else {
                None
            }
        }
    }

    fn reset_bits(words: &[u32]) -> Option<Vec<u8>> {
        Some(words.iter().flat_map(|w| w.to_be_bytes()).collect())
    }

    #[test]
    fn test_probe_compatible_node() {
        let ram = RamRegmap::<8>::new();
        let node = Node {
            compatible: COMPATIBLE,
            reset_bits: reset_bits(&[0x10, 2, 0x10, 2, 0x14, 0, ASSERT_SET | STATUS_SET]),
        };

        let rst = probe(&node, &ram, &ProbeConfig::default()).unwrap();
        assert_eq!(rst.len(), 1);
        rst.assert(0).unwrap();
        assert_eq!(ram.read(0x10), Ok(0x4));
    }

    #[test]
    fn test_probe_rejects_other_nodes() {
        let ram = RamRegmap::<1>::new();
        let node = Node {
            compatible: "vendor,other-reset",
            reset_bits: reset_bits(&[0; 7]),
        };

        assert!(matches!(
            probe(&node, &ram, &ProbeConfig::default()),
            Err(ResetError::NotCompatible)
        ));
    }

    #[test]
    fn test_probe_missing_or_bad_description() {
        let ram = RamRegmap::<1>::new();
        let missing = Node {
            compatible: COMPATIBLE,
            reset_bits: None,
        };
        let short = Node {
            compatible: COMPATIBLE,
            reset_bits: reset_bits(&[0; 8]),
        };

        assert!(matches!(
            probe(&missing, &ram, &ProbeConfig::default()),
            Err(ResetError::MalformedDescription)
        ));
        assert!(matches!(
            probe(&short, &ram, &ProbeConfig::default()),
            Err(ResetError::MalformedDescription)
        ));
    }

    #[test]
    fn test_probe_custom_config() {
        let ram = RamRegmap::<1>::new();
        let node = Node {
            compatible: "acme,syscon-reset",
            reset_bits: reset_bits(&[0; 7]),
        };
        let config = ProbeConfig {
            compatible: "acme,syscon-reset",
            ..ProbeConfig::default()
        };

        assert_eq!(probe(&node, &ram, &config).map(|rst| rst.len()), Ok(1));
    }
}
