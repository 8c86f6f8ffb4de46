// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! CAN port selection.
//!
//! The board exposes two CAN controllers on fixed header pins. Exactly one of them is chosen per
//! build with the `can-port-0` / `can-port-1` Cargo features:
//!
//! | Selector | RX  | TX  | Controller |
//! | -------- | --- | --- | ---------- |
//! | 0        | p9  | p10 | CAN1       |
//! | 1        | p30 | p29 | CAN2       |

use crate::error::ConfigError;
use crate::hw::pins::{Pin, P10, P29, P30, P9};
use crate::hw::registers::PeripheralBase;

/// Physical CAN controller instance the firmware binds to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanPort {
    /// p9/p10 on CAN1
    Port0,
    /// p30/p29 on CAN2
    Port1,
}

/// Pins and register block implied by a [`CanPort`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortBinding {
    pub rx: Pin,
    pub tx: Pin,
    pub base: PeripheralBase,
}

/// Port chosen by the enabled Cargo features.
///
/// The firmware binary matches on this in a `const` so a missing or conflicting selector stops
/// the build.
pub const CONFIGURED: Result<CanPort, ConfigError> = CanPort::from_features(
    cfg!(feature = "can-port-0"),
    cfg!(feature = "can-port-1"),
);

impl CanPort {
    pub const ALL: [CanPort; 2] = [CanPort::Port0, CanPort::Port1];

    /// Resolve a numeric selector. Anything other than 0 or 1 is rejected.
    pub const fn from_selector(selector: Option<u8>) -> Result<CanPort, ConfigError> {
        match selector {
            None => Err(ConfigError::MissingSelector),
            Some(0) => Ok(CanPort::Port0),
            Some(1) => Ok(CanPort::Port1),
            Some(other) => Err(ConfigError::InvalidSelector(other)),
        }
    }

    /// Resolve from the two port feature flags.
    pub const fn from_features(port0: bool, port1: bool) -> Result<CanPort, ConfigError> {
        match (port0, port1) {
            (true, false) => Ok(CanPort::Port0),
            (false, true) => Ok(CanPort::Port1),
            (false, false) => Err(ConfigError::MissingSelector),
            (true, true) => Err(ConfigError::ConflictingSelectors),
        }
    }

    /// Numeric selector for this port.
    #[inline]
    pub const fn selector(self) -> u8 {
        match self {
            CanPort::Port0 => 0,
            CanPort::Port1 => 1,
        }
    }

    pub const fn binding(self) -> PortBinding {
        match self {
            CanPort::Port0 => PortBinding {
                rx: P9,
                tx: P10,
                base: PeripheralBase::Can1,
            },
            CanPort::Port1 => PortBinding {
                rx: P30,
                tx: P29,
                base: PeripheralBase::Can2,
            },
        }
    }
}

impl TryFrom<u8> for CanPort {
    type Error = ConfigError;

    fn try_from(selector: u8) -> Result<Self, Self::Error> {
        CanPort::from_selector(Some(selector))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port0_binds_p9_p10_to_can1() {
        let b = CanPort::Port0.binding();
        assert_eq!(b.rx.header, 9);
        assert_eq!(b.tx.header, 10);
        assert_eq!(b.base, PeripheralBase::Can1);
    }

    #[test]
    fn port1_binds_p30_p29_to_can2() {
        let b = CanPort::Port1.binding();
        assert_eq!(b.rx.header, 30);
        assert_eq!(b.tx.header, 29);
        assert_eq!(b.base, PeripheralBase::Can2);
    }

    #[test]
    fn bindings_are_disjoint() {
        let a = CanPort::Port0.binding();
        let b = CanPort::Port1.binding();
        for pa in [a.rx, a.tx] {
            for pb in [b.rx, b.tx] {
                assert_ne!(pa, pb);
                assert_ne!((pa.port, pa.bit), (pb.port, pb.bit));
            }
        }
        assert_ne!(a.base, b.base);
    }

    #[test]
    fn selector_round_trips_for_legal_values() {
        for port in CanPort::ALL {
            assert_eq!(CanPort::from_selector(Some(port.selector())), Ok(port));
        }
    }

    #[test]
    fn missing_selector_is_an_error() {
        assert_eq!(CanPort::from_selector(None), Err(ConfigError::MissingSelector));
        assert_eq!(
            CanPort::from_features(false, false),
            Err(ConfigError::MissingSelector)
        );
    }

    // A non-zero selector other than 1 does not fall through to port 1.
    #[test]
    fn out_of_range_selector_is_rejected() {
        assert_eq!(
            CanPort::from_selector(Some(2)),
            Err(ConfigError::InvalidSelector(2))
        );
        assert_eq!(
            CanPort::try_from(0xFF),
            Err(ConfigError::InvalidSelector(0xFF))
        );
    }

    #[test]
    fn both_features_conflict() {
        assert_eq!(
            CanPort::from_features(true, true),
            Err(ConfigError::ConflictingSelectors)
        );
        assert_eq!(CanPort::from_features(false, true), Ok(CanPort::Port1));
    }

    #[cfg(all(feature = "can-port-0", not(feature = "can-port-1")))]
    #[test]
    fn default_features_select_port0() {
        assert_eq!(CONFIGURED, Ok(CanPort::Port0));
    }
}
