// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Configuration error types.

use core::fmt;

/// Errors raised while resolving which CAN controller the firmware binds to.
///
/// These only ever surface at build or init time. Status predicates never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// No CAN port selector was supplied.
    MissingSelector,
    /// Both `can-port-0` and `can-port-1` are enabled.
    ConflictingSelectors,
    /// Selector value is neither 0 nor 1.
    InvalidSelector(u8),
}

impl ConfigError {
    /// Static diagnostic, usable from `const` contexts.
    pub const fn message(&self) -> &'static str {
        match self {
            ConfigError::MissingSelector => {
                "missing CAN port selector: enable feature `can-port-0` or `can-port-1`"
            }
            ConfigError::ConflictingSelectors => {
                "conflicting CAN port selectors: `can-port-0` and `can-port-1` are both enabled"
            }
            ConfigError::InvalidSelector(_) => "invalid CAN port selector: must be 0 or 1",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSelector(value) => {
                write!(f, "invalid CAN port selector {}: must be 0 or 1", value)
            }
            other => f.write_str(other.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_selector_names_the_option() {
        let msg = std::format!("{}", ConfigError::MissingSelector);
        assert!(msg.contains("can-port-0"));
        assert!(msg.contains("can-port-1"));
    }

    #[test]
    fn invalid_selector_reports_value() {
        let msg = std::format!("{}", ConfigError::InvalidSelector(7));
        assert_eq!(msg, "invalid CAN port selector 7: must be 0 or 1");
    }
}
