use std::fmt;

use serde::{Deserialize, Serialize};

/// Threat levels at or above this value fail the check.
pub const DEFAULT_THREAT_LEVEL_CEILING: u8 = 3;

/// Background check performed by a third-party intelligence agency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundCheck {
    pub threat_level: u8,
    pub sanctioned: bool,
}

impl BackgroundCheck {
    pub fn new(threat_level: u8, sanctioned: bool) -> Self {
        Self {
            threat_level,
            sanctioned,
        }
    }

    /// Passes when the person is not sanctioned and below the default ceiling.
    pub fn check(&self) -> bool {
        self.clears(DEFAULT_THREAT_LEVEL_CEILING)
    }

    pub fn clears(&self, threat_level_ceiling: u8) -> bool {
        !self.sanctioned && self.threat_level < threat_level_ceiling
    }
}

/// Verdict under [`DEFAULT_THREAT_LEVEL_CEILING`]. Callers running with a
/// configured ceiling should ask [`BackgroundCheck::clears`] instead.
impl fmt::Display for BackgroundCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.check() {
            f.write_str("background check: clear")
        } else {
            f.write_str("background check: NOT CLEARED")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_requires_low_threat_and_no_sanctions() {
        assert!(BackgroundCheck::new(0, false).check());
        assert!(BackgroundCheck::new(2, false).check());
        assert!(!BackgroundCheck::new(3, false).check());
        assert!(!BackgroundCheck::new(4, false).check());
        assert!(!BackgroundCheck::new(0, true).check());
    }

    #[test]
    fn display_reflects_outcome() {
        assert_eq!(
            BackgroundCheck::new(0, false).to_string(),
            "background check: clear"
        );
        assert_eq!(
            BackgroundCheck::new(0, true).to_string(),
            "background check: NOT CLEARED"
        );
    }

    #[test]
    fn clears_honours_custom_ceiling() {
        let check = BackgroundCheck::new(4, false);
        assert!(check.clears(5));
        assert!(!check.clears(4));
    }
}
