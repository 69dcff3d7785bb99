// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! State of a single flag packed into an integer option field.

use std::fmt;

/// Result of decoding one bit of an option bitmask.
///
/// # Examples
///
/// ```
/// use thinq_lib::types::BitState;
///
/// assert_eq!(BitState::from(true), BitState::On);
/// assert_eq!(BitState::Off.as_str(), "OFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitState {
    /// The bit is cleared.
    Off,
    /// The bit is set.
    On,
}

impl BitState {
    /// Returns the display string used by the appliance API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::On => "ON",
        }
    }

    /// Returns `true` if the bit is set.
    #[must_use]
    pub const fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }
}

impl fmt::Display for BitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<bool> for BitState {
    fn from(value: bool) -> Self {
        if value { Self::On } else { Self::Off }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_str() {
        assert_eq!(BitState::On.as_str(), "ON");
        assert_eq!(BitState::Off.as_str(), "OFF");
    }

    #[test]
    fn from_bool() {
        assert_eq!(BitState::from(true), BitState::On);
        assert_eq!(BitState::from(false), BitState::Off);
        assert!(BitState::On.is_on());
        assert!(!BitState::Off.is_on());
    }

    #[test]
    fn display() {
        assert_eq!(BitState::On.to_string(), "ON");
    }
}
