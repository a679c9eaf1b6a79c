// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Quantized fan speeds.

use std::fmt;
use std::str::FromStr;

use crate::error::DeviceError;

/// One of the four speeds a fan controller reports.
///
/// The hub encodes each level as an exact native value. Anything else is a
/// catalog mismatch and is reported as [`DeviceError::UnexpectedFanState`].
///
/// # Examples
///
/// ```
/// use isy_devices::types::FanLevel;
///
/// assert_eq!(FanLevel::Medium.native(), 191);
/// assert_eq!(FanLevel::from_native(63).unwrap(), FanLevel::Low);
/// assert!(FanLevel::from_native(100).is_err());
///
/// let level: FanLevel = "High".parse().unwrap();
/// assert_eq!(level, FanLevel::High);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum FanLevel {
    /// Fan stopped.
    Off,
    /// Low speed.
    Low,
    /// Medium speed.
    Medium,
    /// High speed.
    High,
}

impl FanLevel {
    /// All levels in ascending speed order.
    pub const ALL: [Self; 4] = [Self::Off, Self::Low, Self::Medium, Self::High];

    /// Returns the native value the hub uses for this level.
    #[must_use]
    pub const fn native(&self) -> i32 {
        match self {
            Self::Off => 0,
            Self::Low => 63,
            Self::Medium => 191,
            Self::High => 255,
        }
    }

    /// Maps a raw hub state onto a level.
    ///
    /// # Errors
    ///
    /// Returns [`DeviceError::UnexpectedFanState`] unless `raw` is exactly one
    /// of the four native values.
    pub fn from_native(raw: i32) -> Result<Self, DeviceError> {
        Self::ALL
            .into_iter()
            .find(|level| level.native() == raw)
            .ok_or(DeviceError::UnexpectedFanState(raw))
    }

    /// Returns the level name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "Off",
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for FanLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FanLevel {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| DeviceError::UnknownFanLevel(s.to_string()))
    }
}
