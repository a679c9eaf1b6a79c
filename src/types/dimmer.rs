// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimmer type for brightness control.
//!
//! Consumers express brightness as a percentage while the hub stores it in
//! its native 0-255 range. Reading rounds down and writing rounds up, so a
//! level sent with [`Dimmer::to_native`] never reads back lower than the
//! percentage that was requested.

use std::fmt;

use crate::error::ValueError;

/// Brightness level as a percentage (0-100).
///
/// # Examples
///
/// ```
/// use isy_devices::types::Dimmer;
///
/// let dim = Dimmer::new(50).unwrap();
/// assert_eq!(dim.to_native(), 128);
/// assert_eq!(Dimmer::from_native(128), dim);
///
/// assert!(Dimmer::new(101).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Dimmer(u8);

impl Dimmer {
    /// Minimum dimmer value (0%).
    pub const MIN: Self = Self(0);

    /// Maximum dimmer value (100%).
    pub const MAX: Self = Self(100);

    /// Full scale of the hub's native brightness range.
    pub const NATIVE_MAX: i32 = 255;

    /// Creates a new dimmer value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: i32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Creates a dimmer value, clamping to the valid range.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Converts a native hub level (0-255) to a percentage, rounding down.
    ///
    /// Values outside the native range are clamped first.
    ///
    /// ```
    /// use isy_devices::types::Dimmer;
    ///
    /// assert_eq!(Dimmer::from_native(0).value(), 0);
    /// assert_eq!(Dimmer::from_native(254).value(), 99);
    /// assert_eq!(Dimmer::from_native(255).value(), 100);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_native(raw: i32) -> Self {
        let raw = raw.clamp(0, Self::NATIVE_MAX);
        // Safe: raw is within [0, 255] so the quotient is within [0, 100]
        Self((raw * 100 / Self::NATIVE_MAX) as u8)
    }

    /// Converts the percentage to the hub's native level, rounding up.
    #[must_use]
    pub fn to_native(&self) -> i32 {
        (i32::from(self.0) * Self::NATIVE_MAX + 99) / 100
    }

    /// Returns the brightness percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Dimmer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl TryFrom<u8> for Dimmer {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimmer_invalid_value() {
        assert!(Dimmer::new(101).is_err());
        assert_eq!(Dimmer::new(100).unwrap(), Dimmer::MAX);
    }

    #[test]
    fn dimmer_clamped() {
        assert_eq!(Dimmer::clamped(50).value(), 50);
        assert_eq!(Dimmer::clamped(255).value(), 100);
    }

    #[test]
    fn from_native_rounds_down() {
        assert_eq!(Dimmer::from_native(128).value(), 50);
        assert_eq!(Dimmer::from_native(2).value(), 0);
        assert_eq!(Dimmer::from_native(3).value(), 1);
    }

    #[test]
    fn from_native_clamps_out_of_range() {
        assert_eq!(Dimmer::from_native(-5), Dimmer::MIN);
        assert_eq!(Dimmer::from_native(300), Dimmer::MAX);
    }

    #[test]
    fn to_native_rounds_up() {
        assert_eq!(Dimmer::new(50).unwrap().to_native(), 128);
        assert_eq!(Dimmer::new(1).unwrap().to_native(), 3);
        assert_eq!(Dimmer::MIN.to_native(), 0);
        assert_eq!(Dimmer::MAX.to_native(), 255);
    }

    #[test]
    fn native_round_trip_never_reads_lower() {
        for percent in 0..=100 {
            let dim = Dimmer::new(percent).unwrap();
            assert!(Dimmer::from_native(dim.to_native()) >= dim);
        }
    }

    #[test]
    fn dimmer_display() {
        assert_eq!(Dimmer::new(75).unwrap().to_string(), "75%");
    }
}
