/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of pulley-sim.
 *
 * pulley-sim is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * pulley-sim is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with pulley-sim. If not, see <https://www.gnu.org/licenses/>.
 */

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::numeric::clamp_to_range;

use crate::error::{Error, ErrorKind, PropertyParseError, Result};

pub const MIN_DIAMETER: f64 = 50.0;
pub const MAX_DIAMETER: f64 = 400.0;
pub const MIN_INPUT_RPM: f64 = 0.0;
pub const MAX_INPUT_RPM: f64 = 3000.0;
pub const MIN_INPUT_POWER: f64 = 100.0;
pub const MAX_INPUT_POWER: f64 = 5000.0;
pub const MAX_CENTER_DISTANCE: f64 = 800.0;
/// Gap kept between the pulley rims when the center distance is at its minimum
pub const CENTER_DISTANCE_CLEARANCE: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemMode {
    /// Pulleys roll against each other
    #[default]
    Friction,
    /// Pulleys are coupled by a belt at an explicit center distance
    Belt
}

impl SystemMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemMode::Friction => "friction",
            SystemMode::Belt => "belt"
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SystemMode::Friction => "Friction wheels",
            SystemMode::Belt => "Belt drive"
        }
    }
}

impl Display for SystemMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SystemMode {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "friction" => Ok(SystemMode::Friction),
            "belt" => Ok(SystemMode::Belt),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

/// Allowed values for a single adjustable input
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputRange {
    pub min: f64,
    pub max: f64
}

impl InputRange {
    pub const fn new(min: f64, max: f64) -> InputRange {
        InputRange { min, max }
    }

    pub fn clamp(&self, val: f64) -> f64 {
        clamp_to_range(val, self.min, self.max)
    }

    pub fn contains(&self, val: f64) -> bool {
        val >= self.min && val <= self.max
    }
}

pub const DIAMETER_RANGE: InputRange = InputRange::new(MIN_DIAMETER, MAX_DIAMETER);
pub const INPUT_RPM_RANGE: InputRange = InputRange::new(MIN_INPUT_RPM, MAX_INPUT_RPM);
pub const INPUT_POWER_RANGE: InputRange = InputRange::new(MIN_INPUT_POWER, MAX_INPUT_POWER);

/// The center distance range depends on the pulleys as they must never overlap
pub fn center_distance_range(driver_diameter: f64, driven_diameter: f64) -> InputRange {
    let min = ((driver_diameter + driven_diameter) / 2.0).ceil() + CENTER_DISTANCE_CLEARANCE;
    InputRange::new(min, MAX_CENTER_DISTANCE.max(min))
}

/// The four independent inputs of a two pulley transmission plus the coupling mode.
///
/// Diameters and the center distance are in millimeters, speed in RPM and power in Watts.
/// `center_distance` is kept when in friction mode but is never used there.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PulleyConfiguration {
    pub driver_diameter: f64,
    pub driven_diameter: f64,
    pub input_rpm: f64,
    pub input_power: f64,
    pub center_distance: f64,
    #[serde(default)]
    pub mode: SystemMode
}

impl Default for PulleyConfiguration {
    fn default() -> Self {
        PulleyConfiguration {
            driver_diameter: 100.0,
            driven_diameter: 200.0,
            input_rpm: 120.0,
            input_power: 500.0,
            center_distance: 300.0,
            mode: SystemMode::Friction
        }
    }
}

impl PulleyConfiguration {
    pub fn new(driver_diameter: f64,
               driven_diameter: f64,
               input_rpm: f64,
               input_power: f64,
               center_distance: f64,
               mode: SystemMode) -> PulleyConfiguration
    {
        PulleyConfiguration { driver_diameter, driven_diameter, input_rpm, input_power, center_distance, mode }
    }

    pub fn driver_radius(&self) -> f64 {
        self.driver_diameter / 2.0
    }

    pub fn driven_radius(&self) -> f64 {
        self.driven_diameter / 2.0
    }

    /// Center distance at which the pulley rims touch
    pub fn touching_center_distance(&self) -> f64 {
        self.driver_radius() + self.driven_radius()
    }

    /// The distance between the pulley centers that geometry should use.
    /// In friction mode the pulleys touch so this is always the sum of the radii.
    pub fn effective_center_distance(&self) -> f64 {
        match self.mode {
            SystemMode::Friction => self.touching_center_distance(),
            SystemMode::Belt => self.center_distance
        }
    }

    /// Switch to `mode`. Moving to belt mode opens the center distance up to the sum of
    /// the diameters if it is currently shorter so the belt has room
    pub fn with_mode(&self, mode: SystemMode) -> PulleyConfiguration {
        let mut updated = PulleyConfiguration { mode, ..*self };
        let min_belt_distance = self.driver_diameter + self.driven_diameter;
        if mode == SystemMode::Belt && updated.center_distance < min_belt_distance {
            debug!("Center distance {} too short for belt mode. Using {}",
                   updated.center_distance, min_belt_distance);
            updated.center_distance = min_belt_distance;
        }
        updated
    }

    /// Get a copy with every input limited to its allowed range.
    /// The center distance is only limited when in belt mode
    pub fn clamped(&self) -> PulleyConfiguration {
        let driver_diameter = DIAMETER_RANGE.clamp(self.driver_diameter);
        let driven_diameter = DIAMETER_RANGE.clamp(self.driven_diameter);
        let center_distance = match self.mode {
            SystemMode::Friction => self.center_distance,
            SystemMode::Belt => center_distance_range(driver_diameter, driven_diameter).clamp(self.center_distance)
        };
        PulleyConfiguration {
            driver_diameter,
            driven_diameter,
            input_rpm: INPUT_RPM_RANGE.clamp(self.input_rpm),
            input_power: INPUT_POWER_RANGE.clamp(self.input_power),
            center_distance,
            mode: self.mode
        }
    }

    /// Check the configuration describes a physically possible transmission
    pub fn validate(&self) -> Result<()> {
        for (name, diameter) in [("driver", self.driver_diameter), ("driven", self.driven_diameter)] {
            if !diameter.is_finite() || diameter <= 0.0 {
                return Err(Error::new(ErrorKind::InvalidDiameter,
                                      format!("{} diameter must be positive. Got {}", name, diameter)));
            }
        }
        if !self.input_rpm.is_finite() || self.input_rpm < 0.0 {
            return Err(Error::new(ErrorKind::InvalidSpeed,
                                  format!("input speed must not be negative. Got {}", self.input_rpm)));
        }
        if !self.input_power.is_finite() || self.input_power < 0.0 {
            return Err(Error::new(ErrorKind::InvalidPower,
                                  format!("input power must not be negative. Got {}", self.input_power)));
        }
        if self.mode == SystemMode::Belt {
            let touching_distance = self.touching_center_distance();
            if !self.center_distance.is_finite() || self.center_distance <= touching_distance {
                return Err(Error::new(ErrorKind::InvalidCenterDistance,
                                      format!("center distance must exceed {} for the pulleys to clear each other. Got {}",
                                              touching_distance, self.center_distance)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::config::{center_distance_range, PulleyConfiguration, SystemMode};
    use crate::error::ErrorKind;

    #[test]
    fn parse_mode() {
        assert_eq!(SystemMode::from_str("belt").unwrap(), SystemMode::Belt);
        assert_eq!(SystemMode::from_str("FRICTION").unwrap(), SystemMode::Friction);
        assert_eq!(SystemMode::from_str(" Belt ").unwrap(), SystemMode::Belt);
        assert!(SystemMode::from_str("chain").is_err());
        assert_eq!(SystemMode::Belt.to_string(), "belt");
    }

    #[test]
    fn effective_center_distance() {
        let config = PulleyConfiguration::default();
        assert_eq!(config.effective_center_distance(), 150.0);
        let belt = config.with_mode(SystemMode::Belt);
        assert_eq!(belt.effective_center_distance(), 300.0);
    }

    #[test]
    fn touching_distance_is_shared() {
        let config = PulleyConfiguration::new(120.0, 260.0, 100.0, 500.0, 0.0, SystemMode::Friction);
        assert_eq!(config.touching_center_distance(), 190.0);
        assert_eq!(config.effective_center_distance(), config.touching_center_distance());

        // Belt pulleys at the touching distance don't clear each other, just beyond they do
        let touching = PulleyConfiguration { center_distance: 190.0, mode: SystemMode::Belt, ..config };
        assert_eq!(touching.validate().unwrap_err().kind(), ErrorKind::InvalidCenterDistance);
        let clear = PulleyConfiguration { center_distance: 190.5, ..touching };
        assert!(clear.validate().is_ok());
    }

    #[test]
    fn switching_to_belt_opens_center_distance() {
        let config = PulleyConfiguration::new(200.0, 300.0, 100.0, 500.0, 120.0, SystemMode::Friction);
        let belt = config.with_mode(SystemMode::Belt);
        assert_eq!(belt.mode, SystemMode::Belt);
        assert_eq!(belt.center_distance, 500.0);

        let already_wide = PulleyConfiguration { center_distance: 650.0, ..config };
        assert_eq!(already_wide.with_mode(SystemMode::Belt).center_distance, 650.0);

        // Switching back keeps the stored distance
        assert_eq!(belt.with_mode(SystemMode::Friction).center_distance, 500.0);
    }

    #[test]
    fn clamping() {
        let config = PulleyConfiguration::new(10.0, 900.0, 5000.0, 0.0, 100.0, SystemMode::Belt);
        let clamped = config.clamped();
        assert_eq!(clamped.driver_diameter, 50.0);
        assert_eq!(clamped.driven_diameter, 400.0);
        assert_eq!(clamped.input_rpm, 3000.0);
        assert_eq!(clamped.input_power, 100.0);
        assert_eq!(clamped.center_distance, 235.0);

        let friction = PulleyConfiguration { mode: SystemMode::Friction, ..config };
        assert_eq!(friction.clamped().center_distance, 100.0);
    }

    #[test]
    fn center_distance_limits() {
        let range = center_distance_range(100.0, 200.0);
        assert_eq!(range.min, 160.0);
        assert_eq!(range.max, 800.0);
        let odd = center_distance_range(105.0, 200.0);
        assert_eq!(odd.min, 163.0);
        assert!(range.contains(300.0));
        assert!(!range.contains(150.0));
    }

    #[test]
    fn validation() {
        assert!(PulleyConfiguration::default().validate().is_ok());
        assert!(PulleyConfiguration::default().with_mode(SystemMode::Belt).validate().is_ok());

        let zero_driver = PulleyConfiguration { driver_diameter: 0.0, ..Default::default() };
        assert_eq!(zero_driver.validate().unwrap_err().kind(), ErrorKind::InvalidDiameter);

        let negative_rpm = PulleyConfiguration { input_rpm: -1.0, ..Default::default() };
        assert_eq!(negative_rpm.validate().unwrap_err().kind(), ErrorKind::InvalidSpeed);

        let nan_power = PulleyConfiguration { input_power: f64::NAN, ..Default::default() };
        assert_eq!(nan_power.validate().unwrap_err().kind(), ErrorKind::InvalidPower);

        let overlapping = PulleyConfiguration {
            center_distance: 150.0,
            mode: SystemMode::Belt,
            ..Default::default()
        };
        assert_eq!(overlapping.validate().unwrap_err().kind(), ErrorKind::InvalidCenterDistance);

        // Friction mode ignores the stored center distance
        let friction = PulleyConfiguration { center_distance: 0.0, ..Default::default() };
        assert!(friction.validate().is_ok());
    }
}
