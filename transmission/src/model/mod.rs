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

mod curve;

use serde::{Deserialize, Serialize};
use tracing::debug;
use utils::units::{calculate_power_w, mm_to_m, rpm_to_rad_per_sec};

use crate::config::{PulleyConfiguration, SystemMode};

pub use curve::{response_curve, CurvePoint, CURVE_MAX_DIAMETER, CURVE_MIN_DIAMETER, CURVE_STEP};

/// Steady state values derived from a [PulleyConfiguration].
///
/// Power transfer is ideal so the output power always equals the input power.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransmissionStats {
    /// Driven diameter / driver diameter
    pub ratio: f64,
    /// N·m
    pub input_torque: f64,
    pub output_rpm: f64,
    /// N·m
    pub output_torque: f64,
    /// Speed of the driver rim in m/s
    pub tangential_velocity: f64,
    /// mm. Zero unless in belt mode
    pub belt_length: f64,
    /// Identical to `ratio` as there is no loss model
    pub mechanical_advantage: f64
}

impl TransmissionStats {
    pub fn output_power(&self) -> f64 {
        calculate_power_w(self.output_rpm, self.output_torque)
    }
}

/// Derive the transmission results for `config`.
///
/// Never panics. Inputs that would divide by zero produce zero valued results instead.
pub fn calculate(config: &PulleyConfiguration) -> TransmissionStats {
    let ratio = speed_ratio(config.driver_diameter, config.driven_diameter);
    let output_rpm = output_speed(config.input_rpm, ratio);
    let tangential_velocity = match config.driver_diameter > 0.0 {
        true => mm_to_m(config.driver_radius()) * rpm_to_rad_per_sec(config.input_rpm),
        false => 0.0
    };
    let belt_length = match config.mode {
        SystemMode::Belt => belt_length(config.driver_diameter, config.driven_diameter, config.center_distance),
        SystemMode::Friction => 0.0
    };

    TransmissionStats {
        ratio,
        input_torque: torque_at(config.input_power, config.input_rpm),
        output_rpm,
        output_torque: torque_at(config.input_power, output_rpm),
        tangential_velocity,
        belt_length,
        mechanical_advantage: ratio
    }
}

/// Driven diameter over driver diameter or 0 if either diameter is unusable
pub fn speed_ratio(driver_diameter: f64, driven_diameter: f64) -> f64 {
    if !(driver_diameter > 0.0 && driven_diameter > 0.0) {
        debug!("Can't calculate speed ratio for diameters {} and {}", driver_diameter, driven_diameter);
        return 0.0;
    }
    let ratio = driven_diameter / driver_diameter;
    if !ratio.is_finite() {
        return 0.0;
    }
    ratio
}

pub(crate) fn output_speed(input_rpm: f64, ratio: f64) -> f64 {
    if ratio > 0.0 {
        input_rpm / ratio
    } else {
        0.0
    }
}

/// Torque transmitted at `rpm` for the given power. Defined as 0 when not turning
pub fn torque_at(power: f64, rpm: f64) -> f64 {
    let omega = rpm_to_rad_per_sec(rpm);
    if omega > 0.0 {
        power / omega
    } else {
        0.0
    }
}

/// Open belt length approximation in mm, ignoring belt thickness and slack.
/// Exact when both diameters are equal
pub fn belt_length(driver_diameter: f64, driven_diameter: f64, center_distance: f64) -> f64 {
    if !(center_distance > 0.0) {
        return 0.0;
    }
    let length = (2.0 * center_distance) +
        (std::f64::consts::PI * (driver_diameter + driven_diameter) / 2.0) +
        ((driven_diameter - driver_diameter).powi(2) / (4.0 * center_distance));
    if !length.is_finite() {
        return 0.0;
    }
    length
}
