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

use serde::{Deserialize, Serialize};

use crate::config::PulleyConfiguration;
use crate::model::{output_speed, speed_ratio, torque_at};

pub const CURVE_MIN_DIAMETER: f64 = 50.0;
pub const CURVE_MAX_DIAMETER: f64 = 400.0;
pub const CURVE_STEP: f64 = 25.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub driven_diameter: f64,
    pub output_rpm: f64,
    pub output_torque: f64
}

/// Output speed and torque for every driven diameter from 50mm to 400mm in 25mm steps,
/// keeping the driver diameter, input speed and input power of `config`
pub fn response_curve(config: &PulleyConfiguration) -> Vec<CurvePoint> {
    let mut plot_data: Vec<CurvePoint> = Vec::new();
    let mut driven_diameter = CURVE_MIN_DIAMETER;
    loop {
        if driven_diameter > CURVE_MAX_DIAMETER {
            break;
        }
        let ratio = speed_ratio(config.driver_diameter, driven_diameter);
        let output_rpm = output_speed(config.input_rpm, ratio);
        plot_data.push(CurvePoint {
            driven_diameter,
            output_rpm,
            output_torque: torque_at(config.input_power, output_rpm)
        });
        driven_diameter += CURVE_STEP;
    }
    plot_data
}

#[cfg(test)]
mod tests {
    use crate::config::{PulleyConfiguration, SystemMode};
    use crate::model::{calculate, response_curve};

    #[test]
    fn curve_covers_range() {
        let curve = response_curve(&PulleyConfiguration::default());
        assert_eq!(curve.len(), 15);
        assert_eq!(curve.first().unwrap().driven_diameter, 50.0);
        assert_eq!(curve.last().unwrap().driven_diameter, 400.0);
        for pair in curve.windows(2) {
            assert_eq!(pair[1].driven_diameter - pair[0].driven_diameter, 25.0);
            assert!(pair[1].output_rpm < pair[0].output_rpm);
            assert!(pair[1].output_torque > pair[0].output_torque);
        }
    }

    #[test]
    fn curve_matches_model() {
        let config = PulleyConfiguration::new(100.0, 175.0, 900.0, 1500.0, 500.0, SystemMode::Belt);
        let curve = response_curve(&config);
        let point = curve.iter().find(|p| p.driven_diameter == 175.0).unwrap();
        let stats = calculate(&config);
        assert_eq!(point.output_rpm, stats.output_rpm);
        assert_eq!(point.output_torque, stats.output_torque);

        let at_200 = curve.iter().find(|p| p.driven_diameter == 200.0).unwrap();
        assert_eq!(at_200.output_rpm, 450.0);
    }

    #[test]
    fn curve_is_restartable() {
        let config = PulleyConfiguration::default();
        assert_eq!(response_curve(&config), response_curve(&config));
    }

    #[test]
    fn curve_with_stationary_input() {
        let config = PulleyConfiguration { input_rpm: 0.0, ..Default::default() };
        assert!(response_curve(&config).iter().all(|p| p.output_rpm == 0.0 && p.output_torque == 0.0));

        let no_driver = PulleyConfiguration { driver_diameter: 0.0, ..Default::default() };
        assert!(response_curve(&no_driver).iter().all(|p| p.output_rpm == 0.0 && p.output_torque == 0.0));
    }
}
