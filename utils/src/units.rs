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

pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const MM_PER_M: f64 = 1000.0;

pub fn rpm_to_rad_per_sec(rpm: f64) -> f64 {
    (2.0 * std::f64::consts::PI * rpm) / SECONDS_PER_MINUTE
}

pub fn mm_to_m(mm: f64) -> f64 {
    mm / MM_PER_M
}

/// Shaft power in Watts for a given speed (RPM) and torque (N·m)
pub fn calculate_power_w(rpm: f64, torque: f64) -> f64 {
    torque * rpm_to_rad_per_sec(rpm)
}
