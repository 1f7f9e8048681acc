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

use crate::config::{PulleyConfiguration, SystemMode};
use crate::geometry::SCENE_SCALE;

/// Rate the animation was tuned at. `advance` scales every step to this many frames per second
pub const REFERENCE_FRAME_RATE: f64 = 60.0;
/// Degrees turned per frame for each RPM
pub const ROTATION_SPEED_FACTOR: f64 = 0.05;
/// Belt dash offset per frame for each RPM and unit of driver radius
pub const BELT_SPEED_FACTOR: f64 = 0.002;

/// Visual state of the running transmission.
///
/// Rotations are in degrees and stay within (-360, 360). The belt offset is in scene
/// units and is unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    pub driver_rotation: f64,
    pub driven_rotation: f64,
    pub belt_offset: f64
}

/// Move the animation on by `dt` seconds.
///
/// The driven pulley turns against the driver when in friction contact and with it when
/// belt driven.
pub fn advance(state: AnimationState, dt: f64, config: &PulleyConfiguration) -> AnimationState {
    if !(dt > 0.0) || !dt.is_finite() {
        return state;
    }
    let frames = dt * REFERENCE_FRAME_RATE;
    let rpm = config.input_rpm;

    let driven_speed_ratio = match config.driver_diameter > 0.0 && config.driven_diameter > 0.0 {
        true => config.driver_diameter / config.driven_diameter,
        false => 0.0
    };
    let direction = match config.mode {
        SystemMode::Friction => -1.0,
        SystemMode::Belt => 1.0
    };
    let driver_scene_radius = config.driver_radius() * SCENE_SCALE;

    AnimationState {
        driver_rotation: (state.driver_rotation + rpm * ROTATION_SPEED_FACTOR * frames) % 360.0,
        driven_rotation: (state.driven_rotation +
            rpm * driven_speed_ratio * direction * ROTATION_SPEED_FACTOR * frames) % 360.0,
        belt_offset: state.belt_offset - rpm * driver_scene_radius * BELT_SPEED_FACTOR * frames
    }
}

#[cfg(test)]
mod tests {
    use crate::animation::{advance, AnimationState};
    use crate::config::{PulleyConfiguration, SystemMode};

    const FRAME: f64 = 1.0 / 60.0;

    fn assert_close(actual: f64, expected: f64) {
        assert!((actual - expected).abs() < 1e-9, "{} != {}", actual, expected);
    }

    #[test]
    fn single_frame_friction() {
        let state = advance(AnimationState::default(), FRAME, &PulleyConfiguration::default());
        assert_close(state.driver_rotation, 6.0);
        assert_close(state.driven_rotation, -3.0);
        assert_close(state.belt_offset, -9.6);
    }

    #[test]
    fn belt_turns_both_pulleys_the_same_way() {
        let config = PulleyConfiguration::default().with_mode(SystemMode::Belt);
        let state = advance(AnimationState::default(), FRAME, &config);
        assert_close(state.driver_rotation, 6.0);
        assert_close(state.driven_rotation, 3.0);
    }

    #[test]
    fn rotations_wrap() {
        let config = PulleyConfiguration { input_rpm: 3000.0, ..Default::default() };
        let mut state = AnimationState::default();
        for _ in 0..1000 {
            state = advance(state, FRAME, &config);
            assert!(state.driver_rotation.abs() < 360.0);
            assert!(state.driven_rotation.abs() < 360.0);
        }
        assert!(state.driven_rotation <= 0.0);
    }

    #[test]
    fn no_time_no_change() {
        let config = PulleyConfiguration::default();
        let state = AnimationState { driver_rotation: 12.0, driven_rotation: -4.0, belt_offset: -30.0 };
        assert_eq!(advance(state, 0.0, &config), state);
        assert_eq!(advance(state, -1.0, &config), state);
        assert_eq!(advance(state, f64::NAN, &config), state);

        let stopped = PulleyConfiguration { input_rpm: 0.0, ..config };
        assert_eq!(advance(state, FRAME, &stopped), state);
    }

    #[test]
    fn degenerate_driven_pulley_stays_still() {
        let config = PulleyConfiguration { driven_diameter: 0.0, ..Default::default() };
        let state = advance(AnimationState::default(), FRAME, &config);
        assert_close(state.driver_rotation, 6.0);
        assert_eq!(state.driven_rotation, 0.0);
    }
}
