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

use serde::Serialize;

use crate::config::{PulleyConfiguration, SystemMode};
use crate::geometry::{solve_belt_wrap, BeltWrap, Circle, Point, BELT_OFFSET_RADIUS};

pub const VIEWBOX_WIDTH: f64 = 800.0;
pub const VIEWBOX_HEIGHT: f64 = 400.0;
/// Scene units per millimeter
pub const SCENE_SCALE: f64 = 0.8;
pub const SCENE_CENTER_X: f64 = VIEWBOX_WIDTH / 2.0;
pub const SCENE_CENTER_Y: f64 = VIEWBOX_HEIGHT / 2.0;

/// Where the two pulleys sit in the view box
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SceneLayout {
    pub mode: SystemMode,
    pub driver: Circle,
    pub driven: Circle
}

impl SceneLayout {
    pub fn from_config(config: &PulleyConfiguration) -> SceneLayout {
        let r1 = config.driver_radius() * SCENE_SCALE;
        let r2 = config.driven_radius() * SCENE_SCALE;
        let d = config.effective_center_distance() * SCENE_SCALE;
        let x1 = match config.mode {
            SystemMode::Friction => SCENE_CENTER_X - d / 2.0 + r1 / 2.0,
            SystemMode::Belt => SCENE_CENTER_X - d / 2.0
        };
        let x2 = x1 + d;
        SceneLayout {
            mode: config.mode,
            driver: Circle::new(Point::new(x1, SCENE_CENTER_Y), r1),
            driven: Circle::new(Point::new(x2, SCENE_CENTER_Y), r2)
        }
    }

    pub fn center_distance(&self) -> f64 {
        (self.driven.center.x - self.driver.center.x).abs()
    }

    /// The belt path for this scene. Always `None` in friction mode as the pulleys touch
    pub fn belt_wrap(&self) -> Option<BeltWrap> {
        match self.mode {
            SystemMode::Friction => None,
            SystemMode::Belt => solve_belt_wrap(self.driver.inflated(BELT_OFFSET_RADIUS),
                                                self.driven.inflated(BELT_OFFSET_RADIUS))
        }
    }
}
