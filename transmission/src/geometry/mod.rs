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

mod belt;
mod layout;

use serde::{Deserialize, Serialize};

pub use belt::{solve_belt_wrap, BeltWrap, BELT_OFFSET_RADIUS};
pub use layout::{SceneLayout, SCENE_CENTER_Y, SCENE_SCALE, VIEWBOX_HEIGHT, VIEWBOX_WIDTH};

/// A point in screen space (y grows downwards)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64
}

impl Point {
    pub fn new(x: f64, y: f64) -> Point {
        Point { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point,
    pub radius: f64
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Circle {
        Circle { center, radius }
    }

    pub fn inflated(&self, amount: f64) -> Circle {
        Circle { center: self.center, radius: self.radius + amount }
    }

    /// The point on the circle at `angle` radians from the positive x axis,
    /// measured anti-clockwise as seen on screen
    pub fn point_at(&self, angle: f64) -> Point {
        Point {
            x: self.center.x + self.radius * angle.cos(),
            y: self.center.y - self.radius * angle.sin()
        }
    }
}
