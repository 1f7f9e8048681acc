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

use std::f64::consts::PI;
use serde::Serialize;
use tracing::debug;

use crate::geometry::{Circle, Point};

/// Half of the belt stroke width. Added to each pulley radius so the belt sits on the rim
pub const BELT_OFFSET_RADIUS: f64 = 5.0;

/// The closed path a belt follows around two pulleys.
///
/// The path runs from `driver_top` to `driven_top`, arcs clockwise around the driven pulley
/// to `driven_bottom`, runs back to `driver_bottom` and arcs clockwise around the driver
/// pulley to close at `driver_top`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BeltWrap {
    pub driver: Circle,
    pub driven: Circle,
    pub driver_top: Point,
    pub driver_bottom: Point,
    pub driven_top: Point,
    pub driven_bottom: Point,
    /// Set when the belt wraps more than half of the driver pulley
    pub driver_large_arc: bool,
    /// Set when the belt wraps more than half of the driven pulley
    pub driven_large_arc: bool,
    tangent_angle: f64
}

/// Find the external tangents of `driver` and `driven`.
///
/// Both centers are expected to lie on the same horizontal line with the driven pulley
/// to the right of the driver. Returns `None` when the driven pulley is not to the right,
/// or when one circle sits inside (or touches the inside of) the other as no external
/// tangent exists then.
pub fn solve_belt_wrap(driver: Circle, driven: Circle) -> Option<BeltWrap> {
    let dist = driven.center.x - driver.center.x;
    let radius_difference = driver.radius - driven.radius;
    if !dist.is_finite() || !radius_difference.is_finite() || dist <= 0.0 || dist <= radius_difference.abs() {
        debug!("No belt wrap for center distance {} and radii {} and {}", dist, driver.radius, driven.radius);
        return None;
    }

    let tangent_angle = (radius_difference / dist).acos();
    Some(BeltWrap {
        driver,
        driven,
        driver_top: driver.point_at(tangent_angle),
        driver_bottom: driver.point_at(-tangent_angle),
        driven_top: driven.point_at(tangent_angle),
        driven_bottom: driven.point_at(-tangent_angle),
        driver_large_arc: driver.radius > driven.radius,
        driven_large_arc: driven.radius > driver.radius,
        tangent_angle
    })
}

impl BeltWrap {
    /// Angle in radians between the center line and the tangent points
    pub fn tangent_angle(&self) -> f64 {
        self.tangent_angle
    }

    /// Angle in radians of the driver pulley covered by the belt
    pub fn driver_wrap_angle(&self) -> f64 {
        2.0 * PI - 2.0 * self.tangent_angle
    }

    /// Angle in radians of the driven pulley covered by the belt
    pub fn driven_wrap_angle(&self) -> f64 {
        2.0 * self.tangent_angle
    }

    /// Length of one straight run of belt between the pulleys
    pub fn span_length(&self) -> f64 {
        self.driver_top.distance_to(&self.driven_top)
    }

    /// The exact length of the wrap path. Unlike the open belt approximation this
    /// holds for any difference in radius
    pub fn path_length(&self) -> f64 {
        2.0 * self.span_length() +
            self.driver.radius * self.driver_wrap_angle() +
            self.driven.radius * self.driven_wrap_angle()
    }

    /// SVG path data for the closed belt outline
    pub fn to_svg_path_data(&self) -> String {
        format!("M {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3} L {:.3} {:.3} A {:.3} {:.3} 0 {} 1 {:.3} {:.3}",
                self.driver_top.x, self.driver_top.y,
                self.driven_top.x, self.driven_top.y,
                self.driven.radius, self.driven.radius, self.driven_large_arc as u8,
                self.driven_bottom.x, self.driven_bottom.y,
                self.driver_bottom.x, self.driver_bottom.y,
                self.driver.radius, self.driver.radius, self.driver_large_arc as u8,
                self.driver_top.x, self.driver_top.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;
    use rand::Rng;
    use crate::geometry::{solve_belt_wrap, Circle, Point};

    fn circle(x: f64, radius: f64) -> Circle {
        Circle::new(Point::new(x, 200.0), radius)
    }

    #[test]
    fn no_solution_when_nested() {
        assert!(solve_belt_wrap(circle(100.0, 80.0), circle(120.0, 40.0)).is_none());
        // Internally touching
        assert!(solve_belt_wrap(circle(100.0, 80.0), circle(140.0, 40.0)).is_none());
        assert!(solve_belt_wrap(circle(100.0, 40.0), circle(140.0, 80.0)).is_none());
        // Concentric equal circles
        assert!(solve_belt_wrap(circle(100.0, 40.0), circle(100.0, 40.0)).is_none());
        assert!(solve_belt_wrap(circle(100.0, f64::NAN), circle(300.0, 40.0)).is_none());
        // Just clear of the internal tangent
        assert!(solve_belt_wrap(circle(100.0, 80.0), circle(140.5, 40.0)).is_some());
    }

    #[test]
    fn solution_iff_clear_of_each_other() {
        let mut rng = rand::thread_rng();
        for _ in 0..500 {
            let r1 = rng.gen_range(1.0..200.0);
            let r2 = rng.gen_range(1.0..200.0);
            let driven_x: f64 = 100.0 + rng.gen_range(0.0..400.0);
            let wrap = solve_belt_wrap(circle(100.0, r1), circle(driven_x, r2));
            assert_eq!(wrap.is_some(), (driven_x - 100.0).abs() > (r1 - r2).abs());
        }
    }

    #[test]
    fn no_solution_when_driven_is_left_of_driver() {
        assert!(solve_belt_wrap(circle(500.0, 100.0), circle(200.0, 40.0)).is_none());
        assert!(solve_belt_wrap(circle(500.0, 65.0), circle(200.0, 65.0)).is_none());
        // Mirrored pair that is solvable the right way round
        assert!(solve_belt_wrap(circle(200.0, 40.0), circle(500.0, 100.0)).is_some());
    }

    #[test]
    fn equal_radii_are_parallel() {
        let wrap = solve_belt_wrap(circle(200.0, 65.0), circle(500.0, 65.0)).unwrap();
        assert!(!wrap.driver_large_arc);
        assert!(!wrap.driven_large_arc);
        assert!((wrap.tangent_angle() - PI / 2.0).abs() < 1e-12);
        assert!((wrap.driver_top.y - wrap.driven_top.y).abs() < 1e-9);
        assert!((wrap.driver_bottom.y - wrap.driven_bottom.y).abs() < 1e-9);
        assert!((wrap.driver_top.y - 135.0).abs() < 1e-9);
        assert!((wrap.driver_bottom.y - 265.0).abs() < 1e-9);
        assert!((wrap.span_length() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn larger_pulley_wraps_more() {
        let wrap = solve_belt_wrap(circle(200.0, 100.0), circle(500.0, 40.0)).unwrap();
        assert!(wrap.driver_large_arc);
        assert!(!wrap.driven_large_arc);
        assert!(wrap.driver_wrap_angle() > PI);
        assert!(wrap.driven_wrap_angle() < PI);

        let reversed = solve_belt_wrap(circle(200.0, 40.0), circle(500.0, 100.0)).unwrap();
        assert!(!reversed.driver_large_arc);
        assert!(reversed.driven_large_arc);
        assert!(reversed.driven_wrap_angle() > PI);
    }

    #[test]
    fn tangent_points_are_tangent() {
        let driver = circle(150.0, 90.0);
        let driven = circle(520.0, 35.0);
        let wrap = solve_belt_wrap(driver, driven).unwrap();
        assert!((driver.center.distance_to(&wrap.driver_top) - 90.0).abs() < 1e-9);
        assert!((driven.center.distance_to(&wrap.driven_bottom) - 35.0).abs() < 1e-9);

        // The radius at each tangent point is perpendicular to the straight run
        let run = (wrap.driven_top.x - wrap.driver_top.x, wrap.driven_top.y - wrap.driver_top.y);
        let radius = (wrap.driver_top.x - driver.center.x, wrap.driver_top.y - driver.center.y);
        assert!((run.0 * radius.0 + run.1 * radius.1).abs() < 1e-6);
        let radius = (wrap.driven_top.x - driven.center.x, wrap.driven_top.y - driven.center.y);
        assert!((run.0 * radius.0 + run.1 * radius.1).abs() < 1e-6);
        let expected_span = (370.0f64.powi(2) - 55.0f64.powi(2)).sqrt();
        assert!((wrap.span_length() - expected_span).abs() < 1e-9);
    }

    #[test]
    fn path_length_of_equal_pulleys() {
        let wrap = solve_belt_wrap(circle(100.0, 75.0), circle(400.0, 75.0)).unwrap();
        assert!((wrap.path_length() - (600.0 + 150.0 * PI)).abs() < 1e-9);
    }

    #[test]
    fn svg_path_data() {
        let wrap = solve_belt_wrap(circle(200.0, 65.0), circle(500.0, 65.0)).unwrap();
        assert_eq!(wrap.to_svg_path_data(),
                   "M 200.000 135.000 L 500.000 135.000 A 65.000 65.000 0 0 1 500.000 265.000 \
                   L 200.000 265.000 A 65.000 65.000 0 0 1 200.000 135.000");

        let uneven = solve_belt_wrap(circle(200.0, 100.0), circle(500.0, 40.0)).unwrap();
        let path = uneven.to_svg_path_data();
        assert!(path.starts_with("M "));
        assert!(path.contains(" A 40.000 40.000 0 0 1 "));
        assert!(path.contains(" A 100.000 100.000 0 1 1 "));
    }
}
