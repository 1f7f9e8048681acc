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

//! Steady state model of a two pulley transmission, coupled either by direct friction
//! contact or by a belt, plus the geometry needed to draw it.

pub mod error;
pub mod config;
pub mod model;
pub mod classify;
pub mod geometry;
pub mod animation;
pub mod analysis;

pub use config::{PulleyConfiguration, SystemMode};
pub use model::{calculate, response_curve, CurvePoint, TransmissionStats};
pub use classify::{classify, RatioCategory, RealWorldApplication};
pub use error::{Error, ErrorKind, Result};
