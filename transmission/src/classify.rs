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
use serde::Serialize;

/// Ratios above this reduce speed and multiply torque
pub const REDUCER_THRESHOLD: f64 = 1.2;
/// Ratios below this multiply speed and reduce torque
pub const MULTIPLIER_THRESHOLD: f64 = 0.8;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize)]
pub enum RatioCategory {
    Reducer,
    Multiplier,
    Direct
}

impl RatioCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatioCategory::Reducer => "speed reducer",
            RatioCategory::Multiplier => "speed multiplier",
            RatioCategory::Direct => "direct drive"
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            RatioCategory::Reducer => "Gains torque at the cost of speed",
            RatioCategory::Multiplier => "Gains speed at the cost of torque",
            RatioCategory::Direct => "Transmits power with close to a 1:1 relationship"
        }
    }

    pub fn applications(&self) -> &'static [RealWorldApplication] {
        match self {
            RatioCategory::Reducer => &REDUCER_APPLICATIONS,
            RatioCategory::Multiplier => &MULTIPLIER_APPLICATIONS,
            RatioCategory::Direct => &DIRECT_APPLICATIONS
        }
    }
}

impl Display for RatioCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct RealWorldApplication {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str
}

const REDUCER_APPLICATIONS: [RealWorldApplication; 3] = [
    RealWorldApplication {
        title: "Conveyor belt",
        description: "Needs a lot of torque to move heavy loads slowly.",
        icon: "📦"
    },
    RealWorldApplication {
        title: "Winch",
        description: "Maximises pulling force to lift or drag objects.",
        icon: "🏗️"
    },
    RealWorldApplication {
        title: "Bicycle (low gear)",
        description: "Climbing a hill you pedal fast while the wheel turns slowly with a lot of force.",
        icon: "🚲"
    }
];

const MULTIPLIER_APPLICATIONS: [RealWorldApplication; 3] = [
    RealWorldApplication {
        title: "Centrifugal fan",
        description: "Needs high speeds to move large volumes of air.",
        icon: "💨"
    },
    RealWorldApplication {
        title: "Circular saw",
        description: "The blade has to spin very fast to cut cleanly.",
        icon: "🪚"
    },
    RealWorldApplication {
        title: "Wind turbine generator",
        description: "The blades turn slowly but the generator needs to spin fast.",
        icon: "⚡"
    }
];

const DIRECT_APPLICATIONS: [RealWorldApplication; 2] = [
    RealWorldApplication {
        title: "Air compressor (direct drive)",
        description: "Simple power transmission without significantly changing torque or speed.",
        icon: "⚙️"
    },
    RealWorldApplication {
        title: "Car alternator",
        description: "Usually runs at speeds close to the engine during normal driving.",
        icon: "🚗"
    }
];

/// Both thresholds are exclusive so `[0.8, 1.2]` is treated as direct drive
pub fn classify(ratio: f64) -> RatioCategory {
    if ratio > REDUCER_THRESHOLD {
        RatioCategory::Reducer
    } else if ratio < MULTIPLIER_THRESHOLD {
        RatioCategory::Multiplier
    } else {
        RatioCategory::Direct
    }
}
