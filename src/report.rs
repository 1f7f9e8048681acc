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

use std::io;
use itertools::Itertools;
use serde::Serialize;
use transmission::analysis::{analyze, build_prompt, OfflineAnalyst};
use transmission::animation::{advance, AnimationState, REFERENCE_FRAME_RATE};
use transmission::geometry::SceneLayout;
use transmission::{classify, CurvePoint, PulleyConfiguration, RatioCategory, RealWorldApplication, SystemMode, TransmissionStats};
use utils::numeric::format_number;
use utils::units::rpm_to_rad_per_sec;

#[derive(Debug, Serialize)]
pub struct Report {
    pub configuration: PulleyConfiguration,
    pub results: TransmissionStats,
    pub category: RatioCategory,
    pub applications: &'static [RealWorldApplication]
}

impl Report {
    pub fn new(configuration: &PulleyConfiguration, results: &TransmissionStats) -> Report {
        let category = classify(results.ratio);
        Report {
            configuration: *configuration,
            results: *results,
            category,
            applications: category.applications()
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_text(&self) -> String {
        let configuration = &self.configuration;
        let results = &self.results;
        let mut lines: Vec<String> = Vec::new();
        lines.push(format!("System: {}", configuration.mode.description()));
        lines.push(String::new());
        lines.push("Input (driver)".to_string());
        lines.push(format!("  Speed:              {} RPM", format_number(configuration.input_rpm, 2)));
        lines.push(format!("  Power:              {} W", format_number(configuration.input_power, 2)));
        lines.push(format!("  Torque:             {} Nm", format_number(results.input_torque, 2)));
        lines.push(format!("  Diameter:           {} mm", format_number(configuration.driver_diameter, 2)));
        lines.push(String::new());
        lines.push("Output (driven)".to_string());
        lines.push(format!("  Speed:              {} RPM", format_number(results.output_rpm, 2)));
        lines.push(format!("  Torque:             {} Nm", format_number(results.output_torque, 2)));
        lines.push(format!("  Power:              {} W", format_number(results.output_power(), 2)));
        lines.push(format!("  Ratio:              1:{}", format_number(results.ratio, 2)));
        lines.push(format!("  Mechanical adv.:    {}x", format_number(results.mechanical_advantage, 2)));
        lines.push(String::new());
        lines.push("General".to_string());
        lines.push(format!("  Tangential speed:   {} m/s", format_number(results.tangential_velocity, 2)));
        lines.push(format!("  Input shaft speed:  {} rad/s", format_number(rpm_to_rad_per_sec(configuration.input_rpm), 3)));
        if configuration.mode == SystemMode::Belt {
            lines.push(format!("  Belt length:        {} mm", format_number(results.belt_length, 2)));
        }
        lines.push(String::new());
        lines.push(format!("Classification: {} ({})", self.category, self.category.summary()));
        lines.push(format!("Applications: {}",
                           self.applications.iter().map(|a| format!("{} {}", a.icon, a.title)).join(", ")));
        lines.join("\n")
    }
}

pub fn curve_table(curve: &[CurvePoint]) -> String {
    let header = format!("{:>12} {:>14} {:>14}", "Driven (mm)", "Output RPM", "Torque (Nm)");
    let rows = curve.iter().map(|point| {
        format!("{:>12} {:>14} {:>14}",
                format_number(point.driven_diameter, 0),
                format_number(point.output_rpm, 2),
                format_number(point.output_torque, 2))
    });
    std::iter::once(header).chain(rows).join("\n")
}

pub fn write_curve_csv<W: io::Write>(writer: W, curve: &[CurvePoint]) -> csv::Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for point in curve {
        csv_writer.serialize(point)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn belt_description(configuration: &PulleyConfiguration) -> String {
    if configuration.mode == SystemMode::Friction {
        return "Friction mode: the pulleys touch so there is no belt".to_string();
    }
    match SceneLayout::from_config(configuration).belt_wrap() {
        Some(wrap) => {
            format!("{}\nWrap angles: driver {}°, driven {}°\nScene path length: {}",
                    wrap.to_svg_path_data(),
                    format_number(wrap.driver_wrap_angle().to_degrees(), 1),
                    format_number(wrap.driven_wrap_angle().to_degrees(), 1),
                    format_number(wrap.path_length(), 2))
        }
        None => "No belt path: the pulleys are too close together".to_string()
    }
}

pub fn analysis_text(configuration: &PulleyConfiguration, results: &TransmissionStats, prompt_only: bool) -> String {
    match prompt_only {
        true => build_prompt(configuration, results),
        false => analyze(&OfflineAnalyst, configuration, results)
    }
}

pub fn animation_text(configuration: &PulleyConfiguration, frames: u32, is_playing: bool) -> String {
    let mut state = AnimationState::default();
    if is_playing {
        let frame_time = 1.0 / REFERENCE_FRAME_RATE;
        for _ in 0..frames {
            state = advance(state, frame_time, configuration);
        }
    }
    format!("After {} frames{}: driver {}°, driven {}°, belt offset {}",
            frames,
            if is_playing { "" } else { " (paused)" },
            format_number(state.driver_rotation, 2),
            format_number(state.driven_rotation, 2),
            format_number(state.belt_offset, 2))
}
