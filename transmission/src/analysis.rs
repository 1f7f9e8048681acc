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

use tracing::{error, info};
use utils::numeric::format_number;

use crate::classify::{classify, RatioCategory};
use crate::config::{PulleyConfiguration, SystemMode};
use crate::model::TransmissionStats;

/// Upper bound on the length of the requested analysis
pub const MAX_ANALYSIS_WORDS: usize = 150;
pub const NO_ANALYSIS_MESSAGE: &str = "Couldn't generate an analysis right now.";
pub const SERVICE_ERROR_MESSAGE: &str = "Error connecting to the analysis service. Please check your API key.";
/// Belt speed (m/s) above which common V-belts are no longer rated
pub const TYPICAL_MAX_BELT_SPEED: f64 = 30.0;

#[derive(thiserror::Error, Debug)]
pub enum ServiceError {
    #[error("network error. `{0}`")]
    Network(String),
    #[error("authentication failed")]
    Authentication,
    #[error("quota exceeded")]
    Quota,
    #[error("empty response")]
    EmptyResponse,
    #[error("analysis service error: `{0}`")]
    Other(String)
}

/// Something that can describe a transmission in plain language
pub trait NarrativeAnalyst {
    fn summarize(&self, config: &PulleyConfiguration, stats: &TransmissionStats) -> Result<String, ServiceError>;
}

/// Build the request sent to a text generation service
pub fn build_prompt(config: &PulleyConfiguration, stats: &TransmissionStats) -> String {
    let mut lines: Vec<String> = vec![
        "Act as an expert mechanical engineering teacher. Analyse this pulley system configuration:".to_string(),
        String::new(),
        format!("System type: {}", config.mode.description()),
        format!("Driver diameter (input): {} mm", config.driver_diameter),
        format!("Driven diameter (output): {} mm", config.driven_diameter),
        format!("Input speed: {} RPM", config.input_rpm),
        format!("Input power: {} W", config.input_power),
        String::new(),
        "Calculated results:".to_string(),
        format!("Transmission ratio: {:.2}:1", stats.ratio),
        format!("Output speed: {:.2} RPM", stats.output_rpm),
        format!("Output torque: {:.2} Nm", stats.output_torque),
        format!("Tangential velocity: {:.2} m/s", stats.tangential_velocity)
    ];
    if config.mode == SystemMode::Belt {
        lines.push(format!("Belt length: {:.2} mm", stats.belt_length));
    }
    lines.push(String::new());
    lines.push(format!("Please give a brief analysis (max {} words) covering:", MAX_ANALYSIS_WORDS));
    lines.push("1. The type of mechanical advantage (speed or force multiplier?).".to_string());
    lines.push("2. A practical comment on whether this configuration is efficient.".to_string());
    lines.push("3. For friction wheels mention the risk of slipping. For a belt mention the importance of tension.".to_string());
    lines.push("4. A safety measure based on the tangential velocity.".to_string());
    lines.join("\n")
}

/// Ask `analyst` for an analysis. Always returns displayable text: failures are logged
/// and replaced with a fixed message, and nothing is retried
pub fn analyze(analyst: &dyn NarrativeAnalyst, config: &PulleyConfiguration, stats: &TransmissionStats) -> String {
    match analyst.summarize(config, stats) {
        Ok(text) if text.trim().is_empty() => {
            info!("Analysis service returned no text");
            NO_ANALYSIS_MESSAGE.to_string()
        }
        Ok(text) => text,
        Err(ServiceError::EmptyResponse) => {
            info!("Analysis service returned no text");
            NO_ANALYSIS_MESSAGE.to_string()
        }
        Err(e) => {
            error!("Analysis service error. {}", e.to_string());
            SERVICE_ERROR_MESSAGE.to_string()
        }
    }
}

/// Rule based analyst that works without any external service
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineAnalyst;

impl NarrativeAnalyst for OfflineAnalyst {
    fn summarize(&self, config: &PulleyConfiguration, stats: &TransmissionStats) -> Result<String, ServiceError> {
        let category = classify(stats.ratio);
        let output_rpm = format_number(stats.output_rpm, 2);
        let output_torque = format_number(stats.output_torque, 2);
        let mut sentences: Vec<String> = Vec::new();
        sentences.push(format!("With a {}:1 ratio this {} is a {}.",
                               format_number(stats.ratio, 2), config.mode.description().to_lowercase(), category));
        sentences.push(match category {
            RatioCategory::Reducer => format!("The output turns at {} RPM but delivers {} Nm, multiplying the input torque by {}.",
                                              output_rpm, output_torque, format_number(stats.mechanical_advantage, 2)),
            RatioCategory::Multiplier => format!("The output reaches {} RPM while torque drops to {} Nm.",
                                                 output_rpm, output_torque),
            RatioCategory::Direct => format!("Speed and torque stay close to the input at {} RPM and {} Nm.",
                                             output_rpm, output_torque)
        });
        sentences.push(format!("The figures assume no losses so all {} W reach the output; a real drive delivers somewhat less.",
                               format_number(config.input_power, 0)));
        sentences.push(match config.mode {
            SystemMode::Friction => "Friction wheels rely on contact pressure: too little and they slip under load.".to_string(),
            SystemMode::Belt => format!("Keep the {} mm belt correctly tensioned to avoid slip and premature wear.",
                                        format_number(stats.belt_length, 0))
        });
        let mut safety = format!("The driver rim moves at {} m/s so the pulleys should be guarded",
                                 format_number(stats.tangential_velocity, 2));
        if config.mode == SystemMode::Belt && stats.tangential_velocity > TYPICAL_MAX_BELT_SPEED {
            safety.push_str(&format!(", and that is above the {} m/s most belts are rated for", TYPICAL_MAX_BELT_SPEED));
        }
        safety.push('.');
        sentences.push(safety);
        Ok(sentences.join(" "))
    }
}
