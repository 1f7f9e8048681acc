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

use std::path::PathBuf;
use clap::{Args, Parser, Subcommand};
use tracing::debug;
use transmission::{PulleyConfiguration, SystemMode};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("io error. `{0}`")]
    IoError(#[from] std::io::Error),
    #[error("settings error. `{0}`")]
    SettingsError(#[from] config::ConfigError),
    #[error("csv error. `{0}`")]
    CsvError(#[from] csv::Error),
    #[error("json encoding error. `{0}`")]
    JsonError(#[from] serde_json::Error)
}

#[derive(Parser, Debug)]
#[command(name = "pulley-sim", version, about = "Friction wheel and belt drive transmission calculator")]
pub struct Cli {
    #[command(flatten)]
    pub overrides: ConfigurationOverrides,

    /// Store the configuration used by this run as the new default
    #[arg(long, global = true)]
    pub save: bool,

    #[command(subcommand)]
    pub command: Option<Command>
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the calculated results for the configuration
    Report {
        /// Print as JSON instead of text
        #[arg(long)]
        json: bool
    },
    /// Print output speed and torque for driven diameters from 50mm to 400mm
    Curve {
        /// Also write the curve to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>
    },
    /// Print the SVG path of the belt wrapped around both pulleys
    Belt,
    /// Print a plain language analysis of the configuration
    Analyze {
        /// Print the request that would be sent to a text generation service instead
        #[arg(long)]
        prompt: bool
    },
    /// Run the pulley animation for a number of 60Hz frames and print where it ends up
    Animate {
        #[arg(long, default_value_t = 60)]
        frames: u32
    }
}

/// Values given on the command line that replace the stored configuration
#[derive(Args, Debug, Default, Clone, PartialEq)]
pub struct ConfigurationOverrides {
    /// Driver pulley diameter (mm)
    #[arg(long, global = true)]
    pub driver: Option<f64>,
    /// Driven pulley diameter (mm)
    #[arg(long, global = true)]
    pub driven: Option<f64>,
    /// Input speed (RPM)
    #[arg(long, global = true)]
    pub rpm: Option<f64>,
    /// Input power (W)
    #[arg(long, global = true)]
    pub power: Option<f64>,
    /// Center distance (mm), belt mode only
    #[arg(long, global = true)]
    pub distance: Option<f64>,
    /// `friction` or `belt`
    #[arg(long, global = true)]
    pub mode: Option<SystemMode>,
    /// Limit every input to the range the simulator allows
    #[arg(long, global = true)]
    pub clamp: bool
}

impl ConfigurationOverrides {
    pub fn apply(&self, base: PulleyConfiguration) -> PulleyConfiguration {
        let mut configuration = base;
        if let Some(driver) = self.driver {
            configuration.driver_diameter = driver;
        }
        if let Some(driven) = self.driven {
            configuration.driven_diameter = driven;
        }
        if let Some(rpm) = self.rpm {
            configuration.input_rpm = rpm;
        }
        if let Some(power) = self.power {
            configuration.input_power = power;
        }
        if let Some(mode) = self.mode {
            configuration = configuration.with_mode(mode);
        }
        if let Some(distance) = self.distance {
            configuration.center_distance = distance;
        }
        if self.clamp {
            configuration = configuration.clamped();
        }
        debug!("Using configuration {:?}", configuration);
        configuration
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use transmission::{PulleyConfiguration, SystemMode};
    use crate::cli::{Cli, CliError, Command, ConfigurationOverrides};

    #[test]
    fn parse_overrides_and_command() {
        let cli = Cli::try_parse_from(["pulley-sim", "curve", "--driver", "150", "--mode", "belt", "--csv", "out.csv"]).unwrap();
        assert_eq!(cli.overrides.driver, Some(150.0));
        assert_eq!(cli.overrides.mode, Some(SystemMode::Belt));
        assert_eq!(cli.command, Some(Command::Curve { csv: Some("out.csv".into()) }));

        let default_cli = Cli::try_parse_from(["pulley-sim"]).unwrap();
        assert_eq!(default_cli.command, None);
        assert!(!default_cli.save);
        assert_eq!(default_cli.overrides, ConfigurationOverrides::default());

        assert!(Cli::try_parse_from(["pulley-sim", "--mode", "chain"]).is_err());
    }

    #[test]
    fn overrides_replace_fields() {
        let overrides = ConfigurationOverrides {
            driven: Some(250.0),
            rpm: Some(1450.0),
            mode: Some(SystemMode::Belt),
            ..Default::default()
        };
        let configuration = overrides.apply(PulleyConfiguration::default());
        assert_eq!(configuration.driver_diameter, 100.0);
        assert_eq!(configuration.driven_diameter, 250.0);
        assert_eq!(configuration.input_rpm, 1450.0);
        assert_eq!(configuration.mode, SystemMode::Belt);
        // Switching to belt mode opened the gap up to the sum of the diameters
        assert_eq!(configuration.center_distance, 350.0);
    }

    #[test]
    fn explicit_distance_wins_over_mode_switch() {
        let overrides = ConfigurationOverrides {
            mode: Some(SystemMode::Belt),
            distance: Some(200.0),
            clamp: true,
            ..Default::default()
        };
        let configuration = overrides.apply(PulleyConfiguration::default());
        assert_eq!(configuration.center_distance, 200.0);

        let too_close = ConfigurationOverrides { distance: Some(20.0), ..overrides };
        assert_eq!(too_close.apply(PulleyConfiguration::default()).center_distance, 160.0);
    }

    #[test]
    fn io_error_keeps_cause() {
        let error = CliError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "curve.csv missing"));
        assert_eq!(error.to_string(), "io error. `curve.csv missing`");
    }
}
