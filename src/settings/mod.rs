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

use std::fs;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use transmission::{PulleyConfiguration, SystemMode};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GlobalSettings {
    driver_diameter: f64,
    driven_diameter: f64,
    input_rpm: f64,
    input_power: f64,
    center_distance: f64,
    mode: SystemMode,
    is_playing: bool
}

impl GlobalSettings {
    const DRIVER_DIAMETER: &'static str = "driver_diameter";
    const DRIVEN_DIAMETER: &'static str = "driven_diameter";
    const INPUT_RPM: &'static str = "input_rpm";
    const INPUT_POWER: &'static str = "input_power";
    const CENTER_DISTANCE: &'static str = "center_distance";
    const MODE: &'static str = "mode";
    const IS_PLAYING: &'static str = "is_playing";
    pub const CONFIG_FILENAME: &'static str = "pulley-sim-conf";
    const ENV_PREFIX: &'static str = "APP";

    pub fn default() -> Self {
        Self::from_configuration(&PulleyConfiguration::default())
    }

    pub fn from_configuration(configuration: &PulleyConfiguration) -> Self {
        GlobalSettings {
            driver_diameter: configuration.driver_diameter,
            driven_diameter: configuration.driven_diameter,
            input_rpm: configuration.input_rpm,
            input_power: configuration.input_power,
            center_distance: configuration.center_distance,
            mode: configuration.mode,
            is_playing: true
        }
    }

    fn builder_with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = PulleyConfiguration::default();
        Config::builder()
            .set_default(GlobalSettings::DRIVER_DIAMETER, defaults.driver_diameter)?
            .set_default(GlobalSettings::DRIVEN_DIAMETER, defaults.driven_diameter)?
            .set_default(GlobalSettings::INPUT_RPM, defaults.input_rpm)?
            .set_default(GlobalSettings::INPUT_POWER, defaults.input_power)?
            .set_default(GlobalSettings::CENTER_DISTANCE, defaults.center_distance)?
            .set_default(GlobalSettings::MODE, defaults.mode.as_str())?
            .set_default(GlobalSettings::IS_PLAYING, true)
    }

    pub fn load() -> Result<Self, ConfigError> {
        return match GlobalSettings::builder_with_defaults()?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix(GlobalSettings::ENV_PREFIX))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let settings = GlobalSettings::builder_with_defaults()?.build()?;
                let ret: GlobalSettings = settings.try_deserialize()?;
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn configuration(&self) -> PulleyConfiguration {
        PulleyConfiguration::new(self.driver_diameter,
                                 self.driven_diameter,
                                 self.input_rpm,
                                 self.input_power,
                                 self.center_distance,
                                 self.mode)
    }

    pub fn set_configuration(&mut self, configuration: &PulleyConfiguration) {
        self.driver_diameter = configuration.driver_diameter;
        self.driven_diameter = configuration.driven_diameter;
        self.input_rpm = configuration.input_rpm;
        self.input_power = configuration.input_power;
        self.center_distance = configuration.center_distance;
        self.mode = configuration.mode;
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}
