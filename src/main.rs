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

mod cli;
mod report;
mod settings;

use std::env;
use std::fs::File;
use clap::Parser;
use tracing_subscriber;
use tracing_appender;
use tracing::{info, warn};

use transmission::{calculate, response_curve};
use crate::cli::{Cli, CliError, Command};
use crate::report::Report;
use crate::settings::GlobalSettings;

const LOG_FILENAME: &str = "pulley_sim.log";

fn main() -> Result<(), CliError> {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, LOG_FILENAME);
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let cli = Cli::parse();
    let mut settings = GlobalSettings::load().unwrap_or_else(|e| {
        warn!("Couldn't load settings, using defaults. {}", e.to_string());
        GlobalSettings::default()
    });
    let configuration = cli.overrides.apply(settings.configuration());
    if let Err(e) = configuration.validate() {
        warn!("Invalid configuration {:?}. {}", configuration, e);
        eprintln!("Warning: {}", e);
    }
    if cli.save {
        settings.set_configuration(&configuration);
        settings.write()?;
        info!("Saved configuration to {}.toml", GlobalSettings::CONFIG_FILENAME);
    }
    let results = calculate(&configuration);

    match cli.command.unwrap_or(Command::Report { json: false }) {
        Command::Report { json } => {
            let report = Report::new(&configuration, &results);
            match json {
                true => println!("{}", report.to_json()?),
                false => println!("{}", report.to_text())
            }
        }
        Command::Curve { csv } => {
            let curve = response_curve(&configuration);
            println!("{}", report::curve_table(&curve));
            if let Some(path) = csv {
                report::write_curve_csv(File::create(&path)?, &curve)?;
                info!("Response curve written to {}", path.display());
            }
        }
        Command::Belt => {
            println!("{}", report::belt_description(&configuration));
        }
        Command::Analyze { prompt } => {
            println!("{}", report::analysis_text(&configuration, &results, prompt));
        }
        Command::Animate { frames } => {
            println!("{}", report::animation_text(&configuration, frames, settings.is_playing()));
        }
    }
    Ok(())
}
