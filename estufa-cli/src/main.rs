//! Estufa — fuzzy environment controller
//! Command-line interface for running inference cycles and inspecting profiles

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use estufa_core::Level;
use estufa_decision::{infer, Inference, SensorReadings};
use estufa_fuzzy::SensorVariable;
use std::io::{self, BufRead};

#[derive(Parser)]
#[command(name = "estufa")]
#[command(author = "Silvano Neto <dev@silvanoneto.com>")]
#[command(version = "2026.8.6")]
#[command(about = "Estufa - fuzzy environment controller", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one inference cycle from four sensor readings
    Infer {
        /// Air temperature in °C
        #[arg(short = 't', long)]
        temperature: f64,

        /// Relative air humidity (0-100)
        #[arg(short = 'u', long)]
        humidity: f64,

        /// Light level in lux
        #[arg(short = 'l', long)]
        light: f64,

        /// Soil moisture (0-100)
        #[arg(short = 's', long)]
        soil: f64,

        /// Print the full inference as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-run inference for every line of readings on stdin
    ///
    /// Each line carries four whitespace-separated values:
    /// temperature, humidity, light, soil moisture.
    Watch {
        /// Print one JSON document per line instead of tables
        #[arg(long)]
        json: bool,
    },

    /// Print the membership profiles of the four sensor variables
    Profiles,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Infer {
            temperature,
            humidity,
            light,
            soil,
            json,
        } => {
            let readings = SensorReadings::new(temperature, humidity, light, soil);
            let result = infer(&readings);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&result).context("serializing inference")?
                );
            } else {
                render(&result);
            }
            Ok(())
        }
        Commands::Watch { json } => watch(json),
        Commands::Profiles => {
            print_profiles();
            Ok(())
        }
    }
}

/// Lê quádruplas de leituras do stdin e recomputa a inferência por linha
fn watch(json: bool) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match parse_readings(trimmed) {
            Ok(readings) => {
                let result = infer(&readings);
                if json {
                    println!(
                        "{}",
                        serde_json::to_string(&result).context("serializing inference")?
                    );
                } else {
                    render(&result);
                }
            }
            Err(err) => eprintln!("{} {}", "warning:".yellow().bold(), err),
        }
    }
    Ok(())
}

/// Interpreta uma linha "temperatura umidade luz solo"
fn parse_readings(line: &str) -> Result<SensorReadings> {
    let values: Vec<f64> = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .with_context(|| format!("invalid number: {:?}", token))
        })
        .collect::<Result<_>>()?;

    if values.len() != 4 {
        bail!("expected 4 readings (temperature humidity light soil), got {}", values.len());
    }

    Ok(SensorReadings::new(values[0], values[1], values[2], values[3]))
}

/// Renderiza leituras, tabela de pertinências e tabela de decisões
fn render(result: &Inference) {
    println!();
    println!("{}", "Readings".bold());
    for variable in SensorVariable::ALL {
        println!(
            "  {:<14} {:>10} {}",
            variable.as_str(),
            format!("{:.1}", result.readings.get(variable)),
            variable.unit().dimmed()
        );
    }

    println!();
    println!("{}", "Membership degrees".bold());
    print!("  {:<14}", "variable");
    for level in Level::ALL {
        print!(" {:>10}", level.as_str());
    }
    println!(" {:>10}", "dominant");

    for variable in SensorVariable::ALL {
        let vector = result.membership(variable);
        print!("  {:<14}", variable.as_str());
        for (level, degree) in vector.iter() {
            let cell = format!("{:>10}", format!("{:.2}", degree));
            if level == vector.dominant() && degree > 0.0 {
                print!(" {}", cell.green().bold());
            } else {
                print!(" {}", cell);
            }
        }
        println!(" {}", format!("{:>10}", vector.dominant().as_str()).cyan());
    }

    println!();
    println!("{}", "Decisions".bold());
    for (actuator, level) in result.decision.iter() {
        println!(
            "  {:<14} {} {}",
            actuator.as_str(),
            format!("{:>10}", level.as_str()).green().bold(),
            level.description().dimmed()
        );
    }
    println!();
}

/// Imprime as formas e pontos de quebra dos quatro perfis
fn print_profiles() {
    for variable in SensorVariable::ALL {
        println!();
        println!("{} ({})", variable.as_str().bold(), variable.unit());

        let profile = variable.profile();
        for level in Level::ALL {
            let shape = profile.shape(level);
            let points = shape
                .breakpoints()
                .iter()
                .map(|point| point.to_string())
                .collect::<Vec<_>>()
                .join(", ");
            println!("  {:<10} {:<18} [{}]", level.as_str(), shape.kind(), points);
        }
    }
    println!();
}
