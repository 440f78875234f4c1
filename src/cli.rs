use crate::models::{CropType, SoilType};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "fertadvisor",
    version,
    about = "Rule-based fertilizer recommendations from soil readings"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Display language (english, kannada)
    #[arg(short, long, global = true)]
    pub lang: Option<String>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend a fertilizer for one set of readings
    Recommend {
        /// Nitrogen (ppm)
        #[arg(short = 'n', long, allow_negative_numbers = true)]
        nitrogen: f64,
        /// Phosphorous (ppm)
        #[arg(short = 'p', long, allow_negative_numbers = true)]
        phosphorous: f64,
        /// Potassium (ppm)
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        potassium: f64,
        /// Temperature (°C)
        #[arg(short = 't', long, allow_negative_numbers = true)]
        temperature: f64,
        /// Relative humidity (%)
        #[arg(short = 'H', long, allow_negative_numbers = true)]
        humidity: f64,
        /// Soil moisture (%)
        #[arg(short = 'm', long, allow_negative_numbers = true)]
        moisture: f64,
        /// Soil type (Loamy, Sandy, Clayey, Silt, Peat)
        #[arg(long, value_parser = parse_soil)]
        soil: SoilType,
        /// Crop type (Rice, Maize, Wheat, Millet, Cotton, Pulses, Vegetables)
        #[arg(long, value_parser = parse_crop)]
        crop: CropType,
        /// Print {fertilizer, reason} as JSON
        #[arg(long)]
        json: bool,
    },
    /// Prompt for each reading, then recommend
    Ask,
    /// Evaluate a JSON array of requests
    Batch {
        /// Input file
        file: PathBuf,
        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List the selection rules, adjustments and templates
    Rules,
    /// Show the reference model accuracies
    Models,
    /// Run the HTTP API
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    /// Re-run interactive setup
    Init,
    /// Validate config and label tables
    Check,
}

fn parse_soil(s: &str) -> Result<SoilType, String> {
    SoilType::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = SoilType::all().iter().map(|v| v.as_str()).collect();
        format!("unknown soil type '{}' (expected one of {})", s, valid.join(", "))
    })
}

fn parse_crop(s: &str) -> Result<CropType, String> {
    CropType::from_str(s).ok_or_else(|| {
        let valid: Vec<&str> = CropType::all().iter().map(|v| v.as_str()).collect();
        format!("unknown crop type '{}' (expected one of {})", s, valid.join(", "))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recommend_arguments() {
        let cli = Cli::try_parse_from([
            "fertadvisor", "recommend", "-n", "10", "-p", "50", "-k", "50", "-t", "25", "-H",
            "60", "-m", "50", "--soil", "sandy", "--crop", "Maize", "--json",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Recommend {
                nitrogen,
                soil,
                crop,
                json,
                ..
            }) => {
                assert_eq!(nitrogen, 10.0);
                assert_eq!(soil, SoilType::Sandy);
                assert_eq!(crop, CropType::Maize);
                assert!(json);
            }
            _ => panic!("expected recommend"),
        }
    }

    #[test]
    fn negative_reading_reaches_validation() {
        let cli = Cli::try_parse_from([
            "fertadvisor", "recommend", "-n", "-5", "-p", "50", "-k", "50", "-t", "25", "-H",
            "60", "-m", "50", "--soil", "Loamy", "--crop", "Rice",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Recommend { nitrogen, .. }) if nitrogen == -5.0
        ));
    }

    #[test]
    fn unknown_crop_rejected() {
        let result = Cli::try_parse_from([
            "fertadvisor", "recommend", "-n", "10", "-p", "50", "-k", "50", "-t", "25", "-H",
            "60", "-m", "50", "--soil", "Loamy", "--crop", "Barley",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn no_command_launches_tui() {
        let cli = Cli::try_parse_from(["fertadvisor", "-vv", "--lang", "kn"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.lang.as_deref(), Some("kn"));
    }

    #[test]
    fn serve_overrides() {
        let cli = Cli::try_parse_from(["fertadvisor", "serve", "--port", "9000"]).unwrap();
        match cli.command {
            Some(Commands::Serve { host, port }) => {
                assert!(host.is_none());
                assert_eq!(port, Some(9000));
            }
            _ => panic!("expected serve"),
        }
    }
}
