//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

/// ChemLab — chemistry experiment calculators.
#[derive(Parser, Debug)]
#[command(name = "chemlab", version, about)]
pub struct AppConfig {
    /// Quiet mode (only output the primary value).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Experiment to run.
    #[command(subcommand)]
    pub experiment: Experiment,
}

/// Experiment subcommands.
#[derive(Subcommand, Debug)]
pub enum Experiment {
    /// Mix a strong acid and base and report the resulting pH.
    AcidBase {
        /// Acid label (display only).
        #[arg(long, default_value = "HCl")]
        acid: String,

        /// Base label (display only).
        #[arg(long, default_value = "NaOH")]
        base: String,

        /// Acid molarity in mol/L.
        #[arg(long)]
        acid_molarity: f64,

        /// Acid volume in mL.
        #[arg(long)]
        acid_volume: f64,

        /// Base molarity in mol/L.
        #[arg(long)]
        base_molarity: f64,

        /// Base volume in mL.
        #[arg(long)]
        base_volume: f64,
    },

    /// Dilute a solution and report the final concentration.
    Dilution {
        /// Solute label (display only).
        #[arg(long, default_value = "Solution")]
        solute: String,

        /// Initial concentration.
        #[arg(long)]
        c1: f64,

        /// Initial volume.
        #[arg(long)]
        v1: f64,

        /// Final volume.
        #[arg(long)]
        v2: f64,
    },

    /// Solve the ideal gas law for volume.
    GasLaw {
        /// Pressure in atm.
        #[arg(short, long)]
        pressure: f64,

        /// Amount of gas in moles.
        #[arg(short = 'n', long)]
        moles: f64,

        /// Temperature in kelvin.
        #[arg(short, long)]
        temperature: f64,
    },
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
