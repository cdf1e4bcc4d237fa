//! Command implementations for the CPA CLI.
//!
//! Provides subcommands for ranking classifier output, recommending
//! planting windows from a rainfall history, and listing supported crops.

use clap::Subcommand;
use cpa_data::{ranking, windows};

pub mod crops;
pub mod rank;
pub mod windows_cmd;

#[derive(Subcommand)]
pub enum Command {
    /// Rank classifier output into a short list of suitable crops
    Rank {
        /// Classifier output CSV (`label,probability`, in the model's class order)
        #[arg(short = 'p', long)]
        probabilities_csv: String,

        /// How many of the most probable crops to consider
        #[arg(long, default_value_t = ranking::DEFAULT_TOP_K)]
        top_k: usize,

        /// Crops must score strictly above this percentage
        #[arg(long, default_value_t = ranking::DEFAULT_MIN_CONFIDENCE)]
        min_confidence: u8,
    },

    /// Recommend planting date ranges from a daily rainfall history
    Windows {
        /// Rainfall history CSV (`date,rainfall`, dates as YYYY-MM-DD)
        #[arg(short = 'r', long)]
        rainfall_csv: String,

        /// Crop name; its planting duration sets the window size
        #[arg(short = 'c', long, required_unless_present = "window_size")]
        crop: Option<String>,

        /// Window size in days, instead of looking up a crop
        #[arg(short = 'w', long, conflicts_with = "crop")]
        window_size: Option<u32>,

        /// Planting-duration CSV overriding the built-in table
        #[arg(long)]
        durations: Option<String>,

        /// Reference date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        today: Option<String>,

        /// Number of windows to recommend
        #[arg(long, default_value_t = windows::DEFAULT_NUM_WINDOWS)]
        num_windows: usize,

        /// Extra days kept clear on each side of a chosen window
        #[arg(long, default_value_t = windows::DEFAULT_MIN_DAYS_BETWEEN)]
        min_days_between: u32,
    },

    /// List the crops with a known planting duration
    Crops {
        /// Planting-duration CSV overriding the built-in table
        #[arg(long)]
        durations: Option<String>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Rank {
            probabilities_csv,
            top_k,
            min_confidence,
        } => {
            let config = ranking::RankingConfig {
                top_k,
                min_confidence,
            };
            rank::run_rank(&probabilities_csv, &config)
        }
        Command::Windows {
            rainfall_csv,
            crop,
            window_size,
            durations,
            today,
            num_windows,
            min_days_between,
        } => {
            let config = windows::WindowConfig {
                num_windows,
                min_days_between,
                ..windows::WindowConfig::default()
            };
            let size = match window_size {
                Some(days) => windows_cmd::WindowSize::Days(days),
                None => windows_cmd::WindowSize::Crop(crop.unwrap_or_default()),
            };
            windows_cmd::run_windows(
                &rainfall_csv,
                size,
                durations.as_deref(),
                today.as_deref(),
                &config,
            )
        }
        Command::Crops { durations } => crops::run_crops(durations.as_deref()),
    }
}
