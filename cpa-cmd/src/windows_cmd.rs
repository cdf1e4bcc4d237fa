//! Planting-window recommendation from a rainfall history file.

use crate::crops::load_durations;
use anyhow::Context;
use chrono::{Local, NaiveDate};
use cpa_core::{date_range::DateRange, rainfall::DailySample};
use cpa_data::{recommend_planting_windows_with, WindowConfig};
use cpa_utils::dates::parse_date;
use log::info;
use serde::Serialize;

/// Where the window size comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowSize {
    /// Look the crop's planting duration up
    Crop(String),
    /// Use this many days directly
    Days(u32),
}

#[derive(Debug, Serialize)]
pub struct WindowReport {
    pub crop: Option<String>,
    pub window_size: u32,
    pub today: NaiveDate,
    pub config: WindowConfig,
    pub windows: Vec<DateRange>,
}

/// Read a rainfall history from `rainfall_csv` and recommend planting windows.
pub fn windows_report(
    rainfall_csv: &str,
    size: WindowSize,
    durations_csv: Option<&str>,
    today: Option<&str>,
    config: &WindowConfig,
) -> anyhow::Result<WindowReport> {
    let (crop, window_size) = match size {
        WindowSize::Days(days) => (None, days),
        WindowSize::Crop(crop) => {
            let durations = load_durations(durations_csv)?;
            let days = durations.duration_for(&crop)?;
            (Some(crop), days)
        }
    };
    let today = match today {
        Some(s) => parse_date(s).with_context(|| format!("Invalid --today date: {s}"))?,
        None => Local::now().naive_local().date(),
    };

    let body = std::fs::read_to_string(rainfall_csv)
        .with_context(|| format!("Failed to read rainfall history from {rainfall_csv}"))?;
    let history = DailySample::parse_csv(&body)?;
    info!(
        "Loaded {} rainfall samples from {}; window size {} days from {}",
        history.len(),
        rainfall_csv,
        window_size,
        today
    );

    let windows = recommend_planting_windows_with(&history, window_size, today, config)?;
    Ok(WindowReport {
        crop,
        window_size,
        today,
        config: *config,
        windows,
    })
}

/// Recommend planting windows and print them as JSON.
pub fn run_windows(
    rainfall_csv: &str,
    size: WindowSize,
    durations_csv: Option<&str>,
    today: Option<&str>,
    config: &WindowConfig,
) -> anyhow::Result<()> {
    let report = windows_report(rainfall_csv, size, durations_csv, today, config)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
