use cpa_core::error::{AdvisorError, Result};
use cpa_core::rainfall::DayOfYearAverage;
use cpa_utils::dates::MAX_DAY_OF_YEAR;
use log::debug;
use serde::{Deserialize, Serialize};

/// Number of planting windows to recommend.
pub const DEFAULT_NUM_WINDOWS: usize = 3;

/// Extra days kept clear on each side of a chosen window.
pub const DEFAULT_MIN_DAYS_BETWEEN: u32 = 30;

/// Length of the displayed date range, independent of the crop.
pub const DEFAULT_DISPLAY_SPAN_DAYS: u32 = 14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub num_windows: usize,
    pub min_days_between: u32,
    pub display_span_days: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            num_windows: DEFAULT_NUM_WINDOWS,
            min_days_between: DEFAULT_MIN_DAYS_BETWEEN,
            display_span_days: DEFAULT_DISPLAY_SPAN_DAYS,
        }
    }
}

/// Trailing rainfall total for the window ending on `day_of_year`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingWindowScore {
    pub day_of_year: u32,
    pub window_sum: f64,
}

/// A selected window, identified by the day its trailing sum ends on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantingWindow {
    pub anchor_day: u32,
    pub score: f64,
}

/// Trailing sums of `window_size` consecutive entries, one per entry.
///
/// The first `window_size - 1` entries sum whatever precedes them. The sum
/// never wraps around the year boundary, so a window ending on day 5 only
/// sees days 1 through 5.
pub fn rolling_window_scores(
    averages: &[DayOfYearAverage],
    window_size: u32,
) -> Result<Vec<RollingWindowScore>> {
    if window_size == 0 {
        return Err(AdvisorError::InvalidInput(
            "window size must be at least one day".to_string(),
        ));
    }
    let size = window_size as usize;
    if size > averages.len() {
        return Err(AdvisorError::InsufficientData(format!(
            "a {window_size}-day window needs at least {window_size} days of rainfall, found {}",
            averages.len()
        )));
    }
    if let Some(pair) = averages
        .windows(2)
        .find(|pair| pair[0].day_of_year >= pair[1].day_of_year)
    {
        return Err(AdvisorError::InvalidInput(format!(
            "day-of-year averages must be unique and ascending (day {} before day {})",
            pair[0].day_of_year, pair[1].day_of_year
        )));
    }

    Ok(averages
        .iter()
        .enumerate()
        .map(|(i, average)| {
            let start = (i + 1).saturating_sub(size);
            RollingWindowScore {
                day_of_year: average.day_of_year,
                window_sum: averages[start..=i].iter().map(|a| a.average_rainfall).sum(),
            }
        })
        .collect())
}

/// Greedily pick up to `num_windows` of the highest-scoring, non-overlapping windows.
///
/// Each pick takes the highest remaining score (the earliest day on ties)
/// and then rules out every day within `window_size + min_days_between` of
/// it. Selection stops early once nothing is left to pick.
pub fn select_planting_windows(
    scores: &[RollingWindowScore],
    window_size: u32,
    config: &WindowConfig,
) -> Vec<PlantingWindow> {
    let mut eligible = vec![true; scores.len()];
    let mut selected: Vec<PlantingWindow> = Vec::with_capacity(config.num_windows);
    let radius = window_size.saturating_add(config.min_days_between);

    while selected.len() < config.num_windows {
        let mut best: Option<usize> = None;
        for (i, score) in scores.iter().enumerate() {
            if !eligible[i] {
                continue;
            }
            match best {
                Some(b) if scores[b].window_sum >= score.window_sum => {}
                _ => best = Some(i),
            }
        }
        let Some(best) = best else {
            debug!(
                "Candidates exhausted after {} of {} windows",
                selected.len(),
                config.num_windows
            );
            break;
        };

        let anchor_day = scores[best].day_of_year;
        let window = PlantingWindow {
            anchor_day,
            score: scores[best].window_sum,
        };
        debug!("Selected window ending on day {} ({:.2} mm)", anchor_day, window.score);
        selected.push(window);

        let start_day = anchor_day.saturating_sub(radius);
        // up to 366, not 365, so a leap day next to the pick stays excluded
        let end_day = anchor_day.saturating_add(radius).min(MAX_DAY_OF_YEAR);
        for (i, score) in scores.iter().enumerate() {
            if (start_day..=end_day).contains(&score.day_of_year) {
                eligible[i] = false;
            }
        }
    }

    selected
}

/// Score every day and select the best planting windows.
pub fn find_best_planting_windows(
    averages: &[DayOfYearAverage],
    window_size: u32,
    config: &WindowConfig,
) -> Result<Vec<PlantingWindow>> {
    let scores = rolling_window_scores(averages, window_size)?;
    Ok(select_planting_windows(&scores, window_size, config))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(values: &[(u32, f64)]) -> Vec<DayOfYearAverage> {
        values
            .iter()
            .map(|&(day_of_year, average_rainfall)| DayOfYearAverage {
                day_of_year,
                average_rainfall,
            })
            .collect()
    }

    fn full_year(f: impl Fn(u32) -> f64) -> Vec<DayOfYearAverage> {
        (1..=365)
            .map(|day_of_year| DayOfYearAverage {
                day_of_year,
                average_rainfall: f(day_of_year),
            })
            .collect()
    }

    #[test]
    fn test_rolling_partial_start() {
        let averages = series(&[(1, 1.0), (2, 2.0), (3, 3.0), (4, 4.0)]);
        let scores = rolling_window_scores(&averages, 3).unwrap();
        let sums: Vec<f64> = scores.iter().map(|s| s.window_sum).collect();
        assert_eq!(sums, vec![1.0, 3.0, 6.0, 9.0]);
        assert_eq!(scores[3].day_of_year, 4);
    }

    #[test]
    fn test_rolling_does_not_wrap() {
        let mut averages = full_year(|_| 0.0);
        averages[0].average_rainfall = 1.0;
        averages[364].average_rainfall = 100.0;
        let scores = rolling_window_scores(&averages, 10).unwrap();
        // day 5 must not borrow December's rain
        assert_relative_eq!(scores[4].window_sum, 1.0);
    }

    #[test]
    fn test_window_larger_than_history() {
        let averages = series(&[(1, 1.0), (2, 2.0)]);
        assert!(matches!(
            rolling_window_scores(&averages, 3),
            Err(AdvisorError::InsufficientData(_))
        ));
    }

    #[test]
    fn test_zero_window() {
        let averages = series(&[(1, 1.0)]);
        assert!(matches!(
            rolling_window_scores(&averages, 0),
            Err(AdvisorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_unsorted_averages_rejected() {
        let averages = series(&[(2, 1.0), (1, 1.0)]);
        assert!(matches!(
            rolling_window_scores(&averages, 1),
            Err(AdvisorError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_three_separated_peaks() {
        let averages = full_year(|d| match d {
            50..=54 => 20.0,
            150..=154 => 30.0,
            300..=304 => 10.0,
            _ => 0.1,
        });
        let config = WindowConfig::default();
        let windows = find_best_planting_windows(&averages, 5, &config).unwrap();
        let anchors: Vec<u32> = windows.iter().map(|w| w.anchor_day).collect();
        assert_eq!(anchors, vec![154, 54, 304]);
        assert_relative_eq!(windows[0].score, 150.0);
        assert!(windows[0].score > windows[1].score);
        assert!(windows[1].score > windows[2].score);
    }

    #[test]
    fn test_ties_pick_earliest_day() {
        let averages = full_year(|_| 1.0);
        let config = WindowConfig {
            num_windows: 1,
            ..WindowConfig::default()
        };
        let windows = find_best_planting_windows(&averages, 7, &config).unwrap();
        // every full window sums to 7.0; day 7 is the first to reach it
        assert_eq!(windows[0].anchor_day, 7);
    }

    #[test]
    fn test_windows_do_not_overlap() {
        let averages = full_year(|d| ((d * 37) % 11) as f64);
        let window_size = 12;
        let config = WindowConfig {
            num_windows: 6,
            ..WindowConfig::default()
        };
        let windows = find_best_planting_windows(&averages, window_size, &config).unwrap();
        assert!(windows.len() <= 6);
        for a in &windows {
            for b in &windows {
                if a.anchor_day != b.anchor_day {
                    let gap = a.anchor_day.abs_diff(b.anchor_day);
                    assert!(gap > window_size + config.min_days_between);
                }
            }
        }
    }

    #[test]
    fn test_exclusion_covers_leap_day() {
        let mut averages = full_year(|_| 0.0);
        averages.push(DayOfYearAverage {
            day_of_year: 366,
            average_rainfall: 0.0,
        });
        averages[349].average_rainfall = 50.0;
        let config = WindowConfig {
            num_windows: 10,
            ..WindowConfig::default()
        };
        let windows = find_best_planting_windows(&averages, 10, &config).unwrap();
        assert_eq!(windows[0].anchor_day, 350);
        assert!(windows.iter().all(|w| w.anchor_day != 366));
    }

    #[test]
    fn test_wet_leap_day_near_pick_is_excluded() {
        let mut averages = full_year(|_| 0.0);
        averages.push(DayOfYearAverage {
            day_of_year: 366,
            average_rainfall: 0.0,
        });
        averages[339].average_rainfall = 40.0;
        averages[365].average_rainfall = 30.0;
        let windows = find_best_planting_windows(&averages, 1, &WindowConfig::default()).unwrap();
        assert_eq!(windows[0].anchor_day, 340);
        // day 366 is 26 days from 340, inside the 31-day exclusion radius
        assert!(windows.iter().all(|w| w.anchor_day != 366));
    }

    #[test]
    fn test_early_stop_when_exhausted() {
        let averages = series(&[(100, 1.0), (101, 5.0), (102, 1.0), (103, 0.5)]);
        let windows = find_best_planting_windows(&averages, 2, &WindowConfig::default()).unwrap();
        // days 101 and 102 both sum to 6.0; the earlier one wins and the
        // exclusion zone then swallows the rest
        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].anchor_day, 101);
    }

    #[test]
    fn test_zero_windows_requested() {
        let averages = full_year(|_| 1.0);
        let config = WindowConfig {
            num_windows: 0,
            ..WindowConfig::default()
        };
        assert!(find_best_planting_windows(&averages, 5, &config)
            .unwrap()
            .is_empty());
    }
}
