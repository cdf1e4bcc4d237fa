use crate::{
    aggregation::average_by_day_of_year,
    projection::project_windows,
    ranking::{rank_with, RankingConfig},
    windows::{find_best_planting_windows, WindowConfig},
};
use chrono::NaiveDate;
use cpa_core::{
    crop::RankedCrop,
    date_range::DateRange,
    error::Result,
    features::FeatureVector,
    location::Location,
    planting_duration::PlantingDurations,
    rainfall::DailySample,
    sources::{CropClassifier, RainfallHistorySource, SoilSource, WeatherSource},
};
use log::info;

/// Rank classifier output with the default top-3, above-20% filter.
pub fn rank_crops(labels: &[String], probabilities: &[f64]) -> Result<Vec<RankedCrop>> {
    rank_with(labels, probabilities, &RankingConfig::default())
}

/// Planting date ranges for a crop with the given planting duration, using
/// the default window count, spacing and display span.
pub fn recommend_planting_windows(
    daily_rainfall_history: &[DailySample],
    window_size: u32,
    today: NaiveDate,
) -> Result<Vec<DateRange>> {
    recommend_planting_windows_with(
        daily_rainfall_history,
        window_size,
        today,
        &WindowConfig::default(),
    )
}

pub fn recommend_planting_windows_with(
    daily_rainfall_history: &[DailySample],
    window_size: u32,
    today: NaiveDate,
    config: &WindowConfig,
) -> Result<Vec<DateRange>> {
    let averages = average_by_day_of_year(daily_rainfall_history)?;
    let windows = find_best_planting_windows(&averages, window_size, config)?;
    let ranges = project_windows(&windows, today, config.display_span_days)?;
    info!(
        "Found {} planting windows of {} days from {} rainfall samples",
        ranges.len(),
        window_size,
        daily_rainfall_history.len()
    );
    Ok(ranges)
}

/// Fetch soil and weather for a point, classify, and rank the result.
pub fn recommend_crops(
    location: &Location,
    soil: &dyn SoilSource,
    weather: &dyn WeatherSource,
    classifier: &dyn CropClassifier,
    config: &RankingConfig,
) -> Result<Vec<RankedCrop>> {
    let soil_properties = soil.soil_properties(location)?;
    let weather_summary = weather.weather_summary(location)?;
    let features = FeatureVector::from_parts(&soil_properties, &weather_summary);
    let probabilities = classifier.predict(&features)?;
    let ranked = rank_with(probabilities.labels(), probabilities.probabilities(), config)?;
    info!(
        "Recommended {} of {} crops for ({}, {})",
        ranked.len(),
        probabilities.len(),
        location.longitude,
        location.latitude
    );
    Ok(ranked)
}

/// Look up the crop's planting duration, fetch rainfall history for the
/// point, and recommend planting date ranges.
pub fn recommend_planting_times(
    location: &Location,
    crop: &str,
    durations: &PlantingDurations,
    rainfall: &dyn RainfallHistorySource,
    today: NaiveDate,
    config: &WindowConfig,
) -> Result<Vec<DateRange>> {
    let window_size = durations.duration_for(crop)?;
    let history = rainfall.rainfall_history(location)?;
    recommend_planting_windows_with(&history, window_size, today, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpa_core::{
        crop::ClassProbabilities,
        error::AdvisorError,
        features::{SoilProperties, WeatherSummary},
    };
    use std::cell::Cell;

    struct FixedSoil;

    impl SoilSource for FixedSoil {
        fn soil_properties(&self, _location: &Location) -> Result<SoilProperties> {
            Ok(SoilProperties {
                nitrogen: 90.0,
                phosphorus: 42.0,
                potassium: 43.0,
                ph: 6.5,
            })
        }
    }

    struct UncoveredSoil;

    impl SoilSource for UncoveredSoil {
        fn soil_properties(&self, location: &Location) -> Result<SoilProperties> {
            Err(location.not_supported())
        }
    }

    struct FixedWeather;

    impl WeatherSource for FixedWeather {
        fn weather_summary(&self, _location: &Location) -> Result<WeatherSummary> {
            Ok(WeatherSummary {
                relative_humidity: 82.0,
                temperature: 20.9,
                rainfall: 6.1,
            })
        }
    }

    /// Favours rice when humidity is high; records what it was given.
    struct HumidityClassifier {
        seen_humidity: Cell<Option<f64>>,
    }

    impl CropClassifier for HumidityClassifier {
        fn predict(&self, features: &FeatureVector) -> Result<ClassProbabilities> {
            let humidity = features.get("humidity").unwrap_or_default();
            self.seen_humidity.set(Some(humidity));
            let rice = if humidity > 80.0 { 0.7 } else { 0.1 };
            ClassProbabilities::new(
                vec!["maize".into(), "rice".into(), "coffee".into()],
                vec![0.9 - rice, rice, 0.1],
            )
        }
    }

    struct PeakRainfall {
        calls: Cell<usize>,
    }

    impl RainfallHistorySource for PeakRainfall {
        fn rainfall_history(&self, _location: &Location) -> Result<Vec<DailySample>> {
            self.calls.set(self.calls.get() + 1);
            Ok((1..=365)
                .map(|day| DailySample {
                    date: NaiveDate::from_yo_opt(2023, day).unwrap(),
                    rainfall: if (100..=120).contains(&day) { 12.0 } else { 0.2 },
                })
                .collect())
        }
    }

    fn nairobi() -> Location {
        Location::new(36.817223, -1.286389).unwrap()
    }

    #[test]
    fn test_recommend_crops() {
        let classifier = HumidityClassifier {
            seen_humidity: Cell::new(None),
        };
        let ranked = recommend_crops(
            &nairobi(),
            &FixedSoil,
            &FixedWeather,
            &classifier,
            &RankingConfig::default(),
        )
        .unwrap();
        assert_eq!(classifier.seen_humidity.get(), Some(82.0));
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].crop, "rice");
        assert_eq!(ranked[0].confidence, 70);
    }

    #[test]
    fn test_location_error_passes_through() {
        let classifier = HumidityClassifier {
            seen_humidity: Cell::new(None),
        };
        let err = recommend_crops(
            &nairobi(),
            &UncoveredSoil,
            &FixedWeather,
            &classifier,
            &RankingConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AdvisorError::LocationNotSupported { .. }));
        assert_eq!(classifier.seen_humidity.get(), None);
    }

    #[test]
    fn test_recommend_planting_times() {
        let durations = PlantingDurations::parse_csv("crop,duration(days)\nmaize,21\n").unwrap();
        let rainfall = PeakRainfall {
            calls: Cell::new(0),
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let config = WindowConfig {
            num_windows: 1,
            ..WindowConfig::default()
        };
        let ranges =
            recommend_planting_times(&nairobi(), "Maize", &durations, &rainfall, today, &config)
                .unwrap();
        assert_eq!(ranges.len(), 1);
        // 21 wet days end on day 120, which is Apr 30 in 2025
        assert_eq!(
            ranges[0].start_date,
            NaiveDate::from_ymd_opt(2025, 4, 30).unwrap()
        );
        assert_eq!(rainfall.calls.get(), 1);
    }

    #[test]
    fn test_unsupported_crop_skips_rainfall_fetch() {
        let durations = PlantingDurations::parse_csv("crop,duration(days)\nmaize,21\n").unwrap();
        let rainfall = PeakRainfall {
            calls: Cell::new(0),
        };
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let err = recommend_planting_times(
            &nairobi(),
            "quinoa",
            &durations,
            &rainfall,
            today,
            &WindowConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, AdvisorError::UnsupportedCrop(_)));
        assert_eq!(rainfall.calls.get(), 0);
    }
}
