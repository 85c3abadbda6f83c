//! Forecast reduction to a one-day summary.
//!
//! The forecast API returns 3-hourly entries over five days. Tour planning
//! only needs one day: the average temperature, the condition that appears
//! most often, and a packing recommendation derived from it.

use chrono::NaiveDate;
use std::collections::HashMap;

use super::client::ForecastEntry;
use super::error::WeatherError;

/// Weather summary for a single day.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    /// The day the summary covers.
    pub date: NaiveDate,

    /// Average of the day's forecast temperatures, in degrees Celsius.
    pub average_temp_c: f64,

    /// The condition description appearing most often across the day.
    pub condition: String,

    /// Packing recommendation derived from the condition.
    pub recommendation: &'static str,
}

/// Reduce forecast entries to a summary for one day.
///
/// Entries are matched by their "YYYY-MM-DD" date prefix. When several
/// conditions tie for most frequent, the one seen earliest in the day wins,
/// so the summary is deterministic.
pub fn summarize(entries: &[ForecastEntry], date: NaiveDate) -> Result<DaySummary, WeatherError> {
    let prefix = date.format("%Y-%m-%d").to_string();

    let day_entries: Vec<&ForecastEntry> = entries
        .iter()
        .filter(|e| e.dt_txt.starts_with(&prefix))
        .collect();

    if day_entries.is_empty() {
        return Err(WeatherError::NoForecast { date });
    }

    let average_temp_c =
        day_entries.iter().map(|e| e.main.temp).sum::<f64>() / day_entries.len() as f64;

    // Count condition descriptions, remembering first-seen order for ties
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    let mut order = 0usize;
    for entry in &day_entries {
        for condition in &entry.weather {
            let slot = counts.entry(condition.description.as_str()).or_insert_with(|| {
                order += 1;
                (0, order)
            });
            slot.0 += 1;
        }
    }

    let condition = counts
        .iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(desc, _)| (*desc).to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let recommendation = recommendation_for(&condition);

    Ok(DaySummary {
        date,
        average_temp_c,
        condition,
        recommendation,
    })
}

/// Packing recommendation for a condition description.
pub fn recommendation_for(condition: &str) -> &'static str {
    if condition.contains("rain") {
        "It's likely to rain. Bring an umbrella or consider indoor activities."
    } else if condition.contains("clear") {
        "The weather is clear. It's a great day for outdoor activities!"
    } else if condition.contains("snow") {
        "Snow is expected. Dress warmly and consider indoor activities."
    } else if condition.contains("cloud") {
        "It's cloudy. You may want to prepare for mixed weather."
    } else if condition.contains("storm") {
        "A storm is expected. Stay indoors and avoid outdoor activities."
    } else {
        "Check the forecast closer to your trip for specific recommendations."
    }
}
