//! Four-month demand outlook and its normalization against the peak month

use serde::Serialize;

/// Month labels and the share of predicted demand expected in each
pub const TREND_FACTORS: [(&str, f64); 4] = [("Jan", 0.7), ("Feb", 0.8), ("Mar", 1.1), ("Apr", 1.0)];

/// One bar of the trend chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTrend {
    pub month: &'static str,
    pub demand: u32,
    /// Demand relative to the busiest month in the same outlook, 0-100
    pub percentage_of_peak: u8,
}

/// Build the outlook for a predicted monthly demand
pub fn monthly_trends(predicted_demand: u32) -> Vec<MonthlyTrend> {
    let demands: Vec<u32> = TREND_FACTORS
        .iter()
        .map(|&(_, factor)| (predicted_demand as f64 * factor).floor() as u32)
        .collect();

    TREND_FACTORS
        .iter()
        .zip(normalize_to_peak(&demands))
        .zip(&demands)
        .map(|((&(month, _), percentage_of_peak), &demand)| MonthlyTrend {
            month,
            demand,
            percentage_of_peak,
        })
        .collect()
}

/// Express each value as a rounded percentage of the largest one.
///
/// An all-zero series maps to all zeros.
pub fn normalize_to_peak(values: &[u32]) -> Vec<u8> {
    let peak = values.iter().copied().max().unwrap_or(0);
    if peak == 0 {
        return vec![0; values.len()];
    }

    values
        .iter()
        .map(|&value| (value as f64 / peak as f64 * 100.0).round() as u8)
        .collect()
}
