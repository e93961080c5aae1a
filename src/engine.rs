//! Demand and stock forecast for a single product
//!
//! The forecast is simulated rather than fitted:
//! - a baseline monthly demand is drawn at random
//! - it is scaled by fixed season and location multipliers
//! - optimal stock carries a 20% buffer over predicted demand
//! - a four-month outlook is derived from fixed monthly factors
//!
//! Apart from the two random draws the computation is a pure function of
//! its input.

use log::debug;
use serde::Serialize;

use crate::catalog::{LocationType, Season};
use crate::random::RandomSource;
use crate::status::{recommendation, StockStatus};
use crate::trend::{monthly_trends, MonthlyTrend};

/// Inclusive range of the simulated baseline demand
pub const BASELINE_DEMAND_RANGE: (u32, u32) = (200, 699);

/// Inclusive range of the reported confidence score
pub const CONFIDENCE_RANGE: (u32, u32) = (85, 99);

/// Safety buffer applied to predicted demand
pub const SAFETY_STOCK_FACTOR: f64 = 1.2;

/// Validated engine input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForecastInput {
    /// Display only
    pub product_name: String,
    pub location_type: LocationType,
    pub season: Season,
    pub current_stock: u64,
}

/// Result of a forecast run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    /// Units per month
    pub predicted_demand: u32,
    pub optimal_stock: u32,
    pub current_stock: u64,
    /// `optimal_stock - current_stock`
    pub stock_diff: i64,
    pub status: StockStatus,
    /// Synthetic score in 85..=99
    pub confidence: u8,
    pub trends: Vec<MonthlyTrend>,
    pub recommendation: String,
}

/// Run a forecast, drawing the baseline demand and confidence from `random`
pub fn compute<R: RandomSource>(input: &ForecastInput, mut random: R) -> ForecastResult {
    let (low, high) = BASELINE_DEMAND_RANGE;
    let baseline_demand = random.next_in_range(low, high);

    let predicted_demand =
        predict_demand(baseline_demand, input.season, input.location_type);
    let optimal_stock = optimal_stock(predicted_demand);
    let stock_diff = stock_diff(optimal_stock, input.current_stock);
    let status = StockStatus::classify(stock_diff);

    let (low, high) = CONFIDENCE_RANGE;
    let confidence = random.next_in_range(low, high) as u8;

    debug!(
        "forecast for {:?}: baseline={} season={} location={} predicted={} optimal={} diff={} status={:?}",
        input.product_name,
        baseline_demand,
        input.season,
        input.location_type,
        predicted_demand,
        optimal_stock,
        stock_diff,
        status,
    );

    ForecastResult {
        predicted_demand,
        optimal_stock,
        current_stock: input.current_stock,
        stock_diff,
        status,
        confidence,
        trends: monthly_trends(predicted_demand),
        recommendation: recommendation(stock_diff),
    }
}

/// Scale a baseline demand by season and location
pub fn predict_demand(baseline_demand: u32, season: Season, location_type: LocationType) -> u32 {
    (baseline_demand as f64 * season.multiplier() * location_type.multiplier()).floor() as u32
}

/// Signed gap between optimal and current stock, saturating at the `i64` bounds
pub fn stock_diff(optimal_stock: u32, current_stock: u64) -> i64 {
    let current_stock = i64::try_from(current_stock).unwrap_or(i64::MAX);
    i64::from(optimal_stock).saturating_sub(current_stock)
}

/// Predicted demand plus the safety buffer, floored to whole units
pub fn optimal_stock(predicted_demand: u32) -> u32 {
    (predicted_demand as f64 * SAFETY_STOCK_FACTOR).floor() as u32
}
