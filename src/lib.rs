//! StockIQ WASM - inventory demand forecasting for web browsers
//!
//! This crate turns a product's location type, season and current stock
//! level into:
//! - a predicted monthly demand and the optimal stock level
//! - an understock / overstock / optimal classification with advice
//! - a confidence score
//! - a four-month trend normalized against the peak month
//!
//! The interface uses JSON for input/output to keep the WASM boundary simple.

use js_sys::Promise;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use rand::rngs::StdRng;

mod catalog;
mod engine;
mod error;
mod gate;
mod random;
mod status;
mod trend;

pub use catalog::{LocationType, Season};
pub use engine::{compute, ForecastInput, ForecastResult};
pub use error::{ForecastError, Result};
pub use gate::{parse_stock, Submission};
pub use random::{RandomSource, RngSource};
pub use status::StockStatus;
pub use trend::MonthlyTrend;

/// Install the panic hook and console logger
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    // A second call (e.g. the module being re-instantiated) keeps the first logger
    let _ = console_log::init_with_level(log::Level::Debug);
}

/// Main WASM entry point for forecasting
///
/// Takes the form submission as JSON, returns the forecast as JSON, or
/// `{"error": "..."}` when the submission is incomplete or malformed.
///
/// # Example
///
/// ```javascript
/// const input = {
///   productName: "Winter Jacket",
///   locationType: "urban",
///   season: "festival",
///   currentStock: "500",
///   seed: 42            // optional, for reproducible output
/// };
///
/// const result = JSON.parse(forecast(JSON.stringify(input)));
/// console.log(result.status, result.trends);
/// ```
#[wasm_bindgen]
pub fn forecast(input_json: &str) -> String {
    run_forecast(input_json)
        .and_then(|result| to_json(&result))
        .unwrap_or_else(|e| error_json(&e))
}

/// Same as [`forecast`], resolved after `delay_ms` milliseconds
///
/// The promise resolves exactly once with the forecast (or error) JSON.
/// It relies on the browser timer, so it only runs under wasm32.
#[wasm_bindgen]
pub fn forecast_delayed(input_json: String, delay_ms: u32) -> Promise {
    wasm_bindgen_futures::future_to_promise(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        Ok(JsValue::from_str(&forecast(&input_json)))
    })
}

/// Whether a submission has every required field filled in
#[wasm_bindgen]
pub fn can_submit(input_json: &str) -> bool {
    serde_json::from_str::<Submission>(input_json)
        .map(|submission| submission.is_complete())
        .unwrap_or(false)
}

/// Advice text for a stock gap (`optimal - current`)
#[wasm_bindgen]
pub fn recommendation(stock_diff: i64) -> String {
    status::recommendation(stock_diff)
}

/// Version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Forecast session that keeps the latest result.
///
/// Each accepted submission replaces the previous forecast; a rejected one
/// leaves it in place. The planner owns its RNG, so a `seed` inside the
/// submission is ignored here.
#[wasm_bindgen]
pub struct StockPlanner {
    random: RngSource<StdRng>,
    latest: Option<ForecastResult>,
}

#[wasm_bindgen]
impl StockPlanner {
    /// Planner seeded from the platform
    #[wasm_bindgen(constructor)]
    pub fn new() -> StockPlanner {
        StockPlanner {
            random: RngSource::from_entropy(),
            latest: None,
        }
    }

    /// Planner with a reproducible sequence of forecasts
    pub fn with_seed(seed: u64) -> StockPlanner {
        StockPlanner {
            random: RngSource::seeded(seed),
            latest: None,
        }
    }

    /// Forecast a submission, returning the result JSON or an error object
    pub fn submit(&mut self, input_json: &str) -> String {
        let input = match parse_submission(input_json).and_then(|s| s.validate()) {
            Ok(input) => input,
            Err(e) => {
                log::warn!("submission rejected: {}", e);
                return error_json(&e);
            }
        };

        let result = compute(&input, &mut self.random);
        let output = to_json(&result).unwrap_or_else(|e| error_json(&e));
        self.latest = Some(result);
        output
    }

    /// The most recent forecast, if any
    pub fn latest(&self) -> Option<String> {
        self.latest.as_ref().and_then(|result| to_json(result).ok())
    }

    /// Drop the latest forecast
    pub fn clear(&mut self) {
        self.latest = None;
    }
}

impl StockPlanner {
    /// The most recent forecast as a value
    pub fn latest_result(&self) -> Option<&ForecastResult> {
        self.latest.as_ref()
    }
}

impl Default for StockPlanner {
    fn default() -> Self {
        StockPlanner::new()
    }
}

fn parse_submission(input_json: &str) -> Result<Submission> {
    Ok(serde_json::from_str(input_json)?)
}

fn run_forecast(input_json: &str) -> Result<ForecastResult> {
    let submission = parse_submission(input_json)?;
    let input = submission.validate().map_err(|e| {
        log::warn!("submission rejected: {}", e);
        e
    })?;

    Ok(compute(&input, RngSource::from_seed_option(submission.seed)))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string(value).map_err(|e| ForecastError::Serialize(e.to_string()))
}

/// Error output structure
#[derive(Serialize)]
struct ErrorOutput {
    error: String,
}

fn error_json(error: &ForecastError) -> String {
    serde_json::to_string(&ErrorOutput {
        error: error.to_string(),
    })
    .unwrap_or_else(|_| r#"{"error":"Failed to serialize error"}"#.to_string())
}

// ============================================================================
// Tests
// ============================================================================
