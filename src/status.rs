//! Stock adequacy classification and the advice shown with it

use serde::{Deserialize, Serialize};

/// Gap (in units) tolerated either side of the optimal stock level
pub const STOCK_TOLERANCE: i64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    Understock,
    Overstock,
    Optimal,
}

impl StockStatus {
    /// Classify `optimal - current`. The tolerance bounds themselves are optimal.
    pub fn classify(stock_diff: i64) -> Self {
        if stock_diff > STOCK_TOLERANCE {
            StockStatus::Understock
        } else if stock_diff < -STOCK_TOLERANCE {
            StockStatus::Overstock
        } else {
            StockStatus::Optimal
        }
    }

    /// Banner text for the status alert
    pub fn headline(self) -> &'static str {
        match self {
            StockStatus::Understock => "Understock Alert",
            StockStatus::Overstock => "Overstock Alert",
            StockStatus::Optimal => "Optimal Stock Level",
        }
    }
}

/// Recommendation text for a stock gap.
///
/// Only the sign of `stock_diff` picks the wording, so a small shortfall that
/// still classifies as optimal gets an order suggestion.
pub fn recommendation(stock_diff: i64) -> String {
    let units = stock_diff.unsigned_abs();
    match stock_diff.signum() {
        1 => format!("Order {units} more units to meet predicted demand and avoid stockouts."),
        -1 => format!("You have {units} excess units. Consider promotions to clear inventory."),
        _ => "Your stock level is optimal for the predicted demand.".to_string(),
    }
}
