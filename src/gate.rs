//! Raw form submission and the checks it must pass before a forecast runs

use serde::{Deserialize, Deserializer};

use crate::catalog::{LocationType, Season};
use crate::engine::ForecastInput;
use crate::error::{ForecastError, Result};

/// Form fields exactly as the user left them
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submission {
    pub product_name: String,
    pub location_type: String,
    pub season: String,
    /// Current stock level as typed; a JSON number is kept as its text
    #[serde(deserialize_with = "stock_text")]
    pub current_stock: String,
    /// Fixed RNG seed for reproducible forecasts
    pub seed: Option<u64>,
}

impl Submission {
    /// Check every required field, in form order, and build the engine input
    pub fn validate(&self) -> Result<ForecastInput> {
        let required = [
            ("productName", &self.product_name),
            ("locationType", &self.location_type),
            ("season", &self.season),
            ("currentStock", &self.current_stock),
        ];
        if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(ForecastError::MissingField(*field));
        }

        Ok(ForecastInput {
            product_name: self.product_name.trim().to_string(),
            location_type: LocationType::from_label(self.location_type.trim()),
            season: Season::from_label(self.season.trim()),
            current_stock: parse_stock(&self.current_stock),
        })
    }

    /// Whether the submission would pass [`Submission::validate`]
    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }
}

/// Stock field as it may arrive from the form
#[derive(Deserialize)]
#[serde(untagged)]
enum StockField {
    Text(String),
    Number(serde_json::Number),
}

/// Accept `"500"`, `500` or `null` for the stock field
fn stock_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<StockField>::deserialize(deserializer)? {
        Some(StockField::Text(text)) => text,
        Some(StockField::Number(number)) => number.to_string(),
        None => String::new(),
    })
}

/// Lenient stock quantity parsing.
///
/// Takes the leading run of digits (an optional `+` is allowed), so `"12.7"`
/// is 12 and `"40 units"` is 40. Negative or non-numeric text is 0; a digit
/// run too long for `u64` saturates at `u64::MAX`.
pub fn parse_stock(text: &str) -> u64 {
    let text = text.trim();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits = text
        .find(|c: char| !c.is_ascii_digit())
        .map_or(text, |end| &text[..end]);

    if digits.is_empty() {
        return 0;
    }
    // Only digits remain, so the parse can fail on overflow alone
    digits.parse().unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> Submission {
        Submission {
            product_name: "Winter Jacket".to_string(),
            location_type: "urban".to_string(),
            season: "festival".to_string(),
            current_stock: "500".to_string(),
            seed: None,
        }
    }

    #[test]
    fn test_complete_submission_passes() {
        let input = complete().validate().unwrap();
        assert_eq!(input.product_name, "Winter Jacket");
        assert_eq!(input.location_type, LocationType::Urban);
        assert_eq!(input.season, Season::Festival);
        assert_eq!(input.current_stock, 500);
    }

    #[test]
    fn test_each_missing_field_is_named() {
        let cases: [(fn(&mut Submission), &str); 4] = [
            (|s| s.product_name.clear(), "productName"),
            (|s| s.location_type.clear(), "locationType"),
            (|s| s.season.clear(), "season"),
            (|s| s.current_stock.clear(), "currentStock"),
        ];

        for (blank, expected) in cases {
            let mut submission = complete();
            blank(&mut submission);
            match submission.validate() {
                Err(ForecastError::MissingField(field)) => assert_eq!(field, expected),
                other => panic!("expected missing {expected}, got {other:?}"),
            }
            assert!(!submission.is_complete());
        }
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let mut submission = complete();
        submission.product_name = "   ".to_string();
        assert!(matches!(
            submission.validate(),
            Err(ForecastError::MissingField("productName"))
        ));
    }

    #[test]
    fn test_first_missing_field_wins() {
        let submission = Submission::default();
        assert!(matches!(
            submission.validate(),
            Err(ForecastError::MissingField("productName"))
        ));
    }

    #[test]
    fn test_unknown_categories_still_pass_the_gate() {
        let mut submission = complete();
        submission.location_type = "metro".to_string();
        submission.season = "spring".to_string();
        let input = submission.validate().unwrap();
        assert_eq!(input.location_type, LocationType::Rural);
        assert_eq!(input.season, Season::Regular);
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("500"), 500);
        assert_eq!(parse_stock("  42 "), 42);
        assert_eq!(parse_stock("+7"), 7);
        assert_eq!(parse_stock("12.7"), 12);
        assert_eq!(parse_stock("40 units"), 40);
        assert_eq!(parse_stock("0"), 0);
    }

    #[test]
    fn test_parse_stock_falls_back_to_zero() {
        assert_eq!(parse_stock(""), 0);
        assert_eq!(parse_stock("abc"), 0);
        assert_eq!(parse_stock("-5"), 0);
        assert_eq!(parse_stock("+"), 0);
    }

    #[test]
    fn test_parse_stock_keeps_large_values() {
        assert_eq!(parse_stock("99999999999"), 99_999_999_999);
        assert_eq!(parse_stock("5000000000"), 5_000_000_000);
        assert_eq!(parse_stock("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn test_stock_accepts_json_number() {
        let json = r#"{"productName": "Kettle", "locationType": "rural",
                       "season": "summer", "currentStock": 500}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.current_stock, "500");
        assert_eq!(submission.validate().unwrap().current_stock, 500);

        let json = r#"{"currentStock": 12.7}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(parse_stock(&submission.current_stock), 12);
    }

    #[test]
    fn test_null_stock_is_missing() {
        let json = r#"{"productName": "Kettle", "locationType": "rural",
                       "season": "summer", "currentStock": null}"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert!(matches!(
            submission.validate(),
            Err(ForecastError::MissingField("currentStock"))
        ));
    }

    #[test]
    fn test_unparsable_stock_passes_gate_as_zero() {
        let mut submission = complete();
        submission.current_stock = "lots".to_string();
        assert_eq!(submission.validate().unwrap().current_stock, 0);
    }
}
