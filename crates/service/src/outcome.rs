//! Response payloads of the search operations.

use db::Pet;
use serde::{Deserialize, Serialize};

pub const NO_PET_MATCH: &str = "No pet found matching your criteria.";

/// `{"message": "..."}` body returned in place of an empty result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn no_pet_match() -> Self {
        Self::new(NO_PET_MATCH)
    }

    pub fn no_pets_for_price(price: f64) -> Self {
        Self::new(format!("No pets found for the price of: {}", format_price(price)))
    }
}

/// Result of a search: either the matching pets or a message object.
///
/// Serialises untagged, so clients see a JSON array or an object depending
/// on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SearchOutcome {
    Matches(Vec<Pet>),
    NoMatch(Message),
}

impl SearchOutcome {
    /// `Matches` for a non-empty result, otherwise `NoMatch(or_else())`.
    pub fn from_results(pets: Vec<Pet>, or_else: impl FnOnce() -> Message) -> Self {
        if pets.is_empty() {
            Self::NoMatch(or_else())
        } else {
            Self::Matches(pets)
        }
    }
}

/// Render a price the way clients of the service have always seen it.
///
/// Plain decimal with at least one fractional digit for
/// `1e-3 <= |price| < 1e7` (and zero), otherwise `d.dddE±n` with an
/// uppercase `E`: `100.0`, `1.0E7`, `1.0E-4`.
pub fn format_price(price: f64) -> String {
    if price.is_nan() {
        return "NaN".to_string();
    }
    if price.is_infinite() {
        return if price > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let magnitude = price.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        return format!("{price:?}");
    }

    // `{:e}` gives the shortest round-tripping digits, e.g. `1e7` or `1.5e-4`.
    let scientific = format!("{price:e}");
    let (mantissa, exponent) = scientific.split_once('e').unwrap_or((scientific.as_str(), "0"));
    if mantissa.contains('.') {
        format!("{mantissa}E{exponent}")
    } else {
        format!("{mantissa}.0E{exponent}")
    }
}
