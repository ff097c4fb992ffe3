use thiserror::Error;

use crate::models::{Category, Formality, Occasion, Weather};

/// A formality value outside low/medium/high, rejected in strict mode
#[derive(Debug, Error, PartialEq)]
#[error("Invalid formality level: {0:?} (expected low, medium or high)")]
pub struct InvalidFormalityLevel(pub String);

static CASUAL: [Formality; 2] = [Formality::Low, Formality::Medium];
static SMART_CASUAL: [Formality; 1] = [Formality::Medium];
static WORK: [Formality; 2] = [Formality::Medium, Formality::High];
static FORMAL: [Formality; 1] = [Formality::High];
static ANY: [Formality; 3] = [Formality::Low, Formality::Medium, Formality::High];

/// Maps an occasion to the formality levels allowed for it.
/// We treat formality as ordered: low < medium < high.
pub fn occasion_to_formality_range(occasion: Occasion) -> &'static [Formality] {
    match occasion {
        Occasion::Casual => &CASUAL,
        Occasion::SmartCasual => &SMART_CASUAL,
        Occasion::Work => &WORK,
        Occasion::Formal => &FORMAL,
        Occasion::Any => &ANY,
    }
}

/// Normalizes a raw formality value.
///
/// Missing values default to medium. Anything else is trimmed and
/// lowercased but not validated; unknown levels are kept as
/// [`Formality::Unrecognized`] and fall outside every occasion's range.
pub fn normalize_formality(value: Option<&str>) -> Formality {
    let Some(value) = value else {
        return Formality::Medium;
    };

    let value = value.trim().to_lowercase();
    match value.as_str() {
        "low" => Formality::Low,
        "medium" => Formality::Medium,
        "high" => Formality::High,
        _ => Formality::Unrecognized(value),
    }
}

/// Like [`normalize_formality`], but rejects values outside the three known levels
pub fn parse_formality_strict(value: Option<&str>) -> Result<Formality, InvalidFormalityLevel> {
    match normalize_formality(value) {
        Formality::Unrecognized(raw) => Err(InvalidFormalityLevel(raw)),
        level => Ok(level),
    }
}

/// Whether a garment category is worth wearing in the given weather
pub fn weather_allows(weather: Weather, category: &Category) -> bool {
    match weather {
        // tops, bottoms, outerwear, closed shoes
        Weather::Cold => matches!(
            category,
            Category::Top | Category::Bottom | Category::Outerwear | Category::Shoes
        ),
        // no outerwear
        Weather::Hot => matches!(
            category,
            Category::Top | Category::Bottom | Category::Dress | Category::Shoes
        ),
        Weather::Mild => true,
    }
}
