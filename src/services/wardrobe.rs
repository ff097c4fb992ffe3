use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::models::{Category, ClothingItem};
use crate::services::rules::{normalize_formality, parse_formality_strict, InvalidFormalityLevel};

/// Columns every wardrobe table must carry; `notes` is optional
pub const REQUIRED_COLUMNS: [&str; 5] = ["name", "category", "color", "style", "formality"];

/// Error types for loading the wardrobe table
#[derive(Debug, Error)]
pub enum WardrobeError {
    #[error("Wardrobe file {} could not be opened: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Wardrobe table is missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("Malformed wardrobe table: {0}")]
    Malformed(#[from] csv::Error),
    #[error("Row {row}: {source}")]
    InvalidFormality {
        row: usize,
        #[source]
        source: InvalidFormalityLevel,
    },
}

/// How formality values outside low/medium/high are treated at load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormalityPolicy {
    /// Keep them as-is; they never pass the occasion filter
    #[default]
    Permissive,
    /// Fail the load with [`WardrobeError::InvalidFormality`]
    Strict,
}

/// One wardrobe record as it appears in the table, before normalization
#[derive(Debug, Deserialize)]
struct RawClothingRow {
    name: String,
    category: String,
    color: String,
    style: String,
    #[serde(default)]
    formality: Option<String>,
    #[serde(default)]
    notes: Option<String>,
}

impl RawClothingRow {
    fn normalize(self, row: usize, policy: FormalityPolicy) -> Result<ClothingItem, WardrobeError> {
        let formality = match policy {
            FormalityPolicy::Permissive => normalize_formality(self.formality.as_deref()),
            FormalityPolicy::Strict => parse_formality_strict(self.formality.as_deref())
                .map_err(|source| WardrobeError::InvalidFormality { row, source })?,
        };

        Ok(ClothingItem {
            name: self.name,
            category: Category::normalize(&self.category),
            color: self.color.trim().to_lowercase(),
            style: self.style,
            formality,
            notes: clean_notes(self.notes),
        })
    }
}

/// Blank notes and spreadsheet "nan" placeholders count as no notes
fn clean_notes(notes: Option<String>) -> Option<String> {
    notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty() && !n.eq_ignore_ascii_case("nan"))
}

/// Reads and normalizes a wardrobe table from any CSV source.
///
/// Rows may stop short of the header; trailing optional fields left off
/// (like `notes`) read as absent.
pub fn read_clothes<R: Read>(
    reader: R,
    policy: FormalityPolicy,
) -> Result<Vec<ClothingItem>, WardrobeError> {
    let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(WardrobeError::MissingColumn(column));
        }
    }

    csv_reader
        .deserialize::<RawClothingRow>()
        .enumerate()
        .map(|(index, record)| record?.normalize(index + 1, policy))
        .collect()
}

/// Loads the wardrobe table from a CSV file
pub fn load_clothes(
    path: impl AsRef<Path>,
    policy: FormalityPolicy,
) -> Result<Vec<ClothingItem>, WardrobeError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WardrobeError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let items = read_clothes(file, policy)?;
    tracing::debug!(path = %path.display(), items = items.len(), "Wardrobe loaded");
    Ok(items)
}

/// Where the wardrobe comes from. Read once per recommendation request.
#[cfg_attr(test, mockall::automock)]
pub trait WardrobeSource: Send + Sync {
    fn load(&self) -> Result<Vec<ClothingItem>, WardrobeError>;
}

/// A wardrobe kept in a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvWardrobe {
    path: PathBuf,
    policy: FormalityPolicy,
}

impl CsvWardrobe {
    pub fn new(path: impl Into<PathBuf>, policy: FormalityPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
        }
    }
}

impl WardrobeSource for CsvWardrobe {
    fn load(&self) -> Result<Vec<ClothingItem>, WardrobeError> {
        load_clothes(&self.path, self.policy)
    }
}
