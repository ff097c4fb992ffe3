use serde::{Deserialize, Serialize};
use std::fmt::Display;

mod clothing_item;

pub use clothing_item::{Category, ClothingItem, Formality};

/// Context the outfit is chosen for; constrains allowed formality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Occasion {
    #[default]
    Casual,
    SmartCasual,
    Work,
    Formal,
    /// Any label outside the known four; allows every formality level
    Any,
}

impl Occasion {
    pub fn label(&self) -> &'static str {
        match self {
            Occasion::Casual => "Casual",
            Occasion::SmartCasual => "Smart casual",
            Occasion::Work => "Work",
            Occasion::Formal => "Formal",
            Occasion::Any => "Any",
        }
    }
}

impl From<&str> for Occasion {
    /// Labels match exactly, as the selection UI sends them
    fn from(label: &str) -> Self {
        match label {
            "Casual" => Occasion::Casual,
            "Smart casual" => Occasion::SmartCasual,
            "Work" => Occasion::Work,
            "Formal" => Occasion::Formal,
            _ => Occasion::Any,
        }
    }
}

impl From<String> for Occasion {
    fn from(label: String) -> Self {
        Occasion::from(label.as_str())
    }
}

impl Display for Occasion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Occasion {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Current weather; decides which categories are worth wearing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum Weather {
    #[default]
    Mild,
    Cold,
    Hot,
}

impl Weather {
    pub fn label(&self) -> &'static str {
        match self {
            Weather::Mild => "Mild",
            Weather::Cold => "Cold",
            Weather::Hot => "Hot",
        }
    }
}

impl From<&str> for Weather {
    /// Anything other than "Cold" or "Hot" behaves like mild weather
    fn from(label: &str) -> Self {
        match label {
            "Cold" => Weather::Cold,
            "Hot" => Weather::Hot,
            _ => Weather::Mild,
        }
    }
}

impl From<String> for Weather {
    fn from(label: String) -> Self {
        Weather::from(label.as_str())
    }
}

impl Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Serialize for Weather {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// A recommended combination of garments
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Outfit {
    /// Garments in wearing order: dress, or top then bottom, then optional outerwear
    pub items: Vec<ClothingItem>,
    /// Preference score, higher is better. Outerwear never changes it.
    pub score: f64,
}

impl Outfit {
    pub fn new(items: Vec<ClothingItem>, score: f64) -> Self {
        Self { items, score }
    }
}
