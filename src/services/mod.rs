pub mod color;
pub mod outfits;
pub mod rules;
pub mod wardrobe;

pub use outfits::generate_outfits;
pub use wardrobe::{CsvWardrobe, FormalityPolicy, WardrobeError, WardrobeSource};
