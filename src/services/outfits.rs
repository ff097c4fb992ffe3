use std::cmp::Ordering;

use crate::models::{Category, ClothingItem, Occasion, Outfit, Weather};
use crate::services::color::color_distance;
use crate::services::rules::{occasion_to_formality_range, weather_allows};

/// Score given to single-dress outfits
const DRESS_SCORE: f64 = 0.0;

/// Applies the occasion and weather filters.
///
/// Items keep their original relative order, which the tie-breaking in
/// later steps relies on.
pub fn filter_by_occasion_and_weather(
    items: &[ClothingItem],
    occasion: Occasion,
    weather: Weather,
) -> Vec<ClothingItem> {
    let allowed_formality = occasion_to_formality_range(occasion);

    let filtered: Vec<ClothingItem> = items
        .iter()
        .filter(|item| allowed_formality.contains(&item.formality))
        .filter(|item| weather_allows(weather, &item.category))
        .cloned()
        .collect();

    tracing::debug!(
        occasion = %occasion,
        weather = %weather,
        total = items.len(),
        kept = filtered.len(),
        "Wardrobe filtered"
    );

    filtered
}

/// Every top paired with every bottom, top-major order.
/// Closer colors score higher (score is the negated distance).
pub fn generate_top_bottom_combos(pool: &[ClothingItem]) -> Vec<Outfit> {
    let tops: Vec<&ClothingItem> = pool.iter().filter(|i| i.category == Category::Top).collect();
    let bottoms: Vec<&ClothingItem> = pool
        .iter()
        .filter(|i| i.category == Category::Bottom)
        .collect();

    let mut combos = Vec::with_capacity(tops.len() * bottoms.len());
    for top in &tops {
        for bottom in &bottoms {
            let dist = color_distance(&top.color, &bottom.color);
            combos.push(Outfit::new(vec![(*top).clone(), (*bottom).clone()], -dist));
        }
    }
    combos
}

/// One outfit per dress, all with a neutral score
pub fn generate_dress_outfits(pool: &[ClothingItem]) -> Vec<Outfit> {
    pool.iter()
        .filter(|i| i.category == Category::Dress)
        .map(|dress| Outfit::new(vec![dress.clone()], DRESS_SCORE))
        .collect()
}

/// In cold weather, appends the outerwear piece whose color sits closest
/// to the outfit's first item. Ties go to the piece listed first.
pub fn maybe_add_outerwear(pool: &[ClothingItem], mut outfit: Outfit, weather: Weather) -> Outfit {
    if weather != Weather::Cold {
        return outfit;
    }

    let Some(base_color) = outfit.items.first().map(|item| item.color.as_str()) else {
        return outfit;
    };

    // min_by keeps the first of several equal minima
    let best_outer = pool
        .iter()
        .filter(|i| i.category == Category::Outerwear)
        .map(|i| (i, color_distance(&i.color, base_color)))
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(item, _)| item.clone());

    if let Some(outer) = best_outer {
        outfit.items.push(outer);
    }
    outfit
}

/// Recommends up to `n_outfits` outfits for an occasion and weather.
///
/// Candidates are top+bottom combinations followed by single dresses,
/// ranked by descending score with ties kept in generation order. At least
/// one outfit is requested even if `n_outfits` is zero or negative. An empty
/// result means nothing in the wardrobe fits the filters.
pub fn generate_outfits(
    items: &[ClothingItem],
    occasion: Occasion,
    weather: Weather,
    n_outfits: i64,
) -> Vec<Outfit> {
    let filtered = filter_by_occasion_and_weather(items, occasion, weather);

    if filtered.is_empty() {
        tracing::info!(occasion = %occasion, weather = %weather, "No items match filters");
        return Vec::new();
    }

    let mut all_outfits = generate_top_bottom_combos(&filtered);
    all_outfits.extend(generate_dress_outfits(&filtered));
    let candidates = all_outfits.len();

    // sort_by is stable: equal scores keep generation order
    all_outfits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let limit = usize::try_from(n_outfits.max(1)).unwrap_or(usize::MAX);
    all_outfits.truncate(limit);

    let selected: Vec<Outfit> = all_outfits
        .into_iter()
        .map(|outfit| maybe_add_outerwear(&filtered, outfit, weather))
        .collect();

    tracing::info!(
        candidates,
        returned = selected.len(),
        requested = n_outfits,
        "Outfits generated"
    );

    selected
}
