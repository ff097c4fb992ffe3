use std::collections::HashMap;
use std::sync::LazyLock;

/// An RGB triple
pub type Rgb = (u8, u8, u8);

/// Returned for any color name missing from the table
pub const FALLBACK_RGB: Rgb = (128, 128, 128);

/// Named garment colors and their RGB values
static COLOR_TABLE: LazyLock<HashMap<&'static str, Rgb>> = LazyLock::new(|| {
    HashMap::from([
        ("white", (255, 255, 255)),
        ("black", (0, 0, 0)),
        ("blue", (70, 130, 180)),
        ("navy", (0, 0, 128)),
        ("yellow", (255, 255, 0)),
        ("beige", (245, 245, 220)),
        ("grey", (128, 128, 128)),
        ("gray", (128, 128, 128)),
        ("pink", (255, 182, 193)),
        // Common garment colors beyond the basics
        ("red", (200, 30, 45)),
        ("green", (34, 139, 34)),
        ("brown", (139, 69, 19)),
        ("khaki", (195, 176, 145)),
        ("olive", (128, 128, 0)),
        ("burgundy", (128, 0, 32)),
        ("cream", (255, 253, 208)),
        ("charcoal", (54, 69, 79)),
    ])
});

/// Resolves a color name to RGB.
///
/// Lookup is case-insensitive and ignores surrounding whitespace. Unknown
/// names resolve to neutral grey, so this never fails.
pub fn color_to_rgb(name: &str) -> Rgb {
    let key = name.trim().to_lowercase();
    COLOR_TABLE.get(key.as_str()).copied().unwrap_or(FALLBACK_RGB)
}

/// Euclidean distance between two named colors in RGB space.
///
/// Only meaningful as a relative ranking signal: smaller means the colors
/// sit closer together.
pub fn color_distance(c1: &str, c2: &str) -> f64 {
    let (r1, g1, b1) = color_to_rgb(c1);
    let (r2, g2, b2) = color_to_rgb(c2);

    let dr = f64::from(r1) - f64::from(r2);
    let dg = f64::from(g1) - f64::from(g2);
    let db = f64::from(b1) - f64::from(b2);

    (dr * dr + dg * dg + db * db).sqrt()
}
