//! Canonical theme list for the portfolio.
//!
//! Themes are stored as free strings: imported or seeded data may carry
//! buckets outside this list (e.g. "Hardware") and the engines group by the
//! literal value. The canonical list drives CLI hints and the missing-theme
//! suggestions.

pub const CANONICAL_THEMES: [&str; 8] = [
    "Development",
    "Networks",
    "Security",
    "Electronics/IoT",
    "Soft Skills",
    "Languages",
    "Communication",
    "IT Law",
];

pub fn is_canonical(theme: &str) -> bool {
    CANONICAL_THEMES
        .iter()
        .any(|t| t.eq_ignore_ascii_case(theme))
}
