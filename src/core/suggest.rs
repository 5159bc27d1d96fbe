//! Suggestions for completing the portfolio: which canonical themes are
//! still uncovered, and an activity idea for each.

use crate::core::stats::Statistics;
use crate::models::activity_type::ACTIVITY_TYPES;
use crate::models::theme::CANONICAL_THEMES;

#[derive(Debug, Clone, PartialEq)]
pub struct Suggestions {
    pub missing_themes: Vec<String>,
    pub recommended_activities: Vec<String>,
}

pub fn build(stats: &Statistics) -> Suggestions {
    let missing_themes: Vec<String> = CANONICAL_THEMES
        .iter()
        .filter(|theme| !stats.unique_themes.iter().any(|t| t == *theme))
        .map(|theme| theme.to_string())
        .collect();

    // One idea per missing theme, cycling through the type catalog.
    let recommended_activities = missing_themes
        .iter()
        .enumerate()
        .map(|(i, theme)| {
            let spec = &ACTIVITY_TYPES[i % ACTIVITY_TYPES.len()];
            match spec.max_count {
                Some(count) => format!(
                    "{theme}: log a {} (max {}×, up to {}h each)",
                    spec.name, count, spec.max_hours
                ),
                None => format!("{theme}: log a {} (up to {}h)", spec.name, spec.max_hours),
            }
        })
        .collect();

    Suggestions {
        missing_themes,
        recommended_activities,
    }
}
