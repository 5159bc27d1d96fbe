//! Shapes of the file-backed JSON data source.
//!
//! The bundle carries precomputed statistics, validation and suggestions
//! next to the activity list. Those blocks are trusted as-is and displayed
//! without recomputation; only the activity list feeds the query pipeline.

use super::activity::ActivityRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataBundle {
    pub activities: Vec<ActivityRecord>,
    pub statistics: BundleStatistics,
    pub validation: BundleValidation,
    pub suggestions: BundleSuggestions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleStatistics {
    pub current_total_hours: u32,
    pub themes_count: usize,
    pub activities_count: usize,
    pub completion_percentage: f64,
}

/// The check fields are preformatted one-line verdicts ("✅ ..." / "❌ ...").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleValidation {
    pub hours_check: String,
    pub themes_check: String,
    pub activities_check: String,
    #[serde(default)]
    pub theme_distribution: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleSuggestions {
    #[serde(default)]
    pub missing_themes: Vec<String>,
    #[serde(default)]
    pub recommended_activities: Vec<String>,
}
