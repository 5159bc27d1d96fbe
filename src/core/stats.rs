//! Aggregation engine: derived statistics over the full record list.
//!
//! Always recomputed from scratch after a load or mutation, never updated
//! incrementally.

use crate::core::validate::TARGET_HOURS;
use crate::models::ActivityRecord;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub total_hours: u32,
    pub activities_count: usize,
    /// Distinct themes in first-appearance order.
    pub unique_themes: Vec<String>,
    /// Theme → summed hours; themes with no records are absent.
    pub theme_hours: BTreeMap<String, u32>,
    /// min(100, round(total/60·100)); 0 for an empty portfolio.
    pub completion_percentage: u32,
}

pub fn compute(records: &[ActivityRecord]) -> Statistics {
    let mut total_hours = 0u32;
    let mut unique_themes: Vec<String> = Vec::new();
    let mut theme_hours: BTreeMap<String, u32> = BTreeMap::new();

    for rec in records {
        total_hours += rec.hours;
        *theme_hours.entry(rec.theme.clone()).or_insert(0) += rec.hours;
        if !unique_themes.contains(&rec.theme) {
            unique_themes.push(rec.theme.clone());
        }
    }

    let completion_percentage = if total_hours == 0 {
        0
    } else {
        let pct = (f64::from(total_hours) / f64::from(TARGET_HOURS) * 100.0).round() as u32;
        pct.min(100)
    };

    Statistics {
        total_hours,
        activities_count: records.len(),
        unique_themes,
        theme_hours,
        completion_percentage,
    }
}
