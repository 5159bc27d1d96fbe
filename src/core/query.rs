//! Query pipeline: filter → search → stable sort.
//!
//! Produces a derived view; the input list is never mutated. Filters apply
//! in a fixed order so the CLI and the tests agree on the result.

use crate::models::{ActivityRecord, Status};
use clap::ValueEnum;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Most recent first
    #[default]
    DateDesc,
    DateAsc,
    HoursDesc,
    HoursAsc,
    Theme,
    Title,
}

#[derive(Clone, Debug, Default)]
pub struct Query {
    /// None = all themes
    pub theme: Option<String>,
    /// None = all statuses
    pub status: Option<Status>,
    /// Case-insensitive substring; empty matches everything
    pub search: String,
    pub sort: SortKey,
}

pub fn apply(records: &[ActivityRecord], query: &Query) -> Vec<ActivityRecord> {
    let mut view: Vec<ActivityRecord> = records
        .iter()
        .filter(|rec| match &query.theme {
            Some(theme) => rec.theme == *theme,
            None => true,
        })
        .filter(|rec| match query.status {
            Some(status) => rec.status == status,
            None => true,
        })
        .filter(|rec| matches_search(rec, &query.search))
        .cloned()
        .collect();

    // Vec::sort_by is stable: ties keep their relative input order.
    match query.sort {
        SortKey::DateDesc => view.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::DateAsc => view.sort_by(|a, b| a.date.cmp(&b.date)),
        SortKey::HoursDesc => view.sort_by(|a, b| b.hours.cmp(&a.hours)),
        SortKey::HoursAsc => view.sort_by(|a, b| a.hours.cmp(&b.hours)),
        SortKey::Theme => view.sort_by(|a, b| fold(&a.theme).cmp(&fold(&b.theme))),
        SortKey::Title => view.sort_by(|a, b| fold(&a.title).cmp(&fold(&b.title))),
    }

    view
}

/// Case-folded key for the lexicographic sorts.
fn fold(s: &str) -> String {
    s.to_lowercase()
}

fn matches_search(rec: &ActivityRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }

    let needle = search.to_lowercase();

    rec.title.to_lowercase().contains(&needle)
        || rec.description.to_lowercase().contains(&needle)
        || rec.theme.to_lowercase().contains(&needle)
        || rec
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}
