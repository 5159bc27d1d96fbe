//! Validation engine: quota compliance report.
//!
//! Advisory only. The store accepts over-quota data; this report just flags
//! it for the caller to display.

use crate::core::stats::Statistics;

pub const TARGET_HOURS: u32 = 60;
pub const MIN_THEMES: usize = 6;
pub const MIN_ACTIVITIES: usize = 6;
pub const MAX_THEME_HOURS: u32 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct QuotaCheck {
    pub passed: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeWarning {
    pub theme: String,
    pub hours: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub hours: QuotaCheck,
    pub themes: QuotaCheck,
    pub activities: QuotaCheck,
    pub theme_warnings: Vec<ThemeWarning>,
}

impl ValidationReport {
    pub fn is_compliant(&self) -> bool {
        self.hours.passed
            && self.themes.passed
            && self.activities.passed
            && self.theme_warnings.is_empty()
    }
}

pub fn validate(stats: &Statistics) -> ValidationReport {
    let hours = if stats.total_hours == TARGET_HOURS {
        QuotaCheck {
            passed: true,
            message: format!("exactly {TARGET_HOURS} hours"),
        }
    } else if stats.total_hours < TARGET_HOURS {
        QuotaCheck {
            passed: false,
            message: format!("missing {} hours", TARGET_HOURS - stats.total_hours),
        }
    } else {
        QuotaCheck {
            passed: false,
            message: format!("{} hours over", stats.total_hours - TARGET_HOURS),
        }
    };

    let themes_found = stats.unique_themes.len();
    let themes = if themes_found >= MIN_THEMES {
        QuotaCheck {
            passed: true,
            message: format!("{MIN_THEMES} themes or more"),
        }
    } else {
        QuotaCheck {
            passed: false,
            message: format!("missing {} theme(s)", MIN_THEMES - themes_found),
        }
    };

    let activities = if stats.activities_count >= MIN_ACTIVITIES {
        QuotaCheck {
            passed: true,
            message: format!("{MIN_ACTIVITIES} activities or more"),
        }
    } else {
        QuotaCheck {
            passed: false,
            message: format!(
                "missing {} activity(ies)",
                MIN_ACTIVITIES - stats.activities_count
            ),
        }
    };

    let theme_warnings = stats
        .theme_hours
        .iter()
        .filter(|&(_, &h)| h > MAX_THEME_HOURS)
        .map(|(theme, &hours)| ThemeWarning {
            theme: theme.clone(),
            hours,
        })
        .collect();

    ValidationReport {
        hours,
        themes,
        activities,
        theme_warnings,
    }
}
