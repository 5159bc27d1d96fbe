use crate::config::Config;
use crate::core::stats;
use crate::core::validate::{MAX_THEME_HOURS, MIN_ACTIVITIES, MIN_THEMES, TARGET_HOURS};
use crate::errors::AppResult;
use crate::store::{DataSource, RecordStore};
use crate::utils::formatting::{pad_right, progress_bar};
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 20;

pub fn handle(cfg: &Config) -> AppResult<()> {
    match DataSource::from_config(cfg)? {
        DataSource::Local(mut store) => {
            let records = store.load()?;
            let s = stats::compute(&records);

            println!("📊 Portfolio statistics:\n");
            println!("   Hours:      {}/{}h", s.total_hours, TARGET_HOURS);
            println!("   Activities: {}/{}", s.activities_count, MIN_ACTIVITIES);
            println!("   Themes:     {}/{}", s.unique_themes.len(), MIN_THEMES);
            println!(
                "   Completion: {:>3}% {}",
                s.completion_percentage,
                progress_bar(s.total_hours, TARGET_HOURS, BAR_WIDTH)
            );

            if !s.theme_hours.is_empty() {
                println!("\n🏷️  Theme distribution:\n");
                print_distribution(&s.theme_hours);
            }
        }
        DataSource::Bundle(source) => {
            // Bundle statistics are precomputed upstream and trusted as-is.
            let bundle = source.load_bundle()?;
            let s = &bundle.statistics;

            println!(
                "📊 Portfolio statistics (from {}):\n",
                source.path().display()
            );
            println!("   Hours:      {}/{}h", s.current_total_hours, TARGET_HOURS);
            println!("   Activities: {}/{}", s.activities_count, MIN_ACTIVITIES);
            println!("   Themes:     {}/{}", s.themes_count, MIN_THEMES);
            println!(
                "   Completion: {:>3}% {}",
                s.completion_percentage.round() as u32,
                progress_bar(s.current_total_hours, TARGET_HOURS, BAR_WIDTH)
            );

            if !bundle.validation.theme_distribution.is_empty() {
                println!("\n🏷️  Theme distribution:\n");
                print_distribution(&bundle.validation.theme_distribution);
            }
        }
    }

    Ok(())
}

/// Themes sorted by hours, busiest first, with a per-theme cap bar.
fn print_distribution(theme_hours: &std::collections::BTreeMap<String, u32>) {
    let mut entries: Vec<(&String, &u32)> = theme_hours.iter().collect();
    entries.sort_by(|a, b| b.1.cmp(a.1));

    let name_w = entries
        .iter()
        .map(|(theme, _)| theme.width())
        .max()
        .unwrap_or(0);

    for (theme, &hours) in entries {
        let over = hours > MAX_THEME_HOURS;
        println!(
            "   {} {:>2}/{}h {}{}",
            pad_right(theme, name_w),
            hours,
            MAX_THEME_HOURS,
            progress_bar(hours, MAX_THEME_HOURS, 10),
            if over { " ⚠️" } else { "" }
        );
    }
}
