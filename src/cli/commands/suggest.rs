use crate::config::Config;
use crate::core::{stats, suggest};
use crate::errors::AppResult;
use crate::store::{DataSource, RecordStore};
use crate::ui::messages::success;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (missing_themes, recommended) = match DataSource::from_config(cfg)? {
        DataSource::Local(mut store) => {
            let records = store.load()?;
            let suggestions = suggest::build(&stats::compute(&records));
            (suggestions.missing_themes, suggestions.recommended_activities)
        }
        DataSource::Bundle(source) => {
            let s = source.load_bundle()?.suggestions;
            (s.missing_themes, s.recommended_activities)
        }
    };

    if missing_themes.is_empty() && recommended.is_empty() {
        success("Every canonical theme is covered — nothing to suggest.");
        return Ok(());
    }

    println!("💡 Suggestions to complete the portfolio:\n");

    if !missing_themes.is_empty() {
        println!("   Missing themes: {}", missing_themes.join(", "));
    }

    if !recommended.is_empty() {
        println!("\n   Recommended activities:");
        for line in &recommended {
            println!("   - {}", line);
        }
    }

    Ok(())
}
