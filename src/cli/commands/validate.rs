use crate::config::Config;
use crate::core::validate::MAX_THEME_HOURS;
use crate::core::{stats, validate};
use crate::errors::AppResult;
use crate::store::{DataSource, RecordStore};
use crate::ui::messages::{success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    match DataSource::from_config(cfg)? {
        DataSource::Local(mut store) => {
            let records = store.load()?;
            let report = validate::validate(&stats::compute(&records));

            println!("📋 Validation status:\n");
            print_check("Total hours", report.hours.passed, &report.hours.message);
            print_check("Themes", report.themes.passed, &report.themes.message);
            print_check(
                "Activities",
                report.activities.passed,
                &report.activities.message,
            );

            for w in &report.theme_warnings {
                println!("   ⚠️ {}: {}h (max {}h)", w.theme, w.hours, MAX_THEME_HOURS);
            }

            println!();
            if report.is_compliant() {
                success("Portfolio is compliant.");
            } else {
                warning("Portfolio is not compliant yet.");
            }
        }
        DataSource::Bundle(source) => {
            // Preformatted verdicts, displayed verbatim.
            let bundle = source.load_bundle()?;
            let v = &bundle.validation;

            println!("📋 Validation status (from {}):\n", source.path().display());
            println!("   {}", v.hours_check);
            println!("   {}", v.themes_check);
            println!("   {}", v.activities_check);

            if !v.theme_distribution.is_empty() {
                println!("\n   Theme hours:");
                for (theme, hours) in &v.theme_distribution {
                    println!("   - {}: {}/{}h", theme, hours, MAX_THEME_HOURS);
                }
            }
        }
    }

    Ok(())
}

fn print_check(label: &str, passed: bool, message: &str) {
    let icon = if passed { "✅" } else { "⚠️" };
    println!("   {} {}: {}", icon, label, message);
}
