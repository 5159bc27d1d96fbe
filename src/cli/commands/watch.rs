use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::watch::Watcher;
use crate::errors::{AppError, AppResult};
use crate::store::BundleSource;
use crate::ui::messages::info;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

/// Watch the JSON data file and report content changes.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { interval, duration } = cmd {
        let path = cfg.data_source.clone().ok_or_else(|| {
            AppError::Config(
                "watch needs a JSON data source: pass --data or set data_source".into(),
            )
        })?;

        let interval = Duration::from_secs(interval.unwrap_or(cfg.watch_interval_secs).max(1));

        // Initial read doubles as a sanity check on the path.
        let bundle = BundleSource::new(&path).load_bundle()?;
        info(format!(
            "Watching {} ({} activities, {}h) every {}s",
            path,
            bundle.activities.len(),
            bundle.statistics.current_total_hours,
            interval.as_secs()
        ));

        let watcher = Watcher::spawn(PathBuf::from(&path), interval, |bundle| {
            info(format!(
                "🔄 Data updated: {} activities, {}h total",
                bundle.activities.len(),
                bundle.statistics.current_total_hours
            ));
        });

        match duration {
            Some(secs) => {
                thread::sleep(Duration::from_secs(*secs));
                watcher.stop();
                info("Watcher stopped.");
            }
            None => {
                // Foreground watch: runs until the process is interrupted.
                loop {
                    thread::sleep(Duration::from_secs(60));
                }
            }
        }
    }
    Ok(())
}
