use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::success;
use std::path::Path;

/// Replace the stored activity list with the content of a JSON file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut store = store::open_local(cfg)?;

        let count = import::import_file(&mut store, Path::new(file))?;

        store.ttlog(
            "import",
            file,
            &format!("Imported {count} activities from {file}"),
        )?;

        success(format!("Imported {count} activities from {file}"));
    }
    Ok(())
}
