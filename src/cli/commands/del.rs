use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::mutate;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes {
            let prompt = format!("Delete activity {}? This action is irreversible.", id);
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        let mut store = store::open_local(cfg)?;
        let removed = mutate::delete(&mut store, id)?;

        store.ttlog("del", id, &format!("Deleted '{}'", removed.title))?;

        success(format!(
            "Activity '{}' ({}h) has been deleted.",
            removed.title, removed.hours
        ));
    }

    Ok(())
}
