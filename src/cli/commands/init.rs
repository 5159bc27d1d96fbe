use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{LocalStore, RecordStore};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite key-value store (prod or test mode)
///  - the default seed when the store is empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.db {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let path = Config::config_file();
    let cfg = Config::load();
    let db_path = if let Some(custom) = &cli.db {
        custom.clone()
    } else {
        cfg.database.clone()
    };

    println!("⚙️  Initializing rActivities…");
    println!("📄 Config file : {}", path.display());
    println!("🗄️  Database   : {}", &db_path);

    let mut store = LocalStore::open(&db_path)?;

    // First load seeds the default activity list.
    let records = store.load()?;
    println!("✅ Store ready with {} activities", records.len());

    // Internal log (non blocking)
    if let Err(e) = store.ttlog(
        "init",
        "",
        &format!("Store initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 rActivities initialization completed!");
    Ok(())
}
