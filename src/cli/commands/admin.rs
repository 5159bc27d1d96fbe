use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store;
use crate::ui::messages::{info, success};

/// Toggle or show the admin presentation flag.
///
/// The flag only switches edit affordances on in consuming UIs; it is not
/// an authentication mechanism and never gates mutations here.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Admin { enable, disable } = cmd {
        let store = store::open_local(cfg)?;

        if *enable {
            store.set_admin_mode(true)?;
            store.ttlog("admin", "", "Admin mode enabled")?;
            success("Admin mode enabled.");
        } else if *disable {
            store.set_admin_mode(false)?;
            store.ttlog("admin", "", "Admin mode disabled")?;
            success("Admin mode disabled.");
        } else {
            let state = if store.admin_mode()? {
                "enabled"
            } else {
                "disabled"
            };
            info(format!("Admin mode is {state}."));
        }
    }
    Ok(())
}
