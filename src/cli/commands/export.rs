use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::DataSource;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let mut source = DataSource::from_config(cfg)?;
        let records = source.records()?;

        ExportLogic::export(&records, format, file, *force)?;
    }
    Ok(())
}
