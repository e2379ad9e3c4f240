use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = Store::open(&cfg.database)?;
        ExportLogic::export(&store, format, file, *force)?;
    }
    Ok(())
}
