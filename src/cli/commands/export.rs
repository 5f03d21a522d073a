use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::store::CsvStore;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = CsvStore::open(&cfg.data_file)?;
        ExportLogic::export(&store, format, file, range, *force)?;
    }
    Ok(())
}
