use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::store::log::LogLogic;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let store = CsvStore::open(&cfg.data_file)?;
            LogLogic::print_log(&store.log_path())?;
        } else {
            info("Use `log --print` to display the internal audit log.");
        }
    }
    Ok(())
}
