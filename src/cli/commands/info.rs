use crate::config::Config;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::store::stats::print_store_info;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = CsvStore::open(&cfg.data_file)?;
    print_store_info(&store)
}
