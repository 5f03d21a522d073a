use crate::config::Config;
use crate::errors::AppResult;
use crate::store::CsvStore;
use crate::store::log::otlog;

use crate::cli::parser::Cli;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the flat data file with its column header
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Some(custom) = &cli.data {
        Config::init_all(Some(custom.clone()), cli.test)?;
    } else {
        Config::init_all(None, cli.test)?;
    }

    let mut cfg = Config::load();
    if let Some(custom) = &cli.data {
        cfg.data_file = custom.clone();
    }

    println!("⚙️  Initializing ottracker…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗂️  Data file   : {}", &cfg.data_file);

    let store = CsvStore::open(&cfg.data_file)?;

    println!("✅ Data file initialized at {}", &cfg.data_file);

    // Audit log (non-blocking)
    if let Err(e) = otlog(
        &store.log_path(),
        "init",
        &cfg.data_file,
        "Data file initialized",
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 ottracker initialization completed!");
    Ok(())
}
