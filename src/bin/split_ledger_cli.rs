use std::{
    env,
    io::{self, IsTerminal},
    process,
};

use split_ledger::{
    cli::{run_cli, CliMode},
    config::{Config, ConfigManager},
};

const SCRIPT_ENV: &str = "SPLIT_LEDGER_SCRIPT";

fn main() {
    let config = load_config();
    split_ledger::init_with_directive(&config.log_directive);

    let mode = if env::args().skip(1).any(|arg| arg == "--script")
        || env::var_os(SCRIPT_ENV).is_some()
        || !io::stdin().is_terminal()
    {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    if let Err(err) = run_cli(mode, config) {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn load_config() -> Config {
    match ConfigManager::new().and_then(|manager| manager.load_or_create()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Warning: could not load config, using defaults: {err}");
            Config::default()
        }
    }
}
