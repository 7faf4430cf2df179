use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        let file = Config::config_file();

        if *path {
            println!("{}", file.display());
        }

        if *print_config {
            if file.exists() {
                print!("{}", fs::read_to_string(&file)?);
            } else {
                info("No configuration file found; defaults are in effect.");
            }
        }
    }
    Ok(())
}
