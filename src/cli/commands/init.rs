use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let mut cfg = Config::default();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    if !cli.test {
        cfg.save()?;
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized: {}", cfg.database));
    Ok(())
}
