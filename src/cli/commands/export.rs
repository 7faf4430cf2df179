use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::task_kind::TaskRegistry;

pub fn handle(cmd: &Commands, cfg: &Config, registry: &TaskRegistry) -> AppResult<()> {
    if let Commands::Export {
        campaign,
        format,
        out,
        sort,
        staff,
        reset_accounts_only,
        force,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &mut pool,
            registry,
            cfg,
            campaign,
            format.clone(),
            out,
            sort.as_deref(),
            *staff,
            *reset_accounts_only,
            *force,
        )?;
    }
    Ok(())
}
