use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::sort::{resolve_sort_field, sort_rows};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::status_row::AnnotatorStatusRow;
use crate::models::task_kind::TaskRegistry;
use crate::report::collect_status_rows;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, registry: &TaskRegistry) -> AppResult<()> {
    if let Commands::Status {
        campaign,
        sort,
        staff,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        for name in campaign.split(',').map(str::trim) {
            let mut report = collect_status_rows(&mut pool, name, registry, cfg)?;
            sort_rows(&mut report.rows, resolve_sort_field(sort.as_deref(), *staff));

            println!("\n=== {} ===", report.campaign.name);
            print!("{}", render_table(&report.rows, *staff));
        }
    }
    Ok(())
}

fn render_table(rows: &[AnnotatorStatusRow], staff: bool) -> String {
    let mut columns = vec![
        Column::left("Username"),
        Column::right("Annotations"),
        Column::left("Progress"),
        Column::left("First Modified"),
        Column::left("Last Modified"),
        Column::right("Time (Coarse)"),
        Column::right("Time (Real)"),
    ];
    if staff {
        columns.push(Column::right("Reliability"));
    }

    let mut table = Table::new(columns);
    for row in rows {
        let mut username = format!("{} {}", row.username, row.status.symbol());
        if !row.is_active {
            username.push_str(" (inactive)");
        }

        let mut cells = vec![
            username,
            row.annotations.to_string(),
            row.progress.clone(),
            row.first_trim.clone(),
            row.last_trim.clone(),
            row.coarse_spaced.clone(),
            row.busy_spaced.clone(),
        ];
        if staff {
            cells.push(row.reliability.render());
        }
        table.add_row(cells);
    }

    table.render()
}
