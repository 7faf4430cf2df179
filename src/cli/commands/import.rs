use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{insert_record, upsert_agenda_total, upsert_annotator, upsert_campaign};
use crate::errors::{AppError, AppResult};
use crate::models::annotator::Annotator;
use crate::models::campaign::CampaignOptions;
use crate::models::item_type::ItemType;
use crate::models::record::AnnotationRecord;
use crate::ui::messages::success;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// One annotation record as exported by the evaluation frontend.
#[derive(Deserialize)]
struct RecordLine {
    annotator: String,
    start_time: Option<f64>,
    end_time: Option<f64>,
    score: Option<f64>,
    /// MQM issue annotations, either a JSON array or a pre-encoded string.
    mqm: Option<serde_json::Value>,
    segment_key: String,
    target_key: String,
    item_type: String,
    /// Unique id of the annotated item instance.
    item_id: String,
    document_key: Option<String>,
    #[serde(default)]
    is_complete_document: bool,
}

#[derive(Deserialize)]
struct AnnotatorLine {
    username: String,
    #[serde(default = "default_active")]
    is_active: bool,
    #[serde(default)]
    is_staff: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Deserialize)]
struct AgendaLine {
    username: String,
    total_items: u32,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import {
        campaign,
        kind,
        options,
        records,
        annotators,
        agendas,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let conn = &mut pool.conn;

        let opts = CampaignOptions::parse(options);
        let stored = upsert_campaign(conn, campaign, *kind, &opts)?;

        let mut imported_annotators = 0usize;
        if let Some(file) = annotators {
            for (line_no, line) in read_lines(file)? {
                let parsed: AnnotatorLine = parse_line(&line, line_no)?;
                upsert_annotator(
                    conn,
                    stored.id,
                    &Annotator::new(&parsed.username, parsed.is_active, parsed.is_staff),
                )?;
                imported_annotators += 1;
            }
        }

        let mut imported_agendas = 0usize;
        if let Some(file) = agendas {
            for (line_no, line) in read_lines(file)? {
                let parsed: AgendaLine = parse_line(&line, line_no)?;
                upsert_agenda_total(conn, stored.id, &parsed.username, parsed.total_items)?;
                imported_agendas += 1;
            }
        }

        let mut imported_records = 0usize;
        if let Some(file) = records {
            let mut seen_annotators = HashSet::new();
            let tx = conn.transaction()?;
            for (line_no, line) in read_lines(file)? {
                let parsed: RecordLine = parse_line(&line, line_no)?;
                let record = to_record(parsed);
                // Annotators referenced only by records get a default
                // active, non-staff account.
                if seen_annotators.insert(record.annotator.clone()) {
                    upsert_annotator_if_missing(&tx, stored.id, &record.annotator)?;
                }
                insert_record(&tx, stored.id, &record)?;
                imported_records += 1;
            }
            tx.commit()?;
        }

        success(format!(
            "Imported {} records, {} annotators, {} agenda entries into campaign '{}'",
            imported_records, imported_annotators, imported_agendas, stored.name
        ));
    }
    Ok(())
}

fn read_lines(path: &str) -> AppResult<Vec<(usize, String)>> {
    let file = File::open(Path::new(path))?;
    let mut out = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        if !line.trim().is_empty() {
            out.push((idx + 1, line));
        }
    }
    Ok(out)
}

fn parse_line<T: for<'de> Deserialize<'de>>(line: &str, line_no: usize) -> AppResult<T> {
    serde_json::from_str(line).map_err(|e| AppError::InvalidRecord(line_no, e.to_string()))
}

fn to_record(line: RecordLine) -> AnnotationRecord {
    let mqm = line.mqm.map(|value| match value {
        serde_json::Value::String(s) => s,
        other => other.to_string(),
    });

    AnnotationRecord {
        annotator: line.annotator,
        start_time: line.start_time,
        end_time: line.end_time,
        score: line.score,
        mqm,
        segment_key: line.segment_key,
        target_key: line.target_key,
        item_type: ItemType::from_db_str(&line.item_type),
        record_identity: line.item_id,
        document_key: line.document_key,
        is_complete_document: line.is_complete_document,
    }
}

fn upsert_annotator_if_missing(
    conn: &rusqlite::Connection,
    campaign_id: i64,
    username: &str,
) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO annotators (campaign_id, username, is_active, is_staff)
         VALUES (?1, ?2, 1, 0)",
        rusqlite::params![campaign_id, username],
    )?;
    Ok(())
}
