use crate::errors::{AppError, AppResult};
use crate::models::annotator::Annotator;
use crate::models::campaign::{Campaign, CampaignOptions};
use crate::models::item_type::ItemType;
use crate::models::record::AnnotationRecord;
use crate::models::task_kind::TaskKind;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

/// Insert the campaign if new, otherwise return the stored one unchanged.
pub fn upsert_campaign(
    conn: &Connection,
    name: &str,
    kind: TaskKind,
    options: &CampaignOptions,
) -> AppResult<Campaign> {
    conn.execute(
        "INSERT OR IGNORE INTO campaigns (name, task_kind, options) VALUES (?1, ?2, ?3)",
        params![name, kind.to_db_str(), options.to_db_str()],
    )?;
    find_campaign(conn, name)
}

pub fn find_campaign(conn: &Connection, name: &str) -> AppResult<Campaign> {
    let row = conn
        .query_row(
            "SELECT id, name, task_kind, options FROM campaigns WHERE name = ?1",
            [name],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                ))
            },
        )
        .optional()?;

    let (id, name, kind_str, options_str) =
        row.ok_or_else(|| AppError::UnknownCampaign(name.to_string()))?;
    let kind = TaskKind::from_db_str(&kind_str).ok_or(AppError::InvalidTaskKind(kind_str))?;

    Ok(Campaign {
        id,
        name,
        kind,
        options: CampaignOptions::parse(&options_str),
    })
}

pub fn upsert_annotator(conn: &Connection, campaign_id: i64, annotator: &Annotator) -> AppResult<()> {
    conn.execute(
        "INSERT INTO annotators (campaign_id, username, is_active, is_staff)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT (campaign_id, username)
         DO UPDATE SET is_active = ?3, is_staff = ?4",
        params![
            campaign_id,
            annotator.username,
            annotator.is_active as i32,
            annotator.is_staff as i32,
        ],
    )?;
    Ok(())
}

pub fn upsert_agenda_total(
    conn: &Connection,
    campaign_id: i64,
    username: &str,
    total_items: u32,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO agendas (campaign_id, username, total_items)
         VALUES (?1, ?2, ?3)
         ON CONFLICT (campaign_id, username) DO UPDATE SET total_items = ?3",
        params![campaign_id, username, total_items],
    )?;
    Ok(())
}

pub fn insert_record(
    conn: &Connection,
    campaign_id: i64,
    record: &AnnotationRecord,
) -> AppResult<()> {
    conn.execute(
        "INSERT INTO records (campaign_id, annotator, start_time, end_time, score, mqm,
                              segment_key, target_key, item_type, record_identity,
                              document_key, is_complete_document)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            campaign_id,
            record.annotator,
            record.start_time,
            record.end_time,
            record.score,
            record.mqm,
            record.segment_key,
            record.target_key,
            record.item_type.to_db_str(),
            record.record_identity,
            record.document_key,
            record.is_complete_document as i32,
        ],
    )?;
    Ok(())
}

pub fn load_annotators(conn: &Connection, campaign_id: i64) -> AppResult<Vec<Annotator>> {
    let mut stmt = conn.prepare(
        "SELECT username, is_active, is_staff FROM annotators
         WHERE campaign_id = ?1
         ORDER BY username ASC",
    )?;
    let rows = stmt.query_map([campaign_id], |row| {
        Ok(Annotator {
            username: row.get(0)?,
            is_active: row.get::<_, i32>(1)? != 0,
            is_staff: row.get::<_, i32>(2)? != 0,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// All records one annotator completed in a campaign. Document kinds pass
/// `exclude_complete_documents` to drop whole-document summary rows.
pub fn load_records_for(
    conn: &Connection,
    campaign_id: i64,
    username: &str,
    exclude_complete_documents: bool,
) -> AppResult<Vec<AnnotationRecord>> {
    let mut sql = String::from(
        "SELECT annotator, start_time, end_time, score, mqm, segment_key, target_key,
                item_type, record_identity, document_key, is_complete_document
         FROM records
         WHERE campaign_id = ?1 AND annotator = ?2",
    );
    if exclude_complete_documents {
        sql.push_str(" AND is_complete_document = 0");
    }
    sql.push_str(" ORDER BY id ASC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params![campaign_id, username], map_record_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_record_row(row: &Row) -> Result<AnnotationRecord> {
    let item_type_str: String = row.get("item_type")?;
    Ok(AnnotationRecord {
        annotator: row.get("annotator")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        score: row.get("score")?,
        mqm: row.get("mqm")?,
        segment_key: row.get("segment_key")?,
        target_key: row.get("target_key")?,
        item_type: ItemType::from_db_str(&item_type_str),
        record_identity: row.get("record_identity")?,
        document_key: row.get("document_key")?,
        is_complete_document: row.get::<_, i32>("is_complete_document")? != 0,
    })
}

/// Assigned item total for one annotator. `Ok(None)` means no agenda row
/// exists; the caller decides whether that is an error state.
pub fn resolve_assigned_total(
    conn: &Connection,
    campaign_id: i64,
    username: &str,
) -> AppResult<Option<u32>> {
    let total = conn
        .query_row(
            "SELECT total_items FROM agendas WHERE campaign_id = ?1 AND username = ?2",
            params![campaign_id, username],
            |row| row.get::<_, u32>(0),
        )
        .optional()?;
    Ok(total)
}
