use crate::errors::AppResult;
use rusqlite::Connection;

/// Create the schema if it does not exist yet. Idempotent.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS campaigns (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            name        TEXT NOT NULL UNIQUE,
            task_kind   TEXT NOT NULL,
            options     TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS annotators (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            campaign_id INTEGER NOT NULL REFERENCES campaigns(id),
            username    TEXT NOT NULL,
            is_active   INTEGER NOT NULL DEFAULT 1,
            is_staff    INTEGER NOT NULL DEFAULT 0,
            UNIQUE (campaign_id, username)
        );

        CREATE TABLE IF NOT EXISTS agendas (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            campaign_id INTEGER NOT NULL REFERENCES campaigns(id),
            username    TEXT NOT NULL,
            total_items INTEGER NOT NULL,
            UNIQUE (campaign_id, username)
        );

        CREATE TABLE IF NOT EXISTS records (
            id                   INTEGER PRIMARY KEY AUTOINCREMENT,
            campaign_id          INTEGER NOT NULL REFERENCES campaigns(id),
            annotator            TEXT NOT NULL,
            start_time           REAL,
            end_time             REAL,
            score                REAL,
            mqm                  TEXT,
            segment_key          TEXT NOT NULL,
            target_key           TEXT NOT NULL,
            item_type            TEXT NOT NULL,
            record_identity      TEXT NOT NULL,
            document_key         TEXT,
            is_complete_document INTEGER NOT NULL DEFAULT 0
        );

        CREATE INDEX IF NOT EXISTS idx_records_campaign_annotator
            ON records (campaign_id, annotator);",
    )?;
    Ok(())
}
