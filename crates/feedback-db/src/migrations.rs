use anyhow::Result;
use rusqlite::Connection;
use tracing::info;

pub fn run(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (version INTEGER NOT NULL);"
    )?;

    let version: i64 = conn
        .query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |r| r.get(0))?;

    if version < 1 {
        info!("Running migration v1 (feedbacks table)");
        conn.execute_batch(
            "
            CREATE TABLE feedbacks (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                app_id      TEXT NOT NULL,
                version     TEXT,
                content     TEXT NOT NULL,
                contact     TEXT,
                device_info TEXT,
                location    TEXT,
                status      TEXT NOT NULL DEFAULT 'pending'
                            CHECK (status IN ('pending', 'processed')),
                -- epoch milliseconds
                created_at  INTEGER NOT NULL
                            DEFAULT (CAST((julianday('now') - 2440587.5) * 86400000 AS INTEGER))
            );

            CREATE INDEX idx_feedbacks_created
                ON feedbacks(created_at);

            INSERT INTO schema_version (version) VALUES (1);
            ",
        )?;
    }

    info!("Database migrations complete");
    Ok(())
}
