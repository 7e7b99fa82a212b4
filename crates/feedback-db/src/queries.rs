use crate::Database;
use crate::models::{FeedbackRow, NewFeedback};
use anyhow::Result;
use rusqlite::Connection;

impl Database {
    // -- Feedbacks --

    /// Insert one feedback record and return its id.
    /// `status` and `created_at` come from column defaults.
    pub fn insert_feedback(&self, feedback: &NewFeedback) -> Result<i64> {
        self.with_conn_mut(|conn| {
            conn.execute(
                "INSERT INTO feedbacks (app_id, version, content, contact, device_info, location)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    feedback.app_id,
                    feedback.version,
                    feedback.content,
                    feedback.contact,
                    feedback.device_info,
                    feedback.location,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        })
    }

    /// One page of feedbacks, most recent first.
    pub fn list_feedbacks(&self, limit: u32, offset: u64) -> Result<Vec<FeedbackRow>> {
        self.with_conn(|conn| query_feedbacks(conn, limit, offset))
    }

    pub fn count_feedbacks(&self) -> Result<u64> {
        self.with_conn(|conn| {
            let total: i64 =
                conn.query_row("SELECT COUNT(*) AS total FROM feedbacks", [], |row| row.get(0))?;
            Ok(total as u64)
        })
    }
}

fn query_feedbacks(conn: &Connection, limit: u32, offset: u64) -> Result<Vec<FeedbackRow>> {
    let mut stmt = conn.prepare(
        "SELECT id,
                app_id      AS appId,
                version,
                content,
                contact,
                device_info AS deviceInfo,
                location,
                status,
                created_at  AS createdAt
         FROM feedbacks
         ORDER BY created_at DESC, id DESC
         LIMIT ?1 OFFSET ?2",
    )?;

    let rows = stmt
        .query_map(rusqlite::params![limit, offset as i64], |row| {
            Ok(FeedbackRow {
                id: row.get("id")?,
                app_id: row.get("appId")?,
                version: row.get("version")?,
                content: row.get("content")?,
                contact: row.get("contact")?,
                device_info: row.get("deviceInfo")?,
                location: row.get("location")?,
                status: row.get("status")?,
                created_at: row.get("createdAt")?,
            })
        })?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(rows)
}
