use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use std::path::Path;

use super::control::TIMESTAMP_FORMAT;

const CURRENT_SCHEMA_VERSION: i32 = 1;

/// One wallpaper applied by the sync controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WallpaperChange {
    pub id: i64,
    pub image_url: String,
    pub applied_at: String,
}

pub struct HistoryDb {
    conn: Connection,
}

impl HistoryDb {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("opening history database {}", path.display()))?;
        Self::from_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        Self::init_schema(&conn)?;
        Ok(HistoryDb { conn })
    }

    fn init_schema(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS schema_version (
                version INTEGER NOT NULL,
                updated TEXT NOT NULL,
                PRIMARY KEY (version)
            )",
            (),
        )?;

        let version: i32 = conn
            .query_row(
                "SELECT version FROM schema_version ORDER BY version DESC LIMIT 1",
                [],
                |row| row.get(0),
            )
            .optional()?
            .unwrap_or(0);

        if version < CURRENT_SCHEMA_VERSION {
            Self::migrate_schema(conn, version)?;
        }

        Ok(())
    }

    fn migrate_schema(conn: &Connection, from_version: i32) -> Result<()> {
        if from_version == 0 {
            conn.execute(
                "CREATE TABLE IF NOT EXISTS wallpaper_changes (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    image_url TEXT NOT NULL,
                    applied_at TEXT NOT NULL
                )",
                (),
            )?;
            conn.execute(
                "INSERT INTO schema_version (version, updated) VALUES (1, datetime('now'))",
                [],
            )?;
        }
        Ok(())
    }

    pub fn last_change(&self) -> Result<Option<WallpaperChange>> {
        let change = self
            .conn
            .query_row(
                "SELECT id, image_url, applied_at FROM wallpaper_changes ORDER BY id DESC LIMIT 1",
                [],
                |row| {
                    Ok(WallpaperChange {
                        id: row.get(0)?,
                        image_url: row.get(1)?,
                        applied_at: row.get(2)?,
                    })
                },
            )
            .optional()?;
        Ok(change)
    }

    /// Record `image_url` as applied now (local time).
    pub fn record_change(&self, image_url: &str) -> Result<WallpaperChange> {
        let applied_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.record_change_at(image_url, &applied_at)
    }

    pub fn record_change_at(&self, image_url: &str, applied_at: &str) -> Result<WallpaperChange> {
        self.conn.execute(
            "INSERT INTO wallpaper_changes (image_url, applied_at) VALUES (?, ?)",
            (image_url, applied_at),
        )?;
        Ok(WallpaperChange {
            id: self.conn.last_insert_rowid(),
            image_url: image_url.to_string(),
            applied_at: applied_at.to_string(),
        })
    }

    /// Newest first.
    pub fn recent_changes(&self, limit: usize) -> Result<Vec<WallpaperChange>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, image_url, applied_at FROM wallpaper_changes ORDER BY id DESC LIMIT ?",
        )?;
        let rows = stmt.query_map([limit as i64], |row| {
            Ok(WallpaperChange {
                id: row.get(0)?,
                image_url: row.get(1)?,
                applied_at: row.get(2)?,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        Ok(result)
    }
}
