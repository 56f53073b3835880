//! Session store backed by the `session` table of the tool's database.

use super::SessionStore;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use log::debug;
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::Value;
use std::collections::BTreeMap;

pub struct SqliteStore<'c> {
    conn: &'c Connection,
    sid: String,
}

impl<'c> SqliteStore<'c> {
    /// The `session` table must already exist (see `db::initialize::init_db`).
    pub fn new(conn: &'c Connection, sid: &str) -> Self {
        Self {
            conn,
            sid: sid.to_string(),
        }
    }

    /// Upsert `values` inside one transaction, optionally wiping the
    /// session first. Any failure rolls the whole batch back.
    fn write_batch(&self, values: BTreeMap<String, Value>, wipe: bool) -> AppResult<()> {
        let tx = self.conn.unchecked_transaction()?;

        if wipe {
            let n = tx.execute("DELETE FROM session WHERE sid = ?1", params![self.sid])?;
            debug!("session '{}' cleared ({} keys)", self.sid, n);
        }

        {
            let now = Local::now().to_rfc3339();
            let mut stmt = tx.prepare_cached(UPSERT)?;
            for (key, value) in &values {
                stmt.execute(params![self.sid, key, value.to_string(), now])?;
            }
        }

        tx.commit()?;
        debug!("session '{}' wrote {} keys", self.sid, values.len());
        Ok(())
    }
}

const UPSERT: &str = "INSERT INTO session (sid, key, value, updated_at)
     VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(sid, key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

fn decode(key: &str, raw: &str) -> AppResult<Value> {
    serde_json::from_str(raw)
        .map_err(|e| AppError::Session(format!("corrupted value for '{}': {}", key, e)))
}

impl SessionStore for SqliteStore<'_> {
    fn clear(&mut self) -> AppResult<()> {
        let n = self
            .conn
            .execute("DELETE FROM session WHERE sid = ?1", params![self.sid])?;
        debug!("session '{}' cleared ({} keys)", self.sid, n);
        Ok(())
    }

    fn get(&self, key: &str) -> AppResult<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM session WHERE sid = ?1 AND key = ?2",
                params![self.sid, key],
                |row| row.get(0),
            )
            .optional()?;

        raw.map(|r| decode(key, &r)).transpose()
    }

    fn set(&mut self, key: &str, value: Value) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        let mut stmt = self.conn.prepare_cached(UPSERT)?;
        stmt.execute(params![self.sid, key, value.to_string(), now])?;
        Ok(())
    }

    fn set_many(&mut self, values: BTreeMap<String, Value>) -> AppResult<()> {
        self.write_batch(values, false)
    }

    fn replace(&mut self, values: BTreeMap<String, Value>) -> AppResult<()> {
        self.write_batch(values, true)
    }

    fn snapshot(&self) -> AppResult<BTreeMap<String, Value>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT key, value FROM session WHERE sid = ?1 ORDER BY key ASC")?;

        let rows = stmt.query_map(params![self.sid], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?))
        })?;

        let mut out = BTreeMap::new();
        for r in rows {
            let (key, raw) = r?;
            let value = decode(&key, &raw)?;
            out.insert(key, value);
        }
        Ok(out)
    }
}
