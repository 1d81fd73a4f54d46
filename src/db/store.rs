//! Persisted state: two JSON arrays in the `kv` table under fixed keys.
//!
//! Load never fails on content: an absent or malformed value yields an
//! empty collection. Save writes both keys in one transaction.

use crate::core::state::TimesheetState;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub const COMPANIES_KEY: &str = "companies";
pub const WORK_ENTRIES_KEY: &str = "workEntries";

/// Raw JSON stored under `key`, if any.
pub fn get_raw(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

pub fn put_raw(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

fn load_collection<T: DeserializeOwned>(conn: &Connection, key: &str) -> AppResult<Vec<T>> {
    let Some(raw) = get_raw(conn, key)? else {
        return Ok(Vec::new());
    };

    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warning(format!(
                "Stored '{key}' is not valid ({e}); starting from an empty list."
            ));
            Ok(Vec::new())
        }
    }
}

fn save_collection<T: Serialize>(conn: &Connection, key: &str, items: &[T]) -> AppResult<()> {
    let json = serde_json::to_string(items)?;
    put_raw(conn, key, &json)
}

pub fn load_state(pool: &DbPool) -> AppResult<TimesheetState> {
    Ok(TimesheetState::new(
        load_collection(&pool.conn, COMPANIES_KEY)?,
        load_collection(&pool.conn, WORK_ENTRIES_KEY)?,
    ))
}

pub fn save_state(pool: &mut DbPool, state: &TimesheetState) -> AppResult<()> {
    let tx = pool.conn.transaction()?;
    save_collection(&tx, COMPANIES_KEY, &state.companies)?;
    save_collection(&tx, WORK_ENTRIES_KEY, &state.work_entries)?;
    tx.commit()?;
    Ok(())
}

/// Persist a new state and record the operation in the internal log.
pub fn commit(
    pool: &mut DbPool,
    state: &TimesheetState,
    operation: &str,
    target: &str,
    message: &str,
) -> AppResult<()> {
    save_state(pool, state)?;
    crate::db::log::ttlog_quiet(&pool.conn, operation, target, message);
    Ok(())
}
