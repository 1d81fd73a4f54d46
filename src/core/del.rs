use crate::db::pool::DbPool;
use crate::db::store::{commit, load_state};
use crate::errors::{AppError, AppResult};
use crate::models::WorkEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one work entry by id. Returns the removed entry.
    pub fn apply(pool: &mut DbPool, id: &str) -> AppResult<WorkEntry> {
        let state = load_state(pool)?;
        let entry = state
            .entry(id)
            .cloned()
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        let next = state.with_entry_deleted(id)?;

        commit(
            pool,
            &next,
            "del",
            &entry.id,
            &format!("Deleted entry of {}", entry.date_str()),
        )?;

        Ok(entry)
    }
}
