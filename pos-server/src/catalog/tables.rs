//! Dining table operations

use shared::models::{DiningTable, DiningTableUpsert};

use crate::store::{PosStore, StoreTable};
use crate::utils::validation::{MAX_NAME_LEN, validate_required_text, validate_seats};
use crate::utils::{PosError, PosResult, Resource};

/// All tables, sorted by id
pub fn list_tables(store: &PosStore) -> Vec<DiningTable> {
    store.tables().values().cloned().collect()
}

/// Create a table or replace the one with the same id
///
/// The saved table is always free, even when it replaces an occupied one.
pub fn upsert_table(store: &mut PosStore, input: DiningTableUpsert) -> PosResult<DiningTable> {
    let table_id = input.table_id.trim().to_string();
    validate_required_text(&table_id, "table_id", MAX_NAME_LEN)?;
    let seats = validate_seats(input.seats)?;

    let table = DiningTable {
        table_id,
        seats,
        occupied: false,
    };

    let saved = table.clone();
    store.transact(&[StoreTable::Tables], move |s| {
        s.tables.insert(table.table_id.clone(), table);
        Ok(())
    })?;

    tracing::info!(table_id = %saved.table_id, seats = saved.seats, "Table saved");
    Ok(saved)
}

/// Flip the occupied flag
pub fn toggle_table(store: &mut PosStore, table_id: &str) -> PosResult<DiningTable> {
    let table = store.transact(&[StoreTable::Tables], |s| {
        let table = s
            .tables
            .get_mut(table_id)
            .ok_or_else(|| PosError::not_found(Resource::Table, table_id))?;
        table.occupied = !table.occupied;
        Ok(table.clone())
    })?;

    tracing::info!(table_id = %table.table_id, occupied = table.occupied, "Table toggled");
    Ok(table)
}

/// Remove a table; orders referencing it keep the dangling id
pub fn delete_table(store: &mut PosStore, table_id: &str) -> PosResult<DiningTable> {
    let removed = store.transact(&[StoreTable::Tables], |s| {
        s.tables
            .remove(table_id)
            .ok_or_else(|| PosError::not_found(Resource::Table, table_id))
    })?;

    tracing::info!(table_id = %removed.table_id, "Table deleted");
    Ok(removed)
}
