use crate::error::ApiError;
use shared_types::{AddressEntry, EntryPayload, GeoBounds};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

type DbResult<T> = Result<T, ApiError>;

// SQLite has no NaN: a NaN coordinate is stored as NULL and decodes
// back as 0.0 here.
fn entry_from_row(row: &SqliteRow) -> AddressEntry {
    AddressEntry {
        id: row.get("id"),
        name: row.get("name"),
        phone: row.get("phone"),
        address: row.get("address"),
        coordinate_x: row.get("coordinateX"),
        coordinate_y: row.get("coordinateY"),
    }
}

/// Insert a new entry and return the id the store assigned to it.
pub async fn insert_entry(pool: &SqlitePool, entry: &EntryPayload) -> DbResult<i64> {
    let row = sqlx::query(
        "INSERT INTO addressbook(name, phone, address, coordinateX, coordinateY)
         VALUES(?1, ?2, ?3, ?4, ?5)
         RETURNING id",
    )
    .bind(&entry.name)
    .bind(&entry.phone)
    .bind(&entry.address)
    .bind(entry.coordinate_x)
    .bind(entry.coordinate_y)
    .fetch_one(pool)
    .await?;

    Ok(row.get("id"))
}

/// Overwrite every non-id field of an existing entry in one statement.
pub async fn update_entry(pool: &SqlitePool, id: i64, entry: &EntryPayload) -> DbResult<()> {
    let result = sqlx::query(
        "UPDATE addressbook
         SET name = ?1, phone = ?2, address = ?3, coordinateX = ?4, coordinateY = ?5
         WHERE id = ?6",
    )
    .bind(&entry.name)
    .bind(&entry.phone)
    .bind(&entry.address)
    .bind(entry.coordinate_x)
    .bind(entry.coordinate_y)
    .bind(id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(())
}

pub async fn delete_entry(pool: &SqlitePool, id: i64) -> DbResult<()> {
    let result = sqlx::query("DELETE FROM addressbook WHERE id = ?1")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound);
    }

    Ok(())
}

pub async fn get_entry_by_id(pool: &SqlitePool, id: i64) -> DbResult<AddressEntry> {
    let row = sqlx::query(
        "SELECT id, name, phone, address, coordinateX, coordinateY
         FROM addressbook
         WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(entry_from_row).ok_or(ApiError::NotFound)
}

pub async fn get_all_entries(pool: &SqlitePool) -> DbResult<Vec<AddressEntry>> {
    let rows = sqlx::query(
        "SELECT id, name, phone, address, coordinateX, coordinateY
         FROM addressbook
         ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(entry_from_row).collect())
}

/// Every entry whose coordinates fall inside the box, both bounds
/// inclusive, in id order. An empty result is a normal outcome, not an
/// error.
pub async fn find_in_range(pool: &SqlitePool, bounds: &GeoBounds) -> DbResult<Vec<AddressEntry>> {
    let rows = sqlx::query(
        "SELECT id, name, phone, address, coordinateX, coordinateY
         FROM addressbook
         WHERE coordinateX BETWEEN ?1 AND ?2
           AND coordinateY BETWEEN ?3 AND ?4
         ORDER BY id",
    )
    .bind(bounds.min.latitude)
    .bind(bounds.max.latitude)
    .bind(bounds.min.longitude)
    .bind(bounds.max.longitude)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(entry_from_row).collect())
}
