/// Returns `true` when the error is a unique-constraint violation reported by the database.
///
/// For SQLite this covers `SQLITE_CONSTRAINT_UNIQUE` (2067) and
/// `SQLITE_CONSTRAINT_PRIMARYKEY` (1555).
pub fn is_unique_violation(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    db_err.is_unique_violation()
}
