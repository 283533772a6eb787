//! Classification of database errors.

/// PostgreSQL constraint enforcing one record per URL.
pub const URLS_URL_CONSTRAINT: &str = "urls_url_key";

/// Returns `true` if `e` is a unique violation of the `urls.url` constraint.
pub fn is_unique_violation_on_url(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(URLS_URL_CONSTRAINT) | None)
}
