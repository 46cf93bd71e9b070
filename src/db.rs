use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;

use crate::constants::DATABASE_FILE;
use crate::queries::ddl;

/// Open a read-only pool on the gPodder database (for web server handlers)
///
/// `immutable` tells SQLite the file cannot change underneath it, which skips
/// locking entirely. Only use it for databases on read-only media.
pub async fn open_readonly_pool(
    db_path: impl AsRef<Path>,
    immutable: bool,
) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::new()
        .filename(db_path.as_ref())
        .read_only(true)
        .immutable(immutable);

    SqlitePoolOptions::new()
        .max_connections(4)
        .connect_with(options)
        .await
}

/// Create the podcast/episode tables used by the archive browser
pub async fn init_database_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for sql in [
        ddl::create_podcast_table(),
        ddl::create_episode_table(),
        ddl::create_episode_podcast_id_index(),
    ] {
        sqlx::query(&sql).execute(pool).await?;
    }
    Ok(())
}

/// Create a writable database in a temporary directory for testing
/// The directory doubles as an archive root; the guard deletes it when dropped
pub async fn create_test_connection_in_temporary_file(
) -> Result<(SqlitePool, tempfile::TempDir), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let options = SqliteConnectOptions::new()
        .filename(dir.path().join(DATABASE_FILE))
        .create_if_missing(true)
        // gPodder does not enforce them, tests need orphaned episodes
        .foreign_keys(false);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    Ok((pool, dir))
}
