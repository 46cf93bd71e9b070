//! Read access to the synced archive's record store.

use async_trait::async_trait;
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use crate::error::Result;
use crate::models::{Episode, Podcast};
use crate::queries::{episodes, podcasts};

/// Lookups the pages and asset handlers need from the archive database.
/// Visibility always means "has a non-empty stored filename".
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_podcast(&self, id: i64) -> Result<Option<Podcast>>;

    async fn get_episode(&self, id: i64) -> Result<Option<Episode>>;

    async fn list_podcasts_with_visible_episodes(&self) -> Result<Vec<Podcast>>;

    /// Visible episodes of one podcast, oldest first
    async fn list_visible_episodes(&self, podcast_id: i64) -> Result<Vec<Episode>>;
}

/// `RecordStore` backed by the gPodder SQLite database
#[derive(Clone)]
pub struct SqliteArchive {
    pool: SqlitePool,
}

impl SqliteArchive {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Number of subscriptions; also confirms the file is a gPodder database
    pub async fn podcast_count(&self) -> Result<i64> {
        let sql = podcasts::count();
        let row = sqlx::query(&sql).fetch_one(&self.pool).await?;
        Ok(row.try_get(0)?)
    }
}

#[async_trait]
impl RecordStore for SqliteArchive {
    async fn get_podcast(&self, id: i64) -> Result<Option<Podcast>> {
        let sql = podcasts::select_by_id(id);
        let row = sqlx::query(&sql).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(podcast_from_row).transpose()?)
    }

    async fn get_episode(&self, id: i64) -> Result<Option<Episode>> {
        let sql = episodes::select_by_id(id);
        let row = sqlx::query(&sql).fetch_optional(&self.pool).await?;
        Ok(row.as_ref().map(episode_from_row).transpose()?)
    }

    async fn list_podcasts_with_visible_episodes(&self) -> Result<Vec<Podcast>> {
        let sql = podcasts::select_with_visible_episodes();
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows
            .iter()
            .map(podcast_from_row)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
    }

    async fn list_visible_episodes(&self, podcast_id: i64) -> Result<Vec<Episode>> {
        let sql = episodes::select_visible_by_podcast(podcast_id);
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows
            .iter()
            .map(episode_from_row)
            .collect::<std::result::Result<Vec<_>, sqlx::Error>>()?)
    }
}

// gPodder leaves plenty of columns NULL, read those as empty/zero
fn text(row: &SqliteRow, column: &str) -> std::result::Result<String, sqlx::Error> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

fn integer(row: &SqliteRow, column: &str) -> std::result::Result<i64, sqlx::Error> {
    Ok(row.try_get::<Option<i64>, _>(column)?.unwrap_or_default())
}

fn podcast_from_row(row: &SqliteRow) -> std::result::Result<Podcast, sqlx::Error> {
    Ok(Podcast {
        id: row.try_get("id")?,
        title: text(row, "title")?,
        description: text(row, "description")?,
        feed_url: text(row, "url")?,
        website: text(row, "link")?,
        download_folder: text(row, "download_folder")?,
    })
}

fn episode_from_row(row: &SqliteRow) -> std::result::Result<Episode, sqlx::Error> {
    Ok(Episode {
        id: row.try_get("id")?,
        podcast_id: row.try_get("podcast_id")?,
        title: text(row, "title")?,
        link: text(row, "link")?,
        published: integer(row, "published")?,
        file_size: integer(row, "file_size")?,
        mime_type: text(row, "mime_type")?,
        file_name: text(row, "download_filename")?,
        duration: integer(row, "total_time")?,
        description: text(row, "description_html")?,
    })
}
