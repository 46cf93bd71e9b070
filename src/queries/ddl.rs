//! Table definitions matching the subset of the gPodder schema that is read.
//!
//! gPodder owns the real database; these are only used to build fixture
//! archives for tests.

use sea_query::{ColumnDef, ForeignKey, ForeignKeyAction, Index, SqliteQueryBuilder, Table};

use crate::schema::{Episode, Podcast};

/// CREATE TABLE IF NOT EXISTS podcast (
///     id INTEGER PRIMARY KEY,
///     title TEXT, description TEXT, url TEXT, link TEXT, download_folder TEXT
/// )
pub fn create_podcast_table() -> String {
    Table::create()
        .table(Podcast::Table)
        .if_not_exists()
        .col(ColumnDef::new(Podcast::Id).integer().primary_key())
        .col(ColumnDef::new(Podcast::Title).text())
        .col(ColumnDef::new(Podcast::Description).text())
        .col(ColumnDef::new(Podcast::Url).text().not_null())
        .col(ColumnDef::new(Podcast::Link).text())
        .col(ColumnDef::new(Podcast::DownloadFolder).text())
        .to_string(SqliteQueryBuilder)
}

/// CREATE TABLE IF NOT EXISTS episode (
///     id INTEGER PRIMARY KEY,
///     podcast_id INTEGER NOT NULL REFERENCES podcast(id) ON DELETE CASCADE,
///     title TEXT, link TEXT, published INTEGER, file_size INTEGER,
///     mime_type TEXT, download_filename TEXT, total_time INTEGER,
///     description_html TEXT
/// )
pub fn create_episode_table() -> String {
    Table::create()
        .table(Episode::Table)
        .if_not_exists()
        .col(ColumnDef::new(Episode::Id).integer().primary_key())
        .col(ColumnDef::new(Episode::PodcastId).integer().not_null())
        .col(ColumnDef::new(Episode::Title).text())
        .col(ColumnDef::new(Episode::Link).text())
        .col(ColumnDef::new(Episode::Published).big_integer())
        .col(ColumnDef::new(Episode::FileSize).big_integer())
        .col(ColumnDef::new(Episode::MimeType).text())
        .col(ColumnDef::new(Episode::DownloadFilename).text())
        .col(ColumnDef::new(Episode::TotalTime).big_integer())
        .col(ColumnDef::new(Episode::DescriptionHtml).text())
        .foreign_key(
            ForeignKey::create()
                .from(Episode::Table, Episode::PodcastId)
                .to(Podcast::Table, Podcast::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_string(SqliteQueryBuilder)
}

/// CREATE INDEX IF NOT EXISTS idx_episode_podcast_id ON episode(podcast_id)
pub fn create_episode_podcast_id_index() -> String {
    Index::create()
        .if_not_exists()
        .name("idx_episode_podcast_id")
        .table(Episode::Table)
        .col(Episode::PodcastId)
        .to_string(SqliteQueryBuilder)
}
