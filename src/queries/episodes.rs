use sea_query::{Expr, Order, Query, SqliteQueryBuilder};

use crate::models;
use crate::schema::Episode;

const COLUMNS: [Episode; 10] = [
    Episode::Id,
    Episode::PodcastId,
    Episode::Title,
    Episode::Link,
    Episode::Published,
    Episode::FileSize,
    Episode::MimeType,
    Episode::DownloadFilename,
    Episode::TotalTime,
    Episode::DescriptionHtml,
];

/// SELECT ... FROM episode WHERE id = ?
pub fn select_by_id(id: i64) -> String {
    Query::select()
        .columns(COLUMNS)
        .from(Episode::Table)
        .and_where(Expr::col(Episode::Id).eq(id))
        .to_string(SqliteQueryBuilder)
}

/// SELECT ... FROM episode
/// WHERE podcast_id = ? AND download_filename != ''
/// ORDER BY published ASC, id ASC
pub fn select_visible_by_podcast(podcast_id: i64) -> String {
    Query::select()
        .columns(COLUMNS)
        .from(Episode::Table)
        .and_where(Expr::col(Episode::PodcastId).eq(podcast_id))
        .and_where(Expr::col(Episode::DownloadFilename).ne(""))
        .order_by(Episode::Published, Order::Asc)
        .order_by(Episode::Id, Order::Asc)
        .to_string(SqliteQueryBuilder)
}

/// INSERT INTO episode (...) VALUES (...)
pub fn insert(episode: &models::Episode) -> String {
    Query::insert()
        .into_table(Episode::Table)
        .columns(COLUMNS)
        .values_panic([
            episode.id.into(),
            episode.podcast_id.into(),
            episode.title.as_str().into(),
            episode.link.as_str().into(),
            episode.published.into(),
            episode.file_size.into(),
            episode.mime_type.as_str().into(),
            episode.file_name.as_str().into(),
            episode.duration.into(),
            episode.description.as_str().into(),
        ])
        .to_string(SqliteQueryBuilder)
}
