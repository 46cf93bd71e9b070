use sea_query::{Expr, Func, Order, Query, SqliteQueryBuilder};

use crate::models;
use crate::schema::{Episode, Podcast};

const COLUMNS: [Podcast; 6] = [
    Podcast::Id,
    Podcast::Title,
    Podcast::Description,
    Podcast::Url,
    Podcast::Link,
    Podcast::DownloadFolder,
];

/// SELECT id, title, description, url, link, download_folder FROM podcast WHERE id = ?
pub fn select_by_id(id: i64) -> String {
    Query::select()
        .columns(COLUMNS)
        .from(Podcast::Table)
        .and_where(Expr::col(Podcast::Id).eq(id))
        .to_string(SqliteQueryBuilder)
}

/// SELECT ... FROM podcast
/// WHERE id IN (SELECT podcast_id FROM episode WHERE download_filename != '')
/// ORDER BY title, id
pub fn select_with_visible_episodes() -> String {
    let downloaded = Query::select()
        .column(Episode::PodcastId)
        .from(Episode::Table)
        .and_where(Expr::col(Episode::DownloadFilename).ne(""))
        .to_owned();

    Query::select()
        .columns(COLUMNS)
        .from(Podcast::Table)
        .and_where(Expr::col(Podcast::Id).in_subquery(downloaded))
        .order_by(Podcast::Title, Order::Asc)
        .order_by(Podcast::Id, Order::Asc)
        .to_string(SqliteQueryBuilder)
}

/// SELECT COUNT(id) FROM podcast
pub fn count() -> String {
    Query::select()
        .expr(Func::count(Expr::col(Podcast::Id)))
        .from(Podcast::Table)
        .to_string(SqliteQueryBuilder)
}

/// INSERT INTO podcast (id, title, description, url, link, download_folder) VALUES (...)
pub fn insert(podcast: &models::Podcast) -> String {
    Query::insert()
        .into_table(Podcast::Table)
        .columns(COLUMNS)
        .values_panic([
            podcast.id.into(),
            podcast.title.as_str().into(),
            podcast.description.as_str().into(),
            podcast.feed_url.as_str().into(),
            podcast.website.as_str().into(),
            podcast.download_folder.as_str().into(),
        ])
        .to_string(SqliteQueryBuilder)
}
