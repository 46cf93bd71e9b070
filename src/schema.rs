use sea_query::Iden;

/// Podcast table - one row per subscription
#[derive(Iden)]
pub enum Podcast {
    Table,
    Id,
    Title,
    Description,
    /// Feed URL
    Url,
    /// Website URL
    Link,
    DownloadFolder,
}

/// Episode table - feed items, downloaded or not
#[derive(Iden)]
pub enum Episode {
    Table,
    Id,
    PodcastId,
    Title,
    Link,
    Published,
    FileSize,
    MimeType,
    /// Empty until the episode has been downloaded
    DownloadFilename,
    /// Duration in seconds
    TotalTime,
    DescriptionHtml,
}
