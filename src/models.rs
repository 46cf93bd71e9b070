/// A subscribed podcast as stored by gPodder
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Podcast {
    pub id: i64,
    pub title: String,
    /// Raw markdown; never embed without going through `markdown::render`
    pub description: String,
    pub feed_url: String,
    pub website: String,
    /// Directory name under `<archive root>/Downloads`
    pub download_folder: String,
}

/// An episode record. Only episodes with a non-empty `file_name` have been
/// downloaded and are ever shown.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Episode {
    pub id: i64,
    pub podcast_id: i64,
    pub title: String,
    pub link: String,
    /// Seconds since the epoch, 0 when the feed gave no date
    pub published: i64,
    pub file_size: i64,
    pub mime_type: String,
    pub file_name: String,
    /// Seconds
    pub duration: i64,
    pub description: String,
}

impl Episode {
    pub fn is_visible(&self) -> bool {
        !self.file_name.is_empty()
    }
}
