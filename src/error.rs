use std::fmt;
use thiserror::Error;

/// What a lookup failed to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Podcast,
    Episode,
    Cover,
    Audio,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::Podcast => "Podcast",
            Resource::Episode => "Episode",
            Resource::Cover => "Cover",
            Resource::Audio => "Audio",
        };
        f.write_str(name)
    }
}

/// Errors raised while reading the archive or building pages from it
#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("{0} not found")]
    NotFound(Resource),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Database error: {0}")]
    Upstream(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, ArchiveError>;
