// Library interface for testing

pub mod archive;
pub mod config;
pub mod constants;
pub mod dates;
pub mod db;
pub mod episodes;
pub mod error;
pub mod markdown;
pub mod media;
pub mod models;
pub mod pages;
pub mod queries;
pub mod schema;
pub mod serve;
pub mod templates;
pub mod truncate;

pub use archive::{RecordStore, SqliteArchive};
pub use error::{ArchiveError, Resource};
pub use models::{Episode, Podcast};
