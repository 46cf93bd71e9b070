//! Where a podcast's files live under the archive root.
//!
//! gPodder lays downloads out as `<archive root>/Downloads/<download folder>/`,
//! with episode files and an optional `folder.jpg`/`folder.png` cover inside.
//! Stored folder and file names must be a single plain path component; an
//! absolute path, `..` or a nested path resolves to nothing.

use log::{debug, warn};
use std::path::{Component, Path, PathBuf};

use crate::constants::{COVER_CANDIDATES, DOWNLOADS_DIR};

/// `name` as a path, if it is exactly one normal component
fn single_component(name: &str) -> Option<&Path> {
    let path = Path::new(name);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Some(path),
        _ => {
            warn!("Ignoring stored name that is not a plain file name: {:?}", name);
            None
        }
    }
}

/// `<archive root>/Downloads/<download folder>`
pub fn podcast_dir(archive_root: &Path, download_folder: &str) -> Option<PathBuf> {
    let folder = single_component(download_folder)?;
    Some(archive_root.join(DOWNLOADS_DIR).join(folder))
}

/// First existing cover image for a podcast, `folder.jpg` before `folder.png`
pub fn resolve_cover(archive_root: &Path, download_folder: &str) -> Option<PathBuf> {
    let dir = podcast_dir(archive_root, download_folder)?;
    let cover = COVER_CANDIDATES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file());

    if cover.is_none() {
        debug!("No cover image in {}", dir.display());
    }
    cover
}

/// Path of an episode's audio file. Existence is left to whoever opens it.
pub fn resolve_audio(archive_root: &Path, download_folder: &str, file_name: &str) -> Option<PathBuf> {
    let file = single_component(file_name)?;
    Some(podcast_dir(archive_root, download_folder)?.join(file))
}
