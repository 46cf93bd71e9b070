use log::warn;

use crate::dates::{coarse_date, format_duration, format_timestamp};
use crate::markdown;
use crate::models::Episode;

/// An episode ready for the detail page
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeView {
    pub episode: Episode,
    /// Sanitized HTML of the description
    pub description_html: String,
    /// "21 May 2021, 01:00 PM", empty if the timestamp is unusable
    pub date: String,
    pub duration: Option<String>,
}

/// Visible episodes of one podcast, oldest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EpisodeList {
    pub episodes: Vec<EpisodeView>,
    pub count: usize,
    /// Date of the newest episode, None when there is none or it has no date
    pub last_updated: Option<String>,
}

/// Keep the downloaded episodes of `podcast_id`, sort them by publish date
/// (stable, so equal dates keep their input order) and render their fields
pub fn assemble(episodes: Vec<Episode>, podcast_id: i64) -> EpisodeList {
    let mut visible: Vec<Episode> = episodes
        .into_iter()
        .filter(|e| e.podcast_id == podcast_id && e.is_visible())
        .collect();
    visible.sort_by_key(|e| e.published);

    let episodes: Vec<EpisodeView> = visible.into_iter().map(render_episode).collect();
    let last_updated = episodes.last().and_then(|newest| last_updated(&newest.date));

    EpisodeList {
        count: episodes.len(),
        episodes,
        last_updated,
    }
}

fn render_episode(episode: Episode) -> EpisodeView {
    let date = format_timestamp(episode.published).unwrap_or_else(|e| {
        warn!("Episode {} has an unusable publish date: {}", episode.id, e);
        String::new()
    });

    EpisodeView {
        description_html: markdown::render(&episode.description),
        duration: format_duration(episode.duration),
        date,
        episode,
    }
}

fn last_updated(date: &str) -> Option<String> {
    if date.is_empty() {
        return None;
    }
    match coarse_date(date) {
        Ok(coarse) => Some(coarse.to_string()),
        Err(e) => {
            warn!("Using full date for last updated: {}", e);
            Some(date.to_string())
        }
    }
}
