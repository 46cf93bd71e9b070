//! Data handed to the page templates.

use crate::archive::RecordStore;
use crate::episodes::{assemble, EpisodeView};
use crate::error::{ArchiveError, Resource, Result};
use crate::markdown;
use crate::models::{Episode, Podcast};
use crate::truncate::truncate;

/// Model for the `listing` template
#[derive(Debug, Clone, PartialEq)]
pub struct LandingPage {
    /// Podcasts with at least one downloaded episode
    pub podcasts: Vec<Podcast>,
}

/// Model for the `detail` template
#[derive(Debug, Clone, PartialEq)]
pub struct PodcastPage {
    pub podcast: Podcast,
    pub description_html: String,
    pub short_description_html: String,
    /// The short description is a cut-down version of the full one
    pub more_status: bool,
    pub episodes: Vec<EpisodeView>,
    pub episode_count: usize,
    pub last_updated: Option<String>,
}

pub fn build_landing_page(podcasts: Vec<Podcast>) -> LandingPage {
    LandingPage { podcasts }
}

pub fn build_podcast_page(podcast: Podcast, episodes: Vec<Episode>) -> PodcastPage {
    let description_html = markdown::render(&podcast.description);
    // truncate the markdown, never the rendered HTML
    let preview = truncate(&podcast.description);
    let short_description_html = markdown::render(preview.text);
    let list = assemble(episodes, podcast.id);

    PodcastPage {
        description_html,
        short_description_html,
        more_status: preview.truncated,
        episodes: list.episodes,
        episode_count: list.count,
        last_updated: list.last_updated,
        podcast,
    }
}

pub async fn load_landing_page(store: &dyn RecordStore) -> Result<LandingPage> {
    let podcasts = store.list_podcasts_with_visible_episodes().await?;
    Ok(build_landing_page(podcasts))
}

/// Look up a podcast and its visible episodes. Episodes are only fetched once
/// the podcast is known to exist.
pub async fn load_podcast_page(store: &dyn RecordStore, podcast_id: i64) -> Result<PodcastPage> {
    let podcast = store
        .get_podcast(podcast_id)
        .await?
        .ok_or(ArchiveError::NotFound(Resource::Podcast))?;
    let episodes = store.list_visible_episodes(podcast.id).await?;
    Ok(build_podcast_page(podcast, episodes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct MockStore {
        podcasts: Vec<Podcast>,
        episodes: Vec<Episode>,
        episode_listings: AtomicUsize,
    }

    #[async_trait]
    impl RecordStore for MockStore {
        async fn get_podcast(&self, id: i64) -> Result<Option<Podcast>> {
            Ok(self.podcasts.iter().find(|p| p.id == id).cloned())
        }

        async fn get_episode(&self, id: i64) -> Result<Option<Episode>> {
            Ok(self.episodes.iter().find(|e| e.id == id).cloned())
        }

        async fn list_podcasts_with_visible_episodes(&self) -> Result<Vec<Podcast>> {
            Ok(self
                .podcasts
                .iter()
                .filter(|p| {
                    self.episodes
                        .iter()
                        .any(|e| e.podcast_id == p.id && e.is_visible())
                })
                .cloned()
                .collect())
        }

        async fn list_visible_episodes(&self, podcast_id: i64) -> Result<Vec<Episode>> {
            self.episode_listings.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .episodes
                .iter()
                .filter(|e| e.podcast_id == podcast_id && e.is_visible())
                .cloned()
                .collect())
        }
    }

    fn podcast(id: i64, description: &str) -> Podcast {
        Podcast {
            id,
            title: format!("Show {}", id),
            description: description.to_string(),
            download_folder: format!("Show{}", id),
            ..Default::default()
        }
    }

    fn episode(id: i64, podcast_id: i64, published: i64, file_name: &str) -> Episode {
        Episode {
            id,
            podcast_id,
            published,
            file_name: file_name.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_short_description_not_truncated() {
        let page = build_podcast_page(podcast(1, "A *short* one."), vec![]);
        assert!(!page.more_status);
        assert_eq!(page.description_html, page.short_description_html);
        assert!(page.description_html.contains("<em>short</em>"));
        assert_eq!(page.episode_count, 0);
        assert_eq!(page.last_updated, None);
    }

    #[test]
    fn test_long_description_truncated_before_rendering() {
        let description = format!("**{}** tail", "word ".repeat(100));
        let page = build_podcast_page(podcast(1, &description), vec![]);
        assert!(page.more_status);
        assert!(page.description_html.contains("tail"));
        assert!(!page.short_description_html.contains("tail"));
        // the bold marker was cut off, so the preview is literal text
        assert!(!page.short_description_html.contains("<strong>"));
        assert!(page.short_description_html.starts_with("<p>"));
    }

    #[test]
    fn test_unbroken_description_at_threshold_not_repeated() {
        let description = "x".repeat(crate::constants::PREVIEW_THRESHOLD);
        let page = build_podcast_page(podcast(1, &description), vec![]);
        assert!(!page.more_status);
        assert_eq!(page.description_html, page.short_description_html);
    }

    #[test]
    fn test_episodes_assembled() {
        let page = build_podcast_page(
            podcast(7, ""),
            vec![
                episode(2, 7, 1621602000, "b.mp3"),
                episode(1, 7, 1600000000, "a.mp3"),
            ],
        );
        assert_eq!(page.description_html, "");
        assert_eq!(page.episode_count, 2);
        assert_eq!(page.episodes[0].episode.id, 1);
        assert_eq!(page.last_updated.as_deref(), Some("21 May 2021"));
    }

    #[tokio::test]
    async fn test_unknown_podcast_skips_episode_listing() {
        let store = MockStore {
            podcasts: vec![podcast(1, "")],
            episodes: vec![episode(1, 1, 0, "a.mp3")],
            ..Default::default()
        };

        let err = load_podcast_page(&store, 42).await.unwrap_err();
        assert!(matches!(err, ArchiveError::NotFound(Resource::Podcast)));
        assert_eq!(store.episode_listings.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_load_podcast_page() {
        let store = MockStore {
            podcasts: vec![podcast(1, "desc")],
            episodes: vec![episode(1, 1, 0, "a.mp3"), episode(2, 1, 5, "")],
            ..Default::default()
        };

        let page = load_podcast_page(&store, 1).await.unwrap();
        assert_eq!(page.podcast.id, 1);
        assert_eq!(page.episode_count, 1);
        assert_eq!(store.episode_listings.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_load_landing_page() {
        let store = MockStore {
            podcasts: vec![podcast(1, ""), podcast(2, "")],
            episodes: vec![episode(1, 2, 0, "a.mp3"), episode(2, 1, 0, "")],
            ..Default::default()
        };

        let page = load_landing_page(&store).await.unwrap();
        let ids: Vec<i64> = page.podcasts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
