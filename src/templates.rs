//! HTML for the `listing` and `detail` pages.
//!
//! Interpolated values are escaped by maud. Description HTML is inserted
//! pre-escaped because it has already been sanitized by `markdown::render`.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::pages::{LandingPage, PodcastPage};

pub const STYLE_CSS: &str = include_str!("../assets/style.css");
pub const FAVICON: &[u8] = include_bytes!("../assets/favicon.ico");

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " - localcast" }
                link rel="stylesheet" href="/public/style.css";
                link rel="icon" href="/favicon.ico";
            }
            body {
                header { a href="/" { "localcast" } }
                main { (body) }
            }
        }
    }
}

// feed-supplied URLs end up in href attributes
fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

pub fn listing(page: &LandingPage) -> Markup {
    layout(
        "Podcasts",
        html! {
            h1 { "Podcasts" }
            @if page.podcasts.is_empty() {
                p.meta { "No downloaded episodes yet." }
            } @else {
                ul.podcasts {
                    @for podcast in &page.podcasts {
                        li {
                            a href=(format!("/podcast/{}", podcast.id)) {
                                img src=(format!("/podcast/{}/cover", podcast.id)) alt="" loading="lazy";
                                span { (podcast.title) }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn detail(page: &PodcastPage) -> Markup {
    let podcast = &page.podcast;
    layout(
        &podcast.title,
        html! {
            section.podcast {
                img.cover src=(format!("/podcast/{}/cover", podcast.id)) alt="";
                div {
                    h1 { (podcast.title) }
                    p.meta {
                        (page.episode_count) " episodes"
                        @if let Some(updated) = &page.last_updated {
                            " · last updated " (updated)
                        }
                    }
                    @if page.more_status {
                        div.description { (PreEscaped(&page.short_description_html)) }
                        details.description {
                            summary { "Full description" }
                            (PreEscaped(&page.description_html))
                        }
                    } @else {
                        div.description { (PreEscaped(&page.description_html)) }
                    }
                    p.meta {
                        @if is_web_url(&podcast.website) {
                            a href=(podcast.website) rel="nofollow noopener noreferrer" { "Website" }
                            " "
                        }
                        @if is_web_url(&podcast.feed_url) {
                            a href=(podcast.feed_url) rel="nofollow noopener noreferrer" { "Feed" }
                        }
                    }
                }
            }
            ol.episodes {
                @for view in &page.episodes {
                    li id=(format!("episode-{}", view.episode.id)) {
                        h2 { (view.episode.title) }
                        p.meta {
                            (view.date)
                            @if let Some(duration) = &view.duration {
                                " · " (duration)
                            }
                            @if is_web_url(&view.episode.link) {
                                " · "
                                a href=(view.episode.link) rel="nofollow noopener noreferrer" { "Source" }
                            }
                        }
                        audio controls preload="none" src=(format!("/episode/{}/audio", view.episode.id)) {}
                        div.description { (PreEscaped(&view.description_html)) }
                    }
                }
            }
        },
    )
}
