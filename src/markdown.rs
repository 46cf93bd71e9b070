//! Markdown to HTML for stored podcast and episode descriptions.
//!
//! Descriptions come straight from third-party feeds, so everything rendered
//! here goes through an HTML sanitizer as the final step. Output is safe to
//! embed in a page without further escaping.

use log::warn;
use markdown::{CompileOptions, Constructs, Options, ParseOptions};

/// Render `raw` markdown (which may contain inline HTML) to sanitized HTML
pub fn render(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }

    let html = match markdown::to_html_with_options(raw, &options()) {
        Ok(html) => html,
        Err(e) => {
            warn!("Failed to render markdown, falling back to escaped text: {}", e);
            return ammonia::clean_text(raw);
        }
    };

    sanitize(&html)
}

/// Strip scripts, event handlers, unsafe URLs and unknown tags, keeping
/// common formatting, links and images
pub fn sanitize(html: &str) -> String {
    let mut cleaner = ammonia::Builder::default();
    cleaner.link_rel(Some("nofollow noopener noreferrer"));

    // Block HTML nested in a paragraph leaves empty paragraphs behind once
    // the tree is repaired. Drop them, then clean again so the sanitizer
    // has the last word.
    let repaired = cleaner.clean(html).to_string().replace("<p></p>", "");
    cleaner.clean(&repaired).to_string()
}

// GFM, except that raw HTML never swallows a whole line as a block. Feeds mix
// HTML and markdown on the same line and the markdown part must still render.
// The flip side: markdown syntax inside block HTML (`<div>` followed by a
// `# heading` line) is rendered too, where CommonMark would pass it through.
fn options() -> Options {
    Options {
        parse: ParseOptions {
            constructs: Constructs {
                html_flow: false,
                ..Constructs::gfm()
            },
            ..ParseOptions::gfm()
        },
        compile: CompileOptions {
            allow_dangerous_html: true,
            gfm_tagfilter: false,
            ..CompileOptions::gfm()
        },
    }
}
