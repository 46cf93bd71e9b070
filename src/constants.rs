/// Descriptions at or above this many characters get a short preview
pub const PREVIEW_THRESHOLD: usize = 400;

/// strftime pattern for episode dates, e.g. "21 May 2021, 01:00 PM"
/// The last comma separates the date from the time of day
pub const DATE_FORMAT: &str = "%-d %b %Y, %I:%M %p";

/// Directory under the archive root holding one folder per podcast
pub const DOWNLOADS_DIR: &str = "Downloads";

/// Cover art file names, checked in order
pub const COVER_CANDIDATES: [&str; 2] = ["folder.jpg", "folder.png"];

/// gPodder database file name under the archive root
pub const DATABASE_FILE: &str = "Database";

pub const DEFAULT_PORT: u16 = 3000;

pub const DEFAULT_BIND: &str = "[::]";
