// src/params.rs
use std::path::PathBuf;
use std::time::Duration;

pub const SOURCE_URL: &str = "http://everynoise.com";
pub const USER_AGENT: &str = "en_scrape/0.1";

// Structural contract with the source page. If upstream changes either,
// extraction quietly yields zero samples.
pub const GENRE_SELECTOR: &str = "div.genre.scanme";
pub const PREVIEW_ATTR: &str = "preview_url";

pub const CACHE_FILENAME: &str = "mp3-links.list";
pub const CACHE_DELIM: &str = "||";

pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct Params {
    pub out: PathBuf,      // output dir for downloads and the link cache
    pub cache_links: bool, // write <out>/mp3-links.list
    pub timeout: Duration, // per-download request deadline
}

impl Params {
    pub fn new() -> Self {
        Self {
            out: PathBuf::from(DEFAULT_OUT_DIR),
            cache_links: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
