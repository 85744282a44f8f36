// src/runner.rs
use std::error::Error;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::{
    download::{self, DownloadError},
    file::{ensure_directory, write_links_file},
    net,
    params::{Params, SOURCE_URL},
    progress::Progress,
    scrape::{self, GenreSample},
};

/// Summary of what was produced.
pub struct RunSummary {
    pub total: usize,
    pub downloaded: Vec<PathBuf>,
    pub failed: Vec<(String, DownloadError)>,
    pub cache_file: Option<PathBuf>,
}

/// Top-level driver: fetch + extract, prepare the output directory,
/// optionally cache the link list, then download each sample in order.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, Box<dyn Error + Send + Sync>> {
    let client = net::client()?;

    logf!("Fetching {}", SOURCE_URL);
    let page = net::fetch_page(&client, SOURCE_URL)?;
    let samples = scrape::extract_samples(&page);
    logf!("Extracted {} samples", samples.len());

    if samples.is_empty() {
        // Upstream markup changes yield zero matches rather than an error;
        // say so instead of finishing silently.
        let msg = format!("Warning: no genre samples found at {}", SOURCE_URL);
        loge!("{}", msg);
        if let Some(p) = progress.as_deref_mut() {
            p.log(&msg);
        }
    }

    ensure_directory(&params.out)?;

    let cache_file = if params.cache_links {
        let path = write_links_file(&samples, &params.out)?;
        logf!("Cached {} links to {}", samples.len(), path.display());
        Some(path)
    } else {
        None
    };

    let (downloaded, failed) =
        download_all(&client, &samples, &params.out, params.timeout, progress);

    logf!(
        "Run complete: {}/{} downloaded, {} failed",
        downloaded.len(),
        samples.len(),
        failed.len()
    );

    Ok(RunSummary {
        total: samples.len(),
        downloaded,
        failed,
        cache_file,
    })
}

/// Sequential download loop. A failed sample is reported through the sink
/// and the debug log, then skipped; the remaining samples are still
/// attempted. One file handle per sample, released before the next.
pub fn download_all(
    client: &Client,
    samples: &[GenreSample],
    out_dir: &Path,
    timeout: Duration,
    mut progress: Option<&mut dyn Progress>,
) -> (Vec<PathBuf>, Vec<(String, DownloadError)>) {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(samples.len());
    }

    let mut downloaded = Vec::with_capacity(samples.len());
    let mut failed = Vec::new();

    for (i, sample) in samples.iter().enumerate() {
        let dest = out_dir.join(&sample.filename);
        match download::download_to(client, &sample.url, &dest, timeout) {
            Ok(_) => {
                if let Some(p) = progress.as_deref_mut() {
                    p.item_done(i, &dest);
                }
                downloaded.push(dest);
            }
            Err(e) => {
                loge!("Download failed for \"{}\": {}", sample.url, e);
                if let Some(p) = progress.as_deref_mut() {
                    p.item_failed(&sample.url, &e);
                }
                failed.push((sample.url.clone(), e));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    (downloaded, failed)
}
