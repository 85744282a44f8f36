// src/download.rs

use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

/// Copy granularity for streamed downloads.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Per-download failure. None of these abort the run; the driver reports
/// them and moves on to the next sample. No retry is attempted.
#[derive(Debug)]
pub enum DownloadError {
    TimedOut,
    Network(Box<dyn std::error::Error + Send + Sync>),
    Write(io::Error),
}

impl fmt::Display for DownloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadError::TimedOut => write!(f, "request timed out"),
            DownloadError::Network(e) => write!(f, "network error: {}", e),
            DownloadError::Write(e) => write!(f, "write error: {}", e),
        }
    }
}

impl std::error::Error for DownloadError {}

impl From<reqwest::Error> for DownloadError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            DownloadError::TimedOut
        } else {
            DownloadError::Network(Box::new(e))
        }
    }
}

// Body reads surface as io::Error; a deadline hit mid-body still counts
// as a timeout.
fn classify_read(e: io::Error) -> DownloadError {
    if e.kind() == io::ErrorKind::TimedOut {
        return DownloadError::TimedOut;
    }
    if let Some(inner) = e.get_ref() {
        if let Some(re) = inner.downcast_ref::<reqwest::Error>() {
            if re.is_timeout() {
                return DownloadError::TimedOut;
            }
        }
    }
    DownloadError::Network(Box::new(e))
}

/// Streamed GET: write the body to `dest` in CHUNK_SIZE pieces, overwriting
/// any existing file. `timeout` is a total deadline for the request.
/// Returns bytes written. On failure a partial file may be left behind.
pub fn download_to(
    client: &Client,
    url: &str,
    dest: &Path,
    timeout: Duration,
) -> Result<u64, DownloadError> {
    let mut resp = client
        .get(url)
        .timeout(timeout)
        .send()?
        .error_for_status()?;

    let file = File::create(dest).map_err(DownloadError::Write)?;
    let mut out = BufWriter::new(file);
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written = 0u64;
    loop {
        let n = resp.read(&mut buf).map_err(classify_read)?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).map_err(DownloadError::Write)?;
        written += n as u64;
    }
    out.flush().map_err(DownloadError::Write)?;
    Ok(written)
}
