// src/file.rs

use std::{
    error::Error,
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::params::{CACHE_DELIM, CACHE_FILENAME};
use crate::scrape::GenreSample;

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error + Send + Sync>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

/// Truncate-and-write the link cache under `dir`: one
/// `name||filename||url` line per sample, in extraction order.
/// The delimiter is not escaped if it appears in a name.
pub fn write_links_file(
    samples: &[GenreSample],
    dir: &Path,
) -> Result<PathBuf, Box<dyn Error + Send + Sync>> {
    let path = dir.join(CACHE_FILENAME);
    let file = File::create(&path)?; // truncate/overwrite
    let mut out = BufWriter::new(file);
    for s in samples {
        writeln!(
            out,
            "{}{CACHE_DELIM}{}{CACHE_DELIM}{}",
            s.name, s.filename, s.url
        )?;
    }
    out.flush()?;
    Ok(path)
}
