// src/cli.rs
use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::download::DownloadError;
use crate::params::Params;
use crate::progress::Progress;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = CliProgress::default();
    let summary = runner::run(&params, Some(&mut progress))?;

    println!(
        "Done: {} of {} downloaded, {} failed.",
        summary.downloaded.len(),
        summary.total,
        summary.failed.len()
    );
    if let Some(cache) = &summary.cache_file {
        println!("Link cache: {}", cache.display());
    }
    Ok(())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "-o" | "--out" => {
                params.out = PathBuf::from(args.next().ok_or("Missing value for --out")?);
            }
            "--cache_links" => params.cache_links = true,    // default
            "--no_cache_links" => params.cache_links = false,
            "--timeout" => {
                let v: u64 = args.next().ok_or("Missing value for --timeout")?.parse()?;
                params.timeout = Duration::from_secs(v);
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }
    Ok(())
}

/// Prints one line per completed or failed download.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        println!("Found {} genre samples.", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, _index: usize, path: &Path) {
        self.done += 1;
        println!("[{}/{}] {}", self.done, self.total, path.display());
    }
    fn item_failed(&mut self, url: &str, err: &DownloadError) {
        self.done += 1;
        eprintln!("[{}/{}] Failed \"{}\": {}", self.done, self.total, url, err);
    }
}
