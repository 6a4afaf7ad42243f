//! Bulk result downloader.
//!
//! Turns an ordered list of result URLs into fetch jobs, runs them across a
//! bounded pool of worker threads, and ticks a progress sink once per
//! completion. Per-item failures are logged and absorbed; they never abort
//! the batch or surface to the caller. The only error the batch itself can
//! raise is destination-directory creation.

mod fetch;
mod naming;
mod progress;

pub use fetch::{Fetch, FetchError, FetchOutcome, HttpFetcher};
pub use naming::{directory_name, file_name, file_stem, sanitize_keywords};
pub use progress::{NoProgress, ProgressSink};

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};

use crate::transport::TransportConfig;

/// One unit of work: a resource URL and the file it lands in.
/// Carries no retry state and no identity beyond the destination.
#[derive(Debug, Clone)]
pub struct FetchJob {
    pub url: String,
    pub destination: PathBuf,
}

/// Which result field a batch downloads; decides the directory prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    /// Text-result pages (`href` field).
    Page,
    /// Image-result files (`image` field).
    Image,
}

/// Downloads every result URL into a fresh timestamped directory under
/// `base_dir`.
///
/// The directory is created (idempotently) before the pool starts; its
/// creation failure is the only error this returns. URLs are enumerated in
/// result order and empty entries are dropped after enumeration, so a
/// skipped record does not renumber later items. Individual fetch failures
/// are logged at debug and absorbed — the progress display reaches 100%
/// regardless, and the caller learns nothing about per-item outcomes.
pub fn download_results(
    keywords: &str,
    urls: &[String],
    kind: ResourceKind,
    base_dir: &Path,
    transport: &TransportConfig,
    pool_size: usize,
    progress: &mut dyn ProgressSink,
) -> Result<()> {
    let name = naming::directory_name(
        keywords,
        kind == ResourceKind::Image,
        chrono::Local::now().naive_local(),
    );
    let dir = base_dir.join(name);
    fs::create_dir_all(&dir)
        .with_context(|| format!("create download directory {}", dir.display()))?;

    let jobs: Vec<FetchJob> = urls
        .iter()
        .enumerate()
        .filter(|(_, url)| !url.is_empty())
        .map(|(i, url)| FetchJob {
            url: url.clone(),
            destination: dir.join(naming::file_name(i + 1, url)),
        })
        .collect();

    let fetcher = HttpFetcher::new(transport.clone());
    run_batch(jobs, pool_size, &fetcher, progress);
    tracing::info!(dir = %dir.display(), "download complete");
    Ok(())
}

/// Runs every job exactly once with at most `pool_size` fetches in flight,
/// blocking until the last one completes.
///
/// Submission follows the input order; completion order is unspecified.
/// The sink sees `begin(total)` once, then one `advance` per completion as
/// it arrives — all from this thread, so ticks are totally ordered. An
/// empty job list returns immediately without touching the sink.
pub fn run_batch<F: Fetch>(
    jobs: Vec<FetchJob>,
    pool_size: usize,
    fetcher: &F,
    progress: &mut dyn ProgressSink,
) {
    if jobs.is_empty() {
        return;
    }
    let total = jobs.len();
    let num_workers = pool_size.max(1).min(total);

    progress.begin(total);

    let work: Arc<Mutex<VecDeque<FetchJob>>> = Arc::new(Mutex::new(jobs.into_iter().collect()));
    let (tx, rx) = mpsc::channel();

    std::thread::scope(|scope| {
        for _ in 0..num_workers {
            let work = Arc::clone(&work);
            let tx = tx.clone();
            scope.spawn(move || loop {
                let job = match work.lock().unwrap().pop_front() {
                    Some(j) => j,
                    None => break,
                };
                let outcome = fetcher.fetch(&job.url, &job.destination);
                let _ = tx.send((job, outcome));
            });
        }
        drop(tx);

        // The sink only learns that a job finished, never how it went;
        // failures stop here, at the log.
        for _ in 0..total {
            let Ok((job, outcome)) = rx.recv() else { break };
            if let Err(e) = outcome {
                tracing::debug!(url = %job.url, error = %e, "download failed");
            }
            progress.advance();
        }
    });
}
