//! `dds text` – text search, optionally bulk-downloading result pages.

use anyhow::Result;
use dds_core::config::DdsConfig;
use dds_core::download::{self, ResourceKind};
use dds_core::search::SearchClient;

use crate::cli::progress::DownloadBar;
use crate::cli::{DownloadArgs, SearchArgs};

pub fn run_text(cfg: &DdsConfig, search: &SearchArgs, dl: &DownloadArgs) -> Result<()> {
    let transport = super::transport_from(cfg, search.proxy.as_deref(), search.no_verify);
    let client = SearchClient::new(transport.clone());
    let data = client.text(&super::query_from(cfg, search))?;
    tracing::info!(count = data.len(), "text search complete");

    super::render(&data, search, dl.download, "text")?;

    if dl.download {
        let urls: Vec<String> = data.iter().map(|r| r.href.clone()).collect();
        let mut bar = DownloadBar::default();
        download::download_results(
            &search.keywords,
            &urls,
            ResourceKind::Page,
            &std::env::current_dir()?,
            &transport,
            dl.threads.unwrap_or(cfg.download_threads),
            &mut bar,
        )?;
    }
    Ok(())
}
