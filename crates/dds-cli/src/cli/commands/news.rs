//! `dds news` – news search.

use anyhow::Result;
use dds_core::config::DdsConfig;
use dds_core::search::SearchClient;

use crate::cli::SearchArgs;

pub fn run_news(cfg: &DdsConfig, search: &SearchArgs) -> Result<()> {
    let transport = super::transport_from(cfg, search.proxy.as_deref(), search.no_verify);
    let client = SearchClient::new(transport);
    let data = client.news(&super::query_from(cfg, search))?;
    tracing::info!(count = data.len(), "news search complete");

    super::render(&data, search, false, "news")
}
