//! `dds videos` – video search.

use anyhow::Result;
use dds_core::config::DdsConfig;
use dds_core::search::{SearchClient, VideoFilters};

use crate::cli::{SearchArgs, VideoFilterArgs};

pub fn run_videos(cfg: &DdsConfig, search: &SearchArgs, filters: &VideoFilterArgs) -> Result<()> {
    let transport = super::transport_from(cfg, search.proxy.as_deref(), search.no_verify);
    let client = SearchClient::new(transport);
    let filters = VideoFilters {
        resolution: filters.resolution.clone(),
        duration: filters.duration.clone(),
        license_videos: filters.license_videos.clone(),
    };
    let data = client.videos(&super::query_from(cfg, search), &filters)?;
    tracing::info!(count = data.len(), "video search complete");

    super::render(&data, search, false, "videos")
}
