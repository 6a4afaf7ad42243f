//! `dds images` – image search, optionally bulk-downloading image files.

use anyhow::Result;
use dds_core::config::DdsConfig;
use dds_core::download::{self, ResourceKind};
use dds_core::search::{ImageFilters, SearchClient};

use crate::cli::progress::DownloadBar;
use crate::cli::{DownloadArgs, ImageFilterArgs, SearchArgs};

pub fn run_images(
    cfg: &DdsConfig,
    search: &SearchArgs,
    dl: &DownloadArgs,
    filters: &ImageFilterArgs,
) -> Result<()> {
    let transport = super::transport_from(cfg, search.proxy.as_deref(), search.no_verify);
    let client = SearchClient::new(transport.clone());
    let filters = ImageFilters {
        size: filters.size.clone(),
        color: filters.color.clone(),
        type_image: filters.type_image.clone(),
        layout: filters.layout.clone(),
        license_image: filters.license_image.clone(),
    };
    let data = client.images(&super::query_from(cfg, search), &filters)?;
    tracing::info!(count = data.len(), "image search complete");

    super::render(&data, search, dl.download, "images")?;

    if dl.download {
        let urls: Vec<String> = data.iter().map(|r| r.image.clone()).collect();
        let mut bar = DownloadBar::default();
        download::download_results(
            &search.keywords,
            &urls,
            ResourceKind::Image,
            &std::env::current_dir()?,
            &transport,
            dl.threads.unwrap_or(cfg.download_threads),
            &mut bar,
        )?;
    }
    Ok(())
}
