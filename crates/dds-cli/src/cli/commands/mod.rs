//! One module per subcommand, plus the shared render/transport glue.

mod chat;
mod images;
mod news;
mod text;
mod videos;

pub use chat::run_chat;
pub use images::run_images;
pub use news::run_news;
pub use text::run_text;
pub use videos::run_videos;

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use dds_core::config::DdsConfig;
use dds_core::download::file_stem;
use dds_core::output::{self, OutputFormat};
use dds_core::search::{Record, SearchQuery};
use dds_core::transport::{expand_proxy_alias, TransportConfig};

use super::{print, SearchArgs};

pub(super) fn transport_from(
    cfg: &DdsConfig,
    proxy: Option<&str>,
    no_verify: bool,
) -> TransportConfig {
    cfg.transport(expand_proxy_alias(proxy), !no_verify)
}

pub(super) fn query_from(cfg: &DdsConfig, args: &SearchArgs) -> SearchQuery {
    SearchQuery {
        keywords: args.keywords.clone(),
        region: args.region.clone().unwrap_or_else(|| cfg.region.clone()),
        safesearch: args.safesearch.into(),
        timelimit: args.timelimit.map(Into::into),
        max_results: args.max_results,
    }
}

fn output_path(mode: &str, keywords: &str, extension: &str) -> PathBuf {
    let stem = file_stem(mode, keywords, chrono::Local::now().naive_local());
    PathBuf::from(format!("{}.{}", stem, extension))
}

/// Renders or persists the records per `--output`. Printing is suppressed
/// while downloading, matching the progress bar owning the terminal.
pub(super) fn render<T: Record + Serialize>(
    records: &[T],
    args: &SearchArgs,
    downloading: bool,
    mode: &str,
) -> Result<()> {
    match OutputFormat::from(args.output) {
        OutputFormat::Print => {
            if !downloading {
                print::print_records(records);
            }
        }
        OutputFormat::Csv => {
            let path = output_path(mode, &args.keywords, "csv");
            output::save_csv(&path, records)?;
            tracing::info!(path = %path.display(), "results saved");
        }
        OutputFormat::Json => {
            let path = output_path(mode, &args.keywords, "json");
            output::save_json(&path, records)?;
            tracing::info!(path = %path.display(), "results saved");
        }
    }
    Ok(())
}
