//! indicatif-backed progress sink for bulk downloads.

use dds_core::download::ProgressSink;
use indicatif::{ProgressBar, ProgressStyle};

/// Terminal bar ticking once per completed download. Created lazily on
/// `begin`, so a batch that never starts renders nothing.
#[derive(Default)]
pub struct DownloadBar {
    bar: Option<ProgressBar>,
}

impl ProgressSink for DownloadBar {
    fn begin(&mut self, total: usize) {
        let bar = ProgressBar::new(total as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{msg} [{wide_bar}] {pos}/{len} ({percent}%)")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        bar.set_message("Downloading");
        self.bar = Some(bar);
    }

    fn advance(&mut self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
            if Some(bar.position()) == bar.length() {
                bar.finish();
            }
        }
    }
}
