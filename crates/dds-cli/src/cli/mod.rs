//! CLI for the DDS search client.

mod commands;
mod print;
mod progress;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use dds_core::config;
use dds_core::output::OutputFormat;
use dds_core::search::{SafeSearch, Timelimit};

use commands::{run_chat, run_images, run_news, run_text, run_videos};

/// Top-level CLI for the DDS search client.
#[derive(Debug, Parser)]
#[command(name = "dds")]
#[command(about = "DDS: search the web from the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Options shared by every search mode.
#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keywords for the query.
    #[arg(short, long)]
    pub keywords: String,

    /// Search region (wt-wt, us-en, ru-ru, ...). Defaults from config.
    #[arg(short, long)]
    pub region: Option<String>,

    /// Safesearch level.
    #[arg(short, long, value_enum, default_value = "moderate")]
    pub safesearch: SafeSearchArg,

    /// Restrict results by age: day, week, month, year.
    #[arg(short, long, value_enum)]
    pub timelimit: Option<TimelimitArg>,

    /// Maximum number of results.
    #[arg(short, long, default_value_t = 20)]
    pub max_results: usize,

    /// Where results go: print to the terminal, or save as csv/json.
    #[arg(short, long, value_enum, default_value = "print")]
    pub output: OutputArg,

    /// Proxy for all requests, e.g. socks5://127.0.0.1:9150 ("tb" = local Tor Browser).
    #[arg(short, long)]
    pub proxy: Option<String>,

    /// Skip TLS certificate verification.
    #[arg(long)]
    pub no_verify: bool,
}

/// Bulk-download options (text and images modes).
#[derive(Debug, Args)]
pub struct DownloadArgs {
    /// Download every result into a keywords-named folder.
    #[arg(short, long)]
    pub download: bool,

    /// Download worker threads. Defaults from config (10).
    #[arg(long)]
    pub threads: Option<usize>,
}

/// Image-mode filters (values as the engine expects them).
#[derive(Debug, Args)]
pub struct ImageFilterArgs {
    #[arg(long, value_parser = ["Small", "Medium", "Large", "Wallpaper"])]
    pub size: Option<String>,

    #[arg(long, value_parser = ["color", "Monochrome", "Red", "Orange", "Yellow", "Green",
        "Blue", "Purple", "Pink", "Brown", "Black", "Gray", "Teal", "White"])]
    pub color: Option<String>,

    #[arg(long, value_parser = ["photo", "clipart", "gif", "transparent", "line"])]
    pub type_image: Option<String>,

    #[arg(long, value_parser = ["Square", "Tall", "Wide"])]
    pub layout: Option<String>,

    #[arg(long, value_parser = ["any", "Public", "Share", "ShareCommercially", "Modify",
        "ModifyCommercially"])]
    pub license_image: Option<String>,
}

/// Video-mode filters.
#[derive(Debug, Args)]
pub struct VideoFilterArgs {
    #[arg(long, value_parser = ["high", "standard"])]
    pub resolution: Option<String>,

    #[arg(long, value_parser = ["short", "medium", "long"])]
    pub duration: Option<String>,

    #[arg(long, value_parser = ["creativeCommon", "youtube"])]
    pub license_videos: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Text search, optionally bulk-downloading the result pages.
    Text {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        download: DownloadArgs,
    },

    /// Image search, optionally bulk-downloading the image files.
    Images {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        download: DownloadArgs,
        #[command(flatten)]
        filters: ImageFilterArgs,
    },

    /// News search.
    News {
        #[command(flatten)]
        search: SearchArgs,
    },

    /// Video search.
    Videos {
        #[command(flatten)]
        search: SearchArgs,
        #[command(flatten)]
        filters: VideoFilterArgs,
    },

    /// Interactive AI chat with a persisted conversation.
    Chat {
        /// Load the last conversation from the json cache.
        #[arg(short, long)]
        load: bool,

        /// Model to chat with.
        #[arg(short, long, value_enum, default_value = "gpt-4o-mini")]
        model: ChatModelArg,

        /// Multi-line input (send with Ctrl+D).
        #[arg(long)]
        multiline: bool,

        /// HTTP timeout in seconds for chat requests.
        #[arg(short, long, default_value_t = 30)]
        timeout: u64,

        /// Proxy for all requests ("tb" = local Tor Browser).
        #[arg(short, long)]
        proxy: Option<String>,

        /// Skip TLS certificate verification.
        #[arg(long)]
        no_verify: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SafeSearchArg {
    On,
    Moderate,
    Off,
}

impl From<SafeSearchArg> for SafeSearch {
    fn from(arg: SafeSearchArg) -> Self {
        match arg {
            SafeSearchArg::On => SafeSearch::On,
            SafeSearchArg::Moderate => SafeSearch::Moderate,
            SafeSearchArg::Off => SafeSearch::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimelimitArg {
    D,
    W,
    M,
    Y,
}

impl From<TimelimitArg> for Timelimit {
    fn from(arg: TimelimitArg) -> Self {
        match arg {
            TimelimitArg::D => Timelimit::Day,
            TimelimitArg::W => Timelimit::Week,
            TimelimitArg::M => Timelimit::Month,
            TimelimitArg::Y => Timelimit::Year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputArg {
    Print,
    Csv,
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Print => OutputFormat::Print,
            OutputArg::Csv => OutputFormat::Csv,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChatModelArg {
    #[value(name = "gpt-4o-mini")]
    Gpt4oMini,
    #[value(name = "claude-3-haiku")]
    Claude3Haiku,
    #[value(name = "llama-3.1-70b")]
    Llama70b,
    #[value(name = "mixtral-8x7b")]
    Mixtral8x7b,
}

impl From<ChatModelArg> for dds_core::chat::ChatModel {
    fn from(arg: ChatModelArg) -> Self {
        use dds_core::chat::ChatModel;
        match arg {
            ChatModelArg::Gpt4oMini => ChatModel::Gpt4oMini,
            ChatModelArg::Claude3Haiku => ChatModel::Claude3Haiku,
            ChatModelArg::Llama70b => ChatModel::Llama70b,
            ChatModelArg::Mixtral8x7b => ChatModel::Mixtral8x7b,
        }
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Text { search, download } => run_text(&cfg, &search, &download)?,
            CliCommand::Images {
                search,
                download,
                filters,
            } => run_images(&cfg, &search, &download, &filters)?,
            CliCommand::News { search } => run_news(&cfg, &search)?,
            CliCommand::Videos { search, filters } => run_videos(&cfg, &search, &filters)?,
            CliCommand::Chat {
                load,
                model,
                multiline,
                timeout,
                proxy,
                no_verify,
            } => run_chat(&cfg, load, model.into(), multiline, timeout, proxy, no_verify)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
