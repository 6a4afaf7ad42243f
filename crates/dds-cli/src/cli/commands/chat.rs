//! `dds chat` – interactive AI chat with a persisted conversation.

use anyhow::{Context, Result};
use console::style;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;
use std::time::Duration;

use dds_core::chat::{ChatCache, ChatClient, ChatModel, CACHE_FILE};
use dds_core::config::DdsConfig;
use dds_core::transport::expand_proxy_alias;

pub fn run_chat(
    cfg: &DdsConfig,
    load: bool,
    model: ChatModel,
    multiline: bool,
    timeout: u64,
    proxy: Option<String>,
    no_verify: bool,
) -> Result<()> {
    let mut transport = cfg.transport(expand_proxy_alias(proxy.as_deref()), !no_verify);
    transport.timeout = Duration::from_secs(timeout);

    let mut client = ChatClient::new(transport, model);
    let cache_path = Path::new(CACHE_FILE);
    if load && cache_path.exists() {
        match ChatCache::load(cache_path) {
            Ok(cache) => {
                tracing::info!(messages = cache.messages.len(), "conversation restored");
                client.restore(cache);
            }
            Err(e) => tracing::warn!("could not load chat cache: {:#}", e),
        }
    }

    let stdin = io::stdin();
    loop {
        print!(
            "{}\nYou [model={} tokens={}]: ",
            "-".repeat(78),
            client.model().as_str(),
            client.tokens()
        );
        if multiline {
            println!("[multiline, send message: Ctrl+D]");
        }
        io::stdout().flush().context("flush stdout")?;

        let input = if multiline {
            let mut buf = String::new();
            stdin.lock().read_to_string(&mut buf).context("read input")?;
            buf
        } else {
            let mut line = String::new();
            if stdin.lock().read_line(&mut line).context("read input")? == 0 {
                println!();
                return Ok(());
            }
            line
        };
        let input = input.trim();
        if input.is_empty() {
            if multiline {
                // Ctrl+D with nothing typed ends the session.
                println!();
                return Ok(());
            }
            continue;
        }

        let answer = client.send(input)?;
        println!("{}", style(format!("AI: {}", answer)).green());

        client
            .snapshot()
            .save(cache_path)
            .context("persist conversation")?;
    }
}
