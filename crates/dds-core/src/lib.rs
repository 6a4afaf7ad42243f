pub mod config;
pub mod logging;

pub mod chat;
pub mod download;
pub mod output;
pub mod search;
pub mod transport;
